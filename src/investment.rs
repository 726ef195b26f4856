//! Portfolio valuation, return metrics, and book-level reporting
//! aggregates.
//!
//! Paired slices (quantities against prices or dividends) are combined
//! over their common prefix; a longer slice's tail is ignored rather than
//! treated as an error. Return and margin are the two calculators here
//! that may go negative, both floored at -10000 bps.

use crate::types::{bps_of, narrow, ratio_bps, Bps, Money, BPS_SCALE, FULL_LOSS_BPS};

/// Floor on the lifetime-value discount factor, 10% in basis points.
const MIN_DISCOUNT_FACTOR_BPS: i64 = 1_000;

/// Pairwise `quantity * value` over the common prefix, keeping only pairs
/// where both sides are positive.
fn paired_total(quantities: &[i64], per_unit: &[Money]) -> Money {
    let mut total: i128 = 0;
    for (&qty, &value) in quantities.iter().zip(per_unit) {
        if qty > 0 && value > 0 {
            total = total.saturating_add(qty as i128 * value as i128);
        }
    }
    narrow(total)
}

/// Total market value of the positions: `quantity * price` summed over
/// the common prefix of the two slices.
pub fn portfolio_value(quantities: &[i64], prices: &[Money]) -> Money {
    paired_total(quantities, prices)
}

/// One position's share of the portfolio in basis points.
pub fn position_weight_bps(position_value: Money, portfolio_value: Money) -> Bps {
    if position_value < 0 {
        return 0;
    }
    ratio_bps(position_value, portfolio_value)
}

/// Return on an investment in basis points, truncated toward zero and
/// floored at -10000. A non-positive initial value has no defined return;
/// a negative final value reads as a full loss.
pub fn calculate_return(initial_value: Money, final_value: Money) -> Bps {
    if initial_value <= 0 {
        return 0;
    }
    if final_value < 0 {
        return FULL_LOSS_BPS;
    }
    ratio_bps(final_value - initial_value, initial_value).max(FULL_LOSS_BPS)
}

/// Annual dividend as basis points of the share price.
pub fn dividend_yield_bps(annual_dividend: Money, share_price: Money) -> Bps {
    if annual_dividend < 0 {
        return 0;
    }
    ratio_bps(annual_dividend, share_price)
}

/// Average cost per share, truncating.
pub fn cost_basis_average(total_cost: Money, total_shares: i64) -> Money {
    if total_cost < 0 || total_shares <= 0 {
        return 0;
    }
    total_cost / total_shares
}

/// Unrealized gain or loss on a holding: price movement times shares,
/// deliberately unclamped in either direction.
pub fn unrealized_gain(current_price: Money, cost_basis: Money, shares: i64) -> Money {
    if shares <= 0 {
        return 0;
    }
    narrow((current_price as i128 - cost_basis as i128) * shares as i128)
}

/// Expected dividend income: `quantity * dividend_per_share` summed over
/// the common prefix of the two slices.
pub fn sum_dividends(quantities: &[i64], dividends_per_share: &[Money]) -> Money {
    paired_total(quantities, dividends_per_share)
}

/// Gross income less expenses, both floored at 0 first. The result may be
/// negative.
pub fn net_income(gross_income: Money, total_expenses: Money) -> Money {
    gross_income.max(0) - total_expenses.max(0)
}

/// Expenses as basis points of revenue.
pub fn expense_ratio_bps(expenses: Money, revenue: Money) -> Bps {
    if expenses < 0 {
        return 0;
    }
    ratio_bps(expenses, revenue)
}

/// Profit as basis points of revenue, truncated toward zero and floored
/// at -10000.
pub fn profit_margin_bps(profit: Money, revenue: Money) -> Bps {
    if revenue <= 0 {
        return 0;
    }
    ratio_bps(profit, revenue).max(FULL_LOSS_BPS)
}

/// Number of balances at or above the tier threshold. A negative
/// threshold clamps to 0.
pub fn count_by_balance_tier(balances: &[Money], tier_threshold: Money) -> usize {
    let tier_threshold = tier_threshold.max(0);
    balances.iter().filter(|&&b| b >= tier_threshold).count()
}

/// Truncating mean over the non-negative balances; zeros count toward the
/// average, negatives do not.
pub fn average_balance(balances: &[Money]) -> Money {
    let mut total: i128 = 0;
    let mut count: i128 = 0;
    for &balance in balances {
        if balance >= 0 {
            total += balance as i128;
            count += 1;
        }
    }
    if count == 0 {
        return 0;
    }
    narrow(total / count)
}

/// Total assets under management: the strictly positive balances summed.
pub fn total_assets_under_management(balances: &[Money]) -> Money {
    narrow(balances.iter().filter(|&&b| b > 0).map(|&b| b as i128).sum())
}

/// Total interest payout over a batch of balances at a flat rate,
/// truncated per entry rather than once over the summed balances. Only
/// strictly positive per-entry interest accumulates, so a negative rate
/// pays nothing and the total is never negative.
pub fn sum_interest(balances: &[Money], rate_bps: Bps) -> Money {
    let mut total: i128 = 0;
    for &balance in balances {
        if balance > 0 {
            let interest = bps_of(balance, rate_bps);
            if interest > 0 {
                total = total.saturating_add(interest as i128);
            }
        }
    }
    narrow(total)
}

/// Revenue over the expected lifetime, discounted by a linear factor of
/// the discount rate and floored at 10% of the undiscounted figure.
pub fn customer_lifetime_value(
    avg_annual_revenue: Money,
    avg_lifetime_years: i64,
    discount_rate_bps: Bps,
) -> Money {
    if avg_annual_revenue < 0 || avg_lifetime_years < 0 {
        return 0;
    }
    let discount_rate_bps = discount_rate_bps.max(0);
    let mut clv = avg_annual_revenue as i128 * avg_lifetime_years as i128;
    if discount_rate_bps > 0 {
        let factor = (BPS_SCALE as i128
            - discount_rate_bps as i128 * avg_lifetime_years as i128 / 2)
            .max(MIN_DISCOUNT_FACTOR_BPS as i128);
        clv = clv.saturating_mul(factor) / BPS_SCALE as i128;
    }
    narrow(clv)
}
