//! Credit card operations and counterparty risk calculators.
//!
//! Charges authorize against the credit limit and decline without side
//! effects; the risk side scores utilization, debt load, and payment
//! history on a fixed 40/40/20 weighting.

use crate::types::{bps_of, mul3_div, pct_of, ratio_bps, Bps, Money, Outcome, BPS_SCALE};

const UTILIZATION_WEIGHT_PCT: i64 = 40;
const DTI_WEIGHT_PCT: i64 = 40;
const PAYMENT_HISTORY_WEIGHT_PCT: i64 = 20;

/// Divisor for products of two basis-point rates.
const EXPECTED_LOSS_DIVISOR: i64 = BPS_SCALE * BPS_SCALE;

/// Credit still available under the limit, never negative.
pub fn available_credit(credit_limit: Money, current_balance: Money) -> Money {
    if credit_limit < 0 {
        return 0;
    }
    (credit_limit - current_balance.max(0)).max(0)
}

/// Authorize a card charge against the limit.
///
/// Corrupt (negative) balance and limit clamp to 0 before the check. A
/// negative charge declines outright. On decline the outcome carries the
/// sanitized balance unchanged, even when that balance already sits above
/// the limit.
pub fn process_card_charge(balance: Money, charge: Money, credit_limit: Money) -> Outcome {
    let balance = balance.max(0);
    let credit_limit = credit_limit.max(0);
    if charge < 0 {
        return Outcome::Declined(balance);
    }
    let new_balance = balance as i128 + charge as i128;
    if new_balance > credit_limit as i128 {
        Outcome::Declined(balance)
    } else {
        Outcome::Applied(new_balance as Money)
    }
}

/// Pay down a card balance; overpayment settles at 0.
pub fn apply_card_payment(balance: Money, payment: Money) -> Money {
    if balance < 0 {
        return 0;
    }
    if payment < 0 {
        return balance;
    }
    (balance - payment).max(0)
}

/// Minimum payment due: the greater of a percentage of the balance and a
/// flat floor, but never more than the balance itself.
pub fn minimum_payment(balance: Money, rate_bps: Bps, floor: Money) -> Money {
    if balance <= 0 {
        return 0;
    }
    let rate_bps = rate_bps.max(0);
    let floor = floor.max(0);
    bps_of(balance, rate_bps).max(floor).min(balance)
}

/// Balance as basis points of the credit limit.
pub fn utilization_ratio(balance: Money, credit_limit: Money) -> Bps {
    if balance < 0 {
        return 0;
    }
    ratio_bps(balance, credit_limit)
}

/// Weighted risk score over utilization, DTI, and payment history.
/// Negative components clamp to 0; higher means riskier.
pub fn risk_score(utilization_bps: Bps, dti_bps: Bps, payment_history_score: i64) -> i64 {
    let utilization = pct_of(utilization_bps.max(0), UTILIZATION_WEIGHT_PCT);
    let dti = pct_of(dti_bps.max(0), DTI_WEIGHT_PCT);
    let history = pct_of(payment_history_score.max(0), PAYMENT_HISTORY_WEIGHT_PCT);
    utilization + dti + history
}

/// Exposure lost after recovery: `exposure * (10000 - recovery) / 10000`.
/// The recovery rate clamps into `[0, 10000]`.
pub fn loss_given_default(exposure: Money, recovery_rate_bps: Bps) -> Money {
    if exposure < 0 {
        return 0;
    }
    let recovery_rate_bps = recovery_rate_bps.clamp(0, BPS_SCALE);
    bps_of(exposure, BPS_SCALE - recovery_rate_bps)
}

/// Expected loss on an exposure: probability of default times loss given
/// default, both in basis points.
pub fn expected_loss(exposure: Money, pd_bps: Bps, lgd_bps: Bps) -> Money {
    if exposure < 0 || pd_bps < 0 || lgd_bps < 0 {
        return 0;
    }
    mul3_div(exposure, pd_bps, lgd_bps, EXPECTED_LOSS_DIVISOR)
}

/// Capital required against risk-weighted assets at a ratio in basis
/// points.
pub fn capital_requirement(risk_weighted_assets: Money, capital_ratio_bps: Bps) -> Money {
    if risk_weighted_assets < 0 || capital_ratio_bps < 0 {
        return 0;
    }
    bps_of(risk_weighted_assets, capital_ratio_bps)
}

/// Whether current capital covers the requirement. Negative figures read
/// as corrupt input and fail the check.
pub fn capital_adequacy(current_capital: Money, required_capital: Money) -> bool {
    if current_capital < 0 || required_capital < 0 {
        return false;
    }
    current_capital >= required_capital
}
