//! Interest accrual and loan amortization calculators.
//!
//! Rates are annual basis points unless a name says otherwise. Periodic
//! rates come from truncating division of the annual rate, so a rate too
//! small for the period count rounds to zero interest rather than erroring.

use crate::types::{
    bps_of, mul3_div, narrow, ratio_bps, Bps, Money, BPS_SCALE, DAYS_PER_YEAR, MONTHS_PER_YEAR,
};

/// Divisor turning `balance * annual_rate_bps` into a daily amount.
const DAILY_RATE_DIVISOR: i64 = BPS_SCALE * DAYS_PER_YEAR;

/// Divisor turning `principal * annual_rate_bps` into a monthly amount.
const MONTHLY_RATE_DIVISOR: i64 = BPS_SCALE * MONTHS_PER_YEAR;

/// Simple interest over a day count:
/// `principal * rate_bps * days / 3650000`.
pub fn simple_interest(principal: Money, rate_bps: Bps, days: i64) -> Money {
    if principal < 0 || rate_bps < 0 || days < 0 {
        return 0;
    }
    mul3_div(principal, rate_bps, days, DAILY_RATE_DIVISOR)
}

/// Final amount after annual compounding, one truncated interest step per
/// year. Zero years leaves the principal untouched.
pub fn compound_interest_annual(principal: Money, rate_bps: Bps, years: i64) -> Money {
    if principal < 0 || rate_bps < 0 || years < 0 {
        return 0;
    }
    let mut amount = principal;
    for _ in 0..years {
        let interest = bps_of(amount, rate_bps);
        // Once a year adds nothing, or the amount has hit the ceiling,
        // every later year repeats it.
        if interest == 0 || amount == Money::MAX {
            break;
        }
        amount = amount.saturating_add(interest);
    }
    amount
}

/// Annual percentage yield for a nominal rate compounded
/// `compounds_per_year` times, in basis points.
///
/// The periodic rate is `apr_bps / compounds_per_year` truncated, so an
/// APR smaller than the period count yields 0. A non-positive period count
/// means no compounding and the APR passes through.
pub fn apr_to_apy(apr_bps: Bps, compounds_per_year: i64) -> Bps {
    if apr_bps < 0 {
        return 0;
    }
    if compounds_per_year <= 0 {
        return apr_bps;
    }
    let growth = BPS_SCALE as i128 + (apr_bps / compounds_per_year) as i128;
    let mut multiplier = BPS_SCALE as i128;
    for _ in 0..compounds_per_year {
        let next = multiplier.saturating_mul(growth) / BPS_SCALE as i128;
        // Once an iteration leaves the multiplier unchanged, every later
        // one does too.
        if next == multiplier {
            break;
        }
        multiplier = next;
    }
    narrow(multiplier - BPS_SCALE as i128).max(0)
}

/// One day of interest on a balance at an annual rate.
pub fn daily_interest(balance: Money, annual_rate_bps: Bps) -> Money {
    if balance < 0 || annual_rate_bps < 0 {
        return 0;
    }
    narrow(balance as i128 * annual_rate_bps as i128 / DAILY_RATE_DIVISOR as i128)
}

/// Credit accrued interest onto a balance. Negative interest is not a
/// charge-back and leaves the balance alone.
pub fn apply_interest(balance: Money, interest: Money) -> Money {
    if balance < 0 {
        return 0;
    }
    if interest < 0 {
        return balance;
    }
    balance.saturating_add(interest)
}

/// Level monthly payment, as an even principal split plus one month of
/// interest on the full principal:
/// `principal / term_months + principal * annual_rate_bps / 120000`.
pub fn monthly_payment(principal: Money, annual_rate_bps: Bps, term_months: i64) -> Money {
    if principal < 0 || annual_rate_bps < 0 || term_months <= 0 {
        return 0;
    }
    let monthly_principal = (principal / term_months) as i128;
    let monthly_interest =
        principal as i128 * annual_rate_bps as i128 / MONTHLY_RATE_DIVISOR as i128;
    narrow(monthly_principal + monthly_interest)
}

/// Interest share of the next payment: one month of interest on the
/// outstanding balance.
pub fn loan_interest_portion(balance: Money, annual_rate_bps: Bps) -> Money {
    if balance < 0 || annual_rate_bps < 0 {
        return 0;
    }
    narrow(balance as i128 * annual_rate_bps as i128 / MONTHLY_RATE_DIVISOR as i128)
}

/// Principal share of a payment after the interest portion, floored at 0.
pub fn principal_portion(payment: Money, interest: Money) -> Money {
    if payment < 0 || interest < 0 {
        return 0;
    }
    (payment - interest).max(0)
}

/// Reduce a loan balance by a principal payment. Overpayment clears the
/// loan rather than going negative.
pub fn apply_loan_payment(balance: Money, principal_payment: Money) -> Money {
    if balance < 0 {
        return 0;
    }
    if principal_payment < 0 {
        return balance;
    }
    (balance - principal_payment).max(0)
}

/// Lifetime interest cost: payments in excess of the original principal.
pub fn total_interest_paid(original_principal: Money, total_payments: Money) -> Money {
    if original_principal < 0 || total_payments < 0 {
        return 0;
    }
    if total_payments <= original_principal {
        return 0;
    }
    total_payments - original_principal
}

/// Debt-to-income ratio in basis points. Non-positive income has no
/// meaningful ratio and yields 0.
pub fn debt_to_income_ratio(monthly_debt: Money, monthly_income: Money) -> Bps {
    if monthly_debt < 0 {
        return 0;
    }
    ratio_bps(monthly_debt, monthly_income)
}

/// Underwriting gate: DTI at or under the cap and credit score at or over
/// the floor. Negative DTI or score reads as corrupt input and fails.
pub fn loan_eligibility(
    dti_bps: Bps,
    max_dti_bps: Bps,
    credit_score: i64,
    min_credit_score: i64,
) -> bool {
    if dti_bps < 0 || credit_score < 0 {
        return false;
    }
    dti_bps <= max_dti_bps && credit_score >= min_credit_score
}
