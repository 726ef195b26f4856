//! Flat-rate tax batch calculators.
//!
//! Rates here are whole percent, not basis points; a flat-rate tax never
//! needs finer resolution and the clamp to `[0, 100]` keeps each levy
//! within the income it taxes.

use crate::types::{narrow, pct_of, Money};

const MAX_TAX_RATE_PCT: i64 = 100;

/// Total tax over a batch of incomes at a flat percent rate, truncating
/// per entry. The rate clamps into `[0, 100]`.
pub fn total_tax(incomes: &[Money], tax_rate_pct: i64) -> Money {
    let tax_rate_pct = tax_rate_pct.clamp(0, MAX_TAX_RATE_PCT);
    let mut total: i128 = 0;
    for &income in incomes {
        if income > 0 {
            total += pct_of(income, tax_rate_pct) as i128;
        }
    }
    narrow(total)
}

/// Total income retained after a fixed per-entry tax. Entries that do not
/// exceed the tax retain nothing; a negative fixed tax clamps to 0.
pub fn retained_income_total(incomes: &[Money], fixed_tax: Money) -> Money {
    let fixed_tax = fixed_tax.max(0);
    let mut total: i128 = 0;
    for &income in incomes {
        if income > fixed_tax {
            total += (income - fixed_tax) as i128;
        }
    }
    narrow(total)
}
