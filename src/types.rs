//! Shared fixed-point primitives: integer cents, integer basis points, and
//! the widening helpers the calculation modules build on.
//!
//! Every quantity in this crate is an integer. Division always truncates
//! toward zero, which is what `/` does on Rust integers. Products that can
//! outgrow `i64` are widened to `i128` first and narrowed back after the
//! division, clamping at the `i64` range so malformed magnitudes cannot
//! wrap or panic.

use serde::{Deserialize, Serialize};

/// Monetary amount in integer cents.
pub type Money = i64;

/// Rate or ratio in integer basis points. 1 bp = 0.01%.
pub type Bps = i64;

/// Basis points in one whole unit (100%).
pub const BPS_SCALE: i64 = 10_000;

/// Day count for annual-to-daily rate conversions.
pub const DAYS_PER_YEAR: i64 = 365;

/// Month count for annual-to-monthly rate conversions.
pub const MONTHS_PER_YEAR: i64 = 12;

/// A total loss, -100%, in basis points. Ratios that can go negative are
/// floored here.
pub const FULL_LOSS_BPS: Bps = -10_000;

/// Result of a balance-affecting operation that can decline.
///
/// Both variants carry a balance, so [`Outcome::balance`] always yields the
/// numeric result: the new balance when the operation applied, the
/// unchanged (sanitized) balance when it declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The operation went through; carries the new balance.
    Applied(Money),
    /// The operation did not go through; carries the prior balance.
    Declined(Money),
}

impl Outcome {
    /// The balance after the operation, whether or not it applied.
    pub fn balance(&self) -> Money {
        match *self {
            Outcome::Applied(balance) | Outcome::Declined(balance) => balance,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Outcome::Declined(_))
    }
}

/// `amount * rate_bps / 10000` with an `i128` intermediate.
pub fn bps_of(amount: Money, rate_bps: Bps) -> Money {
    narrow(amount as i128 * rate_bps as i128 / BPS_SCALE as i128)
}

/// `part` as basis points of `whole`, truncated toward zero. A `whole`
/// of zero or less has no meaningful ratio and yields 0.
pub fn ratio_bps(part: Money, whole: Money) -> Bps {
    if whole <= 0 {
        return 0;
    }
    narrow(part as i128 * BPS_SCALE as i128 / whole as i128)
}

/// `amount * percent / 100` with an `i128` intermediate.
pub fn pct_of(amount: Money, percent: i64) -> Money {
    narrow(amount as i128 * percent as i128 / 100)
}

/// `a * b * c / divisor` for three-factor products such as
/// principal-rate-days. The product saturates at the `i128` ceiling, which
/// only matters for magnitudes far outside any representable result.
pub(crate) fn mul3_div(a: i64, b: i64, c: i64, divisor: i64) -> i64 {
    let product = (a as i128).saturating_mul(b as i128).saturating_mul(c as i128);
    narrow(product / divisor as i128)
}

/// Narrow an `i128` intermediate back to `i64`, clamping at the type
/// bounds.
pub(crate) fn narrow(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
