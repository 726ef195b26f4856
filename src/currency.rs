//! Batch currency conversion and per-transaction exchange fees.
//!
//! Batches tolerate junk entries: only strictly positive amounts convert
//! or attract a fee.

use crate::types::{narrow, Money};

/// Convert a batch at a fixed exchange rate, summing `amount * rate` over
/// the strictly positive amounts. A non-positive rate converts nothing.
pub fn convert_batch(amounts: &[Money], rate: i64) -> Money {
    if rate <= 0 {
        return 0;
    }
    let mut total: i128 = 0;
    for &amount in amounts {
        if amount > 0 {
            total = total.saturating_add(amount as i128 * rate as i128);
        }
    }
    narrow(total)
}

/// Flat exchange fee charged once per strictly positive amount in the
/// batch. A negative per-transaction fee clamps to 0.
pub fn exchange_fee_total(amounts: &[Money], fee_per_tx: Money) -> Money {
    let fee_per_tx = fee_per_tx.max(0);
    let charged = amounts.iter().filter(|&&a| a > 0).count();
    narrow(charged as i128 * fee_per_tx as i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_skips_non_positive_amounts() {
        assert_eq!(convert_batch(&[100, -50, 200, 0], 150), 45_000);
        assert_eq!(convert_batch(&[], 150), 0);
        assert_eq!(convert_batch(&[-1, -2], 150), 0);
    }

    #[test]
    fn conversion_needs_a_positive_rate() {
        assert_eq!(convert_batch(&[100, 200], 0), 0);
        assert_eq!(convert_batch(&[100, 200], -5), 0);
    }

    #[test]
    fn exchange_fee_charges_per_converted_transaction() {
        assert_eq!(exchange_fee_total(&[100, -50, 200], 25), 50);
        assert_eq!(exchange_fee_total(&[], 25), 0);
        assert_eq!(exchange_fee_total(&[-1, 0], 25), 0);
    }

    #[test]
    fn negative_exchange_fee_clamps_to_zero() {
        assert_eq!(exchange_fee_total(&[100, 200], -1), 0);
    }
}
