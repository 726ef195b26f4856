//! Daily limits, overdraft and wire fee policies, and the account fee
//! waivers.
//!
//! The limit checks answer yes or no for a single prospective transaction;
//! running totals and occurrence counts are the caller's state. Fee
//! functions price one occurrence and never accumulate.

use serde::{Deserialize, Serialize};

use crate::types::{bps_of, narrow, Bps, Money, BPS_SCALE};

/// Flat overdraft fee with a daily occurrence cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdraftPolicy {
    pub fee_per_occurrence: Money,
    pub max_daily_fees: i64,
}

/// Wire pricing: a flat base plus a percentage of the amount.
/// International wires pay double the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFeeSchedule {
    pub base_fee: Money,
    pub rate_bps: Bps,
}

/// Whether one more transaction of `amount` stays within the daily limit.
pub fn within_daily_limit(amount: Money, daily_total: Money, daily_limit: Money) -> bool {
    if amount < 0 || daily_total < 0 || daily_limit < 0 {
        return false;
    }
    daily_total as i128 + amount as i128 <= daily_limit as i128
}

/// Allowance left under the daily limit, never negative.
pub fn remaining_daily_limit(daily_total: Money, daily_limit: Money) -> Money {
    if daily_total < 0 || daily_limit < 0 {
        return 0;
    }
    (daily_limit - daily_total).max(0)
}

/// Whether another withdrawal is allowed today.
pub fn withdrawal_frequency_ok(withdrawals_today: i64, max_withdrawals: i64) -> bool {
    if withdrawals_today < 0 || max_withdrawals < 0 {
        return false;
    }
    withdrawals_today < max_withdrawals
}

/// Fee for one overdraft occurrence, 0 once the daily cap is reached or
/// when there is no overdraft at all.
pub fn overdraft_fee(overdraft_amount: Money, fees_today: i64, policy: &OverdraftPolicy) -> Money {
    if overdraft_amount <= 0 || policy.fee_per_occurrence < 0 {
        return 0;
    }
    if fees_today.max(0) >= policy.max_daily_fees.max(0) {
        return 0;
    }
    policy.fee_per_occurrence
}

/// Price a wire: base fee plus a percentage of the amount, the total
/// doubled when the wire is not domestic.
pub fn wire_transfer_fee(amount: Money, domestic: bool, schedule: &WireFeeSchedule) -> Money {
    if amount < 0 || schedule.base_fee < 0 || schedule.rate_bps < 0 {
        return 0;
    }
    let mut fee =
        schedule.base_fee as i128 + amount as i128 * schedule.rate_bps as i128 / BPS_SCALE as i128;
    if !domestic {
        fee *= 2;
    }
    narrow(fee)
}

/// Monthly maintenance fee, waived at or above the threshold balance.
pub fn monthly_maintenance_fee(
    balance: Money,
    fee_amount: Money,
    waiver_threshold: Money,
) -> Money {
    if balance < 0 || fee_amount < 0 {
        return 0;
    }
    if balance >= waiver_threshold.max(0) {
        return 0;
    }
    fee_amount
}

/// ATM withdrawal fee; in-network machines are free.
pub fn atm_fee(in_network: bool, out_of_network_fee: Money) -> Money {
    if out_of_network_fee < 0 {
        return 0;
    }
    if in_network {
        return 0;
    }
    out_of_network_fee
}

/// Percentage fee on a foreign-currency transaction.
pub fn foreign_transaction_fee(amount: Money, rate_bps: Bps) -> Money {
    if amount < 0 || rate_bps < 0 {
        return 0;
    }
    bps_of(amount, rate_bps)
}

/// Paper statement fee, waived by paperless enrollment.
pub fn paper_statement_fee(enrolled_paperless: bool, paper_fee: Money) -> Money {
    if paper_fee < 0 {
        return 0;
    }
    if enrolled_paperless {
        return 0;
    }
    paper_fee
}

/// Sum of the strictly positive fees in a statement cycle.
pub fn sum_monthly_fees(fees: &[Money]) -> Money {
    narrow(fees.iter().filter(|&&f| f > 0).map(|&f| f as i128).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_overdraft() -> OverdraftPolicy {
        OverdraftPolicy {
            fee_per_occurrence: 3_500,
            max_daily_fees: 3,
        }
    }

    fn standard_wire() -> WireFeeSchedule {
        WireFeeSchedule {
            base_fee: 1_500,
            rate_bps: 10,
        }
    }

    #[test]
    fn daily_limit_check_is_inclusive() {
        assert!(within_daily_limit(100, 900, 1_000));
        assert!(!within_daily_limit(101, 900, 1_000));
        assert!(within_daily_limit(0, 1_000, 1_000));
    }

    #[test]
    fn daily_limit_check_rejects_negatives() {
        assert!(!within_daily_limit(-1, 900, 1_000));
        assert!(!within_daily_limit(100, -1, 1_000));
        assert!(!within_daily_limit(100, 900, -1));
    }

    #[test]
    fn remaining_limit_floors_at_zero() {
        assert_eq!(remaining_daily_limit(900, 1_000), 100);
        assert_eq!(remaining_daily_limit(1_100, 1_000), 0);
        assert_eq!(remaining_daily_limit(-1, 1_000), 0);
        assert_eq!(remaining_daily_limit(900, -1), 0);
    }

    #[test]
    fn withdrawal_frequency_stops_at_the_cap() {
        assert!(withdrawal_frequency_ok(5, 6));
        assert!(!withdrawal_frequency_ok(6, 6));
        assert!(!withdrawal_frequency_ok(-1, 6));
        assert!(!withdrawal_frequency_ok(5, -1));
    }

    #[test]
    fn overdraft_fee_is_flat_per_occurrence() {
        let policy = standard_overdraft();
        assert_eq!(overdraft_fee(100, 0, &policy), 3_500);
        assert_eq!(overdraft_fee(100, 2, &policy), 3_500);
    }

    #[test]
    fn overdraft_fee_stops_at_the_daily_cap() {
        let policy = standard_overdraft();
        assert_eq!(overdraft_fee(100, 3, &policy), 0);
        assert_eq!(overdraft_fee(100, 4, &policy), 0);
    }

    #[test]
    fn no_overdraft_means_no_fee() {
        let policy = standard_overdraft();
        assert_eq!(overdraft_fee(0, 0, &policy), 0);
        assert_eq!(overdraft_fee(-100, 0, &policy), 0);
    }

    #[test]
    fn overdraft_fee_sanitizes_the_policy_and_tally() {
        assert_eq!(overdraft_fee(100, -2, &standard_overdraft()), 3_500);
        let negative_fee = OverdraftPolicy { fee_per_occurrence: -1, max_daily_fees: 3 };
        assert_eq!(overdraft_fee(100, 0, &negative_fee), 0);
        let no_cap = OverdraftPolicy { fee_per_occurrence: 3_500, max_daily_fees: -1 };
        assert_eq!(overdraft_fee(100, 0, &no_cap), 0);
    }

    #[test]
    fn domestic_wire_pays_base_plus_percentage() {
        // 1500 + 100000 * 10 / 10000.
        assert_eq!(wire_transfer_fee(100_000, true, &standard_wire()), 1_600);
    }

    #[test]
    fn international_wire_pays_double() {
        assert_eq!(wire_transfer_fee(100_000, false, &standard_wire()), 3_200);
    }

    #[test]
    fn wire_fee_rejects_negatives() {
        let schedule = standard_wire();
        assert_eq!(wire_transfer_fee(-1, true, &schedule), 0);
        let bad_base = WireFeeSchedule { base_fee: -1, rate_bps: 10 };
        assert_eq!(wire_transfer_fee(100_000, true, &bad_base), 0);
        let bad_rate = WireFeeSchedule { base_fee: 1_500, rate_bps: -1 };
        assert_eq!(wire_transfer_fee(100_000, true, &bad_rate), 0);
    }

    #[test]
    fn maintenance_fee_waives_at_the_threshold() {
        assert_eq!(monthly_maintenance_fee(150_000, 1_200, 100_000), 0);
        assert_eq!(monthly_maintenance_fee(100_000, 1_200, 100_000), 0);
        assert_eq!(monthly_maintenance_fee(50_000, 1_200, 100_000), 1_200);
    }

    #[test]
    fn maintenance_fee_sanitizes_inputs() {
        assert_eq!(monthly_maintenance_fee(-1, 1_200, 100_000), 0);
        assert_eq!(monthly_maintenance_fee(50_000, -1, 100_000), 0);
        // Negative threshold clamps to 0, so any sane balance waives.
        assert_eq!(monthly_maintenance_fee(50_000, 1_200, -1), 0);
    }

    #[test]
    fn atm_fee_applies_out_of_network_only() {
        assert_eq!(atm_fee(true, 300), 0);
        assert_eq!(atm_fee(false, 300), 300);
        assert_eq!(atm_fee(false, -1), 0);
    }

    #[test]
    fn foreign_transaction_fee_is_proportional() {
        assert_eq!(foreign_transaction_fee(10_000, 300), 300);
        assert_eq!(foreign_transaction_fee(999, 300), 29);
        assert_eq!(foreign_transaction_fee(-1, 300), 0);
        assert_eq!(foreign_transaction_fee(10_000, -1), 0);
    }

    #[test]
    fn paper_statement_fee_waives_for_paperless() {
        assert_eq!(paper_statement_fee(true, 200), 0);
        assert_eq!(paper_statement_fee(false, 200), 200);
        assert_eq!(paper_statement_fee(false, -1), 0);
    }

    #[test]
    fn monthly_fees_sum_positive_entries_only() {
        assert_eq!(sum_monthly_fees(&[1_200, 300, -50, 0]), 1_500);
        assert_eq!(sum_monthly_fees(&[]), 0);
    }
}
