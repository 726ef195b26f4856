//! Account balance primitives, transfers, and transaction batch helpers.
//!
//! Balance-affecting operations sanitize their inputs, then either apply
//! the change or decline it, handing back the prior balance. Callers read
//! the [`Outcome`] tag to tell the two apart.
//!
//! Transfers are two independent legs with a caller-owned ordering
//! contract: run [`transfer_source`] first, derive the approval flag from
//! its outcome, and only then run [`transfer_dest`]. The legs are not
//! atomic, and a destination credit without a matching applied debit is a
//! caller error this module cannot detect.

use serde::{Deserialize, Serialize};

use crate::types::{bps_of, narrow, Money, Outcome};

/// Account categories with fixed minimum-balance requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Checking,
    Savings,
    MoneyMarket,
    CertificateOfDeposit,
    Retirement,
    /// Unrecognized type code. Resolving to a named variant instead of a
    /// catch-all default keeps the mapping closed.
    Unknown,
}

impl AccountType {
    /// Resolve a raw account-type code. Codes 0 through 4 map in
    /// declaration order; anything else is `Unknown`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => AccountType::Checking,
            1 => AccountType::Savings,
            2 => AccountType::MoneyMarket,
            3 => AccountType::CertificateOfDeposit,
            4 => AccountType::Retirement,
            _ => AccountType::Unknown,
        }
    }

    /// Minimum balance the account type must maintain.
    pub fn minimum_balance(&self) -> Money {
        match self {
            AccountType::Checking => 100,
            AccountType::Savings => 500,
            AccountType::MoneyMarket => 2500,
            AccountType::CertificateOfDeposit => 1000,
            AccountType::Retirement | AccountType::Unknown => 0,
        }
    }
}

/// Per-transaction fee parameters: a rate plus a floor and cap on the
/// resulting fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub rate_bps: i64,
    pub min_fee: Money,
    pub max_fee: Money,
}

/// Opening balance for a new account. Negative deposits open at zero.
pub fn create_balance(initial_deposit: Money) -> Money {
    initial_deposit.max(0)
}

/// Minimum required balance for a raw account-type code. A negative
/// balance reads as corrupt state and requires nothing regardless of type.
pub fn minimum_balance(account_type_code: i64, balance: Money) -> Money {
    if balance < 0 {
        return 0;
    }
    AccountType::from_code(account_type_code).minimum_balance()
}

/// Whether a withdrawal can go through while leaving at least
/// `minimum_balance` behind. Non-positive amounts always authorize, as the
/// corresponding withdrawal is a no-op.
pub fn sufficient_funds(balance: Money, amount: Money, minimum_balance: Money) -> bool {
    if balance < 0 || minimum_balance < 0 {
        return false;
    }
    if amount <= 0 {
        return true;
    }
    balance - amount >= minimum_balance
}

/// Withdraw `amount` without breaking the minimum-balance floor.
///
/// A corrupt (negative) balance or minimum declines with a balance of 0.
/// Non-positive amounts apply as no-ops. Agrees with [`sufficient_funds`]:
/// the outcome is `Applied` exactly when that check passes.
pub fn process_withdrawal(balance: Money, amount: Money, minimum_balance: Money) -> Outcome {
    if balance < 0 || minimum_balance < 0 {
        return Outcome::Declined(0);
    }
    if amount <= 0 {
        return Outcome::Applied(balance);
    }
    let remaining = balance - amount;
    if remaining >= minimum_balance {
        Outcome::Applied(remaining)
    } else {
        Outcome::Declined(balance)
    }
}

/// Deposit `amount` into `balance`. A corrupt (negative) balance resets to
/// 0 and the amount is ignored; non-positive amounts leave the balance
/// unchanged.
pub fn process_deposit(balance: Money, amount: Money) -> Money {
    if balance < 0 {
        return 0;
    }
    if amount <= 0 {
        return balance;
    }
    balance.saturating_add(amount)
}

/// Source leg of a transfer: debit `amount` plus `fee` if the balance
/// covers both. Negative amounts and fees clamp to 0 before the check.
pub fn transfer_source(source_balance: Money, amount: Money, fee: Money) -> Outcome {
    if source_balance < 0 {
        return Outcome::Declined(0);
    }
    let total = amount.max(0) as i128 + fee.max(0) as i128;
    if source_balance as i128 >= total {
        Outcome::Applied(source_balance - total as Money)
    } else {
        Outcome::Declined(source_balance)
    }
}

/// Destination leg of a transfer: credit `amount` when the source leg
/// applied. `approved` must come from the source leg's outcome; see the
/// module docs for the ordering contract.
pub fn transfer_dest(dest_balance: Money, amount: Money, approved: bool) -> Money {
    if dest_balance < 0 {
        return 0;
    }
    if amount < 0 {
        return dest_balance;
    }
    if approved {
        dest_balance.saturating_add(amount)
    } else {
        dest_balance
    }
}

/// Whether `amount` is an acceptable transaction value: strictly positive
/// and within a non-negative limit.
pub fn validate_transaction_amount(amount: Money, max_limit: Money) -> bool {
    if max_limit < 0 {
        return false;
    }
    amount > 0 && amount <= max_limit
}

/// Percentage fee for a transaction, clamped into the schedule's
/// `[min_fee, max_fee]` band. An inverted band raises the cap to the
/// floor. Negative amount, rate, or floor yields no fee.
pub fn transaction_fee(amount: Money, schedule: &FeeSchedule) -> Money {
    if amount < 0 || schedule.rate_bps < 0 || schedule.min_fee < 0 {
        return 0;
    }
    let max_fee = schedule.max_fee.max(schedule.min_fee);
    bps_of(amount, schedule.rate_bps).clamp(schedule.min_fee, max_fee)
}

/// Sum of the strictly positive amounts in a batch.
pub fn sum_transactions(amounts: &[Money]) -> Money {
    narrow(amounts.iter().filter(|&&a| a > 0).map(|&a| a as i128).sum())
}

/// Number of amounts within the closed `[min_amount, max_amount]` range.
/// A negative minimum clamps to 0 and an inverted maximum clamps up to the
/// minimum.
pub fn count_in_range(amounts: &[Money], min_amount: Money, max_amount: Money) -> usize {
    let min_amount = min_amount.max(0);
    let max_amount = max_amount.max(min_amount);
    amounts
        .iter()
        .filter(|&&a| a >= min_amount && a <= max_amount)
        .count()
}

/// Truncating mean of the strictly positive amounts; 0 when there are
/// none.
pub fn average_transaction(amounts: &[Money]) -> Money {
    let mut total: i128 = 0;
    let mut count: i128 = 0;
    for &amount in amounts {
        if amount > 0 {
            total += amount as i128;
            count += 1;
        }
    }
    if count == 0 {
        return 0;
    }
    narrow(total / count)
}
