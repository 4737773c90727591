//! Net balance tracking across users.
//!
//! A [`BalanceSheet`] holds one signed balance per user: positive = net
//! creditor, negative = net debtor, zero = settled. It is backed by a
//! `BTreeMap`, so iteration is always ascending by user id — this ordering
//! is the determinism contract the debt simplifier relies on, not an
//! incidental insertion order.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::UserId;

/// Signed net balances per user, iterated in ascending user-id order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    balances: BTreeMap<UserId, Decimal>,
}

impl BalanceSheet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: BTreeMap::new(),
        }
    }

    /// Increase a user's balance (they are owed more).
    pub fn credit(&mut self, user_id: UserId, amount: Decimal) {
        *self.balances.entry(user_id).or_insert(Decimal::ZERO) += amount;
    }

    /// Decrease a user's balance (they owe more).
    pub fn debit(&mut self, user_id: UserId, amount: Decimal) {
        *self.balances.entry(user_id).or_insert(Decimal::ZERO) -= amount;
    }

    /// The signed balance for a user; absent users read as zero.
    #[must_use]
    pub fn balance(&self, user_id: UserId) -> Decimal {
        self.balances.get(&user_id).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of all balances. Exactly zero for a consistent ledger.
    #[must_use]
    pub fn net_total(&self) -> Decimal {
        self.balances.values().copied().sum()
    }

    /// Whether every balance is within `tolerance` of zero.
    #[must_use]
    pub fn is_settled(&self, tolerance: Decimal) -> bool {
        self.balances.values().all(|b| b.abs() <= tolerance)
    }

    /// Ascending user-id iteration over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, Decimal)> + '_ {
        self.balances.iter().map(|(&u, &b)| (u, b))
    }

    /// Ascending user-id iteration over entries with a non-zero balance.
    pub fn non_zero(&self) -> impl Iterator<Item = (UserId, Decimal)> + '_ {
        self.iter().filter(|(_, b)| !b.is_zero())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl FromIterator<(UserId, Decimal)> for BalanceSheet {
    fn from_iter<T: IntoIterator<Item = (UserId, Decimal)>>(iter: T) -> Self {
        let mut sheet = Self::new();
        for (user_id, amount) in iter {
            sheet.credit(user_id, amount);
        }
        sheet
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl BalanceSheet {
    /// A random sheet of `users` entries in whole cents that sums to
    /// exactly zero — the last user absorbs the remainder.
    pub fn random_balanced(users: usize, max_cents: i64) -> Self {
        use rand::Rng;
        assert!(users >= 2, "a balanced sheet needs at least 2 users");
        let mut rng = rand::thread_rng();
        let mut sheet = Self::new();
        let mut running = Decimal::ZERO;
        for _ in 0..users - 1 {
            let cents = rng.gen_range(-max_cents..=max_cents);
            let amount = Decimal::new(cents, 2);
            sheet.credit(UserId::new(), amount);
            running += amount;
        }
        sheet.credit(UserId::new(), -running);
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BALANCE_TOLERANCE;

    #[test]
    fn credit_and_debit_accumulate() {
        let mut sheet = BalanceSheet::new();
        let user = UserId::new();
        sheet.credit(user, Decimal::new(100, 0));
        sheet.debit(user, Decimal::new(40, 0));
        assert_eq!(sheet.balance(user), Decimal::new(60, 0));
    }

    #[test]
    fn absent_user_reads_zero() {
        let sheet = BalanceSheet::new();
        assert_eq!(sheet.balance(UserId::new()), Decimal::ZERO);
    }

    #[test]
    fn net_total_sums_all_entries() {
        let sheet = BalanceSheet::from_iter([
            (UserId::from_bytes([1; 16]), Decimal::new(100, 0)),
            (UserId::from_bytes([2; 16]), Decimal::new(-40, 0)),
            (UserId::from_bytes([3; 16]), Decimal::new(-60, 0)),
        ]);
        assert_eq!(sheet.net_total(), Decimal::ZERO);
        assert!(!sheet.is_settled(BALANCE_TOLERANCE));
    }

    #[test]
    fn iteration_is_ascending_by_user_id() {
        let sheet = BalanceSheet::from_iter([
            (UserId::from_bytes([3; 16]), Decimal::ONE),
            (UserId::from_bytes([1; 16]), Decimal::ONE),
            (UserId::from_bytes([2; 16]), Decimal::ONE),
        ]);
        let ids: Vec<UserId> = sheet.iter().map(|(u, _)| u).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn non_zero_skips_settled_users() {
        let mut sheet = BalanceSheet::new();
        let user = UserId::new();
        sheet.credit(user, Decimal::new(10, 0));
        sheet.debit(user, Decimal::new(10, 0));
        sheet.credit(UserId::new(), Decimal::new(5, 0));
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.non_zero().count(), 1);
    }

    #[test]
    fn random_balanced_sums_to_zero() {
        let sheet = BalanceSheet::random_balanced(10, 100_000);
        assert_eq!(sheet.net_total(), Decimal::ZERO);
        assert_eq!(sheet.len(), 10);
    }

    #[test]
    fn serde_roundtrip() {
        let sheet = BalanceSheet::from_iter([
            (UserId::new(), Decimal::new(12345, 2)),
            (UserId::new(), Decimal::new(-12345, 2)),
        ]);
        let json = serde_json::to_string(&sheet).unwrap();
        let back: BalanceSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(sheet, back);
    }
}
