//! Balance aggregation across expenses.
//!
//! The `Ledger` folds each expense's paid amounts and allocated owed
//! amounts into a running [`BalanceSheet`]: net balance = Σ paid − Σ owed.
//! Positive means others owe this user, negative means this user owes
//! others. The resulting sheet feeds [`crate::simplify_debts`].

use rust_decimal::Decimal;
use splitledger_types::{AllocationTable, BalanceSheet, Contribution, UserId};

/// Running per-user balances accumulated expense by expense.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    sheet: BalanceSheet,
    expenses_applied: usize,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sheet: BalanceSheet::new(),
            expenses_applied: 0,
        }
    }

    /// Fold one expense into the ledger: credit what each participant
    /// paid, debit what the allocator says they owe.
    ///
    /// For a consistent expense (paid amounts summing to the allocated
    /// total) this leaves the sheet's net total untouched.
    pub fn apply_allocation(
        &mut self,
        contributions: &[Contribution],
        allocations: &AllocationTable,
    ) {
        for contribution in contributions {
            let paid = contribution.paid_or_zero();
            if !paid.is_zero() {
                self.sheet.credit(contribution.user_id, paid);
            }
        }
        for allocation in allocations {
            self.sheet.debit(allocation.user_id, allocation.owed);
        }
        self.expenses_applied += 1;
        tracing::debug!(
            expenses_applied = self.expenses_applied,
            net = %self.sheet.net_total(),
            "applied expense allocation"
        );
    }

    /// Record a direct payment outside any expense (e.g. a reimbursement
    /// already made in cash): the payer's balance rises.
    pub fn record_payment(&mut self, user_id: UserId, amount: Decimal) {
        self.sheet.credit(user_id, amount);
    }

    /// Record a direct debt outside any expense: the user's balance falls.
    pub fn record_debt(&mut self, user_id: UserId, amount: Decimal) {
        self.sheet.debit(user_id, amount);
    }

    /// The current balance sheet.
    #[must_use]
    pub fn sheet(&self) -> &BalanceSheet {
        &self.sheet
    }

    /// Consume the ledger, yielding its sheet for simplification.
    #[must_use]
    pub fn into_sheet(self) -> BalanceSheet {
        self.sheet
    }

    /// Number of expenses folded in so far.
    #[must_use]
    pub fn expenses_applied(&self) -> usize {
        self.expenses_applied
    }
}

#[cfg(test)]
mod tests {
    use splitledger_types::{AllocationTable, SplitAllocation, constants::BALANCE_TOLERANCE};

    use super::*;

    fn user(n: u8) -> UserId {
        UserId::from_bytes([n; 16])
    }

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    /// One payer covers 100 split equally between two users.
    fn equal_dinner() -> (Vec<Contribution>, AllocationTable) {
        let contributions = vec![
            Contribution::new(user(1)).with_paid(dec(100)),
            Contribution::new(user(2)),
        ];
        let allocations = AllocationTable::new(vec![
            SplitAllocation {
                user_id: user(1),
                owed: dec(50),
            },
            SplitAllocation {
                user_id: user(2),
                owed: dec(50),
            },
        ]);
        (contributions, allocations)
    }

    #[test]
    fn single_expense_nets_paid_minus_owed() {
        let mut ledger = Ledger::new();
        let (contributions, allocations) = equal_dinner();
        ledger.apply_allocation(&contributions, &allocations);

        assert_eq!(ledger.sheet().balance(user(1)), dec(50));
        assert_eq!(ledger.sheet().balance(user(2)), dec(-50));
        assert_eq!(ledger.sheet().net_total(), Decimal::ZERO);
        assert_eq!(ledger.expenses_applied(), 1);
    }

    #[test]
    fn expenses_accumulate() {
        let mut ledger = Ledger::new();
        let (contributions, allocations) = equal_dinner();
        ledger.apply_allocation(&contributions, &allocations);

        // Second dinner, roles reversed.
        let contributions = vec![
            Contribution::new(user(1)),
            Contribution::new(user(2)).with_paid(dec(100)),
        ];
        let allocations = AllocationTable::new(vec![
            SplitAllocation {
                user_id: user(1),
                owed: dec(50),
            },
            SplitAllocation {
                user_id: user(2),
                owed: dec(50),
            },
        ]);
        ledger.apply_allocation(&contributions, &allocations);

        assert!(ledger.sheet().is_settled(BALANCE_TOLERANCE));
        assert_eq!(ledger.expenses_applied(), 2);
    }

    #[test]
    fn direct_payment_and_debt() {
        let mut ledger = Ledger::new();
        ledger.record_payment(user(1), dec(30));
        ledger.record_debt(user(2), dec(30));

        assert_eq!(ledger.sheet().balance(user(1)), dec(30));
        assert_eq!(ledger.sheet().balance(user(2)), dec(-30));
        assert_eq!(ledger.expenses_applied(), 0);
    }

    #[test]
    fn into_sheet_hands_off_balances() {
        let mut ledger = Ledger::new();
        let (contributions, allocations) = equal_dinner();
        ledger.apply_allocation(&contributions, &allocations);

        let sheet = ledger.into_sheet();
        assert_eq!(sheet.balance(user(1)), dec(50));
    }
}
