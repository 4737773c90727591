//! Settlement plan replay verification.
//!
//! Invariants enforced for a plan over its source sheet:
//! ```text
//! ∀ transfer: amount > 0
//! count(transfers) ≤ count(creditors) + count(debtors) - 1
//! replaying every transfer drives every balance to zero (± tolerance)
//! ```
//!
//! If replay ever fails, something has gone wrong in the netting logic
//! or the caller mutated the sheet between simplification and
//! verification. This is the ultimate safety net.

use rust_decimal::Decimal;
use splitledger_types::{BalanceSheet, Result, SettlementPlan, SplitledgerError};

/// Replay `plan` against `sheet` and verify full settlement.
///
/// The sheet is not mutated; replay happens on a copy.
///
/// # Errors
/// Returns [`SplitledgerError::PlanInvariantViolation`] naming the first
/// violated invariant.
pub fn verify_plan(
    sheet: &BalanceSheet,
    plan: &SettlementPlan,
    tolerance: Decimal,
) -> Result<()> {
    let creditors = sheet.non_zero().filter(|(_, b)| *b > Decimal::ZERO).count();
    let debtors = sheet.non_zero().filter(|(_, b)| *b < Decimal::ZERO).count();

    let bound = (creditors + debtors).saturating_sub(1);
    if plan.len() > bound {
        return Err(SplitledgerError::PlanInvariantViolation {
            reason: format!(
                "{} transfers exceed bound {bound} ({creditors} creditors, {debtors} debtors)",
                plan.len()
            ),
        });
    }

    let mut replay = sheet.clone();
    for transfer in &plan.transfers {
        if transfer.amount <= Decimal::ZERO {
            return Err(SplitledgerError::PlanInvariantViolation {
                reason: format!("non-positive transfer amount: {transfer}"),
            });
        }
        // The debtor pays: their balance rises toward zero, the
        // creditor's falls toward zero.
        replay.credit(transfer.from, transfer.amount);
        replay.debit(transfer.to, transfer.amount);
    }

    for (user_id, balance) in replay.iter() {
        if balance.abs() > tolerance {
            return Err(SplitledgerError::PlanInvariantViolation {
                reason: format!("user {user_id} left with residual balance {balance}"),
            });
        }
    }

    tracing::debug!(
        plan_root = %hex::encode(plan.plan_root),
        transfers = plan.len(),
        "settlement plan verified"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use splitledger_types::{Transfer, TransferId, UserId, constants::BALANCE_TOLERANCE};

    use crate::simplify_debts;

    use super::*;

    fn user(n: u8) -> UserId {
        UserId::from_bytes([n; 16])
    }

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn valid_plan_verifies() {
        let sheet = BalanceSheet::from_iter([
            (user(1), dec(100)),
            (user(2), dec(-40)),
            (user(3), dec(-60)),
        ]);
        let plan = simplify_debts(&sheet).unwrap();
        assert!(verify_plan(&sheet, &plan, BALANCE_TOLERANCE).is_ok());
    }

    #[test]
    fn short_plan_leaves_residual() {
        let sheet = BalanceSheet::from_iter([
            (user(1), dec(100)),
            (user(2), dec(-40)),
            (user(3), dec(-60)),
        ]);
        let mut plan = simplify_debts(&sheet).unwrap();
        plan.transfers.pop();

        let err = verify_plan(&sheet, &plan, BALANCE_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            SplitledgerError::PlanInvariantViolation { ref reason } if reason.contains("residual")
        ));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let sheet = BalanceSheet::from_iter([(user(1), dec(10)), (user(2), dec(-10))]);
        let plan = SettlementPlan {
            transfers: vec![Transfer {
                id: TransferId::deterministic(0, user(2), user(1)),
                from: user(2),
                to: user(1),
                amount: Decimal::ZERO,
            }],
            plan_root: [0u8; 32],
            computed_at: Utc::now(),
        };
        let err = verify_plan(&sheet, &plan, BALANCE_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            SplitledgerError::PlanInvariantViolation { ref reason }
                if reason.contains("non-positive")
        ));
    }

    #[test]
    fn padded_plan_breaks_count_bound() {
        let sheet = BalanceSheet::from_iter([(user(1), dec(10)), (user(2), dec(-10))]);
        let mut plan = simplify_debts(&sheet).unwrap();
        let extra = plan.transfers[0];
        plan.transfers.push(extra);

        let err = verify_plan(&sheet, &plan, BALANCE_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            SplitledgerError::PlanInvariantViolation { ref reason } if reason.contains("bound")
        ));
    }

    #[test]
    fn empty_plan_over_settled_sheet_verifies() {
        let sheet = BalanceSheet::new();
        let plan = simplify_debts(&sheet).unwrap();
        assert!(verify_plan(&sheet, &plan, BALANCE_TOLERANCE).is_ok());
    }
}
