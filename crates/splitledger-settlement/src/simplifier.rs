//! Greedy debt simplification.
//!
//! The core netting function: takes a `BalanceSheet` and produces a
//! `SettlementPlan`. This is the **only** computation the simplifier
//! exposes — no balance mutation, no persistence.
//!
//! ```text
//! simplify_debts(BalanceSheet) -> SettlementPlan
//! ```
//!
//! ## Determinism
//!
//! Creditors and debtors are partitioned in sheet iteration order, which
//! is ascending by user id by construction. The same sheet therefore
//! always yields the same transfers with the same deterministic ids.
//!
//! ## Unbalanced input
//!
//! Balances that do not sum to zero within tolerance are rejected up
//! front with `UnbalancedLedger`. Without that guard the greedy loop
//! would terminate early and leave someone silently unsettled.

use chrono::Utc;
use rust_decimal::Decimal;
use splitledger_types::{
    BalanceSheet, EngineConfig, Result, SettlementPlan, SplitledgerError, Transfer, TransferId,
    UserId,
};

use crate::plan_digest::compute_plan_root;

/// Simplify with the default [`EngineConfig`].
pub fn simplify_debts(sheet: &BalanceSheet) -> Result<SettlementPlan> {
    simplify_debts_with(sheet, &EngineConfig::default())
}

/// Greedy netting: match creditors against debtors until both sides are
/// exhausted.
///
/// ## Algorithm
///
/// 1. Reject the sheet if its net total exceeds tolerance
/// 2. Partition non-zero balances into creditors (balance > 0) and
///    debtors (balance < 0, magnitude owed), in ascending user-id order
/// 3. Two-cursor walk: transfer `min(creditor remaining, debtor
///    remaining)` from the current debtor to the current creditor,
///    advancing whichever side (or both) reaches exactly zero
///
/// Greedy exact-match is not guaranteed transaction-minimal, but always
/// fully settles in at most `creditors + debtors - 1` transfers.
///
/// # Errors
/// Returns [`SplitledgerError::UnbalancedLedger`] if the sheet's net
/// total exceeds `config.balance_tolerance`.
pub fn simplify_debts_with(sheet: &BalanceSheet, config: &EngineConfig) -> Result<SettlementPlan> {
    let net = sheet.net_total();
    if net.abs() > config.balance_tolerance {
        return Err(SplitledgerError::UnbalancedLedger { net });
    }

    let mut creditors: Vec<(UserId, Decimal)> = Vec::new();
    let mut debtors: Vec<(UserId, Decimal)> = Vec::new();
    for (user_id, balance) in sheet.non_zero() {
        if balance > Decimal::ZERO {
            creditors.push((user_id, balance));
        } else {
            debtors.push((user_id, -balance));
        }
    }

    let mut transfers: Vec<Transfer> = Vec::new();
    let mut creditor_idx = 0;
    let mut debtor_idx = 0;
    let mut plan_seq: u64 = 0;

    while creditor_idx < creditors.len() && debtor_idx < debtors.len() {
        let (creditor, creditor_remaining) = creditors[creditor_idx];
        let (debtor, debtor_remaining) = debtors[debtor_idx];

        let amount = creditor_remaining.min(debtor_remaining);
        transfers.push(Transfer {
            id: TransferId::deterministic(plan_seq, debtor, creditor),
            from: debtor,
            to: creditor,
            amount,
        });
        plan_seq += 1;

        creditors[creditor_idx].1 -= amount;
        debtors[debtor_idx].1 -= amount;

        // Both may advance in the same step when the amounts were equal.
        if creditors[creditor_idx].1.is_zero() {
            creditor_idx += 1;
        }
        if debtors[debtor_idx].1.is_zero() {
            debtor_idx += 1;
        }
    }

    // A sub-tolerance net total can leave one side with a residual no
    // larger than the tolerance itself.
    if creditor_idx < creditors.len() || debtor_idx < debtors.len() {
        tracing::debug!(net = %net, "sub-tolerance residual left after netting");
    }

    tracing::info!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = transfers.len(),
        "simplified debts"
    );

    let plan_root = compute_plan_root(&transfers);
    Ok(SettlementPlan {
        transfers,
        plan_root,
        computed_at: Utc::now(),
    })
}
