//! # splitledger-settlement
//!
//! **Netting Plane**: balance aggregation, greedy debt simplification,
//! plan digests, and replay verification.
//!
//! ## Architecture
//!
//! The Netting Plane receives per-expense allocation tables from
//! SplitCore and:
//! 1. Aggregates paid/owed amounts into a [`BalanceSheet`](splitledger_types::BalanceSheet) ([`Ledger`])
//! 2. Rejects unbalanced input before netting (fail fast, never
//!    silently under-settle)
//! 3. Emits a greedy creditor/debtor settlement plan ([`simplify_debts`])
//! 4. Digests the plan for cross-run comparison ([`compute_plan_root`])
//! 5. Replays the plan against the sheet as the ultimate safety net
//!    ([`verify_plan`])

pub mod ledger;
pub mod plan_check;
pub mod plan_digest;
pub mod simplifier;

pub use ledger::Ledger;
pub use plan_check::verify_plan;
pub use plan_digest::{compute_plan_root, verify_plan_root};
pub use simplifier::{simplify_debts, simplify_debts_with};
