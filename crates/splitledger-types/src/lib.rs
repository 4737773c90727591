//! # splitledger-types
//!
//! Shared types, errors, and configuration for the **SplitLedger**
//! expense-splitting engines.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`], [`GroupId`], [`ExpenseId`], [`TransferId`]
//! - **Split model**: [`SplitType`], [`Contribution`]
//! - **Allocation model**: [`SplitAllocation`], [`AllocationTable`]
//! - **Expense model**: [`Expense`]
//! - **Balance model**: [`BalanceSheet`]
//! - **Settlement model**: [`Transfer`], [`SettlementPlan`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`SplitledgerError`] with `SL_ERR_` prefix codes
//! - **Constants**: tolerances and system-wide limits

pub mod allocation;
pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod expense;
pub mod ids;
pub mod split;
pub mod transfer;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitledger_types::{SplitType, Contribution, BalanceSheet, ...};

pub use allocation::*;
pub use balance::*;
pub use config::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use split::*;
pub use transfer::*;

// Constants are accessed via `splitledger_types::constants::FOO`
// (not re-exported to avoid name collisions).
