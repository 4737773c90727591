//! # splitledger-splitcore
//!
//! **Pure split allocation engine for SplitLedger.**
//!
//! SplitCore is the compute plane for expenses -- it takes an expense
//! total, a split rule, and participant contributions, and produces the
//! per-participant owed amounts. It has:
//!
//! - **Zero side effects**: no DB access, no balance state, no I/O
//! - **Deterministic output**: same input -> same table, in input order
//! - **Exact-sum guarantee**: `EQUAL`/`PERCENTAGE`/`SHARE` allocations
//!   sum to the expense total within a fixed tolerance
//! - **Closed split-type dispatch**: exhaustively matched at compile time

pub mod allocator;
pub mod sum_check;
pub mod validate;

pub use allocator::{allocate_expense, allocate_splits};
pub use sum_check::{allocation_drift, sum_preserved};
pub use validate::validate_strict;
