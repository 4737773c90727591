//! Error types for the SplitLedger engines.
//!
//! All errors use the `SL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Split allocation errors
//! - 2xx: Strict validation errors
//! - 3xx: Ledger / settlement errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::UserId;

/// Central error enum for all SplitLedger operations.
#[derive(Debug, Error)]
pub enum SplitledgerError {
    // =================================================================
    // Split Allocation Errors (1xx)
    // =================================================================
    /// The split-type tag is not one of the four recognized values.
    /// No partial allocation is produced.
    #[error("SL_ERR_100: Invalid split type: {tag}")]
    InvalidSplitType { tag: String },

    /// Zero contributions supplied; allocation is meaningless and must
    /// fail rather than divide by zero.
    #[error("SL_ERR_101: Empty participant set")]
    EmptyParticipantSet,

    /// The expense total must be strictly positive.
    #[error("SL_ERR_102: Non-positive expense amount: {amount}")]
    NonPositiveAmount { amount: Decimal },

    /// A user id appears more than once in the contribution list.
    #[error("SL_ERR_103: Duplicate participant: {0}")]
    DuplicateParticipant(UserId),

    /// Too many participants on a single expense.
    #[error("SL_ERR_104: Participant limit exceeded: {count} > {max}")]
    ParticipantLimitExceeded { count: usize, max: usize },

    // =================================================================
    // Strict Validation Errors (2xx)
    // =================================================================
    /// All `share_units` sum to zero under a `SHARE` split. The lenient
    /// allocator returns an all-zero table instead; strict validation
    /// rejects the input up front.
    #[error("SL_ERR_200: Share units sum to zero")]
    DegenerateShareTotal,

    /// A percentage lies outside 0–100.
    #[error("SL_ERR_201: Percentage out of range for {user_id}: {percentage}")]
    PercentageOutOfRange { user_id: UserId, percentage: Decimal },

    /// Percentages do not sum to 100 within tolerance.
    #[error("SL_ERR_202: Percentages sum to {sum}, expected 100")]
    PercentageSumMismatch { sum: Decimal },

    /// Paid amounts under `UNEQUAL` do not sum to the expense total.
    #[error("SL_ERR_203: Unequal paid amounts sum to {sum}, expected {total}")]
    UnequalSumMismatch { sum: Decimal, total: Decimal },

    // =================================================================
    // Ledger / Settlement Errors (3xx)
    // =================================================================
    /// The balances fed to the simplifier do not sum to zero beyond
    /// tolerance. Failing fast here prevents a silently under-settling
    /// plan.
    #[error("SL_ERR_300: Unbalanced ledger: net total {net}")]
    UnbalancedLedger { net: Decimal },

    /// A settlement plan failed replay verification — critical safety
    /// alert.
    #[error("SL_ERR_301: Plan invariant violation: {reason}")]
    PlanInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SL_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SplitledgerError>;
