//! Pure split allocation.
//!
//! The core allocation function: takes a total, a split rule, and the
//! participant contributions, and produces an `AllocationTable`. This is
//! the **only** computation SplitCore exposes — no side effects, no
//! rounding to display precision, no persistence.
//!
//! ```text
//! allocate_splits(total, split_type, contributions) -> AllocationTable
//! ```
//!
//! ## Leniency
//!
//! A contribution missing the field the active rule reads owes zero —
//! never an error. That includes the degenerate `SHARE` case where all
//! share units sum to zero: the whole table is zero and a warning is
//! logged. Callers that want to reject such input up front use
//! [`crate::validate_strict`].

use std::collections::HashSet;

use rust_decimal::Decimal;
use splitledger_types::{
    AllocationTable, Contribution, Expense, Result, SplitAllocation, SplitType, SplitledgerError,
    UserId, constants,
};

/// Pure allocation: divide `total_amount` among `contributions` under
/// `split_type`.
///
/// ## Algorithm
///
/// 1. Validate preconditions: positive total, non-empty contributions,
///    unique user ids
/// 2. Dispatch on the split rule (exhaustive match)
/// 3. Return owed amounts in the input participant order
///
/// ## Sum guarantee
///
/// For `EQUAL`, for `PERCENTAGE` contributions summing to 100, and for
/// `SHARE`, the returned amounts sum to `total_amount` within
/// [`constants::BALANCE_TOLERANCE`]. `UNEQUAL` is an exact passthrough
/// of `paid_amount` with no cross-check against the total — supplying
/// consistent data there is the caller's contract.
pub fn allocate_splits(
    total_amount: Decimal,
    split_type: SplitType,
    contributions: &[Contribution],
) -> Result<AllocationTable> {
    check_preconditions(total_amount, contributions)?;

    let entries = match split_type {
        SplitType::Equal => allocate_equal(total_amount, contributions),
        SplitType::Unequal => allocate_unequal(contributions),
        SplitType::Percentage => allocate_percentage(total_amount, contributions),
        SplitType::Share => allocate_share(total_amount, contributions),
    };

    let table = AllocationTable::new(entries);
    tracing::debug!(
        split_type = %split_type,
        participants = table.len(),
        total = %total_amount,
        allocated = %table.total_owed(),
        "allocated expense"
    );
    Ok(table)
}

/// Allocate a whole [`Expense`] record. The group/individual distinction
/// on the expense is ignored — the math is identical for both.
pub fn allocate_expense(expense: &Expense) -> Result<AllocationTable> {
    allocate_splits(expense.amount, expense.split_type, &expense.contributions)
}

/// Shared precondition checks for allocation and strict validation.
pub(crate) fn check_preconditions(
    total_amount: Decimal,
    contributions: &[Contribution],
) -> Result<()> {
    if total_amount <= Decimal::ZERO {
        return Err(SplitledgerError::NonPositiveAmount {
            amount: total_amount,
        });
    }
    if contributions.is_empty() {
        return Err(SplitledgerError::EmptyParticipantSet);
    }
    let mut seen: HashSet<UserId> = HashSet::with_capacity(contributions.len());
    for contribution in contributions {
        if !seen.insert(contribution.user_id) {
            return Err(SplitledgerError::DuplicateParticipant(contribution.user_id));
        }
    }
    Ok(())
}

fn allocate_equal(total: Decimal, contributions: &[Contribution]) -> Vec<SplitAllocation> {
    // Preconditions guarantee a non-zero participant count.
    let per_head = total / Decimal::from(contributions.len());
    contributions
        .iter()
        .map(|c| SplitAllocation {
            user_id: c.user_id,
            owed: per_head,
        })
        .collect()
}

fn allocate_unequal(contributions: &[Contribution]) -> Vec<SplitAllocation> {
    contributions
        .iter()
        .map(|c| SplitAllocation {
            user_id: c.user_id,
            owed: c.paid_or_zero(),
        })
        .collect()
}

fn allocate_percentage(total: Decimal, contributions: &[Contribution]) -> Vec<SplitAllocation> {
    contributions
        .iter()
        .map(|c| SplitAllocation {
            user_id: c.user_id,
            owed: match c.percentage {
                Some(pct) => pct / constants::PERCENT_DENOMINATOR * total,
                None => Decimal::ZERO,
            },
        })
        .collect()
}

fn allocate_share(total: Decimal, contributions: &[Contribution]) -> Vec<SplitAllocation> {
    let total_shares: Decimal = contributions.iter().map(Contribution::share_or_zero).sum();

    if total_shares.is_zero() {
        tracing::warn!(
            participants = contributions.len(),
            "share units sum to zero; every participant owes zero"
        );
        return contributions
            .iter()
            .map(|c| SplitAllocation {
                user_id: c.user_id,
                owed: Decimal::ZERO,
            })
            .collect();
    }

    contributions
        .iter()
        .map(|c| SplitAllocation {
            user_id: c.user_id,
            owed: c.share_or_zero() / total_shares * total,
        })
        .collect()
}
