//! Allocation model: the per-participant owed amounts produced by the
//! split allocator.
//!
//! An [`AllocationTable`] preserves the input participant order, so two
//! allocations over the same contributions compare deterministically.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::UserId;

/// One participant's computed owed amount for a single expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitAllocation {
    pub user_id: UserId,
    /// Non-negative owed amount.
    pub owed: Decimal,
}

/// The ordered owed amounts for one expense, in input participant order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllocationTable {
    entries: Vec<SplitAllocation>,
}

impl AllocationTable {
    #[must_use]
    pub fn new(entries: Vec<SplitAllocation>) -> Self {
        Self { entries }
    }

    /// The owed amount for a given participant, if present.
    #[must_use]
    pub fn owed(&self, user_id: UserId) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|a| a.user_id == user_id)
            .map(|a| a.owed)
    }

    /// Sum of all owed amounts. For `EQUAL`/`PERCENTAGE`/`SHARE`
    /// allocations this equals the expense total within tolerance.
    #[must_use]
    pub fn total_owed(&self) -> Decimal {
        self.entries.iter().map(|a| a.owed).sum()
    }

    /// Whether every participant owes exactly zero (the degenerate
    /// all-shares-zero outcome callers should treat as suspicious).
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.entries.iter().all(|a| a.owed.is_zero())
    }

    #[must_use]
    pub fn entries(&self) -> &[SplitAllocation] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SplitAllocation> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AllocationTable {
    type Item = &'a SplitAllocation;
    type IntoIter = std::slice::Iter<'a, SplitAllocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
