//! Expense records consumed by the split allocator.
//!
//! An [`Expense`] may belong to a group or stand alone; that distinction
//! is data for the surrounding persistence layer and never reaches the
//! split math, which sees only amount, split type, and contributions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Contribution, ExpenseId, GroupId, SplitType};

/// A single shared expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Set when the expense was posted inside a group.
    pub group_id: Option<GroupId>,
    pub description: Option<String>,
    /// Positive total amount of the expense.
    pub amount: Decimal,
    /// The rule used to divide `amount` among the contributions.
    pub split_type: SplitType,
    /// Ordered participant contributions; order is preserved in the
    /// resulting allocation table.
    pub contributions: Vec<Contribution>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Number of participants on this expense.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.contributions.len()
    }

    /// Sum of all `paid_amount` fields, absent read as zero.
    #[must_use]
    pub fn total_paid(&self) -> Decimal {
        self.contributions.iter().map(Contribution::paid_or_zero).sum()
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    pub fn dummy(amount: Decimal, split_type: SplitType, contributions: Vec<Contribution>) -> Self {
        Self {
            id: ExpenseId::new(),
            group_id: None,
            description: None,
            amount,
            split_type,
            contributions,
            created_at: Utc::now(),
        }
    }

    pub fn dummy_in_group(
        group_id: GroupId,
        amount: Decimal,
        split_type: SplitType,
        contributions: Vec<Contribution>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            group_id: Some(group_id),
            description: None,
            amount,
            split_type,
            contributions,
            created_at: Utc::now(),
        }
    }
}
