//! Split model: the four splitting rules and per-participant contributions.
//!
//! `SplitType` is a closed enum — dispatch over it is exhaustive, so adding
//! or removing a rule is a compile-time-enforced change in both engines.
//! The loose string tags of external callers enter only through `FromStr`
//! / serde, which reject anything outside the four recognized values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{SplitledgerError, UserId};

/// The rule governing how an expense total is divided among participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SplitType {
    /// Everyone owes `total / participant_count`.
    Equal,
    /// Everyone owes exactly what they paid; no normalization.
    Unequal,
    /// Everyone owes `percentage / 100 × total`.
    Percentage,
    /// Everyone owes `share_units / total_shares × total`.
    Share,
}

impl std::fmt::Display for SplitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "EQUAL"),
            Self::Unequal => write!(f, "UNEQUAL"),
            Self::Percentage => write!(f, "PERCENTAGE"),
            Self::Share => write!(f, "SHARE"),
        }
    }
}

impl std::str::FromStr for SplitType {
    type Err = SplitledgerError;

    /// Parse a canonical upper-case tag. Fails closed: any tag outside the
    /// four recognized values is [`SplitledgerError::InvalidSplitType`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EQUAL" => Ok(Self::Equal),
            "UNEQUAL" => Ok(Self::Unequal),
            "PERCENTAGE" => Ok(Self::Percentage),
            "SHARE" => Ok(Self::Share),
            other => Err(SplitledgerError::InvalidSplitType {
                tag: other.to_string(),
            }),
        }
    }
}

/// One participant's stake in an expense.
///
/// The active [`SplitType`] decides which optional field is authoritative;
/// the others are carried but ignored. A contribution missing the relevant
/// field owes zero under `PERCENTAGE`/`SHARE` (documented leniency) and
/// under `UNEQUAL` (absent `paid_amount` reads as zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub user_id: UserId,
    /// Amount this participant actually paid toward the expense.
    pub paid_amount: Option<Decimal>,
    /// Share of the total as 0–100, for `PERCENTAGE` splits.
    pub percentage: Option<Decimal>,
    /// Arbitrary positive weight, for `SHARE` splits.
    pub share_units: Option<Decimal>,
}

impl Contribution {
    /// A contribution with no fields set (owes zero under every rule
    /// except `EQUAL`).
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            paid_amount: None,
            percentage: None,
            share_units: None,
        }
    }

    #[must_use]
    pub fn with_paid(mut self, amount: Decimal) -> Self {
        self.paid_amount = Some(amount);
        self
    }

    #[must_use]
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = Some(percentage);
        self
    }

    #[must_use]
    pub fn with_share_units(mut self, units: Decimal) -> Self {
        self.share_units = Some(units);
        self
    }

    /// The amount this participant paid, absent read as zero.
    #[must_use]
    pub fn paid_or_zero(&self) -> Decimal {
        self.paid_amount.unwrap_or(Decimal::ZERO)
    }

    /// The share weight, absent read as zero.
    #[must_use]
    pub fn share_or_zero(&self) -> Decimal {
        self.share_units.unwrap_or(Decimal::ZERO)
    }
}
