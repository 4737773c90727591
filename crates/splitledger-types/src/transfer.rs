//! Settlement transfers produced by the debt simplifier.
//!
//! A [`Transfer`] is a single proposed payment from a net debtor to a net
//! creditor. A [`SettlementPlan`] is the ordered list of transfers that,
//! applied in order, drives every balance in the input sheet to zero.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{TransferId, UserId};

/// One settling payment. `amount` is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Deterministic id from the plan sequence and both parties.
    pub id: TransferId,
    /// The net debtor making the payment.
    pub from: UserId,
    /// The net creditor receiving the payment.
    pub to: UserId,
    pub amount: Decimal,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transfer[{}] {} -> {} : {}", self.id, self.from, self.to, self.amount)
    }
}

/// An ordered settlement plan over one balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// Transfers in emission order; applying them in order settles the sheet.
    pub transfers: Vec<Transfer>,
    /// SHA-256 digest over the ordered transfer list.
    pub plan_root: [u8; 32],
    pub computed_at: DateTime<Utc>,
}

impl SettlementPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Total amount moved by the plan.
    #[must_use]
    pub fn total_volume(&self) -> Decimal {
        self.transfers.iter().map(|t| t.amount).sum()
    }
}
