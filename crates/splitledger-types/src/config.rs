//! Configuration for the SplitLedger engines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables shared by both engines.
///
/// The defaults match the documented invariants; callers embedding the
/// engines in a service can tighten or relax them per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tolerance for sum-preservation and ledger-balance checks.
    pub balance_tolerance: Decimal,
    /// Maximum participants allowed on a single expense.
    pub max_participants: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            balance_tolerance: constants::BALANCE_TOLERANCE,
            max_participants: constants::MAX_PARTICIPANTS_PER_EXPENSE,
        }
    }
}
