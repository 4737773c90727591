//! Plan digests for cross-run consistency.
//!
//! Two processes simplifying the same `BalanceSheet` must produce the
//! exact same `SettlementPlan`. The `plan_root` is a hash over all
//! transfers that enables quick comparison without diffing full payloads.

use sha2::{Digest, Sha256};
use splitledger_types::Transfer;

/// Compute the plan root hash over a set of transfers.
///
/// This is a deterministic hash that depends on:
/// - Transfer IDs (in order)
/// - Both parties of each transfer
/// - Transfer amounts
///
/// The same transfers in the same order always produce the same root.
#[must_use]
pub fn compute_plan_root(transfers: &[Transfer]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"splitledger:plan_root:v2:");
    hasher.update((transfers.len() as u64).to_le_bytes());

    for transfer in transfers {
        hasher.update(transfer.id.0.as_bytes());
        hasher.update(transfer.from.0.as_bytes());
        hasher.update(transfer.to.0.as_bytes());
        hasher.update(transfer.amount.to_string().as_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Verify that a given plan root matches the expected hash.
///
/// Recomputes the hash from the transfers and compares with the expected root.
#[must_use]
pub fn verify_plan_root(transfers: &[Transfer], expected_root: &[u8; 32]) -> bool {
    let actual = compute_plan_root(transfers);
    actual == *expected_root
}
