//! Sum-preservation verification for allocation tables.
//!
//! The central correctness property of the allocator: for `EQUAL`,
//! `PERCENTAGE` (summing to 100), and `SHARE` splits, the owed amounts
//! must sum to the expense total within a fixed tolerance. `UNEQUAL` is
//! a passthrough and exempt by contract.

use rust_decimal::Decimal;
use splitledger_types::AllocationTable;

/// Signed difference between the allocated sum and the expense total.
#[must_use]
pub fn allocation_drift(total_amount: Decimal, table: &AllocationTable) -> Decimal {
    table.total_owed() - total_amount
}

/// Whether the allocated sum matches the total within `tolerance`.
#[must_use]
pub fn sum_preserved(total_amount: Decimal, table: &AllocationTable, tolerance: Decimal) -> bool {
    allocation_drift(total_amount, table).abs() <= tolerance
}
