//! System-wide constants for the SplitLedger engines.

use rust_decimal::Decimal;

/// Rounding tolerance for sum-preservation and ledger-balance checks
/// (1e-6). Exact decimal division can leave a sub-microunit remainder
/// when the participant count does not divide the total.
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Denominator for `PERCENTAGE` splits: percentages are expressed 0–100.
pub const PERCENT_DENOMINATOR: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// The percentage a full contribution set should sum to.
pub const FULL_PERCENTAGE: Decimal = PERCENT_DENOMINATOR;

/// Maximum participants allowed on a single expense.
pub const MAX_PARTICIPANTS_PER_EXPENSE: usize = 1_000;

/// Maximum decimal places carried on monetary amounts entering the
/// engines (display rounding is the caller's concern).
pub const AMOUNT_PRECISION: u32 = 8;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "SplitLedger";
