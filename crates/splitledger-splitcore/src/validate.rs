//! Strict pre-admission validation for expense input.
//!
//! The allocator itself is lenient: missing fields owe zero and a
//! zero share total yields an all-zero table. Services that would rather
//! reject suspicious input before it reaches storage run this validator
//! first. Nothing in the engine calls it implicitly.

use rust_decimal::Decimal;
use splitledger_types::{
    Contribution, EngineConfig, Result, SplitType, SplitledgerError, constants,
};

use crate::allocator::check_preconditions;

/// Validate a contribution set strictly against its split rule.
///
/// Beyond the allocator's preconditions this enforces:
/// - participant count within `config.max_participants`
/// - `PERCENTAGE`: every percentage in 0–100, and the sum within
///   tolerance of 100
/// - `UNEQUAL`: paid amounts sum to the expense total within tolerance
/// - `SHARE`: share units sum to a positive value
///
/// # Errors
/// The first violated rule is returned; nothing is allocated.
pub fn validate_strict(
    total_amount: Decimal,
    split_type: SplitType,
    contributions: &[Contribution],
    config: &EngineConfig,
) -> Result<()> {
    check_preconditions(total_amount, contributions)?;

    if contributions.len() > config.max_participants {
        return Err(SplitledgerError::ParticipantLimitExceeded {
            count: contributions.len(),
            max: config.max_participants,
        });
    }

    match split_type {
        SplitType::Equal => Ok(()),
        SplitType::Unequal => {
            let sum: Decimal = contributions.iter().map(Contribution::paid_or_zero).sum();
            if (sum - total_amount).abs() > config.balance_tolerance {
                return Err(SplitledgerError::UnequalSumMismatch {
                    sum,
                    total: total_amount,
                });
            }
            Ok(())
        }
        SplitType::Percentage => {
            let mut sum = Decimal::ZERO;
            for contribution in contributions {
                let pct = contribution.percentage.unwrap_or(Decimal::ZERO);
                if pct < Decimal::ZERO || pct > constants::FULL_PERCENTAGE {
                    return Err(SplitledgerError::PercentageOutOfRange {
                        user_id: contribution.user_id,
                        percentage: pct,
                    });
                }
                sum += pct;
            }
            if (sum - constants::FULL_PERCENTAGE).abs() > config.balance_tolerance {
                return Err(SplitledgerError::PercentageSumMismatch { sum });
            }
            Ok(())
        }
        SplitType::Share => {
            let total_shares: Decimal =
                contributions.iter().map(Contribution::share_or_zero).sum();
            if total_shares <= Decimal::ZERO {
                return Err(SplitledgerError::DegenerateShareTotal);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use splitledger_types::UserId;

    use super::*;

    fn user(n: u8) -> UserId {
        UserId::from_bytes([n; 16])
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn equal_split_only_needs_preconditions() {
        let contributions = vec![Contribution::new(user(1)), Contribution::new(user(2))];
        assert!(
            validate_strict(
                Decimal::new(100, 0),
                SplitType::Equal,
                &contributions,
                &config()
            )
            .is_ok()
        );
    }

    #[test]
    fn unequal_mismatched_sum_is_rejected() {
        let contributions = vec![
            Contribution::new(user(1)).with_paid(Decimal::new(60, 0)),
            Contribution::new(user(2)).with_paid(Decimal::new(30, 0)),
        ];
        let err = validate_strict(
            Decimal::new(100, 0),
            SplitType::Unequal,
            &contributions,
            &config(),
        )
        .unwrap_err();
        assert!(matches!(err, SplitledgerError::UnequalSumMismatch { .. }));
    }

    #[test]
    fn unequal_exact_sum_passes() {
        let contributions = vec![
            Contribution::new(user(1)).with_paid(Decimal::new(60, 0)),
            Contribution::new(user(2)).with_paid(Decimal::new(40, 0)),
        ];
        assert!(
            validate_strict(
                Decimal::new(100, 0),
                SplitType::Unequal,
                &contributions,
                &config()
            )
            .is_ok()
        );
    }

    #[test]
    fn percentage_over_one_hundred_is_rejected() {
        let contributions = vec![Contribution::new(user(1)).with_percentage(Decimal::new(150, 0))];
        let err = validate_strict(
            Decimal::new(100, 0),
            SplitType::Percentage,
            &contributions,
            &config(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SplitledgerError::PercentageOutOfRange { user_id, .. } if user_id == user(1)
        ));
    }

    #[test]
    fn percentage_sum_mismatch_is_rejected() {
        let contributions = vec![
            Contribution::new(user(1)).with_percentage(Decimal::new(25, 0)),
            Contribution::new(user(2)).with_percentage(Decimal::new(25, 0)),
        ];
        let err = validate_strict(
            Decimal::new(100, 0),
            SplitType::Percentage,
            &contributions,
            &config(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SplitledgerError::PercentageSumMismatch { sum } if sum == Decimal::new(50, 0)
        ));
    }

    #[test]
    fn degenerate_share_total_is_rejected() {
        let contributions = vec![
            Contribution::new(user(1)).with_share_units(Decimal::ZERO),
            Contribution::new(user(2)),
        ];
        let err = validate_strict(
            Decimal::new(90, 0),
            SplitType::Share,
            &contributions,
            &config(),
        )
        .unwrap_err();
        assert!(matches!(err, SplitledgerError::DegenerateShareTotal));
    }

    #[test]
    fn participant_limit_is_enforced() {
        let config = EngineConfig {
            max_participants: 2,
            ..EngineConfig::default()
        };
        let contributions = vec![
            Contribution::new(user(1)),
            Contribution::new(user(2)),
            Contribution::new(user(3)),
        ];
        let err = validate_strict(
            Decimal::new(100, 0),
            SplitType::Equal,
            &contributions,
            &config,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SplitledgerError::ParticipantLimitExceeded { count: 3, max: 2 }
        ));
    }
}
