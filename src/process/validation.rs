/*!
 * Process Definition Validation
 * Semantic checks applied to each parsed record
 */

use super::types::ProcessSpec;
use crate::core::errors::ValidationError;
use crate::core::types::Ticks;
use std::collections::HashSet;

/// Tracks ids and the schedule horizon seen so far in one input source
///
/// No schedule can end later than the latest arrival plus the sum of all
/// bursts, so keeping that bound representable keeps every clock value,
/// finish time and timeline sum representable too.
#[derive(Debug, Default)]
pub(crate) struct SpecValidator {
    seen_ids: HashSet<String>,
    latest_arrival: Ticks,
    total_burst: Ticks,
}

impl SpecValidator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Validate one record found on `line`
    pub(crate) fn check(&mut self, line: usize, spec: &ProcessSpec) -> Result<(), ValidationError> {
        if spec.burst_time == 0 {
            return Err(ValidationError::ZeroBurst {
                line,
                id: spec.id.clone(),
            });
        }

        if !self.seen_ids.insert(spec.id.clone()) {
            return Err(ValidationError::DuplicateId {
                line,
                id: spec.id.clone(),
            });
        }

        let latest_arrival = self.latest_arrival.max(spec.arrival_time);
        let total_burst = self
            .total_burst
            .checked_add(spec.burst_time)
            .filter(|&total| latest_arrival.checked_add(total).is_some())
            .ok_or_else(|| ValidationError::TimeOverflow {
                line,
                id: spec.id.clone(),
            })?;

        self.latest_arrival = latest_arrival;
        self.total_burst = total_burst;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_burst() {
        let mut validator = SpecValidator::new();
        let err = validator
            .check(2, &ProcessSpec::new("P1", 0, 0, 1))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ZeroBurst {
                line: 2,
                id: "P1".into()
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut validator = SpecValidator::new();
        assert!(validator.check(2, &ProcessSpec::new("P1", 0, 3, 1)).is_ok());
        assert!(validator.check(3, &ProcessSpec::new("P2", 1, 3, 1)).is_ok());
        assert!(matches!(
            validator.check(4, &ProcessSpec::new("P1", 4, 2, 2)),
            Err(ValidationError::DuplicateId { line: 4, .. })
        ));
    }

    #[test]
    fn test_rejects_horizon_overflow_on_single_record() {
        let mut validator = SpecValidator::new();
        assert_eq!(
            validator.check(2, &ProcessSpec::new("P1", Ticks::MAX, 1, 1)),
            Err(ValidationError::TimeOverflow {
                line: 2,
                id: "P1".into()
            })
        );
    }

    #[test]
    fn test_rejects_horizon_overflow_across_records() {
        let mut validator = SpecValidator::new();
        let half = Ticks::MAX / 2;
        assert!(validator.check(2, &ProcessSpec::new("P1", 0, half, 1)).is_ok());
        assert!(validator.check(3, &ProcessSpec::new("P2", 0, half, 1)).is_ok());
        assert!(matches!(
            validator.check(4, &ProcessSpec::new("P3", 2, 1, 1)),
            Err(ValidationError::TimeOverflow { line: 4, .. })
        ));
    }

    #[test]
    fn test_accepts_horizon_at_the_limit() {
        let mut validator = SpecValidator::new();
        assert!(validator
            .check(2, &ProcessSpec::new("P1", Ticks::MAX - 1, 1, 1))
            .is_ok());
    }
}
