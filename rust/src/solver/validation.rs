//! Input validation for job lists.

use super::SchedulingError;
use crate::models::Job;

/// Check that every job is a finite interval with `start <= end` and a finite weight.
///
/// Stops at the first malformed job. Negative weights are allowed.
pub fn validate_jobs(jobs: &[Job]) -> Result<(), SchedulingError> {
    for (index, job) in jobs.iter().enumerate() {
        let reason = if !job.start.is_finite() || !job.end.is_finite() {
            format!("non-finite interval [{}, {}]", job.start, job.end)
        } else if !job.weight.is_finite() {
            format!("non-finite weight {}", job.weight)
        } else if job.start > job.end {
            format!("start {} is after end {}", job.start, job.end)
        } else {
            continue;
        };
        return Err(SchedulingError::InvalidJob { index, reason });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_jobs() {
        let jobs = vec![
            Job::new(0.0, 5.0, 1.0),
            Job::new(5.0, 5.0, 0.0),
            Job::new(-3.5, 2.0, -1.0),
        ];
        assert_eq!(validate_jobs(&jobs), Ok(()));
        assert_eq!(validate_jobs(&[]), Ok(()));
    }

    #[test]
    fn test_rejects_reversed_interval() {
        let jobs = vec![Job::new(0.0, 5.0, 1.0), Job::new(6.0, 2.0, 1.0)];
        assert!(matches!(
            validate_jobs(&jobs),
            Err(SchedulingError::InvalidJob { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        for job in [
            Job::new(f64::NAN, 1.0, 1.0),
            Job::new(0.0, f64::INFINITY, 1.0),
            Job::new(0.0, 1.0, f64::NAN),
        ] {
            assert!(matches!(
                validate_jobs(&[job]),
                Err(SchedulingError::InvalidJob { index: 0, .. })
            ));
        }
    }
}
