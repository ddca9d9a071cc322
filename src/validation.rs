//! Input validation for process sets.
//!
//! Checks structural integrity of the processes before any engine runs.
//! Detects:
//! - Duplicate pids
//! - Negative arrival times
//! - Non-positive burst times
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;

use crate::models::ProcessRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate pids
/// 2. Every arrival time is `>= 0`
/// 3. Every burst time is `> 0`
///
/// An empty set is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(2, 1, 3),
            ProcessRecord::new(3, 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(1, 2, 3)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicatePid);
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![ProcessRecord::new(1, -1, 5)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![ProcessRecord::new(1, 0, 0)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate pid + negative arrival + negative burst
        let processes = vec![ProcessRecord::new(7, 0, 2), ProcessRecord::new(7, -3, -1)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
