//! Error types for schedule construction and statistics.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Failures surfaced to the caller.
///
/// The engine performs no I/O, so none of these are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The time quantum must be at least one time unit.
    #[error("invalid quantum {0}: must be a positive integer")]
    InvalidQuantum(i64),

    /// Statistics were requested over an empty process set.
    #[error("no processes to compute statistics for")]
    NoProcesses,

    /// A process has no segment in the timeline it was paired with.
    #[error("process '{0}' has no segment in the timeline")]
    OrphanProcess(String),

    /// The process set failed structural validation.
    #[error("invalid process set: {}", summarize(.0))]
    InvalidProcesses(Vec<ValidationError>),

    /// The simulation clock would run past `i64::MAX`.
    #[error("simulation clock overflows at time {time} + {by}")]
    HorizonOverflow { time: i64, by: i64 },

    /// An edit referenced a process id that is not in the table.
    #[error("unknown process '{0}'")]
    UnknownProcess(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScheduleError::InvalidQuantum(0).to_string(),
            "invalid quantum 0: must be a positive integer"
        );
        assert_eq!(
            ScheduleError::OrphanProcess("P3".into()).to_string(),
            "process 'P3' has no segment in the timeline"
        );
        assert_eq!(
            ScheduleError::HorizonOverflow { time: 10, by: 2 }.to_string(),
            "simulation clock overflows at time 10 + 2"
        );
    }

    #[test]
    fn test_invalid_processes_joins_messages() {
        let err = ScheduleError::InvalidProcesses(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "bad burst"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process set: Duplicate process ID: P1; bad burst"
        );
    }
}
