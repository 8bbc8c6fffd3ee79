//! Errors produced while building or dispatching a workout.

use thiserror::Error;

use crate::WorkoutKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Type code is not one of `SWM`, `RUN`, `WLK`.
    #[error("Unknown workout type '{0}'")]
    UnknownWorkoutType(String),

    /// Number of values doesn't match the workout constructor.
    #[error("{kind} expects {expected} values, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// Value is used as a divisor and can't be zero.
    #[error("Division by zero: '{field}' must not be zero")]
    DivisionByZero { field: &'static str },

    /// Input or computed metric is out of the accepted range.
    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Textual package is not in `CODE:v1,v2,...` form.
    #[error("Malformed package '{input}': {reason}")]
    MalformedPackage { input: String, reason: String },
}
