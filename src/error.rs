//! Error types for Synheart Workout

use thiserror::Error;

/// Errors that can occur while reading packages and computing workouts
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Unknown activity type: {0}")]
    UnknownActivityType(String),

    #[error("Arity mismatch for {workout_type}: expected {expected} values, got {actual}")]
    ArityMismatch {
        workout_type: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse package input: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
