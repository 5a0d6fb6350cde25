//! Errors raised while loading and processing workout packages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Workout error: {0}")]
    Workout(#[from] workout_calc::WorkoutError),

    #[error("Package file error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
