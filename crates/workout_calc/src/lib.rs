//! Workout statistics for running, sports walking and swimming sessions.
//!
//! A session is built from an activity code and a positional parameter list
//! with [`read_package`], then turned into a [`Summary`] that renders the
//! familiar one-line report:
//!
//! ```
//! use workout_calc::{Training, read_package};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! assert_eq!(
//!     workout.summarize().render(),
//!     "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
//!      Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
//! );
//! ```

use thiserror::Error;

pub mod config;
pub mod factory;
pub mod observability;
pub mod summary;
pub mod training;
pub mod variants;

pub use config::{Config, Validation};
pub use factory::{read_package, read_package_with};
pub use summary::Summary;
pub use training::{Session, Training, Workout, WorkoutKind};
pub use variants::{Running, SportsWalking, Swimming};

#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("{code} expects {expected} parameters, got {actual}")]
    Arity {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("configuration error: {0}")]
    Config(String),
}

impl WorkoutError {
    /// Short, stable label used for metrics and structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutType(_) => "unknown_type",
            WorkoutError::Arity { .. } => "arity",
            WorkoutError::InvalidParameter { .. } => "invalid_parameter",
            WorkoutError::Config(_) => "config",
        }
    }
}
