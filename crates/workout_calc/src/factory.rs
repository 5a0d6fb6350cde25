//! Builds workouts from an activity code and its positional parameters.
//!
//! Parameter order per code:
//! - `RUN`: action count, duration (h), weight (kg)
//! - `WLK`: action count, duration (h), weight (kg), height (cm)
//! - `SWM`: action count, duration (h), weight (kg), pool length (m), pool count

use tracing::debug;

use crate::config::{Config, Validation};
use crate::observability;
use crate::training::{Session, Training, Workout, WorkoutKind};
use crate::variants::{Running, SportsWalking, Swimming};
use crate::WorkoutError;

/// Build a workout with the default (strict) validation policy.
pub fn read_package(code: &str, params: &[f64]) -> Result<Workout, WorkoutError> {
    read_package_with(code, params, &Config::default())
}

pub fn read_package_with(
    code: &str,
    params: &[f64],
    config: &Config,
) -> Result<Workout, WorkoutError> {
    match build(code, params, config.validation) {
        Ok(workout) => {
            debug!(code, ?workout, "workout built");
            observability::record_built(workout.kind());
            Ok(workout)
        }
        Err(e) => {
            debug!(code, error = %e, "package rejected");
            observability::record_rejected(e.label());
            Err(e)
        }
    }
}

fn build(code: &str, params: &[f64], policy: Validation) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = code.parse()?;
    if params.len() != kind.arity() {
        return Err(WorkoutError::Arity {
            code: kind.code(),
            expected: kind.arity(),
            actual: params.len(),
        });
    }

    let check = Checker { policy };
    let session = Session::new(
        check.count("action_count", params[0])?,
        check.positive("duration_h", params[1])?,
        check.non_negative("weight_kg", params[2])?,
    );

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(session).into(),
        WorkoutKind::SportsWalking => {
            SportsWalking::new(session, check.positive("height_cm", params[3])?).into()
        }
        WorkoutKind::Swimming => Swimming::new(
            session,
            check.non_negative("pool_length_m", params[3])?,
            check.count("pool_count", params[4])?,
        )
        .into(),
    };
    Ok(workout)
}

// 2^53: above this not every whole number has an exact f64 representation.
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

struct Checker {
    policy: Validation,
}

impl Checker {
    fn strict(&self) -> bool {
        self.policy == Validation::Strict
    }

    fn finite(&self, name: &'static str, value: f64) -> Result<f64, WorkoutError> {
        if self.strict() && !value.is_finite() {
            return Err(invalid(name, value, "must be a finite number"));
        }
        Ok(value)
    }

    fn positive(&self, name: &'static str, value: f64) -> Result<f64, WorkoutError> {
        let value = self.finite(name, value)?;
        if self.strict() && value <= 0.0 {
            return Err(invalid(name, value, "must be greater than zero"));
        }
        Ok(value)
    }

    fn non_negative(&self, name: &'static str, value: f64) -> Result<f64, WorkoutError> {
        let value = self.finite(name, value)?;
        if self.strict() && value < 0.0 {
            return Err(invalid(name, value, "must not be negative"));
        }
        Ok(value)
    }

    fn count(&self, name: &'static str, value: f64) -> Result<u64, WorkoutError> {
        let value = self.non_negative(name, value)?;
        if self.strict() && value.fract() != 0.0 {
            return Err(invalid(name, value, "must be a whole number"));
        }
        if self.strict() && value > MAX_EXACT_COUNT {
            return Err(invalid(name, value, "out of range"));
        }
        // truncates toward zero; NaN and negatives become 0, huge values saturate
        Ok(value as u64)
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> WorkoutError {
    WorkoutError::InvalidParameter {
        name,
        value,
        reason,
    }
}
