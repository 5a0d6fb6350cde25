//! The shared workout abstraction.
//!
//! [`Training`] carries the formulas every activity has in common: distance
//! from the step count and mean speed from distance over time. Calorie
//! expenditure has no common formula, so each variant must provide it.
//! [`Workout`] is the closed set of variants the factory can produce.

use std::fmt;
use std::str::FromStr;

use crate::summary::Summary;
use crate::variants::{Running, SportsWalking, Swimming};
use crate::WorkoutError;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Activity kinds known to the factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Package code, as found in sensor uploads.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in the rendered summary.
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional parameters the package must carry.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Length of one step (or stroke) in metres.
    pub fn step_len_m(self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::SportsWalking => 0.65,
            WorkoutKind::Swimming => 1.38,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw inputs shared by every activity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub action_count: u64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Session {
    /// Bundle the raw inputs; no validation happens here.
    pub fn new(action_count: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_h,
            weight_kg,
        }
    }
}

/// Metrics every workout can report. Only `spent_calories` has no default.
pub trait Training {
    /// Which activity this is; selects step length and display name.
    fn kind(&self) -> WorkoutKind;

    /// Raw inputs the workout was built from.
    fn session(&self) -> &Session;

    /// Distance covered, in kilometres.
    fn distance_km(&self) -> f64 {
        self.session().action_count as f64 * self.kind().step_len_m() / M_IN_KM
    }

    /// Mean speed in km/h. Non-finite when the duration is zero.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_h
    }

    /// Spent energy in kilocalories.
    fn spent_calories(&self) -> f64;

    /// Collect the derived metrics into a [`Summary`].
    fn summarize(&self) -> Summary {
        Summary {
            training_type: self.kind().name().to_string(),
            duration_h: self.session().duration_h,
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

/// A constructed workout of one of the supported kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(w) => w.kind(),
            Workout::SportsWalking(w) => w.kind(),
            Workout::Swimming(w) => w.kind(),
        }
    }

    fn session(&self) -> &Session {
        match self {
            Workout::Running(w) => w.session(),
            Workout::SportsWalking(w) => w.session(),
            Workout::Swimming(w) => w.session(),
        }
    }

    fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }
}

/// Wrap a running session.
impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

/// Wrap a sports walking session.
impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

/// Wrap a swimming session.
impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
