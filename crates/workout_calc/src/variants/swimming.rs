use crate::training::{M_IN_KM, Session, Training, WorkoutKind};

/// Pool swimming.
///
/// Mean speed comes from the pool length and the number of laps, while
/// [`distance_km`](Training::distance_km) keeps the stroke-based formula. The
/// two are intentionally independent; reports have always been produced this
/// way.
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    session: Session,
    pool_length_m: f64,
    pool_count: u64,
}

impl Swimming {
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 2.0;

    pub fn new(session: Session, pool_length_m: f64, pool_count: u64) -> Self {
        Self {
            session,
            pool_length_m,
            pool_count,
        }
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_count(&self) -> u64 {
        self.pool_count
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_count as f64 / M_IN_KM / self.session.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight_kg
            * self.session.duration_h
            * Self::CALORIES_MEAN_SPEED_MULTIPLIER
    }
}
