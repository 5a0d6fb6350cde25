use crate::training::{M_IN_KM, MIN_IN_H, Session, Training, WorkoutKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight_kg
            / M_IN_KM
            * (self.session.duration_h * MIN_IN_H)
    }
}
