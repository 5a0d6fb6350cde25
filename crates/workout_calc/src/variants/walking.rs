use crate::training::{MIN_IN_H, Session, Training, WorkoutKind};

const CM_IN_M: f64 = 100.0;
const KMH_IN_MSEC: f64 = 0.278;

/// Sports walking. Calories depend on the athlete's height as well.
#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height_cm: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(session: Session, height_cm: f64) -> Self {
        Self { session, height_cm }
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight_kg;
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MSEC;
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / (self.height_cm / CM_IN_M))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * (self.session.duration_h * MIN_IN_H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_running_step_length() {
        let walk = SportsWalking::new(Session::new(9000, 1.0, 75.0), 180.0);
        assert!((walk.distance_km() - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn calories_include_height_term() {
        let walk = SportsWalking::new(Session::new(9000, 1.0, 75.0), 180.0);
        assert!((walk.spent_calories() - 349.252).abs() < 1e-3);
    }

    #[test]
    fn taller_walkers_burn_less_at_same_speed() {
        let short = SportsWalking::new(Session::new(9000, 1.0, 75.0), 160.0);
        let tall = SportsWalking::new(Session::new(9000, 1.0, 75.0), 200.0);
        assert!(short.spent_calories() > tall.spent_calories());
    }

    #[test]
    fn zero_height_yields_non_finite_calories() {
        let walk = SportsWalking::new(Session::new(9000, 1.0, 75.0), 0.0);
        assert!(!walk.spent_calories().is_finite());
    }
}
