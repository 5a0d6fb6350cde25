use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Derived metrics of a single workout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Summary {
    /// Render the fixed-format report line. Every number is printed with
    /// exactly three decimals.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Summary {
        Summary {
            training_type: "Running".into(),
            duration_h: 1.0,
            distance_km: 9.75,
            speed_kmh: 9.75,
            calories_kcal: 691.935,
        }
    }

    #[test]
    fn render_matches_template() {
        assert_eq!(
            sample().render(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 691.935."
        );
    }

    #[test]
    fn render_pads_and_rounds_to_three_decimals() {
        let s = Summary {
            training_type: "Swimming".into(),
            duration_h: 0.25,
            distance_km: 0.9936,
            speed_kmh: 2.0,
            calories_kcal: 12.34567,
        };
        let out = s.render();
        assert!(out.contains("Длительность: 0.250 ч."));
        assert!(out.contains("Дистанция: 0.994 км"));
        assert!(out.contains("Ср. скорость: 2.000 км/ч"));
        assert!(out.ends_with("Потрачено ккал: 12.346."));
    }

    #[test]
    fn serializes_field_names() {
        let v = serde_json::to_value(sample()).expect("json");
        assert_eq!(v.get("training_type").and_then(|v| v.as_str()), Some("Running"));
        assert_eq!(v.get("speed_kmh").and_then(|v| v.as_f64()), Some(9.75));
    }
}
