use std::str::FromStr;

use crate::WorkoutError;

/// How strictly package parameters are checked before a workout is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Reject values that would make the formulas meaningless.
    #[default]
    Strict,
    /// Skip range checks. Zero durations produce `inf`/`NaN` metrics; counts
    /// are truncated toward zero and negative counts become 0.
    Lenient,
}

impl FromStr for Validation {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Validation::Strict),
            "lenient" => Ok(Validation::Lenient),
            other => Err(WorkoutError::Config(format!(
                "WORKOUT_CALC_VALIDATION must be `strict` or `lenient`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub validation: Validation,
}

impl Config {
    pub fn from_env() -> Result<Self, WorkoutError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WorkoutError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let validation = match get("WORKOUT_CALC_VALIDATION") {
            Some(v) => v.parse()?,
            None => Validation::default(),
        };
        Ok(Self { validation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_defaults_to_strict() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg.validation, Validation::Strict);
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "WORKOUT_CALC_VALIDATION" => Some(" Lenient ".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.validation, Validation::Lenient);
    }

    #[test]
    fn from_env_rejects_unknown_policy() {
        let get = |k: &str| match k {
            "WORKOUT_CALC_VALIDATION" => Some("sloppy".into()),
            _ => None,
        };
        let res = Config::from_env_with(get);
        assert!(matches!(res, Err(WorkoutError::Config(msg)) if msg.contains("sloppy")));
    }
}
