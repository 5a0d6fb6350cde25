//! Counters emitted through the `metrics` facade. Without an installed
//! recorder they are no-ops.

use metrics::counter;

use crate::WorkoutKind;

pub const WORKOUTS_BUILT: &str = "workout_calc_workouts_built_total";
pub const PACKAGES_REJECTED: &str = "workout_calc_packages_rejected_total";
pub const SUMMARIES: &str = "workout_calc_summaries_total";

pub fn record_built(kind: WorkoutKind) {
    counter!(WORKOUTS_BUILT, "kind" => kind.code()).increment(1);
}

pub fn record_rejected(reason: &'static str) {
    counter!(PACKAGES_REJECTED, "reason" => reason).increment(1);
}

pub fn record_summary(kind: WorkoutKind) {
    counter!(SUMMARIES, "kind" => kind.code()).increment(1);
}

#[cfg(test)]
pub(crate) mod testing {
    use metrics::{
        Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    };
    use std::sync::{Arc, Mutex};

    /// Recorder that remembers every counter increment as `name{labels}`.
    #[derive(Clone, Default)]
    pub(crate) struct CapturingRecorder {
        pub(crate) seen: Arc<Mutex<Vec<String>>>,
    }

    struct Handle {
        key: String,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl CounterFn for Handle {
        fn increment(&self, _value: u64) {
            self.seen.lock().unwrap().push(self.key.clone());
        }

        fn absolute(&self, _value: u64) {}
    }

    impl Recorder for CapturingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let labels: Vec<String> = key
                .labels()
                .map(|l| format!("{}={}", l.key(), l.value()))
                .collect();
            Counter::from_arc(Arc::new(Handle {
                key: format!("{}{{{}}}", key.name(), labels.join(",")),
                seen: self.seen.clone(),
            }))
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CapturingRecorder;
    use super::*;

    #[test]
    fn counters_carry_kind_label() {
        let recorder = CapturingRecorder::default();
        metrics::with_local_recorder(&recorder, || {
            record_built(WorkoutKind::Swimming);
            record_summary(WorkoutKind::Running);
            record_rejected("arity");
        });
        let seen = recorder.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                "workout_calc_workouts_built_total{kind=SWM}".to_string(),
                "workout_calc_summaries_total{kind=RUN}".to_string(),
                "workout_calc_packages_rejected_total{reason=arity}".to_string(),
            ]
        );
    }

    #[test]
    fn counters_are_noops_without_recorder() {
        record_built(WorkoutKind::Running);
        record_rejected("unknown_type");
    }
}
