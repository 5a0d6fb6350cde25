//! Command-line front end for `workout_calc`: turns workout packages into
//! report lines.

use tracing::{info, warn};
use workout_calc::{Config, Training, observability, read_package_with};

pub mod error;
pub mod packages;

pub use error::{CliError, CliResult};
pub use packages::{Package, load_packages, packages_schema, sample_packages};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-format report line
    #[default]
    Text,
    /// One JSON object per workout
    Json,
}

/// Outcome of processing a batch of packages.
#[derive(Debug, Default)]
pub struct Report {
    pub lines: Vec<String>,
    pub failures: Vec<(usize, CliError)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build, summarize and render every package. A failing package is logged and
/// skipped; the rest of the batch is still processed.
pub fn process(packages: &[Package], config: &Config, format: OutputFormat) -> Report {
    let mut report = Report::default();
    for (idx, pkg) in packages.iter().enumerate() {
        match render_package(pkg, config, format) {
            Ok(line) => report.lines.push(line),
            Err(e) => {
                warn!(index = idx, code = %pkg.code, error = %e, "skipping package");
                report.failures.push((idx, e));
            }
        }
    }
    info!(
        processed = report.lines.len(),
        failed = report.failures.len(),
        "packages processed"
    );
    report
}

/// Log filter directive: `WORKOUT_CALC_LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn log_filter_from<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get("WORKOUT_CALC_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string())
}

fn render_package(pkg: &Package, config: &Config, format: OutputFormat) -> CliResult<String> {
    let workout = read_package_with(&pkg.code, &pkg.params, config)?;
    let summary = workout.summarize();
    observability::record_summary(workout.kind());
    match format {
        OutputFormat::Text => Ok(summary.render()),
        OutputFormat::Json => Ok(serde_json::to_string(&summary)?),
    }
}
