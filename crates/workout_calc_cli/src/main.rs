use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use workout_calc::Config;
use workout_calc_cli::{
    OutputFormat, load_packages, log_filter_from, packages_schema, process, sample_packages,
};

#[derive(Parser)]
#[command(
    name = "workout-calc",
    about = "Workout statistics calculator",
    long_about = "Compute distance, mean speed and spent calories for running, sports walking and swimming packages"
)]
struct Args {
    /// JSON file with an array of {"code", "params"} packages; built-in samples when omitted
    packages: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the JSON schema of the package file and exit
    #[arg(long)]
    schema: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let log_env = log_filter_from(|k| std::env::var(k).ok());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // stdout carries the reports, logs go to stderr
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!(%log_env, "workout_calc: log filter");

    let args = Args::parse();
    if args.schema {
        println!("{}", serde_json::to_string_pretty(&packages_schema())?);
        return Ok(());
    }

    let config = Config::from_env()?;
    let packages = match &args.packages {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            load_packages(BufReader::new(file))
                .with_context(|| format!("reading packages from {}", path.display()))?
        }
        None => sample_packages(),
    };
    tracing::info!(count = packages.len(), validation = ?config.validation, "processing packages");

    let report = process(&packages, &config, args.format);
    for line in &report.lines {
        println!("{line}");
    }

    if !report.is_success() {
        anyhow::bail!("{} of {} packages failed", report.failures.len(), packages.len());
    }
    Ok(())
}
