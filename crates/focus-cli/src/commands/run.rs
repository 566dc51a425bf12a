use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use focus_core::consts::{DEFAULT_OUTPUT_PATH, INPUT_ENV, INPUT_FILE_ENV};
use focus_core::error::{FocusError, Result};
use focus_core::io::ImageSource;
use focus_core::job::{persist, FocusJob, JobConfig, JobOutcome, JobSettings, ResultEnvelope};
use tracing::{info, warn};

use crate::summary::print_job_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Base64-encoded image bytes
    #[arg(long, env = INPUT_ENV, hide_env_values = true)]
    pub input: Option<String>,

    /// Path to an image file
    #[arg(long, env = INPUT_FILE_ENV)]
    pub input_file: Option<PathBuf>,

    /// Job settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Focus measure at or above which an image counts as sharp
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Result document path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> ExitCode {
    let outcome = execute(args);
    print_job_summary(&outcome);
    ExitCode::from(outcome.exit_code())
}

/// Every path through here ends in a persisted result document, unless the
/// write itself fails.
fn execute(args: &RunArgs) -> JobOutcome {
    let settings = match load_settings(args) {
        Ok(settings) => settings,
        Err(err) => {
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
            return persist_failure(&err, output);
        }
    };

    match resolve_source(args) {
        Ok(source) => FocusJob::new(JobConfig::from_settings(source, &settings)).execute(),
        // Bad base64 never reaches the decoder but still gets a result document.
        Err(err) => persist_failure(&err, settings.output),
    }
}

fn persist_failure(err: &FocusError, output: PathBuf) -> JobOutcome {
    info!("Starting focus measurement");
    warn!(kind = %err.kind(), "Focus measurement failed: {err}");
    persist(ResultEnvelope::from_error(err), output)
}

/// Config file first, then CLI flags on top.
fn load_settings(args: &RunArgs) -> Result<JobSettings> {
    let mut settings = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            FocusError::InvalidConfig(format!(
                "failed to read config {}: {e}",
                config_path.display()
            ))
        })?;
        toml::from_str(&contents).map_err(|e| {
            FocusError::InvalidConfig(format!("invalid config {}: {e}", config_path.display()))
        })?
    } else {
        JobSettings::default()
    };

    if let Some(threshold) = args.threshold {
        settings.threshold = threshold;
    }
    if let Some(ref output) = args.output {
        settings.output = output.clone();
    }
    settings.validate()?;
    Ok(settings)
}

/// Base64 input wins over a file path when both are given.
fn resolve_source(args: &RunArgs) -> Result<Option<ImageSource>> {
    match (&args.input, &args.input_file) {
        (Some(text), file) => {
            if file.is_some() {
                warn!("Both base64 input and input file given; using base64 input");
            }
            ImageSource::from_base64(text).map(Some)
        }
        (None, Some(path)) => Ok(Some(ImageSource::Path(path.clone()))),
        (None, None) => Ok(None),
    }
}
