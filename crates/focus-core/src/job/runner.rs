use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::error::{FocusError, Result};
use crate::io::decode::{decode, ImageSource};
use crate::job::config::JobConfig;
use crate::job::envelope::ResultEnvelope;
use crate::quality::verdict::{score, Verdict};

/// One-shot focus measurement job: decode, score, write the result.
#[derive(Clone, Debug)]
pub struct FocusJob {
    config: JobConfig,
}

/// What [`FocusJob::execute`] did.
#[derive(Debug)]
pub struct JobOutcome {
    pub envelope: ResultEnvelope,
    pub output: PathBuf,
    /// Set when the result document could not be written.
    pub write_error: Option<FocusError>,
}

impl JobOutcome {
    pub fn is_written(&self) -> bool {
        self.write_error.is_none()
    }

    /// 0 once a result document exists on disk, even for a blurry verdict
    /// or an error result. 1 when nothing could be written.
    pub fn exit_code(&self) -> u8 {
        if self.is_written() {
            0
        } else {
            1
        }
    }
}

impl FocusJob {
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    /// Decode and score the configured source. Every failure is converted
    /// into an error envelope; this never returns `Err` or panics on bad input.
    pub fn run(&self) -> ResultEnvelope {
        match self.evaluate() {
            Ok(verdict) => {
                info!(
                    focus_measure = verdict.focus_measure,
                    score = verdict.normalized_score,
                    threshold = verdict.threshold,
                    acceptable = verdict.is_acceptable,
                    "{}",
                    verdict.message()
                );
                ResultEnvelope::Success(verdict)
            }
            Err(err) => {
                warn!(kind = %err.kind(), "Focus measurement failed: {err}");
                ResultEnvelope::from_error(&err)
            }
        }
    }

    fn evaluate(&self) -> Result<Verdict> {
        let input = self
            .config
            .source
            .as_ref()
            .map_or_else(|| "none".to_string(), ImageSource::describe);
        info!(input = %input, threshold = self.config.threshold, "Starting focus measurement");

        self.config.validate()?;
        let source = self.config.source.as_ref().ok_or(FocusError::InputMissing)?;
        let grid = decode(source)?;
        info!(
            width = grid.width(),
            height = grid.height(),
            "Image decoded to grayscale"
        );
        score(&grid, self.config.threshold)
    }

    /// Run the job and persist its result document once.
    pub fn execute(&self) -> JobOutcome {
        persist(self.run(), self.config.output.clone())
    }
}

/// Write an envelope to `output` and report how it went.
///
/// Write failures are logged here; the caller only sees them through
/// [`JobOutcome::write_error`] and the exit code.
pub fn persist(envelope: ResultEnvelope, output: PathBuf) -> JobOutcome {
    let write_error = match write_result(&envelope, &output) {
        Ok(()) => {
            info!(output = %output.display(), "Result written");
            None
        }
        Err(err) => {
            error!(output = %output.display(), "{err}");
            Some(err)
        }
    };
    JobOutcome {
        envelope,
        output,
        write_error,
    }
}

/// Write the envelope as pretty JSON to `path`, creating parent directories.
pub fn write_result(envelope: &ResultEnvelope, path: &Path) -> Result<()> {
    let write_failure = |source: std::io::Error| FocusError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_failure)?;
    }
    let json = envelope.to_json().map_err(|e| write_failure(e.into()))?;
    std::fs::write(path, json).map_err(write_failure)
}
