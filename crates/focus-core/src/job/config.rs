use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_OUTPUT_PATH, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::io::decode::ImageSource;
use crate::quality::verdict::validate_threshold;

/// Everything a job needs, fixed at construction time.
#[derive(Clone, Debug, PartialEq)]
pub struct JobConfig {
    /// Image to score. `None` produces an `input_missing` error result.
    pub source: Option<ImageSource>,
    pub threshold: f64,
    /// Where the JSON result document is written.
    pub output: PathBuf,
}

impl JobConfig {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    /// Build a config from persisted settings plus a source.
    pub fn from_settings(source: Option<ImageSource>, settings: &JobSettings) -> Self {
        Self {
            source,
            threshold: settings.threshold,
            output: settings.output.clone(),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Reject thresholds that are not finite and above zero.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold).map(|_| ())
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            source: None,
            threshold: DEFAULT_THRESHOLD,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// The file-backed part of a job configuration (TOML).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobSettings {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl JobSettings {
    /// Reject thresholds that are not finite and above zero.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold).map(|_| ())
    }
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            output: default_output(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}
