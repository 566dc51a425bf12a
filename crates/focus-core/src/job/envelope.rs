use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FocusError};
use crate::quality::verdict::Verdict;

/// Outcome of one job: a verdict, or a description of what went wrong.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultEnvelope {
    Success(Verdict),
    Error(ErrorDescriptor),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&FocusError> for ErrorDescriptor {
    fn from(err: &FocusError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// On-disk shape of the result: `{"output": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub output: OutputBody,
}

/// Flat body of the result document. Success fields and error fields are
/// mutually exclusive; absent ones are omitted from the JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputBody {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_measure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl ResultEnvelope {
    pub fn from_error(err: &FocusError) -> Self {
        Self::Error(ErrorDescriptor::from(err))
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Success(_) => Status::Success,
            Self::Error(_) => Status::Error,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Success(verdict) => Some(verdict),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorDescriptor> {
        match self {
            Self::Success(_) => None,
            Self::Error(descriptor) => Some(descriptor),
        }
    }

    pub fn to_document(&self) -> ResultDocument {
        let output = match self {
            Self::Success(verdict) => OutputBody {
                status: Status::Success,
                focus_measure: Some(verdict.focus_measure),
                score: Some(verdict.normalized_score),
                threshold: Some(verdict.threshold),
                success: Some(verdict.is_acceptable),
                message: Some(verdict.message()),
                error: None,
                kind: None,
            },
            Self::Error(descriptor) => OutputBody {
                status: Status::Error,
                focus_measure: None,
                score: None,
                threshold: None,
                success: None,
                message: None,
                error: Some(descriptor.message.clone()),
                kind: Some(descriptor.kind),
            },
        };
        ResultDocument { output }
    }

    /// Pretty-printed JSON result document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_document())
    }
}
