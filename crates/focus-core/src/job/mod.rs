pub mod config;
pub mod envelope;
pub mod runner;

pub use config::{JobConfig, JobSettings};
pub use envelope::{ErrorDescriptor, OutputBody, ResultDocument, ResultEnvelope, Status};
pub use runner::{persist, write_result, FocusJob, JobOutcome};
