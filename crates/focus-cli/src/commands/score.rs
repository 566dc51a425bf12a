use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use focus_core::consts::DEFAULT_THRESHOLD;
use focus_core::io::ImageSource;
use focus_core::quality::batch::score_sources_with_progress;
use focus_core::quality::verdict::validate_threshold;
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary::print_score_table;

#[derive(Args)]
pub struct ScoreArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Focus measure at or above which an image counts as sharp
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

pub fn run(args: &ScoreArgs) -> Result<ExitCode> {
    validate_threshold(args.threshold)?;
    let sources: Vec<ImageSource> = args.files.iter().cloned().map(ImageSource::Path).collect();

    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scoring images");

    let results = score_sources_with_progress(&sources, args.threshold, |done| {
        pb.set_position(done as u64);
    });
    pb.finish_and_clear();

    print_score_table(&args.files, &results, args.threshold);

    if results.iter().all(|r| r.is_ok()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
