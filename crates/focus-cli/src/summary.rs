use std::path::PathBuf;

use console::Style;
use focus_core::error::Result;
use focus_core::job::{JobOutcome, ResultEnvelope};
use focus_core::quality::Verdict;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    good: Style,
    bad: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green().bold(),
            bad: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

/// Operator-facing narrative for one job, on stderr.
pub fn print_job_summary(outcome: &JobOutcome) {
    let s = Styles::new();

    eprintln!();
    eprintln!("  {}", s.title.apply_to("Focus Measure"));
    match &outcome.envelope {
        ResultEnvelope::Success(verdict) => print_verdict(&s, verdict),
        ResultEnvelope::Error(descriptor) => {
            eprintln!(
                "  {:<14}{}",
                s.label.apply_to("Status"),
                s.bad.apply_to(format!("error ({})", descriptor.kind))
            );
            eprintln!("  {:<14}{}", s.label.apply_to("Error"), descriptor.message);
        }
    }

    match &outcome.write_error {
        None => eprintln!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.path.apply_to(outcome.output.display())
        ),
        Some(err) => eprintln!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.bad.apply_to(format!("not written: {err}"))
        ),
    }
    eprintln!();
}

fn print_verdict(s: &Styles, verdict: &Verdict) {
    let status = if verdict.is_acceptable {
        s.good.apply_to("in focus")
    } else {
        s.bad.apply_to("too blurry")
    };
    eprintln!("  {:<14}{}", s.label.apply_to("Verdict"), status);
    eprintln!(
        "  {:<14}{}",
        s.label.apply_to("Measure"),
        s.value.apply_to(format!("{:.4}", verdict.focus_measure))
    );
    eprintln!(
        "  {:<14}{}",
        s.label.apply_to("Score"),
        s.value.apply_to(format!("{:.4}", verdict.normalized_score))
    );
    eprintln!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(verdict.threshold)
    );
}

/// Table of per-file results for the `score` command, on stdout.
pub fn print_score_table(files: &[PathBuf], results: &[Result<Verdict>], threshold: f64) {
    let s = Styles::new();

    println!(
        "\n{} image(s), threshold {}",
        files.len(),
        s.value.apply_to(threshold)
    );
    println!("{:>12}  {:>8}  {:<10}  {}", "Measure", "Score", "Verdict", "File");
    println!("{}", "-".repeat(60));

    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(verdict) => {
                let label = if verdict.is_acceptable {
                    s.good.apply_to(format!("{:<10}", "sharp"))
                } else {
                    s.bad.apply_to(format!("{:<10}", "blurry"))
                };
                println!(
                    "{:>12.4}  {:>8.4}  {}  {}",
                    verdict.focus_measure,
                    verdict.normalized_score,
                    label,
                    file.display()
                );
            }
            Err(err) => {
                println!(
                    "{:>12}  {:>8}  {}  {}: {}",
                    "-",
                    "-",
                    s.bad.apply_to(format!("{:<10}", err.kind())),
                    file.display(),
                    err
                );
            }
        }
    }
}
