use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FocusError, Result};
use crate::grid::GrayscaleGrid;
use crate::quality::laplacian::laplacian_variance;

/// Sharp/blurry classification of one image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// `focus_measure >= threshold`.
    pub is_acceptable: bool,
    /// Laplacian variance of the grayscale grid.
    pub focus_measure: f64,
    /// `focus_measure / (2 * threshold)` clamped to [0, 1].
    pub normalized_score: f64,
    pub threshold: f64,
}

impl Verdict {
    /// Classify an already computed focus measure against `threshold`.
    ///
    /// `threshold` must pass [`validate_threshold`]; [`score`] checks it.
    pub fn classify(focus_measure: f64, threshold: f64) -> Self {
        Self {
            is_acceptable: focus_measure >= threshold,
            focus_measure,
            normalized_score: normalized_score(focus_measure, threshold),
            threshold,
        }
    }

    /// Human-readable verdict line.
    pub fn message(&self) -> String {
        if self.is_acceptable {
            format!(
                "Image is in focus (focus measure {:.2} >= threshold {:.2})",
                self.focus_measure, self.threshold
            )
        } else {
            format!(
                "Image is too blurry (focus measure {:.2} < threshold {:.2})",
                self.focus_measure, self.threshold
            )
        }
    }
}

/// Map a focus measure onto [0, 1] with `threshold` landing on 0.5.
pub fn normalized_score(focus_measure: f64, threshold: f64) -> f64 {
    (focus_measure / (threshold * 2.0)).clamp(0.0, 1.0)
}

/// Accept only finite thresholds above zero.
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(threshold)
    } else {
        Err(FocusError::InvalidConfig(format!(
            "threshold must be a finite number above 0, got {threshold}"
        )))
    }
}

/// Score a grid: Laplacian variance, then classification against `threshold`.
///
/// Fails for an invalid threshold or a zero-area grid.
pub fn score(grid: &GrayscaleGrid, threshold: f64) -> Result<Verdict> {
    let threshold = validate_threshold(threshold)?;
    if grid.is_empty() {
        return Err(FocusError::InvalidGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let focus_measure = laplacian_variance(&grid.data);
    let verdict = Verdict::classify(focus_measure, threshold);
    debug!(
        focus_measure,
        threshold,
        acceptable = verdict.is_acceptable,
        "Scored grid"
    );
    Ok(verdict)
}
