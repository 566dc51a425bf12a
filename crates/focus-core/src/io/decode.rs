use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::RgbImage;
use ndarray::Array2;
use tracing::debug;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MAX_INTENSITY};
use crate::error::{FocusError, Result};
use crate::grid::GrayscaleGrid;

/// Where the image for a job comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Encoded image bytes already in memory (PNG, JPEG, ...).
    Bytes(Vec<u8>),
    /// Path to an encoded image file on disk.
    Path(PathBuf),
}

impl ImageSource {
    /// Decode base64 text into a `Bytes` source.
    ///
    /// Leading/trailing whitespace and one pair of wrapping quotes (as in
    /// `INPUT="..."`) are stripped first.
    pub fn from_base64(text: &str) -> Result<Self> {
        let cleaned = strip_quotes(text.trim()).trim();
        let bytes = STANDARD
            .decode(cleaned)
            .map_err(|e| FocusError::DecodeFailure(format!("invalid base64 input: {e}")))?;
        Ok(Self::Bytes(bytes))
    }

    /// Short description for logs. Never includes the raw bytes.
    pub fn describe(&self) -> String {
        match self {
            Self::Bytes(bytes) => format!("{} bytes", bytes.len()),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Decode an image source into an 8-bit luminance grid.
///
/// Path sources are read fully into memory and go through the same
/// in-memory decode as byte sources. Decoding is attempted once.
pub fn decode(source: &ImageSource) -> Result<GrayscaleGrid> {
    match source {
        ImageSource::Bytes(bytes) => decode_bytes(bytes),
        ImageSource::Path(path) => {
            let bytes = read_image_file(path)?;
            decode_bytes(&bytes)
        }
    }
}

/// Decode an in-memory encoded image into a luminance grid.
pub fn decode_bytes(bytes: &[u8]) -> Result<GrayscaleGrid> {
    if bytes.is_empty() {
        return Err(FocusError::DecodeFailure("empty image buffer".into()));
    }

    let img = image::load_from_memory(bytes)?;
    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded image"
    );

    // Normalize channel order and bit depth before the gray conversion.
    let rgb = img.to_rgb8();
    let grid = luminance(&rgb);
    if grid.is_empty() {
        return Err(FocusError::InvalidGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }
    Ok(grid)
}

fn read_image_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FocusError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FocusError::DecodeFailure(format!("cannot read {}: {e}", path.display())),
    })
}

/// Convert an 8-bit RGB image to BT.601 luminance, rounded to whole
/// intensities so that equal pixels give equal grids regardless of the
/// source color layout.
pub fn luminance(rgb: &RgbImage) -> GrayscaleGrid {
    let (w, h) = rgb.dimensions();
    let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        let [r, g, b] = rgb.get_pixel(col as u32, row as u32).0;
        let y = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
        y.round().clamp(0.0, MAX_INTENSITY)
    });
    GrayscaleGrid::new(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("'abc'"), "abc");
        assert_eq!(strip_quotes("\"abc"), "\"abc");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("abc"), "abc");
    }

    #[test]
    fn test_gray_pixels_keep_their_value() {
        let mut rgb = RgbImage::new(256, 1);
        for v in 0..=255u32 {
            let v8 = v as u8;
            rgb.put_pixel(v, 0, image::Rgb([v8, v8, v8]));
        }
        let grid = luminance(&rgb);
        for v in 0..256usize {
            assert_eq!(grid.data[[0, v]], v as f32);
        }
    }

    #[test]
    fn test_describe_hides_bytes() {
        let source = ImageSource::Bytes(vec![1, 2, 3]);
        assert_eq!(source.describe(), "3 bytes");
    }
}
