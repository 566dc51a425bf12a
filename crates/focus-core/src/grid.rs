use ndarray::Array2;

/// A single-channel luminance image.
/// Pixel values are f32 holding integral intensities in [0.0, 255.0].
#[derive(Clone, Debug, PartialEq)]
pub struct GrayscaleGrid {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl GrayscaleGrid {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// True when the grid has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
