/// Default Laplacian-variance threshold separating sharp from blurry images.
/// Tuned against 8-bit luminance grids with reflect-101 borders.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Fixed location of the result document in the reference deployment.
pub const DEFAULT_OUTPUT_PATH: &str = "/outputs/result.json";

/// Environment variable carrying base64-encoded image bytes.
pub const INPUT_ENV: &str = "INPUT";

/// Environment variable carrying a path to an image file.
pub const INPUT_FILE_ENV: &str = "INPUT_FILE";

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Upper bound of grayscale intensities produced by the decoder.
pub const MAX_INTENSITY: f32 = 255.0;
