#![allow(dead_code)]

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use focus_core::grid::GrayscaleGrid;

/// Black/white checkerboard with `cell`-pixel squares.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Smooth diagonal ramp with almost no second-derivative content.
pub fn ramp(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        Luma([((x + y) * 255 / (width + height - 2).max(1)) as u8])
    })
}

/// Product of two sines with an 8-pixel period: plenty of mid-frequency
/// detail that survives JPEG compression at high quality.
pub fn sine_texture(width: u32, height: u32) -> GrayImage {
    use std::f32::consts::PI;
    GrayImage::from_fn(width, height, |x, y| {
        let v = 128.0
            + 100.0 * (2.0 * PI * x as f32 / 8.0).sin() * (2.0 * PI * y as f32 / 8.0).sin();
        Luma([v.round() as u8])
    })
}

pub fn uniform(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([value]))
}

pub fn encode_png(img: &DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
    buf.into_inner()
}

pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality))
        .expect("encode jpeg");
    buf
}

pub fn png_bytes(img: GrayImage) -> Vec<u8> {
    encode_png(&DynamicImage::ImageLuma8(img))
}

/// Grid with alternating 0/255 pixels.
pub fn checkerboard_grid(size: usize) -> GrayscaleGrid {
    GrayscaleGrid::new(Array2::from_shape_fn((size, size), |(r, c)| {
        if (r + c) % 2 == 0 {
            255.0
        } else {
            0.0
        }
    }))
}
