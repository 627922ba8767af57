//! Grayscale reduction using BT.601 luminance weights.
//!
//! Negative and threshold reduce color buffers to luminance before remapping.
//! Arithmetic is done in f64 and truncated to 8 bits, so round-tripping pure
//! black and pure white is exact.

use ndarray::{Array2, ArrayView3};

/// BT.601 luminance coefficients.
pub const LUMA_R: f64 = 0.299;
pub const LUMA_G: f64 = 0.587;
pub const LUMA_B: f64 = 0.114;

/// Reduce a buffer to a single luminance plane.
///
/// Grayscale input is copied as-is; RGB is reduced with the BT.601 weights
/// and truncated to 8 bits.
pub fn luminance_plane(input: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, channels) = input.dim();
    let mut plane = Array2::<u8>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            plane[[y, x]] = if channels == 1 {
                input[[y, x, 0]]
            } else {
                let r = input[[y, x, 0]] as f64;
                let g = input[[y, x, 1]] as f64;
                let b = input[[y, x, 2]] as f64;
                (LUMA_R * r + LUMA_G * g + LUMA_B * b) as u8
            };
        }
    }
    plane
}
