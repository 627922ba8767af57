//! Shared utilities used by multiple operations: buffer validation,
//! saturation to 8-bit, and grayscale-to-RGB broadcast.

use ndarray::{Array2, Array3, ArrayView3};

use crate::error::TransformError;

/// Validate a raster buffer and return its (height, width, channels).
///
/// Accepted buffers have at least one row and one column and either 1
/// (grayscale) or 3 (RGB) channels.
pub fn check_raster(input: &ArrayView3<u8>) -> Result<(usize, usize, usize), TransformError> {
    let (height, width, channels) = input.dim();
    if height == 0 || width == 0 {
        return Err(TransformError::InvalidDimensions);
    }
    if channels != 1 && channels != 3 {
        return Err(TransformError::UnsupportedChannelCount(channels));
    }
    Ok((height, width, channels))
}

/// Saturate a signed intermediate to the 8-bit output range:
/// values below 0 become 0, values above 255 become 255.
pub fn clamp_to_u8(raw: &Array3<i32>) -> Array3<u8> {
    raw.mapv(|v| v.clamp(0, 255) as u8)
}

/// Broadcast a single-channel plane to a 3-channel buffer with R = G = B.
pub fn broadcast_to_rgb(plane: &Array2<u8>) -> Array3<u8> {
    let (height, width) = plane.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let v = plane[[y, x]];
            output[[y, x, 0]] = v;
            output[[y, x, 1]] = v;
            output[[y, x, 2]] = v;
        }
    }
    output
}
