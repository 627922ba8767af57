//! Dynamic-range-aware negative transform.
//!
//! The complement is taken against `L = 2^ceil(log2(max)) - 1` where `max` is
//! the maximum sample actually present, not the fixed value 255, so the
//! mapping matches the visible bit depth of the content. The level is
//! recomputed from the buffer on every call; nothing is memoized.

use log::debug;
use ndarray::{Array2, Array3, ArrayView3};

use crate::error::TransformError;
use crate::ops::core::{broadcast_to_rgb, check_raster};
use crate::ops::grayscale::luminance_plane;

/// Upper bound of the negative mapping for one channel:
/// `2^ceil(log2(max)) - 1`, or 255 when the channel is all zeros.
fn dynamic_level(max_observed: u8) -> i32 {
    if max_observed == 0 {
        return 255;
    }
    let bits = (max_observed as f64).log2().ceil();
    2f64.powf(bits) as i32 - 1
}

/// Negate a buffer against its observed dynamic range.
///
/// With `force_gray` the buffer is first reduced to luminance and the negated
/// plane is broadcast to three identical channels. Without it, each channel
/// is negated independently against its own maximum (a grayscale input is
/// stacked to three channels first). The output is always 3-channel.
///
/// Samples above the computed level saturate at 0 (only reachable when the
/// maximum is 1 or an exact power of two).
pub fn negative(input: ArrayView3<u8>, force_gray: bool) -> Result<Array3<u8>, TransformError> {
    let (height, width, channels) = check_raster(&input)?;

    if force_gray {
        let gray = luminance_plane(input);
        let max = gray.iter().copied().max().unwrap_or(0);
        let level = dynamic_level(max);
        debug!("negative: force_gray max={max} level={level}");

        let mut neg = Array2::<u8>::zeros((height, width));
        for y in 0..height {
            for x in 0..width {
                neg[[y, x]] = (level - gray[[y, x]] as i32).max(0) as u8;
            }
        }
        return Ok(broadcast_to_rgb(&neg));
    }

    let mut output = Array3::<u8>::zeros((height, width, 3));
    for c in 0..3 {
        // a grayscale input behaves as the same plane on all three channels
        let src = if channels == 1 { 0 } else { c };

        let mut max = 0u8;
        for y in 0..height {
            for x in 0..width {
                max = max.max(input[[y, x, src]]);
            }
        }
        let level = dynamic_level(max);
        debug!("negative: channel={c} max={max} level={level}");

        for y in 0..height {
            for x in 0..width {
                output[[y, x, c]] = (level - input[[y, x, src]] as i32).max(0) as u8;
            }
        }
    }
    Ok(output)
}

/// The negative mapping as input/output pairs: the distinct sorted sample
/// values present in the buffer (its luminance when `force_gray`) and the
/// value each maps to. Intended for curve visualization and testing; outputs
/// are unclamped.
pub fn negative_curve(
    input: ArrayView3<u8>,
    force_gray: bool,
) -> Result<(Vec<u8>, Vec<f32>), TransformError> {
    check_raster(&input)?;

    let mut seen = [false; 256];
    if force_gray {
        for &v in luminance_plane(input).iter() {
            seen[v as usize] = true;
        }
    } else {
        for &v in input.iter() {
            seen[v as usize] = true;
        }
    }

    let values: Vec<u8> = (0u16..256)
        .filter(|&v| seen[v as usize])
        .map(|v| v as u8)
        .collect();
    let max = values.last().copied().unwrap_or(0);
    let level = dynamic_level(max);
    let outputs = values.iter().map(|&v| (level - v as i32) as f32).collect();
    Ok((values, outputs))
}
