//! Logarithmic and gamma point transforms.
//!
//! Both remap every sample independently per channel and preserve the input
//! channel count. Arithmetic is f64 with round-then-clamp, per the transform
//! definitions below.

use log::debug;
use ndarray::{Array3, ArrayView3};

use crate::error::TransformError;
use crate::ops::core::check_raster;

/// Logarithmic remap.
///
/// Each channel is scaled by `c = 255 / ln(1 + m)` where `m` is that
/// channel's own observed maximum (255 when the channel holds no signal), so
/// the brightest sample of every channel lands on 255:
/// `out = round(c * ln(1 + in))`, clamped to [0, 255].
pub fn log_transform(input: ArrayView3<u8>) -> Result<Array3<u8>, TransformError> {
    let (height, width, channels) = check_raster(&input)?;
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for c in 0..channels {
        let mut max = 0u8;
        for y in 0..height {
            for x in 0..width {
                max = max.max(input[[y, x, c]]);
            }
        }
        let m = if max > 0 { max as f64 } else { 255.0 };
        let scale = 255.0 / (m).ln_1p();
        debug!("log_transform: channel={c} max={max} scale={scale}");

        for y in 0..height {
            for x in 0..width {
                let v = input[[y, x, c]] as f64;
                let s = (scale * v.ln_1p()).round();
                output[[y, x, c]] = s.clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(output)
}

/// Gamma remap with the display-gamma convention (`1/gamma` exponent):
/// `out = round(255 * (in/255)^(1/gamma))`, clamped to [0, 255].
///
/// Non-positive gamma is silently normalized to 1.0 instead of failing.
pub fn gamma_transform(input: ArrayView3<u8>, gamma: f64) -> Result<Array3<u8>, TransformError> {
    let (height, width, channels) = check_raster(&input)?;
    let gamma = if gamma <= 0.0 { 1.0 } else { gamma };
    let inv = 1.0 / gamma;
    debug!("gamma_transform: gamma={gamma} exponent={inv}");

    let mut output = Array3::<u8>::zeros((height, width, channels));
    for c in 0..channels {
        for y in 0..height {
            for x in 0..width {
                let v = input[[y, x, c]] as f64 / 255.0;
                let s = (255.0 * v.powf(inv)).round();
                output[[y, x, c]] = s.clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(output)
}
