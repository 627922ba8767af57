//! 3x3 convolution engine with zero padding.
//!
//! Two entry points share one neighborhood scan:
//! - [`convolve_raw`] keeps the signed intermediate, for callers that combine
//!   responses before clamping (edge magnitude in first-order sharpening),
//! - [`convolve_clamped`] saturates to 8 bits, for callers that want a
//!   displayable buffer (smoothing passes, Laplacian edge view).
//!
//! The border policy is fixed: the buffer is conceptually padded with a
//! one-sample border of value 0 on all four sides, per channel.

use ndarray::{Array3, ArrayView3};

use crate::error::TransformError;
use crate::ops::core::{check_raster, clamp_to_u8};

/// A 3x3 kernel with integer coefficients over a common divisor.
///
/// Rational kernels (mean 1/9, binomial n/16) stay exact in integer
/// arithmetic this way. Sharpening and edge kernels use divisor 1 so the
/// signed accumulation passes through undivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3 {
    pub coeffs: [[i32; 3]; 3],
    pub divisor: i32,
}

impl Kernel3 {
    pub const fn new(coeffs: [[i32; 3]; 3], divisor: i32) -> Self {
        Self { coeffs, divisor }
    }
}

/// Convolve every channel with `kernel`, keeping the signed intermediate.
///
/// Each output sample is the kernel-weighted sum of its zero-padded 3x3
/// neighborhood (kernel taps mirrored, i.e. true convolution), divided by
/// the kernel divisor. Accumulation is done in i32; the catalog kernels stay
/// within +-2040 for 8-bit neighbors.
///
/// # Arguments
/// * `input` - Buffer of shape (height, width, channels), 1 or 3 channels
/// * `kernel` - 3x3 coefficient matrix
///
/// # Returns
/// Signed response of the same shape, or `InvalidDimensions` /
/// `UnsupportedChannelCount` for malformed buffers.
pub fn convolve_raw(
    input: ArrayView3<u8>,
    kernel: &Kernel3,
) -> Result<Array3<i32>, TransformError> {
    let (height, width, channels) = check_raster(&input)?;
    let mut output = Array3::<i32>::zeros((height, width, channels));

    for c in 0..channels {
        for y in 0..height {
            for x in 0..width {
                let mut sum = 0i32;
                for dy in -1isize..=1 {
                    for dx in -1isize..=1 {
                        let sy = y as isize + dy;
                        let sx = x as isize + dx;
                        // zero padding: out-of-bounds neighbors contribute nothing
                        if sy < 0 || sy >= height as isize || sx < 0 || sx >= width as isize {
                            continue;
                        }
                        let k = kernel.coeffs[(1 - dy) as usize][(1 - dx) as usize];
                        sum += k * input[[sy as usize, sx as usize, c]] as i32;
                    }
                }
                output[[y, x, c]] = sum / kernel.divisor;
            }
        }
    }

    Ok(output)
}

/// Convolve and saturate the response to the 8-bit output range.
pub fn convolve_clamped(
    input: ArrayView3<u8>,
    kernel: &Kernel3,
) -> Result<Array3<u8>, TransformError> {
    Ok(clamp_to_u8(&convolve_raw(input, kernel)?))
}
