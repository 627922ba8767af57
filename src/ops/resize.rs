//! Nearest-neighbor resampling.

use log::debug;
use ndarray::{Array3, ArrayView3};

use crate::error::TransformError;
use crate::ops::core::check_raster;

/// Resize to an arbitrary target resolution by nearest-neighbor sampling.
///
/// Every output coordinate maps back to
/// `src = floor(dst * src_dim / new_dim)`, clamped to the last valid source
/// index, and the source sample is copied verbatim: no interpolation, no
/// averaging. Both target dimensions must be at least 1.
pub fn resize_nearest(
    input: ArrayView3<u8>,
    new_width: usize,
    new_height: usize,
) -> Result<Array3<u8>, TransformError> {
    let (height, width, channels) = check_raster(&input)?;
    if new_width < 1 || new_height < 1 {
        return Err(TransformError::InvalidTargetSize {
            width: new_width,
            height: new_height,
        });
    }
    debug!("resize_nearest: {width}x{height} -> {new_width}x{new_height}");

    let mut output = Array3::<u8>::zeros((new_height, new_width, channels));
    for y in 0..new_height {
        let src_y = (y * height / new_height).min(height - 1);
        for x in 0..new_width {
            let src_x = (x * width / new_width).min(width - 1);
            for c in 0..channels {
                output[[y, x, c]] = input[[src_y, src_x, c]];
            }
        }
    }
    Ok(output)
}
