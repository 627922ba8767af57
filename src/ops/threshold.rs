//! Binary threshold on luminance.

use log::debug;
use ndarray::{Array3, ArrayView3};

use crate::error::TransformError;
use crate::ops::core::{broadcast_to_rgb, check_raster};
use crate::ops::grayscale::luminance_plane;

/// Threshold a buffer at `t`: luminance below `t` becomes 0, everything else
/// 255. The binarized plane is broadcast to three channels.
///
/// `t` must lie in [0, 255]; out-of-range values fail with
/// `InvalidParameter` rather than being clamped.
pub fn threshold(input: ArrayView3<u8>, t: i32) -> Result<Array3<u8>, TransformError> {
    check_raster(&input)?;
    if !(0..=255).contains(&t) {
        return Err(TransformError::InvalidParameter(format!(
            "threshold {t} outside [0, 255]"
        )));
    }
    debug!("threshold: t={t}");

    let gray = luminance_plane(input);
    let binary = gray.mapv(|v| if (v as i32) < t { 0u8 } else { 255u8 });
    Ok(broadcast_to_rgb(&binary))
}
