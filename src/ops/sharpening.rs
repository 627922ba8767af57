//! Sharpening filters and the Laplacian edge view.
//!
//! First-order sharpening adds an L1 Sobel edge magnitude back onto the
//! source; second-order subtracts a 4-neighbor Laplacian response. Both mix
//! the raw signed convolution intermediate with the original before the final
//! clamp, so edge sign survives accumulation.

use log::debug;
use ndarray::{Array3, ArrayView3};

use crate::error::TransformError;
use crate::ops::convolve::{convolve_clamped, convolve_raw, Kernel3};
use crate::ops::core::check_raster;
use crate::ops::Strength;

/// Horizontal Sobel response kernel.
pub const SOBEL_X: Kernel3 = Kernel3::new([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]], 1);

/// Vertical Sobel response kernel.
pub const SOBEL_Y: Kernel3 = Kernel3::new([[-1, -2, -1], [0, 0, 0], [1, 2, 1]], 1);

/// 4-neighbor Laplacian kernel.
pub const LAPLACIAN_4: Kernel3 = Kernel3::new([[0, 1, 0], [1, -4, 1], [0, 1, 0]], 1);

/// Sharpening kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharpenKind {
    /// Sobel gradient magnitude added to the source.
    FirstOrder,
    /// Laplacian response subtracted from the source.
    SecondOrder,
}

impl SharpenKind {
    /// Parse a kind name. Returns `None` for unrecognized names; the named
    /// dispatch in [`sharpen_named`] maps that to second-order at alpha 1.0.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "first" | "first-order" => Some(Self::FirstOrder),
            "second" | "second-order" => Some(Self::SecondOrder),
            _ => None,
        }
    }
}

/// Sharpen a buffer. The strength selects the mix factor alpha
/// (low=0.5, medium=1.0, high=1.5).
pub fn sharpen(
    input: ArrayView3<u8>,
    kind: SharpenKind,
    strength: Strength,
) -> Result<Array3<u8>, TransformError> {
    let alpha = strength.alpha();
    debug!("sharpen: kind={kind:?} strength={strength:?} alpha={alpha}");
    match kind {
        SharpenKind::FirstOrder => first_order(input, alpha),
        SharpenKind::SecondOrder => second_order(input, alpha),
    }
}

/// Sharpen with kind and strength given by name, as collected from a host UI.
///
/// Unknown strength falls back to medium. Unknown kind falls back to
/// second-order at alpha 1.0 regardless of the requested strength.
pub fn sharpen_named(
    input: ArrayView3<u8>,
    kind: &str,
    strength: &str,
) -> Result<Array3<u8>, TransformError> {
    match SharpenKind::parse(kind) {
        Some(k) => sharpen(input, k, Strength::from_name(strength)),
        None => {
            debug!("sharpen: unknown kind {kind:?}, using second-order at alpha 1.0");
            second_order(input, 1.0)
        }
    }
}

/// Laplacian edge view: the 4-neighbor Laplacian response clamped to 8 bits.
pub fn laplacian_edges(input: ArrayView3<u8>) -> Result<Array3<u8>, TransformError> {
    convolve_clamped(input, &LAPLACIAN_4)
}

fn first_order(input: ArrayView3<u8>, alpha: f32) -> Result<Array3<u8>, TransformError> {
    let (height, width, channels) = check_raster(&input)?;
    let gx = convolve_raw(input, &SOBEL_X)?;
    let gy = convolve_raw(input, &SOBEL_Y)?;

    let mut output = Array3::<u8>::zeros((height, width, channels));
    for c in 0..channels {
        for y in 0..height {
            for x in 0..width {
                let edge = gx[[y, x, c]].abs() + gy[[y, x, c]].abs();
                let mixed = input[[y, x, c]] as f32 + alpha * edge as f32;
                output[[y, x, c]] = mixed.clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(output)
}

fn second_order(input: ArrayView3<u8>, alpha: f32) -> Result<Array3<u8>, TransformError> {
    let (height, width, channels) = check_raster(&input)?;
    let lap = convolve_raw(input, &LAPLACIAN_4)?;

    let mut output = Array3::<u8>::zeros((height, width, channels));
    for c in 0..channels {
        for y in 0..height {
            for x in 0..width {
                let mixed = input[[y, x, c]] as f32 - alpha * lap[[y, x, c]] as f32;
                output[[y, x, c]] = mixed.clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(SharpenKind::parse("first"), Some(SharpenKind::FirstOrder));
        assert_eq!(SharpenKind::parse("Second-Order"), Some(SharpenKind::SecondOrder));
        assert_eq!(SharpenKind::parse("unsharp"), None);
    }

    #[test]
    fn test_flat_interior_unchanged() {
        // a flat region has zero gradient and zero Laplacian away from the
        // zero-padded border, so both kinds leave the interior alone
        let img = Array3::<u8>::from_elem((5, 5, 3), 128);
        let first = sharpen(img.view(), SharpenKind::FirstOrder, Strength::High).unwrap();
        let second = sharpen(img.view(), SharpenKind::SecondOrder, Strength::High).unwrap();
        for c in 0..3 {
            assert_eq!(first[[2, 2, c]], 128);
            assert_eq!(second[[2, 2, c]], 128);
        }
    }

    #[test]
    fn test_first_order_brightens_edges() {
        // vertical step edge: gradient magnitude is added on top of the source
        let mut img = Array3::<u8>::zeros((5, 5, 1));
        for y in 0..5 {
            for x in 2..5 {
                img[[y, x, 0]] = 100;
            }
        }
        let result = sharpen(img.view(), SharpenKind::FirstOrder, Strength::Medium).unwrap();
        assert!(result[[2, 2, 0]] > img[[2, 2, 0]]);
    }

    #[test]
    fn test_second_order_exact_mix() {
        // single pixel of 100: lap at center = -400, so medium sharpening
        // gives 100 - 1.0 * (-400) = 500, clamped to 255; the 4-neighbors
        // get lap = +100 and 0 - 100 clamps to 0
        let mut img = Array3::<u8>::zeros((3, 3, 1));
        img[[1, 1, 0]] = 100;

        let result = sharpen(img.view(), SharpenKind::SecondOrder, Strength::Medium).unwrap();
        assert_eq!(result[[1, 1, 0]], 255);
        assert_eq!(result[[0, 1, 0]], 0);
    }

    #[test]
    fn test_alpha_truncation_matches_contract() {
        // low strength: 100 - 0.5 * (-400) = 300 -> 255;
        // neighbor: 0 - 0.5 * 100 = -50 -> 0
        let mut img = Array3::<u8>::zeros((3, 3, 1));
        img[[1, 1, 0]] = 100;

        let result = sharpen(img.view(), SharpenKind::SecondOrder, Strength::Low).unwrap();
        assert_eq!(result[[1, 1, 0]], 255);
        assert_eq!(result[[1, 0, 0]], 0);
    }

    #[test]
    fn test_unknown_kind_defaults_to_second_order_medium() {
        let mut img = Array3::<u8>::zeros((4, 4, 1));
        img[[1, 2, 0]] = 180;
        img[[2, 1, 0]] = 90;

        let named = sharpen_named(img.view(), "emboss", "high").unwrap();
        let expected = sharpen(img.view(), SharpenKind::SecondOrder, Strength::Medium).unwrap();
        assert_eq!(named, expected);
    }

    #[test]
    fn test_laplacian_edges_scenario() {
        // all-zero buffer convolves to all zero (zero padding of zero is zero)
        let img = Array3::<u8>::zeros((3, 3, 1));
        let result = laplacian_edges(img.view()).unwrap();
        assert_eq!(result, Array3::<u8>::zeros((3, 3, 1)));
    }

    #[test]
    fn test_color_channels_sharpened_independently() {
        let mut img = Array3::<u8>::from_elem((3, 3, 3), 50);
        img[[1, 1, 0]] = 250; // spike in red only

        let result = sharpen(img.view(), SharpenKind::SecondOrder, Strength::Medium).unwrap();
        assert_eq!(result[[1, 1, 0]], 255);
        // green channel is flat: lap at center uses the zero-padded border
        // only at the edges, so the center stays put
        assert_eq!(result[[1, 1, 1]], 50);
    }
}
