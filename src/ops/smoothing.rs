//! Smoothing filters driven by a named mode and strength.
//!
//! The mode selects one of three 3x3 averaging kernels, the strength selects
//! how many convolution passes run. Each pass is clamped to 8 bits before
//! feeding the next one.

use log::debug;
use ndarray::{Array3, ArrayView3};

use crate::error::TransformError;
use crate::ops::convolve::{convolve_clamped, Kernel3};
use crate::ops::Strength;

/// Uniform 3x3 mean kernel (1/9 per tap).
pub const MEAN_KERNEL: Kernel3 = Kernel3::new([[1, 1, 1], [1, 1, 1], [1, 1, 1]], 9);

/// Binomial weighted-average kernel, normalized by 16.
pub const WEIGHTED_KERNEL: Kernel3 = Kernel3::new([[1, 2, 1], [2, 4, 2], [1, 2, 1]], 16);

/// Smoothing kernel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingMode {
    Mean,
    Weighted,
    /// Defined as identical to [`SmoothingMode::Weighted`]. This is not a
    /// true Gaussian and must not be corrected to one, as that would change
    /// observable output.
    Gaussian,
}

impl SmoothingMode {
    /// Parse a mode name. Unrecognized names fall back to `Mean`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "mean" => Self::Mean,
            "weighted" => Self::Weighted,
            "gaussian" => Self::Gaussian,
            _ => Self::Mean,
        }
    }

    /// The kernel this mode convolves with.
    pub fn kernel(self) -> &'static Kernel3 {
        match self {
            Self::Mean => &MEAN_KERNEL,
            Self::Weighted | Self::Gaussian => &WEIGHTED_KERNEL,
        }
    }
}

/// Smooth a buffer with the kernel selected by `mode`, repeated once per
/// strength-selected pass (low=1, medium=2, high=3).
pub fn smooth(
    input: ArrayView3<u8>,
    mode: SmoothingMode,
    strength: Strength,
) -> Result<Array3<u8>, TransformError> {
    let kernel = mode.kernel();
    let passes = strength.passes();
    debug!("smooth: mode={mode:?} strength={strength:?} passes={passes}");

    let mut output = convolve_clamped(input, kernel)?;
    for _ in 1..passes {
        output = convolve_clamped(output.view(), kernel)?;
    }
    Ok(output)
}

/// Smooth with mode and strength given by name, as collected from a host UI.
/// Unknown mode falls back to mean, unknown strength to medium.
pub fn smooth_named(
    input: ArrayView3<u8>,
    mode: &str,
    strength: &str,
) -> Result<Array3<u8>, TransformError> {
    smooth(
        input,
        SmoothingMode::from_name(mode),
        Strength::from_name(strength),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_name_with_fallback() {
        assert_eq!(SmoothingMode::from_name("Weighted"), SmoothingMode::Weighted);
        assert_eq!(SmoothingMode::from_name("gaussian"), SmoothingMode::Gaussian);
        assert_eq!(SmoothingMode::from_name("median"), SmoothingMode::Mean);
    }

    #[test]
    fn test_gaussian_is_the_weighted_kernel() {
        assert_eq!(
            SmoothingMode::Gaussian.kernel(),
            SmoothingMode::Weighted.kernel()
        );
    }

    #[test]
    fn test_mean_smoothing_keeps_uniform_interior() {
        // all-128 buffer: one pass keeps every pixel with a full in-bounds
        // neighborhood at exactly 128; borders drop where zero padding
        // shrinks the local sum
        let img = Array3::<u8>::from_elem((5, 5, 1), 128);
        let result = smooth(img.view(), SmoothingMode::Mean, Strength::Low).unwrap();

        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(result[[y, x, 0]], 128);
            }
        }
        assert_eq!(result[[0, 0, 0]], 56); // floor(4 * 128 / 9)
        assert_eq!(result[[0, 2, 0]], 85); // floor(6 * 128 / 9)
    }

    #[test]
    fn test_mean_smoothing_deep_interior_stable_at_high_strength() {
        // three passes: the value-128 plateau survives wherever the border
        // influence cannot reach (3 pixels in from every side)
        let img = Array3::<u8>::from_elem((7, 7, 1), 128);
        let result = smooth(img.view(), SmoothingMode::Mean, Strength::High).unwrap();
        assert_eq!(result[[3, 3, 0]], 128);
    }

    #[test]
    fn test_strength_selects_pass_count() {
        let mut img = Array3::<u8>::zeros((5, 5, 1));
        img[[2, 2, 0]] = 255;

        let one = smooth(img.view(), SmoothingMode::Weighted, Strength::Low).unwrap();
        let two = smooth(img.view(), SmoothingMode::Weighted, Strength::Medium).unwrap();
        let manual_two = smooth(one.view(), SmoothingMode::Weighted, Strength::Low).unwrap();
        assert_eq!(two, manual_two);
        assert_ne!(one, two);
    }

    #[test]
    fn test_smooth_named_dispatch() {
        let img = Array3::<u8>::from_elem((4, 4, 3), 200);
        let named = smooth_named(img.view(), "unknown-mode", "bogus").unwrap();
        let typed = smooth(img.view(), SmoothingMode::Mean, Strength::Medium).unwrap();
        assert_eq!(named, typed);
    }

    #[test]
    fn test_output_range_is_8bit() {
        let mut img = Array3::<u8>::zeros((4, 4, 3));
        for (i, v) in img.iter_mut().enumerate() {
            *v = (i * 31 % 256) as u8;
        }
        let result = smooth(img.view(), SmoothingMode::Gaussian, Strength::High).unwrap();
        assert_eq!(result.dim(), (4, 4, 3));
        // u8 output is range-bound by type; check shape and determinism
        let again = smooth(img.view(), SmoothingMode::Gaussian, Strength::High).unwrap();
        assert_eq!(result, again);
    }
}
