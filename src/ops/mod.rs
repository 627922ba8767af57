//! Image operations over 8-bit raster buffers.
//!
//! ## Buffer Format
//!
//! All operations work on `ndarray` arrays of shape (height, width, channels)
//! with `u8` samples in 0-255:
//!
//! | Format | Shape | Description |
//! |-----------|-----------|---------------------------------|
//! | Grayscale | (H, W, 1) | Single luminance channel, 0-255 |
//! | RGB | (H, W, 3) | Red, green, blue, 0-255 |
//!
//! No other channel count is accepted. Operations never mutate their input
//! and always allocate a fresh output buffer, so any number of operations may
//! run concurrently on the same source.
//!
//! ## Operation Categories
//!
//! - **Spatial**: convolve (3x3, zero-padded), smoothing, sharpening,
//!   Laplacian edge view
//! - **Point transforms**: negative, threshold, logarithmic, gamma
//! - **Statistics**: histogram (per-channel intensity counts)
//! - **Geometry**: nearest-neighbor resize

pub mod convolve;
pub mod core;
pub mod grayscale;
pub mod histogram;
pub mod log_gamma;
pub mod negative;
pub mod resize;
pub mod sharpening;
pub mod smoothing;
pub mod threshold;

/// Named filter strength shared by smoothing and sharpening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Low,
    Medium,
    High,
}

impl Strength {
    /// Parse a strength name. Unrecognized names fall back to `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Smoothing pass count for this strength.
    pub fn passes(self) -> usize {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Sharpening mix factor for this strength.
    pub fn alpha(self) -> f32 {
        match self {
            Self::Low => 0.5,
            Self::Medium => 1.0,
            Self::High => 1.5,
        }
    }
}
