//! Image Processing Toolkit core
//!
//! Pixel-level transforms over 8-bit raster buffers: 3x3 spatial convolution
//! (smoothing, sharpening, edge detection), monotonic point transforms
//! (negative, threshold, logarithmic, gamma), per-channel histogram
//! accumulation with optional chart rendering, and nearest-neighbor resize.
//!
//! ## Buffer Format
//!
//! Buffers are `ndarray` arrays of shape (height, width, channels) with `u8`
//! samples:
//! - **Grayscale**: (H, W, 1)
//! - **RGB**: (H, W, 3) - interleaved per pixel
//!
//! No other channel count is supported. Every operation validates its input,
//! returns a typed [`TransformError`] on malformed buffers or parameters, and
//! allocates a fresh output - inputs are never mutated, so concurrent
//! operations on the same source buffer are safe. Decoding and encoding
//! image files, parameter UI, and scheduling are the host's concern.
//!
//! ## Operations
//!
//! - [`convolve_raw`] / [`convolve_clamped`] - zero-padded 3x3 convolution
//! - [`smooth`] - mean / weighted / "gaussian" kernels, 1-3 passes
//! - [`sharpen`] - first-order (Sobel magnitude) or second-order (Laplacian)
//! - [`laplacian_edges`] - clamped 4-neighbor Laplacian edge view
//! - [`negative`] / [`negative_curve`] - dynamic-range-aware complement
//! - [`threshold`] - binary threshold on luminance
//! - [`log_transform`] / [`gamma_transform`] - logarithmic and gamma remaps
//! - [`compute_histogram`] - per-intensity counts; [`chart::render_chart`]
//!   turns them into a plot
//! - [`resize_nearest`] - nearest-neighbor resampling

pub mod chart;
pub mod error;
pub mod ops;

pub use error::TransformError;
pub use ops::convolve::{convolve_clamped, convolve_raw, Kernel3};
pub use ops::histogram::{compute_histogram, Histogram};
pub use ops::log_gamma::{gamma_transform, log_transform};
pub use ops::negative::{negative, negative_curve};
pub use ops::resize::resize_nearest;
pub use ops::sharpening::{laplacian_edges, sharpen, sharpen_named, SharpenKind};
pub use ops::smoothing::{smooth, smooth_named, SmoothingMode};
pub use ops::threshold::threshold;
pub use ops::Strength;
