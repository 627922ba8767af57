//! Per-intensity pixel counts.
//!
//! Counting is the whole contract here; turning counts into a chart is a
//! presentation concern and lives in [`crate::chart`].

use ndarray::ArrayView3;

use crate::error::TransformError;
use crate::ops::core::check_raster;

/// Intensity counts for one buffer. Computed fresh on every call, never
/// cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Histogram {
    /// One series for a single-channel buffer: entry `v` counts pixels with
    /// intensity exactly `v`.
    Gray { counts: [u64; 256] },
    /// Independent series per color channel; every pixel contributes to all
    /// three.
    Color {
        r: [u64; 256],
        g: [u64; 256],
        b: [u64; 256],
    },
}

impl Histogram {
    /// Largest single count across all series (chart y-axis scale).
    pub fn max_count(&self) -> u64 {
        match self {
            Histogram::Gray { counts } => counts.iter().copied().max().unwrap_or(0),
            Histogram::Color { r, g, b } => [r, g, b]
                .iter()
                .flat_map(|series| series.iter().copied())
                .max()
                .unwrap_or(0),
        }
    }
}

/// Count pixels per intensity value, per channel.
///
/// Every series sums to `width * height`. Fails with
/// `UnsupportedChannelCount` for anything other than 1 or 3 channels and
/// `InvalidDimensions` for empty buffers.
pub fn compute_histogram(input: ArrayView3<u8>) -> Result<Histogram, TransformError> {
    let (height, width, channels) = check_raster(&input)?;

    if channels == 1 {
        let mut counts = [0u64; 256];
        for y in 0..height {
            for x in 0..width {
                counts[input[[y, x, 0]] as usize] += 1;
            }
        }
        return Ok(Histogram::Gray { counts });
    }

    let mut r = [0u64; 256];
    let mut g = [0u64; 256];
    let mut b = [0u64; 256];
    for y in 0..height {
        for x in 0..width {
            r[input[[y, x, 0]] as usize] += 1;
            g[input[[y, x, 1]] as usize] += 1;
            b[input[[y, x, 2]] as usize] += 1;
        }
    }
    Ok(Histogram::Color { r, g, b })
}
