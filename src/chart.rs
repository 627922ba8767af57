//! Histogram chart rendering.
//!
//! Presentation layer over raw counts: the chart is derived solely from a
//! [`Histogram`] and comes back as an in-memory RGB raster buffer, so the
//! core never touches the filesystem. Hosts that render their own charts
//! never need this module.

use ndarray::Array3;
use plotters::prelude::*;

use crate::error::TransformError;
use crate::ops::histogram::Histogram;

/// Render a line-plot chart of histogram counts into an RGB buffer of shape
/// (height, width, 3).
///
/// Grayscale histograms get a single black series; color histograms get one
/// series per channel in its own color, plus a legend. Axes are labeled with
/// intensity and count. The exact visual layout is not a contract, only
/// that the chart is a pure function of the counts.
pub fn render_chart(
    histogram: &Histogram,
    width: u32,
    height: u32,
) -> Result<Array3<u8>, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidTargetSize {
            width: width as usize,
            height: height as usize,
        });
    }

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let title = match histogram {
            Histogram::Gray { .. } => "Histogram (Grayscale)",
            Histogram::Color { .. } => "Histogram (Color)",
        };
        let y_max = histogram.max_count().max(1) as f64;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0i32..256i32, 0f64..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Intensity (0-255)")
            .y_desc("Count")
            .draw()
            .map_err(draw_err)?;

        match histogram {
            Histogram::Gray { counts } => {
                chart
                    .draw_series(LineSeries::new(series_points(counts), &BLACK))
                    .map_err(draw_err)?;
            }
            Histogram::Color { r, g, b } => {
                for (counts, color, label) in
                    [(r, RED, "R"), (g, GREEN, "G"), (b, BLUE, "B")]
                {
                    chart
                        .draw_series(LineSeries::new(series_points(counts), &color))
                        .map_err(draw_err)?
                        .label(label)
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], color)
                        });
                }
                chart
                    .configure_series_labels()
                    .border_style(BLACK)
                    .draw()
                    .map_err(draw_err)?;
            }
        }
        root.present().map_err(draw_err)?;
    }

    Array3::from_shape_vec((height as usize, width as usize, 3), pixels)
        .map_err(|e| TransformError::ChartRender(e.to_string()))
}

fn series_points(counts: &[u64; 256]) -> impl Iterator<Item = (i32, f64)> + '_ {
    counts
        .iter()
        .enumerate()
        .map(|(v, &count)| (v as i32, count as f64))
}

fn draw_err(e: impl std::fmt::Display) -> TransformError {
    TransformError::ChartRender(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::histogram::compute_histogram;
    use ndarray::Array3;

    #[test]
    fn test_renders_gray_chart_into_buffer() {
        let img = Array3::<u8>::from_elem((8, 8, 1), 100);
        let hist = compute_histogram(img.view()).unwrap();

        let chart = render_chart(&hist, 400, 300).unwrap();
        assert_eq!(chart.dim(), (300, 400, 3));
        // white background plus at least some drawn ink
        assert!(chart.iter().any(|&v| v == 255));
        assert!(chart.iter().any(|&v| v < 255));
    }

    #[test]
    fn test_chart_is_a_function_of_counts_only() {
        // two different buffers with identical counts render identically
        let mut a = Array3::<u8>::zeros((1, 2, 1));
        let mut b = Array3::<u8>::zeros((1, 2, 1));
        a[[0, 0, 0]] = 9;
        b[[0, 1, 0]] = 9;

        let ha = compute_histogram(a.view()).unwrap();
        let hb = compute_histogram(b.view()).unwrap();
        assert_eq!(ha, hb);
        assert_eq!(
            render_chart(&ha, 320, 240).unwrap(),
            render_chart(&hb, 320, 240).unwrap()
        );
    }

    #[test]
    fn test_rejects_zero_size() {
        let img = Array3::<u8>::zeros((1, 1, 1));
        let hist = compute_histogram(img.view()).unwrap();
        assert!(matches!(
            render_chart(&hist, 0, 100),
            Err(TransformError::InvalidTargetSize { .. })
        ));
    }
}
