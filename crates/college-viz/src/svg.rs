//! SVG scatter rendering through plotters

use crate::visualization::{check_lengths, flatten_title, ScatterVisualizer};
use college_frame::{Error, PlotSpec, Result, ScatterData};
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_SIZE: (u32, u32) = (1024, 768);
const MARKER_RADIUS: i32 = 3;

fn render_err(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}

/// Axis range covering the finite values, padded by 5% on each side
pub(crate) fn axis_range(values: &[f64]) -> Range<f64> {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 1.0)..(max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

/// Writes `<out_dir>/<slug>.svg` for every plot
#[derive(Debug, Clone)]
pub struct SvgScatterVisualizer {
    out_dir: PathBuf,
    size: (u32, u32),
}

impl SvgScatterVisualizer {
    /// Create the visualizer, creating `out_dir` if needed
    pub fn new(out_dir: impl AsRef<Path>) -> Result<Self> {
        let out_dir = out_dir.as_ref().to_path_buf();
        fs::create_dir_all(&out_dir)?;
        Ok(Self {
            out_dir,
            size: DEFAULT_SIZE,
        })
    }

    /// Sets the image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

impl ScatterVisualizer for SvgScatterVisualizer {
    fn render_scatter(&mut self, spec: &PlotSpec, data: &ScatterData) -> Result<Option<PathBuf>> {
        check_lengths(spec, data)?;
        let path = self.out_dir.join(format!("{}.svg", spec.slug));

        {
            let root = SVGBackend::new(&path, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(flatten_title(spec.title), ("sans-serif", 22))
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d(axis_range(&data.x), axis_range(&data.y))
                .map_err(render_err)?;

            chart
                .configure_mesh()
                .x_desc(spec.x_label)
                .y_desc(spec.y_label)
                .draw()
                .map_err(render_err)?;

            chart
                .draw_series(
                    data.points()
                        .filter(|(x, y)| x.is_finite() && y.is_finite())
                        .map(|point| Circle::new(point, MARKER_RADIUS, BLUE.filled())),
                )
                .map_err(render_err)?;

            root.present().map_err(render_err)?;
        }

        info!(plot = spec.slug, points = data.len(), path = %path.display(), "plot written");
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use college_frame::PLOTS;

    #[test]
    fn test_axis_range() {
        assert_eq!(axis_range(&[]), 0.0..1.0);
        assert_eq!(axis_range(&[f64::NAN]), 0.0..1.0);
        assert_eq!(axis_range(&[5.0, 5.0]), 4.0..6.0);

        let range = axis_range(&[0.0, 10.0, f64::INFINITY]);
        assert!((range.start + 0.5).abs() < 1e-12);
        assert!((range.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_svg_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut viz = SvgScatterVisualizer::new(dir.path().join("plots"))
            .unwrap()
            .with_size(640, 480);
        let data = ScatterData {
            x: vec![12.0, 20.5, 9.5],
            y: vec![80.0, 45.0, 60.0],
        };

        let path = viz.render_scatter(&PLOTS[0], &data).unwrap().unwrap();
        assert_eq!(path.file_name().unwrap(), "01_sf_ratio_vs_grad_rate.svg");

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
        assert!(viz.is_enabled());
    }
}
