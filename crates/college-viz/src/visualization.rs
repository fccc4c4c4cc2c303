//! Visualization interface for scatter queries
//!
//! The pipeline hands every plot query to a visualizer; implementations
//! decide whether anything is drawn.

use college_frame::{Error, PlotSpec, Result, ScatterData};
use std::path::PathBuf;

/// Trait for rendering scatter plot queries
pub trait ScatterVisualizer {
    /// Render one scatter plot
    ///
    /// # Returns
    /// Path of the written file, if the visualizer writes one
    fn render_scatter(&mut self, spec: &PlotSpec, data: &ScatterData) -> Result<Option<PathBuf>>;

    /// Check if this visualizer actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Fail unless x and y have the same length
pub(crate) fn check_lengths(spec: &PlotSpec, data: &ScatterData) -> Result<()> {
    if data.x.len() != data.y.len() {
        return Err(Error::Render(format!(
            "{}: x has {} values, y has {}",
            spec.slug,
            data.x.len(),
            data.y.len()
        )));
    }
    Ok(())
}

/// Join a multi-line title into one line
pub fn flatten_title(title: &str) -> String {
    title
        .split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Null visualizer that does nothing (for when plotting is disabled)
#[derive(Debug, Default)]
pub struct NullScatterVisualizer;

impl ScatterVisualizer for NullScatterVisualizer {
    fn render_scatter(&mut self, spec: &PlotSpec, data: &ScatterData) -> Result<Option<PathBuf>> {
        check_lengths(spec, data)?;
        Ok(None)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// A plot captured by [`RecordingVisualizer`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPlot {
    pub slug: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub data: ScatterData,
}

/// Visualizer that keeps every plot in memory
#[derive(Debug, Default)]
pub struct RecordingVisualizer {
    plots: Vec<RecordedPlot>,
}

impl RecordingVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plots(&self) -> &[RecordedPlot] {
        &self.plots
    }

    /// Find a recorded plot by slug
    pub fn get(&self, slug: &str) -> Option<&RecordedPlot> {
        self.plots.iter().find(|p| p.slug == slug)
    }
}

impl ScatterVisualizer for RecordingVisualizer {
    fn render_scatter(&mut self, spec: &PlotSpec, data: &ScatterData) -> Result<Option<PathBuf>> {
        check_lengths(spec, data)?;
        self.plots.push(RecordedPlot {
            slug: spec.slug.to_string(),
            title: flatten_title(spec.title),
            x_label: spec.x_label.to_string(),
            y_label: spec.y_label.to_string(),
            data: data.clone(),
        });
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use college_frame::PLOTS;

    #[test]
    fn test_flatten_title() {
        assert_eq!(
            flatten_title("What is the relationship between \n cost and acceptance rate?"),
            "What is the relationship between cost and acceptance rate?"
        );
        assert_eq!(flatten_title("single line"), "single line");
    }

    #[test]
    fn test_recording_visualizer_keeps_plots() {
        let mut viz = RecordingVisualizer::new();
        let data = ScatterData {
            x: vec![1.0, 2.0],
            y: vec![3.0, 4.0],
        };
        viz.render_scatter(&PLOTS[0], &data).unwrap();

        assert_eq!(viz.plots().len(), 1);
        let plot = viz.get(PLOTS[0].slug).unwrap();
        assert_eq!(plot.x_label, "Student Faculty Ratio");
        assert_eq!(plot.y_label, "Graduation Rate (%)");
        assert_eq!(plot.data, data);
        assert!(!plot.title.contains('\n'));
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let data = ScatterData {
            x: vec![1.0, 2.0],
            y: vec![3.0],
        };
        let mut viz = NullScatterVisualizer;
        assert!(matches!(
            viz.render_scatter(&PLOTS[1], &data),
            Err(Error::Render(_))
        ));
        assert!(!viz.is_enabled());
    }
}
