//! Scatter plot rendering for the college statistics pipeline
//!
//! Plot queries produce [`college_frame::ScatterData`]; a
//! [`ScatterVisualizer`] turns each one into a rendered surface.
//!
//! - [`SvgScatterVisualizer`] writes one SVG per plot through `plotters`
//! - [`RecordingVisualizer`] keeps the plots in memory
//! - [`NullScatterVisualizer`] discards them

mod svg;
mod visualization;

pub use svg::SvgScatterVisualizer;
pub use visualization::{
    flatten_title, NullScatterVisualizer, RecordedPlot, RecordingVisualizer, ScatterVisualizer,
};
