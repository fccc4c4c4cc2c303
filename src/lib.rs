//! Exploratory analysis of the college statistics dataset
//!
//! The pipeline loads `College.csv`, renames its columns, derives ratio and
//! cost columns, prints six fixed reports and renders ten scatter plots.
//!
//! # Example
//!
//! ```rust,no_run
//! use college_explore::{CollegeDatasetPipeline, PipelineConfig};
//! use college_explore::viz::SvgScatterVisualizer;
//!
//! let pipeline = CollegeDatasetPipeline::new(PipelineConfig::new("College.csv"));
//! let mut visualizer = SvgScatterVisualizer::new("plots").unwrap();
//! let summary = pipeline
//!     .run(&mut std::io::stdout(), &mut visualizer)
//!     .unwrap();
//! println!("{} institutions", summary.rows);
//! ```

mod config;
mod pipeline;
mod session;

pub use config::*;
pub use pipeline::{CollegeDatasetPipeline, RunSummary};
pub use session::{ComputeSession, SessionSummary};

// Re-export the member crates
pub use college_frame as frame;
pub use college_viz as viz;
