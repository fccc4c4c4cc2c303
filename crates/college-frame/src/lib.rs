//! Polars-backed pipeline stages for the college statistics dataset
//!
//! This crate loads the dataset, renames its columns to canonical names,
//! derives indicator/ratio/sum columns and answers the fixed report and
//! scatter queries through a single extension trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use college_frame::{DivisionPolicy, ExploreExt, RawFrame, REPORTS};
//!
//! let derived = RawFrame::load("College.csv")?
//!     .rename()?
//!     .derive(DivisionPolicy::Null)?;
//!
//! let most_expensive = derived.report(&REPORTS[4], Some(20))?;
//! println!("{most_expensive}");
//! ```

mod config;
mod error;
mod frame;
mod methods;
mod record;
mod schema;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use frame::{CollegeFrame, DerivedFrame, RawFrame, PRIVATE_MARKER};
pub use methods::render_report;
pub use record::CollegeRecord;
pub use schema::{column_names, CollegeColumn};
pub use traits::*;

// Re-export the dataframe engine so downstream crates use the same version
pub use polars;
