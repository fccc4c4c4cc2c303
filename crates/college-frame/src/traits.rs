//! Query traits over a derived college dataset

use crate::{GuardFilter, PlotSpec, ReportSpec, Result};
use polars::prelude::*;

/// Paired x/y values for a scatter plot
///
/// Both vectors always have the same length; rows where either value is
/// missing are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl ScatterData {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Reporting and plotting queries
pub trait ExploreExt {
    /// Rows surviving a guard filter, all columns kept
    ///
    /// # Arguments
    /// * `guard` - Columns that must be non-null and within bound
    fn guarded(&self, guard: &GuardFilter) -> Result<DataFrame>;

    /// Run a report query
    ///
    /// # Arguments
    /// * `spec` - Projection, guard and optional sort key
    /// * `limit` - Maximum number of rows returned, `None` for all
    ///
    /// # Returns
    /// DataFrame holding exactly the projected columns, in projection order
    fn report(&self, spec: &ReportSpec, limit: Option<usize>) -> Result<DataFrame>;

    /// Materialize the x/y values of a plot query
    fn scatter(&self, spec: &PlotSpec) -> Result<ScatterData>;
}
