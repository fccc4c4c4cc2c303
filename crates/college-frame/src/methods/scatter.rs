//! Scatter query extraction

use crate::frame::{float_values, require, DerivedFrame};
use crate::{ExploreExt, PlotSpec, Result, ScatterData};
use tracing::debug;

pub(crate) fn scatter_points(frame: &DerivedFrame, spec: &PlotSpec) -> Result<ScatterData> {
    require(frame.dataframe(), &[spec.x, spec.y], spec.slug)?;
    let rows = frame.guarded(&spec.guard)?;

    let xs = float_values(&rows, spec.x)?;
    let ys = float_values(&rows, spec.y)?;
    let (x, y): (Vec<f64>, Vec<f64>) = xs
        .into_iter()
        .zip(ys)
        .filter_map(|(x, y)| Some((x?, y?)))
        .unzip();

    debug!(
        plot = spec.slug,
        guarded_rows = rows.height(),
        points = x.len(),
        "scatter extracted"
    );
    Ok(ScatterData { x, y })
}
