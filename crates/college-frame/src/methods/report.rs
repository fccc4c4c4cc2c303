//! Report queries

use crate::frame::{require, DerivedFrame};
use crate::schema::column_names;
use crate::{ExploreExt, GuardFilter, PlotSpec, ReportSpec, Result, ScatterData, SortOrder};
use polars::prelude::*;
use tracing::debug;

/// Predicate keeping rows where every guarded column is `<= max`
///
/// Null comparisons are falsy in a filter, so rows with a missing guarded
/// value are dropped too.
pub(crate) fn guard_predicate(guard: &GuardFilter) -> Option<Expr> {
    guard
        .columns
        .iter()
        .map(|c| col(c.as_str()).lt_eq(lit(guard.max)))
        .reduce(|acc, e| acc.and(e))
}

impl ExploreExt for DerivedFrame {
    fn guarded(&self, guard: &GuardFilter) -> Result<DataFrame> {
        require(self.dataframe(), guard.columns, "guard")?;
        let df = self.dataframe().clone();
        match guard_predicate(guard) {
            Some(predicate) => Ok(df.lazy().filter(predicate).collect()?),
            None => Ok(df),
        }
    }

    fn report(&self, spec: &ReportSpec, limit: Option<usize>) -> Result<DataFrame> {
        require(self.dataframe(), spec.columns, spec.caption)?;

        // Guard before projecting so it may bound columns that are not shown.
        let mut lf = self.guarded(&spec.guard)?.lazy().select(
            column_names(spec.columns)
                .into_iter()
                .map(col)
                .collect::<Vec<_>>(),
        );
        if let Some(key) = spec.sort {
            let descending = key.order == SortOrder::Descending;
            // Nulls first when ascending, last when descending.
            lf = lf.sort(
                [key.column.as_str()],
                SortMultipleOptions::default()
                    .with_order_descending(descending)
                    .with_nulls_last(descending)
                    .with_maintain_order(true),
            );
        }
        if let Some(limit) = limit {
            lf = lf.limit(limit as IdxSize);
        }

        let df = lf.collect()?;
        debug!(report = spec.caption, rows = df.height(), "report computed");
        Ok(df)
    }

    fn scatter(&self, spec: &PlotSpec) -> Result<ScatterData> {
        super::scatter::scatter_points(self, spec)
    }
}

/// Caption line followed by every row of `df` as an aligned text table
///
/// All rows are written; the row limit belongs to [`ExploreExt::report`].
pub fn render_report(spec: &ReportSpec, df: &DataFrame) -> Result<String> {
    let columns = df.get_columns();
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(df.height() + 1);
    cells.push(columns.iter().map(|c| c.name().to_string()).collect());
    for row in 0..df.height() {
        let values = columns
            .iter()
            .map(|c| c.get(row).map(|value| format_cell(&value)))
            .collect::<PolarsResult<Vec<_>>>()?;
        cells.push(values);
    }

    let widths: Vec<usize> = (0..columns.len())
        .map(|j| cells.iter().map(|r| r[j].chars().count()).max().unwrap_or(0))
        .collect();
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut text = format!("{}\n", spec.caption);
    for (i, row) in cells.iter().enumerate() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        text.push_str(line.trim_end());
        text.push('\n');
        if i == 0 {
            text.push_str(&separator);
            text.push('\n');
        }
    }
    text.push_str(&format!("({} rows)\n", df.height()));
    Ok(text)
}

fn format_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format_float(*v),
        AnyValue::Float32(v) => format_float(f64::from(*v)),
        other => other.to_string(),
    }
}

fn format_float(v: f64) -> String {
    if v.is_finite() {
        let text = format!("{v:.6}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        v.to_string()
    }
}
