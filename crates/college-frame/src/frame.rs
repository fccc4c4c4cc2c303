//! Pipeline stages over a Polars DataFrame
//!
//! Each stage is a newtype whose constructor checks the columns the next
//! stage relies on:
//!
//! - [`RawFrame`]: the CSV as loaded, source headers
//! - [`CollegeFrame`]: canonical names, every source column present
//! - [`DerivedFrame`]: indicator, ratio and sum columns appended

use crate::config::DivisionPolicy;
use crate::schema::CollegeColumn::{
    self, CostOutstate, IsPrivate, IsPublic, Name, NumAccepted, NumApplied, NumEnrolled,
    NumFtUndergrad, NumPtUndergrad, PctAccepted, PctEnrolled, PctFtUndergrad, TotalCost,
};
use crate::{Error, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Literal that marks a private institution in the source file
pub const PRIVATE_MARKER: &str = "Yes";

/// Fail with [`Error::MissingColumn`] unless every column is present
pub(crate) fn require(df: &DataFrame, columns: &[CollegeColumn], stage: &str) -> Result<()> {
    match columns
        .iter()
        .find(|c| df.get_column_index(c.as_str()).is_none())
    {
        Some(missing) => Err(Error::missing_column(missing.as_str(), stage)),
        None => Ok(()),
    }
}

/// Values of a numeric column as f64, nulls preserved
pub(crate) fn float_values(df: &DataFrame, column: CollegeColumn) -> Result<Vec<Option<f64>>> {
    let values = df.column(column.as_str())?.cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}

/// The CSV exactly as loaded
#[derive(Debug, Clone)]
pub struct RawFrame {
    df: DataFrame,
}

impl RawFrame {
    /// Load a CSV with a header row, inferring column types from the data
    ///
    /// The file is first scanned for ragged rows; Polars would otherwise pad
    /// short rows with nulls.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::load(path, "file not found"));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_path(path)
            .map_err(|e| Error::load(path, e))?;
        for record in reader.records() {
            record.map_err(|e| Error::load(path, e))?;
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| Error::load(path, e))?
            .finish()
            .map_err(|e| Error::load(path, e))?;

        info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded dataset"
        );
        Ok(Self { df })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Rename source headers to canonical names
    ///
    /// The leading column becomes `name` unless it is itself a known source
    /// header. Columns outside the mapping pass through unchanged.
    pub fn rename(self) -> Result<CollegeFrame> {
        let first = self
            .df
            .get_column_names()
            .first()
            .map(|name| name.to_string())
            .ok_or_else(|| Error::missing_column(Name.as_str(), "rename"))?;
        let is_source_header = CollegeColumn::SOURCE
            .iter()
            .any(|c| c.source_header() == Some(first.as_str()));
        if is_source_header {
            return Err(Error::missing_column(Name.as_str(), "rename"));
        }

        let mut existing = vec![first.clone()];
        let mut renamed = vec![Name.as_str().to_string()];
        for column in CollegeColumn::SOURCE {
            let Some(header) = column.source_header() else {
                continue;
            };
            if self.df.get_column_index(header).is_none() {
                return Err(Error::missing_column(header, "rename"));
            }
            existing.push(header.to_string());
            renamed.push(column.as_str().to_string());
        }
        for (from, to) in existing.iter().zip(&renamed) {
            debug!(from = %from, to = %to, "renamed column");
        }

        // Through the lazy plan so the collected frame carries a fresh schema.
        let df = self.df.lazy().rename(existing, renamed, true).collect()?;
        CollegeFrame::new(df)
    }
}

/// Dataset with canonical column names
#[derive(Debug, Clone)]
pub struct CollegeFrame {
    df: DataFrame,
}

impl CollegeFrame {
    /// Wrap a DataFrame that already uses canonical names
    pub fn new(df: DataFrame) -> Result<Self> {
        require(&df, &CollegeColumn::SOURCE, "rename")?;
        Ok(Self { df })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Append the derived columns in dependency order
    ///
    /// `is_private` is replaced by its 0/1 indicator; all other columns are
    /// kept as loaded.
    pub fn derive(self, policy: DivisionPolicy) -> Result<DerivedFrame> {
        let mut df = self.df;

        // Anything but the exact marker, including a non-string column, is public.
        require(&df, IsPublic.dependencies(), IsPublic.as_str())?;
        let private = col(IsPrivate.as_str())
            .cast(DataType::String)
            .eq(lit(PRIVATE_MARKER))
            .fill_null(lit(false));
        df = df
            .lazy()
            .with_columns([
                private.clone().cast(DataType::Int32).alias(IsPrivate.as_str()),
                private.not().cast(DataType::Int32).alias(IsPublic.as_str()),
            ])
            .collect()?;
        debug!(column = %IsPublic, "derived column");

        for (column, numerator, denominator) in [
            (
                PctFtUndergrad,
                col(NumFtUndergrad.as_str()),
                col(NumFtUndergrad.as_str()) + col(NumPtUndergrad.as_str()),
            ),
            (PctAccepted, col(NumAccepted.as_str()), col(NumApplied.as_str())),
            (PctEnrolled, col(NumEnrolled.as_str()), col(NumAccepted.as_str())),
        ] {
            require(&df, column.dependencies(), column.as_str())?;
            let zeros = count_zero(&df, denominator.clone())?;
            if zeros > 0 {
                warn!(column = %column, rows = zeros, policy = %policy, "zero denominator");
                if policy == DivisionPolicy::Fail {
                    return Err(Error::ArithmeticAnomaly {
                        column: column.as_str().to_string(),
                        rows: zeros,
                    });
                }
            }
            df = with_column(df, column, ratio(numerator, denominator, policy))?;
        }

        let total = TotalCost
            .dependencies()
            .iter()
            .map(|c| col(c.as_str()))
            .reduce(|acc, e| acc + e)
            .ok_or_else(|| Error::missing_column(CostOutstate.as_str(), TotalCost.as_str()))?;
        df = with_column(df, TotalCost, total)?;

        DerivedFrame::new(df)
    }
}

fn with_column(df: DataFrame, column: CollegeColumn, expr: Expr) -> Result<DataFrame> {
    require(&df, column.dependencies(), column.as_str())?;
    let df = df
        .lazy()
        .with_column(expr.alias(column.as_str()))
        .collect()?;
    debug!(column = %column, "derived column");
    Ok(df)
}

fn count_zero(df: &DataFrame, denominator: Expr) -> Result<usize> {
    let zeros = df
        .clone()
        .lazy()
        .filter(denominator.cast(DataType::Float64).eq(lit(0.0)))
        .collect()?;
    Ok(zeros.height())
}

fn ratio(numerator: Expr, denominator: Expr, policy: DivisionPolicy) -> Expr {
    let denominator = denominator.cast(DataType::Float64);
    let quotient = numerator.cast(DataType::Float64) / denominator.clone();
    match policy {
        DivisionPolicy::Null => when(denominator.eq(lit(0.0)))
            .then(lit(Null {}).cast(DataType::Float64))
            .otherwise(quotient),
        DivisionPolicy::NaN => when(denominator.eq(lit(0.0)))
            .then(lit(f64::NAN))
            .otherwise(quotient),
        DivisionPolicy::Fail => quotient,
    }
}

/// Dataset with every canonical and derived column present
#[derive(Debug, Clone)]
pub struct DerivedFrame {
    df: DataFrame,
}

impl DerivedFrame {
    /// Wrap a DataFrame that already carries the derived columns
    pub fn new(df: DataFrame) -> Result<Self> {
        require(&df, &CollegeColumn::SOURCE, "derive")?;
        require(&df, &CollegeColumn::DERIVED, "derive")?;
        Ok(Self { df })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_first_missing_column() {
        let df = df!["name" => ["a"], "num_applied" => [1i64]].unwrap();
        assert!(require(&df, &[Name, NumApplied], "test").is_ok());
        match require(&df, &[Name, NumAccepted, NumEnrolled], "test") {
            Err(Error::MissingColumn { column, stage }) => {
                assert_eq!(column, "num_accepted");
                assert_eq!(stage, "test");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_float_values_casts_integers() {
        let df = df!["num_applied" => [Some(3i64), None]].unwrap();
        let values = float_values(&df, NumApplied).unwrap();
        assert_eq!(values, vec![Some(3.0), None]);
    }

    fn raw_row(private: &str) -> RawFrame {
        // Apps through Grad.Rate, in source order.
        let values = [
            100i64, 50, 20, 10, 20, 500, 100, 8000, 5000, 500, 1000, 90, 95, 12, 30, 15000, 80,
        ];
        let mut columns = vec![
            Column::new("college".into(), ["Alpha"]),
            Column::new("Private".into(), [private]),
        ];
        for (column, value) in CollegeColumn::SOURCE[2..].iter().zip(values) {
            columns.push(Column::new(column.source_header().unwrap().into(), [value]));
        }
        RawFrame {
            df: DataFrame::new(columns).unwrap(),
        }
    }

    #[test]
    fn test_renamed_columns_resolve_in_lazy_plans() {
        let frame = raw_row("Yes").rename().unwrap();
        let schema = frame.dataframe().schema();
        assert!(schema.contains("grad_rate"));
        assert!(!schema.contains("Grad.Rate"));

        let selected = frame
            .dataframe()
            .clone()
            .lazy()
            .select([col("name"), col("is_private"), col("num_applied")])
            .collect()
            .unwrap();
        assert_eq!(selected.width(), 3);
        assert_eq!(selected.height(), 1);
    }

    #[test]
    fn test_derive_appends_indicators_ratios_and_total() {
        let derived = raw_row("Yes")
            .rename()
            .unwrap()
            .derive(DivisionPolicy::Null)
            .unwrap();
        let df = derived.dataframe();

        let private = df.column("is_private").unwrap().i32().unwrap().get(0);
        let public = df.column("is_public").unwrap().i32().unwrap().get(0);
        assert_eq!((private, public), (Some(1), Some(0)));
        assert_eq!(float_values(df, PctAccepted).unwrap(), vec![Some(0.5)]);
        assert_eq!(float_values(df, PctEnrolled).unwrap(), vec![Some(0.4)]);
        assert_eq!(float_values(df, TotalCost).unwrap(), vec![Some(14500.0)]);
    }

    #[test]
    fn test_derive_treats_unmarked_private_as_public() {
        for marker in ["No", "yes", ""] {
            let derived = raw_row(marker)
                .rename()
                .unwrap()
                .derive(DivisionPolicy::Null)
                .unwrap();
            let df = derived.dataframe();
            assert_eq!(float_values(df, IsPrivate).unwrap(), vec![Some(0.0)], "{marker:?}");
            assert_eq!(float_values(df, IsPublic).unwrap(), vec![Some(1.0)], "{marker:?}");
        }
    }

    #[test]
    fn test_college_frame_rejects_partial_schema() {
        let df = df!["name" => ["a"]].unwrap();
        assert!(matches!(
            CollegeFrame::new(df),
            Err(Error::MissingColumn { .. })
        ));
    }
}
