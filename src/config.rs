//! Run configuration

use college_frame::{DivisionPolicy, DEFAULT_REPORT_ROWS};
use std::path::{Path, PathBuf};

/// Dataset file name used when none is given
pub const DEFAULT_DATA_PATH: &str = "College.csv";

/// Directory plots are written to when none is given
pub const DEFAULT_OUT_DIR: &str = "plots";

/// Name the compute session is opened under
pub const APP_NAME: &str = "college-explore";

/// Configuration for one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// CSV file to load
    pub data_path: PathBuf,

    /// Directory for rendered plots
    pub out_dir: PathBuf,

    /// Rows printed per report, `None` for all
    pub report_rows: Option<usize>,

    /// Zero-denominator handling for derived ratios
    pub division_policy: DivisionPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            report_rows: Some(DEFAULT_REPORT_ROWS),
            division_policy: DivisionPolicy::default(),
        }
    }
}

impl PipelineConfig {
    pub fn new(data_path: impl AsRef<Path>) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn out_dir(mut self, out_dir: impl AsRef<Path>) -> Self {
        self.out_dir = out_dir.as_ref().to_path_buf();
        self
    }

    pub fn report_rows(mut self, rows: Option<usize>) -> Self {
        self.report_rows = rows;
        self
    }

    pub fn division_policy(mut self, policy: DivisionPolicy) -> Self {
        self.division_policy = policy;
        self
    }
}
