//! The college dataset pipeline
//!
//! Stages run strictly in order inside one [`ComputeSession`]:
//! load, rename, derive, reports, plots. The first error aborts the run.

use crate::config::{PipelineConfig, APP_NAME};
use crate::session::ComputeSession;
use college_frame::{
    render_report, DerivedFrame, ExploreExt, RawFrame, Result, PLOTS, REPORTS,
};
use college_viz::ScatterVisualizer;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Institutions in the dataset
    pub rows: usize,
    /// Reports printed
    pub reports: usize,
    /// Plot queries handed to the visualizer
    pub plots: usize,
    /// Files written by the visualizer
    pub written: Vec<PathBuf>,
}

/// Load, derive, report and plot the college dataset
#[derive(Debug, Clone, Default)]
pub struct CollegeDatasetPipeline {
    config: PipelineConfig,
}

impl CollegeDatasetPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage in a fresh session
    ///
    /// Reports go to `out`; plots go to `visualizer`.
    pub fn run<W, V>(&self, out: &mut W, visualizer: &mut V) -> Result<RunSummary>
    where
        W: Write,
        V: ScatterVisualizer,
    {
        let mut session = ComputeSession::open(APP_NAME);
        self.run_in(&mut session, out, visualizer)
    }

    /// Run every stage inside an already opened session
    pub fn run_in<W, V>(
        &self,
        session: &mut ComputeSession,
        out: &mut W,
        visualizer: &mut V,
    ) -> Result<RunSummary>
    where
        W: Write,
        V: ScatterVisualizer,
    {
        let derived = self.prepare(session)?;
        let reports = session.time_stage("reports", || self.print_reports(&derived, out))?;
        let written = session.time_stage("plots", || self.render_plots(&derived, visualizer))?;

        let summary = RunSummary {
            rows: derived.height(),
            reports,
            plots: PLOTS.len(),
            written,
        };
        info!(
            rows = summary.rows,
            reports = summary.reports,
            plots = summary.plots,
            files = summary.written.len(),
            "pipeline finished"
        );
        Ok(summary)
    }

    /// Load, rename and derive
    pub fn prepare(&self, session: &mut ComputeSession) -> Result<DerivedFrame> {
        let raw = session.time_stage("load", || RawFrame::load(&self.config.data_path))?;
        let frame = session.time_stage("rename", || raw.rename())?;
        session.time_stage("derive", || frame.derive(self.config.division_policy))
    }

    /// Print every report under its caption, returning how many were printed
    pub fn print_reports<W: Write>(&self, derived: &DerivedFrame, out: &mut W) -> Result<usize> {
        for spec in &REPORTS {
            let df = derived.report(spec, self.config.report_rows)?;
            write!(out, "{}", render_report(spec, &df)?)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(REPORTS.len())
    }

    /// Run every plot query through the visualizer
    pub fn render_plots<V: ScatterVisualizer>(
        &self,
        derived: &DerivedFrame,
        visualizer: &mut V,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for spec in &PLOTS {
            let data = derived.scatter(spec)?;
            if let Some(path) = visualizer.render_scatter(spec, &data)? {
                written.push(path);
            }
        }
        Ok(written)
    }
}
