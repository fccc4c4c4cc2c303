use anyhow::{Context, Result};
use clap::Parser;
use college_explore::frame::{DivisionPolicy, DEFAULT_REPORT_ROWS};
use college_explore::viz::{NullScatterVisualizer, SvgScatterVisualizer};
use college_explore::{
    CollegeDatasetPipeline, ComputeSession, PipelineConfig, APP_NAME, DEFAULT_DATA_PATH,
    DEFAULT_OUT_DIR,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Explore the college statistics dataset: print reports and render scatter plots
#[derive(Debug, Parser)]
#[command(name = "college-explore", version, about)]
struct Args {
    /// CSV file to load
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Directory for the rendered SVG plots
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Rows printed per report
    #[arg(long, default_value_t = DEFAULT_REPORT_ROWS, conflicts_with = "all_rows")]
    rows: usize,

    /// Print every row of every report
    #[arg(long)]
    all_rows: bool,

    /// Zero-denominator handling for ratios: null, nan or fail
    #[arg(long, default_value_t = DivisionPolicy::Null)]
    division_policy: DivisionPolicy,

    /// Skip plot rendering
    #[arg(long)]
    no_plots: bool,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report_rows = (!args.all_rows).then_some(args.rows);

    let config = PipelineConfig::new(&args.data)
        .out_dir(&args.out_dir)
        .report_rows(report_rows)
        .division_policy(args.division_policy);
    info!(?config, "starting");

    let pipeline = CollegeDatasetPipeline::new(config);
    let mut session = ComputeSession::open(APP_NAME);
    let mut stdout = std::io::stdout().lock();

    let result = if args.no_plots {
        pipeline.run_in(&mut session, &mut stdout, &mut NullScatterVisualizer)
    } else {
        let mut visualizer = SvgScatterVisualizer::new(&args.out_dir)
            .with_context(|| format!("creating {}", args.out_dir.display()))?;
        pipeline.run_in(&mut session, &mut stdout, &mut visualizer)
    };
    let summary = result.with_context(|| format!("exploring {}", args.data.display()))?;

    info!(
        rows = summary.rows,
        plots_written = summary.written.len(),
        "done"
    );
    Ok(())
}
