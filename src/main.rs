use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cupchart::{load_records, run_chart, ChartConfig, Coercion, Metric, RangeBounds};

/// Interactive line chart of FIFA World Cup statistics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with one row per tournament edition.
    #[arg(default_value = "data/fifa-world-cup.csv")]
    csv: PathBuf,

    /// Metric selected at start-up (e.g. GOALS, TEAMS, AVERAGE_ATTENDANCE).
    #[arg(long, default_value = "GOALS")]
    metric: Metric,

    /// Keep the years under the range handles instead of excluding them.
    #[arg(long)]
    inclusive_range: bool,

    /// Fail on non-numeric cells instead of treating them as NaN.
    #[arg(long)]
    strict: bool,

    /// Duration of chart transitions in milliseconds.
    #[arg(long, default_value_t = 800)]
    transition_ms: u64,

    /// Window title.
    #[arg(long, default_value = "FIFA World Cup")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = ChartConfig {
        data_path: args.csv,
        coercion: if args.strict { Coercion::Strict } else { Coercion::Lenient },
        metric: args.metric,
        range_bounds: if args.inclusive_range {
            RangeBounds::Inclusive
        } else {
            RangeBounds::Exclusive
        },
        transition: Duration::from_millis(args.transition_ms),
        title: args.title,
        ..ChartConfig::default()
    };

    let records = load_records(&cfg.data_path, cfg.coercion)
        .inspect_err(|e| tracing::error!(error = %e, "cannot load dataset"))
        .with_context(|| format!("loading {}", cfg.data_path.display()))?;

    run_chart(records, cfg).map_err(|e| anyhow::anyhow!("window error: {e}"))
}
