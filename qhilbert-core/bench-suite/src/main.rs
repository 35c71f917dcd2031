//! # Hilbert Curve Benchmark Suite
//!
//! Checks `qhilbert-core` against an independent `d2xy` oracle and measures how
//! much faster the batch engine is, one table row per curve size.

mod benchmark;
mod logger;
mod oracle;
mod platforms;
mod render;

use clap::Parser;
use qhilbert_core::{CurveConfig, LaneWidth, TestCurves, MAX_ORDER};

use crate::benchmark::{run_suite, LanesArg, SuiteOptions};
use crate::platforms::{BenchmarkHost, Platform};

// --- CLI Arguments ---
#[derive(Parser)]
#[command(about = "Inverse Hilbert transform benchmark", long_about = None)]
struct Cli {
    /// Curve order to benchmark (width = 2^order)
    #[arg(short, long, default_value_t = TestCurves::MEDIUM.order,
          value_parser = clap::value_parser!(u32).range(0..=MAX_ORDER as i64))]
    order: u32,

    /// Timed runs per implementation
    #[arg(short, long, default_value_t = 10)]
    trials: usize,

    /// Starting lane width of the batch cascade
    #[arg(short, long, value_enum, default_value_t = LanesArg::Auto)]
    lanes: LanesArg,

    /// Run every predefined curve size instead of `--order`
    #[arg(long, default_value_t = false)]
    all_curves: bool,

    /// Print each curve with box-drawing glyphs (orders up to 6)
    #[arg(long, default_value_t = false)]
    render: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logger::init(args.verbose)?;

    let lanes = args.lanes.lane_width();
    log::debug!(
        "target supports up to {}, cascade starts at {}",
        LaneWidth::widest(),
        lanes
    );

    let configs: Vec<CurveConfig> = if args.all_curves {
        TestCurves::all().to_vec()
    } else {
        vec![CurveConfig::new(args.order)]
    };

    Platform::print("[Inverse Hilbert Benchmark]");
    Platform::print(&Platform::platform_name());
    Platform::print(&format!("Trials: {}, cascade start: {}", args.trials, lanes));
    Platform::print("");

    let options = SuiteOptions {
        trials: args.trials,
        lanes,
        render: args.render,
    };
    if !run_suite(&configs, options)? {
        anyhow::bail!("batch output does not match the oracle");
    }
    Ok(())
}
