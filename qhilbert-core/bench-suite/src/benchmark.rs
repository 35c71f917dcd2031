use std::cmp::max;
use std::hint::black_box;

use qhilbert_core::{decode_batch_from, CurveConfig, LaneWidth, Position, Width};

use crate::oracle;
use crate::platforms::{BenchmarkHost, Measurement, Platform};
use crate::render::{render, MAX_RENDER_ORDER};

/// Distances sampled from curves too large to enumerate.
const SAMPLED_COUNT: u64 = 1 << 22;

/// Represents the command-line argument for lane width selection.
#[derive(Copy, Clone, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum LanesArg {
    X1,
    X4,
    X8,
    X16,
    /// The widest lane width the build target supports.
    Auto,
}

impl LanesArg {
    pub fn lane_width(self) -> LaneWidth {
        match self {
            LanesArg::X1 => LaneWidth::X1,
            LanesArg::X4 => LaneWidth::X4,
            LanesArg::X8 => LaneWidth::X8,
            LanesArg::X16 => LaneWidth::X16,
            LanesArg::Auto => LaneWidth::widest(),
        }
    }
}

/// Suite-wide settings taken from the command line.
#[derive(Clone, Copy, Debug)]
pub struct SuiteOptions {
    pub trials: usize,
    pub lanes: LaneWidth,
    pub render: bool,
}

/// One table row.
struct Row {
    name: String,
    dims: String,
    cells: String,
    oracle_ns: f64,
    batch_ns: f64,
    per_elem_ns: f64,
    passed: bool,
    speedup: f64,
}

/// Average of `trials` timed runs of `f`.
fn time_trials<F: FnMut()>(trials: usize, mut f: F) -> f64 {
    // Warmup run to populate caches/TLB.
    f();
    let mut total = 0.0;
    for _ in 0..trials {
        let t0 = Platform::now();
        f();
        let Measurement { nanos } = Platform::measure(t0);
        total += nanos;
    }
    total / trials.max(1) as f64
}

fn distances_for(config: CurveConfig) -> Vec<u32> {
    if config.is_exhaustive() {
        config.distances().collect()
    } else {
        config.sampled(SAMPLED_COUNT).collect()
    }
}

fn run_benchmark(config: CurveConfig, width: Width, options: SuiteOptions) -> Row {
    let side = width.get();
    let distances = distances_for(config);
    let truth = oracle::ground_truth(side, &distances);
    log::debug!(
        "{}: {} distances, oracle ground truth ready",
        width,
        distances.len()
    );

    let mut reference = vec![Position::default(); distances.len()];
    let oracle_ns = time_trials(options.trials, || {
        for (slot, &d) in reference.iter_mut().zip(&distances) {
            let (x, y) = oracle::d2xy(side as i64, black_box(d) as i64);
            *slot = Position::new(x as u32, y as u32);
        }
        black_box(&reference);
    });

    let mut positions = vec![Position::default(); distances.len()];
    let batch_ns = time_trials(options.trials, || {
        decode_batch_from(width, black_box(&distances), &mut positions, options.lanes);
        black_box(&positions);
    });

    let passed = positions == truth && reference == truth;
    if !passed {
        if let Some(i) = (0..truth.len()).find(|&i| positions[i] != truth[i]) {
            log::warn!(
                "{}: first mismatch at distance {}: got {:?}, expected {:?}",
                width,
                distances[i],
                positions[i],
                truth[i]
            );
        }
    }

    if options.render && config.order <= MAX_RENDER_ORDER {
        for line in render(&positions, side as usize) {
            Platform::print(&line);
        }
    }

    let sampled = if config.is_exhaustive() { "" } else { " sampled" };
    Row {
        name: format!("order {}", config.order),
        dims: format!("{side}x{side}"),
        cells: format!("{}{}", distances.len(), sampled),
        oracle_ns,
        batch_ns,
        per_elem_ns: batch_ns / distances.len().max(1) as f64,
        passed,
        speedup: if batch_ns > 0.0 { oracle_ns / batch_ns } else { 0.0 },
    }
}

/// Main entry point for the benchmark suite.
/// Returns `true` if every curve matched the oracle.
pub fn run_suite(configs: &[CurveConfig], options: SuiteOptions) -> anyhow::Result<bool> {
    let mut rows = Vec::with_capacity(configs.len());
    for &config in configs {
        let width = config.width()?;
        rows.push(run_benchmark(config, width, options));
    }

    // 1. Calculate formatting widths for the results table.
    let mut w_name = "Curve".len();
    let mut w_dims = "Dims".len();
    let mut w_cells = "Cells".len();
    for row in &rows {
        w_name = max(w_name, row.name.len());
        w_dims = max(w_dims, row.dims.len());
        w_cells = max(w_cells, row.cells.len());
    }
    let w_ns = 14;
    let w_elem = 8;
    let w_check = 6;

    // 2. Print Table Header
    let header = format!(
        "{:<w0$} | {:<w1$} | {:<w2$} | {:<w3$} | {:<w4$} | {:<w5$} | {:<w6$} | {}",
        "Curve",
        "Dims",
        "Cells",
        "d2xy(ns)",
        "batch(ns)",
        "ns/cell",
        "Check",
        "Speedup",
        w0 = w_name,
        w1 = w_dims,
        w2 = w_cells,
        w3 = w_ns,
        w4 = w_ns,
        w5 = w_elem,
        w6 = w_check,
    );
    Platform::print(&header);
    Platform::print(&"-".repeat(header.chars().count()));

    // 3. Rows
    let mut all_passed = true;
    for row in &rows {
        all_passed &= row.passed;
        Platform::print(&format!(
            "{:<w0$} | {:<w1$} | {:<w2$} | {:<w3$.1} | {:<w4$.1} | {:<w5$.3} | {:<w6$} | {:.2}x",
            row.name,
            row.dims,
            row.cells,
            row.oracle_ns,
            row.batch_ns,
            row.per_elem_ns,
            if row.passed { "PASS" } else { "FAIL" },
            row.speedup,
            w0 = w_name,
            w1 = w_dims,
            w2 = w_cells,
            w3 = w_ns,
            w4 = w_ns,
            w5 = w_elem,
            w6 = w_check,
        ));
    }
    Ok(all_passed)
}
