//! `log` backend that writes through the platform's `print`.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::platforms::{BenchmarkHost, Platform};

struct HostLogger;

static LOGGER: HostLogger = HostLogger;

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        Platform::print(&format!("[{tag}] {}: {}", record.target(), record.args()));
    }

    fn flush(&self) {}
}

/// Installs the logger. `verbosity` counts `-v` flags: 0 warnings only,
/// 1 debug, 2 or more trace.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("logger already set: {e}"))?;
    log::set_max_level(level);
    Ok(())
}
