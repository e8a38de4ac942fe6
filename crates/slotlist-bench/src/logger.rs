//! A minimal `log` backend writing level-coloured lines to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes every enabled record to stderr.
pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            Level::Error => 31, // Red
            Level::Warn => 93,  // BrightYellow
            Level::Info => 37,  // White
            Level::Debug => 32, // Green
            Level::Trace => 90, // BrightBlack
        };
        eprintln!(
            "\u{1B}[{}m[{:>5}] {}\u{1B}[0m",
            color,
            record.level(),
            record.args(),
        );
    }

    fn flush(&self) {}
}

/// Install [`StderrLogger`] as the global logger.
///
/// Fails if another logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: StderrLogger = StderrLogger;
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
