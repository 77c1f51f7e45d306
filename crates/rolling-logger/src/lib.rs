//! Rolling Logger
//!
//! `log` backend that keeps the most recent formatted lines in a circular
//! buffer and forwards every record to the browser console (stderr on native
//! targets).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 256;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// `<RFC3339 UTC> <LEVEL> <target>: <message>`
fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger; later calls return an error from `log`
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines buffered by the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("bucket")
                .build(),
        );
    }

    #[test]
    fn test_line_format() {
        let logger = RollingLogger::new(LevelFilter::Debug, 8);
        write(&logger, Level::Error, "failed to add item");

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ERROR bucket: failed to add item"), "{}", lines[0]);
        assert!(lines[0].contains('T') && lines[0].contains("Z "));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 8);
        write(&logger, Level::Debug, "hidden");
        write(&logger, Level::Info, "hidden");
        write(&logger, Level::Warn, "shown");

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("shown"));
    }

    #[test]
    fn test_oldest_line_is_evicted() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for n in 0..5 {
            write(&logger, Level::Info, &format!("line {}", n));
        }

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_global_logger_keeps_recent_lines() {
        init(LevelFilter::Debug).expect("Failed to install logger");
        log::warn!(target: "bucket", "failed to delete item");

        let lines = recent_lines();
        assert!(lines.iter().any(|line| line.ends_with("WARN  bucket: failed to delete item")), "{:?}", lines);
        assert!(init(LevelFilter::Debug).is_err());
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        write(&logger, Level::Info, "a");
        write(&logger, Level::Info, "b");
        assert_eq!(logger.lines().len(), 1);
    }
}
