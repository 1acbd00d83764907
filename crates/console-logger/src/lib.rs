//! Console Logger
//!
//! A `log` backend that writes to the browser console (stderr off-wasm) and
//! keeps the most recent records in a circular buffer so the app can show
//! them without opening devtools.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Most verbose level that gets through
    pub level: LevelFilter,
    /// Number of recent records kept in memory
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            capacity: 200,
        }
    }
}

/// Fixed-size buffer that drops the oldest line when full
#[derive(Debug)]
struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }
}

#[derive(Debug)]
pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            level: config.level,
            buffer: Mutex::new(RingBuffer::new(config.capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buf| buf.lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{} {}] {}", record.level(), record.target(), record.args());
        write_console(record.level(), &line);

        if let Ok(mut buf) = self.buffer.lock() {
            let stamp = chrono::Utc::now().format("%H:%M:%S%.3f");
            buf.push(format!("{} {}", stamp, line));
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
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
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the global logger. Fails if another logger is already set.
pub fn init(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Recent lines from the global logger, empty before [`init`]
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_capacity_lines() {
        let logger = ConsoleLogger::new(LoggerConfig {
            level: LevelFilter::Trace,
            capacity: 2,
        });
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO test] two"));
        assert!(lines[1].ends_with("[INFO test] three"));
    }

    #[test]
    fn test_filters_by_level() {
        let logger = ConsoleLogger::new(LoggerConfig {
            level: LevelFilter::Warn,
            capacity: 10,
        });
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Warn, "shown");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("shown"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(LoggerConfig {
            level: LevelFilter::Trace,
            capacity: 0,
        });
        emit(&logger, Level::Error, "gone");
        assert!(logger.recent().is_empty());
    }
}
