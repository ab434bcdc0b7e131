// Leveled stderr logger with DEBUG/INFO/ERROR levels.
// Stdout is reserved for generated SQL, so every log line goes to stderr.

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Info = 1,
    Debug = 2,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

// Switch between INFO and DEBUG output (driven by --debug).
pub fn set_debug(enabled: bool) {
    let level = if enabled { Level::Debug } else { Level::Info };
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn is_debug() -> bool {
    enabled(Level::Debug)
}

fn enabled(level: Level) -> bool {
    LOG_LEVEL.load(Ordering::Relaxed) >= level as u8
}

pub fn info(msg: &str) {
    log_line(Level::Info, msg);
}

pub fn debug(msg: &str) {
    log_line(Level::Debug, msg);
}

pub fn error(msg: &str) {
    log_line(Level::Error, msg);
}

fn log_line(level: Level, msg: &str) {
    if !enabled(level) {
        return;
    }
    eprintln!("{}", format_line(level, unix_seconds(), msg));
}

fn format_line(level: Level, ts: u64, msg: &str) -> String {
    format!("[{}] {} {}", level.label(), ts, msg)
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
