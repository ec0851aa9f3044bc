//! Logger Module
//!
//! The logging capability injected into a [`Store`](crate::Store).
//!
//! The store only reports what it did (directory created, resource written,
//! temp files swept). Nothing it logs ever changes control flow, so any
//! implementation is free to drop messages.

use std::fmt;

/// Severity of a log message, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Leveled logging capability
///
/// Implementors provide `log`; the per-level helpers forward to it.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>);

    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, args)
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args)
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args)
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args)
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args)
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args)
    }
}

/// Default logger: forwards to `tracing`
///
/// Messages less severe than `max_level` are dropped before they reach the
/// subscriber. `Fatal` has no `tracing` counterpart and is emitted as an
/// error event tagged `fatal = true`.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    max_level: LogLevel,
}

impl TracingLogger {
    pub fn new(max_level: LogLevel) -> Self {
        Self { max_level }
    }

    pub fn max_level(&self) -> LogLevel {
        self.max_level
    }

    /// Whether a message at `level` would be forwarded
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        match level {
            LogLevel::Fatal => tracing::error!(fatal = true, "{}", args),
            LogLevel::Error => tracing::error!("{}", args),
            LogLevel::Warn => tracing::warn!("{}", args),
            LogLevel::Info => tracing::info!("{}", args),
            LogLevel::Debug => tracing::debug!("{}", args),
            LogLevel::Trace => tracing::trace!("{}", args),
        }
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _args: fmt::Arguments<'_>) {}
}
