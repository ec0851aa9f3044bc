//! Configuration for FileDB
//!
//! Options passed to [`Store::open`](crate::Store::open), with sensible defaults.

use std::fmt;
use std::sync::Arc;

use crate::logger::{Logger, TracingLogger};

/// Options for a Store instance
#[derive(Clone)]
pub struct Options {
    // -------------------------------------------------------------------------
    // Logging
    // -------------------------------------------------------------------------
    /// Injected logging capability (default: `TracingLogger` at Info)
    pub logger: Arc<dyn Logger>,

    // -------------------------------------------------------------------------
    // Durability
    // -------------------------------------------------------------------------
    /// Whether the temp file is fsynced before it is renamed into place
    pub sync_strategy: SyncStrategy,
}

/// Write sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync the temp file before every rename (safest, slowest)
    EveryWrite,

    /// Leave flushing to the OS page cache
    Never,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            logger: Arc::new(TracingLogger::default()),
            sync_strategy: SyncStrategy::EveryWrite,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("logger", &"<dyn Logger>")
            .field("sync_strategy", &self.sync_strategy)
            .finish()
    }
}

impl Options {
    /// Create a new options builder
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

/// Builder for Options
#[derive(Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Set the logger the store reports to
    pub fn logger(mut self, logger: impl Logger + 'static) -> Self {
        self.options.logger = Arc::new(logger);
        self
    }

    /// Share an existing logger
    pub fn shared_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.options.logger = logger;
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.options.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Options {
        self.options
    }
}
