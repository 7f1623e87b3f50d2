//! Contracts resolvable by external subsystems.
//!
//! These five capabilities are the stable, documented surface an extension
//! may depend on through the extension façade. Implementations come from the
//! host wiring; extensions only ever hold them as trait objects resolved out
//! of the registry.

use serde_json::Value;
use std::sync::Arc;

/// Severity levels understood by hosted loggers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Information => "information",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

/// Publishes session data to every registered consumer.
pub trait MessageBus: Send + Sync {
    /// Queue one serialized message for delivery.
    ///
    /// Delivery order is preserved per producer; consumers must not assume a
    /// global order across producers.
    fn publish(&self, payload: Value);
}

/// Read-only view of the effective host configuration.
pub trait Configuration: Send + Sync {
    /// Value for `key`, or `None` when the key is not configured.
    fn value(&self, key: &str) -> Option<String>;
}

/// Command-line surface exposed to extensions.
///
/// Options are addressed by their long name without the leading dashes.
pub trait CommandLineOptions: Send + Sync {
    fn is_set(&self, option: &str) -> bool;
    /// Arguments supplied for `option`, when it was provided with any.
    fn arguments(&self, option: &str) -> Option<Vec<String>>;
}

/// Creates category-named loggers backed by the host's sinks.
pub trait LoggerFactory: Send + Sync {
    fn create(&self, category: &str) -> Arc<dyn Logger>;
}

/// Destination for diagnostic records produced by one category.
pub trait Logger: Send + Sync {
    /// Whether records at `level` would be kept by any sink.
    fn enabled(&self, level: LogLevel) -> bool;
    fn log(&self, level: LogLevel, message: &str);
}

/// Renders user-facing output on the active device (terminal, IDE, file).
pub trait OutputDevice: Send + Sync {
    fn display(&self, text: &str);
}
