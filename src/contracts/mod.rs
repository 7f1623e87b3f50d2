//! Capability contracts resolved through the service container.
//!
//! Each contract pairs with exactly one [`ServiceId`] and is registered as a
//! shared handle (an `Arc` to the trait object or record). The split between
//! [`extension`] and [`host`] mirrors the two façade tiers: extension
//! contracts are the documented surface external subsystems may depend on,
//! host contracts stay private to the platform.
//!
//! [`ServiceId`]: crate::services::ServiceId

pub mod extension;
pub mod host;

pub use extension::{
    CommandLineOptions, Configuration, LogLevel, Logger, LoggerFactory, MessageBus, OutputDevice,
};
pub use host::{
    AsyncMonitorFactory, CancellationSource, Clock, Console, Environment, ExecutionRequest,
    ExecutionRequestFactory, ExitCodeTracker, FileSystem, FrameworkCapabilities, FrameworkInvoker,
    HostControllerInfo, ModuleInfo, Monitor, ParsedCommandLine, ProcessHandler, RuntimeFeatures,
    SessionContext, TaskScheduler, TelemetryCollector, TelemetryInfo, TestFramework,
    UnhandledExceptionPolicy,
};
