//! Service wiring core for a modular test-execution host.
//!
//! The crate exposes the typed capability container every host subsystem is
//! resolved through: a [`ServiceRegistry`] sealed at the end of startup, the
//! [`ServiceLocator`] resolution primitives over it, and the two visibility
//! façades that scope what a consumer may depend on. [`PlatformServices`] is
//! the host-private surface with a named accessor per capability;
//! [`ExtensionServices`] is the restricted surface handed to external
//! subsystems. Contracts for the hosted capabilities live in [`contracts`],
//! and [`identity`] carries the test-unit identity record hosts use for
//! cross-process correlation.
//!
//! Resolution is fail-fast by design: a missing required capability is a
//! wiring defect reported at the lookup site with the capability named, never
//! retried and never papered over with a default instance.

pub mod contracts;
pub mod identity;
pub mod services;

pub use contracts::{
    AsyncMonitorFactory, CancellationSource, Clock, CommandLineOptions, Configuration, Console,
    Environment, ExecutionRequest, ExecutionRequestFactory, ExitCodeTracker, FileSystem,
    FrameworkCapabilities, FrameworkInvoker, HostControllerInfo, LogLevel, Logger, LoggerFactory,
    MessageBus, ModuleInfo, Monitor, OutputDevice, ParsedCommandLine, ProcessHandler,
    RuntimeFeatures, SessionContext, TaskScheduler, TelemetryCollector, TelemetryInfo,
    TestFramework, UnhandledExceptionPolicy,
};
pub use identity::{NormalizedName, TestUnitIdentity};
pub use services::{
    ExtensionServices, PlatformServices, ServiceEntry, ServiceError, ServiceId, ServiceLocator,
    ServiceRegistry, ServiceRegistryBuilder,
};
