use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable identifier for one hosted capability.
///
/// Every subsystem the host wires carries exactly one variant, so two
/// capabilities can never collide on a key. The enum is closed on purpose:
/// uniqueness is enforced by construction rather than checked at lookup time.
/// The snake_case string form is the spelling used in error messages, logs,
/// and serialized session metadata.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ServiceId {
    // Extension-facing capabilities; see `ExtensionServices`.
    MessageBus,
    Configuration,
    CommandLineOptions,
    LoggerFactory,
    OutputDevice,
    // Host-private capabilities; reachable through `PlatformServices` only.
    Clock,
    TaskScheduler,
    ProcessHandler,
    Environment,
    ModuleInfo,
    HostControllerInfo,
    Console,
    RuntimeFeatures,
    AsyncMonitorFactory,
    ExitCodeTracker,
    Monitor,
    CancellationSource,
    TelemetryInfo,
    TelemetryCollector,
    TestFramework,
    FrameworkInvoker,
    UnhandledExceptionPolicy,
    ExecutionRequestFactory,
    FileSystem,
    FrameworkCapabilities,
    ParsedCommandLine,
    SessionContext,
}

impl ServiceId {
    /// Every identifier, in declaration order.
    pub const ALL: [ServiceId; 27] = [
        ServiceId::MessageBus,
        ServiceId::Configuration,
        ServiceId::CommandLineOptions,
        ServiceId::LoggerFactory,
        ServiceId::OutputDevice,
        ServiceId::Clock,
        ServiceId::TaskScheduler,
        ServiceId::ProcessHandler,
        ServiceId::Environment,
        ServiceId::ModuleInfo,
        ServiceId::HostControllerInfo,
        ServiceId::Console,
        ServiceId::RuntimeFeatures,
        ServiceId::AsyncMonitorFactory,
        ServiceId::ExitCodeTracker,
        ServiceId::Monitor,
        ServiceId::CancellationSource,
        ServiceId::TelemetryInfo,
        ServiceId::TelemetryCollector,
        ServiceId::TestFramework,
        ServiceId::FrameworkInvoker,
        ServiceId::UnhandledExceptionPolicy,
        ServiceId::ExecutionRequestFactory,
        ServiceId::FileSystem,
        ServiceId::FrameworkCapabilities,
        ServiceId::ParsedCommandLine,
        ServiceId::SessionContext,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::MessageBus => "message_bus",
            ServiceId::Configuration => "configuration",
            ServiceId::CommandLineOptions => "command_line_options",
            ServiceId::LoggerFactory => "logger_factory",
            ServiceId::OutputDevice => "output_device",
            ServiceId::Clock => "clock",
            ServiceId::TaskScheduler => "task_scheduler",
            ServiceId::ProcessHandler => "process_handler",
            ServiceId::Environment => "environment",
            ServiceId::ModuleInfo => "module_info",
            ServiceId::HostControllerInfo => "host_controller_info",
            ServiceId::Console => "console",
            ServiceId::RuntimeFeatures => "runtime_features",
            ServiceId::AsyncMonitorFactory => "async_monitor_factory",
            ServiceId::ExitCodeTracker => "exit_code_tracker",
            ServiceId::Monitor => "monitor",
            ServiceId::CancellationSource => "cancellation_source",
            ServiceId::TelemetryInfo => "telemetry_info",
            ServiceId::TelemetryCollector => "telemetry_collector",
            ServiceId::TestFramework => "test_framework",
            ServiceId::FrameworkInvoker => "framework_invoker",
            ServiceId::UnhandledExceptionPolicy => "unhandled_exception_policy",
            ServiceId::ExecutionRequestFactory => "execution_request_factory",
            ServiceId::FileSystem => "file_system",
            ServiceId::FrameworkCapabilities => "framework_capabilities",
            ServiceId::ParsedCommandLine => "parsed_command_line",
            ServiceId::SessionContext => "session_context",
        }
    }

    /// Parse the string form back into an identifier.
    ///
    /// Returns `None` for unknown spellings; the identifier set is closed, so
    /// there is no `Other` escape hatch.
    pub fn parse(value: &str) -> Option<Self> {
        ServiceId::ALL.iter().copied().find(|id| id.as_str() == value)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ServiceId::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown capability identifier '{value}'"))
        })
    }
}
