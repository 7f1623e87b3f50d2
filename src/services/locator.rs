//! Typed resolution over the sealed registry.
//!
//! [`ServiceLocator`] owns the three resolution primitives and translates raw
//! registry misses into the host's fail-fast contract. Two façades scope the
//! primitives by visibility tier: [`PlatformServices`] is the host-private
//! surface with a named accessor per capability, [`ExtensionServices`] is the
//! only surface external subsystems are allowed to depend on. Both are built
//! from an explicitly passed registry handle; there is no ambient container.

use crate::contracts::{
    AsyncMonitorFactory, CancellationSource, Clock, CommandLineOptions, Configuration, Console,
    Environment, ExecutionRequestFactory, ExitCodeTracker, FileSystem, FrameworkCapabilities,
    FrameworkInvoker, HostControllerInfo, LoggerFactory, MessageBus, ModuleInfo, Monitor,
    OutputDevice, ParsedCommandLine, ProcessHandler, RuntimeFeatures, SessionContext,
    TaskScheduler, TelemetryCollector, TelemetryInfo, TestFramework, UnhandledExceptionPolicy,
};
use crate::services::error::ServiceError;
use crate::services::id::ServiceId;
use crate::services::registry::ServiceRegistry;
use std::sync::Arc;

#[derive(Clone)]
/// Resolution primitives shared by both façades.
///
/// Every call is an independent, idempotent read; the locator holds no state
/// beyond the registry it wraps.
pub struct ServiceLocator {
    registry: Arc<ServiceRegistry>,
}

impl ServiceLocator {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve `id` or fail naming the missing capability.
    ///
    /// A handle registered under `id` that is not an `S` counts as missing:
    /// each identifier pairs with one handle type by contract, so a
    /// mismatched registration is the same wiring defect as none at all.
    pub fn get_required<S>(&self, id: ServiceId) -> Result<S, ServiceError>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.get_optional(id).ok_or(ServiceError::NotFound(id))
    }

    /// Resolve `id`, returning `None` when the capability is not configured.
    pub fn get_optional<S>(&self, id: ServiceId) -> Option<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.registry
            .lookup(id)
            .and_then(|entry| entry.downcast_ref::<S>().cloned())
    }

    /// Every handle registered under `id`, in registration order.
    ///
    /// An empty result is not a failure; callers decide whether zero
    /// registrations are acceptable.
    pub fn get_all<S>(&self, id: ServiceId) -> Vec<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.registry
            .lookup_all(id)
            .iter()
            .filter_map(|entry| entry.downcast_ref::<S>().cloned())
            .collect()
    }
}

#[derive(Clone)]
/// Host-private façade: every capability, by name.
///
/// The convenience accessors add no policy over [`ServiceLocator`]; each one
/// binds `get_required` to a fixed identifier and handle type so call sites
/// stay discoverable and type-checked.
pub struct PlatformServices {
    locator: ServiceLocator,
}

impl PlatformServices {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self {
            locator: ServiceLocator::new(registry),
        }
    }

    /// Narrow to the surface extensions are allowed to see.
    pub fn extension_view(&self) -> ExtensionServices {
        ExtensionServices {
            locator: self.locator.clone(),
        }
    }

    pub fn get_required<S>(&self, id: ServiceId) -> Result<S, ServiceError>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.locator.get_required(id)
    }

    pub fn get_optional<S>(&self, id: ServiceId) -> Option<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.locator.get_optional(id)
    }

    pub fn get_all<S>(&self, id: ServiceId) -> Vec<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.locator.get_all(id)
    }

    // Extension-tier capabilities, also reachable from inside the host.

    pub fn message_bus(&self) -> Result<Arc<dyn MessageBus>, ServiceError> {
        self.locator.get_required(ServiceId::MessageBus)
    }

    pub fn configuration(&self) -> Result<Arc<dyn Configuration>, ServiceError> {
        self.locator.get_required(ServiceId::Configuration)
    }

    pub fn command_line_options(&self) -> Result<Arc<dyn CommandLineOptions>, ServiceError> {
        self.locator.get_required(ServiceId::CommandLineOptions)
    }

    pub fn logger_factory(&self) -> Result<Arc<dyn LoggerFactory>, ServiceError> {
        self.locator.get_required(ServiceId::LoggerFactory)
    }

    pub fn output_device(&self) -> Result<Arc<dyn OutputDevice>, ServiceError> {
        self.locator.get_required(ServiceId::OutputDevice)
    }

    // Host-private capabilities.

    /// Clock used for session timestamps.
    pub fn clock(&self) -> Result<Arc<dyn Clock>, ServiceError> {
        self.locator.get_required(ServiceId::Clock)
    }

    pub fn task_scheduler(&self) -> Result<Arc<dyn TaskScheduler>, ServiceError> {
        self.locator.get_required(ServiceId::TaskScheduler)
    }

    pub fn process_handler(&self) -> Result<Arc<dyn ProcessHandler>, ServiceError> {
        self.locator.get_required(ServiceId::ProcessHandler)
    }

    pub fn environment(&self) -> Result<Arc<dyn Environment>, ServiceError> {
        self.locator.get_required(ServiceId::Environment)
    }

    pub fn module_info(&self) -> Result<Arc<dyn ModuleInfo>, ServiceError> {
        self.locator.get_required(ServiceId::ModuleInfo)
    }

    pub fn host_controller_info(&self) -> Result<Arc<dyn HostControllerInfo>, ServiceError> {
        self.locator.get_required(ServiceId::HostControllerInfo)
    }

    pub fn console(&self) -> Result<Arc<dyn Console>, ServiceError> {
        self.locator.get_required(ServiceId::Console)
    }

    pub fn runtime_features(&self) -> Result<Arc<RuntimeFeatures>, ServiceError> {
        self.locator.get_required(ServiceId::RuntimeFeatures)
    }

    pub fn async_monitor_factory(&self) -> Result<Arc<dyn AsyncMonitorFactory>, ServiceError> {
        self.locator.get_required(ServiceId::AsyncMonitorFactory)
    }

    pub fn exit_code_tracker(&self) -> Result<Arc<dyn ExitCodeTracker>, ServiceError> {
        self.locator.get_required(ServiceId::ExitCodeTracker)
    }

    pub fn monitor(&self) -> Result<Arc<dyn Monitor>, ServiceError> {
        self.locator.get_required(ServiceId::Monitor)
    }

    /// Cancellation signal covering the whole session.
    pub fn cancellation_source(&self) -> Result<Arc<dyn CancellationSource>, ServiceError> {
        self.locator.get_required(ServiceId::CancellationSource)
    }

    pub fn telemetry_info(&self) -> Result<Arc<TelemetryInfo>, ServiceError> {
        self.locator.get_required(ServiceId::TelemetryInfo)
    }

    pub fn telemetry_collector(&self) -> Result<Arc<dyn TelemetryCollector>, ServiceError> {
        self.locator.get_required(ServiceId::TelemetryCollector)
    }

    pub fn test_framework(&self) -> Result<Arc<dyn TestFramework>, ServiceError> {
        self.locator.get_required(ServiceId::TestFramework)
    }

    pub fn framework_invoker(&self) -> Result<Arc<dyn FrameworkInvoker>, ServiceError> {
        self.locator.get_required(ServiceId::FrameworkInvoker)
    }

    pub fn unhandled_exception_policy(
        &self,
    ) -> Result<Arc<UnhandledExceptionPolicy>, ServiceError> {
        self.locator.get_required(ServiceId::UnhandledExceptionPolicy)
    }

    pub fn execution_request_factory(
        &self,
    ) -> Result<Arc<dyn ExecutionRequestFactory>, ServiceError> {
        self.locator.get_required(ServiceId::ExecutionRequestFactory)
    }

    pub fn file_system(&self) -> Result<Arc<dyn FileSystem>, ServiceError> {
        self.locator.get_required(ServiceId::FileSystem)
    }

    pub fn framework_capabilities(&self) -> Result<Arc<FrameworkCapabilities>, ServiceError> {
        self.locator.get_required(ServiceId::FrameworkCapabilities)
    }

    /// Raw parse outcome, including parse errors startup may still report.
    pub fn parsed_command_line(&self) -> Result<Arc<ParsedCommandLine>, ServiceError> {
        self.locator.get_required(ServiceId::ParsedCommandLine)
    }

    pub fn session_context(&self) -> Result<Arc<SessionContext>, ServiceError> {
        self.locator.get_required(ServiceId::SessionContext)
    }
}

#[derive(Clone)]
/// Extension-facing façade: public-tier capabilities only.
///
/// There is deliberately no generic lookup here; the five named accessors are
/// the entire surface, so a dependency on a host-private capability does not
/// compile.
pub struct ExtensionServices {
    locator: ServiceLocator,
}

impl ExtensionServices {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self {
            locator: ServiceLocator::new(registry),
        }
    }

    pub fn message_bus(&self) -> Result<Arc<dyn MessageBus>, ServiceError> {
        self.locator.get_required(ServiceId::MessageBus)
    }

    pub fn configuration(&self) -> Result<Arc<dyn Configuration>, ServiceError> {
        self.locator.get_required(ServiceId::Configuration)
    }

    pub fn command_line_options(&self) -> Result<Arc<dyn CommandLineOptions>, ServiceError> {
        self.locator.get_required(ServiceId::CommandLineOptions)
    }

    pub fn logger_factory(&self) -> Result<Arc<dyn LoggerFactory>, ServiceError> {
        self.locator.get_required(ServiceId::LoggerFactory)
    }

    pub fn output_device(&self) -> Result<Arc<dyn OutputDevice>, ServiceError> {
        self.locator.get_required(ServiceId::OutputDevice)
    }
}
