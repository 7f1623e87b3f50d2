//! Host-private contracts.
//!
//! Capabilities here are implementation details of the host: extensions never
//! see them, and the platform façade is the only resolution surface that
//! names them. Behavior seams are traits; capability records that carry only
//! data are plain structs registered as shared handles.

use crate::identity::TestUnitIdentity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Source of session timestamps.
pub trait Clock: Send + Sync {
    fn utc_now(&self) -> SystemTime;
}

/// Schedules host work items.
pub trait TaskScheduler: Send + Sync {
    /// Run a short-lived job.
    fn run(&self, job: Box<dyn FnOnce() + Send>);
    /// Run a job expected to live for most of the session (listeners,
    /// pump loops). `name` identifies it in diagnostics.
    fn run_long_running(&self, name: &str, job: Box<dyn FnOnce() + Send>);
}

/// Process control for the host and its children.
pub trait ProcessHandler: Send + Sync {
    fn current_pid(&self) -> u32;
    /// Launch a child process and return its pid.
    fn spawn(&self, program: &Path, args: &[String]) -> io::Result<u32>;
}

/// Access to the process environment.
pub trait Environment: Send + Sync {
    fn variable(&self, name: &str) -> Option<String>;
    /// Path of the running executable, when the platform exposes one.
    fn process_path(&self) -> Option<PathBuf>;
}

/// Identity of the module hosting the test session.
pub trait ModuleInfo: Send + Sync {
    fn module_name(&self) -> String;
    fn module_path(&self) -> Option<PathBuf>;
}

/// Whether this process runs under an external host controller.
pub trait HostControllerInfo: Send + Sync {
    fn has_controller(&self) -> bool;
    fn controller_pid(&self) -> Option<u32>;
}

/// Raw console access, distinct from the user-facing output device.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str);
    fn is_output_redirected(&self) -> bool;
}

/// Scoped mutual exclusion for host sections that must not overlap.
pub trait Monitor: Send + Sync {
    /// Run `section` while holding the named lock.
    fn synchronized(&self, name: &str, section: Box<dyn FnOnce() + Send>);
}

/// Produces independent [`Monitor`] instances for coordination points.
pub trait AsyncMonitorFactory: Send + Sync {
    fn create(&self) -> Arc<dyn Monitor>;
}

/// Accumulates session outcomes into the process exit code.
pub trait ExitCodeTracker: Send + Sync {
    fn record_failure(&self);
    fn exit_code(&self) -> i32;
}

/// Session-wide cancellation signal.
pub trait CancellationSource: Send + Sync {
    fn cancel(&self);
    fn is_cancelled(&self) -> bool;
}

/// Sink for telemetry events when collection is enabled.
pub trait TelemetryCollector: Send + Sync {
    fn record(&self, event: &str, payload: Value);
}

/// Adapter boundary to the test framework driving this session.
pub trait TestFramework: Send + Sync {
    fn display_name(&self) -> String;
    /// Execute one request, reporting results through the message bus.
    fn execute(&self, request: &ExecutionRequest);
}

/// Drives a [`TestFramework`] through a whole session: setup, execution,
/// teardown.
pub trait FrameworkInvoker: Send + Sync {
    fn invoke(&self, framework: &dyn TestFramework, request: &ExecutionRequest);
}

/// Builds the execution request for the current session.
pub trait ExecutionRequestFactory: Send + Sync {
    fn create(&self) -> ExecutionRequest;
}

/// File-system seam so host logic stays testable without touching disk.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// Feature switches fixed for the lifetime of the process.
pub struct RuntimeFeatures {
    pub dynamic_code_supported: bool,
    pub hot_reload_enabled: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// Whether telemetry collection is active for this session.
pub struct TelemetryInfo {
    pub enabled: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// Host reaction to unhandled panics/exceptions escaping test code.
pub struct UnhandledExceptionPolicy {
    pub fast_fail_on_failure: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Capability names advertised by the registered test framework.
pub struct FrameworkCapabilities {
    names: Vec<String>,
}

impl FrameworkCapabilities {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn supports(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Raw command-line parse outcome, before option-level policy is applied.
///
/// Unlike the extension-facing [`CommandLineOptions`] view, this keeps parse
/// errors so startup can report all of them at once instead of failing on the
/// first.
///
/// [`CommandLineOptions`]: crate::contracts::CommandLineOptions
pub struct ParsedCommandLine {
    options: BTreeMap<String, Vec<String>>,
    errors: Vec<String>,
}

impl ParsedCommandLine {
    pub fn new(options: BTreeMap<String, Vec<String>>, errors: Vec<String>) -> Self {
        Self { options, errors }
    }

    pub fn is_set(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }

    pub fn arguments(&self, option: &str) -> Option<&[String]> {
        self.options.get(option).map(Vec::as_slice)
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Identity of the running test session.
pub struct SessionContext {
    pub session_id: String,
}

#[derive(Clone, Debug)]
/// One unit of work handed to the test framework.
pub struct ExecutionRequest {
    pub session: SessionContext,
    /// Filter expression restricting which test units run, if any.
    pub filter: Option<String>,
    /// Explicit test units to run; empty means "everything matching the
    /// filter".
    pub tests: Vec<TestUnitIdentity>,
}
