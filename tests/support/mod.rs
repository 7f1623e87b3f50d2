//! Stub capability implementations and wiring helpers for the suite.
//!
//! Each stub is the smallest implementation that lets the container be
//! exercised end to end; recording stubs keep what they were given so tests
//! can assert the resolved handle is the registered one.

use serde_json::Value;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use testhost::contracts::{
    AsyncMonitorFactory, CancellationSource, Clock, CommandLineOptions, Configuration, Console,
    Environment, ExecutionRequest, ExecutionRequestFactory, ExitCodeTracker, FileSystem,
    FrameworkCapabilities, FrameworkInvoker, HostControllerInfo, LogLevel, Logger, LoggerFactory,
    MessageBus, ModuleInfo, Monitor, OutputDevice, ParsedCommandLine, ProcessHandler,
    RuntimeFeatures, SessionContext, TaskScheduler, TelemetryCollector, TelemetryInfo,
    TestFramework, UnhandledExceptionPolicy,
};
use testhost::{ServiceId, ServiceRegistry, ServiceRegistryBuilder};

#[derive(Default)]
pub struct RecordingBus {
    pub messages: Mutex<Vec<Value>>,
}

impl MessageBus for RecordingBus {
    fn publish(&self, payload: Value) {
        self.messages.lock().unwrap().push(payload);
    }
}

pub struct MapConfiguration(pub BTreeMap<String, String>);

impl Configuration for MapConfiguration {
    fn value(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[derive(Default)]
pub struct StaticOptions(pub BTreeMap<String, Vec<String>>);

impl CommandLineOptions for StaticOptions {
    fn is_set(&self, option: &str) -> bool {
        self.0.contains_key(option)
    }

    fn arguments(&self, option: &str) -> Option<Vec<String>> {
        self.0.get(option).cloned()
    }
}

#[derive(Default)]
pub struct ListLogger {
    pub records: Mutex<Vec<(LogLevel, String)>>,
}

impl Logger for ListLogger {
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.records.lock().unwrap().push((level, message.to_string()));
    }
}

#[derive(Default)]
pub struct ListLoggerFactory;

impl LoggerFactory for ListLoggerFactory {
    fn create(&self, _category: &str) -> Arc<dyn Logger> {
        Arc::new(ListLogger::default())
    }
}

#[derive(Default)]
pub struct BufferedOutput {
    pub lines: Mutex<Vec<String>>,
}

impl OutputDevice for BufferedOutput {
    fn display(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

/// Clock pinned to a fixed instant so timestamp assertions stay stable.
pub struct FixedClock(pub SystemTime);

impl FixedClock {
    pub fn at_epoch_secs(secs: u64) -> Self {
        Self(UNIX_EPOCH + Duration::from_secs(secs))
    }
}

impl Clock for FixedClock {
    fn utc_now(&self) -> SystemTime {
        self.0
    }
}

/// Runs every job on the caller's thread; good enough for a test session.
pub struct InlineScheduler;

impl TaskScheduler for InlineScheduler {
    fn run(&self, job: Box<dyn FnOnce() + Send>) {
        job();
    }

    fn run_long_running(&self, _name: &str, job: Box<dyn FnOnce() + Send>) {
        job();
    }
}

pub struct FakeProcessHandler {
    pub pid: u32,
}

impl ProcessHandler for FakeProcessHandler {
    fn current_pid(&self) -> u32 {
        self.pid
    }

    fn spawn(&self, _program: &Path, _args: &[String]) -> io::Result<u32> {
        Ok(self.pid + 1)
    }
}

pub struct MapEnvironment(pub BTreeMap<String, String>);

impl Environment for MapEnvironment {
    fn variable(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }

    fn process_path(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/opt/testhost/testhost"))
    }
}

pub struct StaticModuleInfo {
    pub name: String,
}

impl ModuleInfo for StaticModuleInfo {
    fn module_name(&self) -> String {
        self.name.clone()
    }

    fn module_path(&self) -> Option<PathBuf> {
        Some(PathBuf::from(format!("/opt/testhost/{}", self.name)))
    }
}

pub struct NoController;

impl HostControllerInfo for NoController {
    fn has_controller(&self) -> bool {
        false
    }

    fn controller_pid(&self) -> Option<u32> {
        None
    }
}

#[derive(Default)]
pub struct CaptureConsole {
    pub lines: Mutex<Vec<String>>,
}

impl Console for CaptureConsole {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn is_output_redirected(&self) -> bool {
        true
    }
}

#[derive(Default)]
pub struct LocalMonitor {
    lock: Mutex<()>,
}

impl Monitor for LocalMonitor {
    fn synchronized(&self, _name: &str, section: Box<dyn FnOnce() + Send>) {
        let _guard = self.lock.lock().unwrap();
        section();
    }
}

pub struct LocalMonitorFactory;

impl AsyncMonitorFactory for LocalMonitorFactory {
    fn create(&self) -> Arc<dyn Monitor> {
        Arc::new(LocalMonitor::default())
    }
}

#[derive(Default)]
pub struct TrackingExitCode {
    failures: AtomicUsize,
}

impl ExitCodeTracker for TrackingExitCode {
    fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::SeqCst);
    }

    fn exit_code(&self) -> i32 {
        if self.failures.load(Ordering::SeqCst) == 0 { 0 } else { 2 }
    }
}

#[derive(Default)]
pub struct FlagCancellation {
    cancelled: AtomicBool,
}

impl CancellationSource for FlagCancellation {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct CountingTelemetry {
    pub events: Mutex<Vec<String>>,
}

impl TelemetryCollector for CountingTelemetry {
    fn record(&self, event: &str, _payload: Value) {
        self.events.lock().unwrap().push(event.to_string());
    }
}

#[derive(Default)]
pub struct NoopFramework {
    pub executed: Mutex<Vec<String>>,
}

impl TestFramework for NoopFramework {
    fn display_name(&self) -> String {
        "noop-framework".to_string()
    }

    fn execute(&self, request: &ExecutionRequest) {
        self.executed
            .lock()
            .unwrap()
            .push(request.session.session_id.clone());
    }
}

pub struct DirectInvoker;

impl FrameworkInvoker for DirectInvoker {
    fn invoke(&self, framework: &dyn TestFramework, request: &ExecutionRequest) {
        framework.execute(request);
    }
}

pub struct FixedRequestFactory {
    pub session_id: String,
}

impl ExecutionRequestFactory for FixedRequestFactory {
    fn create(&self) -> ExecutionRequest {
        ExecutionRequest {
            session: SessionContext {
                session_id: self.session_id.clone(),
            },
            filter: None,
            tests: Vec::new(),
        }
    }
}

/// Passes straight through to `std::fs`; the suite only reads files it wrote.
pub struct HostFileSystem;

impl FileSystem for HostFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Registry with one stub handle per capability, sealed and ready to resolve.
pub fn wired_registry() -> Arc<ServiceRegistry> {
    let mut builder = ServiceRegistryBuilder::new();

    let bus: Arc<dyn MessageBus> = Arc::new(RecordingBus::default());
    builder.register(ServiceId::MessageBus, bus);
    let configuration: Arc<dyn Configuration> = Arc::new(MapConfiguration(BTreeMap::from([(
        "results_directory".to_string(),
        "/tmp/results".to_string(),
    )])));
    builder.register(ServiceId::Configuration, configuration);
    let options: Arc<dyn CommandLineOptions> = Arc::new(StaticOptions(BTreeMap::from([(
        "list-tests".to_string(),
        Vec::new(),
    )])));
    builder.register(ServiceId::CommandLineOptions, options);
    let loggers: Arc<dyn LoggerFactory> = Arc::new(ListLoggerFactory);
    builder.register(ServiceId::LoggerFactory, loggers);
    let output: Arc<dyn OutputDevice> = Arc::new(BufferedOutput::default());
    builder.register(ServiceId::OutputDevice, output);

    let clock: Arc<dyn Clock> = Arc::new(FixedClock::at_epoch_secs(1_700_000_000));
    builder.register(ServiceId::Clock, clock);
    let scheduler: Arc<dyn TaskScheduler> = Arc::new(InlineScheduler);
    builder.register(ServiceId::TaskScheduler, scheduler);
    let processes: Arc<dyn ProcessHandler> = Arc::new(FakeProcessHandler { pid: 4100 });
    builder.register(ServiceId::ProcessHandler, processes);
    let environment: Arc<dyn Environment> = Arc::new(MapEnvironment(BTreeMap::new()));
    builder.register(ServiceId::Environment, environment);
    let module: Arc<dyn ModuleInfo> = Arc::new(StaticModuleInfo {
        name: "calc_tests".to_string(),
    });
    builder.register(ServiceId::ModuleInfo, module);
    let controller: Arc<dyn HostControllerInfo> = Arc::new(NoController);
    builder.register(ServiceId::HostControllerInfo, controller);
    let console: Arc<dyn Console> = Arc::new(CaptureConsole::default());
    builder.register(ServiceId::Console, console);
    builder.register(
        ServiceId::RuntimeFeatures,
        Arc::new(RuntimeFeatures {
            dynamic_code_supported: true,
            hot_reload_enabled: false,
        }),
    );
    let monitors: Arc<dyn AsyncMonitorFactory> = Arc::new(LocalMonitorFactory);
    builder.register(ServiceId::AsyncMonitorFactory, monitors);
    let exit_code: Arc<dyn ExitCodeTracker> = Arc::new(TrackingExitCode::default());
    builder.register(ServiceId::ExitCodeTracker, exit_code);
    let monitor: Arc<dyn Monitor> = Arc::new(LocalMonitor::default());
    builder.register(ServiceId::Monitor, monitor);
    let cancellation: Arc<dyn CancellationSource> = Arc::new(FlagCancellation::default());
    builder.register(ServiceId::CancellationSource, cancellation);
    builder.register(ServiceId::TelemetryInfo, Arc::new(TelemetryInfo { enabled: false }));
    let telemetry: Arc<dyn TelemetryCollector> = Arc::new(CountingTelemetry::default());
    builder.register(ServiceId::TelemetryCollector, telemetry);
    let framework: Arc<dyn TestFramework> = Arc::new(NoopFramework::default());
    builder.register(ServiceId::TestFramework, framework);
    let invoker: Arc<dyn FrameworkInvoker> = Arc::new(DirectInvoker);
    builder.register(ServiceId::FrameworkInvoker, invoker);
    builder.register(
        ServiceId::UnhandledExceptionPolicy,
        Arc::new(UnhandledExceptionPolicy {
            fast_fail_on_failure: false,
        }),
    );
    let requests: Arc<dyn ExecutionRequestFactory> = Arc::new(FixedRequestFactory {
        session_id: "session-1".to_string(),
    });
    builder.register(ServiceId::ExecutionRequestFactory, requests);
    let file_system: Arc<dyn FileSystem> = Arc::new(HostFileSystem);
    builder.register(ServiceId::FileSystem, file_system);
    builder.register(
        ServiceId::FrameworkCapabilities,
        Arc::new(FrameworkCapabilities::new(vec![
            "trx_reports".to_string(),
            "stop_on_first_failure".to_string(),
        ])),
    );
    builder.register(
        ServiceId::ParsedCommandLine,
        Arc::new(ParsedCommandLine::new(
            BTreeMap::from([("list-tests".to_string(), Vec::new())]),
            Vec::new(),
        )),
    );
    builder.register(
        ServiceId::SessionContext,
        Arc::new(SessionContext {
            session_id: "session-1".to_string(),
        }),
    );

    Arc::new(builder.seal())
}
