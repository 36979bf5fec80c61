//! Centralized integration tests for server configuration resolution
use config_abstractions::{LoggerSink, LoggingActivator};
use config_impl::{InMemoryLoggingActivator, TomlKeyValueProvider};
use infrastructure_common::ConfigError;
use parking_lot::Mutex;
use server_configuration::{ResolvedConfiguration, ServerConfigurationResolver, ThreadPriority};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 记录调用序列的日志激活器
#[derive(Debug, Default)]
struct RecordingActivator {
    calls: Mutex<Vec<String>>,
}

impl RecordingActivator {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl LoggingActivator for RecordingActivator {
    fn initialise(&self, buffer_size: usize) {
        self.calls.lock().push(format!("initialise({buffer_size})"));
    }

    fn enable_sink(&self, sink: LoggerSink) {
        self.calls.lock().push(format!("enable({sink})"));
    }

    fn set_sink_resource_name(&self, sink: LoggerSink, resource_name: &str) {
        self.calls
            .lock()
            .push(format!("resource({sink}, {resource_name})"));
    }
}

/// 在临时目录中写入配置文件
fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("server.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn resolve_with(
    path: &Path,
    activator: &dyn LoggingActivator,
) -> Result<ResolvedConfiguration, ConfigError> {
    let mut resolver = ServerConfigurationResolver::new(TomlKeyValueProvider::new(), activator);
    resolver.resolve(path.to_str().unwrap())
}

#[test]
fn test_multithreaded_with_partial_thread_pool_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
LOGGER_BUFFER_SIZE = 4096
SYMBOL_ARRAY = ["AAPL", "MSFT"]
CENTRAL_ORDER_BOOK_MULTITHREADED = true
CENTRAL_ORDER_BOOK_THREAD_STACK_SIZE = 65536
"#,
    );

    let activator = InMemoryLoggingActivator::new();
    let config = resolve_with(&path, &activator).unwrap();

    assert_eq!(config.symbols(), ["AAPL".to_string(), "MSFT".to_string()]);
    assert!(config.is_matching_multithreaded());

    let params = config.thread_pool_parameters();
    assert_eq!(params.thread_stack_size, 65536);
    assert!(params.pin_threads_to_cores, "未配置时使用内置默认值");
    assert_eq!(params.work_queue_size_per_thread, 128);
    assert_eq!(params.thread_priority, ThreadPriority::Normal);
}

#[test]
fn test_missing_symbol_array_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "LOGGER_BUFFER_SIZE = 4096\nPROCESS_PRIORITY = \"HIGH\"\n");

    let activator = InMemoryLoggingActivator::new();
    let err = resolve_with(&path, &activator).unwrap_err();
    assert_eq!(err, ConfigError::no_symbols("SYMBOL_ARRAY"));
}

#[test]
fn test_only_file_sink_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
LOGGER_BUFFER_SIZE = 256
LOGGER_FILE = true
LOGGER_FILE_RESOURCE_NAME = "/var/log/x.log"
SYMBOL_ARRAY = ["AAPL"]
"#,
    );

    let recorder = RecordingActivator::default();
    resolve_with(&path, &recorder).unwrap();
    assert_eq!(
        recorder.calls(),
        vec![
            "initialise(256)".to_string(),
            "enable(FILE)".to_string(),
            "resource(FILE, /var/log/x.log)".to_string(),
        ]
    );

    let activator = InMemoryLoggingActivator::new();
    resolve_with(&path, &activator).unwrap();
    let settings = activator.settings();
    assert_eq!(settings.enabled_sinks(), vec![LoggerSink::File]);
    assert_eq!(
        activator.resource_name(LoggerSink::File).as_deref(),
        Some("/var/log/x.log")
    );
    assert!(!activator.is_enabled(LoggerSink::ConsoleOutput));
    assert!(!activator.is_enabled(LoggerSink::MemoryMappedFile));
}

#[test]
fn test_sink_enable_independence() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
LOGGER_BUFFER_SIZE = 256
LOGGER_CONSOLE_OUTPUT = true
LOGGER_FILE = false
LOGGER_FILE_RESOURCE_NAME = "/var/log/ignored.log"
SYMBOL_ARRAY = ["AAPL"]
"#,
    );

    let recorder = RecordingActivator::default();
    resolve_with(&path, &recorder).unwrap();
    assert_eq!(
        recorder.calls(),
        vec![
            "initialise(256)".to_string(),
            "enable(CONSOLE_OUTPUT)".to_string(),
        ]
    );
}

#[test]
fn test_single_threaded_without_thread_pool_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
LOGGER_BUFFER_SIZE = 256
SYMBOL_ARRAY = "AAPL, MSFT"
CENTRAL_ORDER_BOOK_MULTITHREADED = false
"#,
    );

    let activator = InMemoryLoggingActivator::new();
    let config = resolve_with(&path, &activator).unwrap();
    assert!(!config.is_matching_multithreaded());
    assert_eq!(config.symbols().len(), 2);
}

#[test]
fn test_resolving_twice_yields_identical_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
SINGLE_INSTANCE_TCP_PORT = 9000
OFFLINE_ORDER_ENTRY_FILE = "offline_orders.txt"
LOGGER_BUFFER_SIZE = 256
SYMBOL_ARRAY = ["AAPL", "MSFT"]
CENTRAL_ORDER_BOOK_THREAD_PRIORITY = "ABOVE_NORMAL"
"#,
    );

    let activator = InMemoryLoggingActivator::new();
    let first = resolve_with(&path, &activator).unwrap();
    let second = resolve_with(&path, &activator).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.offline_order_entry_file(), Some("offline_orders.txt"));
    assert_eq!(
        first.thread_pool_parameters().thread_priority,
        ThreadPriority::AboveNormal
    );
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let recorder = RecordingActivator::default();

    let err = resolve_with(&dir.path().join("absent.toml"), &recorder).unwrap_err();
    assert!(matches!(err, ConfigError::SourceUnavailable { .. }));
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_snapshot_is_shareable_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "LOGGER_BUFFER_SIZE = 1\nSYMBOL_ARRAY = [\"AAPL\"]\n");

    let activator = InMemoryLoggingActivator::new();
    let config = std::sync::Arc::new(resolve_with(&path, &activator).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || config.symbols().to_vec())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["AAPL".to_string()]);
    }
}
