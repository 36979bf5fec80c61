//! 测试辅助：记录调用序列的日志激活器

use config_abstractions::{LoggerSink, LoggingActivator};
use config_impl::MemoryKeyValueProvider;
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoggingCall {
    Initialise(usize),
    EnableSink(LoggerSink),
    SetResourceName(LoggerSink, String),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingActivator {
    calls: Mutex<Vec<LoggingCall>>,
}

impl RecordingActivator {
    pub(crate) fn calls(&self) -> Vec<LoggingCall> {
        self.calls.lock().clone()
    }
}

impl LoggingActivator for RecordingActivator {
    fn initialise(&self, buffer_size: usize) {
        self.calls.lock().push(LoggingCall::Initialise(buffer_size));
    }

    fn enable_sink(&self, sink: LoggerSink) {
        self.calls.lock().push(LoggingCall::EnableSink(sink));
    }

    fn set_sink_resource_name(&self, sink: LoggerSink, resource_name: &str) {
        self.calls
            .lock()
            .push(LoggingCall::SetResourceName(sink, resource_name.to_string()));
    }
}

/// 以单个名为 `server` 的配置源构造内存提供者
pub(crate) fn memory_source(content: &str) -> MemoryKeyValueProvider {
    MemoryKeyValueProvider::new()
        .with_toml_source("server", content)
        .unwrap()
}
