//! 日志激活器实现

use config_abstractions::{LoggerSink, LoggingActivator};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// 单个输出端的激活状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SinkSettings {
    /// 是否已启用
    pub enabled: bool,
    /// 资源名（文件路径等）
    pub resource_name: Option<String>,
}

/// 日志器设置快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoggerSettings {
    /// 缓冲区大小，未初始化时为 `None`
    pub buffer_size: Option<usize>,
    /// 被触及过的输出端
    pub sinks: BTreeMap<LoggerSink, SinkSettings>,
}

impl LoggerSettings {
    /// 获取输出端状态，未触及的输出端返回默认（未启用）状态
    pub fn sink(&self, sink: LoggerSink) -> SinkSettings {
        self.sinks.get(&sink).cloned().unwrap_or_default()
    }

    /// 所有已启用的输出端，按注册表顺序
    pub fn enabled_sinks(&self) -> Vec<LoggerSink> {
        LoggerSink::ALL
            .into_iter()
            .filter(|sink| self.sink(*sink).enabled)
            .collect()
    }
}

/// 内存日志激活器
///
/// 只记录启动阶段下发的日志设置，由启动程序据此装配实际的日志输出。
#[derive(Debug, Default)]
pub struct InMemoryLoggingActivator {
    state: RwLock<LoggerSettings>,
}

impl InMemoryLoggingActivator {
    /// 创建新的日志激活器
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取当前设置快照
    pub fn settings(&self) -> LoggerSettings {
        self.state.read().clone()
    }

    /// 输出端是否已启用
    pub fn is_enabled(&self, sink: LoggerSink) -> bool {
        self.state
            .read()
            .sinks
            .get(&sink)
            .is_some_and(|settings| settings.enabled)
    }

    /// 输出端的资源名
    pub fn resource_name(&self, sink: LoggerSink) -> Option<String> {
        self.state
            .read()
            .sinks
            .get(&sink)
            .and_then(|settings| settings.resource_name.clone())
    }
}

impl LoggingActivator for InMemoryLoggingActivator {
    fn initialise(&self, buffer_size: usize) {
        info!("初始化日志器，缓冲区大小: {}", buffer_size);
        self.state.write().buffer_size = Some(buffer_size);
    }

    fn enable_sink(&self, sink: LoggerSink) {
        debug!("启用日志输出端: {}", sink);
        self.state.write().sinks.entry(sink).or_default().enabled = true;
    }

    fn set_sink_resource_name(&self, sink: LoggerSink, resource_name: &str) {
        debug!("设置日志输出端资源名: {} -> {}", sink, resource_name);
        self.state.write().sinks.entry(sink).or_default().resource_name =
            Some(resource_name.to_string());
    }
}
