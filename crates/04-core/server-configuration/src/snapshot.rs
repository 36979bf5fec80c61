//! 已解析的配置快照

use crate::thread_pool::ThreadPoolParameters;
use serde::Serialize;

/// 服务器启动配置快照
///
/// 只能由 [`ServerConfigurationResolver`](crate::ServerConfigurationResolver) 构造，
/// 构造后不可修改，可在任意线程间无同步地共享读取。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfiguration {
    pub(crate) single_instance_tcp_port: u16,
    pub(crate) process_priority: String,
    pub(crate) offline_order_entry_file: Option<String>,
    pub(crate) symbols: Vec<String>,
    pub(crate) matching_multithreaded: bool,
    pub(crate) thread_pool_parameters: ThreadPoolParameters,
}

impl ResolvedConfiguration {
    /// 单实例监听端口
    pub fn single_instance_tcp_port(&self) -> u16 {
        self.single_instance_tcp_port
    }

    /// 进程调度优先级名称
    pub fn process_priority(&self) -> &str {
        &self.process_priority
    }

    /// 离线委托文件路径，配置中不存在该键时为 `None`
    pub fn offline_order_entry_file(&self) -> Option<&str> {
        self.offline_order_entry_file.as_deref()
    }

    /// 交易品种列表，保证非空
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// 是否启用多线程撮合
    pub fn is_matching_multithreaded(&self) -> bool {
        self.matching_multithreaded
    }

    /// 线程池参数，仅在多线程撮合模式下有意义
    pub fn thread_pool_parameters(&self) -> &ThreadPoolParameters {
        &self.thread_pool_parameters
    }
}
