//! # Server Configuration
//!
//! 撮合服务器的启动配置解析。进程启动时调用一次 [`ServerConfigurationResolver::resolve`]，
//! 得到不可变的 [`ResolvedConfiguration`] 快照。
//!
//! ## 解析顺序
//!
//! 1. 单实例 TCP 端口
//! 2. 进程优先级
//! 3. 离线委托文件（可选）
//! 4. 日志缓冲区与各输出端开关
//! 5. 交易品种列表（不能为空）
//! 6. 多线程撮合开关
//! 7. 线程池参数（仅多线程模式）
//!
//! 任何一步失败都返回 [`ConfigError`](infrastructure_common::ConfigError)，
//! 调用方不应继续启动。

pub mod constants;
pub mod resolver;
pub mod sinks;
pub mod snapshot;
pub mod thread_pool;

pub use resolver::ServerConfigurationResolver;
pub use sinks::activate_logging;
pub use snapshot::ResolvedConfiguration;
pub use thread_pool::{ThreadPoolParameters, ThreadPriority, UnknownThreadPriority};

#[cfg(test)]
mod test_support;
