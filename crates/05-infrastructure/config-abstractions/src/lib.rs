//! # Configuration Abstractions
//!
//! 配置管理抽象层，定义启动配置解析所依赖的外部协作者接口。
//!
//! ## 核心接口
//!
//! - [`KeyValueProvider`] - 键值配置提供者接口
//! - [`LoggingActivator`] - 日志输出端激活接口
//! - [`LoggerSink`] - 已知日志输出端注册表

pub mod logging;
pub mod provider;

pub use logging::*;
pub use provider::*;
