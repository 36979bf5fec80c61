//! # Infrastructure Common
//!
//! 这个 crate 提供了撮合服务器基础设施层共用的错误类型。
//!
//! ## 核心组件
//!
//! - [`ConfigError`] - 配置解析过程中的致命错误
//! - [`ConfigResult`] - 配置结果类型别名
//!
//! ## 设计原则
//!
//! - 所有配置错误都是致命的，调用方不应在失败后继续启动
//! - 错误携带足够的上下文（键名、来源）用于启动日志

pub mod errors;

pub use errors::*;
