//! # Configuration Implementation
//!
//! 配置管理的具体实现，提供配置源和日志激活器。
//!
//! ## 主要组件
//!
//! - [`TomlKeyValueProvider`] - TOML 文件配置提供者
//! - [`MemoryKeyValueProvider`] - 内存配置提供者
//! - [`InMemoryLoggingActivator`] - 记录输出端状态的日志激活器

pub mod logging;
pub mod providers;

mod table;

pub use logging::*;
pub use providers::*;
