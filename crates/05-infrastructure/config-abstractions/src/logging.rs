//! 日志输出端注册表与激活接口

use serde::{Deserialize, Serialize};
use std::fmt;

/// 日志配置键前缀
pub const LOGGER_KEY_PREFIX: &str = "LOGGER_";

/// 资源名配置键后缀
pub const LOGGER_RESOURCE_NAME_SUFFIX: &str = "_RESOURCE_NAME";

/// 已知的日志输出端
///
/// 注册表在编译期固定，解析器按 [`LoggerSink::ALL`] 的顺序逐个处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoggerSink {
    /// 控制台输出
    ConsoleOutput,
    /// 普通文件
    File,
    /// 内存映射文件
    MemoryMappedFile,
}

impl LoggerSink {
    /// 全部已注册的输出端
    pub const ALL: [Self; 3] = [Self::ConsoleOutput, Self::File, Self::MemoryMappedFile];

    /// 输出端在配置文件中的名称
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConsoleOutput => "CONSOLE_OUTPUT",
            Self::File => "FILE",
            Self::MemoryMappedFile => "MEMORY_MAPPED_FILE",
        }
    }

    /// 启用开关的配置键，例如 `LOGGER_FILE`
    pub fn enable_key(self) -> String {
        format!("{}{}", LOGGER_KEY_PREFIX, self.name())
    }

    /// 资源名的配置键，例如 `LOGGER_FILE_RESOURCE_NAME`
    pub fn resource_name_key(self) -> String {
        format!(
            "{}{}{}",
            LOGGER_KEY_PREFIX,
            self.name(),
            LOGGER_RESOURCE_NAME_SUFFIX
        )
    }
}

impl fmt::Display for LoggerSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 日志激活器 trait
///
/// 进程级日志器的能力子集。解析器在启动阶段通过它初始化缓冲区并启用输出端，
/// 此时其他线程尚未运行，因此调用序列不要求原子性。
pub trait LoggingActivator: Send + Sync {
    /// 以指定缓冲区大小初始化日志器
    fn initialise(&self, buffer_size: usize);

    /// 启用输出端
    fn enable_sink(&self, sink: LoggerSink);

    /// 设置输出端的资源名（文件路径等）
    fn set_sink_resource_name(&self, sink: LoggerSink, resource_name: &str);
}
