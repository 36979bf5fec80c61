//! 线程池参数

use crate::constants::{
    DEFAULT_HYPER_THREADING, DEFAULT_PIN_THREADS_TO_CORES, DEFAULT_THREAD_STACK_SIZE,
    DEFAULT_WORK_QUEUE_SIZE_PER_THREAD,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 工作线程优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreadPriority {
    /// 低
    Low,
    /// 低于正常
    BelowNormal,
    /// 正常
    #[default]
    Normal,
    /// 高于正常
    AboveNormal,
    /// 高
    High,
    /// 实时关键
    Critical,
}

impl ThreadPriority {
    /// 配置文件中的名称
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::BelowNormal => "BELOW_NORMAL",
            Self::Normal => "NORMAL",
            Self::AboveNormal => "ABOVE_NORMAL",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for ThreadPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的线程优先级名称
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未知的线程优先级: {name:?}，可选值: LOW, BELOW_NORMAL, NORMAL, ABOVE_NORMAL, HIGH, CRITICAL")]
pub struct UnknownThreadPriority {
    /// 原始名称
    pub name: String,
}

impl FromStr for ThreadPriority {
    type Err = UnknownThreadPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "BELOW_NORMAL" => Ok(Self::BelowNormal),
            "NORMAL" => Ok(Self::Normal),
            "ABOVE_NORMAL" => Ok(Self::AboveNormal),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(UnknownThreadPriority {
                name: s.to_string(),
            }),
        }
    }
}

/// 撮合线程池参数
///
/// 仅在多线程撮合模式下由配置填充；单线程模式下保持 [`Default`] 值且不会被使用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadPoolParameters {
    /// 工作线程绑定到 CPU 核
    pub pin_threads_to_cores: bool,
    /// 绑核时是否使用超线程核
    pub hyper_threading: bool,
    /// 每个工作线程的队列长度
    pub work_queue_size_per_thread: usize,
    /// 线程栈大小（字节），0 表示平台默认值
    pub thread_stack_size: usize,
    /// 线程优先级
    pub thread_priority: ThreadPriority,
}

impl Default for ThreadPoolParameters {
    fn default() -> Self {
        Self {
            pin_threads_to_cores: DEFAULT_PIN_THREADS_TO_CORES,
            hyper_threading: DEFAULT_HYPER_THREADING,
            work_queue_size_per_thread: DEFAULT_WORK_QUEUE_SIZE_PER_THREAD,
            thread_stack_size: DEFAULT_THREAD_STACK_SIZE,
            thread_priority: ThreadPriority::default(),
        }
    }
}
