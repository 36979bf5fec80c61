//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
///
/// 解析启动配置时出现的任何错误都是致命的：解析器不会重试，
/// 也不会产生部分有效的配置快照。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 配置源无法打开或无法解析
    #[error("配置源不可用: {location}, 原因: {reason}")]
    SourceUnavailable {
        /// 配置源位置（文件路径或内存配置源名称）
        location: String,
        /// 失败原因
        reason: String,
    },

    /// 必需的配置键不存在
    #[error("配置键不存在: {key}")]
    KeyNotFound {
        /// 缺失的配置键
        key: String,
    },

    /// 配置值无法转换为期望的类型
    #[error("配置值无效: {key}, 原因: {message}")]
    MalformedValue {
        /// 取值无效的配置键
        key: String,
        /// 转换失败的说明
        message: String,
    },

    /// 交易品种列表为空
    #[error("配置中没有任何交易品种: {key}")]
    NoSymbolsConfigured {
        /// 交易品种列表的配置键
        key: String,
    },
}

impl ConfigError {
    /// 创建配置源不可用错误
    pub fn source_unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// 创建配置键不存在错误
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// 创建配置值无效错误
    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// 创建交易品种为空错误
    pub fn no_symbols(key: impl Into<String>) -> Self {
        Self::NoSymbolsConfigured { key: key.into() }
    }

    /// 出错的配置键（如果有）
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::SourceUnavailable { .. } => None,
            Self::KeyNotFound { key }
            | Self::MalformedValue { key, .. }
            | Self::NoSymbolsConfigured { key } => Some(key),
        }
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = ConfigError::malformed("SINGLE_INSTANCE_TCP_PORT", "不是整数");
        assert_eq!(
            err.to_string(),
            "配置值无效: SINGLE_INSTANCE_TCP_PORT, 原因: 不是整数"
        );

        let err = ConfigError::source_unavailable("/etc/server.toml", "文件不存在");
        assert!(err.to_string().contains("/etc/server.toml"));
        assert_eq!(err.key(), None);
    }

    #[test]
    fn test_key_accessor() {
        assert_eq!(
            ConfigError::no_symbols("SYMBOL_ARRAY").key(),
            Some("SYMBOL_ARRAY")
        );
        assert_eq!(
            ConfigError::key_not_found("LOGGER_BUFFER_SIZE").key(),
            Some("LOGGER_BUFFER_SIZE")
        );
    }
}
