//! 扁平配置表与类型转换规则

use infrastructure_common::{ConfigError, ConfigResult};
use toml::Value;

/// 已加载的扁平键值表
///
/// 两种提供者共享同一套类型转换规则，保证同一份配置无论来自文件还是内存，
/// 解析结果都一致。
#[derive(Debug, Clone, Default)]
pub(crate) struct ConfigTable {
    values: toml::Table,
}

impl ConfigTable {
    pub(crate) fn new(values: toml::Table) -> Self {
        Self { values }
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<toml::Table>(content).map(Self::new)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn required(&self, key: &str) -> ConfigResult<&Value> {
        self.values
            .get(key)
            .ok_or_else(|| ConfigError::key_not_found(key))
    }

    pub(crate) fn int(&self, key: &str) -> ConfigResult<i64> {
        match self.required(key)? {
            Value::Integer(i) => Ok(*i),
            Value::String(s) => s.trim().parse::<i64>().map_err(|e| {
                ConfigError::malformed(key, format!("无法将 {s:?} 解析为整数: {e}"))
            }),
            other => Err(ConfigError::malformed(
                key,
                format!("期望整数，实际为 {}", other.type_str()),
            )),
        }
    }

    pub(crate) fn string(&self, key: &str) -> ConfigResult<String> {
        match self.required(key)? {
            Value::String(s) => Ok(s.clone()),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            Value::Boolean(b) => Ok(b.to_string()),
            Value::Datetime(dt) => Ok(dt.to_string()),
            other => Err(ConfigError::malformed(
                key,
                format!("期望字符串，实际为 {}", other.type_str()),
            )),
        }
    }

    pub(crate) fn bool(&self, key: &str) -> ConfigResult<bool> {
        match self.required(key)? {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            Value::Integer(i) => Err(ConfigError::malformed(
                key,
                format!("整数 {i} 不能作为布尔值，只接受 0 或 1"),
            )),
            Value::String(s) => parse_bool(s).ok_or_else(|| {
                ConfigError::malformed(key, format!("无法将 {s:?} 解析为布尔值"))
            }),
            other => Err(ConfigError::malformed(
                key,
                format!("期望布尔值，实际为 {}", other.type_str()),
            )),
        }
    }

    pub(crate) fn list(&self, key: &str) -> ConfigResult<Vec<String>> {
        match self.values.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => {
                let mut list = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => list.extend(non_blank(s)),
                        other => {
                            return Err(ConfigError::malformed(
                                key,
                                format!("第 {index} 个元素期望字符串，实际为 {}", other.type_str()),
                            ))
                        }
                    }
                }
                Ok(list)
            }
            Some(Value::String(s)) => Ok(s.split(',').filter_map(non_blank).collect()),
            Some(other) => Err(ConfigError::malformed(
                key,
                format!("期望字符串数组，实际为 {}", other.type_str()),
            )),
        }
    }
}

/// 列表元素统一去除首尾空白，空白元素被丢弃
fn non_blank(item: &str) -> Option<String> {
    let item = item.trim();
    (!item.is_empty()).then(|| item.to_string())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
