//! 配置提供者实现

use crate::table::ConfigTable;
use config_abstractions::KeyValueProvider;
use infrastructure_common::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// TOML 配置提供者
///
/// 配置源标识即文件路径，文件内容为扁平的 `KEY = value` 形式，
/// 列表使用 TOML 数组或逗号分隔的字符串。
#[derive(Debug, Default)]
pub struct TomlKeyValueProvider {
    file_path: Option<PathBuf>,
    table: ConfigTable,
}

impl TomlKeyValueProvider {
    /// 创建尚未绑定配置源的提供者
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建提供者并立即加载指定文件
    pub fn open<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let mut provider = Self::new();
        provider.load_file(path.as_ref())?;
        Ok(provider)
    }

    /// 当前绑定的文件路径
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// 已加载的配置键数量
    pub fn key_count(&self) -> usize {
        self.table.len()
    }

    /// 获取所有配置键
    pub fn keys(&self) -> Vec<String> {
        self.table.keys()
    }

    fn load_file(&mut self, path: &Path) -> ConfigResult<()> {
        debug!("加载 TOML 配置文件: {}", path.display());

        let location = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| {
            warn!("配置文件读取失败: {}, 错误: {}", location, e);
            ConfigError::source_unavailable(&location, e.to_string())
        })?;

        let table = ConfigTable::parse(&content).map_err(|e| {
            warn!("配置文件解析失败: {}, 错误: {}", location, e);
            ConfigError::source_unavailable(&location, format!("TOML 解析失败: {e}"))
        })?;

        self.table = table;
        self.file_path = Some(path.to_path_buf());

        debug!("TOML 配置文件加载完成，共 {} 个键", self.table.len());
        Ok(())
    }
}

impl KeyValueProvider for TomlKeyValueProvider {
    fn load(&mut self, source: &str) -> ConfigResult<()> {
        self.load_file(Path::new(source))
    }

    fn has(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    fn get_int(&self, key: &str) -> ConfigResult<i64> {
        self.table.int(key)
    }

    fn get_string(&self, key: &str) -> ConfigResult<String> {
        self.table.string(key)
    }

    fn get_bool(&self, key: &str) -> ConfigResult<bool> {
        self.table.bool(key)
    }

    fn get_list(&self, key: &str) -> ConfigResult<Vec<String>> {
        self.table.list(key)
    }

    fn name(&self) -> &str {
        "TomlKeyValueProvider"
    }
}

/// 内存配置提供者
///
/// 预先注册若干具名配置源，`load` 时按名称切换。用于测试和嵌入式启动。
#[derive(Debug, Default)]
pub struct MemoryKeyValueProvider {
    sources: HashMap<String, ConfigTable>,
    active: ConfigTable,
}

impl MemoryKeyValueProvider {
    /// 创建空的内存配置提供者
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册具名配置源
    pub fn with_source(mut self, name: impl Into<String>, values: toml::Table) -> Self {
        self.insert_source(name, values);
        self
    }

    /// 以 TOML 文本注册具名配置源
    pub fn with_toml_source(mut self, name: impl Into<String>, content: &str) -> ConfigResult<Self> {
        let name = name.into();
        let table = ConfigTable::parse(content).map_err(|e| {
            ConfigError::source_unavailable(&name, format!("TOML 解析失败: {e}"))
        })?;
        self.sources.insert(name, table);
        Ok(self)
    }

    /// 注册或替换具名配置源
    pub fn insert_source(&mut self, name: impl Into<String>, values: toml::Table) {
        self.sources.insert(name.into(), ConfigTable::new(values));
    }

    /// 已注册的配置源数量
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl KeyValueProvider for MemoryKeyValueProvider {
    fn load(&mut self, source: &str) -> ConfigResult<()> {
        match self.sources.get(source) {
            Some(table) => {
                self.active = table.clone();
                debug!("切换到内存配置源: {}", source);
                Ok(())
            }
            None => Err(ConfigError::source_unavailable(source, "未注册的内存配置源")),
        }
    }

    fn has(&self, key: &str) -> bool {
        self.active.contains(key)
    }

    fn get_int(&self, key: &str) -> ConfigResult<i64> {
        self.active.int(key)
    }

    fn get_string(&self, key: &str) -> ConfigResult<String> {
        self.active.string(key)
    }

    fn get_bool(&self, key: &str) -> ConfigResult<bool> {
        self.active.bool(key)
    }

    fn get_list(&self, key: &str) -> ConfigResult<Vec<String>> {
        self.active.list(key)
    }

    fn name(&self) -> &str {
        "MemoryKeyValueProvider"
    }
}
