//! 键值配置提供者抽象接口

use infrastructure_common::ConfigResult;

/// 键值配置提供者 trait
///
/// 定义从配置源读取类型化配置值的统一接口。带 `_or` 后缀的方法在键
/// 不存在时返回默认值；不带默认值的方法要求键必须存在。
pub trait KeyValueProvider {
    /// 绑定到指定配置源，替换之前加载的全部内容
    fn load(&mut self, source: &str) -> ConfigResult<()>;

    /// 检查配置键是否存在
    fn has(&self, key: &str) -> bool;

    /// 获取整数值
    fn get_int(&self, key: &str) -> ConfigResult<i64>;

    /// 获取字符串值
    fn get_string(&self, key: &str) -> ConfigResult<String>;

    /// 获取布尔值
    fn get_bool(&self, key: &str) -> ConfigResult<bool>;

    /// 获取字符串列表
    ///
    /// 键不存在时返回空列表，由调用方决定空列表是否合法。
    fn get_list(&self, key: &str) -> ConfigResult<Vec<String>>;

    /// 获取提供者名称
    fn name(&self) -> &str;

    /// 获取整数值，键不存在时返回默认值
    fn get_int_or(&self, key: &str, default: i64) -> ConfigResult<i64> {
        if self.has(key) {
            self.get_int(key)
        } else {
            Ok(default)
        }
    }

    /// 获取字符串值，键不存在时返回默认值
    fn get_string_or(&self, key: &str, default: &str) -> ConfigResult<String> {
        if self.has(key) {
            self.get_string(key)
        } else {
            Ok(default.to_string())
        }
    }

    /// 获取布尔值，键不存在时返回默认值
    fn get_bool_or(&self, key: &str, default: bool) -> ConfigResult<bool> {
        if self.has(key) {
            self.get_bool(key)
        } else {
            Ok(default)
        }
    }
}
