//! 配置管理器抽象接口

use infrastructure_common::{ConfigError, ConfigResult, ConfigSection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

/// 配置管理器 trait
///
/// 键为点分路径（如 `server.port`），大小写不敏感。显式设置的值优先于默认值。
/// 所有方法只需要 `&self`，实现方负责内部可变性，以便通过 `Arc` 在容器中共享。
pub trait ConfigManager: Send + Sync + Debug {
    /// 获取配置值，不存在时返回 `None`
    fn get(&self, key: &str) -> Option<Value>;

    /// 设置配置值
    fn set(&self, key: &str, value: Value) -> ConfigResult<()>;

    /// 设置默认值
    fn set_default(&self, key: &str, value: Value) -> ConfigResult<()>;

    /// 检查配置键是否存在
    fn has(&self, key: &str) -> bool;

    /// 获取所有叶子配置键（点分路径，已排序）
    fn all_keys(&self) -> Vec<String>;

    /// 获取合并后的全部配置
    fn all_settings(&self) -> Value;

    /// 将一个 JSON 对象深度合并进显式配置
    fn merge(&self, settings: Value) -> ConfigResult<()>;
}

/// 类型化配置访问扩展
pub trait ConfigManagerExt: ConfigManager {
    /// 获取字符串配置，数字和布尔值会被转换为字符串
    fn get_string(&self, key: &str) -> ConfigResult<String> {
        match self.require(key)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(ConfigError::type_conversion(key, "string", other.to_string())),
        }
    }

    /// 获取整数配置
    fn get_int(&self, key: &str) -> ConfigResult<i64> {
        let value = self.require(key)?;
        let converted = match &value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        converted.ok_or_else(|| ConfigError::type_conversion(key, "i64", value.to_string()))
    }

    /// 获取浮点数配置
    fn get_float(&self, key: &str) -> ConfigResult<f64> {
        let value = self.require(key)?;
        let converted = match &value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        converted.ok_or_else(|| ConfigError::type_conversion(key, "f64", value.to_string()))
    }

    /// 获取布尔配置，接受 `true/false`、`1/0` 形式的字符串和数字
    fn get_bool(&self, key: &str) -> ConfigResult<bool> {
        let value = self.require(key)?;
        let converted = match &value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        };
        converted.ok_or_else(|| ConfigError::type_conversion(key, "bool", value.to_string()))
    }

    /// 获取字符串列表配置
    ///
    /// 数组元素必须为标量；字符串按空白切分。
    fn get_string_slice(&self, key: &str) -> ConfigResult<Vec<String>> {
        match self.require(key)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    Value::Number(n) => Ok(n.to_string()),
                    Value::Bool(b) => Ok(b.to_string()),
                    other => Err(ConfigError::type_conversion(
                        key,
                        "string element",
                        other.to_string(),
                    )),
                })
                .collect(),
            Value::String(s) => Ok(s.split_whitespace().map(str::to_string).collect()),
            other => Err(ConfigError::type_conversion(key, "string list", other.to_string())),
        }
    }

    /// 获取配置节
    fn get_section(&self, key: &str) -> ConfigResult<ConfigSection> {
        match self.require(key)? {
            Value::Object(map) => Ok(ConfigSection::from_map(key.trim().to_lowercase(), map)),
            other => Err(ConfigError::type_conversion(key, "object", other.to_string())),
        }
    }

    /// 将指定路径的配置反序列化为具体类型
    fn unmarshal_key<T>(&self, key: &str) -> ConfigResult<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(self.require(key)?)?)
    }

    /// 将全部配置反序列化为具体类型
    fn unmarshal<T>(&self) -> ConfigResult<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(self.all_settings())?)
    }

    /// 序列化并设置配置值
    fn set_value<T>(&self, key: &str, value: &T) -> ConfigResult<()>
    where
        T: Serialize + ?Sized,
    {
        self.set(key, serde_json::to_value(value)?)
    }

    #[doc(hidden)]
    fn require(&self, key: &str) -> ConfigResult<Value> {
        self.get(key).ok_or_else(|| ConfigError::key_not_found(key))
    }
}

impl<M: ConfigManager + ?Sized> ConfigManagerExt for M {}
