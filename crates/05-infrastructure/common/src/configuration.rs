//! 配置相关的基础类型定义

use crate::errors::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 配置节
///
/// 某个配置路径下的一层键值快照，键已规范化为小写
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSection {
    /// 配置节路径
    pub path: String,
    /// 配置数据
    pub data: Map<String, Value>,
}

impl ConfigSection {
    /// 创建新的配置节
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: Map::new(),
        }
    }

    /// 从 JSON 对象创建配置节
    pub fn from_map(path: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// 插入配置项
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    /// 获取配置项
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// 配置项的键
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 绑定到具体类型
    pub fn bind<T>(&self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(Value::Object(self.data.clone()))
            .map_err(|source| ConfigError::SerializationError { source })
    }
}
