//! # 依赖注入具体实现
//!
//! 提供以名称为键的单例容器实现

use di_abstractions::{Container, SharedInstance};
use infrastructure_common::DependencyError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// 具体的依赖注入容器实现
#[derive(Default)]
pub struct ServiceContainer {
    /// 名称到单例实例的映射
    instances: RwLock<HashMap<String, SharedInstance>>,
}

impl ServiceContainer {
    /// 创建新的容器
    pub fn new() -> Self {
        Self::default()
    }

    /// 已绑定的实例数量
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }
}

impl fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("names", &self.names())
            .finish()
    }
}

impl Container for ServiceContainer {
    fn instance(&self, name: &str, instance: SharedInstance) {
        let previous = self.instances.write().insert(name.to_string(), instance);
        if previous.is_some() {
            warn!("覆盖已有绑定: {}", name);
        } else {
            info!("注册单例实例: {}", name);
        }
    }

    fn make(&self, name: &str) -> Result<SharedInstance, DependencyError> {
        debug!("解析实例: {}", name);
        self.instances
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| DependencyError::ComponentNotRegistered {
                name: name.to_string(),
            })
    }

    fn bound(&self, name: &str) -> bool {
        self.instances.read().contains_key(name)
    }

    fn forget(&self, name: &str) -> bool {
        let removed = self.instances.write().remove(name).is_some();
        if removed {
            info!("移除绑定: {}", name);
        }
        removed
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.instances.read().keys().cloned().collect();
        names.sort();
        names
    }
}
