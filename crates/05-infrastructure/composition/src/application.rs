//! 宿主应用实现

use config_impl::{resolve_config, SharedConfigManager};
use di_abstractions::{Application, Container};
use di_impl::ServiceContainer;
use infrastructure_common::{InfrastructureError, ProviderError};
use std::fmt;
use std::sync::Arc;

/// 宿主应用
///
/// 持有应用级依赖注入容器，供服务提供者在启动阶段使用
#[derive(Clone)]
pub struct HostApplication {
    container: Option<Arc<dyn Container>>,
}

impl HostApplication {
    /// 创建带有新容器的宿主应用
    pub fn new() -> Self {
        Self {
            container: Some(Arc::new(ServiceContainer::new())),
        }
    }

    /// 使用已有容器创建宿主应用
    pub fn with_container(container: Arc<dyn Container>) -> Self {
        Self {
            container: Some(container),
        }
    }

    /// 创建未配置容器的宿主应用
    pub fn without_container() -> Self {
        Self { container: None }
    }

    /// 解析已注册的配置管理器
    pub fn config(&self) -> Result<SharedConfigManager, InfrastructureError> {
        let container = self
            .container
            .as_ref()
            .ok_or(ProviderError::ContainerMissing)?;
        Ok(resolve_config(container.as_ref())?)
    }
}

impl Default for HostApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HostApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostApplication")
            .field(
                "bindings",
                &self.container.as_ref().map(|c| c.names()),
            )
            .finish()
    }
}

impl Application for HostApplication {
    fn container(&self) -> Option<Arc<dyn Container>> {
        self.container.clone()
    }
}
