//! 配置服务提供者
//!
//! 启动时创建配置管理器并以 [`CONFIG_SERVICE_KEY`] 注册到应用容器。
//! 读取文件、绑定环境变量等具体配置工作由宿主应用完成。
//!
//! ```rust
//! use config_impl::{resolve_config, ConfigServiceProvider};
//! use di_abstractions::{Application, Container, ServiceProvider};
//! # use std::sync::Arc;
//! # struct App(Arc<dyn Container>);
//! # impl Application for App {
//! #     fn container(&self) -> Option<Arc<dyn Container>> { Some(Arc::clone(&self.0)) }
//! # }
//! # fn demo(app: &App) -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ConfigServiceProvider::new();
//! provider.register(Some(app))?;
//! provider.boot(Some(app))?;
//!
//! let config = resolve_config(app.0.as_ref())?;
//! config.set("app.name", "adsp".into())?;
//! # Ok(())
//! # }
//! ```

use crate::manager::new_config;
use config_abstractions::ConfigManager;
use di_abstractions::{Application, Container, ContainerExt, ServiceProvider};
use infrastructure_common::{DependencyError, ProviderError};
use std::sync::Arc;
use tracing::{debug, error, info};

/// 配置管理器在容器中的名称
pub const CONFIG_SERVICE_KEY: &str = "config";

/// 容器中保存的配置管理器句柄
pub type SharedConfigManager = Arc<dyn ConfigManager>;

/// 配置服务提供者
///
/// 无状态，注册完成后不持有容器或配置管理器的引用。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfigServiceProvider;

impl ConfigServiceProvider {
    /// 创建配置服务提供者
    pub fn new() -> Self {
        Self
    }
}

impl ServiceProvider for ConfigServiceProvider {
    fn name(&self) -> &'static str {
        "ConfigServiceProvider"
    }

    /// 创建新的配置管理器并绑定到 `"config"`，覆盖已有绑定
    fn register(&self, app: Option<&dyn Application>) -> Result<(), ProviderError> {
        let Some(app) = app else {
            error!("注册配置服务失败: 应用实例为空");
            return Err(ProviderError::ApplicationMissing);
        };
        let Some(container) = app.container() else {
            error!("注册配置服务失败: 依赖注入容器为空");
            return Err(ProviderError::ContainerMissing);
        };

        let manager: SharedConfigManager = Arc::new(new_config());
        container.instance(CONFIG_SERVICE_KEY, Arc::new(manager));

        info!("配置管理器已注册: {}", CONFIG_SERVICE_KEY);
        Ok(())
    }

    fn boot(&self, app: Option<&dyn Application>) -> Result<(), ProviderError> {
        if app.is_none() {
            error!("启动配置服务失败: 应用实例为空");
            return Err(ProviderError::ApplicationMissing);
        }
        debug!("配置服务提供者启动完成");
        Ok(())
    }

    fn requires(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn providers(&self) -> Vec<&'static str> {
        vec![CONFIG_SERVICE_KEY]
    }
}

/// 从容器解析配置管理器
pub fn resolve_config<C>(container: &C) -> Result<SharedConfigManager, DependencyError>
where
    C: Container + ?Sized,
{
    let manager = container.make_as::<SharedConfigManager>(CONFIG_SERVICE_KEY)?;
    Ok(Arc::clone(&manager))
}
