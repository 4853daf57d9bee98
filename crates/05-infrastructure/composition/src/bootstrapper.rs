//! 服务提供者启动器

use config_impl::ConfigServiceProvider;
use di_abstractions::{Application, ProviderMetadata, ServiceProvider};
use infrastructure_common::{InfrastructureError, ProviderError};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, error, info};

/// 服务提供者启动器
///
/// 负责协调服务提供者的注册顺序和启动过程：
/// 排序、注册、校验绑定、启动。任一阶段出错即中止。
#[derive(Default)]
pub struct ProviderBootstrapper {
    providers: Vec<Box<dyn ServiceProvider>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    Visiting,
    Done,
}

impl ProviderBootstrapper {
    /// 创建空的启动器
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含基础设施默认提供者的启动器
    pub fn with_defaults() -> Self {
        Self::new().add_provider(ConfigServiceProvider::new())
    }

    /// 添加服务提供者
    pub fn add_provider<P>(mut self, provider: P) -> Self
    where
        P: ServiceProvider + 'static,
    {
        self.providers.push(Box::new(provider));
        self
    }

    /// 添加已装箱的服务提供者
    pub fn add_boxed_provider(mut self, provider: Box<dyn ServiceProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// 已添加的服务提供者数量
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// 是否未添加任何服务提供者
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// 启动所有服务提供者，返回实际执行顺序的元数据
    pub fn bootstrap(
        &self,
        app: Option<&dyn Application>,
    ) -> Result<Vec<ProviderMetadata>, InfrastructureError> {
        info!("开始启动服务提供者, 共 {} 个", self.providers.len());

        let order = self.resolve_order().map_err(|e| {
            error!("服务提供者排序失败: {}", e);
            e
        })?;

        for &index in &order {
            let provider = &self.providers[index];
            debug!("注册服务提供者: {}", provider.name());
            provider.register(app).map_err(|e| {
                error!("服务提供者 {} 注册失败: {}", provider.name(), e);
                e
            })?;
        }

        self.verify_bindings(app, &order)?;

        for &index in &order {
            let provider = &self.providers[index];
            debug!("启动服务提供者: {}", provider.name());
            provider.boot(app).map_err(|e| {
                error!("服务提供者 {} 启动失败: {}", provider.name(), e);
                e
            })?;
        }

        info!("服务提供者启动完成");
        Ok(order
            .iter()
            .map(|&index| ProviderMetadata::from_provider(self.providers[index].as_ref()))
            .collect())
    }

    /// 计算注册顺序
    ///
    /// 依赖先于依赖方，其余保持添加顺序。
    fn resolve_order(&self) -> Result<Vec<usize>, ProviderError> {
        let owners = self.service_owners()?;
        let mut states = vec![Visit::Pending; self.providers.len()];
        let mut path = Vec::new();
        let mut order = Vec::with_capacity(self.providers.len());

        for index in 0..self.providers.len() {
            self.visit(index, &owners, &mut states, &mut path, &mut order)?;
        }
        Ok(order)
    }

    fn service_owners(&self) -> Result<HashMap<&'static str, usize>, ProviderError> {
        let mut owners: HashMap<&'static str, usize> = HashMap::new();
        for (index, provider) in self.providers.iter().enumerate() {
            for service in provider.providers() {
                match owners.get(service) {
                    Some(&owner) if owner != index => {
                        return Err(ProviderError::DuplicateService {
                            service: service.to_string(),
                            first: self.providers[owner].name().to_string(),
                            second: provider.name().to_string(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(service, index);
                    }
                }
            }
        }
        Ok(owners)
    }

    fn visit(
        &self,
        index: usize,
        owners: &HashMap<&'static str, usize>,
        states: &mut [Visit],
        path: &mut Vec<usize>,
        order: &mut Vec<usize>,
    ) -> Result<(), ProviderError> {
        match states[index] {
            Visit::Done => return Ok(()),
            Visit::Visiting => {
                let start = path.iter().position(|&i| i == index).unwrap_or(0);
                let cycle = path[start..]
                    .iter()
                    .chain(std::iter::once(&index))
                    .map(|&i| self.providers[i].name())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                return Err(ProviderError::CircularDependency { cycle });
            }
            Visit::Pending => {}
        }

        states[index] = Visit::Visiting;
        path.push(index);

        let provider = &self.providers[index];
        for dependency in provider.requires() {
            let Some(&owner) = owners.get(dependency) else {
                return Err(ProviderError::MissingDependency {
                    provider: provider.name().to_string(),
                    dependency: dependency.to_string(),
                });
            };
            self.visit(owner, owners, states, path, order)?;
        }

        path.pop();
        states[index] = Visit::Done;
        order.push(index);
        Ok(())
    }

    /// 校验每个声明的服务都已绑定到容器
    fn verify_bindings(
        &self,
        app: Option<&dyn Application>,
        order: &[usize],
    ) -> Result<(), ProviderError> {
        let Some(container) = app.and_then(|app| app.container()) else {
            return Ok(());
        };

        for &index in order {
            let provider = &self.providers[index];
            for service in provider.providers() {
                if !container.bound(service) {
                    error!("服务 {} 未绑定, 提供者: {}", service, provider.name());
                    return Err(ProviderError::ServiceNotBound {
                        provider: provider.name().to_string(),
                        service: service.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ProviderBootstrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderBootstrapper")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
