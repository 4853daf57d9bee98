//! 服务提供者抽象接口

use crate::application::Application;
use infrastructure_common::ProviderError;
use serde::Serialize;

/// 服务提供者 trait
///
/// 启动阶段由宿主框架调用：先对全部提供者调用 [`register`](Self::register)，
/// 再依次调用 [`boot`](Self::boot)。两个阶段返回的错误都表示启动序列配置错误，
/// 宿主必须中止启动。
pub trait ServiceProvider: Send + Sync {
    /// 提供者名称，用于日志和依赖报告
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 向应用容器注册服务
    fn register(&self, app: Option<&dyn Application>) -> Result<(), ProviderError>;

    /// 所有提供者注册完成后调用
    fn boot(&self, app: Option<&dyn Application>) -> Result<(), ProviderError>;

    /// 本提供者依赖的服务名称，这些服务必须先注册
    fn requires(&self) -> Vec<&'static str>;

    /// 本提供者向容器注册的服务名称
    fn providers(&self) -> Vec<&'static str>;
}

/// 服务提供者元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires: Vec<String>,
    pub provides: Vec<String>,
}

impl ProviderMetadata {
    /// 从提供者创建元数据
    pub fn from_provider<P: ServiceProvider + ?Sized>(provider: &P) -> Self {
        Self {
            name: provider.name().to_string(),
            requires: provider.requires().into_iter().map(str::to_string).collect(),
            provides: provider.providers().into_iter().map(str::to_string).collect(),
        }
    }
}
