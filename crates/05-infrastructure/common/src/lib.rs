//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn ADSP 平台基础设施层的公共错误类型和配置类型。
//!
//! ## 核心类型
//!
//! - [`ConfigError`] - 配置错误
//! - [`DependencyError`] - 依赖注入错误
//! - [`ProviderError`] - 服务提供者错误
//! - [`InfrastructureError`] - 基础设施启动错误
//! - [`ConfigSection`] - 配置节

pub mod configuration;
pub mod errors;

pub use configuration::*;
pub use errors::*;
