//! # Configuration Implementation
//!
//! 配置管理的具体实现以及向依赖注入容器注册配置管理器的服务提供者。
//!
//! ## 主要组件
//!
//! - [`DefaultConfigManager`] - 内存配置管理器
//! - [`ConfigServiceProvider`] - 配置服务提供者，注册 `"config"` 服务
//! - [`resolve_config`] - 从容器解析配置管理器

pub mod manager;
pub mod provider;

pub use manager::*;
pub use provider::*;
