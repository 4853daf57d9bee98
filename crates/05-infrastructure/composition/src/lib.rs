//! # 基础设施组合层
//!
//! 这个 crate 是基础设施的组合层，负责宿主应用、服务提供者的排序与启动以及日志初始化。
//!
//! ## 主要功能
//!
//! - **宿主应用**: 持有依赖注入容器并暴露给服务提供者
//! - **服务提供者启动**: 按依赖排序后依次注册、校验、启动
//! - **日志系统**: 基于 `tracing-subscriber` 的日志初始化
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use config_abstractions::ConfigManagerExt;
//! use infrastructure_composition::{HostApplication, ProviderBootstrapper};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = HostApplication::new();
//!
//!     // 注册并启动默认服务提供者
//!     ProviderBootstrapper::with_defaults().bootstrap(Some(&app))?;
//!
//!     // 使用配置管理器
//!     let config = app.config()?;
//!     config.set_value("app.name", "adsp")?;
//!     println!("应用名称: {}", config.get_string("app.name")?);
//!
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod bootstrapper;
pub mod logging;


// 重新导出主要类型
pub use application::HostApplication;
pub use bootstrapper::ProviderBootstrapper;
pub use logging::{init_logging, LoggingConfig};

// 重新导出错误类型
pub use infrastructure_common::InfrastructureError;
