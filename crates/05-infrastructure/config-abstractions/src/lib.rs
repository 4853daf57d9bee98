//! # Configuration Abstractions
//!
//! 配置管理抽象层，定义配置管理器的能力约定。
//!
//! ## 核心接口
//!
//! - [`ConfigManager`] - 配置管理器接口（按点分路径读写 JSON 值）
//! - [`ConfigManagerExt`] - 类型化读写扩展，对任意 `ConfigManager` 自动可用

pub mod manager;

pub use manager::*;
