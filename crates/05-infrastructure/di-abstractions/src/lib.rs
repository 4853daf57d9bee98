//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义容器、宿主应用和服务提供者的核心接口。
//!
//! ## 核心接口
//!
//! - [`Container`] - 以名称为键的单例容器接口
//! - [`Application`] - 宿主应用接口，负责暴露容器
//! - [`ServiceProvider`] - 服务提供者接口（注册、启动、依赖声明）

pub mod application;
pub mod container;
pub mod provider;

pub use application::*;
pub use container::*;
pub use provider::*;
