//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置键无效: '{key}', 原因: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("配置键不存在: {key}")]
    KeyNotFound { key: String },

    #[error("配置类型转换失败: {key}, 期望 {expected}, 实际值 {actual}")]
    TypeConversionError {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("配置序列化失败: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("配置合并失败: {message}")]
    MergeError { message: String },
}

impl ConfigError {
    /// 创建键无效错误
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// 创建键不存在错误
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// 创建类型转换错误
    pub fn type_conversion(
        key: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeConversionError {
            key: key.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: {name}")]
    ComponentNotRegistered { name: String },

    #[error("组件类型不匹配: {name}, 期望 {expected}")]
    TypeMismatch { name: String, expected: String },
}

/// 服务提供者错误类型
///
/// `ApplicationMissing` 与 `ContainerMissing` 属于启动序列配置错误，
/// 启动流程遇到后必须立即中止。
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("应用实例为空")]
    ApplicationMissing,

    #[error("依赖注入容器为空")]
    ContainerMissing,

    #[error("服务提供者 '{provider}' 依赖的服务 '{dependency}' 没有任何提供者")]
    MissingDependency { provider: String, dependency: String },

    #[error("检测到服务提供者循环依赖: {cycle}")]
    CircularDependency { cycle: String },

    #[error("服务 '{service}' 被多个提供者声明: {first}, {second}")]
    DuplicateService {
        service: String,
        first: String,
        second: String,
    },

    #[error("服务提供者 '{provider}' 声明的服务 '{service}' 注册后未绑定到容器")]
    ServiceNotBound { provider: String, service: String },
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("服务提供者错误: {source}")]
    Provider {
        #[from]
        source: ProviderError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ProviderResult<T> = Result<T, ProviderError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
