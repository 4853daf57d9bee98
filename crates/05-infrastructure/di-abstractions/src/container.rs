//! 依赖注入容器抽象接口
//!
//! 以字符串名称为键的单例注册表

use infrastructure_common::DependencyError;
use std::any::Any;
use std::sync::Arc;

/// 容器中保存的共享实例
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// 依赖注入容器 trait
///
/// 容器独占条目的所有权，调用方只能拿到 `Arc` 克隆。
pub trait Container: Send + Sync {
    /// 将名称绑定到单例实例，已有绑定会被覆盖
    fn instance(&self, name: &str, instance: SharedInstance);

    /// 按名称解析实例
    fn make(&self, name: &str) -> Result<SharedInstance, DependencyError>;

    /// 检查名称是否已绑定
    fn bound(&self, name: &str) -> bool;

    /// 移除绑定，返回之前是否存在
    fn forget(&self, name: &str) -> bool;

    /// 获取所有已绑定的名称（已排序）
    fn names(&self) -> Vec<String>;
}

/// 类型化解析扩展
pub trait ContainerExt: Container {
    /// 按名称解析并向下转换为具体类型
    fn make_as<T>(&self, name: &str) -> Result<Arc<T>, DependencyError>
    where
        T: Any + Send + Sync,
    {
        self.make(name)?
            .downcast::<T>()
            .map_err(|_| DependencyError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>().to_string(),
            })
    }
}

impl<C: Container + ?Sized> ContainerExt for C {}
