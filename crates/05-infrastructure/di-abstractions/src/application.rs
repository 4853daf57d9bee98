//! 宿主应用抽象接口

use crate::container::Container;
use std::sync::Arc;

/// 宿主应用 trait
///
/// 服务提供者通过它取得应用的依赖注入容器。
pub trait Application: Send + Sync {
    /// 获取依赖注入容器，未配置容器时返回 `None`
    fn container(&self) -> Option<Arc<dyn Container>>;
}
