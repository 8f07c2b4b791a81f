//! Bundled extension modules / 内置扩展模块
//!
//! Modules shipped inside this repository. Hosts that want them add the
//! records to whatever registry they inject; nothing here is loaded unless
//! the host registers it.

pub mod jieba;

use crate::module::StaticModuleRegistry;

/// Register all bundled modules (call order = load order). / 注册所有内置模块
pub fn register_all(registry: StaticModuleRegistry) -> StaticModuleRegistry {
    registry.register(jieba::info(), std::sync::Arc::new(jieba::module()))
}
