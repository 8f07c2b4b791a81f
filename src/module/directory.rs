//! Process-wide snapshot of installed extension modules / 已安装模块目录
//!
//! Populated from the host's [`ModuleRegistry`] exactly once, lazily, on
//! first need. Concurrent callers all observe the same completed result.
//! Once populated the directory never changes; the host module set is
//! replaced only by a full restart.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use super::{CapabilityFactory, ModuleRecord, ModuleRegistry};
use crate::privilege;

pub struct ModuleDirectory {
    registry: Arc<dyn ModuleRegistry>,
    modules: OnceCell<Vec<ModuleRecord>>,
}

impl ModuleDirectory {
    pub fn new(registry: Arc<dyn ModuleRegistry>) -> Self {
        Self {
            registry,
            modules: OnceCell::new(),
        }
    }

    /// Populate the directory from the host registry. Safe to call from many
    /// threads; only one population attempt runs and later calls are no-ops.
    /// A registry that cannot be read leaves the directory permanently empty:
    /// no capability will resolve, but capability construction never fails
    /// because of it. / 一次性加载模块列表
    pub fn ensure_loaded(&self) -> &[ModuleRecord] {
        self.modules.get_or_init(|| {
            tracing::debug!("Loading installed extension modules");
            match privilege::elevated(|| self.registry.installed_modules()) {
                Ok(records) => {
                    tracing::info!("Extension modules loaded: {}", records.len());
                    records
                }
                Err(e) => {
                    tracing::warn!("Module registry unreadable, no analysis capabilities will resolve: {:#}", e);
                    Vec::new()
                }
            }
        })
    }

    /// Scan modules in load order for the first one providing `identifier`.
    /// Type lookup is a restricted operation like registry access, so the
    /// whole scan runs inside the elevated scope. No caching here: callers
    /// resolve at most once per capability instance.
    /// 按加载顺序查找第一个提供该标识符的模块
    pub fn resolve_type(&self, identifier: &str) -> Option<(&ModuleRecord, &CapabilityFactory)> {
        let records = self.ensure_loaded();
        privilege::elevated(|| {
            for record in records {
                if let Some(factory) = record.module.resolve(identifier) {
                    return Some((record, factory));
                }
            }
            None
        })
    }
}
