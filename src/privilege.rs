//! Scoped privilege elevation / 权限提升作用域
//!
//! Reading the host's module registry and instantiating dynamically resolved
//! implementations are restricted operations in some host security models.
//! Both run inside [`elevated`], the single choke point for that access. A
//! host with a real permission model installs a [`PrivilegeBroker`] once at
//! startup; without one the scope is a no-op.

use once_cell::sync::OnceCell;

/// Host hook marking entry and exit of a restricted-operation scope.
pub trait PrivilegeBroker: Send + Sync {
    fn enter(&self);
    fn exit(&self);
}

static BROKER: OnceCell<Box<dyn PrivilegeBroker>> = OnceCell::new();

/// Install the process-wide broker. Returns false if one is already
/// installed (first installation wins). / 安装全局权限代理
pub fn install(broker: Box<dyn PrivilegeBroker>) -> bool {
    BROKER.set(broker).is_ok()
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        if let Some(broker) = BROKER.get() {
            broker.exit();
        }
    }
}

/// Run `f` inside the elevated-permission scope. The scope is exited even if
/// `f` panics. / 在提升权限的作用域内执行
pub fn elevated<R>(f: impl FnOnce() -> R) -> R {
    if let Some(broker) = BROKER.get() {
        broker.enter();
    }
    let _guard = ScopeGuard;
    f()
}
