//! Error types for capability resolution / 能力解析错误类型
//!
//! Absence of an optional module is never an error here. The only fatal
//! conditions are the ones that appear *after* a candidate identifier has
//! been confirmed resolvable: a factory of the wrong shape, or a factory
//! whose constructor fails.

use thiserror::Error;

/// The host's module registry could not be read at all.
///
/// Recovered internally: the module directory treats itself as permanently
/// empty and every capability falls back to identity behavior. Hosts never
/// see this as a hard failure of capability construction.
#[derive(Debug, Error)]
#[error("failed to read installed extension modules")]
pub struct ModuleAccessError(#[from] pub anyhow::Error);

/// Fatal errors raised while building a capability instance.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A candidate resolved but its factory failed to construct the
    /// implementation. Indicates a broken module installation, not absence,
    /// so it surfaces to whoever is building the analyzer. / 构造失败
    #[error("failed to construct '{identifier}' from module '{module}'")]
    Construction {
        identifier: String,
        module: String,
        #[source]
        source: anyhow::Error,
    },

    /// A candidate resolved to a factory of the wrong capability shape
    /// (e.g. a tokenizer where a char filter was expected). / 能力形状不匹配
    #[error("'{identifier}' in module '{module}' provides a {found}, expected a {expected}")]
    CapabilityShape {
        identifier: String,
        module: String,
        expected: &'static str,
        found: &'static str,
    },
}
