//! Extension module model / 扩展模块模型
//!
//! An extension module is a separately installed unit that may supply
//! concrete capability implementations, published under fully-qualified
//! identifiers. The bridge only ever asks a module one question: "do you
//! provide a factory named X". The host answers "which modules are
//! installed" through [`ModuleRegistry`], the single contract the bridge
//! requires from its host.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::{CharFilter, TokenFilter, Tokenizer};
use crate::config::AnalysisContext;
use crate::error::ModuleAccessError;

pub mod directory;
pub mod resolver;

pub use directory::ModuleDirectory;
pub use resolver::{CandidateResolver, Resolved};

/// Factory for char filter implementations / 字符过滤器工厂
pub trait CharFilterFactory: Send + Sync {
    fn create(&self, ctx: &AnalysisContext) -> Result<Box<dyn CharFilter>>;
}

/// Factory for token filter implementations / 词元过滤器工厂
pub trait TokenFilterFactory: Send + Sync {
    fn create(&self, ctx: &AnalysisContext) -> Result<Box<dyn TokenFilter>>;
}

/// Factory for tokenizer implementations / 分词器工厂
pub trait TokenizerFactory: Send + Sync {
    fn create(&self, ctx: &AnalysisContext) -> Result<Box<dyn Tokenizer>>;
}

/// A capability factory published by a module, tagged with its shape.
/// 模块发布的能力工厂（携带形状标签）
pub enum CapabilityFactory {
    CharFilter(Box<dyn CharFilterFactory>),
    TokenFilter(Box<dyn TokenFilterFactory>),
    Tokenizer(Box<dyn TokenizerFactory>),
}

impl CapabilityFactory {
    /// Shape name used in logs and shape-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            CapabilityFactory::CharFilter(_) => "char filter",
            CapabilityFactory::TokenFilter(_) => "token filter",
            CapabilityFactory::Tokenizer(_) => "tokenizer",
        }
    }
}

/// One installed extension module. / 一个已安装的扩展模块
pub trait ExtensionModule: Send + Sync {
    /// Resolve a fully-qualified implementation identifier to the factory
    /// publishing it, or None if this module does not provide it. No fuzzy
    /// matching: the identifier either matches literally or not at all.
    fn resolve(&self, identifier: &str) -> Option<&CapabilityFactory>;
}

/// Module metadata, for diagnostics. / 模块元信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl ModuleInfo {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

/// One entry of the installed-module set. / 模块记录
#[derive(Clone)]
pub struct ModuleRecord {
    pub info: ModuleInfo,
    pub module: Arc<dyn ExtensionModule>,
}

impl ModuleRecord {
    pub fn new(info: ModuleInfo, module: Arc<dyn ExtensionModule>) -> Self {
        Self { info, module }
    }
}

/// Read-only view of the host's installed extension modules, in load order.
/// Load order is precedence order for resolution within one candidate.
/// 宿主已安装模块的只读视图（按加载顺序）
pub trait ModuleRegistry: Send + Sync {
    fn installed_modules(&self) -> Result<Vec<ModuleRecord>, ModuleAccessError>;
}

/// In-memory module backed by a registration table, for hosts that wire
/// their modules statically and for bundled modules. / 静态注册的内存模块
#[derive(Default)]
pub struct StaticModule {
    factories: HashMap<String, CapabilityFactory>,
}

impl StaticModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_char_filter(mut self, identifier: &str, factory: impl CharFilterFactory + 'static) -> Self {
        self.factories
            .insert(identifier.to_string(), CapabilityFactory::CharFilter(Box::new(factory)));
        self
    }

    pub fn with_token_filter(mut self, identifier: &str, factory: impl TokenFilterFactory + 'static) -> Self {
        self.factories
            .insert(identifier.to_string(), CapabilityFactory::TokenFilter(Box::new(factory)));
        self
    }

    pub fn with_tokenizer(mut self, identifier: &str, factory: impl TokenizerFactory + 'static) -> Self {
        self.factories
            .insert(identifier.to_string(), CapabilityFactory::Tokenizer(Box::new(factory)));
        self
    }
}

impl ExtensionModule for StaticModule {
    fn resolve(&self, identifier: &str) -> Option<&CapabilityFactory> {
        self.factories.get(identifier)
    }
}

/// In-memory registry over a fixed, ordered module list. / 静态模块注册表
#[derive(Default)]
pub struct StaticModuleRegistry {
    records: Vec<ModuleRecord>,
}

impl StaticModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module. Registration order becomes load order. / 注册模块
    pub fn register(mut self, info: ModuleInfo, module: Arc<dyn ExtensionModule>) -> Self {
        tracing::info!("Extension module registered: {} {}", info.name, info.version);
        self.records.push(ModuleRecord::new(info, module));
        self
    }
}

impl ModuleRegistry for StaticModuleRegistry {
    fn installed_modules(&self) -> Result<Vec<ModuleRecord>, ModuleAccessError> {
        Ok(self.records.clone())
    }
}
