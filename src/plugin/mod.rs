//! Host-facing plugin surface / 面向宿主的插件接口
//!
//! The host asks for the capability tables once at startup and invokes a
//! provider per configured analyzer component. Providers share one
//! [`ModuleDirectory`]; each invocation builds an independent delegating
//! wrapper that resolves once and then never changes.
//!
//! The capability name set is fixed here; candidate identifier lists live in
//! the per-language modules.

pub mod chinese;
pub mod japanese;
pub mod korean;
pub mod vietnamese;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::{CharFilter, TokenFilter, Tokenizer};
use crate::config::AnalysisContext;
use crate::error::AnalysisError;
use crate::module::{ModuleDirectory, ModuleRegistry};

pub type CharFilterProvider = Box<dyn Fn(&AnalysisContext) -> Result<Box<dyn CharFilter>, AnalysisError> + Send + Sync>;
pub type TokenFilterProvider = Box<dyn Fn(&AnalysisContext) -> Result<Box<dyn TokenFilter>, AnalysisError> + Send + Sync>;
pub type TokenizerProvider = Box<dyn Fn(&AnalysisContext) -> Result<Box<dyn Tokenizer>, AnalysisError> + Send + Sync>;

/// An index namespace managed by the bridge's host product. / 托管索引命名空间
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexNamespace {
    pub pattern: String,
    pub description: String,
}

impl IndexNamespace {
    fn new(pattern: &str, description: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            description: description.to_string(),
        }
    }
}

/// The analysis bridge plugin. / 分析桥接插件
pub struct AnalysisPlugin {
    directory: Arc<ModuleDirectory>,
}

macro_rules! provider {
    ($directory:expr, $build:path, $shape:ident) => {{
        let directory = Arc::clone($directory);
        Box::new(move |ctx: &AnalysisContext| {
            $build(&directory, ctx).map(|capability| Box::new(capability) as Box<dyn $shape>)
        })
    }};
}

impl AnalysisPlugin {
    pub fn new(registry: Arc<dyn ModuleRegistry>) -> Self {
        Self {
            directory: Arc::new(ModuleDirectory::new(registry)),
        }
    }

    /// The shared module directory, populated lazily on first resolution.
    pub fn directory(&self) -> &Arc<ModuleDirectory> {
        &self.directory
    }

    /// Char filter capabilities by configuration name. / 字符过滤器能力表
    pub fn char_filters(&self) -> HashMap<&'static str, CharFilterProvider> {
        let mut extra: HashMap<&'static str, CharFilterProvider> = HashMap::new();
        extra.insert("cjkv_japanese_iteration_mark", provider!(&self.directory, japanese::iteration_mark_char_filter, CharFilter));
        extra.insert(
            "cjkv_traditional_chinese_convert",
            provider!(&self.directory, chinese::traditional_convert_char_filter, CharFilter),
        );
        extra
    }

    /// Token filter capabilities by configuration name. / 词元过滤器能力表
    pub fn token_filters(&self) -> HashMap<&'static str, TokenFilterProvider> {
        let mut extra: HashMap<&'static str, TokenFilterProvider> = HashMap::new();
        extra.insert("cjkv_japanese_baseform", provider!(&self.directory, japanese::baseform_filter, TokenFilter));
        extra.insert("cjkv_japanese_part_of_speech", provider!(&self.directory, japanese::part_of_speech_filter, TokenFilter));
        extra.insert("cjkv_japanese_readingform", provider!(&self.directory, japanese::readingform_filter, TokenFilter));
        extra.insert("cjkv_japanese_stemmer", provider!(&self.directory, japanese::katakana_stemmer, TokenFilter));
        extra
    }

    /// Tokenizer capabilities by configuration name. / 分词器能力表
    pub fn tokenizers(&self) -> HashMap<&'static str, TokenizerProvider> {
        let mut extra: HashMap<&'static str, TokenizerProvider> = HashMap::new();
        extra.insert("cjkv_japanese_tokenizer", provider!(&self.directory, japanese::tokenizer, Tokenizer));
        extra.insert("cjkv_japanese_reloadable_tokenizer", provider!(&self.directory, japanese::reloadable_tokenizer, Tokenizer));
        extra.insert("cjkv_korean_tokenizer", provider!(&self.directory, korean::tokenizer, Tokenizer));
        extra.insert("cjkv_vietnamese_tokenizer", provider!(&self.directory, vietnamese::tokenizer, Tokenizer));
        extra.insert("cjkv_simplified_chinese_tokenizer", provider!(&self.directory, chinese::tokenizer, Tokenizer));
        extra
    }

    /// Index namespaces owned by the host product. Static wiring, consumed
    /// by the host's system-index machinery. / 系统索引命名空间
    pub fn managed_indices() -> Vec<IndexNamespace> {
        vec![
            IndexNamespace::new(".crawler.*", "Contains crawler data"),
            IndexNamespace::new(".suggest", "Contains suggest setting data"),
            IndexNamespace::new(".suggest_analyzer", "Contains suggest analyzer data"),
            IndexNamespace::new(".suggest_array.*", "Contains suggest setting data"),
            IndexNamespace::new(".suggest_badword.*", "Contains suggest badword data"),
            IndexNamespace::new(".suggest_elevate.*", "Contains suggest elevate data"),
            IndexNamespace::new(".cjkv_config.*", "Contains bridge configuration data"),
            IndexNamespace::new(".cjkv_user.*", "Contains user dictionary data"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::StaticModuleRegistry;

    #[test]
    fn test_capability_tables_are_complete() {
        let plugin = AnalysisPlugin::new(Arc::new(StaticModuleRegistry::new()));
        let char_filters = plugin.char_filters();
        let token_filters = plugin.token_filters();
        let tokenizers = plugin.tokenizers();

        assert_eq!(char_filters.len(), 2);
        assert_eq!(token_filters.len(), 4);
        assert_eq!(tokenizers.len(), 5);
        assert!(char_filters.contains_key("cjkv_japanese_iteration_mark"));
        assert!(token_filters.contains_key("cjkv_japanese_stemmer"));
        assert!(tokenizers.contains_key("cjkv_vietnamese_tokenizer"));
    }

    #[test]
    fn test_providers_build_fallback_capabilities_on_empty_host() {
        let plugin = AnalysisPlugin::new(Arc::new(StaticModuleRegistry::new()));
        let ctx = AnalysisContext::default();
        for (name, provider) in plugin.tokenizers() {
            let tokenizer = provider(&ctx).unwrap_or_else(|e| panic!("{} failed: {}", name, e));
            assert_eq!(tokenizer.tokenize("some text").count(), 0, "{}", name);
        }
    }

    #[test]
    fn test_managed_indices_are_static() {
        let indices = AnalysisPlugin::managed_indices();
        assert_eq!(indices.len(), 8);
        assert!(indices.iter().any(|ns| ns.pattern == ".crawler.*"));
    }
}
