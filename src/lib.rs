pub mod analysis;
pub mod config;
pub mod delegate;
pub mod error;
pub mod module;
pub mod plugin;
pub mod privilege;

// Bundled extension modules (point to project root modules via path attribute) / 内置模块
#[path = "../modules/mod.rs"]
pub mod modules;

pub use analysis::{CharFilter, Token, TokenFilter, TokenStream, Tokenizer};
pub use config::{AnalysisContext, Environment, IndexSettings};
pub use error::{AnalysisError, ModuleAccessError};
pub use module::{ModuleDirectory, ModuleRegistry};
pub use plugin::AnalysisPlugin;

// Register all bundled extension modules into a static registry / 注册所有内置模块
pub fn register_bundled_modules(registry: module::StaticModuleRegistry) -> module::StaticModuleRegistry {
    modules::register_all(registry)
}

#[cfg(test)]
mod tests {
    //! End-to-end behavior of the plugin surface, from host registry to
    //! analyzer chain output.

    use super::*;
    use std::borrow::Cow;
    use std::sync::Arc;

    fn init_logging() {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    }

    /// Run text through char filter -> tokenizer -> token filter, the way an
    /// analyzer pipeline would.
    fn analyze(plugin: &AnalysisPlugin, text: &str) -> Vec<Token> {
        let ctx = AnalysisContext::default();
        let char_filters = plugin.char_filters();
        let token_filters = plugin.token_filters();
        let tokenizers = plugin.tokenizers();

        let iteration_mark = char_filters["cjkv_japanese_iteration_mark"](&ctx).unwrap();
        let tokenizer = tokenizers["cjkv_japanese_tokenizer"](&ctx).unwrap();
        let stemmer = token_filters["cjkv_japanese_stemmer"](&ctx).unwrap();

        let filtered = iteration_mark.apply(Cow::Borrowed(text));
        stemmer.apply(tokenizer.tokenize(&filtered)).collect()
    }

    #[test]
    fn test_analyzer_chain_on_host_without_japanese_modules() {
        init_logging();
        let plugin = AnalysisPlugin::new(Arc::new(module::StaticModuleRegistry::new()));
        // No Japanese module installed: the whole chain degrades to an
        // analyzer that simply tokenizes nothing, not an error.
        let tokens = analyze(&plugin, "寿司が美味しかった");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_chinese_tokenizer_with_bundled_module() {
        init_logging();
        let registry = register_bundled_modules(module::StaticModuleRegistry::new());
        let plugin = AnalysisPlugin::new(Arc::new(registry));
        let ctx = AnalysisContext::default();

        let tokenizer = plugin.tokenizers()["cjkv_simplified_chinese_tokenizer"](&ctx).unwrap();
        let tokens: Vec<_> = tokenizer.tokenize("今天天气很好").collect();
        assert!(!tokens.is_empty());

        // The Japanese tokenizer is still absent and still harmless.
        let japanese = plugin.tokenizers()["cjkv_japanese_tokenizer"](&ctx).unwrap();
        assert_eq!(japanese.tokenize("寿司が美味しかった").count(), 0);
    }

    #[test]
    fn test_char_filter_identity_on_empty_host() {
        let plugin = AnalysisPlugin::new(Arc::new(module::StaticModuleRegistry::new()));
        let ctx = AnalysisContext::default();
        let filter = plugin.char_filters()["cjkv_traditional_chinese_convert"](&ctx).unwrap();
        assert_eq!(filter.apply(Cow::Borrowed("hello")), "hello");
    }
}
