//! Japanese analysis capabilities / 日语分析能力
//!
//! Every kuromoji-based capability has shipped under three namespaces over
//! the years: the NEologd build, the combined extension build, and the plain
//! ja build. The lists below probe them most-preferred first; the first one
//! installed wins.

use crate::config::AnalysisContext;
use crate::delegate::{DelegatingCharFilter, DelegatingTokenFilter, DelegatingTokenizer};
use crate::error::AnalysisError;
use crate::module::ModuleDirectory;

const TOKENIZER_CANDIDATES: &[&str] = &[
    "kuromoji_neologd::analysis::KuromojiTokenizerFactory",
    "analysis_extension::analysis::KuromojiTokenizerFactory",
    "analysis_ja::analysis::KuromojiTokenizerFactory",
];

const RELOADABLE_TOKENIZER_CANDIDATES: &[&str] = &[
    "kuromoji_neologd::analysis::ReloadableKuromojiTokenizerFactory",
    "analysis_extension::analysis::ReloadableKuromojiTokenizerFactory",
    "analysis_ja::analysis::ReloadableKuromojiTokenizerFactory",
];

const BASEFORM_CANDIDATES: &[&str] = &[
    "kuromoji_neologd::analysis::KuromojiBaseFormFilterFactory",
    "analysis_extension::analysis::KuromojiBaseFormFilterFactory",
    "analysis_ja::analysis::KuromojiBaseFormFilterFactory",
];

const PART_OF_SPEECH_CANDIDATES: &[&str] = &[
    "kuromoji_neologd::analysis::KuromojiPartOfSpeechFilterFactory",
    "analysis_extension::analysis::KuromojiPartOfSpeechFilterFactory",
    "analysis_ja::analysis::KuromojiPartOfSpeechFilterFactory",
];

const READINGFORM_CANDIDATES: &[&str] = &[
    "kuromoji_neologd::analysis::KuromojiReadingFormFilterFactory",
    "analysis_extension::analysis::KuromojiReadingFormFilterFactory",
    "analysis_ja::analysis::KuromojiReadingFormFilterFactory",
];

const STEMMER_CANDIDATES: &[&str] = &["analysis_extension::kuromoji::KuromojiKatakanaStemmerFactory"];

const ITERATION_MARK_CANDIDATES: &[&str] = &[
    "kuromoji_neologd::analysis::KuromojiIterationMarkCharFilterFactory",
    "analysis_extension::analysis::KuromojiIterationMarkCharFilterFactory",
    "analysis_ja::analysis::KuromojiIterationMarkCharFilterFactory",
];

pub fn tokenizer(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenizer, AnalysisError> {
    DelegatingTokenizer::resolve(directory, TOKENIZER_CANDIDATES, ctx)
}

pub fn reloadable_tokenizer(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenizer, AnalysisError> {
    DelegatingTokenizer::resolve(directory, RELOADABLE_TOKENIZER_CANDIDATES, ctx)
}

pub fn baseform_filter(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenFilter, AnalysisError> {
    DelegatingTokenFilter::resolve(directory, BASEFORM_CANDIDATES, ctx)
}

pub fn part_of_speech_filter(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenFilter, AnalysisError> {
    DelegatingTokenFilter::resolve(directory, PART_OF_SPEECH_CANDIDATES, ctx)
}

pub fn readingform_filter(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenFilter, AnalysisError> {
    DelegatingTokenFilter::resolve(directory, READINGFORM_CANDIDATES, ctx)
}

pub fn katakana_stemmer(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenFilter, AnalysisError> {
    DelegatingTokenFilter::resolve(directory, STEMMER_CANDIDATES, ctx)
}

pub fn iteration_mark_char_filter(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingCharFilter, AnalysisError> {
    DelegatingCharFilter::resolve(directory, ITERATION_MARK_CANDIDATES, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{TokenStream, Tokenizer};
    use crate::module::{ModuleInfo, StaticModule, StaticModuleRegistry, TokenizerFactory};
    use std::sync::Arc;

    struct MarkerTokenizer(&'static str);

    impl Tokenizer for MarkerTokenizer {
        fn tokenize(&self, _text: &str) -> TokenStream {
            Box::new(std::iter::once(crate::analysis::Token::new(self.0, 0, 0, 0)))
        }
    }

    struct MarkerTokenizerFactory(&'static str);

    impl TokenizerFactory for MarkerTokenizerFactory {
        fn create(&self, _ctx: &AnalysisContext) -> anyhow::Result<Box<dyn Tokenizer>> {
            Ok(Box::new(MarkerTokenizer(self.0)))
        }
    }

    #[test]
    fn test_neologd_build_is_preferred() {
        // The ja build loads first but neologd is the preferred candidate.
        let registry = StaticModuleRegistry::new()
            .register(
                ModuleInfo::new("analysis-ja", "1.0.0"),
                Arc::new(StaticModule::new().with_tokenizer("analysis_ja::analysis::KuromojiTokenizerFactory", MarkerTokenizerFactory("ja"))),
            )
            .register(
                ModuleInfo::new("analysis-kuromoji-neologd", "1.0.0"),
                Arc::new(
                    StaticModule::new()
                        .with_tokenizer("kuromoji_neologd::analysis::KuromojiTokenizerFactory", MarkerTokenizerFactory("neologd")),
                ),
            );
        let directory = ModuleDirectory::new(Arc::new(registry));
        let resolved = tokenizer(&directory, &AnalysisContext::default()).unwrap();
        let tokens: Vec<_> = resolved.tokenize("text").collect();
        assert_eq!(tokens[0].text, "neologd");
    }

    #[test]
    fn test_all_capabilities_fall_back_without_modules() {
        let directory = ModuleDirectory::new(Arc::new(StaticModuleRegistry::new()));
        let ctx = AnalysisContext::default();
        assert!(!tokenizer(&directory, &ctx).unwrap().is_delegating());
        assert!(!reloadable_tokenizer(&directory, &ctx).unwrap().is_delegating());
        assert!(!baseform_filter(&directory, &ctx).unwrap().is_delegating());
        assert!(!part_of_speech_filter(&directory, &ctx).unwrap().is_delegating());
        assert!(!readingform_filter(&directory, &ctx).unwrap().is_delegating());
        assert!(!katakana_stemmer(&directory, &ctx).unwrap().is_delegating());
        assert!(!iteration_mark_char_filter(&directory, &ctx).unwrap().is_delegating());
    }
}
