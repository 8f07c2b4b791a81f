//! Vietnamese analysis capabilities / 越南语分析能力

use crate::config::AnalysisContext;
use crate::delegate::DelegatingTokenizer;
use crate::error::AnalysisError;
use crate::module::ModuleDirectory;

const TOKENIZER_CANDIDATES: &[&str] = &["analysis_vi::analysis::VietnameseTokenizerFactory"];

pub fn tokenizer(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenizer, AnalysisError> {
    DelegatingTokenizer::resolve(directory, TOKENIZER_CANDIDATES, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Tokenizer;
    use crate::module::StaticModuleRegistry;
    use std::sync::Arc;

    #[test]
    fn test_falls_back_without_modules() {
        let directory = ModuleDirectory::new(Arc::new(StaticModuleRegistry::new()));
        let resolved = tokenizer(&directory, &AnalysisContext::default()).unwrap();
        assert_eq!(resolved.tokenize("xin chào thế giới").count(), 0);
    }
}
