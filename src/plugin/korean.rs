//! Korean analysis capabilities / 韩语分析能力

use crate::config::AnalysisContext;
use crate::delegate::DelegatingTokenizer;
use crate::error::AnalysisError;
use crate::module::ModuleDirectory;

// nori is the maintained build; seunjeon is probed for older installations.
const TOKENIZER_CANDIDATES: &[&str] = &[
    "analysis_nori::analysis::NoriTokenizerFactory",
    "analysis_seunjeon::analysis::SeunjeonTokenizerFactory",
];

pub fn tokenizer(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenizer, AnalysisError> {
    DelegatingTokenizer::resolve(directory, TOKENIZER_CANDIDATES, ctx)
}
