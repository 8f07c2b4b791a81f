//! Chinese analysis capabilities / 中文分析能力

use crate::config::AnalysisContext;
use crate::delegate::{DelegatingCharFilter, DelegatingTokenizer};
use crate::error::AnalysisError;
use crate::module::ModuleDirectory;

// smartcn is preferred when installed; the bundled jieba module is the
// second candidate so a bare installation still gets real segmentation
// once it registers the bundled module.
const TOKENIZER_CANDIDATES: &[&str] = &[
    "analysis_smartcn::analysis::SmartcnTokenizerFactory",
    "analysis_jieba::analysis::JiebaTokenizerFactory",
];

const ST_CONVERT_CANDIDATES: &[&str] = &["analysis_stconvert::analysis::STConvertCharFilterFactory"];

pub fn tokenizer(directory: &ModuleDirectory, ctx: &AnalysisContext) -> Result<DelegatingTokenizer, AnalysisError> {
    DelegatingTokenizer::resolve(directory, TOKENIZER_CANDIDATES, ctx)
}

pub fn traditional_convert_char_filter(
    directory: &ModuleDirectory,
    ctx: &AnalysisContext,
) -> Result<DelegatingCharFilter, AnalysisError> {
    DelegatingCharFilter::resolve(directory, ST_CONVERT_CANDIDATES, ctx)
}
