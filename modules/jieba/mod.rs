//! Jieba-based simplified Chinese tokenizer module / 基于 jieba 的中文分词模块
//!
//! A complete extension module, published under
//! `analysis_jieba::analysis::JiebaTokenizerFactory`. It exists so a bare
//! installation with no external analysis module still gets real Chinese
//! segmentation through the normal discovery path.

use anyhow::Result;
use jieba_rs::Jieba;
use once_cell::sync::Lazy;

use crate::analysis::{Token, TokenStream, Tokenizer};
use crate::config::AnalysisContext;
use crate::module::{ModuleInfo, StaticModule, TokenizerFactory};

/// Identifier the module publishes its tokenizer factory under.
pub const TOKENIZER_IDENTIFIER: &str = "analysis_jieba::analysis::JiebaTokenizerFactory";

/// Global jieba instance, shared by all tokenizer instances. The dictionary
/// is immutable after startup so sharing is safe. / 全局 jieba 分词器实例
static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

pub fn info() -> ModuleInfo {
    ModuleInfo::new("analysis-jieba", env!("CARGO_PKG_VERSION"))
}

pub fn module() -> StaticModule {
    StaticModule::new().with_tokenizer(TOKENIZER_IDENTIFIER, JiebaTokenizerFactory)
}

pub struct JiebaTokenizerFactory;

impl TokenizerFactory for JiebaTokenizerFactory {
    fn create(&self, ctx: &AnalysisContext) -> Result<Box<dyn Tokenizer>> {
        let hmm = ctx.settings.get("hmm").and_then(|v| v.as_bool()).unwrap_or(true);
        if let Some(mode) = ctx.settings.get("mode").and_then(|v| v.as_str()) {
            if mode != "default" {
                anyhow::bail!("unsupported jieba mode: {}", mode);
            }
        }
        Ok(Box::new(JiebaTokenizer { hmm }))
    }
}

/// Tokenizer over jieba's cut segmentation. Segments are contiguous and
/// cover the whole input, so byte offsets are tracked cumulatively.
pub struct JiebaTokenizer {
    hmm: bool,
}

impl Tokenizer for JiebaTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut offset = 0;
        let mut position = 0;
        for word in JIEBA.cut(text, self.hmm) {
            let end = offset + word.len();
            // Whitespace and empty segments are not tokens / 跳过空白片段
            if !word.trim().is_empty() {
                tokens.push(Token::new(word.to_lowercase(), offset, end, position));
                position += 1;
            }
            offset = end;
        }
        Box::new(tokens.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> JiebaTokenizer {
        JiebaTokenizer { hmm: true }
    }

    #[test]
    fn test_tokenize_chinese() {
        let tokens: Vec<_> = tokenizer().tokenize("中华人民共和国").collect();
        assert!(!tokens.is_empty());
        // 分词结果必须覆盖整个输入
        assert_eq!(tokens.first().unwrap().start_offset, 0);
        assert_eq!(tokens.last().unwrap().end_offset, "中华人民共和国".len());
    }

    #[test]
    fn test_offsets_are_contiguous_and_positions_increase() {
        let text = "今天天气很好 we go outside";
        let tokens: Vec<_> = tokenizer().tokenize(text).collect();
        for pair in tokens.windows(2) {
            assert!(pair[0].end_offset <= pair[1].start_offset);
            assert_eq!(pair[0].position + 1, pair[1].position);
        }
        for token in &tokens {
            assert_eq!(&text.to_lowercase()[token.start_offset..token.end_offset], token.text);
        }
    }

    #[test]
    fn test_whitespace_is_dropped() {
        let tokens: Vec<_> = tokenizer().tokenize("你好 世界").collect();
        assert!(tokens.iter().all(|t| !t.text.trim().is_empty()));
    }

    #[test]
    fn test_mixed_text_is_lowercased() {
        let tokens: Vec<_> = tokenizer().tokenize("测试文件 Test.TXT").collect();
        assert!(tokens.iter().any(|t| t.text.contains("test") || t.text.contains("txt")));
    }

    #[test]
    fn test_factory_rejects_unknown_mode() {
        let ctx = AnalysisContext {
            settings: serde_json::json!({"mode": "search"}),
            ..Default::default()
        };
        assert!(JiebaTokenizerFactory.create(&ctx).is_err());
    }

    #[test]
    fn test_module_publishes_tokenizer_identifier() {
        use crate::module::ExtensionModule;
        assert!(module().resolve(TOKENIZER_IDENTIFIER).is_some());
    }
}
