//! Fallback primitives used when no implementation resolves / 兜底实现
//!
//! Referencing an unavailable optional tokenizer must yield "nothing
//! tokenized", not an error, so index and query construction keep working on
//! installations without the matching module. The filter shapes need no
//! stand-in type: their fallback is returning the input unchanged.

use super::{TokenStream, Tokenizer};

/// Tokenizer that yields zero tokens for any input. / 空分词器
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyTokenizer;

impl Tokenizer for EmptyTokenizer {
    fn tokenize(&self, _text: &str) -> TokenStream {
        Box::new(std::iter::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokenizer_yields_nothing() {
        let tokens: Vec<_> = EmptyTokenizer.tokenize("国境の長いトンネルを抜けると雪国であった").collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_empty_tokenizer_is_stable_across_calls() {
        let tokenizer = EmptyTokenizer;
        assert_eq!(tokenizer.tokenize("hello").count(), 0);
        assert_eq!(tokenizer.tokenize("hello").count(), 0);
    }
}
