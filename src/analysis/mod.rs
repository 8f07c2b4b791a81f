//! Analysis capability contracts / 分析能力接口
//!
//! Three capability shapes, matching what an analyzer pipeline is built
//! from:
//! - [`CharFilter`] transforms raw character input before tokenization
//! - [`Tokenizer`] produces a token stream from text
//! - [`TokenFilter`] transforms a token stream
//!
//! The bridge never implements real linguistic analysis behind these traits;
//! concrete implementations live in extension modules. The bridge only wraps
//! them (or their absence) behind these stable interfaces.

use std::borrow::Cow;

pub mod empty;

pub use empty::EmptyTokenizer;

/// One analyzed token / 一个分析结果词元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text / 词元文本
    pub text: String,
    /// Byte offset of the token start in the source text / 起始字节偏移
    pub start_offset: usize,
    /// Byte offset one past the token end / 结束字节偏移
    pub end_offset: usize,
    /// Position in the token sequence, starting at 0 / 词元位置
    pub position: u32,
}

impl Token {
    pub fn new(text: impl Into<String>, start_offset: usize, end_offset: usize, position: u32) -> Self {
        Self {
            text: text.into(),
            start_offset,
            end_offset,
            position,
        }
    }
}

/// Stream of tokens produced by a tokenizer or filter chain. / 词元流
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Character-stream transformer / 字符流转换器
pub trait CharFilter: Send + Sync {
    /// Transform the input text. Implementations that have nothing to change
    /// must return the input unmodified.
    fn apply<'a>(&self, input: Cow<'a, str>) -> Cow<'a, str>;
}

/// Token-stream transformer / 词元流转换器
pub trait TokenFilter: Send + Sync {
    fn apply(&self, input: TokenStream) -> TokenStream;
}

/// Token-source producer / 词元来源
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> TokenStream;
}
