//! Delegating capability wrappers / 委托式能力包装
//!
//! Each wrapper resolves its candidate list exactly once, at construction,
//! and then either forwards every call to the resolved implementation or
//! performs the capability's identity fallback forever. There is no retry
//! and no re-resolution: a wrapper that came up empty stays empty for its
//! whole lifetime even if the module set could somehow change.
//!
//! Absence is routine. A candidate that resolves and then cannot be
//! constructed is not: that is a broken module installation, and
//! construction fails loudly instead of degrading.

pub mod char_filter;
pub mod token_filter;
pub mod tokenizer;

pub use char_filter::DelegatingCharFilter;
pub use token_filter::DelegatingTokenFilter;
pub use tokenizer::DelegatingTokenizer;
