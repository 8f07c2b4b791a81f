//! Delegating tokenizer / 委托分词器

use crate::analysis::{EmptyTokenizer, TokenStream, Tokenizer};
use crate::config::AnalysisContext;
use crate::error::AnalysisError;
use crate::module::{CandidateResolver, CapabilityFactory, ModuleDirectory};
use crate::privilege;

/// Tokenizer wrapper around a possibly-absent resolved implementation.
/// With no delegate it produces zero tokens, so an analyzer referencing an
/// uninstalled optional tokenizer silently tokenizes nothing rather than
/// breaking index or query construction. / 无实现时产生空词元流
pub struct DelegatingTokenizer {
    delegate: Option<Box<dyn Tokenizer>>,
    fallback: EmptyTokenizer,
}

impl DelegatingTokenizer {
    /// Resolve `candidates` against the installed modules and construct the
    /// first match with `ctx`. No match is not an error; a match that fails
    /// to construct is. / 构造时一次性解析
    pub fn resolve(directory: &ModuleDirectory, candidates: &[&str], ctx: &AnalysisContext) -> Result<Self, AnalysisError> {
        let delegate = match CandidateResolver::new(directory).resolve_first(candidates) {
            Some(resolved) => {
                let factory = match resolved.factory {
                    CapabilityFactory::Tokenizer(factory) => factory,
                    other => {
                        return Err(AnalysisError::CapabilityShape {
                            identifier: resolved.identifier.to_string(),
                            module: resolved.module.name.clone(),
                            expected: "tokenizer",
                            found: other.kind(),
                        })
                    }
                };
                Some(
                    privilege::elevated(|| factory.create(ctx)).map_err(|e| AnalysisError::Construction {
                        identifier: resolved.identifier.to_string(),
                        module: resolved.module.name.clone(),
                        source: e,
                    })?,
                )
            }
            None => None,
        };
        Ok(Self {
            delegate,
            fallback: EmptyTokenizer,
        })
    }

    /// Whether a concrete implementation was resolved. / 是否已解析到实现
    pub fn is_delegating(&self) -> bool {
        self.delegate.is_some()
    }
}

impl Tokenizer for DelegatingTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        match &self.delegate {
            Some(delegate) => delegate.tokenize(text),
            None => self.fallback.tokenize(text),
        }
    }
}
