//! Delegating token filter / 委托词元过滤器

use crate::analysis::{TokenFilter, TokenStream};
use crate::config::AnalysisContext;
use crate::error::AnalysisError;
use crate::module::{CandidateResolver, CapabilityFactory, ModuleDirectory};
use crate::privilege;

/// Token filter wrapper around a possibly-absent resolved implementation.
/// With no delegate the token stream passes through unchanged. / 无实现时透传
pub struct DelegatingTokenFilter {
    delegate: Option<Box<dyn TokenFilter>>,
}

impl DelegatingTokenFilter {
    pub fn resolve(directory: &ModuleDirectory, candidates: &[&str], ctx: &AnalysisContext) -> Result<Self, AnalysisError> {
        let delegate = match CandidateResolver::new(directory).resolve_first(candidates) {
            Some(resolved) => {
                let factory = match resolved.factory {
                    CapabilityFactory::TokenFilter(factory) => factory,
                    other => {
                        return Err(AnalysisError::CapabilityShape {
                            identifier: resolved.identifier.to_string(),
                            module: resolved.module.name.clone(),
                            expected: "token filter",
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
        Ok(Self { delegate })
    }

    pub fn is_delegating(&self) -> bool {
        self.delegate.is_some()
    }
}

impl TokenFilter for DelegatingTokenFilter {
    fn apply(&self, input: TokenStream) -> TokenStream {
        match &self.delegate {
            Some(delegate) => delegate.apply(input),
            None => input,
        }
    }
}
