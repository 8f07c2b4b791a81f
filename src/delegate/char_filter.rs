//! Delegating char filter / 委托字符过滤器

use std::borrow::Cow;

use crate::analysis::CharFilter;
use crate::config::AnalysisContext;
use crate::error::AnalysisError;
use crate::module::{CandidateResolver, CapabilityFactory, ModuleDirectory};
use crate::privilege;

/// Char filter wrapper around a possibly-absent resolved implementation.
/// With no delegate the input passes through unchanged. / 无实现时原样返回
pub struct DelegatingCharFilter {
    delegate: Option<Box<dyn CharFilter>>,
}

impl DelegatingCharFilter {
    pub fn resolve(directory: &ModuleDirectory, candidates: &[&str], ctx: &AnalysisContext) -> Result<Self, AnalysisError> {
        let delegate = match CandidateResolver::new(directory).resolve_first(candidates) {
            Some(resolved) => {
                let factory = match resolved.factory {
                    CapabilityFactory::CharFilter(factory) => factory,
                    other => {
                        return Err(AnalysisError::CapabilityShape {
                            identifier: resolved.identifier.to_string(),
                            module: resolved.module.name.clone(),
                            expected: "char filter",
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

impl CharFilter for DelegatingCharFilter {
    fn apply<'a>(&self, input: Cow<'a, str>) -> Cow<'a, str> {
        match &self.delegate {
            Some(delegate) => delegate.apply(input),
            None => input,
        }
    }
}
