//! First-match candidate resolution / 候选实现解析
//!
//! A capability declares an ordered list of candidate identifiers, most
//! preferred first. These are typically namespace migrations of the same
//! upstream module, so the first one that is actually loadable wins.
//! Candidate order dominates module order: a lower-priority candidate found
//! in an earlier-loaded module never beats a higher-priority candidate found
//! in a later-loaded module.

use super::{CapabilityFactory, ModuleDirectory, ModuleInfo};

/// Outcome of a successful resolution, with the providing module kept for
/// diagnostics. / 解析结果
pub struct Resolved<'a> {
    pub identifier: &'a str,
    pub module: &'a ModuleInfo,
    pub factory: &'a CapabilityFactory,
}

pub struct CandidateResolver<'a> {
    directory: &'a ModuleDirectory,
}

impl<'a> CandidateResolver<'a> {
    pub fn new(directory: &'a ModuleDirectory) -> Self {
        Self { directory }
    }

    /// Walk `candidates` in order and return the first identifier any
    /// installed module resolves. Deterministic for a fixed directory and
    /// candidate list; an empty list never matches. / 按序查找首个可用候选
    pub fn resolve_first(&self, candidates: &'a [&'a str]) -> Option<Resolved<'a>> {
        for identifier in candidates.iter().copied() {
            match self.directory.resolve_type(identifier) {
                Some((record, factory)) => {
                    tracing::debug!("{} is found in {}.", identifier, record.info.name);
                    return Some(Resolved {
                        identifier,
                        module: &record.info,
                        factory,
                    });
                }
                None => {
                    tracing::debug!("{} is not found.", identifier);
                }
            }
        }
        None
    }
}
