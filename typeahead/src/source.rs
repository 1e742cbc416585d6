//! Collection lookup contract and the in-memory reference source.
//!
//! The engine reaches storage only through [`CandidateSource`]. Each
//! collection applies the query matcher as a filter on its own side, sorts
//! by popularity, and returns a bounded candidate set — the engine treats
//! the lookup as a black box and never re-filters.

use std::cmp::Reverse;

use async_trait::async_trait;

use crate::interface::{AutocompleteError, Candidate, EntityKind};
use crate::matcher::QueryMatcher;

/// Per-collection candidate lookup.
///
/// Implementations must filter with matching semantically equivalent to
/// [`QueryMatcher::is_match`], sort by `hits` descending, and cap the
/// result at `limit`. Lookups for different collections run concurrently,
/// so implementations share no mutable state through the engine.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// The entity kind this collection produces.
    fn kind(&self) -> EntityKind;

    /// The candidates matching `matcher`, most popular first, at most
    /// `limit` of them. A failed lookup aborts the whole autocomplete
    /// call.
    async fn find_candidates(
        &self,
        matcher: &QueryMatcher,
        limit: usize,
    ) -> Result<Vec<Candidate>, AutocompleteError>;
}

/// In-memory [`CandidateSource`] over a fixed candidate list.
///
/// The reference implementation of the lookup contract: filter via the
/// shared matcher, sort by hits descending (ties keep insertion order),
/// truncate to the limit. Backs the integration tests and benches, and
/// serves embedders that keep a collection small enough to hold in memory.
pub struct MemorySource {
    kind: EntityKind,
    candidates: Vec<Candidate>,
}

impl MemorySource {
    pub fn new(kind: EntityKind, candidates: Vec<Candidate>) -> Self {
        Self { kind, candidates }
    }
}

#[async_trait]
impl CandidateSource for MemorySource {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    async fn find_candidates(
        &self,
        matcher: &QueryMatcher,
        limit: usize,
    ) -> Result<Vec<Candidate>, AutocompleteError> {
        let mut matches: Vec<Candidate> = self
            .candidates
            .iter()
            .filter(|c| matcher.is_match(&c.name))
            .cloned()
            .collect();
        matches.sort_by_key(|c| Reverse(c.hits));
        matches.truncate(limit);
        Ok(matches)
    }
}
