//! Cross-collection aggregation: fan out, score, merge, rank, project.
//!
//! One `autocomplete` call is a single isolated request/response — the
//! engine caches nothing across calls and returns nothing it may later
//! mutate. Collection lookups run concurrently so latency is bounded by
//! the slowest collection, not the sum; everything after the join point is
//! single-threaded.

use std::cmp::Reverse;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::highlight::highlight;
use crate::interface::{AutocompleteError, Candidate, Suggestion};
use crate::matcher::QueryMatcher;
use crate::scoring::{score, KindBonuses};
use crate::source::CandidateSource;

/// Result budget: at most this many suggestions per query.
pub const MAX_RESULTS: usize = 8;

/// How many candidates each collection is asked for.
pub const SOURCE_LIMIT: usize = 10;

/// A candidate with its computed weight. Lives only between the join point
/// and projection.
struct Scored {
    candidate: Candidate,
    weight: i64,
}

/// The autocomplete engine over a fixed set of collections.
///
/// Collections are queried in registration order for the deterministic
/// merge (register courses before notes to match the canonical ordering),
/// even though the lookups themselves run concurrently.
pub struct Autocomplete {
    sources: Vec<Arc<dyn CandidateSource>>,
    bonuses: KindBonuses,
    source_limit: usize,
}

impl Autocomplete {
    /// Build an engine over `sources` with the stock kind bonuses and the
    /// default per-collection limit.
    pub fn new(sources: Vec<Arc<dyn CandidateSource>>) -> Self {
        Self {
            sources,
            bonuses: KindBonuses::default(),
            source_limit: SOURCE_LIMIT,
        }
    }

    /// Replace the kind-bonus registry.
    pub fn with_bonuses(mut self, bonuses: KindBonuses) -> Self {
        self.bonuses = bonuses;
        self
    }

    /// Override the per-collection candidate limit.
    pub fn with_source_limit(mut self, limit: usize) -> Self {
        self.source_limit = limit;
        self
    }

    /// Rank the best matches for `query` across every collection.
    ///
    /// The returned list is at most [`MAX_RESULTS`] long, ordered by
    /// weight descending with dense 1-based positions; equal weights keep
    /// the merge order. If any collection lookup fails the whole call
    /// fails — no partial result set is ever returned.
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<Suggestion>, AutocompleteError> {
        let matcher = QueryMatcher::new(query)?;

        // One matcher for every collection; each lookup returns its own
        // candidate list and the lists are only combined after all of
        // them have completed.
        let lookups = self
            .sources
            .iter()
            .map(|source| source.find_candidates(&matcher, self.source_limit));
        let per_source = try_join_all(lookups).await?;

        let mut scored: Vec<Scored> = Vec::new();
        for (source, candidates) in self.sources.iter().zip(per_source) {
            debug!(
                "{} candidates from {} for {:?}",
                candidates.len(),
                source.kind().as_str(),
                matcher.query()
            );
            scored.extend(candidates.into_iter().map(|candidate| {
                let weight = score(&candidate, &matcher, &self.bonuses);
                Scored { candidate, weight }
            }));
        }

        // Stable sort: equal weights keep the registration-order merge.
        scored.sort_by_key(|s| Reverse(s.weight));
        scored.truncate(MAX_RESULTS);

        let suggestions = scored
            .into_iter()
            .enumerate()
            .map(|(i, s)| Suggestion {
                name: highlight(&s.candidate.name, &matcher),
                desc: s.candidate.desc,
                position: i as u32 + 1,
                kind: s.candidate.kind,
                url: s.candidate.url,
                weight: s.weight,
            })
            .collect::<Vec<_>>();

        debug!("{:?} -> {} suggestions", matcher.query(), suggestions.len());
        Ok(suggestions)
    }
}
