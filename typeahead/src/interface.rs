//! Public interface types.
//!
//! This file defines the shapes the surrounding application consumes: the
//! candidate records collections hand in, the suggestion records the
//! presentation layer renders, and the engine's error type. It is the
//! source of truth for the output contract.

use serde::Serialize;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Which collection a candidate came from.
///
/// The variant name doubles as the `type` string in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Course,
    Note,
}

impl EntityKind {
    /// The `type` tag as rendered in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Course => "Course",
            EntityKind::Note => "Note",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// One searchable entity offered for ranking, as handed in by a
/// [`CandidateSource`](crate::source::CandidateSource).
///
/// `hits` is the collection-side popularity counter; sources use it to
/// pre-sort and cap their result sets, the scorer never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub desc: String,
    pub kind: EntityKind,
    pub hits: u64,
    pub url: String,
}

/// One entry of the final ranked list.
///
/// `name` carries `<strong>` markers around matched tokens. `position` is
/// dense and 1-based; `weight` is non-increasing as `position` grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub desc: String,
    pub position: u32,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub url: String,
    pub weight: i64,
}

/// Error type for autocomplete operations
#[derive(Debug, Error)]
pub enum AutocompleteError {
    /// The query was empty (or whitespace-only) after trimming. Request
    /// handlers are expected to reject these before calling the engine.
    #[error("Empty query")]
    EmptyQuery,
    /// The query composed a pattern the regex engine refused to compile
    /// (e.g. the compiled-size limit on pathological inputs).
    #[error("Query pattern error: {0}")]
    Pattern(#[from] regex::Error),
    /// A collection lookup failed. The whole call is aborted; no partial
    /// result set is ever returned.
    #[error("Source error: {0}")]
    Source(String),
}
