//! Typeahead - autocomplete ranking engine for StudyNotes-style catalogs
//!
//! Given a free-text query, the engine fans out to every registered
//! collection (courses, notes, ...) concurrently, scores each returned
//! candidate, merges everything into one ranked list capped at eight
//! entries, and wraps the matched query tokens in the display name with
//! `<strong>` markers for the presentation layer.
//!
//! The engine owns no storage: collections are reached through the
//! [`CandidateSource`] trait and everything it returns is computed fresh
//! per call.

pub mod engine;
pub mod highlight;
pub mod interface;
pub mod matcher;
pub mod scoring;
pub mod source;

pub use engine::Autocomplete;
pub use interface::*;
pub use matcher::QueryMatcher;
pub use source::{CandidateSource, MemorySource};
