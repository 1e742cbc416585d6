//! Emphasis markup for matched query tokens.
//!
//! Every non-overlapping occurrence of a query token — anchored at a word
//! start, exactly like the admission matcher — is wrapped in `<strong>`
//! markers. The wrapped span includes whatever leading whitespace and
//! punctuation the anchor consumed, so surrounding text is untouched and
//! reassembles byte-identically once the markers are stripped.

use crate::matcher::QueryMatcher;

/// Opening emphasis marker, consumed as-is by the page layer.
pub const MARK_OPEN: &str = "<strong>";
/// Closing emphasis marker.
pub const MARK_CLOSE: &str = "</strong>";

/// Return a copy of `name` with every matched token span wrapped in
/// emphasis markers.
///
/// Overlap between tokens resolves leftmost-first: once a span is consumed
/// by one token's match it is not reconsidered for another. `name` itself
/// is never mutated.
pub fn highlight(name: &str, matcher: &QueryMatcher) -> String {
    let wrapped = format!("{MARK_OPEN}${{0}}{MARK_CLOSE}");
    matcher
        .highlight_pattern()
        .replace_all(name, wrapped.as_str())
        .into_owned()
}
