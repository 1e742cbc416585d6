//! Query tokenization and prefix matching.
//!
//! A query is split into whitespace-delimited tokens, every token is
//! escaped (tokens are literals, never patterns), and the tokens are
//! composed into compiled regexes exactly once per query. The same
//! [`QueryMatcher`] is then shared by every collection lookup, the scorer,
//! and the highlighter, so all three agree on what "matches".

use regex::Regex;

use crate::interface::AutocompleteError;

/// Anchor for the start of a token: start-of-string or whitespace, with any
/// run of non-letter characters (punctuation, digits, brackets) skippable
/// before the token itself. `\p{L}` keeps the skip meaningful for
/// non-ASCII names.
const TOKEN_ANCHOR: &str = r"(?:^|\s)[^\p{L}]*";

/// Gap between consecutive tokens: any text, then the next token anchored
/// at a word start. Token order must be preserved; the skipped text is
/// unconstrained.
const TOKEN_GAP: &str = r".*\s[^\p{L}]*";

/// Compiled matching state for one query, shared across all collections.
///
/// `is_match` is the admission test: a name is a candidate iff it contains
/// every query token, in order, each anchored at a word start.
///
/// Example: `"Hist"` matches `"AP History"` and `"History"`; `"Eng Lit"`
/// matches `"English Literature"` but `"Lit Eng"` does not.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    query: String,
    query_lower: String,
    tokens: Vec<String>,
    prefix: Regex,
    word_patterns: Vec<Regex>,
    highlight: Regex,
}

impl QueryMatcher {
    /// Tokenize `query` and compile its match patterns.
    ///
    /// Fails with [`AutocompleteError::EmptyQuery`] if the query trims to
    /// nothing. Callers are expected to reject empty queries earlier; this
    /// is the backstop.
    pub fn new(query: &str) -> Result<Self, AutocompleteError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AutocompleteError::EmptyQuery);
        }

        let tokens: Vec<String> = trimmed.split_whitespace().map(str::to_owned).collect();
        let escaped: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();

        let mut pattern = format!("(?i){TOKEN_ANCHOR}{}", escaped[0]);
        for tok in &escaped[1..] {
            pattern.push_str(TOKEN_GAP);
            pattern.push_str(tok);
        }
        let prefix = Regex::new(&pattern)?;

        // Whole-word patterns for the scorer: token bounded by
        // start/whitespace and end/whitespace, once per token.
        let word_patterns = escaped
            .iter()
            .map(|tok| Regex::new(&format!(r"(?i)(?:^|\s){tok}(?:$|\s)")))
            .collect::<Result<Vec<_>, _>>()?;

        // One alternation over all tokens for the highlighter, each
        // alternative carrying the same word-start anchor.
        let highlight = Regex::new(&format!("(?i){TOKEN_ANCHOR}(?:{})", escaped.join("|")))?;

        Ok(Self {
            query: trimmed.to_owned(),
            query_lower: trimmed.to_lowercase(),
            tokens,
            prefix,
            word_patterns,
            highlight,
        })
    }

    /// Whether `name` is admitted as a candidate for this query.
    ///
    /// Collections must apply semantically equivalent filtering when they
    /// select candidates at the storage layer.
    pub fn is_match(&self, name: &str) -> bool {
        self.prefix.is_match(name)
    }

    /// The trimmed query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The trimmed query, lowercased once at build time.
    pub(crate) fn query_lower(&self) -> &str {
        &self.query_lower
    }

    /// The whitespace-delimited query tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Per-token whole-word patterns, parallel to `tokens()`.
    pub(crate) fn word_patterns(&self) -> &[Regex] {
        &self.word_patterns
    }

    /// The global highlight alternation.
    pub(crate) fn highlight_pattern(&self) -> &Regex {
        &self.highlight
    }
}
