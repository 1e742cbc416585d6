//! Relevance scoring for admitted candidates.
//!
//! Admission is the matcher's job; scoring only refines order among
//! candidates that already matched. The scale is intentionally coarse —
//! the weights below only drive a relative ordering, never a probability.

use std::collections::HashMap;

use crate::interface::{Candidate, EntityKind};
use crate::matcher::QueryMatcher;

/// Candidate name equals the full query (case-insensitive). Must dominate
/// every other bonus combined so exact matches always rank first.
pub const EXACT_MATCH: i64 = 1000;

/// One query token occurs verbatim as a whole word in the candidate name.
/// Accumulates once per token.
pub const WORD_MATCH: i64 = 100;

/// Base bonus for course candidates: course pages are the primary
/// navigation target, notes hang off them.
pub const COURSE_BONUS: i64 = 10;

/// Per-kind base bonuses, open for extension.
///
/// Collections for new entity kinds register their bonus here instead of
/// growing a branch inside [`score`]. Unregistered kinds score +0.
#[derive(Debug, Clone)]
pub struct KindBonuses {
    bonuses: HashMap<EntityKind, i64>,
}

impl KindBonuses {
    pub fn new() -> Self {
        Self { bonuses: HashMap::new() }
    }

    /// Register (or override) the base bonus for a kind.
    pub fn register(&mut self, kind: EntityKind, bonus: i64) {
        self.bonuses.insert(kind, bonus);
    }

    /// The base bonus for `kind`, 0 if unregistered.
    pub fn base(&self, kind: EntityKind) -> i64 {
        self.bonuses.get(&kind).copied().unwrap_or(0)
    }
}

impl Default for KindBonuses {
    /// The stock registry: courses +10, notes +0.
    fn default() -> Self {
        let mut bonuses = Self::new();
        bonuses.register(EntityKind::Course, COURSE_BONUS);
        bonuses.register(EntityKind::Note, 0);
        bonuses
    }
}

/// Compute the relevance weight of one candidate for one query. Pure.
///
/// Sum of: the kind's base bonus, [`EXACT_MATCH`] if the name equals the
/// query, and [`WORD_MATCH`] per query token appearing as a whole word in
/// the name. A candidate that earns no bonus still scores >= 0 and is
/// retained — admission already happened at the matcher.
pub fn score(candidate: &Candidate, matcher: &QueryMatcher, bonuses: &KindBonuses) -> i64 {
    let mut weight = bonuses.base(candidate.kind);

    if candidate.name.to_lowercase() == matcher.query_lower() {
        weight += EXACT_MATCH;
    }

    for word in matcher.word_patterns() {
        if word.is_match(&candidate.name) {
            weight += WORD_MATCH;
        }
    }

    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str) -> Candidate {
        Candidate {
            name: name.to_owned(),
            desc: String::new(),
            kind: EntityKind::Course,
            hits: 0,
            url: format!("/courses/{}", name.to_lowercase().replace(' ', "-")),
        }
    }

    fn note(name: &str) -> Candidate {
        Candidate {
            name: name.to_owned(),
            desc: String::new(),
            kind: EntityKind::Note,
            hits: 0,
            url: format!("/notes/{}", name.to_lowercase().replace(' ', "-")),
        }
    }

    fn weight_of(candidate: &Candidate, query: &str) -> i64 {
        let matcher = QueryMatcher::new(query).unwrap();
        score(candidate, &matcher, &KindBonuses::default())
    }

    // ── base bonuses ─────────────────────────────────────────────

    #[test]
    fn test_kind_bonus_only() {
        // Prefix match with no whole-word occurrence: type bonus alone.
        assert_eq!(weight_of(&course("Calculus"), "Calc"), COURSE_BONUS);
        assert_eq!(weight_of(&note("Calculus"), "Calc"), 0);
    }

    #[test]
    fn test_unregistered_kind_scores_zero_base() {
        let bonuses = KindBonuses::new();
        let matcher = QueryMatcher::new("Calc").unwrap();
        assert_eq!(score(&course("Calculus"), &matcher, &bonuses), 0);
    }

    #[test]
    fn test_registry_override() {
        let mut bonuses = KindBonuses::default();
        bonuses.register(EntityKind::Note, 25);
        let matcher = QueryMatcher::new("Calc").unwrap();
        assert_eq!(score(&note("Calculus"), &matcher, &bonuses), 25);
    }

    // ── exact match ──────────────────────────────────────────────

    #[test]
    fn test_exact_match_case_insensitive() {
        // Exact + course bonus + one whole-word token.
        assert_eq!(
            weight_of(&course("Calculus"), "calculus"),
            EXACT_MATCH + COURSE_BONUS + WORD_MATCH
        );
    }

    #[test]
    fn test_exact_match_multi_token() {
        assert_eq!(
            weight_of(&course("AP History"), "ap history"),
            EXACT_MATCH + COURSE_BONUS + 2 * WORD_MATCH
        );
    }

    #[test]
    fn test_exact_match_dominates() {
        // An exact match must strictly outrank any non-exact match of
        // equal type bonus, regardless of accumulated word bonuses.
        let exact = weight_of(&course("AP History"), "AP History");
        let partial = weight_of(&course("AP History Review Session Notes"), "AP History");
        assert!(exact > partial);
    }

    // ── word match ───────────────────────────────────────────────

    #[test]
    fn test_word_match_whole_words_only() {
        // "AP" is a whole word in "AP History" but only a prefix of
        // "Apple" — no word bonus there.
        assert_eq!(weight_of(&course("AP History"), "AP"), COURSE_BONUS + WORD_MATCH);
        assert_eq!(weight_of(&course("Apple Farming"), "AP"), COURSE_BONUS);
    }

    #[test]
    fn test_word_match_accumulates_per_token() {
        let one = weight_of(&note("English Literature Essays"), "Essays");
        let two = weight_of(&note("English Literature Essays"), "Literature Essays");
        assert_eq!(one, WORD_MATCH);
        assert_eq!(two, 2 * WORD_MATCH);
    }

    #[test]
    fn test_word_match_at_string_edges() {
        // Bounded by start/whitespace and end/whitespace — both edges of
        // the name count as boundaries.
        assert_eq!(weight_of(&note("Calc Notes"), "Calc"), WORD_MATCH);
        assert_eq!(weight_of(&note("Midterm Calc"), "Calc"), WORD_MATCH);
    }

    #[test]
    fn test_calc_catalog_weights() {
        assert_eq!(weight_of(&course("Calculus"), "Calc"), 10);
        assert_eq!(weight_of(&course("Calculus BC"), "Calc"), 10);
        assert_eq!(weight_of(&note("Calc Notes"), "Calc"), 100);
    }
}
