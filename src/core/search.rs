//! # Title Search
//!
//! Approximate matching of a free-text query against item titles.
//!
//! Scoring sits behind [`Scorer`] so the resolver never depends on a
//! particular similarity measure. The default [`TitleScorer`] weights
//! per-token matching against a whole-string edit distance, which covers
//! typos ("pinao"), partial words ("tun") and reordered words ("piano tune").
//!
//! Items scoring below the matcher's threshold are dropped entirely.

use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;
use strsim::normalized_damerau_levenshtein;

use crate::core::catalog::Item;

pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Clamps `threshold` into `[0, 1]`. NaN and infinities fall back to
/// [`DEFAULT_THRESHOLD`]: no score compares `>=` NaN.
pub fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        DEFAULT_THRESHOLD
    }
}

/// Score a title prefix hit gets: below an exact token, above most typos.
const PREFIX_SCORE: f64 = 0.9;

const TOKEN_WEIGHT: f64 = 0.9;

/// Similarity between a query and a title, in `[0.0, 1.0]`.
pub trait Scorer: Send + Sync {
    fn score(&self, query: &str, title: &str) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TitleScorer;

impl Scorer for TitleScorer {
    fn score(&self, query: &str, title: &str) -> f64 {
        let query_tokens = tokenize(query);
        let title_tokens = tokenize(title);
        if query_tokens.is_empty() || title_tokens.is_empty() {
            return 0.0;
        }

        let whole = normalized_damerau_levenshtein(&query_tokens.join(" "), &title_tokens.join(" "));

        let token_total: f64 = query_tokens
            .iter()
            .map(|q| {
                title_tokens
                    .iter()
                    .map(|t| token_score(q, t))
                    .fold(0.0, f64::max)
            })
            .sum();
        let token = token_total / query_tokens.len() as f64;

        // Token matching dominates; the whole-string term separates titles
        // that contain the same words.
        whole.max(TOKEN_WEIGHT * token + (1.0 - TOKEN_WEIGHT) * whole)
    }
}

fn token_score(query: &str, title: &str) -> f64 {
    if query == title {
        1.0
    } else if query.chars().count() >= 2 && title.starts_with(query) {
        PREFIX_SCORE
    } else {
        normalized_damerau_levenshtein(query, title)
    }
}

/// Lowercased alphanumeric runs.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// A scorer plus the cutoff below which items are excluded.
#[derive(Clone)]
pub struct Matcher {
    scorer: Arc<dyn Scorer>,
    threshold: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Matcher {
    pub fn new(threshold: f64) -> Self {
        Self::with_scorer(Arc::new(TitleScorer), threshold)
    }

    pub fn with_scorer(scorer: Arc<dyn Scorer>, threshold: f64) -> Self {
        Self {
            scorer,
            threshold: normalize_threshold(threshold),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Items whose title scores at or above the threshold, best first.
    ///
    /// Equal scores keep collection order.
    pub fn search<'a>(&self, query: &str, items: &'a [Item]) -> Vec<&'a Item> {
        let query = query.trim();
        let mut scored: Vec<(f64, &Item)> = items
            .iter()
            .map(|item| (self.scorer.score(query, &item.title), item))
            .filter(|(score, _)| *score >= self.threshold)
            .collect();

        // sort_by is stable, so ties stay in collection order
        scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));

        debug!(
            "Search {:?}: {} of {} items above {:.2}",
            query,
            scored.len(),
            items.len(),
            self.threshold
        );
        scored.into_iter().map(|(_, item)| item).collect()
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str) -> Item {
        Item {
            id: id.into(),
            title: title.into(),
            category: "a".into(),
            view_count: 0,
            tags: Default::default(),
            content: None,
        }
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn items() -> Vec<Item> {
        vec![
            item("1", "How often should I tune my piano?"),
            item("2", "Which guitar strings should I buy?"),
            item("3", "Do you offer lessons for beginners?"),
        ]
    }

    #[test]
    fn test_exact_word_matches() {
        let items = items();
        assert_eq!(ids(&Matcher::default().search("piano", &items)), ["1"]);
    }

    #[test]
    fn test_tolerates_transposition_typo() {
        let items = items();
        assert_eq!(ids(&Matcher::default().search("pinao", &items)), ["1"]);
    }

    #[test]
    fn test_partial_word_prefix() {
        let items = items();
        assert_eq!(ids(&Matcher::default().search("lesso", &items)), ["3"]);
    }

    #[test]
    fn test_word_order_does_not_matter() {
        let scorer = TitleScorer;
        assert!(scorer.score("piano tune", "Tune my piano") >= DEFAULT_THRESHOLD);
        assert!(scorer.score("tune piano", "Tune my piano") >= DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let items = items();
        assert!(Matcher::default().search("xylophone", &items).is_empty());
    }

    #[test]
    fn test_best_match_first() {
        let items = vec![
            item("a", "Piano pedals explained"),
            item("b", "Piano"),
        ];
        // Both contain the token, but "b" also wins on whole-string similarity.
        let found = Matcher::default().search("piano", &items);
        assert_eq!(ids(&found), ["b", "a"]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let items = vec![
            item("x", "Tuning basics"),
            item("y", "Tuning basics"),
            item("z", "Tuning basics"),
        ];
        assert_eq!(ids(&Matcher::default().search("tuning", &items)), ["x", "y", "z"]);
    }

    #[test]
    fn test_punctuation_only_query_matches_nothing() {
        let items = items();
        assert!(Matcher::default().search("?!", &items).is_empty());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(Matcher::new(3.0).threshold(), 1.0);
        assert_eq!(Matcher::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_non_finite_threshold_uses_default() {
        assert_eq!(Matcher::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
        assert_eq!(Matcher::new(f64::INFINITY).threshold(), DEFAULT_THRESHOLD);

        let items = crate::test_support::test_catalog().items().to_vec();
        let found = Matcher::new(f64::NAN).search("piano", &items);
        assert!(!found.is_empty());
    }

    #[test]
    fn test_custom_scorer() {
        struct Exact;
        impl Scorer for Exact {
            fn score(&self, query: &str, title: &str) -> f64 {
                if query == title { 1.0 } else { 0.0 }
            }
        }
        let items = items();
        let matcher = Matcher::with_scorer(Arc::new(Exact), 0.5);
        assert!(matcher.search("piano", &items).is_empty());
        assert_eq!(
            ids(&matcher.search("Do you offer lessons for beginners?", &items)),
            ["3"]
        );
    }
}
