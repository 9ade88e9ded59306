//! Keyword frequency profiles for passages and queries.
//!
//! A [`KeywordProfile`] maps each content-bearing word of a text span to its
//! occurrence count. Profiles are built the same way for indexed passages and
//! for incoming queries, which is what makes their scores comparable: the
//! same lowercasing, the same token rule (runs of at least three alphabetic
//! characters), and the same stopword set apply to both sides.
//!
//! The token rule and stopword set are compiled once and shared; they are
//! configuration data, not per-call state.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Alphabetic runs of three or more characters; digits, punctuation, and
/// shorter tokens never enter a profile.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").unwrap());

/// Common English function words excluded from profiles: articles, pronouns,
/// auxiliary verbs, prepositions, conjunctions, and a short list of generic
/// verbs. Must stay identical between indexing and querying.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them", "my", "your", "his", "its", "our", "their", "am", "as", "if", "so", "no", "not",
        "up", "out", "down", "off", "over", "under", "again", "further", "then", "once", "here",
        "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "only", "own", "same", "than", "too", "very", "just",
        "now", "also", "well", "get", "go", "come", "see",
    ]
    .into_iter()
    .collect()
});

/// Occurrence counts of the content-bearing vocabulary in one text span.
///
/// Keys are unique normalized keywords; insertion order carries no meaning.
/// An empty profile means the span held no qualifying words at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordProfile {
    counts: HashMap<String, u32>,
}

impl KeywordProfile {
    /// Whether no keyword survived extraction.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Occurrence count for `keyword`, 0 when absent.
    pub fn count(&self, keyword: &str) -> u32 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    /// Sum of all occurrence counts (the profile's keyword mass).
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Iterate over (keyword, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

/// Reduces `text` to its keyword frequency profile.
///
/// Lowercases the input, keeps alphabetic tokens of length >= 3 that are not
/// stopwords, and counts occurrences. Deterministic: identical input always
/// yields an identical profile.
pub fn extract_keywords(text: &str) -> KeywordProfile {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for token in WORD_PATTERN.find_iter(&lowered) {
        let word = token.as_str();
        if STOPWORDS.contains(word) {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }

    KeywordProfile { counts }
}

/// Scores how much of the query's keyword mass is matched by a passage.
///
/// Sums `min(query count, passage count)` over the keywords the two profiles
/// share, then divides by the query's total keyword occurrences. Returns 0
/// when either profile is empty or nothing is shared.
///
/// Not symmetric: the denominator is the query mass, never the passage mass,
/// so swapping the arguments changes the result. The value reads as "the
/// fraction of the query matched by this passage" and always lands in
/// [0, 1].
pub fn similarity(query: &KeywordProfile, passage: &KeywordProfile) -> f64 {
    if query.is_empty() || passage.is_empty() {
        return 0.0;
    }

    let shared: u32 = query
        .iter()
        .map(|(word, count)| count.min(passage.count(word)))
        .sum();
    if shared == 0 {
        return 0.0;
    }

    f64::from(shared) / f64::from(query.total())
}
