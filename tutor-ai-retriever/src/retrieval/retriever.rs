//! The retriever: owns the passage index and answers relevance queries.
//!
//! [`Retriever`] holds the only mutable state in the crate: an ordered
//! sequence of passages and the parallel sequence of their keyword profiles
//! (profile `i` always describes passage `i`). [`Retriever::index_document`]
//! replaces that state wholesale, so a partially built index is never
//! observable; everything else is read-only.
//!
//! The engine is synchronous and holds no locks. A host serving several
//! documents concurrently should give each its own `Retriever` and treat
//! `index_document` as the write side of an external single-writer,
//! many-reader discipline.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tutor_ai_context::text::{DEFAULT_MAX_PASSAGE_SIZE, Passage, PassageSplitter};

use super::keywords::{KeywordProfile, extract_keywords, similarity};
use super::stats::IndexStats;

/// Minimum similarity a passage must exceed (strictly) to be returned.
pub const RELEVANCE_FLOOR: f64 = 0.1;

/// Default number of passages returned per query.
pub const DEFAULT_TOP_K: usize = 3;

/// Configuration for a [`Retriever`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieverConfig {
    /// Maximum size of each passage in characters
    pub max_passage_size: usize,
    /// Number of passages returned when the caller does not ask for a
    /// specific count
    pub top_k: usize,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            max_passage_size: DEFAULT_MAX_PASSAGE_SIZE,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl RetrieverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_passage_size(mut self, max_passage_size: usize) -> Self {
        self.max_passage_size = max_passage_size;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// A passage paired with its similarity score for one query. Transient:
/// produced per query, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPassage {
    pub score: f64,
    pub passage: Passage,
}

/// The passages and parallel profiles built from one document.
#[derive(Debug, Default)]
struct PassageIndex {
    passages: Vec<Passage>,
    profiles: Vec<KeywordProfile>,
    built_at: Option<i64>,
}

/// Answers free-text queries against the most recently indexed document.
///
/// A fresh retriever is empty: [`Retriever::retrieve`] is valid but returns
/// nothing until [`Retriever::index_document`] has run. Indexing again
/// discards the previous index atomically; there is no incremental update
/// and no teardown beyond dropping the value.
#[derive(Debug)]
pub struct Retriever {
    splitter: PassageSplitter,
    config: RetrieverConfig,
    index: PassageIndex,
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new(RetrieverConfig::default())
    }
}

impl Retriever {
    /// Create an empty retriever with the given configuration.
    pub fn new(config: RetrieverConfig) -> Self {
        Self {
            splitter: PassageSplitter::new(config.max_passage_size),
            config,
            index: PassageIndex::default(),
        }
    }

    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    /// Number of passages in the current index.
    pub fn passage_count(&self) -> usize {
        self.index.passages.len()
    }

    /// Split `text` into passages, profile each one, and swap the whole
    /// index in a single assignment. Any previous index is discarded.
    ///
    /// Text that chunks to nothing (empty, whitespace, bare punctuation)
    /// leaves the retriever with an empty index; that is not an error.
    pub fn index_document(&mut self, text: &str) {
        let passages = self.splitter.split(text);
        let profiles = passages
            .iter()
            .map(|passage| extract_keywords(&passage.text))
            .collect();

        tracing::debug!(
            "indexed document into {} passages (max size: {})",
            passages.len(),
            self.config.max_passage_size
        );

        self.index = PassageIndex {
            passages,
            profiles,
            built_at: Some(chrono::Utc::now().timestamp()),
        };
    }

    /// Retrieve the most relevant passages using the configured `top_k`.
    pub fn retrieve(&self, query: &str) -> Vec<String> {
        self.retrieve_top(query, self.config.top_k)
    }

    /// Retrieve the text of the at most `top_k` most relevant passages.
    pub fn retrieve_top(&self, query: &str, top_k: usize) -> Vec<String> {
        self.retrieve_scored(query, top_k)
            .into_iter()
            .map(|scored| scored.passage.text)
            .collect()
    }

    /// Score every indexed passage against `query` and return the winners
    /// with their scores.
    ///
    /// Passages are ordered by score descending, ties broken by document
    /// position ascending, truncated to `top_k`, and anything scoring at or
    /// below [`RELEVANCE_FLOOR`] is dropped. The result is deterministic for
    /// a fixed index and query, and empty whenever the index is empty or no
    /// passage clears the floor.
    pub fn retrieve_scored(&self, query: &str, top_k: usize) -> Vec<ScoredPassage> {
        if self.index.passages.is_empty() {
            return Vec::new();
        }

        let query_profile = extract_keywords(query);

        let ranked: Vec<ScoredPassage> = self
            .index
            .profiles
            .iter()
            .enumerate()
            .map(|(position, profile)| (position, similarity(&query_profile, profile)))
            .sorted_by(|(pos_a, score_a), (pos_b, score_b)| {
                score_b.total_cmp(score_a).then_with(|| pos_a.cmp(pos_b))
            })
            .take(top_k)
            .filter(|&(_, score)| score > RELEVANCE_FLOOR)
            .map(|(position, score)| ScoredPassage {
                score,
                passage: self.index.passages[position].clone(),
            })
            .collect();

        tracing::debug!(
            "query matched {} of {} passages (top_k: {})",
            ranked.len(),
            self.index.passages.len(),
            top_k
        );

        ranked
    }

    /// Snapshot of the current index: passage and keyword counts plus the
    /// build timestamp.
    pub fn stats(&self) -> IndexStats {
        let distinct_keywords = self
            .index
            .profiles
            .iter()
            .flat_map(|profile| profile.iter().map(|(word, _)| word))
            .unique()
            .count();
        let total_keyword_occurrences = self
            .index
            .profiles
            .iter()
            .map(|profile| u64::from(profile.total()))
            .sum();

        IndexStats {
            passages: self.index.passages.len(),
            distinct_keywords,
            total_keyword_occurrences,
            built_at: self.index.built_at,
        }
    }
}
