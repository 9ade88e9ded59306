//! Lightweight statistics about the current in-memory index.

use serde::Serialize;

/// A point-in-time summary of a retriever's index.
///
/// Produced by [`Retriever::stats`](super::retriever::Retriever::stats);
/// all counts are zero and `built_at` is `None` until a document has been
/// indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of passages in the index
    pub passages: usize,
    /// Number of distinct keywords across all passage profiles
    pub distinct_keywords: usize,
    /// Sum of keyword occurrence counts across all passage profiles
    pub total_keyword_occurrences: u64,
    /// Unix timestamp of the most recent indexing call
    pub built_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use crate::retrieval::retriever::{Retriever, RetrieverConfig};

    #[test]
    fn test_stats_for_empty_retriever() {
        let stats = Retriever::default().stats();

        assert_eq!(stats.passages, 0);
        assert_eq!(stats.distinct_keywords, 0);
        assert_eq!(stats.total_keyword_occurrences, 0);
        assert_eq!(stats.built_at, None);
    }

    #[test]
    fn test_stats_count_distinct_keywords_across_passages() {
        let mut retriever = Retriever::new(RetrieverConfig::new().with_max_passage_size(20));
        // Two passages sharing the keyword "tides"
        retriever.index_document("Tides follow the moon. Tides shape coastlines.");

        let stats = retriever.stats();

        assert_eq!(stats.passages, 2);
        // tides, follow, moon, shape, coastlines
        assert_eq!(stats.distinct_keywords, 5);
        assert_eq!(stats.total_keyword_occurrences, 6);
        assert!(stats.built_at.is_some());
    }
}
