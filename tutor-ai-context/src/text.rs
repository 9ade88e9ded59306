//! This module provides utilities for splitting documents into passages for
//! retrieval, designed for use within a RAG (Retrieval Augmented Generation)
//! system.
//!
//! The primary goal is to transform a raw plain-text document into a sequence
//! of bounded-size "passages" that can be individually profiled and scored by
//! a retriever. Passages follow sentence boundaries: a document is first cut
//! into sentences at runs of terminator punctuation (`.`, `!`, `?`), and the
//! sentences are then packed greedily into passages that stay under a
//! configurable character budget.
//!
//! The module defines two main types:
//! - [`PassageSplitter`]: Responsible for configuring how text is segmented
//!   into passages.
//! - [`Passage`]: Represents a single segment of text extracted from a
//!   document, along with its position in the passage sequence.
//!
//! # Splitting behavior
//!
//! *   **Sentence boundaries**: Runs of `.`, `!`, or `?` count as a single
//!     boundary, so `"Wait... what?!"` yields two sentences, not five.
//! *   **Greedy packing**: Sentences are accumulated into the current passage
//!     (each followed by `". "`) until appending the next sentence would reach
//!     the size budget, at which point the passage is emitted and a new one
//!     starts with the pending sentence.
//! *   **Oversized sentences**: A single sentence longer than the budget is
//!     never split further; it becomes its own oversized passage.
//! *   **Degenerate input**: Text containing no sentence-bearing content
//!     (empty, whitespace, or bare punctuation) produces zero passages.
//!
//! # Usage
//!
//! ```
//! use tutor_ai_context::text::PassageSplitter;
//!
//! let splitter = PassageSplitter::new(80);
//! let passages = splitter.split(
//!     "Rust has a strong type system. It also has ownership! \
//!      Borrowing rules are checked at compile time.",
//! );
//!
//! assert!(!passages.is_empty());
//! assert!(passages.iter().all(|p| !p.text.is_empty()));
//! // Passages are numbered by their position in the document.
//! assert_eq!(passages[0].sequence, 0);
//! ```
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Default character budget for a single passage.
pub const DEFAULT_MAX_PASSAGE_SIZE: usize = 500;

/// One or more sentence terminators collapse into a single boundary.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// A bounded contiguous segment of a document, produced by splitting.
///
/// Passages are identified by their 0-based position in the passage sequence
/// and are immutable once produced. Concatenating the sentence content of all
/// passages in order reproduces the sentence stream of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passage {
    /// The position of this passage within the document (0-indexed).
    pub sequence: usize,
    /// The text content of this passage, trimmed.
    pub text: String,
}

/// Splits raw document text into bounded-size passages along sentence
/// boundaries.
///
/// The splitter holds only the configured passage size; the sentence
/// boundary rule is fixed. Splitting is deterministic and has no side
/// effects, so one splitter can be reused across documents.
#[derive(Debug, Clone)]
pub struct PassageSplitter {
    max_passage_size: usize,
}

impl Default for PassageSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PASSAGE_SIZE)
    }
}

impl PassageSplitter {
    /// Creates a splitter that emits passages under `max_passage_size`
    /// characters, except where a single sentence alone exceeds the budget.
    pub fn new(max_passage_size: usize) -> Self {
        Self { max_passage_size }
    }

    /// The configured passage character budget.
    pub fn max_passage_size(&self) -> usize {
        self.max_passage_size
    }

    /// Cuts `text` into trimmed, non-empty sentences.
    ///
    /// Terminator punctuation is consumed by the cut, so the returned
    /// sentences carry no trailing `.`, `!`, or `?`.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        SENTENCE_BOUNDARY
            .split(text)
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    /// Splits `text` into an ordered sequence of passages.
    ///
    /// Sentences are packed greedily: each is appended to the current buffer
    /// followed by `". "`, and when the next sentence would push the buffer to
    /// or past the size budget, the buffer is emitted as a passage and the
    /// pending sentence starts a new one. The final buffer is always emitted,
    /// even when it is shorter than the budget.
    ///
    /// Returns an empty vector when `text` holds no sentence-bearing content.
    pub fn split(&self, text: &str) -> Vec<Passage> {
        let mut passages: Vec<String> = Vec::new();
        let mut buffer = String::new();

        for sentence in self.sentences(text) {
            if buffer.len() + sentence.len() < self.max_passage_size {
                buffer.push_str(sentence);
                buffer.push_str(". ");
            } else {
                if !buffer.is_empty() {
                    passages.push(buffer.trim().to_string());
                }
                buffer.clear();
                buffer.push_str(sentence);
                buffer.push_str(". ");
            }
        }

        if !buffer.is_empty() {
            passages.push(buffer.trim().to_string());
        }

        passages
            .into_iter()
            .enumerate()
            .map(|(sequence, text)| Passage { sequence, text })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        // Procedurally generate a long document from a repeated sentence
        let document = (0..100)
            .map(|_| "This is a test sentence. ")
            .collect::<String>();
        let max_passage_size = 500;
        let optimal_passage_count = document.len() / max_passage_size + 1;

        let splitter = PassageSplitter::new(max_passage_size);
        let passages = splitter.split(&document);

        assert!(!passages.is_empty());
        assert!(passages.len() >= optimal_passage_count - 1);
        assert!(passages.len() <= optimal_passage_count + 1);

        for (i, passage) in passages.iter().enumerate() {
            assert_eq!(passage.sequence, i);
            assert!(!passage.text.is_empty());
        }

        // All but the final passage should sit near the budget; none may
        // overshoot it by more than one sentence plus its separator.
        let longest_sentence = "This is a test sentence".len();
        for passage in &passages {
            assert!(passage.text.len() < max_passage_size + longest_sentence + 2);
        }
    }

    #[test]
    fn test_split_single_passage() {
        let splitter = PassageSplitter::default();
        let passages = splitter.split("This is a very short document.");

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].sequence, 0);
        assert_eq!(passages[0].text, "This is a very short document.");
    }

    #[test]
    fn test_split_empty_content() {
        let splitter = PassageSplitter::default();

        assert!(splitter.split("").is_empty());
        assert!(splitter.split("   \n\t  ").is_empty());
        assert!(splitter.split("...!!!???").is_empty());
    }

    #[test]
    fn test_split_collapses_terminator_runs() {
        let splitter = PassageSplitter::default();
        let sentences = splitter.sentences("Wait... what?! Really?");

        assert_eq!(sentences, vec!["Wait", "what", "Really"]);
    }

    #[test]
    fn test_oversized_sentence_becomes_own_passage() {
        let splitter = PassageSplitter::new(40);
        let long_sentence = "word ".repeat(20).trim().to_string(); // ~99 chars, no terminator
        let document = format!("Short one. {long_sentence}. Another short one.");

        let passages = splitter.split(&document);

        // The oversized sentence is not split further
        let oversized = passages
            .iter()
            .find(|p| p.text.contains("word word"))
            .expect("oversized sentence should survive as a passage");
        assert!(oversized.text.len() > 40);
        assert!(oversized.text.starts_with("word"));
    }

    #[test]
    fn test_sentence_stream_reconstruction() {
        let splitter = PassageSplitter::new(60);
        let document = "Cats purr! Dogs bark. Do fish swim? Birds sing... \
                        Snakes hiss. Frogs croak.";

        let original_sentences = splitter.sentences(document);
        let passages = splitter.split(document);

        // Re-splitting the passages yields the same sentence stream, in
        // order, with nothing lost or duplicated.
        let reconstructed: Vec<String> = passages
            .iter()
            .flat_map(|p| splitter.sentences(&p.text))
            .map(str::to_string)
            .collect();

        assert_eq!(reconstructed, original_sentences);
    }

    #[test]
    fn test_split_respects_budget_threshold() {
        // The first two sentences fill the 40-char budget; the third must
        // open a new passage.
        let splitter = PassageSplitter::new(40);
        let passages = splitter.split("Cats are mammals. Dogs are mammals too. Fish live in water. Birds can fly.");

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].text, "Cats are mammals. Dogs are mammals too.");
        assert_eq!(passages[1].text, "Fish live in water. Birds can fly.");
    }
}
