//! tutor-ai-retriever: lexical passage retrieval over a single document
//!
//! This crate answers free-text queries against one plain-text document at a
//! time. The document is split into sentence-aligned passages (via
//! `tutor-ai-context`), each passage is reduced to a keyword frequency
//! profile, and queries are scored against those profiles with a
//! query-normalized overlap measure. No embeddings, no network, no disk: the
//! index lives entirely in memory and is rebuilt wholesale on every
//! indexing call.
//!
//! ## Key Modules
//!
//! - **[`retrieval`]**: Keyword profiling, the retriever and its index,
//!   index statistics, and prompt-context assembly
//!
//! ## Quick Start
//!
//! ```rust
//! use tutor_ai_retriever::retrieval::retriever::{Retriever, RetrieverConfig};
//!
//! let mut retriever = Retriever::new(RetrieverConfig::default());
//! retriever.index_document(
//!     "The mitochondria is the powerhouse of the cell. \
//!      Ribosomes synthesize proteins. The nucleus stores DNA.",
//! );
//!
//! let passages = retriever.retrieve("What do ribosomes do?");
//! assert!(passages[0].contains("Ribosomes"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Document text → PassageSplitter → KeywordProfiles → in-memory index
//!                                                          ↓
//! Query text    → KeywordProfile  → similarity scores → ranked passages
//! ```

pub mod retrieval;
