pub mod text;

// Re-export the main splitting types for external use
pub use text::{DEFAULT_MAX_PASSAGE_SIZE, Passage, PassageSplitter};
