//! Search index abstraction.
//!
//! The engine treats retrieval as an external collaborator behind a trait so
//! any backend (the bundled in-memory TF-IDF index, a vector database, a
//! hosted search service) can be substituted without touching the engine.

mod memory;

pub use memory::MemoryIndex;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A unit of text submitted to the search index.
///
/// Either a full episode transcript or one timestamped segment of it, always
/// carrying enough episode metadata to label the retrieved text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// Episode this text belongs to.
    pub episode_id: String,
    /// Episode title.
    pub episode_title: String,
    /// Episode number.
    pub episode_number: u32,
    /// The indexed text (segment or full transcript).
    pub text: String,
    /// Segment start ("MM:SS" or "HH:MM:SS"), if segment-level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Segment end, if segment-level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// One ranked result returned by the index.
///
/// Relevance is positional: hits arrive in descending relevance order and no
/// numeric score is part of the contract.
pub type SearchHit = IndexedDocument;

/// Trait for search index implementations.
///
/// Implementations must rank deterministically for a fixed corpus and query,
/// and return an empty vec (not an error) when nothing matches.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Submit documents for indexing.
    ///
    /// Documents for an `episode_id` already present in the index are
    /// replaced, so re-ingesting an episode never leaves stale text
    /// retrievable.
    async fn index(&self, documents: Vec<IndexedDocument>) -> Result<()>;

    /// Search for the `max_results` most relevant documents, restricted to
    /// the named fields.
    async fn search(
        &self,
        query: &str,
        fields: &[&str],
        max_results: usize,
    ) -> Result<Vec<SearchHit>>;
}
