//! In-process TF-IDF search index.
//!
//! The default retrieval backend: keyword ranking over the requested fields
//! with cosine-style length normalization. Good enough for a few hundred
//! transcripts and fully deterministic, which the engine's tests rely on.

use super::{IndexedDocument, SearchHit, SearchIndex};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

struct StoredDocument {
    doc: IndexedDocument,
    /// Per-field term frequencies, computed once at indexing time.
    field_terms: HashMap<String, HashMap<String, f64>>,
}

/// In-memory TF-IDF index.
pub struct MemoryIndex {
    documents: RwLock<Vec<StoredDocument>>,
}

impl MemoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut counts: HashMap<String, f64> = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn field_value<'a>(doc: &'a IndexedDocument, field: &str) -> Option<&'a str> {
    match field {
        "episode_id" => Some(&doc.episode_id),
        "episode_title" => Some(&doc.episode_title),
        "text" => Some(&doc.text),
        _ => None,
    }
}

#[async_trait]
impl SearchIndex for MemoryIndex {
    async fn index(&self, documents: Vec<IndexedDocument>) -> Result<()> {
        let mut store = self.documents.write().unwrap();

        // Re-ingesting an episode replaces whatever was indexed for it
        // before; stale text must not stay retrievable.
        let incoming_ids: HashSet<String> = documents
            .iter()
            .map(|d| d.episode_id.clone())
            .collect();
        store.retain(|stored| !incoming_ids.contains(&stored.doc.episode_id));

        for doc in documents {
            let mut field_terms = HashMap::new();
            for field in ["episode_id", "episode_title", "text"] {
                if let Some(value) = field_value(&doc, field) {
                    field_terms.insert(field.to_string(), term_frequencies(value));
                }
            }
            store.push(StoredDocument { doc, field_terms });
        }
        Ok(())
    }

    async fn search(
        &self,
        query: &str,
        fields: &[&str],
        max_results: usize,
    ) -> Result<Vec<SearchHit>> {
        let store = self.documents.read().unwrap();
        let query_terms = tokenize(query);
        if query_terms.is_empty() || store.is_empty() {
            return Ok(Vec::new());
        }

        // Document frequency per query term across the requested fields.
        let mut doc_freq: HashMap<&str, f64> = HashMap::new();
        for term in &query_terms {
            let df = store
                .iter()
                .filter(|stored| {
                    fields.iter().any(|f| {
                        stored
                            .field_terms
                            .get(*f)
                            .is_some_and(|tf| tf.contains_key(term.as_str()))
                    })
                })
                .count() as f64;
            doc_freq.insert(term.as_str(), df);
        }

        let total_docs = store.len() as f64;

        let mut scored: Vec<(f64, &StoredDocument)> = store
            .iter()
            .filter_map(|stored| {
                let mut score = 0.0;
                for field in fields {
                    let Some(tf) = stored.field_terms.get(*field) else {
                        continue;
                    };
                    let field_len: f64 = tf.values().sum();
                    if field_len == 0.0 {
                        continue;
                    }
                    for term in &query_terms {
                        let Some(count) = tf.get(term.as_str()) else {
                            continue;
                        };
                        let df = doc_freq[term.as_str()];
                        let idf = ((1.0 + total_docs) / (1.0 + df)).ln() + 1.0;
                        score += (count / field_len.sqrt()) * idf;
                    }
                }
                if score > 0.0 {
                    Some((score, stored))
                } else {
                    None
                }
            })
            .collect();

        // Stable sort: equal scores keep insertion order, which makes the
        // ranking deterministic for a fixed corpus and query.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(max_results);

        Ok(scored.into_iter().map(|(_, s)| s.doc.clone()).collect())
    }
}
