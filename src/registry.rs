//! In-memory episode registry.
//!
//! Holds per-episode metadata (title, number, media URLs, full transcript)
//! keyed by episode id. The registry is the single owner of episode metadata;
//! the search index only sees the text it needs for ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// A podcast episode with its full transcript and media links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Unique, stable episode identifier.
    pub episode_id: String,
    /// Episode title.
    pub title: String,
    /// Episode number, used for display ordering.
    pub number: u32,
    /// Full transcript text.
    pub transcript: String,
    /// URL to the video version (empty = no link available).
    #[serde(default)]
    pub video_url: String,
    /// URL to the audio version (empty = no link available).
    #[serde(default)]
    pub audio_url: String,
}

/// Summary of an episode for listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeSummary {
    pub episode_id: String,
    pub title: String,
    pub number: u32,
}

struct Entry {
    episode: Episode,
    /// First-insertion sequence number, preserved across overwrites so the
    /// listing order stays stable when episode numbers collide.
    seq: u64,
}

/// Thread-safe in-memory map of episodes.
///
/// Re-adding an existing `episode_id` overwrites the stored metadata; the
/// overwrite is the only mutation path, episodes are never deleted.
pub struct EpisodeRegistry {
    entries: RwLock<HashMap<String, Entry>>,
    next_seq: RwLock<u64>,
}

impl EpisodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            next_seq: RwLock::new(0),
        }
    }

    /// Insert or overwrite an episode by its id.
    pub fn put(&self, episode: Episode) {
        let mut entries = self.entries.write().unwrap();
        let seq = match entries.get(&episode.episode_id) {
            Some(existing) => existing.seq,
            None => {
                let mut next = self.next_seq.write().unwrap();
                let seq = *next;
                *next += 1;
                seq
            }
        };
        entries.insert(episode.episode_id.clone(), Entry { episode, seq });
    }

    /// Look up an episode by id. A miss is routine, not an error.
    pub fn get(&self, episode_id: &str) -> Option<Episode> {
        let entries = self.entries.read().unwrap();
        entries.get(episode_id).map(|e| e.episode.clone())
    }

    /// List all episodes, ascending by episode number.
    ///
    /// Numbers are expected unique but duplicates must not break the listing:
    /// ties fall back to first-insertion order.
    pub fn list(&self) -> Vec<EpisodeSummary> {
        let entries = self.entries.read().unwrap();
        let mut all: Vec<(&u64, &Episode)> =
            entries.values().map(|e| (&e.seq, &e.episode)).collect();
        all.sort_by_key(|(seq, ep)| (ep.number, **seq));
        all.into_iter()
            .map(|(_, ep)| EpisodeSummary {
                episode_id: ep.episode_id.clone(),
                title: ep.title.clone(),
                number: ep.number,
            })
            .collect()
    }

    /// Number of registered episodes.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True when no episodes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EpisodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, title: &str, number: u32) -> Episode {
        Episode {
            episode_id: id.to_string(),
            title: title.to_string(),
            number,
            transcript: format!("transcript of {}", title),
            video_url: String::new(),
            audio_url: String::new(),
        }
    }

    #[test]
    fn test_put_and_get() {
        let registry = EpisodeRegistry::new();
        registry.put(episode("ep001", "Intro", 1));

        let found = registry.get("ep001").unwrap();
        assert_eq!(found.title, "Intro");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_list_orders_by_number() {
        let registry = EpisodeRegistry::new();
        registry.put(episode("c", "Third", 3));
        registry.put(episode("a", "First", 1));
        registry.put(episode("b", "Second", 2));

        let numbers: Vec<u32> = registry.list().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_duplicate_numbers_keep_insertion_order() {
        let registry = EpisodeRegistry::new();
        registry.put(episode("x", "X", 7));
        registry.put(episode("y", "Y", 7));

        let ids: Vec<String> = registry
            .list()
            .into_iter()
            .map(|e| e.episode_id)
            .collect();
        assert_eq!(ids, vec!["x", "y"]);
    }

    #[test]
    fn test_put_overwrites_by_id() {
        let registry = EpisodeRegistry::new();
        registry.put(episode("ep001", "Old Title", 1));
        registry.put(episode("ep001", "New Title", 2));

        assert_eq!(registry.len(), 1);
        let found = registry.get("ep001").unwrap();
        assert_eq!(found.title, "New Title");
        assert_eq!(found.number, 2);
    }
}
