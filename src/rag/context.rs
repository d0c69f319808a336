//! Context assembly: turning ranked search hits into prompt text and
//! citable sources.

use super::Source;
use crate::registry::EpisodeRegistry;
use crate::search::SearchHit;
use crate::timestamp;

/// Maximum excerpt length in characters before truncation.
pub const MAX_EXCERPT_CHARS: usize = 200;

/// Build the prompt context block and the source list for a set of hits.
///
/// Hits are processed in rank order and no re-ranking happens here; the
/// returned sources line up one-to-one with the hits. Each context block is
/// labeled with its episode title, which is what lets the generator
/// attribute claims to an episode.
pub fn assemble(hits: &[SearchHit], registry: &EpisodeRegistry) -> (String, Vec<Source>) {
    let mut blocks = Vec::with_capacity(hits.len());
    let mut sources = Vec::with_capacity(hits.len());

    for hit in hits {
        blocks.push(format!("[Episode: {}] {}", hit.episode_title, hit.text));
        sources.push(source_for(hit, registry));
    }

    (blocks.join("\n\n"), sources)
}

fn source_for(hit: &SearchHit, registry: &EpisodeRegistry) -> Source {
    let timestamp = hit.start_time.clone().unwrap_or_default();
    let episode = registry.get(&hit.episode_id);

    // Links only exist when the episode carries a non-empty URL. With a
    // segment timestamp the link seeks to the exact moment; without one it
    // points at the episode itself rather than a meaningless t=0.
    let link = |url: &str| -> Option<String> {
        if url.is_empty() {
            None
        } else if timestamp.is_empty() {
            Some(url.to_string())
        } else {
            Some(timestamp::deep_link(url, &timestamp))
        }
    };

    let (video_link, audio_link) = match &episode {
        Some(ep) => (link(&ep.video_url), link(&ep.audio_url)),
        None => (None, None),
    };

    Source {
        episode_title: hit.episode_title.clone(),
        episode_number: hit.episode_number,
        excerpt: truncate_excerpt(&hit.text, MAX_EXCERPT_CHARS),
        timestamp,
        video_link,
        audio_link,
    }
}

/// Truncate to `max_chars` characters, appending `...` only when text was
/// actually cut. Counts characters, not bytes, so multi-byte text never
/// splits mid-character.
pub fn truncate_excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Episode;
    use crate::search::IndexedDocument;

    fn registry_with(episodes: Vec<Episode>) -> EpisodeRegistry {
        let registry = EpisodeRegistry::new();
        for ep in episodes {
            registry.put(ep);
        }
        registry
    }

    fn hit(id: &str, title: &str, number: u32, text: &str) -> SearchHit {
        IndexedDocument {
            episode_id: id.to_string(),
            episode_title: title.to_string(),
            episode_number: number,
            text: text.to_string(),
            start_time: None,
            end_time: None,
        }
    }

    fn episode(id: &str, video_url: &str, audio_url: &str) -> Episode {
        Episode {
            episode_id: id.to_string(),
            title: "Title".to_string(),
            number: 1,
            transcript: "full text".to_string(),
            video_url: video_url.to_string(),
            audio_url: audio_url.to_string(),
        }
    }

    #[test]
    fn test_truncate_excerpt_boundaries() {
        let long = "x".repeat(250);
        let truncated = truncate_excerpt(&long, 200);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));

        let short = "y".repeat(150);
        assert_eq!(truncate_excerpt(&short, 200), short);

        // Exact-length text is not marked as truncated.
        let exact = "z".repeat(200);
        assert_eq!(truncate_excerpt(&exact, 200), exact);
    }

    #[test]
    fn test_context_blocks_are_labeled_and_joined() {
        let registry = registry_with(vec![]);
        let hits = vec![
            hit("ep1", "Alpha", 1, "first passage"),
            hit("ep2", "Beta", 2, "second passage"),
        ];

        let (context, sources) = assemble(&hits, &registry);
        assert_eq!(
            context,
            "[Episode: Alpha] first passage\n\n[Episode: Beta] second passage"
        );
        assert_eq!(sources.len(), hits.len());
        assert_eq!(sources[0].episode_title, "Alpha");
        assert_eq!(sources[1].episode_title, "Beta");
    }

    #[test]
    fn test_links_omitted_when_urls_empty() {
        let registry = registry_with(vec![episode("ep1", "", "")]);
        let (_, sources) = assemble(&[hit("ep1", "T", 1, "text")], &registry);

        assert!(sources[0].video_link.is_none());
        assert!(sources[0].audio_link.is_none());
        assert_eq!(sources[0].timestamp, "");
    }

    #[test]
    fn test_links_without_timestamp_are_bare_urls() {
        let registry = registry_with(vec![episode(
            "ep1",
            "https://youtube.com/watch?v=X",
            "https://pod.example.com/ep1.mp3",
        )]);
        let (_, sources) = assemble(&[hit("ep1", "T", 1, "text")], &registry);

        assert_eq!(
            sources[0].video_link.as_deref(),
            Some("https://youtube.com/watch?v=X")
        );
        assert_eq!(
            sources[0].audio_link.as_deref(),
            Some("https://pod.example.com/ep1.mp3")
        );
    }

    #[test]
    fn test_links_with_timestamp_deep_link() {
        let registry = registry_with(vec![episode(
            "ep1",
            "https://youtube.com/watch?v=X",
            "https://pod.example.com/ep1.mp3",
        )]);
        let mut timestamped = hit("ep1", "T", 1, "text");
        timestamped.start_time = Some("05:30".to_string());

        let (_, sources) = assemble(&[timestamped], &registry);
        assert_eq!(sources[0].timestamp, "05:30");
        assert_eq!(
            sources[0].video_link.as_deref(),
            Some("https://youtube.com/watch?v=X&t=330")
        );
        assert_eq!(
            sources[0].audio_link.as_deref(),
            Some("https://pod.example.com/ep1.mp3#t=330")
        );
    }

    #[test]
    fn test_unknown_episode_yields_no_links() {
        let registry = registry_with(vec![]);
        let (_, sources) = assemble(&[hit("ghost", "T", 1, "text")], &registry);
        assert!(sources[0].video_link.is_none());
        assert!(sources[0].audio_link.is_none());
    }
}
