//! List command implementation.

use crate::cli::Output;
use crate::corpus;
use crate::registry::{Episode, EpisodeRegistry};
use anyhow::Result;
use std::path::Path;

/// Run the list command.
///
/// Listing never touches search or the LLM; it reads the corpus and prints
/// episodes in display order.
pub fn run_list(transcripts: &str) -> Result<()> {
    let records = corpus::read_corpus(Path::new(transcripts))?;

    let registry = EpisodeRegistry::new();
    for record in records {
        registry.put(Episode {
            episode_id: record.episode_id,
            title: record.episode_title,
            number: record.episode_number,
            transcript: record.transcript,
            video_url: record.video_url,
            audio_url: record.audio_url,
        });
    }

    let episodes = registry.list();
    if episodes.is_empty() {
        Output::info("No episodes in this transcripts file.");
        return Ok(());
    }

    Output::header(&format!("Episodes in {}", transcripts));
    println!();
    for ep in &episodes {
        Output::episode_line(ep.number, &ep.title);
    }
    println!();
    Output::kv("Total", &format!("{} episode(s)", episodes.len()));

    Ok(())
}
