//! Transcript corpus loading.
//!
//! The corpus input is a JSON array of episode records. Loading is atomic:
//! the whole file is parsed and validated before anything is ingested, so a
//! malformed record never leaves partial state behind.

use crate::error::{PodbotnikError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One episode record from a transcripts JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub episode_id: String,
    pub episode_title: String,
    pub episode_number: u32,
    pub transcript: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub audio_url: String,
}

/// A timestamped segment of an episode transcript.
///
/// Segment-level ingestion is what makes per-citation timestamps and deep
/// links possible; whole-transcript ingestion leaves the timestamp empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Segment start ("MM:SS" or "HH:MM:SS").
    pub start_time: String,
    /// Segment end.
    pub end_time: String,
    /// Segment text.
    pub text: String,
}

/// Read and validate a transcripts JSON file.
///
/// Fails wholesale on the first schema violation; callers ingest the
/// returned records only after this succeeds.
pub fn read_corpus(path: &Path) -> Result<Vec<TranscriptRecord>> {
    if !path.exists() {
        return Err(PodbotnikError::Corpus(format!(
            "Transcript file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<TranscriptRecord> = serde_json::from_str(&content)
        .map_err(|e| PodbotnikError::Corpus(format!("Malformed transcript file: {}", e)))?;

    for record in &records {
        validate(record)?;
    }

    Ok(records)
}

fn validate(record: &TranscriptRecord) -> Result<()> {
    if record.episode_id.trim().is_empty() {
        return Err(PodbotnikError::Corpus(
            "Episode record with empty episode_id".to_string(),
        ));
    }
    if record.episode_number == 0 {
        return Err(PodbotnikError::Corpus(format!(
            "Episode {}: episode_number must be positive",
            record.episode_id
        )));
    }
    Ok(())
}
