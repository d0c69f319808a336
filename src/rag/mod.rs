//! Retrieval-augmented answering over the transcript corpus.
//!
//! Retrieves the most relevant transcript passages for a question, builds a
//! grounded prompt, and packages the generated answer with traceable source
//! citations.

pub mod context;
mod engine;

pub use engine::AnswerEngine;

use serde::{Deserialize, Serialize};

/// A citable source backing part of an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// Title of the episode the passage came from.
    pub episode_title: String,
    /// Episode number.
    pub episode_number: u32,
    /// Retrieved text, truncated to a display-friendly length.
    pub excerpt: String,
    /// Playback position ("MM:SS" or "HH:MM:SS"), empty when the corpus was
    /// ingested without segment timestamps.
    pub timestamp: String,
    /// Deep link into the video, present only when the episode has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_link: Option<String>,
    /// Deep link into the audio, present only when the episode has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_link: Option<String>,
}

/// The result of answering one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Generated answer, or a fixed notice when retrieval found nothing.
    pub answer: String,
    /// Sources in the ranking order the index returned them.
    pub sources: Vec<Source>,
    /// Number of transcript segments fed to the generator.
    pub context_used: usize,
}
