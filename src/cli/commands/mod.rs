//! CLI command implementations.

mod ask;
mod chat;
mod config;
mod list;
mod search;
mod serve;

pub use ask::run_ask;
pub use chat::run_chat;
pub use config::run_config;
pub use list::run_list;
pub use search::run_search;
pub use serve::run_serve;

use crate::config::Settings;
use crate::generation::{AnswerGenerator, ChatGenerator};
use crate::rag::AnswerEngine;
use crate::search::MemoryIndex;
use std::path::Path;
use std::sync::Arc;

/// Build an engine with the configured LLM backend and load the corpus.
async fn load_engine(
    transcripts: &Path,
    model: Option<String>,
    settings: &Settings,
) -> anyhow::Result<AnswerEngine> {
    let mut llm = settings.llm.clone();
    if let Some(model) = model {
        llm.model = model;
    }
    let generator = Arc::new(ChatGenerator::from_settings(&llm)?);
    load_engine_with(transcripts, generator, settings).await
}

/// Build an engine over a caller-supplied generator and load the corpus.
async fn load_engine_with(
    transcripts: &Path,
    generator: Arc<dyn AnswerGenerator>,
    settings: &Settings,
) -> anyhow::Result<AnswerEngine> {
    let engine = AnswerEngine::new(Arc::new(MemoryIndex::new()), generator)
        .with_max_answer_tokens(settings.rag.max_answer_tokens);
    engine.load_corpus(transcripts).await?;
    Ok(engine)
}
