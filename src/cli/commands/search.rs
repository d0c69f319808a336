//! Search command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::generation::DisabledGenerator;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Run the search command.
pub async fn run_search(
    transcripts: &str,
    query: &str,
    limit: usize,
    settings: Settings,
) -> Result<()> {
    let engine = super::load_engine_with(
        Path::new(transcripts),
        Arc::new(DisabledGenerator),
        &settings,
    )
    .await?;

    let spinner = Output::spinner("Searching...");
    let hits = engine.search(query, limit).await;
    spinner.finish_and_clear();

    match hits {
        Ok(hits) => {
            if hits.is_empty() {
                Output::warning("No results found matching your query.");
            } else {
                Output::success(&format!("Found {} result(s)", hits.len()));
                let sources = engine.sources_for(&hits);
                for (i, source) in sources.iter().enumerate() {
                    Output::source(i + 1, source);
                }
                println!();
            }
        }
        Err(e) => {
            Output::error(&format!("Search failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
