//! Ask command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;
use std::path::Path;

/// Run the ask command.
pub async fn run_ask(
    transcripts: &str,
    question: &str,
    num_sources: usize,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let spinner = Output::spinner("Loading transcripts...");
    let engine = match super::load_engine(Path::new(transcripts), model, &settings).await {
        Ok(engine) => engine,
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to load transcripts: {}", e));
            return Err(e);
        }
    };

    spinner.set_message("Thinking...");

    match engine.answer(question, num_sources).await {
        Ok(result) => {
            spinner.finish_and_clear();

            println!("\n{}\n", result.answer);

            if !result.sources.is_empty() {
                Output::header("Sources");
                for (i, source) in result.sources.iter().enumerate() {
                    Output::source(i + 1, source);
                }
                println!();
            }
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
