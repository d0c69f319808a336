//! Interactive question-answering session.
//!
//! Each question is answered independently against the loaded corpus; there
//! is no cross-turn conversational state.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Run the interactive chat command.
pub async fn run_chat(
    transcripts: Option<String>,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let transcripts = match transcripts.map(PathBuf::from).or(settings.transcripts_file()) {
        Some(path) => path,
        None => {
            Output::error("No transcripts file. Pass --transcripts or set general.transcripts_file.");
            anyhow::bail!("no transcripts file configured");
        }
    };

    let spinner = Output::spinner("Loading transcripts...");
    let engine = super::load_engine(&transcripts, model, &settings).await?;
    spinner.finish_and_clear();

    let episodes = engine.list_episodes();
    Output::success(&format!("Loaded {} episode(s):", episodes.len()));
    for ep in &episodes {
        Output::episode_line(ep.number, &ep.title);
    }

    println!(
        "\n{}\n",
        style("Ask your questions. Type 'list' to show episodes, 'quit' to exit.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("list") {
            println!();
            for ep in engine.list_episodes() {
                Output::episode_line(ep.number, &ep.title);
            }
            println!();
            continue;
        }

        let spinner = Output::spinner("Thinking...");
        match engine.answer(input, settings.rag.max_context_segments).await {
            Ok(result) => {
                spinner.finish_and_clear();
                println!(
                    "\n{} {}\n",
                    style("Podbotnik:").cyan().bold(),
                    result.answer
                );

                if !result.sources.is_empty() {
                    println!("{}", style("Sources:").bold());
                    for (i, source) in result.sources.iter().enumerate() {
                        Output::source(i + 1, source);
                    }
                    println!();
                }
            }
            Err(e) => {
                spinner.finish_and_clear();
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}
