//! CLI output formatting utilities.

use crate::rag::Source;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print one episode listing line.
    pub fn episode_line(number: u32, title: &str) {
        println!("  {} {}", style(format!("#{:3}", number)).cyan(), title);
    }

    /// Print a numbered source citation.
    pub fn source(position: usize, source: &Source) {
        println!(
            "\n  [{}] Episode #{}: {}",
            position,
            source.episode_number,
            style(&source.episode_title).bold()
        );
        if !source.timestamp.is_empty() {
            println!("      Timestamp: {}", style(&source.timestamp).cyan());
        }
        println!("      \"{}\"", source.excerpt);
        if let Some(link) = &source.video_link {
            println!("      Video: {}", style(link).dim());
        }
        if let Some(link) = &source.audio_link {
            println!("      Audio: {}", style(link).dim());
        }
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
