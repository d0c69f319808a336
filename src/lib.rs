//! Podbotnik - Podcast Transcript Q&A
//!
//! A retrieval-augmented answering engine over a library of podcast episode
//! transcripts: ask a natural-language question, get an answer grounded in
//! the most relevant transcript passages, with citations that deep-link to
//! the exact playback moment.
//!
//! # Overview
//!
//! Podbotnik lets you:
//! - Load a JSON corpus of episode transcripts and index it in memory
//! - Ask questions and get concise LLM answers with traceable sources
//! - Search transcripts directly, without answer generation
//! - Serve the whole thing over a small REST API
//!
//! # Architecture
//!
//! - `config` - Configuration management
//! - `registry` - In-memory episode metadata store
//! - `corpus` - Transcript corpus loading and validation
//! - `timestamp` - Clock parsing and platform-aware deep links
//! - `search` - Search index abstraction + bundled TF-IDF backend
//! - `generation` - LLM answer generation abstraction
//! - `rag` - The answering engine
//! - `cli` - Command-line interface and the HTTP server
//!
//! # Example
//!
//! ```rust,no_run
//! use podbotnik::generation::ChatGenerator;
//! use podbotnik::config::Settings;
//! use podbotnik::rag::AnswerEngine;
//! use podbotnik::search::MemoryIndex;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let engine = AnswerEngine::new(
//!         Arc::new(MemoryIndex::new()),
//!         Arc::new(ChatGenerator::from_settings(&settings.llm)?),
//!     );
//!
//!     engine.load_corpus(Path::new("transcripts.json")).await?;
//!     let result = engine.answer("What was said about Rust?", 3).await?;
//!     println!("{}", result.answer);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod generation;
pub mod rag;
pub mod registry;
pub mod search;
pub mod timestamp;

pub use error::{PodbotnikError, Result};
