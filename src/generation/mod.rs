//! Answer generation abstraction.
//!
//! The language model is an opaque text-completion oracle behind a trait, so
//! vendors can be swapped (or mocked in tests) without touching the engine.

mod openai;

pub use openai::ChatGenerator;


use crate::error::Result;
use async_trait::async_trait;

/// Trait for answer generation backends.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Generate text for `prompt`, bounded by `max_tokens`.
    ///
    /// Backend failures (unreachable, rate-limited, rejected request) are
    /// returned as errors and never swallowed.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

/// Backend for flows that never generate (listing, direct search).
///
/// Any attempt to generate through it is a configuration error.
pub struct DisabledGenerator;

#[async_trait]
impl AnswerGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
        Err(crate::error::PodbotnikError::Generation(
            "No LLM backend configured for this command".to_string(),
        ))
    }
}
