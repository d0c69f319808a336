//! Configuration management for Podbotnik.

mod settings;

pub use settings::{GeneralSettings, LlmSettings, RagSettings, Settings};
