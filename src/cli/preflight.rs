//! Pre-flight checks before LLM-touching operations.
//!
//! Validates required configuration up front so a command fails with a clear
//! message instead of midway through answering.

use crate::config::Settings;
use crate::error::{PodbotnikError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Asking questions requires an LLM API key.
    Ask,
    /// Search is fully in-process.
    Search,
}

/// Run pre-flight checks for the given operation.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Ask => check_api_key(&settings.llm.api_key_env),
        Operation::Search => Ok(()),
    }
}

/// Check that the configured API key variable is set and non-empty.
fn check_api_key(var: &str) -> Result<()> {
    match std::env::var(var) {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(PodbotnikError::Config(format!(
            "{var} is empty. Set it with: export {var}='...'"
        ))),
        Err(_) => Err(PodbotnikError::Config(format!(
            "{var} not set. Set it with: export {var}='...'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_has_no_requirements() {
        assert!(check(Operation::Search, &Settings::default()).is_ok());
    }

    #[test]
    fn test_unset_key_reports_variable_name() {
        let mut settings = Settings::default();
        settings.llm.api_key_env = "PODBOTNIK_TEST_UNSET_KEY".to_string();
        let err = check(Operation::Ask, &settings).unwrap_err();
        assert!(err.to_string().contains("PODBOTNIK_TEST_UNSET_KEY"));
    }
}
