//! Server configuration
//!
//! Controls which documents the completion provider is registered for and which
//! characters trigger it. Values come from, in increasing precedence: built-in
//! defaults, environment variables, command-line flags.

use tower_lsp::lsp_types::DocumentFilter;

pub const DEFAULT_LANGUAGE_ID: &str = "japy";
pub const DEFAULT_FILE_PATTERN: &str = "**/*.japy";
pub const DEFAULT_TRIGGER_CHARACTERS: &[&str] = &[".", " ", "\n", "\t"];

pub const LANGUAGE_ID_ENV: &str = "JAPY_LANGUAGE_ID";
pub const FILE_PATTERN_ENV: &str = "JAPY_FILE_PATTERN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Language identifier the client assigns to JaPy documents
    pub language_id: String,
    /// Glob matching JaPy files, used alongside the language id
    pub file_pattern: String,
    pub trigger_characters: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            language_id: DEFAULT_LANGUAGE_ID.to_string(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            trigger_characters: DEFAULT_TRIGGER_CHARACTERS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Reads overrides from `JAPY_LANGUAGE_ID` and `JAPY_FILE_PATTERN`.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(language_id) = lookup(LANGUAGE_ID_ENV).filter(|v| !v.trim().is_empty()) {
            config.language_id = language_id.trim().to_string();
        }
        if let Some(pattern) = lookup(FILE_PATTERN_ENV).filter(|v| !v.trim().is_empty()) {
            config.file_pattern = pattern.trim().to_string();
        }
        config
    }

    /// Applies command-line overrides on top of the current values.
    pub fn with_overrides(mut self, language_id: Option<String>, file_pattern: Option<String>) -> Self {
        if let Some(language_id) = language_id {
            self.language_id = language_id;
        }
        if let Some(file_pattern) = file_pattern {
            self.file_pattern = file_pattern;
        }
        self
    }

    /// Document selector used when registering the completion provider
    pub fn document_selector(&self) -> Vec<DocumentFilter> {
        vec![DocumentFilter {
            language: Some(self.language_id.clone()),
            scheme: None,
            pattern: Some(self.file_pattern.clone()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.language_id, "japy");
        assert_eq!(config.file_pattern, "**/*.japy");
        assert_eq!(config.trigger_characters, vec![".", " ", "\n", "\t"]);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            [(LANGUAGE_ID_ENV, " japy-dev "), (FILE_PATTERN_ENV, "**/*.jpy")].into_iter().collect();
        let config = ServerConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.language_id, "japy-dev");
        assert_eq!(config.file_pattern, "**/*.jpy");
    }

    #[test]
    fn test_blank_env_ignored() {
        let config = ServerConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = ServerConfig::default().with_overrides(Some("ジャパイ".to_string()), None);
        assert_eq!(config.language_id, "ジャパイ");
        assert_eq!(config.file_pattern, DEFAULT_FILE_PATTERN);
    }

    #[test]
    fn test_document_selector() {
        let selector = ServerConfig::default().document_selector();
        assert_eq!(selector.len(), 1);
        assert_eq!(selector[0].language.as_deref(), Some("japy"));
        assert_eq!(selector[0].pattern.as_deref(), Some("**/*.japy"));
    }
}
