use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::context::PenColorModel;
use crate::pack::is_valid_language_code;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languagePacks.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    /// Language selected at startup.
    pub language: String,

    /// Read by the "brightness" → "lightness" rewording.
    pub pen_color_model: PenColorModel,

    pub language_packs: LanguagePacksConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguagePacksConfig {
    /// Globs relative to the root directory.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl LocaleSettings {
    /// # Errors
    /// - Language code is empty or malformed
    /// - No include pattern
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.language.is_empty() {
            errors.push(ValidationError::new(
                "language",
                "The language cannot be empty. Please specify a language code, for example: \"en\"",
            ));
        } else if !is_valid_language_code(&self.language) {
            errors.push(ValidationError::new(
                "language",
                format!(
                    "Invalid language code '{}'. Use letters, digits and '_' only (e.g., \"zh_CN\")",
                    self.language
                ),
            ));
        }

        if self.language_packs.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "languagePacks.includePatterns",
                "At least one pattern is required. Example: [\"**/lang-*.json\"]",
            ));
        }

        for (index, pattern) in self.language_packs.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("languagePacks.includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.language_packs.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("languagePacks.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LanguagePacksConfig {
    fn default() -> Self {
        Self { include_patterns: vec!["**/lang-*.json".to_string()], exclude_patterns: Vec::new() }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            pen_color_model: PenColorModel::default(),
            language_packs: LanguagePacksConfig::default(),
        }
    }
}
