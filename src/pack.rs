//! Language pack input
//!
//! A language pack is a JSON file holding one flat object of canonical
//! phrase → translation, with the metadata keys (`language_name`,
//! `language_translator`, `translator_e-mail`, `last_changed`) mixed in.
//! Comments and trailing commas are accepted.

use std::path::Path;

use jsonc_parser::ParseOptions;
use serde_json::Value;
use thiserror::Error;

use crate::dictionary::LanguageEntry;

/// File name prefix stripped when deriving the language code.
const PACK_FILE_PREFIX: &str = "lang-";

#[derive(Error, Debug)]
pub enum PackError {
    #[error("Failed to read language pack: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse language pack: {0}")]
    Parse(String),

    #[error("Language pack must be a JSON object")]
    NotAnObject,

    #[error("Cannot derive a language code from '{0}'")]
    InvalidLanguageCode(String),
}

/// Returns true if `code` is usable as a language code (e.g. "en", "zh_CN").
#[must_use]
pub fn is_valid_language_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Derives the language code from a pack file name.
///
/// # Examples
/// - `locale/lang-de.json` → `de`
/// - `lang-zh_CN.json` → `zh_CN`
/// - `packs/ja_HIRA.json` → `ja_HIRA`
#[must_use]
pub fn language_code_from_path(file_path: &Path) -> Option<String> {
    let stem = file_path.file_stem()?.to_str()?;
    let code = stem.strip_prefix(PACK_FILE_PREFIX).unwrap_or(stem);
    is_valid_language_code(code).then(|| code.to_string())
}

/// Parses pack text into a language entry.
///
/// - strings are stored as they are
/// - `null` becomes an empty (untranslated) phrase
/// - numbers and booleans are stored as their JSON text
/// - nested objects and arrays are skipped
///
/// # Errors
/// Returns error if the text is not JSON or its root is not an object.
pub fn parse_language_pack(text: &str) -> Result<LanguageEntry, PackError> {
    let value = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|e| PackError::Parse(e.to_string()))?;

    let Some(Value::Object(map)) = value else {
        return Err(PackError::NotAnObject);
    };

    let mut entry = LanguageEntry::new();
    for (key, value) in map {
        match value {
            Value::String(s) => entry.set(key, s),
            Value::Null => entry.set(key, String::new()),
            Value::Bool(_) | Value::Number(_) => entry.set(key, value.to_string()),
            Value::Object(_) | Value::Array(_) => {
                tracing::warn!(phrase = %key, "Skipping nested value in language pack");
            }
        }
    }

    Ok(entry)
}

/// Reads a pack file and returns its language code and entry.
///
/// # Errors
/// Returns error if the code cannot be derived, or file read or parse fails.
pub fn load_language_pack(file_path: &Path) -> Result<(String, LanguageEntry), PackError> {
    let code = language_code_from_path(file_path)
        .ok_or_else(|| PackError::InvalidLanguageCode(file_path.display().to_string()))?;

    let content = std::fs::read_to_string(file_path)?;
    let entry = parse_language_pack(&content)?;

    tracing::debug!(
        language = %code,
        phrases = entry.phrase_count(),
        "Loaded language pack from {:?}",
        file_path
    );

    Ok((code, entry))
}
