//! Values whose translation is deferred until they are displayed.
//!
//! Menu records and similar data are often built long before they are
//! rendered, and the active language may change in between. Such values hold
//! the canonical phrase as `Text::Deferred` and are translated by [`display`].

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::translator::Translator;

/// Opening mark around a resolved deferred value.
const OPEN_QUOTE: char = '«';
/// Closing mark around a resolved deferred value.
const CLOSE_QUOTE: char = '»';

/// Text that is either shown as-is or translated at display time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Text {
    /// Already a display value.
    Literal(String),
    /// Canonical phrase, translated when displayed.
    Deferred(String),
}

impl Text {
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    #[must_use]
    pub fn deferred(phrase: impl Into<String>) -> Self {
        Self::Deferred(phrase.into())
    }

    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// Shows the canonical value, untranslated.
impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(option(self))
    }
}

/// Localized presentation of `data`.
///
/// - `None` → empty string
/// - `Deferred` → translated phrase wrapped in « »
/// - `Literal` → the text unchanged
#[must_use]
pub fn display(translator: &Translator, data: Option<&Text>) -> String {
    match data {
        None => String::new(),
        Some(Text::Deferred(phrase)) => {
            format!("{OPEN_QUOTE}{}{CLOSE_QUOTE}", translator.translate(phrase))
        }
        Some(Text::Literal(text)) => text.clone(),
    }
}

/// Canonical value of `data`, for comparisons and program logic.
#[must_use]
pub fn option(data: &Text) -> &str {
    match data {
        Text::Literal(text) | Text::Deferred(text) => text,
    }
}
