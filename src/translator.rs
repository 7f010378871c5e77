//! Phrase translation against the active language.

use crate::builtin::builtin_dictionary;
use crate::config::LocaleSettings;
use crate::context::{
    PenColorModel,
    TranslationContext,
};
use crate::dictionary::{
    BASE_LANGUAGE,
    Dictionary,
    LanguageEntry,
};

/// Separator between the fields of a credits line.
const CREDITS_SEPARATOR: &str = " - ";

/// Translates canonical (English) UI phrases into the active language.
///
/// Unknown phrases, untranslated phrases and unknown languages all fall back
/// to the canonical phrase. Translation never fails.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Active language code
    language: String,
    /// Language code → entry
    dict: Dictionary,
    /// State read by `contextualize`
    context: TranslationContext,
}

impl Default for Translator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Translator {
    /// Creates a translator over `dict` with English active.
    #[must_use]
    pub fn new(dict: Dictionary) -> Self {
        Self { language: BASE_LANGUAGE.to_string(), dict, context: TranslationContext::default() }
    }

    /// Creates a translator over the shipped dictionary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_dictionary())
    }

    /// Creates a translator over the shipped dictionary, configured by `settings`.
    #[must_use]
    pub fn from_settings(settings: &LocaleSettings) -> Self {
        let mut translator = Self::builtin();
        translator.set_pen_color_model(settings.pen_color_model);
        translator.set_language(settings.language.clone());
        translator
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Selects the active language.
    ///
    /// Codes without an entry are accepted; lookups then fall back to the
    /// canonical phrase until an entry is merged under that code.
    pub fn set_language(&mut self, code: impl Into<String>) {
        let code = code.into();
        if !self.dict.contains_key(&code) {
            tracing::debug!(language = %code, "Selected language has no dictionary entry");
        }
        self.language = code;
    }

    #[must_use]
    pub const fn context(&self) -> TranslationContext {
        self.context
    }

    pub const fn set_pen_color_model(&mut self, model: PenColorModel) {
        self.context.pen_color_model = model;
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    #[must_use]
    pub fn entry(&self, code: &str) -> Option<&LanguageEntry> {
        self.dict.get(code)
    }

    /// Stores `entry` under `code`, replacing any previous entry.
    pub fn merge(&mut self, code: impl Into<String>, entry: LanguageEntry) {
        let code = code.into();
        tracing::debug!(language = %code, phrases = entry.phrase_count(), "Merging language entry");
        self.dict.insert(code, entry);
    }

    /// Maps a phrase to the key it is looked up under.
    ///
    /// Applies regardless of the active language, English included.
    #[must_use]
    pub fn contextualize<'a>(&self, phrase: &'a str) -> &'a str {
        match phrase {
            "Error" => "Hmm...",
            "brightness" if self.context.pen_color_model == PenColorModel::Hsl => "lightness",
            "r-g-b-a" => "RGBA",
            "r-g-b(-a)" => "RGB(A)",
            _ => phrase,
        }
    }

    /// Translates `phrase` into the active language.
    #[must_use]
    pub fn translate(&self, phrase: &str) -> String {
        let key = self.contextualize(phrase);
        self.dict
            .get(&self.language)
            .and_then(|entry| entry.lookup(key))
            .filter(|value| !value.is_empty())
            .unwrap_or(key)
            .to_string()
    }

    /// All language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.dict.keys().map(String::as_str).collect()
    }

    /// Display name of a language, or the code itself if it has none.
    ///
    /// An empty name counts as none.
    #[must_use]
    pub fn language_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.dict
            .get(code)
            .and_then(|entry| entry.meta().language_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(code)
    }

    #[must_use]
    pub fn translator_email(&self, code: &str) -> Option<&str> {
        self.dict.get(code).and_then(|entry| entry.meta().translator_email.as_deref())
    }

    #[must_use]
    pub fn last_changed(&self, code: &str) -> Option<&str> {
        self.dict.get(code).and_then(|entry| entry.meta().last_changed.as_deref())
    }

    /// One line per language: name, code, translator and date.
    ///
    /// Every line starts with a newline.
    #[must_use]
    pub fn credits(&self) -> String {
        self.dict
            .iter()
            .map(|(code, entry)| {
                let meta = entry.meta();
                format!(
                    "\n{name} ({code}){CREDITS_SEPARATOR}{translator}{CREDITS_SEPARATOR}{date}",
                    name = self.language_name(code),
                    translator = meta.language_translator.as_deref().unwrap_or_default(),
                    date = meta.last_changed.as_deref().unwrap_or_default(),
                )
            })
            .collect()
    }

    /// Strips every language except English down to its listing metadata.
    pub fn unload(&mut self) {
        for (code, entry) in &mut self.dict {
            if code != BASE_LANGUAGE {
                entry.strip();
            }
        }
        tracing::debug!("Unloaded translated phrases");
    }
}
