//! Language entries and the code → entry dictionary.

use std::collections::{
    BTreeMap,
    HashMap,
};

/// Reserved key carrying the display name of a language.
pub const LANGUAGE_NAME: &str = "language_name";
/// Reserved key carrying the translator attribution.
pub const LANGUAGE_TRANSLATOR: &str = "language_translator";
/// Reserved key carrying the translator contact address.
pub const TRANSLATOR_EMAIL: &str = "translator_e-mail";
/// Reserved key carrying the last-modified date.
pub const LAST_CHANGED: &str = "last_changed";

/// Code of the base language. Its entry is never stripped.
pub const BASE_LANGUAGE: &str = "en";

/// Returns true if `key` names a metadata field rather than a phrase.
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    matches!(key, LANGUAGE_NAME | LANGUAGE_TRANSLATOR | TRANSLATOR_EMAIL | LAST_CHANGED)
}

/// Metadata stored alongside the phrases of a language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMeta {
    pub language_name: Option<String>,
    pub language_translator: Option<String>,
    pub translator_email: Option<String>,
    pub last_changed: Option<String>,
}

/// One language: metadata plus phrase-key → translation map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageEntry {
    meta: LanguageMeta,
    phrases: HashMap<String, String>,
}

impl LanguageEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entry holding only metadata.
    #[must_use]
    pub fn with_meta(meta: LanguageMeta) -> Self {
        Self { meta, phrases: HashMap::new() }
    }

    #[must_use]
    pub const fn meta(&self) -> &LanguageMeta {
        &self.meta
    }

    /// Stores `value` under `key`.
    ///
    /// Reserved keys update the metadata instead of the phrase map.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            LANGUAGE_NAME => self.meta.language_name = Some(value),
            LANGUAGE_TRANSLATOR => self.meta.language_translator = Some(value),
            TRANSLATOR_EMAIL => self.meta.translator_email = Some(value),
            LAST_CHANGED => self.meta.last_changed = Some(value),
            _ => {
                self.phrases.insert(key, value);
            }
        }
    }

    /// Looks up a phrase.
    ///
    /// - `None`: the phrase is not declared in this entry
    /// - `Some("")`: declared, but not translated yet
    /// - `Some(value)`: the translation
    #[must_use]
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.phrases.get(phrase).map(String::as_str)
    }

    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Drops every phrase and the contact address.
    ///
    /// Name, translator and date survive so the language can still be listed.
    pub fn strip(&mut self) {
        self.phrases = HashMap::new();
        self.meta.translator_email = None;
    }
}

impl<K, V> FromIterator<(K, V)> for LanguageEntry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entry = Self::new();
        for (key, value) in iter {
            entry.set(key, value);
        }
        entry
    }
}

/// Language code → entry, ordered by code.
pub type Dictionary = BTreeMap<String, LanguageEntry>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn sample_entry() -> LanguageEntry {
        [
            (LANGUAGE_NAME, "Deutsch"),
            (LANGUAGE_TRANSLATOR, "Jens Mönig"),
            (TRANSLATOR_EMAIL, "jens@moenig.org"),
            (LAST_CHANGED, "2025-03-24"),
            ("Hello", "Hallo"),
            ("Stop", ""),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    #[case::name(LANGUAGE_NAME, true)]
    #[case::translator(LANGUAGE_TRANSLATOR, true)]
    #[case::email(TRANSLATOR_EMAIL, true)]
    #[case::date(LAST_CHANGED, true)]
    #[case::phrase("Hello", false)]
    #[case::similar("language", false)]
    fn test_is_reserved_key(#[case] key: &str, #[case] expected: bool) {
        assert_that!(is_reserved_key(key), eq(expected));
    }

    #[googletest::test]
    fn reserved_keys_go_to_metadata() {
        let entry = sample_entry();

        expect_that!(entry.meta().language_name.as_deref(), some(eq("Deutsch")));
        expect_that!(entry.meta().language_translator.as_deref(), some(eq("Jens Mönig")));
        expect_that!(entry.meta().translator_email.as_deref(), some(eq("jens@moenig.org")));
        expect_that!(entry.meta().last_changed.as_deref(), some(eq("2025-03-24")));
        expect_that!(entry.lookup(LANGUAGE_NAME), none());
        expect_that!(entry.phrase_count(), eq(2));
    }

    #[googletest::test]
    fn lookup_distinguishes_absent_and_empty() {
        let entry = sample_entry();

        expect_that!(entry.lookup("Hello"), some(eq("Hallo")));
        expect_that!(entry.lookup("Stop"), some(eq("")));
        expect_that!(entry.lookup("Go"), none());
    }

    #[googletest::test]
    fn strip_keeps_listing_metadata() {
        let mut entry = sample_entry();

        entry.strip();

        expect_that!(entry.phrase_count(), eq(0));
        expect_that!(entry.lookup("Hello"), none());
        expect_that!(entry.meta().language_name.as_deref(), some(eq("Deutsch")));
        expect_that!(entry.meta().language_translator.as_deref(), some(eq("Jens Mönig")));
        expect_that!(entry.meta().last_changed.as_deref(), some(eq("2025-03-24")));
        expect_that!(entry.meta().translator_email.as_deref(), none());
    }

    #[googletest::test]
    fn later_set_overwrites_phrase() {
        let mut entry = sample_entry();

        entry.set("Hello", "Servus");

        expect_that!(entry.lookup("Hello"), some(eq("Servus")));
    }
}
