//! Translation behavior through the public API

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::fs;

use googletest::prelude::*;
use rstest::rstest;
use tempfile::TempDir;
use ui_locale::config::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
use ui_locale::discovery::load_language_packs;
use ui_locale::{
    PenColorModel,
    Text,
    Translator,
    display,
    option,
};

const GERMAN_PACK: &str = r#"{
    "language_name": "Deutsch", // shown in the language menu
    "language_translator": "Jens Mönig, Jadga Hügle",
    "translator_e-mail": "jens@moenig.org",
    "last_changed": "2025-03-24",

    "Hello": "Hallo",
    "Hmm...": "Hm...",
    "Error": "Fehler",
    "brightness": "Helligkeit",
    "lightness": "Leuchtkraft",
    "Stop": "",
}"#;

fn german_root() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("locale")).unwrap();
    fs::write(temp_dir.path().join("locale/lang-de.json"), GERMAN_PACK).unwrap();
    temp_dir
}

fn german_translator(root: &TempDir) -> Translator {
    let mut manager = ConfigManager::new();
    manager.load_settings(Some(root.path().to_path_buf())).unwrap();
    let settings = manager.get_settings();

    let mut translator = Translator::from_settings(settings);
    let report = load_language_packs(&mut translator, root.path(), settings).unwrap();
    assert!(report.is_clean());
    translator.set_language("de");
    translator
}

#[rstest]
#[case::unknown_phrase("Save as...")]
#[case::empty_phrase("")]
#[case::metadata_key("translator_e-mail")]
fn untranslated_phrases_pass_through(#[case] phrase: &str) {
    let root = german_root();
    let translator = german_translator(&root);

    assert_that!(translator.translate(phrase), eq(phrase));
}

#[rstest]
#[case::english("en", "Hmm...")]
#[case::german("de", "Hm...")]
#[case::metadata_only("ja", "Hmm...")]
#[case::unknown("xx", "Hmm...")]
fn error_is_never_looked_up_directly(#[case] language: &str, #[case] expected: &str) {
    let root = german_root();
    let mut translator = german_translator(&root);
    translator.set_language(language);

    assert_that!(translator.translate("Error"), eq(expected));
}

#[googletest::test]
fn brightness_depends_on_pen_color_model() {
    let root = german_root();
    let mut translator = german_translator(&root);

    expect_that!(translator.translate("brightness"), eq("Helligkeit"));

    translator.set_pen_color_model(PenColorModel::Hsl);
    expect_that!(translator.translate("brightness"), eq("Leuchtkraft"));
}

#[googletest::test]
fn settings_file_selects_language_and_model() {
    let root = german_root();
    fs::write(root.path().join(CONFIG_FILE_NAME), r#"{"language": "de", "penColorModel": "hsl"}"#)
        .unwrap();

    let mut manager = ConfigManager::new();
    manager.load_settings(Some(root.path().to_path_buf())).unwrap();
    let settings = manager.get_settings();
    let mut translator = Translator::from_settings(settings);
    load_language_packs(&mut translator, root.path(), settings).unwrap();

    expect_that!(translator.language(), eq("de"));
    expect_that!(translator.translate("brightness"), eq("Leuchtkraft"));
}

#[googletest::test]
fn languages_are_sorted_unique_and_include_english() {
    let root = german_root();
    let translator = german_translator(&root);
    let languages = translator.languages();

    let mut expected = languages.clone();
    expected.sort_unstable();
    expected.dedup();

    expect_that!(languages.contains(&"en"), eq(true));
    expect_that!(languages.contains(&"de"), eq(true));
    assert_eq!(languages, expected);
}

#[googletest::test]
fn unload_falls_back_to_english_and_keeps_names() {
    let root = german_root();
    let mut translator = german_translator(&root);
    expect_that!(translator.translate("Hello"), eq("Hallo"));

    translator.unload();

    expect_that!(translator.translate("Hello"), eq("Hello"));
    expect_that!(translator.translate("Error"), eq("Hmm..."));
    expect_that!(translator.language_name("de"), eq("Deutsch"));
    expect_that!(
        translator.credits(),
        contains_substring("\nDeutsch (de) - Jens Mönig, Jadga Hügle - 2025-03-24")
    );
}

#[googletest::test]
fn lazy_text_translates_at_display_time() {
    let root = german_root();
    let mut translator = german_translator(&root);
    let deferred = Text::deferred("Hello");
    let literal = Text::literal("Hello");

    expect_that!(display(&translator, Some(&deferred)), eq("«Hallo»"));
    expect_that!(display(&translator, Some(&literal)), eq("Hello"));
    expect_that!(display(&translator, None), eq(""));
    expect_that!(option(&deferred), eq("Hello"));
    expect_that!(option(&literal), eq("Hello"));

    translator.set_language("en");
    expect_that!(display(&translator, Some(&deferred)), eq("«Hello»"));
}
