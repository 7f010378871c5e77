//! ui-locale
//!
//! Runtime localization of UI strings: phrase lookup with fallback to the
//! canonical English text, contextual rewording, deferred ("lazy")
//! translation of stored values, and loading of language packs.

pub mod builtin;
pub mod config;
pub mod context;
pub mod dictionary;
pub mod discovery;
pub mod lazy;
pub mod pack;
pub mod translator;

pub use context::{
    PenColorModel,
    TranslationContext,
};
pub use dictionary::{
    Dictionary,
    LanguageEntry,
    LanguageMeta,
};
pub use lazy::{
    Text,
    display,
    option,
};
pub use translator::Translator;
