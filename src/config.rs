//! Settings for the translator and language pack discovery.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Language pack pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use matcher::{
    MatcherError,
    PackMatcher,
};
pub use types::{
    ConfigError,
    LanguagePacksConfig,
    LocaleSettings,
    ValidationError,
};
