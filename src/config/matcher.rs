//! File pattern matcher for language pack files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::LocaleSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid language pack include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid language pack exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches files against the configured language pack patterns.
#[derive(Debug, Clone)]
pub struct PackMatcher {
    root: PathBuf,
    include_set: GlobSet,
    exclude_set: GlobSet,
}

impl PackMatcher {
    /// Creates a new matcher from settings.
    pub fn new(root: PathBuf, settings: &LocaleSettings) -> Result<Self, MatcherError> {
        let include_set =
            Self::build_glob_set(&settings.language_packs.include_patterns, |pattern, source| {
                MatcherError::InvalidIncludePattern { pattern, source }
            })?;

        let exclude_set =
            Self::build_glob_set(&settings.language_packs.exclude_patterns, |pattern, source| {
                MatcherError::InvalidExcludePattern { pattern, source }
            })?;

        Ok(Self { root, include_set, exclude_set })
    }

    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true if the path matches an include pattern and no exclude pattern.
    ///
    /// The path must be absolute and under the root.
    #[must_use]
    pub fn is_language_pack(&self, absolute_path: &Path) -> bool {
        let Some(relative_path) = absolute_path.strip_prefix(&self.root).ok() else {
            return false;
        };

        self.is_language_pack_relative(relative_path)
    }

    /// Returns true if the path matches an include pattern and no exclude pattern.
    ///
    /// The path must be relative to the root.
    #[must_use]
    pub fn is_language_pack_relative(&self, relative_path: &Path) -> bool {
        self.include_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;

    use super::*;
    use crate::config::LanguagePacksConfig;

    fn create_settings(include: &[&str], exclude: &[&str]) -> LocaleSettings {
        LocaleSettings {
            language_packs: LanguagePacksConfig {
                include_patterns: include.iter().copied().map(String::from).collect(),
                exclude_patterns: exclude.iter().copied().map(String::from).collect(),
            },
            ..LocaleSettings::default()
        }
    }

    #[rstest]
    fn is_language_pack_with_default_patterns() {
        let settings = LocaleSettings::default();
        let matcher = PackMatcher::new(PathBuf::from("/app"), &settings).expect("valid patterns");

        assert!(matcher.is_language_pack(Path::new("/app/locale/lang-de.json")));
        assert!(matcher.is_language_pack(Path::new("/app/lang-zh_CN.json")));

        assert!(!matcher.is_language_pack(Path::new("/app/locale/de.json")));
        assert!(!matcher.is_language_pack(Path::new("/app/package.json")));
    }

    #[rstest]
    fn is_language_pack_with_exclude_patterns() {
        let settings = create_settings(&["**/*.json"], &["**/drafts/**"]);
        let matcher = PackMatcher::new(PathBuf::from("/app"), &settings).expect("valid patterns");

        assert!(matcher.is_language_pack(Path::new("/app/locale/de.json")));
        assert!(!matcher.is_language_pack(Path::new("/app/drafts/de.json")));
    }

    #[rstest]
    fn is_language_pack_outside_root() {
        let settings = LocaleSettings::default();
        let matcher = PackMatcher::new(PathBuf::from("/app"), &settings).expect("valid patterns");

        assert!(!matcher.is_language_pack(Path::new("/other/lang-de.json")));
    }

    #[rstest]
    fn is_language_pack_relative_works() {
        let settings = create_settings(&["locale/*.json"], &[]);
        let matcher = PackMatcher::new(PathBuf::from("/app"), &settings).expect("valid patterns");

        assert!(matcher.is_language_pack_relative(Path::new("locale/de.json")));
        assert!(!matcher.is_language_pack_relative(Path::new("src/de.json")));
    }

    #[rstest]
    fn new_with_invalid_include_pattern() {
        let settings = create_settings(&["**/*.{json"], &[]);

        let result = PackMatcher::new(PathBuf::from("/app"), &settings);

        assert!(matches!(result, Err(MatcherError::InvalidIncludePattern { .. })));
    }

    #[rstest]
    fn new_with_invalid_exclude_pattern() {
        let settings = create_settings(&["**/*.json"], &["[invalid"]);

        let result = PackMatcher::new(PathBuf::from("/app"), &settings);

        assert!(matches!(result, Err(MatcherError::InvalidExcludePattern { .. })));
    }

    #[rstest]
    fn root_accessor() {
        let settings = LocaleSettings::default();
        let matcher = PackMatcher::new(PathBuf::from("/app"), &settings).expect("valid patterns");

        assert_eq!(matcher.root(), Path::new("/app"));
    }
}
