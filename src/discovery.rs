//! Finds language pack files under a root and merges them into a translator.
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use crate::config::{
    LocaleSettings,
    MatcherError,
    PackMatcher,
};
use crate::dictionary::BASE_LANGUAGE;
use crate::pack::{
    PackError,
    load_language_pack,
};
use crate::translator::Translator;

/// Outcome of a pack loading pass.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Language codes merged, in load order.
    pub loaded: Vec<String>,
    /// Packs for the base language, which are never merged.
    pub skipped: Vec<PathBuf>,
    /// Packs that could not be loaded.
    pub failed: Vec<(PathBuf, PackError)>,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Lists pack files under the matcher root, sorted by path.
#[must_use]
pub fn find_language_packs(matcher: &PackMatcher) -> Vec<PathBuf> {
    let root = matcher.root();
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !matcher.is_language_pack_relative(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    found_files
}

/// Loads every pack under `root` into `translator`.
///
/// A pack that fails to load is logged and reported; the others are still
/// merged. When two files yield the same code, the later path wins.
/// Packs for the base language are skipped so the shipped English entry
/// stays intact.
///
/// # Errors
/// Returns error only if the configured patterns are invalid.
pub fn load_language_packs(
    translator: &mut Translator,
    root: &Path,
    settings: &LocaleSettings,
) -> Result<LoadReport, MatcherError> {
    tracing::debug!(root = %root.display(), "Loading language packs");
    let matcher = PackMatcher::new(root.to_path_buf(), settings)?;

    let mut report = LoadReport::default();
    for path in find_language_packs(&matcher) {
        match load_language_pack(&path) {
            Ok((code, _)) if code == BASE_LANGUAGE => {
                tracing::warn!("Ignoring language pack for the base language {:?}", path);
                report.skipped.push(path);
            }
            Ok((code, entry)) => {
                translator.merge(code.clone(), entry);
                report.loaded.push(code);
            }
            Err(err) => {
                tracing::warn!("Failed to load language pack {:?}: {}", path, err);
                report.failed.push((path, err));
            }
        }
    }

    Ok(report)
}
