//! 有効な設定の保持と差し替え

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    LocaleSettings,
    loader,
};

/// 検証済みの設定と、その読み込み元ディレクトリ
///
/// 差し替えは検証に通った設定だけ。失敗時は直前の状態がそのまま残る。
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    settings: LocaleSettings,
    /// `.ui-locale.json` と言語パックを置くディレクトリ
    root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `root` の `.ui-locale.json` から設定を読み込む
    ///
    /// `root` が `None`、またはファイルがなければデフォルト設定になる。
    ///
    /// # Errors
    /// ファイルが読めない、JSON として不正、または検証に失敗した場合
    pub fn load_settings(&mut self, root: Option<PathBuf>) -> Result<(), ConfigError> {
        let settings = root
            .as_deref()
            .map(loader::load_from_root)
            .transpose()?
            .flatten()
            .unwrap_or_default();

        self.replace(settings)?;
        tracing::debug!(root = ?root, language = %self.settings.language, "Settings loaded");
        self.root = root;

        Ok(())
    }

    /// 設定を差し替える（CLI の上書きなど）
    ///
    /// # Errors
    /// 検証に失敗した場合。現在の設定は変わらない
    pub fn update_settings(&mut self, new_settings: LocaleSettings) -> Result<(), ConfigError> {
        self.replace(new_settings)?;
        tracing::debug!(language = %self.settings.language, "Settings updated");
        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &LocaleSettings {
        &self.settings
    }

    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn replace(&mut self, settings: LocaleSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        self.settings = settings;
        Ok(())
    }
}
