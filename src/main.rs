//! Command line entry point for inspecting dictionaries and language packs.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
    ValueEnum,
};
use tracing_subscriber::EnvFilter;
use ui_locale::config::{
    ConfigError,
    ConfigManager,
    MatcherError,
};
use ui_locale::discovery::load_language_packs;
use ui_locale::{
    PenColorModel,
    Text,
    Translator,
    display,
};

/// Translate UI phrases and list the available languages.
#[derive(Debug, Parser)]
#[command(name = "ui-locale", version)]
struct Cli {
    /// Directory holding `.ui-locale.json` and the language packs
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Language to translate into (overrides the settings file)
    #[arg(long)]
    lang: Option<String>,

    /// Pen color model (overrides the settings file)
    #[arg(long, value_enum)]
    pen_color_model: Option<ColorModelArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List language codes with their display names
    Languages,
    /// Show translator credits for every language
    Credits,
    /// Translate phrases into the selected language
    Translate {
        /// Canonical (English) phrases
        #[arg(required = true)]
        phrases: Vec<String>,

        /// Render as deferred values, marked with « »
        #[arg(long)]
        deferred: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorModelArg {
    Hsv,
    Hsl,
}

impl From<ColorModelArg> for PenColorModel {
    fn from(arg: ColorModelArg) -> Self {
        match arg {
            ColorModelArg::Hsv => Self::Hsv,
            ColorModelArg::Hsl => Self::Hsl,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Matcher(#[from] MatcherError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(cli.root.clone()))?;

    let mut settings = config_manager.get_settings().clone();
    if let Some(lang) = cli.lang {
        settings.language = lang;
    }
    if let Some(model) = cli.pen_color_model {
        settings.pen_color_model = model.into();
    }
    config_manager.update_settings(settings)?;
    let settings = config_manager.get_settings();

    let mut translator = Translator::from_settings(settings);
    let report = load_language_packs(&mut translator, &cli.root, settings)?;
    tracing::debug!(
        loaded = ?report.loaded,
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "Language packs loaded"
    );

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Languages => {
            for code in translator.languages() {
                writeln!(out, "{code}\t{}", translator.language_name(code))?;
            }
        }
        Command::Credits => {
            writeln!(out, "{}", translator.credits().trim_start_matches('\n'))?;
        }
        Command::Translate { phrases, deferred } => {
            for phrase in phrases {
                let line = if deferred {
                    display(&translator, Some(&Text::deferred(phrase)))
                } else {
                    translator.translate(&phrase)
                };
                writeln!(out, "{line}")?;
            }
        }
    }

    Ok(())
}
