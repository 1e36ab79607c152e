//! Layered user settings
//!
//! Defaults are read, in increasing priority, from:
//! 1. built-in defaults
//! 2. `reqgen.toml` / `reqgen.yaml` / `reqgen.json` in the working directory,
//!    or the file given explicitly
//! 3. `REQGEN_*` environment variables (`REQGEN_WRAP=100`)

use std::path::Path;

use config::{Config, Environment, File, Map};
use reqgen_domain::{DEFAULT_WRAP, GenerateOptions, Implementation, Language, Locale};
use serde::Deserialize;
use thiserror::Error;

/// Prefix of the environment variables read.
pub const ENV_PREFIX: &str = "REQGEN";

/// Base name of the settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_NAME: &str = "reqgen";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Config(#[from] config::ConfigError),

    /// The quotation character is not a single character.
    #[error("quote character must be a single character, got '{0}'")]
    InvalidQuote(String),
}

/// Persisted generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default language.
    pub language: Option<Language>,
    /// Default implementation.
    pub implementation: Option<Implementation>,
    /// Default quotation character.
    pub quote_char: Option<String>,
    /// Default indentation string.
    pub indent: Option<String>,
    /// Default wrap width, `0` for unlimited.
    pub wrap: Option<usize>,
    /// Default locale of fake values.
    pub locale: Option<Locale>,
    /// Default seed.
    pub seed: Option<u64>,
    /// Render on one line by default.
    pub oneline: bool,
}

impl Settings {
    /// Loads the settings from `path` (required) or from the optional
    /// settings file of the working directory, then the environment.
    ///
    /// # Errors
    /// Returns an error if a source is invalid or an explicit file is
    /// missing.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load`], reading the environment variables from
    /// `env` instead of the process environment when given.
    ///
    /// # Errors
    /// Returns an error if a source is invalid or an explicit file is
    /// missing.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, SettingsError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_NAME).required(false),
        };
        let settings: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;
        tracing::debug!(?settings, "settings loaded");
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        self.quote().map(|_| ())
    }

    /// The quotation character, if set.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidQuote`] if the value is not exactly
    /// one character.
    pub fn quote(&self) -> Result<Option<char>, SettingsError> {
        let Some(quote) = &self.quote_char else {
            return Ok(None);
        };
        let mut chars = quote.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Some(c)),
            _ => Err(SettingsError::InvalidQuote(quote.clone())),
        }
    }

    /// Generation options carrying these defaults.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidQuote`] for an invalid quote.
    pub fn to_options(&self) -> Result<GenerateOptions, SettingsError> {
        Ok(GenerateOptions {
            language: self.language,
            implementation: self.implementation,
            indent: self.indent.clone(),
            quote_char: self.quote()?,
            oneline: self.oneline,
            wrap: self.wrap.unwrap_or(DEFAULT_WRAP),
            seed: self.seed,
            locale: self.locale,
            ..GenerateOptions::default()
        })
    }
}
