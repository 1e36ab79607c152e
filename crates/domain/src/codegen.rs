//! Code generation types for generating code snippets from requests.
//!
//! This module provides the target languages and implementations a snippet
//! can be generated for, and the options that shape the rendered code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::locale::Locale;

/// Default maximum line width of generated code.
pub const DEFAULT_WRAP: usize = 80;

/// Programming languages or platforms snippets can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python
    #[default]
    Python,
    /// JavaScript
    JavaScript,
    /// Bash
    Bash,
}

impl Language {
    /// Get display name for the language.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::Bash => "Bash",
        }
    }

    /// Identifier of the language, also used as Markdown fence info string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Bash => "bash",
        }
    }

    /// Get all available languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Python, Self::JavaScript, Self::Bash]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "javascript" | "js" => Ok(Self::JavaScript),
            "bash" | "sh" => Ok(Self::Bash),
            _ => Err(DomainError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Library, program or API used by a snippet to perform the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Implementation {
    /// Python `requests` library
    Requests,
    /// JavaScript fetch API
    Fetch,
    /// cURL command line
    Curl,
}

impl Implementation {
    /// Identifier of the implementation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Requests => "requests",
            Self::Fetch => "fetch",
            Self::Curl => "curl",
        }
    }

    /// Language the implementation belongs to.
    #[must_use]
    pub const fn language(&self) -> Language {
        match self {
            Self::Requests => Language::Python,
            Self::Fetch => Language::JavaScript,
            Self::Curl => Language::Bash,
        }
    }

    /// Get all available implementations.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Requests, Self::Fetch, Self::Curl]
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Implementation {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "requests" => Ok(Self::Requests),
            "fetch" => Ok(Self::Fetch),
            "curl" => Ok(Self::Curl),
            _ => Err(DomainError::UnsupportedImplementation(s.to_string())),
        }
    }
}

/// Initialisation code placed before the request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "SetupValue")]
pub enum Setup {
    /// Whatever the implementation includes by default.
    #[default]
    Auto,
    /// The implementation's setup code.
    Enabled,
    /// No setup code.
    Disabled,
    /// Custom code, included verbatim.
    Custom(String),
}

impl Setup {
    /// Resolves the setup against the implementation default.
    ///
    /// Returns `None` when nothing must be rendered, otherwise the code to
    /// render (`default` for [`Setup::Enabled`] and [`Setup::Auto`] when the
    /// implementation enables it by default).
    #[must_use]
    pub fn code<'a>(&'a self, default: &'a str, enabled_by_default: bool) -> Option<&'a str> {
        match self {
            Self::Auto if enabled_by_default => Some(default),
            Self::Auto | Self::Disabled => None,
            Self::Enabled => Some(default),
            Self::Custom(code) => Some(code),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SetupValue {
    Flag(bool),
    Code(String),
}

impl From<SetupValue> for Setup {
    fn from(value: SetupValue) -> Self {
        match value {
            SetupValue::Flag(true) => Self::Enabled,
            SetupValue::Flag(false) => Self::Disabled,
            SetupValue::Code(code) => Self::Custom(code),
        }
    }
}

impl From<bool> for Setup {
    fn from(value: bool) -> Self {
        SetupValue::Flag(value).into()
    }
}

/// Options for code generation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Target language. Inferred from the implementation when absent.
    pub language: Option<Language>,
    /// Target implementation. First one of the language when absent.
    pub implementation: Option<Implementation>,
    /// Indentation string. The implementation default when absent.
    pub indent: Option<String>,
    /// Quotation character. The implementation default when absent.
    pub quote_char: Option<char>,
    /// Initialisation code.
    pub setup: Setup,
    /// Code appended after the request.
    pub teardown: Option<String>,
    /// Render the whole snippet on one line.
    pub oneline: bool,
    /// Maximum line width; `0` disables wrapping.
    pub wrap: usize,
    /// Seed for every random choice.
    pub seed: Option<u64>,
    /// Locale of fake values.
    pub locale: Option<Locale>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            language: None,
            implementation: None,
            indent: None,
            quote_char: None,
            setup: Setup::Auto,
            teardown: None,
            oneline: false,
            wrap: DEFAULT_WRAP,
            seed: None,
            locale: None,
        }
    }
}

impl GenerateOptions {
    /// Create options for a specific language with defaults.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self {
            language: Some(language),
            ..Default::default()
        }
    }

    /// Create options for a specific implementation with defaults.
    #[must_use]
    pub fn for_implementation(implementation: Implementation) -> Self {
        Self {
            language: Some(implementation.language()),
            implementation: Some(implementation),
            ..Default::default()
        }
    }

    /// Sets the indentation string.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Sets the quotation character.
    #[must_use]
    pub const fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = Some(quote_char);
        self
    }

    /// Sets the setup code.
    #[must_use]
    pub fn with_setup(mut self, setup: impl Into<Setup>) -> Self {
        self.setup = setup.into();
        self
    }

    /// Sets the teardown code.
    #[must_use]
    pub fn with_teardown(mut self, teardown: impl Into<String>) -> Self {
        self.teardown = Some(teardown.into());
        self
    }

    /// Enables or disables one-line rendering.
    #[must_use]
    pub const fn with_oneline(mut self, oneline: bool) -> Self {
        self.oneline = oneline;
        self
    }

    /// Sets the maximum line width.
    #[must_use]
    pub const fn with_wrap(mut self, wrap: usize) -> Self {
        self.wrap = wrap;
        self
    }

    /// Sets the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the locale.
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Line width budget, with `0` meaning unlimited.
    #[must_use]
    pub const fn effective_wrap(&self) -> usize {
        if self.wrap == 0 { usize::MAX } else { self.wrap }
    }
}
