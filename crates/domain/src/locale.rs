//! Locales available for fake data

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Locale used to localise synthesized words, names and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// French (France).
    FrFr,
    /// Portuguese (Brazil).
    PtBr,
    /// Japanese.
    JaJp,
    /// Simplified Chinese.
    ZhCn,
    /// Traditional Chinese.
    ZhTw,
    /// Arabic (Saudi Arabia).
    ArSa,
}

impl Locale {
    /// Returns all supported locales.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::En,
            Self::FrFr,
            Self::PtBr,
            Self::JaJp,
            Self::ZhCn,
            Self::ZhTw,
            Self::ArSa,
        ]
    }

    /// Returns the canonical `language_REGION` code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::FrFr => "fr_FR",
            Self::PtBr => "pt_BR",
            Self::JaJp => "ja_JP",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::ArSa => "ar_SA",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "en" | "en_us" => Ok(Self::En),
            "fr" | "fr_fr" => Ok(Self::FrFr),
            "pt_br" => Ok(Self::PtBr),
            "ja" | "ja_jp" => Ok(Self::JaJp),
            "zh_cn" => Ok(Self::ZhCn),
            "zh_tw" => Ok(Self::ZhTw),
            "ar" | "ar_sa" => Ok(Self::ArSa),
            _ => Err(DomainError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}
