//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while building or parsing domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not a known method.
    #[error("invalid HTTP method '{0}'")]
    UnsupportedMethod(String),

    /// The target language is not known.
    #[error("the language '{0}' is not implemented")]
    UnsupportedLanguage(String),

    /// The implementation is not known.
    #[error("the implementation '{0}' is not implemented")]
    UnsupportedImplementation(String),

    /// The locale is not one of the supported fake-data locales.
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),

    /// A serialized value can not be used as a resolution input.
    #[error("invalid parameter input: {0}")]
    InvalidInput(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
