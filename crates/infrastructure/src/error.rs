//! Snippet generation errors

use reqgen_application::{FormatError, ResolveError};
use reqgen_domain::{DomainError, HttpMethod, Implementation, Language};
use thiserror::Error;

use crate::serialization::SerializationError;

/// Errors raised while generating a snippet.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A parameter or the URL could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A literal could not be formatted.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Invalid domain value (language, method, locale...).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No generator is registered for the language.
    #[error("the language '{0}' is not implemented")]
    UnsupportedLanguage(Language),

    /// The implementation does not belong to the language.
    #[error("the implementation '{implementation}' is not implemented for the language '{language}'")]
    UnsupportedImplementation {
        /// Requested implementation.
        implementation: Implementation,
        /// Requested language.
        language: Language,
    },

    /// The generator has no renderer for the method.
    #[error(
        "the implementation '{implementation}' of the language '{language}' does not support HTTP {method} methods"
    )]
    UnsupportedMethod {
        /// Selected implementation.
        implementation: Implementation,
        /// Selected language.
        language: Language,
        /// Requested method.
        method: HttpMethod,
    },

    /// An extra option collides with what the generator renders itself.
    #[error("the option '{option}' can not be passed together with parameters")]
    ConflictingOption {
        /// Offending option.
        option: String,
    },

    /// An extra option is not usable as a Python keyword argument.
    #[error("'{0}' is not a valid Python identifier")]
    InvalidIdentifier(String),

    /// Parameters could not be url-encoded.
    #[error("failed to url-encode parameters: {0}")]
    Encoding(#[from] serde_urlencoded::ser::Error),

    /// A request file or report could not be (de)serialized.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

/// Result type alias for snippet generation.
pub type GenerateResult<T> = Result<T, GenerateError>;
