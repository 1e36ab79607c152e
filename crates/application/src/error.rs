//! Resolution and formatting error types

use reqgen_domain::Language;
use thiserror::Error;

use crate::ports::LoadError;

/// Errors raised while resolving parameter names and values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Neither `name` nor `names` is defined.
    #[error("parameter must contain 'name' or 'names' attribute")]
    MissingName,

    /// A value had to be chosen from an empty collection.
    #[error("the collection used to build a lazy string can not be empty")]
    EmptyCollection,

    /// A referenced module can not be loaded.
    #[error("module '{module}' not found")]
    ModuleNotFound {
        /// Module path.
        module: String,
    },

    /// A referenced module does not define the symbol.
    #[error("object '{symbol}' not found in module '{module}'")]
    AttributeNotFound {
        /// Module path.
        module: String,
        /// Missing symbol.
        symbol: String,
    },

    /// The `type` of a parameter is not a known type tag.
    #[error("data type '{kind}' of parameter '{parameter}' not supported")]
    UnsupportedType {
        /// Parameter label.
        parameter: String,
        /// Offending type.
        kind: String,
    },

    /// The `faker` attribute is not a provider function.
    #[error(
        "'faker' '{faker}' attribute of parameter '{parameter}' must be a 'provider::function' path or a provider function"
    )]
    InvalidFakerSpec {
        /// Parameter label.
        parameter: String,
        /// Offending faker attribute.
        faker: String,
    },

    /// The `names` attribute points to a missing module or symbol.
    #[error("'names' '{names}' attribute of parameter is pointing to an inexistent object")]
    InvalidNames {
        /// Offending `names` attribute.
        names: String,
        /// Load failure.
        #[source]
        source: Box<ResolveError>,
    },

    /// The `values` attribute points to a missing module or symbol.
    #[error(
        "'values' '{values}' attribute of parameter '{parameter}' is pointing to an inexistent object"
    )]
    InvalidValues {
        /// Offending `values` attribute.
        values: String,
        /// Parameter label.
        parameter: String,
        /// Load failure.
        #[source]
        source: Box<ResolveError>,
    },

    /// The numeric bounds of a parameter are reversed or not finite.
    #[error("invalid range [{min}, {max}] for parameter '{parameter}'")]
    InvalidRange {
        /// Parameter label.
        parameter: String,
        /// Lower bound.
        min: String,
        /// Upper bound.
        max: String,
    },
}

impl ResolveError {
    /// Whether the error comes from loading a module symbol.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::ModuleNotFound { .. } | Self::AttributeNotFound { .. }
        )
    }
}

impl From<LoadError> for ResolveError {
    fn from(error: LoadError) -> Self {
        match error {
            LoadError::ModuleNotFound(module) => Self::ModuleNotFound { module },
            LoadError::AttributeNotFound { module, symbol } => {
                Self::AttributeNotFound { module, symbol }
            }
        }
    }
}

/// Result type alias for resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors raised while formatting string literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The quotation character is not accepted by the language.
    #[error("'{quote}' is not a valid {} quotation character", language.display_name())]
    InvalidQuoteCharacter {
        /// Offending character.
        quote: char,
        /// Target language.
        language: Language,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_error_conversion() {
        let error = ResolveError::from(LoadError::AttributeNotFound {
            module: "fixtures".to_string(),
            symbol: "names".to_string(),
        });
        assert!(error.is_load_error());
        assert_eq!(
            error.to_string(),
            "object 'names' not found in module 'fixtures'"
        );
    }

    #[test]
    fn test_invalid_quote_message() {
        let error = FormatError::InvalidQuoteCharacter {
            quote: '?',
            language: Language::JavaScript,
        };
        assert_eq!(
            error.to_string(),
            "'?' is not a valid JavaScript quotation character"
        );
    }
}
