//! Request files and JSON reports
//!
//! Request descriptions are read from JSON or YAML files, picked by file
//! extension. Reports (supported features) are written as deterministic
//! pretty-printed JSON with a trailing newline.

mod json;
mod request_file;

pub use json::{from_json, to_json_stable};
pub use request_file::{RequestFormat, from_yaml, load_request, parse_request};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension maps to no known format.
    #[error("unsupported request file format '{0}', expected json, yaml or yml")]
    UnsupportedFormat(String),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
