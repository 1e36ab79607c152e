//! Request description files

use std::path::Path;

use reqgen_domain::RequestSpec;
use serde::de::DeserializeOwned;

use super::{SerializationError, from_json};

/// Format of a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl RequestFormat {
    /// Picks the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::UnsupportedFormat`] for other extensions.
    pub fn from_path(path: &Path) -> Result<Self, SerializationError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SerializationError::UnsupportedFormat(extension)),
        }
    }
}

/// Deserializes YAML from a string.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or doesn't match the expected type.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, SerializationError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parses a request description in the given format.
///
/// # Errors
///
/// Returns an error if the document is invalid.
pub fn parse_request(content: &str, format: RequestFormat) -> Result<RequestSpec, SerializationError> {
    match format {
        RequestFormat::Json => from_json(content),
        RequestFormat::Yaml => from_yaml(content),
    }
}

/// Reads a request description from a JSON or YAML file.
///
/// # Errors
///
/// Returns an error if the file can not be read, has an unknown extension
/// or does not describe a request.
pub fn load_request(path: &Path) -> Result<RequestSpec, SerializationError> {
    let format = RequestFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading request file");
    let content = std::fs::read_to_string(path)?;
    parse_request(&content, format)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqgen_domain::{HttpMethod, Input};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            RequestFormat::from_path(Path::new("req.YML")).unwrap(),
            RequestFormat::Yaml
        );
        assert_eq!(
            RequestFormat::from_path(Path::new("req.json")).unwrap(),
            RequestFormat::Json
        );
        assert!(matches!(
            RequestFormat::from_path(Path::new("req.toml")),
            Err(SerializationError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }

    #[test]
    fn test_parse_json_request() {
        let request = parse_request(
            r#"{
                "url": "https://example.com",
                "parameters": [{"name": "q", "values": ["a", "b"]}],
                "headers": {"Accept": "text/html"}
            }"#,
            RequestFormat::Json,
        )
        .unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, Input::str("https://example.com"));
        assert_eq!(request.parameters.len(), 1);
        assert_eq!(request.headers["Accept"], "text/html");
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.yaml");
        std::fs::write(
            &path,
            "url: http://localhost:8000\nparameters:\n  - name: page\n    type: int\n    min: 1\n    max: 10\n",
        )
        .unwrap();

        let request = load_request(&path).unwrap();
        assert_eq!(request.parameters[0].max, Some(10.0));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_request(Path::new("/nonexistent/request.json"));
        assert!(matches!(result, Err(SerializationError::Io(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = parse_request(r#"{"body": "x"}"#, RequestFormat::Json);
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
