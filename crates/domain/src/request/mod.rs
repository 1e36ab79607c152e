//! Request specification types

mod method;

pub use method::HttpMethod;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::input::Input;
use crate::parameter::ParameterSpec;

fn default_url() -> Input {
    Input::str("http://localhost")
}

/// Declarative description of the request a snippet performs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestSpec {
    /// Request URL. Resolved like a parameter value.
    #[serde(default = "default_url")]
    pub url: Input,
    /// HTTP method.
    #[serde(default)]
    pub method: HttpMethod,
    /// Parameters, in rendering order.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Headers, in rendering order.
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    /// Implementation-specific options (`timeout`, `-s`...). A `None`
    /// value renders the option as a flag.
    #[serde(default)]
    pub options: IndexMap<String, Option<String>>,
    /// Modules of inputs that `names` and `values` paths refer to, by
    /// module path then symbol name.
    #[serde(default)]
    pub modules: IndexMap<String, IndexMap<String, Input>>,
}

impl Default for RequestSpec {
    fn default() -> Self {
        Self {
            url: default_url(),
            method: HttpMethod::default(),
            parameters: Vec::new(),
            headers: IndexMap::new(),
            options: IndexMap::new(),
            modules: IndexMap::new(),
        }
    }
}

impl RequestSpec {
    /// Creates a request with the given method and URL.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<Input>) -> Self {
        Self {
            url: url.into(),
            method,
            ..Self::default()
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(url: impl Into<Input>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets a header, replacing any previous value.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets an option. `None` renders the option as a flag.
    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.options.insert(name.into(), value);
        self
    }

    /// Declares `symbol` in `module`.
    #[must_use]
    pub fn with_module_symbol(
        mut self,
        module: impl Into<String>,
        symbol: impl Into<String>,
        value: impl Into<Input>,
    ) -> Self {
        self.modules
            .entry(module.into())
            .or_default()
            .insert(symbol.into(), value.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let request = RequestSpec::default();
        assert_eq!(request.url, Input::str("http://localhost"));
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.parameters.is_empty());
    }

    #[test]
    fn test_deserialize_keeps_header_order() {
        let yaml = "
url: https://example.com/search
method: get
parameters:
  - name: q
    faker: lorem::word
headers:
  X-B: b
  X-A: a
options:
  timeout: '5'
  -s: null
";
        let request: RequestSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.parameters[0].faker, Some(Input::str("lorem::word")));
        let names: Vec<&str> = request.headers.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["X-B", "X-A"]);
        assert_eq!(request.options.get("-s"), Some(&None));
    }

    #[test]
    fn test_deserialize_modules() {
        let yaml = "
parameters:
  - names: fixtures.params::names
modules:
  fixtures.params:
    names: [page, offset]
    limit: 10
";
        let request: RequestSpec = serde_yaml::from_str(yaml).unwrap();
        let symbols = &request.modules["fixtures.params"];
        assert_eq!(symbols["names"], Input::seq(["page", "offset"]));
        assert_eq!(symbols["limit"], Input::from(10));
        assert_eq!(
            request,
            RequestSpec::default()
                .with_parameter(ParameterSpec::default().with_names("fixtures.params::names"))
                .with_module_symbol("fixtures.params", "names", Input::seq(["page", "offset"]))
                .with_module_symbol("fixtures.params", "limit", 10)
        );
    }

    #[test]
    fn test_builder() {
        let request = RequestSpec::get("https://example.com")
            .with_header("Accept", "text/html")
            .with_parameter(ParameterSpec::named("a").with_value("b"));
        assert_eq!(request.headers["Accept"], "text/html");
        assert_eq!(request.parameters.len(), 1);
    }
}
