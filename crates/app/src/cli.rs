//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use reqgen_domain::{
    GenerateOptions, HttpMethod, Implementation, Input, Language, Locale, ParameterSpec,
    RequestSpec, Setup,
};
use reqgen_infrastructure::DEFAULT_FENCE;

/// Generate HTTP request code snippets
#[derive(Parser, Debug, Clone)]
#[command(name = "reqgen", version, about, long_about = None)]
pub struct Cli {
    /// Path to the settings file (default: reqgen.toml/yaml/json if present)
    #[arg(short, long, env = "REQGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Target language (python, javascript, bash)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Target implementation (requests, fetch, curl)
    #[arg(short, long = "impl")]
    pub implementation: Option<Implementation>,

    /// HTTP method
    #[arg(short, long)]
    pub method: Option<HttpMethod>,

    /// Request URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Parameter: `name=value`, `name:type` or `name` for a random word
    #[arg(short, long = "param", value_name = "PARAM", value_parser = parse_parameter)]
    pub params: Vec<ParameterSpec>,

    /// Header: `Name: value`
    #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Implementation option: `name=value` or `name`
    #[arg(
        short = 'O',
        long = "option",
        value_name = "OPTION",
        value_parser = parse_option,
        allow_hyphen_values = true
    )]
    pub options: Vec<(String, Option<String>)>,

    /// JSON or YAML request description
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Indentation width in spaces
    #[arg(long)]
    pub indent: Option<usize>,

    /// Quotation character
    #[arg(short, long)]
    pub quote: Option<char>,

    /// Maximum line width, 0 for unlimited
    #[arg(short, long)]
    pub wrap: Option<usize>,

    /// Render the snippet on one line
    #[arg(long)]
    pub oneline: bool,

    /// Seed for reproducible values
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Locale of fake values (en, fr_FR, pt_BR, ja_JP, zh_CN, zh_TW, ar_SA)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Include the implementation setup code
    #[arg(long, conflicts_with = "no_setup")]
    pub setup: bool,

    /// Leave out the implementation setup code
    #[arg(long)]
    pub no_setup: bool,

    /// Code appended after the request
    #[arg(long)]
    pub teardown: Option<String>,

    /// Wrap the snippet in a Markdown fenced code block
    #[arg(long)]
    pub markdown: bool,

    /// Fence of the Markdown code block
    #[arg(long, default_value = DEFAULT_FENCE)]
    pub fence: String,

    /// Print the supported features of every implementation as JSON
    #[arg(long)]
    pub features: bool,
}

impl Cli {
    /// Applies the flags over options loaded from settings.
    #[must_use]
    pub fn apply(&self, mut options: GenerateOptions) -> GenerateOptions {
        if self.language.is_some() || self.implementation.is_some() {
            options.language = self.language;
            options.implementation = self.implementation;
        }
        if let Some(width) = self.indent {
            options.indent = Some(" ".repeat(width));
        }
        if let Some(quote) = self.quote {
            options.quote_char = Some(quote);
        }
        if let Some(wrap) = self.wrap {
            options.wrap = wrap;
        }
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
        if let Some(locale) = self.locale {
            options.locale = Some(locale);
        }
        options.oneline |= self.oneline;
        if self.setup {
            options.setup = Setup::Enabled;
        } else if self.no_setup {
            options.setup = Setup::Disabled;
        }
        if let Some(teardown) = &self.teardown {
            options.teardown = Some(teardown.clone());
        }
        options
    }

    /// Applies the request flags over `request`.
    #[must_use]
    pub fn apply_request(&self, mut request: RequestSpec) -> RequestSpec {
        if let Some(url) = &self.url {
            request.url = Input::str(url.clone());
        }
        if let Some(method) = self.method {
            request.method = method;
        }
        request.parameters.extend(self.params.iter().cloned());
        for (name, value) in &self.headers {
            request.headers.insert(name.clone(), value.clone());
        }
        for (name, value) in &self.options {
            request.options.insert(name.clone(), value.clone());
        }
        request
    }
}

fn non_empty(name: &str, arg: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        Err(format!("missing name in '{arg}'"))
    } else {
        Ok(name.to_string())
    }
}

/// Parses `name=value`, `name:type` or `name`.
///
/// # Errors
/// Returns a message when the name is empty.
pub fn parse_parameter(arg: &str) -> Result<ParameterSpec, String> {
    if let Some((name, value)) = arg.split_once('=') {
        return Ok(ParameterSpec::named(non_empty(name, arg)?).with_value(value));
    }
    if let Some((name, kind)) = arg.rsplit_once(':') {
        return Ok(ParameterSpec::named(non_empty(name, arg)?).with_type(kind.trim()));
    }
    Ok(ParameterSpec::named(non_empty(arg, arg)?))
}

/// Parses `Name: value`.
///
/// # Errors
/// Returns a message when the separator or the name is missing.
pub fn parse_header(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once(':')
        .ok_or_else(|| format!("header '{arg}' must be written 'Name: value'"))?;
    Ok((non_empty(name, arg)?, value.trim().to_string()))
}

/// Parses `name=value` or `name`.
///
/// # Errors
/// Returns a message when the name is empty.
pub fn parse_option(arg: &str) -> Result<(String, Option<String>), String> {
    match arg.split_once('=') {
        Some((name, value)) => Ok((non_empty(name, arg)?, Some(value.to_string()))),
        None => Ok((non_empty(arg, arg)?, None)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["reqgen"]);
        assert!(cli.language.is_none());
        assert!(cli.params.is_empty());
        assert_eq!(cli.fence, "```");
        assert_eq!(cli.apply(GenerateOptions::default()), GenerateOptions::default());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "reqgen",
            "--impl",
            "curl",
            "-p",
            "q=rust",
            "-H",
            "Accept: text/html",
            "-O",
            "-s",
            "--indent",
            "2",
            "--no-setup",
        ]);
        let options = cli.apply(GenerateOptions::for_language(Language::Python));
        assert_eq!(options.language, None);
        assert_eq!(options.implementation, Some(Implementation::Curl));
        assert_eq!(options.indent.as_deref(), Some("  "));
        assert_eq!(options.setup, Setup::Disabled);

        let request = cli.apply_request(RequestSpec::default());
        assert_eq!(request.parameters[0].value, Some(Input::str("rust")));
        assert_eq!(request.headers["Accept"], "text/html");
        assert_eq!(request.options["-s"], None);
    }

    #[test]
    fn test_setup_flags_conflict() {
        assert!(Cli::try_parse_from(["reqgen", "--setup", "--no-setup"]).is_err());
    }

    #[test]
    fn test_invalid_language_is_rejected() {
        assert!(Cli::try_parse_from(["reqgen", "--language", "cobol"]).is_err());
    }

    #[test]
    fn test_parse_parameter() {
        assert_eq!(
            parse_parameter("page:int").unwrap(),
            ParameterSpec::named("page").with_type("int")
        );
        assert_eq!(
            parse_parameter("t=a:b").unwrap(),
            ParameterSpec::named("t").with_value("a:b")
        );
        assert_eq!(parse_parameter("word").unwrap(), ParameterSpec::named("word"));
        assert!(parse_parameter("=x").is_err());
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("Authorization: Bearer a:b").unwrap(),
            ("Authorization".to_string(), "Bearer a:b".to_string())
        );
        assert!(parse_header("Accept").is_err());
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(
            parse_option("timeout=5").unwrap(),
            ("timeout".to_string(), Some("5".to_string()))
        );
        assert_eq!(parse_option("-s").unwrap(), ("-s".to_string(), None));
    }
}
