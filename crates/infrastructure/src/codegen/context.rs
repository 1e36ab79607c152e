//! Resolved request data handed to the renderers

use indexmap::IndexMap;
use reqgen_application::StringFormatter;
use reqgen_domain::{QuoteStyle, Setup};

use crate::error::GenerateResult;

/// Everything a renderer needs, with the URL and parameters already
/// resolved and the quoting validated.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Resolved URL.
    pub url: String,
    /// Resolved parameter names and values, in declaration order.
    pub parameters: Vec<(String, String)>,
    /// Request headers.
    pub headers: &'a IndexMap<String, String>,
    /// Implementation specific options (keyword arguments, CLI flags...).
    pub options: &'a IndexMap<String, Option<String>>,
    /// Indentation unit.
    pub indent: &'a str,
    /// Quotation character and its escaping.
    pub style: &'static QuoteStyle,
    /// Literal formatter of the language.
    pub formatter: StringFormatter<'static>,
    /// Initialisation code.
    pub setup: &'a Setup,
    /// Code appended after the request.
    pub teardown: Option<&'a str>,
    /// One-line rendering was requested.
    pub oneline: bool,
    /// Maximum line width, `usize::MAX` when unlimited.
    pub wrap: usize,
}

impl RenderContext<'_> {
    /// Quotation character.
    #[must_use]
    pub const fn quote(&self) -> char {
        self.style.quote
    }

    /// Escaped and quoted `value` on a single line.
    #[must_use]
    pub fn quoted(&self, value: &str) -> String {
        self.style.quoted(value)
    }

    /// `value` as a literal whose first character sits at the column of
    /// `indent`, wrapped if it does not fit. `trailing` is the punctuation
    /// written right after the literal on its last line.
    ///
    /// # Errors
    /// Returns a format error for a quote the language does not accept.
    pub fn literal(&self, value: &str, indent: &str, trailing: &str) -> GenerateResult<String> {
        let width = self.wrap.saturating_sub(trailing.chars().count());
        Ok(self
            .formatter
            .format_string_literal(value, indent, self.style.quote, width, true)?)
    }

    /// Setup code to place before the request.
    ///
    /// Custom code is used verbatim; the implementation `default` is
    /// followed by `separator`.
    #[must_use]
    pub fn setup_code(&self, default: &str, enabled_by_default: bool, separator: &str) -> String {
        match self.setup {
            Setup::Custom(code) => code.clone(),
            setup => setup
                .code(default, enabled_by_default)
                .filter(|code| !code.is_empty())
                .map(|code| format!("{code}{separator}"))
                .unwrap_or_default(),
        }
    }

    /// Parameters as an `application/x-www-form-urlencoded` string.
    ///
    /// # Errors
    /// Returns an encoding error if serialization fails.
    pub fn encoded_parameters(&self) -> GenerateResult<String> {
        Ok(serde_urlencoded::to_string(&self.parameters)?)
    }

    /// Whether a rendering of the request on one line is used.
    #[must_use]
    pub fn fits(&self, line: &str) -> bool {
        self.oneline || line.chars().count() < self.wrap
    }

    /// Appends the teardown code.
    #[must_use]
    pub fn finish(&self, mut code: String) -> String {
        if let Some(teardown) = self.teardown {
            code.push_str(teardown);
        }
        code
    }
}

/// Spaces covering `text`, used to align continuation lines.
#[must_use]
pub fn align(prefix: &str, text: &str) -> String {
    " ".repeat(prefix.chars().count() + text.chars().count())
}

/// Separator written after a list element followed by others.
#[must_use]
pub const fn separator(more: bool) -> &'static str {
    if more { "," } else { "" }
}

#[cfg(test)]
pub(super) mod fixtures {
    use std::sync::LazyLock;

    use super::*;
    use reqgen_domain::{Language, LanguageRules};

    pub static NO_HEADERS: LazyLock<IndexMap<String, String>> = LazyLock::new(IndexMap::new);
    pub static NO_OPTIONS: LazyLock<IndexMap<String, Option<String>>> =
        LazyLock::new(IndexMap::new);
    pub static AUTO: Setup = Setup::Auto;

    /// Context on `http://localhost` with the language defaults.
    pub fn context(language: Language) -> RenderContext<'static> {
        let rules = LanguageRules::for_language(language);
        RenderContext {
            url: "http://localhost".to_string(),
            parameters: Vec::new(),
            headers: &NO_HEADERS,
            options: &NO_OPTIONS,
            indent: rules.default_indent,
            style: rules.default_quote(),
            formatter: StringFormatter::new(rules),
            setup: &AUTO,
            teardown: None,
            oneline: false,
            wrap: 80,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::fixtures::context;
    use super::*;
    use pretty_assertions::assert_eq;
    use reqgen_domain::Language;

    #[test]
    fn test_setup_code() {
        let mut ctx = context(Language::Python);
        assert_eq!(ctx.setup_code("import x", true, "\n\n"), "import x\n\n");
        assert_eq!(ctx.setup_code("import x", false, "\n\n"), "");

        let custom = Setup::Custom("// init\n".to_string());
        ctx.setup = &custom;
        assert_eq!(ctx.setup_code("import x", true, "\n\n"), "// init\n");

        let disabled = Setup::Disabled;
        ctx.setup = &disabled;
        assert_eq!(ctx.setup_code("import x", true, "\n\n"), "");
    }

    #[test]
    fn test_encoded_parameters() {
        let mut ctx = context(Language::Bash);
        ctx.parameters = vec![
            ("q".to_string(), "hello world".to_string()),
            ("lang".to_string(), "en&fr".to_string()),
        ];
        assert_eq!(ctx.encoded_parameters().unwrap(), "q=hello+world&lang=en%26fr");
    }

    #[test]
    fn test_fits_is_strict() {
        let mut ctx = context(Language::Bash);
        ctx.wrap = 5;
        assert!(ctx.fits("abcd"));
        assert!(!ctx.fits("abcde"));
        ctx.oneline = true;
        assert!(ctx.fits("abcdefgh"));
    }

    #[test]
    fn test_align() {
        assert_eq!(align("    ", "'q': "), " ".repeat(9));
    }
}
