//! Snippet generation entry points

use std::sync::Arc;

use reqgen_application::{FormatError, ModuleLoader, Resolver, StringFormatter};
use reqgen_domain::{GenerateOptions, Language, LanguageRules, RequestSpec};

use super::context::RenderContext;
use super::registry;
use crate::error::GenerateResult;

/// Default Markdown code fence.
pub const DEFAULT_FENCE: &str = "```";

/// Generate code for a request with a resolver without modules.
///
/// # Errors
///
/// Returns an error if the request can not be resolved or rendered.
pub fn generate_code(request: &RequestSpec, options: &GenerateOptions) -> GenerateResult<String> {
    CodeGenerator::default().generate(request, options)
}

/// Generate code for a request wrapped in a Markdown fenced code block.
///
/// # Errors
///
/// Returns an error if the request can not be resolved or rendered.
pub fn generate_markdown(
    request: &RequestSpec,
    options: &GenerateOptions,
    fence: &str,
) -> GenerateResult<String> {
    CodeGenerator::default().generate_markdown(request, options, fence)
}

/// Code generator that produces code snippets from requests.
///
/// Owns the [`Resolver`], so modules, providers and cached fakers are
/// shared by every snippet it generates.
#[derive(Debug, Default)]
pub struct CodeGenerator {
    resolver: Resolver,
}

impl CodeGenerator {
    /// Create a code generator resolving with `resolver`.
    #[must_use]
    pub const fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// Create a code generator loading references from `loader`.
    #[must_use]
    pub fn with_modules(loader: Arc<dyn ModuleLoader>) -> Self {
        Self::new(Resolver::new(loader))
    }

    /// Mutable access to the resolver, to register providers.
    pub const fn resolver_mut(&mut self) -> &mut Resolver {
        &mut self.resolver
    }

    /// Generate code for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if no renderer matches the language, implementation
    /// and method, if the quotation character is invalid for the language,
    /// or if the URL or a parameter can not be resolved.
    pub fn generate(
        &mut self,
        request: &RequestSpec,
        options: &GenerateOptions,
    ) -> GenerateResult<String> {
        self.render(request, options).map(|(_, code)| code)
    }

    /// Generate code wrapped in a Markdown fenced code block tagged with
    /// the language.
    ///
    /// # Errors
    ///
    /// Same as [`CodeGenerator::generate`].
    pub fn generate_markdown(
        &mut self,
        request: &RequestSpec,
        options: &GenerateOptions,
        fence: &str,
    ) -> GenerateResult<String> {
        let (language, code) = self.render(request, options)?;
        Ok(format!("{fence}{language}\n{code}\n{fence}"))
    }

    fn render(
        &mut self,
        request: &RequestSpec,
        options: &GenerateOptions,
    ) -> GenerateResult<(Language, String)> {
        let entry = registry::lookup(options.language, options.implementation)?;
        let renderer = entry.renderer(request.method)?;
        let language = entry.language();
        let rules = LanguageRules::for_language(language);
        let quote = options.quote_char.unwrap_or(rules.default_quote().quote);
        let style = rules
            .quote_style(quote)
            .ok_or(FormatError::InvalidQuoteCharacter { quote, language })?;

        tracing::debug!(
            %language,
            implementation = %entry.implementation,
            method = %request.method,
            seed = ?options.seed,
            "generating snippet"
        );

        let url = self.resolver.resolve(&request.url, options.seed, false)?;
        let mut parameters = Vec::with_capacity(request.parameters.len());
        for parameter in &request.parameters {
            let name = self.resolver.lazy_name(parameter, options.seed)?;
            let value = self
                .resolver
                .lazy_value(parameter, options.seed, options.locale)?;
            parameters.push((name, value));
        }

        let ctx = RenderContext {
            url,
            parameters,
            headers: &request.headers,
            options: &request.options,
            indent: options.indent.as_deref().unwrap_or(rules.default_indent),
            style,
            formatter: StringFormatter::new(rules),
            setup: &options.setup,
            teardown: options.teardown.as_deref(),
            oneline: options.oneline,
            wrap: options.effective_wrap(),
        };
        Ok((language, renderer(&ctx)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::adapters::StaticModuleRegistry;
    use crate::error::GenerateError;
    use pretty_assertions::assert_eq;
    use reqgen_domain::{HttpMethod, Implementation, Input, ParameterSpec};

    #[test]
    fn test_default_snippet() {
        let code = generate_code(&RequestSpec::default(), &GenerateOptions::default()).unwrap();
        assert_eq!(code, "import requests\n\nreq = requests.get('http://localhost')");
    }

    #[test]
    fn test_markdown_block() {
        let options = GenerateOptions::default().with_setup(false);
        assert_eq!(
            generate_markdown(&RequestSpec::default(), &options, DEFAULT_FENCE).unwrap(),
            "```python\nreq = requests.get('http://localhost')\n```"
        );
        assert_eq!(
            generate_markdown(&RequestSpec::default(), &options, "~~~").unwrap(),
            "~~~python\nreq = requests.get('http://localhost')\n~~~"
        );
    }

    #[test]
    fn test_language_of_implementation_tags_markdown() {
        let options = GenerateOptions::for_implementation(Implementation::Curl);
        assert_eq!(
            generate_markdown(&RequestSpec::default(), &options, DEFAULT_FENCE).unwrap(),
            "```bash\ncurl \"http://localhost\"\n```"
        );
    }

    #[test]
    fn test_invalid_quote_for_language() {
        let options = GenerateOptions::for_language(Language::Python).with_quote_char('`');
        assert!(matches!(
            generate_code(&RequestSpec::default(), &options),
            Err(GenerateError::Format(FormatError::InvalidQuoteCharacter {
                quote: '`',
                language: Language::Python,
            }))
        ));
    }

    #[test]
    fn test_unsupported_method() {
        let request = RequestSpec::new(HttpMethod::Post, "http://localhost");
        assert!(matches!(
            generate_code(&request, &GenerateOptions::default()),
            Err(GenerateError::UnsupportedMethod { .. })
        ));
    }

    #[test]
    fn test_seed_makes_output_reproducible() {
        let request = RequestSpec::get(Input::seq(["http://a.test", "http://b.test"]))
            .with_parameter(ParameterSpec::named("page").with_type("int"))
            .with_parameter(ParameterSpec::named("word"));
        let options = GenerateOptions::for_language(Language::JavaScript).with_seed(7);
        let mut generator = CodeGenerator::default();
        let first = generator.generate(&request, &options).unwrap();
        let second = generator.generate(&request, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_values_from_modules() {
        let modules = StaticModuleRegistry::new().with_symbol("fixtures", "pages", Input::seq(["3"]));
        let request = RequestSpec::get("http://localhost")
            .with_parameter(ParameterSpec::named("page").with_values("fixtures::pages"));
        let mut generator = CodeGenerator::with_modules(Arc::new(modules));
        let code = generator
            .generate(&request, &GenerateOptions::for_implementation(Implementation::Curl))
            .unwrap();
        assert_eq!(code, "curl -d \"page=3\" \"http://localhost\"");
    }

    #[test]
    fn test_missing_module_is_reported() {
        let request = RequestSpec::get("http://localhost")
            .with_parameter(ParameterSpec::named("page").with_values("fixtures::pages"));
        let error = generate_code(&request, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(
            error,
            GenerateError::Resolve(reqgen_application::ResolveError::InvalidValues { .. })
        ));
    }

    #[test]
    fn test_unlimited_wrap_keeps_one_line() {
        let request = RequestSpec::get(format!("http://localhost/{}", "x".repeat(200)));
        let options = GenerateOptions::default().with_setup(false).with_wrap(0);
        let code = generate_code(&request, &options).unwrap();
        assert!(!code.contains('\n'));
    }
}
