//! Renderer lookup by language, implementation and method

use reqgen_domain::{HttpMethod, Implementation, Language};

use super::context::RenderContext;
use super::features::Feature;
use super::{bash_curl, javascript_fetch, python_requests};
use crate::error::{GenerateError, GenerateResult};

/// Function rendering a request for one method.
pub type Renderer = fn(&RenderContext<'_>) -> GenerateResult<String>;

/// Renderers of one implementation.
#[derive(Debug)]
pub struct GeneratorEntry {
    /// Implementation rendered.
    pub implementation: Implementation,
    renderers: &'static [(HttpMethod, Renderer)],
    features: &'static [Feature],
}

impl GeneratorEntry {
    /// Language of the implementation.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.implementation.language()
    }

    /// Methods with a renderer.
    pub fn methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.renderers.iter().map(|(method, _)| *method)
    }

    /// Whether the renderers honour `feature`.
    #[must_use]
    pub fn supports(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Renderer of `method`.
    ///
    /// # Errors
    /// Returns [`GenerateError::UnsupportedMethod`] if the implementation
    /// can not render the method.
    pub fn renderer(&self, method: HttpMethod) -> GenerateResult<Renderer> {
        self.renderers
            .iter()
            .find(|(candidate, _)| *candidate == method)
            .map(|(_, renderer)| *renderer)
            .ok_or(GenerateError::UnsupportedMethod {
                implementation: self.implementation,
                language: self.language(),
                method,
            })
    }
}

/// Registered implementations. The first one of a language is its default.
pub static GENERATORS: &[GeneratorEntry] = &[
    GeneratorEntry {
        implementation: Implementation::Requests,
        renderers: &[(HttpMethod::Get, python_requests::get as Renderer)],
        features: &Feature::ALL,
    },
    GeneratorEntry {
        implementation: Implementation::Fetch,
        renderers: &[(HttpMethod::Get, javascript_fetch::get as Renderer)],
        features: &Feature::ALL,
    },
    GeneratorEntry {
        implementation: Implementation::Curl,
        renderers: &[(HttpMethod::Get, bash_curl::get as Renderer)],
        features: &Feature::ALL,
    },
];

/// Selects the implementation to render with.
///
/// Without a language, the language owning `implementation` is used, and
/// Python when neither is given. Without an implementation, the first one
/// registered for the language is used.
///
/// # Errors
/// Returns [`GenerateError::UnsupportedLanguage`] if nothing is registered
/// for the language and [`GenerateError::UnsupportedImplementation`] if the
/// implementation does not belong to it.
pub fn lookup(
    language: Option<Language>,
    implementation: Option<Implementation>,
) -> GenerateResult<&'static GeneratorEntry> {
    let language = language
        .or_else(|| implementation.map(|implementation| implementation.language()))
        .unwrap_or_default();
    let mut candidates = GENERATORS
        .iter()
        .filter(|entry| entry.language() == language);
    let first = candidates
        .next()
        .ok_or(GenerateError::UnsupportedLanguage(language))?;
    let Some(implementation) = implementation else {
        return Ok(first);
    };
    std::iter::once(first)
        .chain(candidates)
        .find(|entry| entry.implementation == implementation)
        .ok_or(GenerateError::UnsupportedImplementation {
            implementation,
            language,
        })
}
