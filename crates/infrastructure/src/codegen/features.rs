//! Supported features report

use indexmap::IndexMap;
use reqgen_domain::{HttpMethod, Implementation, Language};
use serde::Serialize;

use super::registry::GENERATORS;

/// Generation option a renderer may honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    /// Request headers.
    Headers,
    /// Resolved parameters.
    Parameters,
    /// Localised fake values.
    Locale,
    /// Reproducible random values.
    Seed,
    /// Custom indentation.
    Indent,
    /// Custom quotation character.
    QuoteChar,
    /// One line rendering.
    Oneline,
    /// Custom initialisation code.
    Setup,
    /// Custom teardown code.
    Teardown,
    /// Line wrapping.
    Wrap,
}

impl Feature {
    /// Every feature, in report order.
    pub const ALL: [Self; 10] = [
        Self::Headers,
        Self::Parameters,
        Self::Locale,
        Self::Seed,
        Self::Indent,
        Self::QuoteChar,
        Self::Oneline,
        Self::Setup,
        Self::Teardown,
        Self::Wrap,
    ];

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Headers => "Headers",
            Self::Parameters => "Parameters",
            Self::Locale => "Parameters localization",
            Self::Seed => "Parameters seed",
            Self::Indent => "Custom indentation",
            Self::QuoteChar => "Quotation character",
            Self::Oneline => "One line rendering",
            Self::Setup => "Custom initialization",
            Self::Teardown => "Custom teardown",
            Self::Wrap => "Line wrapping",
        }
    }
}

/// Feature support by language, implementation and method.
pub type FeatureReport =
    IndexMap<Language, IndexMap<Implementation, IndexMap<HttpMethod, IndexMap<&'static str, bool>>>>;

/// Methods by language and implementation.
pub type MethodReport = IndexMap<Language, IndexMap<Implementation, Vec<HttpMethod>>>;

/// Reports, for every registered renderer, which features it honours.
#[must_use]
pub fn supported_features() -> FeatureReport {
    let mut report = FeatureReport::new();
    for entry in GENERATORS {
        let methods = report
            .entry(entry.language())
            .or_default()
            .entry(entry.implementation)
            .or_default();
        for method in entry.methods() {
            let features = Feature::ALL
                .iter()
                .map(|feature| (feature.label(), entry.supports(*feature)))
                .collect();
            methods.insert(method, features);
        }
    }
    report
}

/// Reports the methods supported by every implementation.
///
/// A method is listed when its renderer honours at least one feature.
#[must_use]
pub fn supported_methods() -> MethodReport {
    let mut report = MethodReport::new();
    for (language, implementations) in supported_features() {
        for (implementation, methods) in implementations {
            let supported: Vec<_> = methods
                .into_iter()
                .filter(|(_, features)| features.values().any(|supported| *supported))
                .map(|(method, _)| method)
                .collect();
            if !supported.is_empty() {
                report
                    .entry(language)
                    .or_default()
                    .insert(implementation, supported);
            }
        }
    }
    report
}
