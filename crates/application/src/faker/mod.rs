//! Fake data generation
//!
//! A [`Faker`] is a set of named providers, each exposing named functions
//! that produce plausible strings (words, file paths, e-mail addresses...)
//! for a locale. `faker` parameter attributes name one of these functions as
//! `provider::function`.

mod cache;
mod providers;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqgen_domain::{Locale, SymbolRef};

use crate::ports::LoadError;

pub use cache::{FAKER_CACHE_CAPACITY, FakerCache};
pub use providers::builtin_providers;

/// Function of a provider.
pub type ProviderFn = Arc<dyn Fn(&Faker, &mut StdRng) -> String + Send + Sync>;

/// Named group of fake data functions.
#[derive(Clone)]
pub struct Provider {
    name: String,
    functions: IndexMap<String, ProviderFn>,
}

impl Provider {
    /// Creates a provider without functions.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: IndexMap::new(),
        }
    }

    /// Adds a function, replacing any function with the same name.
    #[must_use]
    pub fn with_function<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&Faker, &mut StdRng) -> String + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    /// Returns the provider name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&ProviderFn> {
        self.functions.get(name)
    }

    /// Returns the function names in registration order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Seeded, localised fake data generator.
#[derive(Debug, Clone)]
pub struct Faker {
    locale: Locale,
    seed: Option<u64>,
    providers: IndexMap<String, Provider>,
}

impl Faker {
    /// Creates a faker with the built-in providers.
    #[must_use]
    pub fn new(locale: Locale, seed: Option<u64>) -> Self {
        let mut faker = Self::bare(locale, seed);
        for provider in builtin_providers() {
            faker.add_provider(provider);
        }
        faker
    }

    /// Creates a faker without providers.
    #[must_use]
    pub fn bare(locale: Locale, seed: Option<u64>) -> Self {
        Self {
            locale,
            seed,
            providers: IndexMap::new(),
        }
    }

    /// Registers a provider, replacing any provider with the same name.
    pub fn add_provider(&mut self, provider: Provider) {
        self.providers.insert(provider.name.clone(), provider);
    }

    /// Locale of generated data.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Seed every generation starts from, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Looks up a provider.
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    /// Registered providers in registration order.
    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.providers.values()
    }

    /// Invokes `provider::function`.
    ///
    /// A seeded faker draws from a generator freshly seeded with its seed;
    /// otherwise the draw comes from `rng`.
    ///
    /// # Errors
    /// Returns [`LoadError::ModuleNotFound`] for an unknown provider and
    /// [`LoadError::AttributeNotFound`] for an unknown function.
    pub fn generate(&self, reference: &SymbolRef, rng: &mut StdRng) -> Result<String, LoadError> {
        let function = self.lookup(reference)?;
        let value = match self.seed {
            Some(seed) => function(self, &mut StdRng::seed_from_u64(seed)),
            None => function(self, rng),
        };
        tracing::debug!(faker = %reference, locale = %self.locale, %value, "generated fake value");
        Ok(value)
    }

    /// Invokes a function with the given generator, ignoring the seed.
    /// Used by provider functions composing other functions.
    ///
    /// # Errors
    /// Same as [`Faker::generate`].
    pub fn call(&self, reference: &SymbolRef, rng: &mut StdRng) -> Result<String, LoadError> {
        self.lookup(reference).map(|function| function(self, rng))
    }

    fn lookup(&self, reference: &SymbolRef) -> Result<&ProviderFn, LoadError> {
        let provider = self
            .providers
            .get(&reference.module)
            .ok_or_else(|| LoadError::ModuleNotFound(reference.module.clone()))?;
        provider
            .function(&reference.symbol)
            .ok_or_else(|| LoadError::AttributeNotFound {
                module: reference.module.clone(),
                symbol: reference.symbol.clone(),
            })
    }
}
