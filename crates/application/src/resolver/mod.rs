//! Lazy resolution of parameter names and values
//!
//! The [`Resolver`] reduces [`Input`]s to strings: literals are returned as
//! they are, collections are sampled, references are loaded through the
//! [`ModuleLoader`] port and callables are invoked, recursively, until a
//! literal is reached. On top of that it implements the parameter rules:
//!
//! - names come from `name`, or from `names` read as module paths;
//! - values follow `value` > `values` > `faker` > `type`, the last one
//!   synthesizing a random value of the declared type.
//!
//! # Usage
//!
//! ```
//! use reqgen_application::Resolver;
//! use reqgen_domain::{Input, ParameterSpec};
//!
//! let mut resolver = Resolver::default();
//! let spec = ParameterSpec::named("format").with_values(Input::seq(["json", "xml"]));
//!
//! let value = resolver.lazy_value(&spec, Some(1), None).unwrap();
//! assert!(value == "json" || value == "xml");
//! assert_eq!(resolver.lazy_value(&spec, Some(1), None).unwrap(), value);
//! ```

mod engine;
mod synthesis;

use std::fmt;
use std::sync::Arc;

use reqgen_domain::{Callable, Input, Locale, ParameterSpec, SymbolRef};

use crate::error::{ResolveError, ResolveResult};
use crate::faker::{Faker, FakerCache, Provider};
use crate::ports::{ModuleLoader, NoModules};
use crate::random::RandomSource;

pub use synthesis::{DEFAULT_MAX, DEFAULT_MIN, ValueType};

/// Per-call resolution settings.
#[derive(Debug, Clone, Copy)]
struct Context {
    seed: Option<u64>,
    locale: Locale,
    as_path: bool,
}

impl Context {
    const fn new(seed: Option<u64>, locale: Locale, as_path: bool) -> Self {
        Self {
            seed,
            locale,
            as_path,
        }
    }

    const fn with_path(self, as_path: bool) -> Self {
        Self { as_path, ..self }
    }
}

/// The lazy resolution engine.
pub struct Resolver {
    loader: Arc<dyn ModuleLoader>,
    random: RandomSource,
    fakers: FakerCache,
    providers: Vec<Provider>,
    random_types: Vec<ValueType>,
}

impl Resolver {
    /// Creates a resolver loading references through `loader`.
    #[must_use]
    pub fn new(loader: Arc<dyn ModuleLoader>) -> Self {
        Self {
            loader,
            random: RandomSource::from_entropy(),
            fakers: FakerCache::default(),
            providers: Vec::new(),
            random_types: ValueType::DEFAULT_RANDOM.to_vec(),
        }
    }

    /// Replaces the random source.
    #[must_use]
    pub fn with_random(mut self, random: RandomSource) -> Self {
        self.random = random;
        self
    }

    /// Replaces the faker cache.
    #[must_use]
    pub fn with_faker_cache(mut self, fakers: FakerCache) -> Self {
        self.fakers = fakers;
        self
    }

    /// Registers a fake data provider.
    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.register_provider(provider);
        self
    }

    /// Adds `file` to the candidates of the `random` type.
    #[must_use]
    pub fn with_file_in_random(mut self) -> Self {
        if !self.random_types.contains(&ValueType::File) {
            self.random_types.push(ValueType::File);
        }
        self
    }

    /// Registers a fake data provider. Cached fakers are dropped so that
    /// every faker built from now on knows the provider.
    pub fn register_provider(&mut self, provider: Provider) {
        tracing::debug!(provider = provider.name(), "registering faker provider");
        self.providers.push(provider);
        self.fakers.clear();
    }

    /// Candidate types of the `random` type.
    #[must_use]
    pub fn random_types(&self) -> &[ValueType] {
        &self.random_types
    }

    /// Reduces `input` to a string.
    ///
    /// When `treat_string_as_path` is set, strings containing `::` are read
    /// as `module::symbol` references and loaded.
    ///
    /// # Errors
    /// Returns [`ResolveError::EmptyCollection`] when choosing from an
    /// empty collection and the load errors of references.
    pub fn resolve(
        &mut self,
        input: &Input,
        seed: Option<u64>,
        treat_string_as_path: bool,
    ) -> ResolveResult<String> {
        self.resolve_in(
            input,
            Context::new(seed, Locale::default(), treat_string_as_path),
        )
    }

    /// Resolves the name of a parameter.
    ///
    /// # Errors
    /// Returns [`ResolveError::MissingName`] if neither `name` nor `names`
    /// is set and [`ResolveError::InvalidNames`] if `names` points to a
    /// missing module or symbol.
    pub fn lazy_name(&mut self, spec: &ParameterSpec, seed: Option<u64>) -> ResolveResult<String> {
        if let Some(name) = &spec.name {
            return self.resolve(name, seed, false);
        }
        if let Some(names) = &spec.names {
            return self.resolve(names, seed, true).map_err(|error| {
                if error.is_load_error() {
                    ResolveError::InvalidNames {
                        names: names.to_string(),
                        source: Box::new(error),
                    }
                } else {
                    error
                }
            });
        }
        Err(ResolveError::MissingName)
    }

    /// Resolves the value of a parameter.
    ///
    /// # Errors
    /// Returns [`ResolveError::InvalidValues`] if `values` points to a
    /// missing module or symbol, [`ResolveError::InvalidFakerSpec`] for a
    /// malformed `faker`, and the synthesis errors of `type`.
    pub fn lazy_value(
        &mut self,
        spec: &ParameterSpec,
        seed: Option<u64>,
        locale: Option<Locale>,
    ) -> ResolveResult<String> {
        let ctx = Context::new(seed, locale.unwrap_or_default(), false);

        if let Some(value) = &spec.value {
            return self.resolve_in(value, ctx);
        }
        if let Some(values) = &spec.values {
            return self
                .resolve_in(values, ctx.with_path(true))
                .map_err(|error| {
                    if error.is_load_error() {
                        ResolveError::InvalidValues {
                            values: values.to_string(),
                            parameter: spec.label(),
                            source: Box::new(error),
                        }
                    } else {
                        error
                    }
                });
        }
        if let Some(faker) = &spec.faker {
            if let Input::Callable(callable) = faker {
                return self.fake_callable(callable, ctx);
            }
            let reference = match faker {
                Input::Str(path) => SymbolRef::parse(path),
                Input::Fake(reference) | Input::Reference(reference) => Some(reference.clone()),
                _ => None,
            }
            .ok_or_else(|| ResolveError::InvalidFakerSpec {
                parameter: spec.label(),
                faker: faker.to_string(),
            })?;
            return self.fake(&reference, ctx);
        }
        self.synthesize(spec, ctx)
    }

    fn faker(&mut self, seed: Option<u64>, locale: Locale) -> Arc<Faker> {
        let providers = &self.providers;
        self.fakers.get_or_insert_with(seed, locale, || {
            let mut faker = Faker::new(locale, seed);
            for provider in providers {
                faker.add_provider(provider.clone());
            }
            faker
        })
    }

    fn fake(&mut self, reference: &SymbolRef, ctx: Context) -> ResolveResult<String> {
        self.random.reseed(ctx.seed);
        let faker = self.faker(ctx.seed, ctx.locale);
        Ok(faker.generate(reference, self.random.rng_mut())?)
    }

    /// A callable `faker` may return a provider function (`Input::Fake` or
    /// a `provider::function` string), generated with the seeded, localised
    /// faker, or any other input, resolved in the same context.
    fn fake_callable(&mut self, callable: &Callable, ctx: Context) -> ResolveResult<String> {
        self.random.reseed(ctx.seed);
        tracing::trace!(callable = callable.name(), "invoking faker callable");
        match callable.call() {
            Input::Fake(reference) => self.fake(&reference, ctx),
            Input::Str(path) => match SymbolRef::parse(&path) {
                Some(reference) => self.fake(&reference, ctx),
                None => Ok(path),
            },
            output => self.resolve_in(&output, ctx),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Arc::new(NoModules))
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("providers", &self.providers)
            .field("random_types", &self.random_types)
            .field("cached_fakers", &self.fakers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use reqgen_domain::{Scalar, TypeTag};

    use super::*;
    use crate::ports::LoadError;

    struct Fixtures(HashMap<&'static str, HashMap<&'static str, Input>>);

    impl ModuleLoader for Fixtures {
        fn load(&self, reference: &SymbolRef) -> Result<Input, LoadError> {
            let module = self
                .0
                .get(reference.module.as_str())
                .ok_or_else(|| LoadError::ModuleNotFound(reference.module.clone()))?;
            module
                .get(reference.symbol.as_str())
                .cloned()
                .ok_or_else(|| LoadError::AttributeNotFound {
                    module: reference.module.clone(),
                    symbol: reference.symbol.clone(),
                })
        }
    }

    fn resolver() -> Resolver {
        let mut module = HashMap::new();
        module.insert(
            "get_names",
            Input::callable("get_names", || Input::seq(["x", "y"])),
        );
        module.insert("ids", Input::seq([1, 2, 3]));
        module.insert("alias", Input::str("tests.mod::ids"));
        let mut modules = HashMap::new();
        modules.insert("tests.mod", module);
        Resolver::new(Arc::new(Fixtures(modules)))
    }

    #[test]
    fn test_literal_string_is_returned_unchanged() {
        let mut resolver = resolver();
        let input = Input::str("tests.mod::ids");
        assert_eq!(resolver.resolve(&input, None, false).unwrap(), "tests.mod::ids");
    }

    #[test]
    fn test_path_without_separator_is_literal() {
        let mut resolver = resolver();
        assert_eq!(
            resolver.resolve(&Input::str("plain"), None, true).unwrap(),
            "plain"
        );
    }

    #[test]
    fn test_path_is_loaded_recursively() {
        let mut resolver = resolver();
        let value = resolver
            .resolve(&Input::str("tests.mod::alias"), Some(3), true)
            .unwrap();
        assert!(["1", "2", "3"].contains(&value.as_str()));
    }

    #[test]
    fn test_scalars_and_types() {
        let mut resolver = resolver();
        assert_eq!(resolver.resolve(&Input::from(5.73), None, false).unwrap(), "5.73");
        assert_eq!(resolver.resolve(&Input::from(false), None, false).unwrap(), "false");
        assert_eq!(
            resolver.resolve(&Input::Scalar(Scalar::Null), None, false).unwrap(),
            "null"
        );
        assert_eq!(
            resolver.resolve(&Input::Type(TypeTag::Str), None, false).unwrap(),
            "str"
        );
    }

    #[test]
    fn test_empty_collection_fails() {
        let mut resolver = resolver();
        assert_eq!(
            resolver.resolve(&Input::Seq(Vec::new()), None, false),
            Err(ResolveError::EmptyCollection)
        );
        assert_eq!(
            resolver.resolve(&Input::set(Vec::<Input>::new()), Some(1), false),
            Err(ResolveError::EmptyCollection)
        );
    }

    #[test]
    fn test_callable_result_is_resolved() {
        let mut resolver = resolver();
        let input = Input::callable("pair", || Input::seq(["foo", "bar"]));
        let value = resolver.resolve(&input, None, false).unwrap();
        assert!(value == "foo" || value == "bar");
    }

    #[test]
    fn test_lazy_name_from_names_path() {
        let mut resolver = resolver();
        let spec = ParameterSpec::default().with_names("tests.mod::get_names");
        let name = resolver.lazy_name(&spec, None).unwrap();
        assert!(name == "x" || name == "y");
    }

    #[test]
    fn test_lazy_name_prefers_name() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("q").with_names("tests.mod::get_names");
        assert_eq!(resolver.lazy_name(&spec, None).unwrap(), "q");
    }

    #[test]
    fn test_lazy_name_missing() {
        let mut resolver = resolver();
        assert_eq!(
            resolver.lazy_name(&ParameterSpec::default(), None),
            Err(ResolveError::MissingName)
        );
    }

    #[test]
    fn test_lazy_name_invalid_names() {
        let mut resolver = resolver();
        let spec = ParameterSpec::default().with_names("tests.mod::nope");
        let err = resolver.lazy_name(&spec, None).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidNames {
                names: "tests.mod::nope".to_string(),
                source: Box::new(ResolveError::AttributeNotFound {
                    module: "tests.mod".to_string(),
                    symbol: "nope".to_string(),
                }),
            }
        );
    }

    #[test]
    fn test_lazy_value_literal() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("a").with_value("foo");
        assert_eq!(resolver.lazy_value(&spec, None, None).unwrap(), "foo");
    }

    #[test]
    fn test_lazy_value_value_wins_over_everything() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("a")
            .with_value("foo")
            .with_values(Input::seq(["bar"]))
            .with_faker("lorem::word")
            .with_type("int");
        assert_eq!(resolver.lazy_value(&spec, None, None).unwrap(), "foo");
    }

    #[test]
    fn test_lazy_value_values_is_reproducible() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("a").with_values(Input::seq(["a", "b"]));
        let first = resolver.lazy_value(&spec, Some(1), None).unwrap();
        for _ in 0..10 {
            assert_eq!(resolver.lazy_value(&spec, Some(1), None).unwrap(), first);
        }
    }

    #[test]
    fn test_lazy_value_invalid_values() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("a").with_values("missing.mod::values");
        let err = resolver.lazy_value(&spec, None, None).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidValues { ref values, ref parameter, .. }
                if values == "missing.mod::values" && parameter == "a"
        ));
    }

    #[test]
    fn test_lazy_value_faker_path() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("a").with_faker("lorem::word");
        let first = resolver.lazy_value(&spec, Some(2), Some(Locale::FrFr)).unwrap();
        assert!(!first.is_empty());
        assert_eq!(
            resolver.lazy_value(&spec, Some(2), Some(Locale::FrFr)).unwrap(),
            first
        );
    }

    #[test]
    fn test_lazy_value_faker_function() {
        let mut resolver = resolver().with_provider(
            Provider::new("fixed").with_function("token", |_, _| "abc".to_string()),
        );
        let spec = ParameterSpec::named("a").with_faker(Input::fake("fixed", "token"));
        assert_eq!(resolver.lazy_value(&spec, None, None).unwrap(), "abc");
    }

    #[test]
    fn test_lazy_value_faker_callable() {
        let mut resolver = resolver().with_provider(
            Provider::new("fixed").with_function("token", |_, _| "abc".to_string()),
        );
        let spec = ParameterSpec::named("a")
            .with_faker(Input::callable("token", || Input::fake("fixed", "token")));
        assert_eq!(resolver.lazy_value(&spec, Some(1), None).unwrap(), "abc");

        let spec = ParameterSpec::named("a")
            .with_faker(Input::callable("word", || Input::str("x")));
        assert_eq!(resolver.lazy_value(&spec, Some(1), None).unwrap(), "x");

        let spec = ParameterSpec::named("a")
            .with_faker(Input::callable("color", || Input::seq(["red", "green", "blue"])));
        let first = resolver.lazy_value(&spec, Some(5), None).unwrap();
        assert!(["red", "green", "blue"].contains(&first.as_str()));
        for _ in 0..5 {
            assert_eq!(resolver.lazy_value(&spec, Some(5), None).unwrap(), first);
        }
    }

    #[test]
    fn test_lazy_value_faker_callable_returning_path() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("a")
            .with_faker(Input::callable("word", || Input::str("lorem::word")));
        let first = resolver.lazy_value(&spec, Some(3), Some(Locale::FrFr)).unwrap();
        assert!(!first.is_empty());
        assert_ne!(first, "lorem::word");
        assert_eq!(
            resolver.lazy_value(&spec, Some(3), Some(Locale::FrFr)).unwrap(),
            first
        );
    }

    #[test]
    fn test_lazy_value_invalid_faker() {
        let mut resolver = resolver();
        for faker in [
            Input::from(3),
            Input::from(true),
            Input::str("word"),
            Input::seq(["lorem::word"]),
        ] {
            let spec = ParameterSpec::named("a").with_faker(faker.clone());
            assert_eq!(
                resolver.lazy_value(&spec, None, None),
                Err(ResolveError::InvalidFakerSpec {
                    parameter: "a".to_string(),
                    faker: faker.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_lazy_value_unknown_faker_provider() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("a").with_faker("nope::word");
        assert_eq!(
            resolver.lazy_value(&spec, None, None),
            Err(ResolveError::ModuleNotFound {
                module: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_registering_provider_drops_cached_fakers() {
        let mut resolver = resolver();
        let spec = ParameterSpec::named("a").with_faker("late::value");
        assert!(resolver.lazy_value(&spec, Some(1), None).is_err());
        resolver.register_provider(Provider::new("late").with_function("value", |_, _| "ok".to_string()));
        assert_eq!(resolver.lazy_value(&spec, Some(1), None).unwrap(), "ok");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_literal_resolution_is_identity(value in "\\PC*") {
                let mut resolver = Resolver::default();
                prop_assert_eq!(resolver.resolve(&Input::str(value.clone()), None, false).unwrap(), value);
            }

            #[test]
            fn prop_choice_is_contained(items in prop::collection::vec("[a-z]{0,8}", 1..10), seed in any::<Option<u64>>()) {
                let mut resolver = Resolver::default();
                let value = resolver.resolve(&Input::seq(items.clone()), seed, false).unwrap();
                prop_assert!(items.contains(&value));
                let value = resolver.resolve(&Input::set(items.clone()), seed, false).unwrap();
                prop_assert!(items.contains(&value));
            }

            #[test]
            fn prop_values_are_deterministic_under_seed(seed in any::<u64>(), kind in prop::sample::select(vec!["str", "int", "float", "bool", "uuid", "id", "random", "file"])) {
                let mut resolver = Resolver::default();
                let spec = ParameterSpec::named("p").with_type(kind);
                let first = resolver.lazy_value(&spec, Some(seed), None).unwrap();
                prop_assert_eq!(resolver.lazy_value(&spec, Some(seed), None).unwrap(), first);
            }
        }
    }
}
