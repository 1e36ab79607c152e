//! In-memory module registry

use indexmap::IndexMap;
use reqgen_application::{LoadError, ModuleLoader};
use reqgen_domain::{Input, SymbolRef};

/// Module loader backed by modules registered in code.
///
/// Modules are identified by their dotted path (`fixtures.names`) and hold
/// named symbols, any [`Input`] including callables.
#[derive(Debug, Clone, Default)]
pub struct StaticModuleRegistry {
    modules: IndexMap<String, IndexMap<String, Input>>,
}

impl StaticModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `modules`, by module path then symbol.
    #[must_use]
    pub fn from_modules(modules: IndexMap<String, IndexMap<String, Input>>) -> Self {
        tracing::debug!(modules = modules.len(), "registering declared modules");
        Self { modules }
    }

    /// Registers `symbol` in `module`, creating the module if needed.
    /// A previous symbol with the same name is replaced.
    pub fn register(
        &mut self,
        module: impl Into<String>,
        symbol: impl Into<String>,
        value: impl Into<Input>,
    ) {
        let module = module.into();
        let symbol = symbol.into();
        tracing::debug!(%module, %symbol, "registering module symbol");
        self.modules
            .entry(module)
            .or_default()
            .insert(symbol, value.into());
    }

    /// Builder form of [`StaticModuleRegistry::register`].
    #[must_use]
    pub fn with_symbol(
        mut self,
        module: impl Into<String>,
        symbol: impl Into<String>,
        value: impl Into<Input>,
    ) -> Self {
        self.register(module, symbol, value);
        self
    }

    /// Whether a module is registered under `module`.
    #[must_use]
    pub fn contains_module(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Names of the symbols of a module, in registration order.
    pub fn symbols(&self, module: &str) -> impl Iterator<Item = &str> {
        self.modules
            .get(module)
            .into_iter()
            .flat_map(|symbols| symbols.keys().map(String::as_str))
    }
}

impl ModuleLoader for StaticModuleRegistry {
    fn load(&self, reference: &SymbolRef) -> Result<Input, LoadError> {
        let symbols = self
            .modules
            .get(&reference.module)
            .ok_or_else(|| LoadError::ModuleNotFound(reference.module.clone()))?;
        symbols
            .get(&reference.symbol)
            .cloned()
            .ok_or_else(|| LoadError::AttributeNotFound {
                module: reference.module.clone(),
                symbol: reference.symbol.clone(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> StaticModuleRegistry {
        StaticModuleRegistry::new()
            .with_symbol("fixtures.names", "first", Input::seq(["ana", "luis"]))
            .with_symbol("fixtures.names", "fixed", "id")
            .with_symbol("fixtures.values", "answer", 42)
    }

    #[test]
    fn test_load_registered_symbol() {
        let loaded = registry()
            .load(&SymbolRef::new("fixtures.names", "fixed"))
            .unwrap();
        assert_eq!(loaded, Input::str("id"));
    }

    #[test]
    fn test_missing_module_and_symbol_are_distinct() {
        let registry = registry();
        assert_eq!(
            registry.load(&SymbolRef::new("fixtures.missing", "fixed")),
            Err(LoadError::ModuleNotFound("fixtures.missing".to_string()))
        );
        assert_eq!(
            registry.load(&SymbolRef::new("fixtures.names", "missing")),
            Err(LoadError::AttributeNotFound {
                module: "fixtures.names".to_string(),
                symbol: "missing".to_string(),
            })
        );
    }

    #[test]
    fn test_from_declared_modules() {
        let modules = IndexMap::from([(
            "fixtures.params".to_string(),
            IndexMap::from([("names".to_string(), Input::seq(["page", "offset"]))]),
        )]);
        let registry = StaticModuleRegistry::from_modules(modules);
        assert!(registry.contains_module("fixtures.params"));
        assert_eq!(
            registry
                .load(&SymbolRef::new("fixtures.params", "names"))
                .unwrap(),
            Input::seq(["page", "offset"])
        );
    }

    #[test]
    fn test_register_replaces_symbol() {
        let mut registry = registry();
        registry.register("fixtures.names", "fixed", "name");
        assert_eq!(
            registry
                .load(&SymbolRef::new("fixtures.names", "fixed"))
                .unwrap(),
            Input::str("name")
        );
        assert_eq!(
            registry.symbols("fixtures.names").collect::<Vec<_>>(),
            vec!["first", "fixed"]
        );
        assert!(registry.contains_module("fixtures.values"));
    }
}
