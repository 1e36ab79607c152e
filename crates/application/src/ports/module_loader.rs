//! Module loader port
//!
//! Resolves `module::symbol` references to the input they name.

use reqgen_domain::{Input, SymbolRef};

/// Errors that can occur while loading a symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// No module is registered under the path.
    #[error("module '{0}' not found")]
    ModuleNotFound(String),

    /// The module exists but does not define the symbol.
    #[error("object '{symbol}' not found in module '{module}'")]
    AttributeNotFound {
        /// Module path.
        module: String,
        /// Missing symbol name.
        symbol: String,
    },
}

/// Port for loading symbols by module path.
///
/// Adapters decide where modules come from: a static registry built in
/// code, plugins, or anything else able to hand out [`Input`]s.
pub trait ModuleLoader: Send + Sync {
    /// Loads the symbol named by `reference`.
    ///
    /// # Errors
    /// Returns [`LoadError::ModuleNotFound`] if the module is unknown and
    /// [`LoadError::AttributeNotFound`] if the module lacks the symbol.
    fn load(&self, reference: &SymbolRef) -> Result<Input, LoadError>;
}

/// Loader without any module. Every reference fails with
/// [`LoadError::ModuleNotFound`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModules;

impl ModuleLoader for NoModules {
    fn load(&self, reference: &SymbolRef) -> Result<Input, LoadError> {
        Err(LoadError::ModuleNotFound(reference.module.clone()))
    }
}
