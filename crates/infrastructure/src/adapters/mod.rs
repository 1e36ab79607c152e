//! Port adapters

mod static_modules;

pub use static_modules::StaticModuleRegistry;
