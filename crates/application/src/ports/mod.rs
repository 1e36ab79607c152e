//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolution core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod module_loader;

pub use module_loader::{LoadError, ModuleLoader, NoModules};
