//! Reqgen Application - Resolution and formatting core
//!
//! This crate defines the core of the snippet generator:
//! - The lazy [`Resolver`] turning parameter specifications into strings
//! - Typed value synthesis and fake data providers
//! - The wrapping [`StringFormatter`] rendering code literals
//! - Port traits (interfaces for external dependencies)

pub mod error;
pub mod faker;
pub mod formatter;
pub mod ports;
pub mod random;
pub mod resolver;

pub use error::{FormatError, ResolveError, ResolveResult};
pub use faker::{Faker, FakerCache, Provider, ProviderFn};
pub use formatter::{DEFAULT_RESERVED_COLUMNS, MIN_RESERVED_COLUMNS, StringFormatter, WrapBudget};
pub use ports::{LoadError, ModuleLoader, NoModules};
pub use random::RandomSource;
pub use resolver::{DEFAULT_MAX, DEFAULT_MIN, Resolver, ValueType};
