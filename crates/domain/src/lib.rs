//! Reqgen Domain - Core snippet generation types
//!
//! This crate defines the domain model of the reqgen snippet generator:
//! requests and parameter specifications, resolution inputs, target
//! languages and their string literal rules.
//! All types here are pure Rust with no I/O dependencies.

pub mod codegen;
pub mod error;
pub mod input;
pub mod locale;
pub mod parameter;
pub mod quoting;
pub mod request;

pub use codegen::{DEFAULT_WRAP, GenerateOptions, Implementation, Language, Setup};
pub use error::{DomainError, DomainResult};
pub use input::{Callable, Input, Scalar, SymbolRef, TypeTag};
pub use locale::Locale;
pub use parameter::ParameterSpec;
pub use quoting::{Continuation, Escape, LanguageRules, QuoteStyle};
pub use request::{HttpMethod, RequestSpec};
