//! Reqgen Infrastructure - Renderers and adapters
//!
//! This crate provides the concrete pieces around the resolution core:
//! the per-implementation snippet renderers and their registry, the
//! static module registry implementing the loader port, request file
//! loading and layered settings.

pub mod adapters;
pub mod codegen;
pub mod error;
pub mod serialization;
pub mod settings;

pub use adapters::StaticModuleRegistry;
pub use codegen::{
    CodeGenerator, DEFAULT_FENCE, Feature, FeatureReport, MethodReport, generate_code,
    generate_markdown, supported_features, supported_methods,
};
pub use error::{GenerateError, GenerateResult};
pub use serialization::{
    RequestFormat, SerializationError, from_json, from_yaml, load_request, parse_request,
    to_json_stable,
};
pub use settings::{Settings, SettingsError};
