//! Code generation infrastructure.
//!
//! Renders a [`RequestSpec`](reqgen_domain::RequestSpec) as a snippet for
//! one of the registered implementations:
//!
//! | language | implementation | methods |
//! |---|---|---|
//! | python | requests | GET |
//! | javascript | fetch | GET |
//! | bash | curl | GET |

mod bash_curl;
mod context;
mod features;
mod generator;
mod javascript_fetch;
mod python_requests;
mod registry;

pub use context::RenderContext;
pub use features::{Feature, FeatureReport, MethodReport, supported_features, supported_methods};
pub use generator::{CodeGenerator, DEFAULT_FENCE, generate_code, generate_markdown};
pub use registry::{GENERATORS, GeneratorEntry, Renderer, lookup};
