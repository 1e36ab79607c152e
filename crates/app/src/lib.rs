//! Reqgen - HTTP request code snippet generator
//!
//! Command line front end over [`reqgen_infrastructure::CodeGenerator`].
//! Settings are layered as file < environment < flags.

pub mod cli;

pub use cli::Cli;

use std::sync::Arc;

use anyhow::Context;
use reqgen_domain::RequestSpec;
use reqgen_infrastructure::{
    CodeGenerator, Settings, StaticModuleRegistry, load_request, supported_features,
    to_json_stable,
};

/// Runs the command and returns what must be printed.
///
/// # Errors
/// Returns an error if the settings or the request file can not be loaded,
/// or if the snippet can not be generated.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    if cli.features {
        let report = to_json_stable(&supported_features())?;
        return Ok(report.trim_end().to_string());
    }

    let settings = Settings::load(cli.config.as_deref()).context("invalid settings")?;
    let options = cli.apply(settings.to_options()?);
    let request = match &cli.request {
        Some(path) => load_request(path)
            .with_context(|| format!("failed to load request '{}'", path.display()))?,
        None => RequestSpec::default(),
    };
    let mut request = cli.apply_request(request);
    tracing::debug!(?options, parameters = request.parameters.len(), "running");

    // `names` and `values` paths load from the modules the request declares
    let modules = std::mem::take(&mut request.modules);
    let mut generator = if modules.is_empty() {
        CodeGenerator::default()
    } else {
        CodeGenerator::with_modules(Arc::new(StaticModuleRegistry::from_modules(modules)))
    };
    let code = if cli.markdown {
        generator.generate_markdown(&request, &options, &cli.fence)?
    } else {
        generator.generate(&request, &options)?
    };
    Ok(code)
}
