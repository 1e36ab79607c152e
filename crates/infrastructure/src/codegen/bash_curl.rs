//! Bash `curl` snippets
//!
//! Option values and the URL are never split: a command that does not fit
//! is rendered with one option per line.

use super::context::RenderContext;
use crate::error::{GenerateError, GenerateResult};

const DATA_OPTION: &str = "-d";

/// Renders a GET request.
pub(super) fn get(ctx: &RenderContext<'_>) -> GenerateResult<String> {
    let mut options = Vec::with_capacity(ctx.options.len() + ctx.headers.len() + 1);
    for (name, value) in ctx.options {
        if name == DATA_OPTION && !ctx.parameters.is_empty() {
            return Err(GenerateError::ConflictingOption {
                option: name.clone(),
            });
        }
        options.push(match value.as_deref() {
            Some(value) if !value.is_empty() => format!("{name} {}", ctx.quoted(value)),
            _ => name.clone(),
        });
    }
    if !ctx.parameters.is_empty() {
        let data = ctx.encoded_parameters()?;
        options.push(format!("{DATA_OPTION} {}", ctx.quoted(&data)));
    }
    for (name, value) in ctx.headers {
        options.push(format!("-H {}", ctx.quoted(&format!("{name}: {value}"))));
    }
    let url = ctx.quoted(&ctx.url);

    let mut line = String::from("curl");
    for part in options.iter().chain(std::iter::once(&url)) {
        line.push(' ');
        line.push_str(part);
    }

    let mut code = ctx.setup_code("", false, "");
    if ctx.fits(&line) {
        code.push_str(&line);
    } else {
        tracing::debug!(options = options.len(), "one option per line");
        code.push_str("curl \\\n");
        for option in &options {
            code.push_str(ctx.indent);
            code.push_str(option);
            code.push_str(" \\\n");
        }
        code.push_str(ctx.indent);
        code.push_str(&url);
    }
    Ok(ctx.finish(code))
}
