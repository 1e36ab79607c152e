//! Python `requests` snippets
//!
//! ```python
//! import requests
//!
//! req = requests.get('http://localhost', params={'page': '2'})
//! ```

use regex::Regex;

use super::context::{RenderContext, align, separator};
use crate::error::{GenerateError, GenerateResult};

const SETUP: &str = "import requests";
const IDENTIFIER: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Renders a GET request.
///
/// The call is kept on one line when it fits in the wrap width, otherwise
/// every argument goes on its own line with long strings wrapped.
pub(super) fn get(ctx: &RenderContext<'_>) -> GenerateResult<String> {
    for name in ctx.options.keys() {
        validate_identifier(name)?;
    }

    let call = format!("req = requests.get({})", inline_arguments(ctx).join(", "));
    let mut code = ctx.setup_code(SETUP, true, if ctx.oneline { "; " } else { "\n\n" });
    if ctx.fits(&call) {
        code.push_str(&call);
    } else {
        tracing::debug!(width = call.chars().count(), wrap = ctx.wrap, "one argument per line");
        code.push_str("req = requests.get(\n");
        code.push_str(&multiline_arguments(ctx)?);
        code.push(')');
    }
    Ok(ctx.finish(code))
}

fn validate_identifier(name: &str) -> GenerateResult<()> {
    if Regex::new(IDENTIFIER).is_ok_and(|re| re.is_match(name)) {
        Ok(())
    } else {
        Err(GenerateError::InvalidIdentifier(name.to_string()))
    }
}

fn option_value(ctx: &RenderContext<'_>, value: Option<&str>) -> String {
    value.map_or_else(|| "None".to_string(), |value| ctx.quoted(value))
}

fn inline_dict<'a>(
    ctx: &RenderContext<'_>,
    entries: impl Iterator<Item = (&'a String, &'a String)>,
) -> String {
    let entries: Vec<_> = entries
        .map(|(key, value)| format!("{}: {}", ctx.quoted(key), ctx.quoted(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn inline_arguments(ctx: &RenderContext<'_>) -> Vec<String> {
    let mut arguments = vec![ctx.quoted(&ctx.url)];
    if !ctx.parameters.is_empty() {
        let params = ctx.parameters.iter().map(|(name, value)| (name, value));
        arguments.push(format!("params={}", inline_dict(ctx, params)));
    }
    if !ctx.headers.is_empty() {
        arguments.push(format!("headers={}", inline_dict(ctx, ctx.headers.iter())));
    }
    for (name, value) in ctx.options {
        arguments.push(format!("{name}={}", option_value(ctx, value.as_deref())));
    }
    arguments
}

fn multiline_dict<'a>(
    ctx: &RenderContext<'_>,
    keyword: &str,
    entries: impl ExactSizeIterator<Item = (&'a String, &'a String)>,
    more: bool,
) -> GenerateResult<String> {
    let indent = ctx.indent;
    let nested = indent.repeat(2);
    let count = entries.len();
    let mut code = format!("{indent}{keyword}={{\n");
    for (i, (key, value)) in entries.enumerate() {
        let key = format!("{}: ", ctx.quoted(key));
        let comma = separator(i + 1 < count);
        let value = ctx.literal(value, &align(&nested, &key), comma)?;
        code.push_str(&format!("{nested}{key}{value}{comma}\n"));
    }
    code.push_str(&format!("{indent}}}{}\n", separator(more)));
    Ok(code)
}

fn multiline_arguments(ctx: &RenderContext<'_>) -> GenerateResult<String> {
    let indent = ctx.indent;
    let has_headers = !ctx.headers.is_empty();
    let has_options = !ctx.options.is_empty();

    let comma = separator(!ctx.parameters.is_empty() || has_headers || has_options);
    let mut code = format!("{indent}{}{comma}\n", ctx.literal(&ctx.url, indent, comma)?);
    if !ctx.parameters.is_empty() {
        let params = ctx.parameters.iter().map(|(name, value)| (name, value));
        code.push_str(&multiline_dict(ctx, "params", params, has_headers || has_options)?);
    }
    if has_headers {
        code.push_str(&multiline_dict(ctx, "headers", ctx.headers.iter(), has_options)?);
    }
    let count = ctx.options.len();
    for (i, (name, value)) in ctx.options.iter().enumerate() {
        let comma = separator(i + 1 < count);
        let value = match value {
            Some(value) => ctx.literal(value, &align(indent, &format!("{name}=")), comma)?,
            None => "None".to_string(),
        };
        code.push_str(&format!("{indent}{name}={value}{comma}\n"));
    }
    Ok(code)
}
