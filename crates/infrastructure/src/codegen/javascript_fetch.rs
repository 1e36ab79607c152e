//! JavaScript fetch API snippets
//!
//! The promise chain always spans several lines unless one-line rendering
//! is requested; the wrap width only applies to string literals.

use super::context::{RenderContext, align, separator};
use crate::error::GenerateResult;

/// Renders a GET request.
///
/// Parameters are url-encoded into the query string. Enabling the setup
/// prepends the `node-fetch` import for NodeJS.
pub(super) fn get(ctx: &RenderContext<'_>) -> GenerateResult<String> {
    let quote = ctx.quote();
    let node_fetch = format!("const fetch = require({quote}node-fetch{quote});");
    let mut code = ctx.setup_code(&node_fetch, false, if ctx.oneline { " " } else { "\n\n" });

    let mut url = ctx.url.clone();
    if !ctx.parameters.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&ctx.encoded_parameters()?);
    }

    if ctx.oneline {
        code.push_str(&inline_call(ctx, &url));
        code.push_str(&format!(
            ".then(function(response) {{console.log(response)}})\
             .catch(function(error) {{console.error({quote}Error:{quote}, error)}});"
        ));
    } else {
        code.push_str(&multiline_call(ctx, &url)?);
        let indent = ctx.indent;
        code.push_str(&format!(
            ".then(function(response) {{\n{indent}console.log(response);\n}})\
             .catch(function(error) {{\n{indent}console.error({quote}Error:{quote}, error);\n}});"
        ));
    }
    Ok(ctx.finish(code))
}

fn has_init(ctx: &RenderContext<'_>) -> bool {
    !ctx.headers.is_empty() || !ctx.options.is_empty()
}

/// `headers` is quoted like the other init keys when options are present.
fn headers_key(ctx: &RenderContext<'_>) -> String {
    if ctx.options.is_empty() {
        "headers".to_string()
    } else {
        ctx.quoted("headers")
    }
}

fn inline_call(ctx: &RenderContext<'_>, url: &str) -> String {
    let mut call = format!("fetch({}", ctx.quoted(url));
    if has_init(ctx) {
        let mut members = Vec::new();
        if !ctx.headers.is_empty() {
            let headers: Vec<_> = ctx
                .headers
                .iter()
                .map(|(name, value)| format!("{}: {}", ctx.quoted(name), ctx.quoted(value)))
                .collect();
            members.push(format!("{}: {{{}}}", headers_key(ctx), headers.join(", ")));
        }
        for (key, value) in ctx.options {
            let value = value
                .as_deref()
                .map_or_else(|| "null".to_string(), |value| ctx.quoted(value));
            members.push(format!("{}: {value}", ctx.quoted(key)));
        }
        call.push_str(&format!(", {{{}}}", members.join(", ")));
    }
    call.push(')');
    call
}

fn multiline_call(ctx: &RenderContext<'_>, url: &str) -> GenerateResult<String> {
    let indent = ctx.indent;
    let comma = separator(has_init(ctx));
    let mut call = format!("fetch(\n{indent}{}{comma}\n", ctx.literal(url, indent, comma)?);
    if has_init(ctx) {
        let nested = indent.repeat(2);
        call.push_str(&format!("{indent}{{\n"));
        if !ctx.headers.is_empty() {
            let inner = indent.repeat(3);
            call.push_str(&format!("{nested}{}: {{\n", headers_key(ctx)));
            let count = ctx.headers.len();
            for (i, (name, value)) in ctx.headers.iter().enumerate() {
                let key = format!("{}: ", ctx.quoted(name));
                let comma = separator(i + 1 < count);
                let value = ctx.literal(value, &align(&inner, &key), comma)?;
                call.push_str(&format!("{inner}{key}{value}{comma}\n"));
            }
            call.push_str(&format!("{nested}}}{}\n", separator(!ctx.options.is_empty())));
        }
        let count = ctx.options.len();
        for (i, (key, value)) in ctx.options.iter().enumerate() {
            let key = format!("{}: ", ctx.quoted(key));
            let comma = separator(i + 1 < count);
            let value = match value {
                Some(value) => ctx.literal(value, &align(&nested, &key), comma)?,
                None => "null".to_string(),
            };
            call.push_str(&format!("{nested}{key}{value}{comma}\n"));
        }
        call.push_str(&format!("{indent}}}\n"));
    }
    call.push(')');
    Ok(call)
}
