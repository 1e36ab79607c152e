//! Recursive reduction of inputs to strings

use reqgen_domain::{Input, SymbolRef};

use super::{Context, Resolver};
use crate::error::{ResolveError, ResolveResult};

impl Resolver {
    /// Reduces `input` until a literal is reached.
    ///
    /// Callables and references that keep producing themselves recurse
    /// without bound.
    pub(super) fn resolve_in(&mut self, input: &Input, ctx: Context) -> ResolveResult<String> {
        match input {
            Input::Str(value) => {
                if !ctx.as_path {
                    return Ok(value.clone());
                }
                match SymbolRef::parse(value) {
                    Some(reference) => self.load(&reference, ctx),
                    None => {
                        tracing::warn!(%value, "path without '::' separator, used as a literal");
                        Ok(value.clone())
                    }
                }
            }
            Input::Scalar(scalar) => Ok(scalar.to_string()),
            Input::Seq(items) | Input::Set(items) => {
                self.random.reseed(ctx.seed);
                let item = self
                    .random
                    .choose_index(items.len())
                    .and_then(|index| items.get(index))
                    .ok_or(ResolveError::EmptyCollection)?;
                tracing::trace!(candidates = items.len(), chosen = %item, "chose from collection");
                self.resolve_in(item, ctx)
            }
            Input::Reference(reference) => self.load(reference, ctx),
            Input::Callable(callable) => {
                self.random.reseed(ctx.seed);
                tracing::trace!(callable = callable.name(), "invoking callable");
                let output = callable.call();
                self.resolve_in(&output, ctx)
            }
            Input::Fake(reference) => self.fake(reference, ctx),
            Input::Type(tag) => Ok(tag.name().to_string()),
        }
    }

    fn load(&mut self, reference: &SymbolRef, ctx: Context) -> ResolveResult<String> {
        tracing::debug!(%reference, "loading module symbol");
        let loaded = self.loader.load(reference)?;
        self.resolve_in(&loaded, ctx)
    }
}
