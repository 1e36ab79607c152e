//! Typed value synthesis
//!
//! Used when a parameter has neither `value`, `values` nor `faker`: a
//! random value of the declared `type` (a random word by default) is
//! produced.

use std::fmt;

use reqgen_domain::{ParameterSpec, Scalar, SymbolRef};

use super::{Context, Resolver};
use crate::error::{ResolveError, ResolveResult};

/// Default lower bound of `int` and `float` values.
pub const DEFAULT_MIN: f64 = -65536.0;
/// Default upper bound of `int`, `float` and `id` values.
pub const DEFAULT_MAX: f64 = 65536.0;

const ID_MIN: i64 = 1;

/// Types a value can be synthesized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A random word.
    Str,
    /// A random integer.
    Int,
    /// A random float.
    Float,
    /// `true` or `false`, optionally `null`.
    Bool,
    /// A random UUID as 32 hexadecimal digits.
    Uuid,
    /// A random positive integer.
    Id,
    /// A fabricated file path.
    File,
    /// One of the other types, picked at random.
    Random,
}

impl ValueType {
    /// Candidates of [`ValueType::Random`] unless configured otherwise.
    pub const DEFAULT_RANDOM: &'static [Self] = &[
        Self::Str,
        Self::Int,
        Self::Float,
        Self::Bool,
        Self::Uuid,
        Self::Id,
    ];

    /// Parses a type name or one of its aliases, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqgen_application::ValueType;
    ///
    /// assert_eq!(ValueType::parse("Integer"), Some(ValueType::Int));
    /// assert_eq!(ValueType::parse("UUID"), Some(ValueType::Uuid));
    /// assert_eq!(ValueType::parse("complex"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "str" | "string" => Some(Self::Str),
            "int" | "integer" => Some(Self::Int),
            "float" | "number" => Some(Self::Float),
            "bool" | "boolean" => Some(Self::Bool),
            "uuid" | "uuid4" => Some(Self::Uuid),
            "id" | "identifier" => Some(Self::Id),
            "file" | "path" => Some(Self::File),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Uuid => "uuid",
            Self::Id => "id",
            Self::File => "file",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Resolver {
    pub(super) fn synthesize(&mut self, spec: &ParameterSpec, ctx: Context) -> ResolveResult<String> {
        let kind = match &spec.kind {
            None => ValueType::Str,
            Some(input) => {
                let name = self.resolve_in(input, ctx.with_path(false))?;
                ValueType::parse(&name).ok_or_else(|| ResolveError::UnsupportedType {
                    parameter: spec.label(),
                    kind: name,
                })?
            }
        };
        self.synthesize_as(spec, kind, ctx)
    }

    fn synthesize_as(
        &mut self,
        spec: &ParameterSpec,
        kind: ValueType,
        ctx: Context,
    ) -> ResolveResult<String> {
        tracing::debug!(parameter = %spec.label(), %kind, seed = ?ctx.seed, "synthesizing value");
        match kind {
            ValueType::Str => self.fake(&SymbolRef::new("lorem", "word"), ctx),
            ValueType::File => self.fake(&SymbolRef::new("file", "file_path"), ctx),
            ValueType::Int => {
                let min = spec.min.unwrap_or(DEFAULT_MIN);
                let max = spec.max.unwrap_or(DEFAULT_MAX);
                self.random.reseed(ctx.seed);
                int_bounds(min, max)
                    .and_then(|(low, high)| self.random.int_in(low, high))
                    .map(|value| value.to_string())
                    .ok_or_else(|| invalid_range(spec, min, max))
            }
            ValueType::Id => {
                let max = spec.max.unwrap_or(DEFAULT_MAX);
                self.random.reseed(ctx.seed);
                int_bounds(1.0, max)
                    .and_then(|(_, high)| self.random.int_in(ID_MIN, high))
                    .map(|value| value.to_string())
                    .ok_or_else(|| invalid_range(spec, 1.0, max))
            }
            ValueType::Float => {
                let min = spec.min.unwrap_or(DEFAULT_MIN);
                let max = spec.max.unwrap_or(DEFAULT_MAX);
                self.random.reseed(ctx.seed);
                let value = self
                    .random
                    .float_in(min, max)
                    .ok_or_else(|| invalid_range(spec, min, max))?;
                let value = spec.round.map_or(value, |places| round_to(value, places));
                Ok(Scalar::Float(value).to_string())
            }
            ValueType::Bool => {
                let mut candidates = vec!["true", "false"];
                if spec.null {
                    candidates.push("null");
                }
                self.random.reseed(ctx.seed);
                let index = self.random.choose_index(candidates.len()).unwrap_or(0);
                Ok(candidates.get(index).copied().unwrap_or("true").to_string())
            }
            ValueType::Uuid => {
                self.random.reseed(ctx.seed);
                Ok(uuid::Builder::from_random_bytes(self.random.bytes())
                    .into_uuid()
                    .simple()
                    .to_string())
            }
            ValueType::Random => {
                let chosen = self.random_candidate(spec, ctx)?;
                if chosen == ValueType::Random {
                    return Err(ResolveError::UnsupportedType {
                        parameter: spec.label(),
                        kind: chosen.to_string(),
                    });
                }
                self.synthesize_as(spec, chosen, ctx)
            }
        }
    }

    fn random_candidate(&mut self, spec: &ParameterSpec, ctx: Context) -> ResolveResult<ValueType> {
        if let Some(types) = &spec.types {
            let name = self.resolve_in(types, ctx.with_path(false))?;
            return ValueType::parse(&name).ok_or_else(|| ResolveError::UnsupportedType {
                parameter: spec.label(),
                kind: name,
            });
        }
        self.random.reseed(ctx.seed);
        self.random
            .choose_index(self.random_types.len())
            .and_then(|index| self.random_types.get(index).copied())
            .ok_or(ResolveError::EmptyCollection)
    }
}

fn invalid_range(spec: &ParameterSpec, min: f64, max: f64) -> ResolveError {
    ResolveError::InvalidRange {
        parameter: spec.label(),
        min: min.to_string(),
        max: max.to_string(),
    }
}

// Integer bounds inside the representable range, rounded inwards.
#[allow(clippy::cast_possible_truncation)]
fn int_bounds(min: f64, max: f64) -> Option<(i64, i64)> {
    const LIMIT: f64 = 9_007_199_254_740_992.0;
    let in_range = |value: f64| value.is_finite() && value.abs() <= LIMIT;
    (in_range(min) && in_range(max)).then(|| (min.ceil() as i64, max.floor() as i64))
}

fn round_to(value: f64, places: u32) -> f64 {
    match i32::try_from(places) {
        Ok(places) if places < 16 => {
            let factor = 10f64.powi(places);
            (value * factor).round() / factor
        }
        _ => value,
    }
}
