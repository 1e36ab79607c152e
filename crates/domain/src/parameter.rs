//! Parameter specifications
//!
//! A [`ParameterSpec`] declares how the name and the value of one request
//! parameter are produced. Naming comes from `name` or `names`; the value
//! follows the precedence `value` > `values` > `faker` > `type`.

use serde::{Deserialize, Deserializer};

use crate::input::Input;

/// Declarative description of a request parameter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSpec {
    /// Literal, collection or callable producing the name.
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Input>,
    /// Like `name`, but strings are read as `module::symbol` paths.
    #[serde(default, deserialize_with = "present")]
    pub names: Option<Input>,
    /// Literal, collection or callable producing the value.
    #[serde(default, deserialize_with = "present")]
    pub value: Option<Input>,
    /// Like `value`, but strings are read as `module::symbol` paths.
    #[serde(default, deserialize_with = "present")]
    pub values: Option<Input>,
    /// Fake-data provider function, as a `provider::function` string.
    #[serde(default, deserialize_with = "present")]
    pub faker: Option<Input>,
    /// Type tag used to synthesize a value when no explicit one is given.
    #[serde(default, rename = "type", deserialize_with = "present")]
    pub kind: Option<Input>,
    /// Lower bound for numeric types.
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper bound for numeric types.
    #[serde(default)]
    pub max: Option<f64>,
    /// Decimal places floats are rounded to.
    #[serde(default)]
    pub round: Option<u32>,
    /// Whether booleans may also be `null`.
    #[serde(default)]
    pub null: bool,
    /// Candidate type tags for the `random` type.
    #[serde(default, deserialize_with = "present")]
    pub types: Option<Input>,
}

// A key given with an explicit `null` still counts as present.
fn present<'de, D>(deserializer: D) -> Result<Option<Input>, D::Error>
where
    D: Deserializer<'de>,
{
    Input::deserialize(deserializer).map(Some)
}

impl ParameterSpec {
    /// Creates a parameter with a literal name.
    #[must_use]
    pub fn named(name: impl Into<Input>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the `names` input.
    #[must_use]
    pub fn with_names(mut self, names: impl Into<Input>) -> Self {
        self.names = Some(names.into());
        self
    }

    /// Sets the `value` input.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Input>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the `values` input.
    #[must_use]
    pub fn with_values(mut self, values: impl Into<Input>) -> Self {
        self.values = Some(values.into());
        self
    }

    /// Sets the `faker` input.
    #[must_use]
    pub fn with_faker(mut self, faker: impl Into<Input>) -> Self {
        self.faker = Some(faker.into());
        self
    }

    /// Sets the `type` input.
    #[must_use]
    pub fn with_type(mut self, kind: impl Into<Input>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the lower bound.
    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the rounding of floats.
    #[must_use]
    pub const fn with_round(mut self, places: u32) -> Self {
        self.round = Some(places);
        self
    }

    /// Allows `null` for booleans.
    #[must_use]
    pub const fn with_null(mut self, null: bool) -> Self {
        self.null = null;
        self
    }

    /// Sets the candidate types of the `random` type.
    #[must_use]
    pub fn with_types(mut self, types: impl Into<Input>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Human readable label used in error messages.
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .as_ref()
            .or(self.names.as_ref())
            .map_or_else(|| "<unnamed>".to_string(), ToString::to_string)
    }
}
