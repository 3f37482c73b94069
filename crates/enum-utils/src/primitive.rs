//! The scalar type every canonical key and value is made of.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::numeric::number_to_string;

/// Largest integer a double represents exactly (2^53).
const MAX_SAFE_INTEGER_BOUND: f64 = 9_007_199_254_740_992.0;

/// A string or number: the only types allowed as enum keys and values.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    String(String),
    Number(f64),
}

impl Primitive {
    /// The property name this primitive becomes when used as a key.
    ///
    /// Strings are returned unchanged; numbers use the JavaScript rendering,
    /// so `1.0` becomes `"1"` and `1e21` becomes `"1e+21"`.
    pub fn to_property_key(&self) -> String {
        match self {
            Primitive::String(text) => text.clone(),
            Primitive::Number(value) => number_to_string(*value),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::String(text) => Some(text),
            Primitive::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Primitive::Number(value) => Some(*value),
            Primitive::String(_) => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Primitive::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Primitive::Number(_))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::String(text) => f.write_str(text),
            Primitive::Number(value) => f.write_str(&number_to_string(*value)),
        }
    }
}

// Integral numbers serialize as JSON integers (`1`, not `1.0`), matching what
// `JSON.stringify` produces for the same mapping.
impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Primitive::String(text) => serializer.serialize_str(text),
            Primitive::Number(value)
                if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER_BOUND =>
            {
                serializer.serialize_i64(*value as i64)
            }
            Primitive::Number(value) => serializer.serialize_f64(*value),
        }
    }
}

impl From<&str> for Primitive {
    fn from(text: &str) -> Self {
        Primitive::String(text.to_string())
    }
}

impl From<String> for Primitive {
    fn from(text: String) -> Self {
        Primitive::String(text)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Number(f64::from(value))
    }
}

/// Typed projection of a string-valued enum. Hands the primitive back on mismatch.
impl TryFrom<Primitive> for String {
    type Error = Primitive;

    fn try_from(primitive: Primitive) -> Result<Self, Self::Error> {
        match primitive {
            Primitive::String(text) => Ok(text),
            other => Err(other),
        }
    }
}

/// Typed projection of a numeric enum. Hands the primitive back on mismatch.
impl TryFrom<Primitive> for f64 {
    type Error = Primitive;

    fn try_from(primitive: Primitive) -> Result<Self, Self::Error> {
        match primitive {
            Primitive::Number(value) => Ok(value),
            other => Err(other),
        }
    }
}
