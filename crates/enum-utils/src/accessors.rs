//! Views over a normalized enum.
//!
//! All accessors are total: invalid input yields an empty result.

use indexmap::IndexMap;

use crate::input::EnumInput;
use crate::normalize::{CanonicalMap, normalize};
use crate::primitive::Primitive;

/// `[key, value]` pairs in mapping order.
pub fn entries(input: &EnumInput) -> Vec<(String, Primitive)> {
    normalize(input).into_iter().collect()
}

/// Key names of the enum.
///
/// An array is returned as-is, duplicates included, without normalizing it,
/// which is why the element type is [`Primitive`]: `keys([1, 2])` is `[1, 2]`.
/// Every other input yields its canonical property names.
pub fn keys(input: &EnumInput) -> Vec<Primitive> {
    match input {
        EnumInput::Array(items) => pass_through(items),
        _ => normalize(input)
            .into_keys()
            .map(Primitive::String)
            .collect(),
    }
}

/// Values of the enum. Arrays are passed through like in [`keys`].
pub fn values(input: &EnumInput) -> Vec<Primitive> {
    match input {
        EnumInput::Array(items) => pass_through(items),
        _ => normalize(input).into_values().collect(),
    }
}

/// Key to value mapping, reverse-mapping keys omitted.
pub fn values_by_key(input: &EnumInput) -> CanonicalMap {
    normalize(input)
}

/// Value to key mapping, reverse-mapping keys omitted.
///
/// Values become property names. When two keys share a value the later key
/// wins, at the position the value was first seen.
pub fn keys_by_value(input: &EnumInput) -> IndexMap<String, String> {
    let canonical = normalize(input);
    let mut by_value = IndexMap::with_capacity(canonical.len());
    for (key, value) in canonical {
        by_value.insert(value.to_property_key(), key);
    }
    by_value
}

fn pass_through(items: &[EnumInput]) -> Vec<Primitive> {
    match items.iter().map(EnumInput::as_primitive).collect::<Option<Vec<_>>>() {
        Some(primitives) => primitives,
        None => {
            tracing::debug!(len = items.len(), "array holds a non-primitive element");
            Vec::new()
        }
    }
}
