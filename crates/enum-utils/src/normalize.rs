//! Enum normalization.
//!
//! Every accessor works on one canonical form: an insertion-ordered mapping
//! from property name to [`Primitive`]. This module builds that form from any
//! [`EnumInput`]:
//!
//! 1. **Candidate extraction**: pick keys, values and a key/value target
//!    according to the input's shape (object > array > set > map > other).
//! 2. **Validation**: a single non-primitive key or value rejects the whole
//!    input and the result is empty.
//! 3. **Reverse-mapping collapse**: a numeric enum compiled from TypeScript
//!    carries both `Name -> value` and `value -> Name` entries. When the keys
//!    split exactly in half between numeric-looking keys and names, only the
//!    named entries are kept.
//!
//! # Example
//!
//! ```typescript
//! enum Direction { Up = 1, Down = 2 }
//! // compiles to { Up: 1, Down: 2, "1": "Up", "2": "Down" }
//! ```
//!
//! normalizes to `{ Up: 1, Down: 2 }`.

use std::fmt;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::input::{EnumInput, EnumSet};
use crate::numeric::{KeyClass, classify};
use crate::primitive::Primitive;

/// Property name to primitive value, in input order.
pub type CanonicalMap = IndexMap<String, Primitive>;

/// Why an input was treated as an invalid enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The key at `index` is not a string or number.
    NonPrimitiveKey { index: usize },
    /// The value at `index` is not a string or number.
    NonPrimitiveValue { index: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NonPrimitiveKey { index } => {
                write!(f, "key at position {index} is not a string or number")
            }
            Rejection::NonPrimitiveValue { index } => {
                write!(f, "value at position {index} is not a string or number")
            }
        }
    }
}

/// Keys and key/value target extracted from an input, before collapse.
///
/// `keys` may hold more entries than `target` when two keys share a property
/// name (a `Map` with both `1` and `"1"`); the split is counted over `keys`.
#[derive(Debug, Default)]
struct Candidate {
    keys: Vec<Primitive>,
    target: CanonicalMap,
}

fn primitives<'a>(
    items: impl IntoIterator<Item = &'a EnumInput>,
    reject: fn(usize) -> Rejection,
) -> Result<Vec<Primitive>, Rejection> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.as_primitive().ok_or_else(|| reject(index)))
        .collect()
}

/// Pair keys with values by position.
fn make_object(keys: &[Primitive], values: &[Primitive]) -> CanonicalMap {
    let mut object = CanonicalMap::with_capacity(keys.len());
    for (key, value) in keys.iter().zip(values) {
        object.insert(key.to_property_key(), value.clone());
    }
    object
}

fn collect_candidate(input: &EnumInput) -> Result<Candidate, Rejection> {
    match input {
        EnumInput::Object(fields) => {
            let mut target = CanonicalMap::with_capacity(fields.len());
            for (index, (name, value)) in fields.iter().enumerate() {
                let value = value
                    .as_primitive()
                    .ok_or(Rejection::NonPrimitiveValue { index })?;
                target.insert(name.clone(), value);
            }
            let keys = fields.keys().cloned().map(Primitive::String).collect();
            Ok(Candidate { keys, target })
        }
        EnumInput::Array(items) => {
            let unique: EnumSet = items.iter().cloned().collect();
            let keys = primitives(&unique, |index| Rejection::NonPrimitiveKey { index })?;
            // Values are paired with the original, non-deduplicated items, so
            // after a duplicate every later key picks up a shifted value.
            let originals = primitives(items, |index| Rejection::NonPrimitiveValue { index })?;
            let target = make_object(&keys, &originals);
            Ok(Candidate { keys, target })
        }
        EnumInput::Set(members) if !members.is_empty() => {
            let keys = primitives(members, |index| Rejection::NonPrimitiveKey { index })?;
            let target = make_object(&keys, &keys);
            Ok(Candidate { keys, target })
        }
        EnumInput::Map(entries) if !entries.is_empty() => {
            let keys = primitives(entries.keys(), |index| Rejection::NonPrimitiveKey { index })?;
            let values =
                primitives(entries.values(), |index| Rejection::NonPrimitiveValue { index })?;
            let target = make_object(&keys, &values);
            Ok(Candidate { keys, target })
        }
        _ => Ok(Candidate::default()),
    }
}

/// Numeric/name partition of a candidate's keys.
struct KeySplit<'a> {
    names: SmallVec<[&'a str; 8]>,
    numeric: usize,
    total: usize,
}

impl<'a> KeySplit<'a> {
    fn of(keys: &'a [Primitive]) -> Self {
        let mut names = SmallVec::new();
        let mut numeric = 0;
        for key in keys {
            match (classify(key), key) {
                (KeyClass::Name, Primitive::String(name)) => names.push(name.as_str()),
                _ => numeric += 1,
            }
        }
        KeySplit {
            names,
            numeric,
            total: keys.len(),
        }
    }

    /// Exactly half the keys are numeric and half are names.
    fn is_reverse_mapping(&self) -> bool {
        self.names.len() == self.numeric && self.total == self.names.len() * 2
    }
}

/// Normalize any input into its canonical key/value mapping.
///
/// Never fails: unsupported shapes, `null`, `undefined` and inputs holding a
/// non-primitive key or value all produce an empty mapping.
pub fn normalize(input: &EnumInput) -> CanonicalMap {
    let candidate = match collect_candidate(input) {
        Ok(candidate) => candidate,
        Err(rejection) => {
            tracing::debug!(kind = input.kind(), %rejection, "rejected invalid enum input");
            return CanonicalMap::new();
        }
    };

    let split = KeySplit::of(&candidate.keys);
    tracing::trace!(
        kind = input.kind(),
        keys = split.total,
        names = split.names.len(),
        numeric = split.numeric,
        "classified enum keys"
    );

    if !split.is_reverse_mapping() {
        return candidate.target;
    }

    let mut forward = CanonicalMap::with_capacity(split.names.len());
    for &name in &split.names {
        if let Some(value) = candidate.target.get(name) {
            forward.insert(name.to_string(), value.clone());
        }
    }
    if !forward.is_empty() {
        tracing::trace!(
            dropped = candidate.target.len() - forward.len(),
            "collapsed reverse mapping"
        );
    }
    forward
}

/// Whether `input` is a valid, non-empty enum whose keys split evenly into
/// numeric keys and names, i.e. whether [`normalize`] collapses it.
pub fn is_reverse_mapped(input: &EnumInput) -> bool {
    match collect_candidate(input) {
        Ok(candidate) => {
            let split = KeySplit::of(&candidate.keys);
            split.total > 0 && split.is_reverse_mapping()
        }
        Err(_) => false,
    }
}
