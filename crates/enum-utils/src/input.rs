//! Tagged input values.
//!
//! `EnumInput` stands in for the dynamically typed value an enum helper is
//! handed: a plain object, an array, a `Set`, a `Map`, a scalar, or something
//! opaque. The variant order below is also the shape-detection priority used
//! by the normalizer.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::primitive::Primitive;

/// A value an enum accessor can be called with.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EnumInput {
    /// Plain key/value structure (an object literal or a compiled enum object).
    Object(IndexMap<String, EnumInput>),
    /// Ordered sequence.
    Array(Vec<EnumInput>),
    /// Set of unique members.
    Set(EnumSet),
    /// Map with unique keys.
    Map(EnumMap),
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// A value that cannot be introspected (class instance, function, ...).
    Opaque,
}

impl EnumInput {
    /// Build a plain object. A repeated key keeps its first position and takes
    /// the last value, as in an object literal.
    pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<EnumInput>,
    {
        let mut object = IndexMap::new();
        for (key, value) in fields {
            object.insert(key.into(), value.into());
        }
        EnumInput::Object(object)
    }

    pub fn array<T: Into<EnumInput>>(items: impl IntoIterator<Item = T>) -> Self {
        EnumInput::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn set<T: Into<EnumInput>>(members: impl IntoIterator<Item = T>) -> Self {
        EnumInput::Set(members.into_iter().map(Into::into).collect())
    }

    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<EnumInput>,
        V: Into<EnumInput>,
    {
        EnumInput::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Parse a JSON document. Objects keep their document key order.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<serde_json::Value>(text).map(EnumInput::from)
    }

    /// The value as an enum key or value, if it is a string or number.
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            EnumInput::String(text) => Some(Primitive::String(text.clone())),
            EnumInput::Number(value) => Some(Primitive::Number(*value)),
            _ => None,
        }
    }

    /// Short shape name, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            EnumInput::Object(_) => "object",
            EnumInput::Array(_) => "array",
            EnumInput::Set(_) => "set",
            EnumInput::Map(_) => "map",
            EnumInput::Undefined => "undefined",
            EnumInput::Null => "null",
            EnumInput::Bool(_) => "boolean",
            EnumInput::Number(_) => "number",
            EnumInput::String(_) => "string",
            EnumInput::Opaque => "opaque",
        }
    }
}

/// Hashable identity of a scalar under SameValueZero.
///
/// Compound values have no identity to compare by, so every occurrence of one
/// is a distinct member (two object literals are never the same object).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ScalarKey {
    Undefined,
    Null,
    Bool(bool),
    Number(u64),
    String(String),
}

impl ScalarKey {
    fn of(value: &EnumInput) -> Option<Self> {
        match value {
            EnumInput::Undefined => Some(ScalarKey::Undefined),
            EnumInput::Null => Some(ScalarKey::Null),
            EnumInput::Bool(flag) => Some(ScalarKey::Bool(*flag)),
            EnumInput::Number(number) => Some(ScalarKey::Number(number_identity(*number))),
            EnumInput::String(text) => Some(ScalarKey::String(text.clone())),
            EnumInput::Object(_)
            | EnumInput::Array(_)
            | EnumInput::Set(_)
            | EnumInput::Map(_)
            | EnumInput::Opaque => None,
        }
    }
}

/// All NaNs are one value and `-0` equals `+0`.
fn number_identity(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Insertion-ordered set with SameValueZero membership.
#[derive(Debug, Clone, Default)]
pub struct EnumSet {
    members: Vec<EnumInput>,
    seen: FxHashSet<ScalarKey>,
}

impl EnumSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member. Returns `false` if an equal member was already present.
    pub fn insert(&mut self, member: EnumInput) -> bool {
        if let Some(key) = ScalarKey::of(&member) {
            if !self.seen.insert(key) {
                return false;
            }
        }
        self.members.push(member);
        true
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnumInput> {
        self.members.iter()
    }
}

impl PartialEq for EnumSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl FromIterator<EnumInput> for EnumSet {
    fn from_iter<I: IntoIterator<Item = EnumInput>>(iter: I) -> Self {
        let mut set = EnumSet::new();
        for member in iter {
            set.insert(member);
        }
        set
    }
}

impl<'a> IntoIterator for &'a EnumSet {
    type Item = &'a EnumInput;
    type IntoIter = std::slice::Iter<'a, EnumInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Insertion-ordered map with SameValueZero keys.
#[derive(Debug, Clone, Default)]
pub struct EnumMap {
    entries: Vec<(EnumInput, EnumInput)>,
    positions: FxHashMap<ScalarKey, usize>,
}

impl EnumMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. An existing key keeps its position and the old
    /// value is returned.
    pub fn insert(&mut self, key: EnumInput, value: EnumInput) -> Option<EnumInput> {
        if let Some(identity) = ScalarKey::of(&key) {
            if let Some(&position) = self.positions.get(&identity) {
                return Some(std::mem::replace(&mut self.entries[position].1, value));
            }
            self.positions.insert(identity, self.entries.len());
        }
        self.entries.push((key, value));
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EnumInput, &EnumInput)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &EnumInput> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &EnumInput> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl PartialEq for EnumMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(EnumInput, EnumInput)> for EnumMap {
    fn from_iter<I: IntoIterator<Item = (EnumInput, EnumInput)>>(iter: I) -> Self {
        let mut map = EnumMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl From<&str> for EnumInput {
    fn from(text: &str) -> Self {
        EnumInput::String(text.to_string())
    }
}

impl From<String> for EnumInput {
    fn from(text: String) -> Self {
        EnumInput::String(text)
    }
}

impl From<f64> for EnumInput {
    fn from(value: f64) -> Self {
        EnumInput::Number(value)
    }
}

impl From<i32> for EnumInput {
    fn from(value: i32) -> Self {
        EnumInput::Number(f64::from(value))
    }
}

impl From<u32> for EnumInput {
    fn from(value: u32) -> Self {
        EnumInput::Number(f64::from(value))
    }
}

impl From<i64> for EnumInput {
    fn from(value: i64) -> Self {
        EnumInput::Number(value as f64)
    }
}

impl From<bool> for EnumInput {
    fn from(flag: bool) -> Self {
        EnumInput::Bool(flag)
    }
}

impl From<Primitive> for EnumInput {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::String(text) => EnumInput::String(text),
            Primitive::Number(value) => EnumInput::Number(value),
        }
    }
}

impl<T: Into<EnumInput>> From<Option<T>> for EnumInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(EnumInput::Undefined, Into::into)
    }
}

impl<T: Into<EnumInput>> From<Vec<T>> for EnumInput {
    fn from(items: Vec<T>) -> Self {
        EnumInput::array(items)
    }
}

impl From<serde_json::Value> for EnumInput {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => EnumInput::Null,
            Value::Bool(flag) => EnumInput::Bool(flag),
            Value::Number(number) => number.as_f64().map_or(EnumInput::Opaque, EnumInput::Number),
            Value::String(text) => EnumInput::String(text),
            Value::Array(items) => EnumInput::Array(items.into_iter().map(EnumInput::from).collect()),
            Value::Object(fields) => EnumInput::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, EnumInput::from(value)))
                    .collect(),
            ),
        }
    }
}
