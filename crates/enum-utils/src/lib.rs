//! Enum helpers for TypeScript-style enum values.
//!
//! An "enum" here is any of the shapes a name/value table shows up as at
//! runtime:
//!
//! - a plain object, possibly a compiled numeric enum with reverse mapping
//! - an array of strings or numbers
//! - a `Set` of strings or numbers
//! - a `Map` from strings or numbers to strings or numbers
//!
//! Every shape is normalized into one canonical key/value mapping
//! ([`normalize`]) and the accessors ([`entries`], [`keys`], [`values`],
//! [`keys_by_value`], [`values_by_key`]) project that mapping.
//!
//! ```
//! use enum_utils::{EnumInput, Primitive, entries};
//!
//! // enum Greeting { Hello = 1, Foo = 2 }
//! let compiled = EnumInput::object([
//!     ("Hello", EnumInput::from(1)),
//!     ("Foo", EnumInput::from(2)),
//!     ("1", EnumInput::from("Hello")),
//!     ("2", EnumInput::from("Foo")),
//! ]);
//!
//! assert_eq!(
//!     entries(&compiled),
//!     vec![
//!         ("Hello".to_string(), Primitive::from(1)),
//!         ("Foo".to_string(), Primitive::from(2)),
//!     ]
//! );
//! ```

// Tagged input values and their set/map containers
pub mod input;
pub use input::{EnumInput, EnumMap, EnumSet};

// String/number scalar used for canonical keys and values
pub mod primitive;
pub use primitive::Primitive;

// JavaScript number coercion and key classification
pub mod numeric;
pub use numeric::{KeyClass, classify};

// Canonical key/value normalization
pub mod normalize;
pub use normalize::{CanonicalMap, is_reverse_mapped, normalize};

// Accessor views
pub mod accessors;
pub use accessors::{entries, keys, keys_by_value, values, values_by_key};

pub mod tracing_config;

#[cfg(test)]
#[path = "../tests/numeric_tests.rs"]
mod numeric_tests;

#[cfg(test)]
#[path = "../tests/input_tests.rs"]
mod input_tests;

#[cfg(test)]
#[path = "../tests/normalize_tests.rs"]
mod normalize_tests;

#[cfg(test)]
#[path = "../tests/accessor_tests.rs"]
mod accessor_tests;
