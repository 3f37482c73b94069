use super::*;
use serde_json::json;

fn strings(items: &[&str]) -> Vec<Primitive> {
    items.iter().map(|item| Primitive::from(*item)).collect()
}

fn pair(key: &str, value: impl Into<Primitive>) -> (String, Primitive) {
    (key.to_string(), value.into())
}

// =============================================================================
// Arrays
// =============================================================================

#[test]
fn test_array_values_by_key() {
    let arr = EnumInput::array(["bar", "foo"]);
    assert_eq!(
        serde_json::to_value(values_by_key(&arr)).expect("serializes"),
        json!({"bar": "bar", "foo": "foo"})
    );
}

#[test]
fn test_array_keys_and_values_without_duplicates() {
    let arr = EnumInput::array(["bar", "foo"]);
    assert_eq!(values(&arr), strings(&["bar", "foo"]));
    assert_eq!(keys(&arr), strings(&["bar", "foo"]));
    assert_eq!(entries(&arr), vec![pair("bar", "bar"), pair("foo", "foo")]);
}

#[test]
fn test_array_keys_pass_through_duplicates() {
    let arr = EnumInput::array(["a", "a", "b"]);
    assert_eq!(keys(&arr), strings(&["a", "a", "b"]));
    assert_eq!(values(&arr), strings(&["a", "a", "b"]));
    // entries goes through normalization and sees the shifted values
    assert_eq!(entries(&arr), vec![pair("a", "a"), pair("b", "a")]);
}

#[test]
fn test_array_keys_pass_through_numbers() {
    let arr = EnumInput::array([3, 1, 2]);
    assert_eq!(keys(&arr), vec![Primitive::from(3), Primitive::from(1), Primitive::from(2)]);
}

#[test]
fn test_array_pass_through_with_nested_item_is_empty() {
    let arr = EnumInput::array([EnumInput::from("a"), EnumInput::object([("b", 1)])]);
    assert!(keys(&arr).is_empty());
    assert!(values(&arr).is_empty());
    assert!(entries(&arr).is_empty());
}

// =============================================================================
// Sets and maps
// =============================================================================

#[test]
fn test_set_values_in_insertion_order() {
    let set = EnumInput::set(["foo", "bar"]);
    assert_eq!(values(&set), strings(&["foo", "bar"]));
    assert_eq!(keys(&set), strings(&["foo", "bar"]));
    assert_eq!(
        serde_json::to_value(values_by_key(&set)).expect("serializes"),
        json!({"foo": "foo", "bar": "bar"})
    );
}

#[test]
fn test_map_accessors() {
    let map = EnumInput::map([("foo", "bar")]);
    assert_eq!(values(&map), strings(&["bar"]));
    assert_eq!(
        serde_json::to_value(values_by_key(&map)).expect("serializes"),
        json!({"foo": "bar"})
    );
    assert_eq!(
        serde_json::to_value(keys_by_value(&map)).expect("serializes"),
        json!({"bar": "foo"})
    );
}

#[test]
fn test_keys_by_value_last_key_wins() {
    let map = EnumInput::map([("a", 1), ("b", 2), ("c", 1)]);
    let by_value = keys_by_value(&map);
    let order: Vec<_> = by_value.iter().map(|(v, k)| (v.as_str(), k.as_str())).collect();
    assert_eq!(order, [("1", "c"), ("2", "b")]);
}

#[test]
fn test_keys_by_value_stringifies_numbers() {
    let map = EnumInput::map([(EnumInput::from("half"), EnumInput::from(0.5))]);
    assert_eq!(keys_by_value(&map)["0.5"], "half");
}

// =============================================================================
// Plain objects
// =============================================================================

#[test]
fn test_valid_enum() {
    let obj = EnumInput::object([("Hello", EnumInput::from("world")), ("Foo", EnumInput::from(5))]);
    assert_eq!(values(&obj), vec![Primitive::from("world"), Primitive::from(5)]);
    assert_eq!(keys(&obj), strings(&["Hello", "Foo"]));
}

#[test]
fn test_reverse_mapping_enum() {
    let obj = EnumInput::object([
        ("Hello", EnumInput::from(1)),
        ("Foo", EnumInput::from(2)),
        ("1", EnumInput::from("Hello")),
        ("2", EnumInput::from("Foo")),
    ]);

    assert_eq!(keys(&obj), strings(&["Hello", "Foo"]));
    assert_eq!(values(&obj), vec![Primitive::from(1), Primitive::from(2)]);
    assert_eq!(entries(&obj), vec![pair("Hello", 1), pair("Foo", 2)]);
    assert_eq!(
        serde_json::to_value(keys_by_value(&obj)).expect("serializes"),
        json!({"1": "Hello", "2": "Foo"})
    );
}

#[test]
fn test_almost_reverse_mapping_enum() {
    let obj = EnumInput::object([
        ("1", EnumInput::from("Foo")),
        ("2", EnumInput::from("Hello")),
        ("Foo", EnumInput::from(1)),
        ("Hello", EnumInput::from(2)),
        ("Hello2", EnumInput::from("hello")),
    ]);

    assert_eq!(keys(&obj), strings(&["1", "2", "Foo", "Hello", "Hello2"]));
    assert_eq!(
        values(&obj),
        vec![
            Primitive::from("Foo"),
            Primitive::from("Hello"),
            Primitive::from(1),
            Primitive::from(2),
            Primitive::from("hello"),
        ]
    );
}

#[test]
fn test_invalid_enum() {
    let obj = EnumInput::from(json!({"Hello": {"foo": "bar"}}));
    assert!(entries(&obj).is_empty());
    assert!(keys(&obj).is_empty());
    assert!(keys_by_value(&obj).is_empty());
}

#[test]
fn test_undefined() {
    assert!(keys(&EnumInput::Undefined).is_empty());
    assert!(values(&EnumInput::Undefined).is_empty());
}

#[test]
fn test_null() {
    assert!(values(&EnumInput::Null).is_empty());
    assert!(keys(&EnumInput::Null).is_empty());
    assert!(values_by_key(&EnumInput::Null).is_empty());
}

#[test]
fn test_values_by_key_round_trips_through_object() {
    let obj = EnumInput::object([("Red", EnumInput::from("RED")), ("Green", EnumInput::from("GREEN"))]);
    let first = values_by_key(&obj);
    assert_eq!(values_by_key(&EnumInput::object(first.clone())), first);
}
