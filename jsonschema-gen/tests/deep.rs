use jsonschema_gen::{prelude::*, Property};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

fn schema_of(value: &dyn Reflect) -> serde_json::Value {
    serde_json::to_value(Property::from_value(value)).unwrap()
}

#[derive(Reflect)]
pub struct Base {
    id: u64,
}

#[derive(Reflect)]
pub struct Message {
    #[serde(flatten)]
    base: Base,
    #[serde(default)]
    reply_to: Option<Box<Message>>,
    payload: serde_json::Value,
    extra: Box<dyn Reflect>,
}

#[test]
fn byte_buffers_are_strings() {
    assert_eq!(json!({ "type": "string" }), schema_of(&vec![1u8, 2, 3]));
    assert_eq!(json!({ "type": "string" }), schema_of(&Vec::<u8>::new()));
}

#[test]
fn empty_map_has_no_properties() {
    let map: HashMap<String, i32> = HashMap::new();
    assert_eq!(json!({ "type": "object" }), schema_of(&map));
}

#[test]
fn map_entries_are_described() {
    let mut map = HashMap::new();
    map.insert("x".to_string(), 1);
    map.insert("y".to_string(), 2);

    assert_eq!(
        json!({
            "type": "object",
            "properties": {
                "x": { "type": "integer" },
                "y": { "type": "integer" },
            },
        }),
        schema_of(&map),
    );
}

#[test]
fn map_keys_use_their_text() {
    let mut map = BTreeMap::new();
    map.insert(1, true);
    map.insert(-20, false);

    assert_eq!(
        json!({
            "type": "object",
            "properties": {
                "-20": { "type": "boolean" },
                "1": { "type": "boolean" },
            },
        }),
        schema_of(&map),
    );
}

#[test]
fn empty_sequence_uses_declared_element() {
    assert_eq!(
        json!({ "type": "array", "items": { "type": "string" } }),
        schema_of(&Vec::<String>::new()),
    );
    assert_eq!(
        json!({ "type": "array" }),
        schema_of(&Vec::<serde_json::Value>::new()),
    );
}

#[test]
fn sequence_uses_first_element() {
    let values = vec![json!(1), json!("two")];
    assert_eq!(
        json!({ "type": "array", "items": { "type": "integer" } }),
        schema_of(&values),
    );
}

#[test]
fn dynamic_values_are_unwrapped() {
    assert_eq!(json!({ "type": "null" }), schema_of(&json!(null)));
    assert_eq!(json!({ "type": "number" }), schema_of(&json!(1.5)));
    assert_eq!(json!({ "type": "integer" }), schema_of(&json!(u64::MAX)));
    assert_eq!(
        json!({
            "type": "object",
            "properties": {
                "a": { "type": "integer" },
                "b": {
                    "type": "array",
                    "items": { "type": "boolean" },
                },
            },
        }),
        schema_of(&json!({ "a": 1, "b": [true] })),
    );

    let boxed: Box<dyn Reflect> = Box::new("text".to_string());
    assert_eq!(json!({ "type": "string" }), schema_of(&boxed));
}

#[test]
fn absent_values_are_null() {
    assert_eq!(json!({ "type": "null" }), schema_of(&Option::<i32>::None));
    assert_eq!(json!({ "type": "integer" }), schema_of(&Some(5)));
}

#[test]
fn structs_use_member_values() {
    let message = Message {
        base: Base { id: 1 },
        reply_to: Some(Box::new(Message {
            base: Base { id: 0 },
            reply_to: None,
            payload: json!(null),
            extra: Box::new(false),
        })),
        payload: json!({ "text": "hello" }),
        extra: Box::new(vec![1.0f64]),
    };

    assert_eq!(
        json!({
            "type": "object",
            "properties": {
                "extra": {
                    "type": "array",
                    "items": { "type": "number" },
                },
                "id": { "type": "integer" },
                "payload": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string" },
                    },
                },
                "reply_to": {
                    "type": "object",
                    "properties": {
                        "extra": { "type": "boolean" },
                        "id": { "type": "integer" },
                        "payload": { "type": "null" },
                        "reply_to": { "type": "null" },
                    },
                    "required": ["id", "payload", "extra"],
                },
            },
            "required": ["id", "payload", "extra"],
        }),
        schema_of(&message),
    );
}

#[test]
fn shallow_read_cannot_see_dynamic_members() {
    let schema = serde_json::to_value(Property::from_type(&Message::type_info())).unwrap();
    assert_eq!(json!({}), schema["properties"]["payload"]);
    assert_eq!(json!({}), schema["properties"]["extra"]);
}

#[cfg(feature = "chrono")]
#[test]
fn timestamps_are_date_time_strings() {
    let now = chrono::Utc::now();
    assert_eq!(
        json!({ "type": "string", "format": "date-time" }),
        schema_of(&now),
    );
}
