use jsonschema_gen::{prelude::*, Document, PrimitiveType, DEFAULT_SCHEMA};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

#[derive(Reflect)]
pub struct Small {
    id: u64,
    tags: Vec<String>,
}

#[derive(Reflect)]
pub struct Other {
    #[serde(rename = "Name")]
    name: String,
}

#[test]
fn default_schema_is_set_on_read() {
    let mut document = Document::default();
    assert_eq!("", document.schema);

    document.read_type::<Small>();
    assert_eq!(DEFAULT_SCHEMA, document.schema);
}

#[test]
fn custom_schema_is_kept() {
    let dialect = "http://json-schema.org/draft-04/schema#";
    let mut document = Document::new(dialect);
    document.read_deep(&Small {
        id: 1,
        tags: Vec::new(),
    });
    assert_eq!(dialect, document.schema);
}

#[test]
fn marshal_is_indented() {
    let mut document = Document::default();
    document.read_type::<Small>();

    let expected = r#"{
    "$schema": "http://json-schema.org/schema#",
    "type": "object",
    "properties": {
        "id": {
            "type": "integer"
        },
        "tags": {
            "type": "array",
            "items": {
                "type": "string"
            }
        }
    },
    "required": [
        "id",
        "tags"
    ]
}"#;

    let bytes = document.marshal().unwrap();
    assert_eq!(expected, String::from_utf8(bytes).unwrap());
    assert_eq!(expected, document.to_string());
}

#[test]
fn marshal_is_deterministic() {
    let mut map = HashMap::new();
    for key in &["delta", "alpha", "charlie", "bravo"] {
        map.insert(key.to_string(), 1);
    }

    let mut document = Document::default();
    document.read_deep(&map);

    let first = document.marshal().unwrap();
    let second = document.marshal().unwrap();
    assert_eq!(first, second);

    let keys = document
        .properties
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>();
    assert_eq!(vec!["alpha", "bravo", "charlie", "delta"], keys);
}

#[test]
fn reading_again_replaces_the_root() {
    let mut document = Document::default();
    document.read_type::<Small>();
    document.read_type::<Other>();

    let mut expected = Document::default();
    expected.read_type::<Other>();

    assert_eq!(expected, document);
    assert_eq!(vec!["Name"], document.required);
}

#[test]
fn read_uses_the_value_type() {
    let mut from_value = Document::default();
    from_value.read(&Small {
        id: 1,
        tags: vec!["a".into()],
    });

    let mut from_type = Document::default();
    from_type.read_type::<Small>();

    assert_eq!(from_type, from_value);
    assert_eq!(Some(PrimitiveType::Object), from_value.ty);
}

#[test]
fn marshaled_document_parses_back() {
    let mut document = Document::default();
    document.read_type::<HashMap<String, serde_json::Value>>();

    let bytes = document.marshal().unwrap();
    let parsed: Document = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(document, parsed);
    assert!(parsed.additional_properties);
}
