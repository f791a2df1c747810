//! Tests for #[derive(Describe)] feeding the schema builder

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;
use struct_schema::{Bound, Describe, SchemaError, SchemaKind, TypeDesc, schema_for};

#[test]
fn test_name_and_age() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Person {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        age: Option<i32>,
    }

    let schema = schema_for::<Person>().unwrap();
    assert_eq!(
        schema.to_value(),
        json!({
            "type": "object",
            "properties": { "name": { "type": "string" }, "age": { "type": "integer" } },
            "required": ["name"]
        })
    );
}

#[test]
fn test_empty_struct() {
    #[derive(Describe)]
    struct Nothing {}

    assert_eq!(schema_for::<Nothing>().unwrap().to_value(), json!({ "type": "object" }));
}

#[test]
fn test_serde_attributes_shared_with_serialize() {
    #[allow(dead_code)]
    #[derive(Serialize, Describe)]
    struct Account {
        #[serde(rename = "accountId")]
        account_id: u64,
        #[serde(rename = "displayName", skip_serializing_if = "String::is_empty")]
        display_name: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    let schema = schema_for::<Account>().unwrap();
    assert_eq!(schema.properties.keys().collect::<Vec<_>>(), ["accountId", "displayName", "tags"]);
    assert_eq!(schema.required, ["accountId", "tags"]);
    assert_eq!(schema.properties["accountId"].minimum, Some(0));

    // the serialized keys are exactly the schema keys
    let value = serde_json::to_value(Account {
        account_id: 7,
        display_name: "x".into(),
        tags: vec![],
    })
    .unwrap();
    let serialized = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    assert_eq!(serialized, ["accountId", "displayName", "tags"]);
}

#[test]
fn test_container_rename_all_and_skipped_fields() {
    #[allow(dead_code)]
    #[derive(Serialize, Describe)]
    #[serde(rename_all = "camelCase")]
    struct User {
        user_name: String,
        #[serde(rename = "mail")]
        email_address: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_login: Option<u64>,
        #[serde(skip)]
        secret: String,
        #[serde(skip_serializing)]
        cache: u8,
    }

    let schema = schema_for::<User>().unwrap();
    assert_eq!(
        schema.to_value(),
        json!({
            "type": "object",
            "properties": {
                "userName": { "type": "string" },
                "mail": { "type": "string" },
                "lastLogin": { "type": "integer", "minimum": 0 }
            },
            "required": ["userName", "mail"]
        })
    );

    let value = serde_json::to_value(User {
        user_name: "ada".into(),
        email_address: "ada@example.com".into(),
        last_login: Some(1),
        secret: "hunter2".into(),
        cache: 3,
    })
    .unwrap();
    let serialized = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    let schema_keys = schema.properties.keys().cloned().collect::<Vec<_>>();
    assert_eq!(serialized, schema_keys);
    for name in &schema.required {
        assert!(value.get(name).is_some(), "required {name} missing from payload");
    }
}

#[test]
fn test_rename_all_serialize_side_and_schema_rename() {
    #[allow(dead_code)]
    #[derive(Describe)]
    #[serde(rename_all(serialize = "SCREAMING_SNAKE_CASE"))]
    struct Config {
        max_depth: u32,
        #[schema(rename = "trace")]
        trace_level: String,
    }

    let schema = schema_for::<Config>().unwrap();
    assert_eq!(schema.properties.keys().collect::<Vec<_>>(), ["MAX_DEPTH", "trace"]);
    assert_eq!(schema.required, ["MAX_DEPTH", "trace"]);
}

#[test]
fn test_schema_attributes() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Widget {
        #[schema(description = "Paint color", enumeration = "red,green,blue", example = "red")]
        color: String,

        #[schema(minimum = 1, maximum = 64, example = 8)]
        size: u16,

        #[schema(optional, rename = "weightKg", minimum = -10, example = "2.5")]
        weight: Option<f64>,

        #[schema(example = r#"["a", "b"]"#)]
        labels: Vec<String>,
    }

    let schema = schema_for::<Widget>().unwrap();
    assert_eq!(
        schema.to_value(),
        json!({
            "type": "object",
            "properties": {
                "color": {
                    "type": "string",
                    "description": "Paint color",
                    "enum": ["red", "green", "blue"],
                    "example": "red"
                },
                "size": { "type": "integer", "example": 8, "minimum": 1, "maximum": 64 },
                "weightKg": { "type": "number", "example": 2.5, "minimum": -10 },
                "labels": { "type": "array", "items": { "type": "string" }, "example": ["a", "b"] }
            },
            "required": ["color", "size", "labels"]
        })
    );
}

#[test]
fn test_enum_tokens_are_text_for_integer_field() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Level {
        #[schema(enumeration = "1,2,3")]
        level: u8,
    }

    let schema = schema_for::<Level>().unwrap();
    assert_eq!(schema.properties["level"].enum_values, Some(vec![json!("1"), json!("2"), json!("3")]));
}

#[test]
fn test_malformed_minimum_fails_whole_build() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Inner {
        #[schema(minimum = "abc")]
        count: u32,
    }

    #[allow(dead_code)]
    #[derive(Describe)]
    struct Outer {
        fine: bool,
        inner: Inner,
    }

    match schema_for::<Outer>() {
        Err(SchemaError::MalformedConstraint { record, field, bound, text, .. }) => {
            assert_eq!(record, "Inner");
            assert_eq!(field, "count");
            assert_eq!(bound, Bound::Minimum);
            assert_eq!(text, "abc");
        }
        other => panic!("expected MalformedConstraint, got {other:?}"),
    }
}

#[test]
fn test_malformed_example_on_integer_field() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Ticket {
        #[schema(example = "seven")]
        number: i64,
    }

    let err = schema_for::<Ticket>().unwrap_err();
    assert!(matches!(err, SchemaError::MalformedExample { .. }));
    assert_eq!(err.to_string(), "field `Ticket.number`: example `seven` is not a valid literal");
}

#[test]
fn test_unsupported_field_type() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Event {
        payload: serde_json::Value,
    }

    let err = schema_for::<Event>().unwrap_err();
    assert_eq!(err.to_string(), "unsupported type any from serde_json::Value");
}

#[test]
fn test_nested_and_wrapped_records() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Address {
        city: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        zip: Option<String>,
    }

    #[allow(dead_code)]
    #[derive(Describe)]
    struct Customer {
        home: Box<Address>,
        others: Vec<Address>,
        attributes: HashMap<String, String>,
    }

    let schema = schema_for::<Customer>().unwrap();
    let address = json!({
        "type": "object",
        "properties": { "city": { "type": "string" }, "zip": { "type": "string" } },
        "required": ["city"]
    });
    assert_eq!(
        schema.to_value(),
        json!({
            "type": "object",
            "properties": {
                "home": address,
                "others": { "type": "array", "items": address },
                "attributes": {}
            },
            "required": ["home", "others", "attributes"]
        })
    );
}

#[test]
fn test_generic_record() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Page<T> {
        items: Vec<T>,
        #[serde(skip_serializing_if = "Option::is_none")]
        next: Option<String>,
    }

    let schema = schema_for::<Page<u32>>().unwrap();
    assert_eq!(schema.properties["items"].items.as_ref().unwrap().minimum, Some(0));
    assert_eq!(schema.required, ["items"]);

    match Page::<bool>::describe() {
        TypeDesc::Record(record) => assert_eq!(record.name, "Page"),
        other => panic!("expected a record, got {other:?}"),
    }
}

#[test]
fn test_raw_identifier_field() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Token {
        r#type: String,
    }

    let schema = schema_for::<Token>().unwrap();
    assert_eq!(schema.properties["type"].kind, Some(SchemaKind::String));
}

#[test]
fn test_repeated_builds_are_deep_equal() {
    #[allow(dead_code)]
    #[derive(Describe)]
    struct Order {
        #[schema(minimum = 1, example = "[1]")]
        lines: Vec<u8>,
        note: Option<String>,
    }

    assert_eq!(schema_for::<Order>().unwrap(), schema_for::<Order>().unwrap());
    assert_eq!(Order::describe(), Order::describe());
}
