//! Reference cases for the flattening contract used by the delivery stream transform.
//!
//! Column names produced here must match the table schema the delivery stream
//! converts records against, so the sensor reading case is pinned exactly.

use sensorflow_payload::{flatten, JsonFlattener, DEFAULT_SEPARATOR};
use serde_json::{json, Map, Value};

/// Rebuild nesting from dotted keys. Only valid for maps without collisions.
fn unflatten(flat: &Map<String, Value>, separator: &str) -> Value {
    let mut root = Map::new();
    for (key, value) in flat {
        let parts: Vec<&str> = key.split(separator).collect();
        let mut node = &mut root;
        for part in &parts[..parts.len() - 1] {
            node = node
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .unwrap();
        }
        node.insert(parts[parts.len() - 1].to_string(), value.clone());
    }
    Value::Object(root)
}

#[test]
fn test_sensor_reading_columns() {
    let reading = json!({
        "measure_name": "measure_2",
        "measure_value": 42.125,
        "metadata": {
            "customer_id": "3",
            "zip_code": "19022",
            "something_else": "value"
        }
    });

    let flat = JsonFlattener::new().flatten_value(&reading).unwrap();

    let columns: Vec<&str> = flat.keys().map(String::as_str).collect();
    assert_eq!(
        columns,
        vec![
            "measure_name",
            "measure_value",
            "metadata.customer_id",
            "metadata.zip_code",
            "metadata.something_else",
        ]
    );
    assert_eq!(flat["measure_value"], json!(42.125));
    assert_eq!(flat["metadata.zip_code"], json!("19022"));
}

#[test]
fn test_payload_bytes_round_trip() {
    let payload = br#"{"a": {"b": 1, "c": 2}}"#;

    let flattened = JsonFlattener::new().flatten_payload(payload).unwrap();

    let value: Value = serde_json::from_slice(&flattened).unwrap();
    assert_eq!(value, json!({"a.b": 1, "a.c": 2}));
}

#[test]
fn test_unflatten_then_flatten_is_stable() {
    let documents = vec![
        json!({"a": {"b": 1, "c": {"d": "x", "e": [1, {"f": 2}]}}, "g": false}),
        json!({"metadata": {"customer_id": "0", "zip_code": "55111"}, "measure_value": 0.0}),
        json!({"one": {"two": {"three": {"four": {"five": null}}}}}),
        json!({"flat": 1}),
    ];

    for document in documents {
        let flat = flatten(document.as_object().unwrap(), DEFAULT_SEPARATOR);
        let rebuilt = unflatten(&flat, DEFAULT_SEPARATOR);

        assert_eq!(rebuilt, document);
        assert_eq!(flatten(rebuilt.as_object().unwrap(), DEFAULT_SEPARATOR), flat);
    }
}

#[test]
fn test_flattening_is_deterministic() {
    let document = json!({"a": {"b": 1}, "a.b": 2, "c": {"d": {}}});
    let object = document.as_object().unwrap();

    let first = flatten(object, DEFAULT_SEPARATOR);
    let second = flatten(object, DEFAULT_SEPARATOR);

    assert_eq!(first, second);
    assert_eq!(Value::Object(first), json!({"a.b": 2}));
}
