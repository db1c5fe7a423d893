use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "database": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "minLength": 1 }
                },
                "additionalProperties": false
            },
            "incidents": { "$ref": "#/$defs/service" },
            "scans": { "$ref": "#/$defs/service" },
            "scoring": {
                "type": "object",
                "properties": {
                    "seed": { "type": "integer", "minimum": 0 }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false,
        "$defs": {
            "service": {
                "type": "object",
                "properties": {
                    "host": { "type": "string", "minLength": 1 },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                },
                "additionalProperties": false
            }
        }
    })
});
