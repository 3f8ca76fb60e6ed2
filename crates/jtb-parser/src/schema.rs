use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::model::ParseResult;

static PARSE_RESULT_SCHEMA: OnceLock<JSONSchema> = OnceLock::new();

fn compile_schema(source: &'static str) -> JSONSchema {
    let schema_value: Value =
        serde_json::from_str(source).expect("embedded schema should parse as JSON");
    JSONSchema::options()
        .with_draft(Draft::Draft202012)
        .compile(&schema_value)
        .expect("embedded schema should compile")
}

fn parse_result_schema() -> &'static JSONSchema {
    PARSE_RESULT_SCHEMA
        .get_or_init(|| compile_schema(include_str!("../schema/parse_result.schema.json")))
}

fn validate_value(schema: &JSONSchema, value: &Value, label: &str) -> Result<()> {
    if let Err(errors) = schema.validate(value) {
        let messages: Vec<String> = errors.into_iter().map(|err| err.to_string()).collect();
        let joined = messages.join("\n");
        return Err(anyhow!("{label} failed schema validation:\n{joined}"));
    }
    Ok(())
}

/// Validates a `serde_json::Value` against the parse result schema.
pub fn validate_parse_result_value(value: &Value) -> Result<()> {
    validate_value(parse_result_schema(), value, "parse result")
}

/// Validates a [`ParseResult`] against the parse result schema.
pub fn validate_parse_result(result: &ParseResult) -> Result<()> {
    let value = serde_json::to_value(result)?;
    validate_parse_result_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_both_result_shapes() {
        let success = json!({
            "success": true,
            "content": [{
                "id": "section_abc123_1",
                "type": "section",
                "attrs": {},
                "children": [{
                    "id": "row_abc123_2",
                    "type": "row",
                    "attrs": { "column_structure": "1" },
                    "children": [{ "id": "column_abc123_3", "type": "column", "attrs": {} }]
                }]
            }],
            "css": "",
            "mode": "generic",
            "stats": { "modules_count": 3 }
        });
        validate_parse_result_value(&success).expect("success shape should validate");
        validate_parse_result_value(&json!({ "error": "No root element found" }))
            .expect("failure shape should validate");
    }

    #[test]
    fn rejects_rows_without_children_and_unknown_modes() {
        let bad_row = json!({
            "success": true,
            "content": [{ "id": "row_x_1", "type": "row", "attrs": {} }],
            "css": "",
            "mode": "generic",
            "stats": { "modules_count": 1 }
        });
        assert!(validate_parse_result_value(&bad_row).is_err());

        let bad_mode = json!({
            "success": true,
            "content": [],
            "css": "",
            "mode": "strict",
            "stats": { "modules_count": 0 }
        });
        let err = validate_parse_result_value(&bad_mode).unwrap_err();
        assert!(err.to_string().contains("parse result failed schema validation"));
    }
}
