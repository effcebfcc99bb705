//! JSON-Schema-equivalent export of a schema.
//!
//! External tooling (documentation, other validators) wants the contract as a
//! plain JSON document. [`to_json_schema`](fn.to_json_schema.html) generates
//! that document mechanically from the same [`Schema`](../schema/enum.Schema.html)
//! the validator walks, so the exported view can never drift from what is
//! actually enforced.

use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A serialization-friendly JSON-Schema document.
///
/// Only the vocabulary this crate's schemas can express is present: scalar
/// types with an optional `pattern`, and objects with `properties`,
/// `required` and `additionalProperties: false` for strict nodes.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct JsonSchema {
    #[serde(rename = "type")]
    pub typ: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, JsonSchema>>,

    /// Required property names, in schema declaration order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,
}

/// Export `schema` as a JSON-Schema-equivalent document.
pub fn to_json_schema(schema: &Schema) -> JsonSchema {
    match schema {
        Schema::Primitive { kind, pattern } => JsonSchema {
            typ: kind.name().to_owned(),
            pattern: pattern.as_ref().map(|p| p.as_str().to_owned()),
            properties: None,
            required: None,
            additional_properties: None,
        },
        Schema::Object { fields, strict } => {
            let properties: BTreeMap<String, JsonSchema> = fields
                .iter()
                .map(|(name, field)| (name.clone(), to_json_schema(field.schema())))
                .collect();
            let required: Vec<String> = fields
                .iter()
                .filter(|(_, field)| !field.is_optional())
                .map(|(name, _)| name.clone())
                .collect();

            JsonSchema {
                typ: "object".to_owned(),
                pattern: None,
                properties: Some(properties),
                required: if required.is_empty() {
                    None
                } else {
                    Some(required)
                },
                additional_properties: if *strict { Some(false) } else { None },
            }
        }
    }
}
