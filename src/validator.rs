//! Validate parsed documents against a schema.
//!
//! Validation is a single read-only, depth-first pass over the input. Its
//! result is either `Ok(())` or an [`ErrorTree`](struct.ErrorTree.html): a
//! sparse tree mirroring the schema's object nesting, where each node carries
//! the failures found at that point of the document. A field with no failure
//! contributes no entry at all.
//!
//! A failed validation is not a Rust error in the usual sense. Malformed
//! documents are ordinary, expected input for this crate; `Err` here is just
//! the shape that carries the full report.

use crate::schema::{Field, Kind, Pattern, Schema};
use indexmap::IndexMap;
use serde_json::Value;

/// Every failure found beneath one point of the document.
///
/// The tree is sparse: children exist only for fields that failed, and a node
/// with no messages of its own merely connects deeper failures to the root.
/// Child order follows the schema's field declaration order, with undeclared
/// keys (under a strict node) after the declared ones.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: IndexMap<String, ErrorTree>,
}

impl ErrorTree {
    /// Failures recorded against this node itself.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Failed fields beneath this node, keyed by field name.
    pub fn children(&self) -> &IndexMap<String, ErrorTree> {
        &self.children
    }

    /// A tree with no failures anywhere.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.is_empty()
    }

    pub(crate) fn leaf(message: &str) -> ErrorTree {
        ErrorTree {
            messages: vec![message.to_owned()],
            children: IndexMap::new(),
        }
    }

    pub(crate) fn push(&mut self, message: String) {
        self.messages.push(message);
    }

    /// Attach a child entry, dropping it if it holds no failures.
    pub(crate) fn attach(&mut self, name: &str, child: ErrorTree) {
        if !child.is_empty() {
            self.children.insert(name.to_owned(), child);
        }
    }
}

/// Check `instance` against `schema`.
///
/// Returns `Ok(())` when the document conforms, and the full error tree
/// otherwise. The check never fails part-way: every violation in the
/// document is collected in one pass.
pub fn validate(schema: &Schema, instance: &Value) -> Result<(), ErrorTree> {
    let tree = check(schema, instance);
    if tree.is_empty() {
        Ok(())
    } else {
        Err(tree)
    }
}

fn check(schema: &Schema, instance: &Value) -> ErrorTree {
    match schema {
        Schema::Primitive { kind, pattern } => check_primitive(*kind, pattern.as_ref(), instance),
        Schema::Object { fields, strict } => check_object(fields, *strict, instance),
    }
}

fn check_primitive(kind: Kind, pattern: Option<&Pattern>, instance: &Value) -> ErrorTree {
    let mut tree = ErrorTree::default();

    match kind {
        Kind::Boolean if !instance.is_boolean() => tree.push(type_mismatch(kind, instance)),
        Kind::Number if !instance.is_number() => tree.push(type_mismatch(kind, instance)),
        Kind::String => match instance.as_str() {
            // A non-string fails the type check alone; reporting the pattern
            // too would just be noise.
            None => tree.push(type_mismatch(kind, instance)),
            Some(text) => {
                if let Some(pattern) = pattern {
                    if !pattern.is_match(text) {
                        tree.push(format!("not a valid {}", pattern.name()));
                    }
                }
            }
        },
        _ => {}
    }

    tree
}

fn check_object(fields: &IndexMap<String, Field>, strict: bool, instance: &Value) -> ErrorTree {
    let mut tree = ErrorTree::default();

    let object = match instance.as_object() {
        Some(object) => object,
        None => {
            // Null, arrays and scalars are all type mismatches here; there is
            // nothing to descend into.
            tree.push(format!("expected an object, found {}", type_name(instance)));
            return tree;
        }
    };

    for (name, field) in fields {
        match object.get(name) {
            Some(value) => tree.attach(name, check(field.schema(), value)),
            None if field.is_optional() => {}
            None => tree.attach(name, ErrorTree::leaf("required key missing")),
        }
    }

    if strict {
        // serde_json maps iterate in sorted key order, so this stays
        // deterministic no matter how the input was typed.
        for key in object.keys() {
            if !fields.contains_key(key) {
                tree.attach(key, ErrorTree::leaf("unknown key"));
            }
        }
    }

    tree
}

fn type_mismatch(kind: Kind, instance: &Value) -> String {
    format!("expected {}, found {}", kind.name(), type_name(instance))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, Pattern, Schema};
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use serde_json::json;

    fn hex() -> Schema {
        Schema::pattern(Pattern::new(
            "hex number",
            Regex::new(r"^0x[0-9a-f]+$").unwrap(),
        ))
    }

    #[test]
    fn scalars_match_their_kind() {
        assert!(validate(&Schema::boolean(), &json!(true)).is_ok());
        assert!(validate(&Schema::number(), &json!(1.5)).is_ok());
        assert!(validate(&Schema::string(), &json!("hi")).is_ok());
    }

    #[test]
    fn scalar_mismatch_names_both_sides() {
        let tree = validate(&Schema::boolean(), &json!("yes")).unwrap_err();
        assert_eq!(tree.messages(), ["expected boolean, found string"]);

        let tree = validate(&Schema::number(), &json!(null)).unwrap_err();
        assert_eq!(tree.messages(), ["expected number, found null"]);
    }

    #[test]
    fn pattern_checked_only_for_strings() {
        assert!(validate(&hex(), &json!("0xbeef")).is_ok());

        let tree = validate(&hex(), &json!("beef")).unwrap_err();
        assert_eq!(tree.messages(), ["not a valid hex number"]);

        // Wrong type reports the type alone, never the pattern on top.
        let tree = validate(&hex(), &json!(48879)).unwrap_err();
        assert_eq!(tree.messages(), ["expected string, found number"]);
    }

    #[test]
    fn non_object_where_object_expected() {
        let schema = Schema::object(vec![("a", Field::required(Schema::string()))]);

        let tree = validate(&schema, &json!([1, 2])).unwrap_err();
        assert_eq!(tree.messages(), ["expected an object, found array"]);
        assert!(tree.children().is_empty());

        let tree = validate(&schema, &json!(null)).unwrap_err();
        assert_eq!(tree.messages(), ["expected an object, found null"]);
    }

    #[test]
    fn null_field_is_a_type_mismatch_not_a_missing_key() {
        let schema = Schema::object(vec![("a", Field::required(Schema::string()))]);
        let tree = validate(&schema, &json!({ "a": null })).unwrap_err();
        assert_eq!(
            tree.children()["a"].messages(),
            ["expected string, found null"]
        );
    }

    #[test]
    fn missing_required_key_is_attributed_to_the_field() {
        let schema = Schema::object(vec![
            ("a", Field::required(Schema::string())),
            ("b", Field::optional(Schema::string())),
        ]);

        let tree = validate(&schema, &json!({})).unwrap_err();
        assert_eq!(tree.messages(), Vec::<String>::new());
        assert_eq!(tree.children().len(), 1);
        assert_eq!(tree.children()["a"].messages(), ["required key missing"]);
    }

    #[test]
    fn optional_fields_are_still_checked_when_present() {
        let schema = Schema::object(vec![("b", Field::optional(Schema::boolean()))]);
        let tree = validate(&schema, &json!({ "b": "true" })).unwrap_err();
        assert_eq!(
            tree.children()["b"].messages(),
            ["expected boolean, found string"]
        );
    }

    #[test]
    fn unknown_keys_rejected_only_under_strict_nodes() {
        let loose = Schema::object(vec![("a", Field::required(Schema::string()))]);
        assert!(validate(&loose, &json!({ "a": "x", "extra": 1 })).is_ok());

        let strict = Schema::strict_object(vec![("a", Field::required(Schema::string()))]);
        let tree = validate(&strict, &json!({ "a": "x", "extra": 1 })).unwrap_err();
        assert_eq!(tree.children()["extra"].messages(), ["unknown key"]);
    }

    #[test]
    fn empty_placeholder_object_reports_each_nested_requirement() {
        let schema = Schema::object(vec![(
            "outer",
            Field::optional(Schema::object(vec![
                ("x", Field::required(Schema::number())),
                ("y", Field::required(Schema::number())),
                ("z", Field::optional(Schema::number())),
            ])),
        )]);

        // Absent entirely: fine.
        assert!(validate(&schema, &json!({})).is_ok());

        // Supplied as an empty placeholder: each required member reports.
        let tree = validate(&schema, &json!({ "outer": {} })).unwrap_err();
        let outer = &tree.children()["outer"];
        let failed: Vec<&str> = outer.children().keys().map(|k| k.as_str()).collect();
        assert_eq!(failed, vec!["x", "y"]);
        assert_eq!(outer.children()["x"].messages(), ["required key missing"]);
    }

    #[test]
    fn children_follow_schema_declaration_order() {
        let schema = Schema::object(vec![
            ("first", Field::required(Schema::string())),
            ("second", Field::required(Schema::string())),
            ("third", Field::required(Schema::string())),
        ]);

        // Input order is reversed; result order must not be.
        let tree = validate(
            &schema,
            &json!({ "third": 3, "second": 2, "first": 1 }),
        )
        .unwrap_err();
        let order: Vec<&str> = tree.children().keys().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn valid_nested_document_is_ok() {
        let schema = Schema::strict_object(vec![
            (
                "inner",
                Field::required(Schema::strict_object(vec![(
                    "flag",
                    Field::required(Schema::boolean()),
                )])),
            ),
            ("label", Field::optional(Schema::string())),
        ]);

        assert!(validate(&schema, &json!({ "inner": { "flag": false } })).is_ok());
    }
}
