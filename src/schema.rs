//! Schema representations for fixed-shape documents.
//!
//! This module provides the building blocks the theme contract is declared
//! from: primitive value checks ([`Kind`](enum.Kind.html), optionally
//! constrained by a [`Pattern`](struct.Pattern.html)) composed into objects
//! with a fixed, ordered set of [`Field`](struct.Field.html)s.
//!
//! A schema here is purely declarative. It has no behavior of its own; the
//! [`validator`](../validator/index.html) walks it against input data, and
//! the [`export`](../export/index.html) module serializes it for external
//! tooling. Both read the exact same structure, so they cannot diverge.

use indexmap::IndexMap;
use regex::Regex;

/// A single node in a schema tree.
///
/// Schemas are finite and fixed at authoring time: there is no reference
/// form, so a `Schema` can never be self-referential and validation depth is
/// bounded by the declaration itself.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Matches a single scalar JSON value.
    Primitive {
        /// Which scalar type is expected.
        kind: Kind,

        /// An additional constraint on string values.
        ///
        /// Only meaningful when `kind` is [`Kind::String`](enum.Kind.html); a
        /// pattern is never checked against a non-string value, which already
        /// fails the type check.
        pattern: Option<Pattern>,
    },

    /// Matches a JSON object with a fixed set of named fields.
    Object {
        /// The declared fields, in declaration order.
        ///
        /// Declaration order is significant: validation results and the
        /// formatted error report iterate fields in this order, never in the
        /// order keys happen to appear in the input.
        fields: IndexMap<String, Field>,

        /// When set, keys not declared in `fields` are themselves failures.
        strict: bool,
    },
}

impl Schema {
    /// A schema matching any JSON boolean.
    pub fn boolean() -> Self {
        Schema::Primitive {
            kind: Kind::Boolean,
            pattern: None,
        }
    }

    /// A schema matching any JSON number.
    pub fn number() -> Self {
        Schema::Primitive {
            kind: Kind::Number,
            pattern: None,
        }
    }

    /// A schema matching any JSON string.
    pub fn string() -> Self {
        Schema::Primitive {
            kind: Kind::String,
            pattern: None,
        }
    }

    /// A schema matching strings that satisfy `pattern`.
    pub fn pattern(pattern: Pattern) -> Self {
        Schema::Primitive {
            kind: Kind::String,
            pattern: Some(pattern),
        }
    }

    /// An object schema that ignores undeclared keys.
    pub fn object(fields: Vec<(&str, Field)>) -> Self {
        Schema::Object {
            fields: to_field_map(fields),
            strict: false,
        }
    }

    /// An object schema that rejects undeclared keys.
    pub fn strict_object(fields: Vec<(&str, Field)>) -> Self {
        Schema::Object {
            fields: to_field_map(fields),
            strict: true,
        }
    }
}

fn to_field_map(fields: Vec<(&str, Field)>) -> IndexMap<String, Field> {
    fields
        .into_iter()
        .map(|(name, field)| (name.to_owned(), field))
        .collect()
}

/// The scalar types a [`Schema::Primitive`](enum.Schema.html) may check for.
///
/// Arrays and objects are deliberately absent: the theme contract never uses
/// arrays, and objects are the structured [`Schema::Object`](enum.Schema.html)
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The "true" or "false" JSON values.
    Boolean,

    /// Any JSON number, integral or not.
    Number,

    /// Any JSON string.
    String,
}

impl Kind {
    /// The name used in type-mismatch messages and the exported schema.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
        }
    }
}

/// A named regular-expression constraint on string values.
///
/// The name is what operators see in failure messages ("not a valid color"),
/// so it should describe the value, not the regex.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
}

impl Pattern {
    pub fn new(name: &'static str, regex: Regex) -> Self {
        Pattern { name, regex }
    }

    /// The human-readable name of the constrained value.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Does `text` contain a match for this pattern?
    ///
    /// This is a search, not an anchored match, mirroring how the contract's
    /// patterns were originally written.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern source, for the exported schema.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// One declared field of an object schema.
#[derive(Debug, Clone)]
pub struct Field {
    schema: Schema,
    optional: bool,
}

impl Field {
    /// A field that must be present.
    pub fn required(schema: Schema) -> Self {
        Field {
            schema,
            optional: false,
        }
    }

    /// A field that may be absent. When present it is still fully checked.
    pub fn optional(schema: Schema) -> Self {
        Field {
            schema,
            optional: true,
        }
    }

    /// The schema the field's value must satisfy.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// May the field be absent?
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}
