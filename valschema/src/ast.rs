//! Schema Ast definitions.
//!
//! This module defines the tagged-union representation of one schema's
//! shape, together with the scalar, literal, and pattern values it carries.
//! Nodes are built by an upstream parser and consumed read-only by the
//! printer.
//!
//! The serde form mirrors the notation's JSON layout: every node is a map
//! with a `"type"` tag, and an absent `value` field on a `value` node stands
//! for the `undefined` sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One schema shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Ast {
    /// A plain scalar printed as-is.
    Value {
        /// The `undefined` sentinel is an absent field in the JSON form.
        #[serde(default, skip_serializing_if = "Scalar::is_undefined")]
        value: Scalar,
    },

    /// A value that must be matched exactly as a literal constraint.
    Literal { value: LiteralValue },

    /// A pattern constraint.
    Regexp { value: Pattern },

    /// A sequence whose elements all match `item`.
    Array { item: Box<Ast> },

    /// A structured record. `extends_from` names other schemas it inherits
    /// properties from; `strict` controls whether unknown keys are rejected.
    Object {
        #[serde(default)]
        strict: bool,
        #[serde(default, rename = "extendsFrom")]
        extends_from: Vec<String>,
        properties: Vec<ObjectProperty>,
    },

    /// A value matching any one of `items`. Never empty.
    Union { items: Vec<Ast> },

    /// A reference to another named schema or a named custom validator,
    /// disambiguated by the dotted `key` path.
    Function { key: Vec<String>, name: String },

    /// Any unrecognized tag. Prints as the empty string so one malformed
    /// node cannot fail an otherwise valid batch.
    #[serde(other)]
    Unknown,
}

impl Ast {
    /// A string scalar.
    pub fn string(value: impl Into<String>) -> Self {
        Ast::Value {
            value: Scalar::String(value.into()),
        }
    }

    /// A number scalar.
    pub fn number(value: f64) -> Self {
        Ast::Value {
            value: Scalar::Number(value),
        }
    }

    /// A boolean scalar.
    pub fn boolean(value: bool) -> Self {
        Ast::Value {
            value: Scalar::Bool(value),
        }
    }

    /// The `null` scalar.
    pub fn null() -> Self {
        Ast::Value {
            value: Scalar::Null,
        }
    }

    /// The `undefined` sentinel.
    pub fn undefined() -> Self {
        Ast::Value {
            value: Scalar::Undefined,
        }
    }

    /// An exact-match string literal.
    pub fn literal_string(value: impl Into<String>) -> Self {
        Ast::Literal {
            value: LiteralValue::String(value.into()),
        }
    }

    /// An exact-match number literal.
    pub fn literal_number(value: f64) -> Self {
        Ast::Literal {
            value: LiteralValue::Number(value),
        }
    }

    /// A pattern constraint.
    pub fn regexp(value: Pattern) -> Self {
        Ast::Regexp { value }
    }

    /// A sequence of `item`.
    pub fn array(item: Ast) -> Self {
        Ast::Array {
            item: Box::new(item),
        }
    }

    /// A strict object (unknown keys rejected) with no inherited schemas.
    pub fn object(properties: Vec<ObjectProperty>) -> Self {
        Ast::Object {
            strict: true,
            extends_from: Vec::new(),
            properties,
        }
    }

    /// A non-strict object (unknown keys allowed) with no inherited schemas.
    pub fn open_object(properties: Vec<ObjectProperty>) -> Self {
        Ast::Object {
            strict: false,
            extends_from: Vec::new(),
            properties,
        }
    }

    /// A union of `items`. Must be non-empty.
    pub fn union(items: Vec<Ast>) -> Self {
        Ast::Union { items }
    }

    /// A function node with an explicit dotted key path.
    pub fn function(key: Vec<String>, name: impl Into<String>) -> Self {
        Ast::Function {
            key,
            name: name.into(),
        }
    }

    /// A full reference to another named schema.
    pub fn reference(name: impl Into<String>) -> Self {
        Ast::function(vec!["ref".to_string()], name)
    }

    /// A shallow partial reference to another named schema.
    pub fn partial_reference(name: impl Into<String>) -> Self {
        Ast::function(vec!["partial-ref".to_string()], name)
    }

    /// A deep/recursive partial reference to another named schema.
    pub fn recursive_partial_reference(name: impl Into<String>) -> Self {
        Ast::function(vec!["recursive-partial-ref".to_string()], name)
    }

    /// Wraps this node in a two-item union with the `undefined` sentinel,
    /// the notation's encoding of optionality.
    pub fn optional(self) -> Self {
        Ast::union(vec![self, Ast::undefined()])
    }

    /// Whether this node is the `undefined` sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(
            self,
            Ast::Value {
                value: Scalar::Undefined
            }
        )
    }
}

/// A scalar carried by an [`Ast::Value`] node.
///
/// `Null` is listed before `Undefined` so a JSON `null` deserializes as
/// `Null`; `Undefined` is only ever produced by an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    #[default]
    Undefined,
}

impl Scalar {
    /// Whether this is the `undefined` sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Scalar::Undefined)
    }
}

impl fmt::Display for Scalar {
    /// The bare textual form used by the notation; strings are unquoted
    /// here and quoted by the printer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Number(value) => write_number(f, *value),
            Scalar::String(value) => f.write_str(value),
            Scalar::Undefined => f.write_str("undefined"),
        }
    }
}

/// Number text in the notation's spelling. Non-finite values cannot arrive
/// through the JSON form but are constructible in code.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{value}")
    }
}

/// A value carried by an [`Ast::Literal`] node: a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Number(f64),
    String(String),
}

impl fmt::Display for LiteralValue {
    /// Bare text; the printer adds the embedded quotes for strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(value) => write_number(f, *value),
            LiteralValue::String(value) => f.write_str(value),
        }
    }
}

/// A regular-expression constraint in its source form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flags: String,
}

impl Pattern {
    /// Create a pattern with no flags.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: String::new(),
        }
    }

    /// Set the pattern flags.
    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// One property of an [`Ast::Object`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    /// Display key used in the printed output.
    pub key: String,

    /// Raw declared key; carries sentinel markers such as `$keyof`,
    /// distinct from the display key.
    #[serde(rename = "objectKey")]
    pub object_key: String,

    /// The property's value shape.
    pub ast: Ast,
}

impl ObjectProperty {
    /// Create a property whose declared key matches its display key.
    pub fn new(key: impl Into<String>, ast: Ast) -> Self {
        let key = key.into();
        Self {
            object_key: key.clone(),
            key,
            ast,
        }
    }

    /// Override the raw declared key.
    pub fn with_object_key(mut self, object_key: impl Into<String>) -> Self {
        self.object_key = object_key.into();
        self
    }
}

/// A top-level named schema: an Ast carrying the declaration name it is
/// exported under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub key: String,
    #[serde(flatten)]
    pub ast: Ast,
}

impl Declaration {
    /// Create a named declaration.
    pub fn new(key: impl Into<String>, ast: Ast) -> Self {
        Self {
            key: key.into(),
            ast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_wraps_in_undefined_union() {
        let ast = Ast::string("string").optional();
        match ast {
            Ast::Union { items } => {
                assert_eq!(items.len(), 2);
                assert!(items[1].is_undefined());
            }
            other => panic!("expected union, got {other:?}"),
        }
    }

    #[test]
    fn reference_constructors_set_key_paths() {
        assert_eq!(
            Ast::partial_reference("User"),
            Ast::Function {
                key: vec!["partial-ref".to_string()],
                name: "User".to_string(),
            }
        );
        assert!(!Ast::reference("User").is_undefined());
    }

    #[test]
    fn deserializes_tagged_nodes() {
        let json = r#"{"type":"function","key":["partial-ref"],"name":"User"}"#;
        let ast: Ast = serde_json::from_str(json).unwrap();
        assert_eq!(ast, Ast::partial_reference("User"));
    }

    #[test]
    fn unknown_tag_deserializes_as_unknown() {
        let ast: Ast = serde_json::from_str(r#"{"type":"intersection"}"#).unwrap();
        assert_eq!(ast, Ast::Unknown);
    }

    #[test]
    fn undefined_serializes_without_value_field() {
        let json = serde_json::to_string(&Ast::undefined()).unwrap();
        assert_eq!(json, r#"{"type":"value"}"#);

        let back: Ast = serde_json::from_str(&json).unwrap();
        assert!(back.is_undefined());
    }

    #[test]
    fn scalar_variants_deserialize_untagged() {
        let ast: Ast = serde_json::from_str(r#"{"type":"value","value":null}"#).unwrap();
        assert_eq!(ast, Ast::null());

        let ast: Ast = serde_json::from_str(r#"{"type":"value","value":3}"#).unwrap();
        assert_eq!(ast, Ast::number(3.0));

        let ast: Ast = serde_json::from_str(r#"{"type":"value","value":"string"}"#).unwrap();
        assert_eq!(ast, Ast::string("string"));
    }

    #[test]
    fn declaration_flattens_the_node() {
        let json = r#"{"key":"User","type":"object","strict":true,"properties":[]}"#;
        let declaration: Declaration = serde_json::from_str(json).unwrap();
        assert_eq!(declaration.key, "User");
        assert_eq!(declaration.ast, Ast::object(vec![]));
    }

    #[test]
    fn non_finite_numbers_use_notation_spelling() {
        assert_eq!(Scalar::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Scalar::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Scalar::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(LiteralValue::Number(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn pattern_displays_in_source_form() {
        assert_eq!(Pattern::new("^a+$").to_string(), "/^a+$/");
        assert_eq!(Pattern::new("^a+$").with_flags("i").to_string(), "/^a+$/i");
    }

    #[test]
    fn object_property_defaults_object_key() {
        let property = ObjectProperty::new("name", Ast::string("string"));
        assert_eq!(property.object_key, "name");

        let keyed = property.with_object_key("$keyof");
        assert_eq!(keyed.key, "name");
        assert_eq!(keyed.object_key, "$keyof");
    }
}
