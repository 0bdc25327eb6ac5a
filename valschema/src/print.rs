//! Printer for the validator's rule notation.
//!
//! Serializes schema [`Ast`] trees into the textual micro-syntax the
//! validator engine interprets directly: single-quoted scalars, `'"..."'`
//! exact-match literals, `[...]` arrays, `'a|b'` string enums, `[[...]]`
//! structural unions, and object blocks whose keys carry reference-kind and
//! optionality suffixes (`/`, `//`, `?`, `:keyof`).
//!
//! The emitted grammar is load-bearing: it is parsed by the downstream
//! validator engine, so whitespace, quoting, and suffix placement are exact.

use crate::ast::{Ast, Declaration, LiteralValue, ObjectProperty, Scalar};
use crate::options::PrintOptions;

/// Dotted paths that denote schema references rather than named custom
/// validators.
const REF_KINDS: [&str; 3] = ["ref", "partial-ref", "recursive-partial-ref"];

fn is_ref_kind(path: &str) -> bool {
    REF_KINDS.contains(&path)
}

/// Key suffix for a reference kind. A full `ref` and any unmapped path get
/// no suffix.
fn ref_suffix(path: &str) -> &'static str {
    match path {
        "partial-ref" => "/",
        "recursive-partial-ref" => "//",
        _ => "",
    }
}

/// Re-indents a nested multi-line value by two extra spaces per line.
fn pad(s: &str) -> String {
    s.replace('\n', "\n  ")
}

/// Characters allowed in a bare (unquoted) object key.
fn is_bare_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Resolves the decoration appended to an object property's key and the
/// effective Ast printed as that property's value. First match wins:
///
/// 1. An object with a single `$keyof` property: suffix `:keyof`, value is
///    the inner Ast (the property's valid keys are another schema's keys).
/// 2. A function node: suffix from the reference-kind table.
/// 3. An array of a function node: same table, keyed by the element; the
///    suffix decorates the key, not the array contents.
/// 4. A two-item union with the `undefined` sentinel: recurse on the
///    non-sentinel item and append `?`, so optionality composes with the
///    rules above. A union of two sentinels has no non-sentinel item and
///    gets no suffix; it prints as a value instead.
fn key_suffix(ast: &Ast) -> (String, &Ast) {
    if let Ast::Object { properties, .. } = ast {
        if let [property] = properties.as_slice() {
            if property.object_key == "$keyof" {
                return (":keyof".to_string(), &property.ast);
            }
        }
    }

    if let Ast::Function { key, .. } = ast {
        return (ref_suffix(&key.join(".")).to_string(), ast);
    }

    if let Ast::Array { item } = ast {
        if let Ast::Function { key, .. } = item.as_ref() {
            return (ref_suffix(&key.join(".")).to_string(), ast);
        }
    }

    if let Ast::Union { items } = ast {
        if items.len() == 2 && items.iter().any(Ast::is_undefined) {
            if let Some(other) = items.iter().find(|item| !item.is_undefined()) {
                let (suffix, value) = key_suffix(other);
                return (format!("{suffix}?"), value);
            }
        }
    }

    (String::new(), ast)
}

/// The first item that is not the matched `undefined` sentinel, used by the
/// union printer's optional shorthand. When both items are the sentinel the
/// second one wins.
fn other_union_item(items: &[Ast]) -> Option<&Ast> {
    let undefined_at = items.iter().position(Ast::is_undefined)?;
    items
        .iter()
        .enumerate()
        .find(|(index, _)| *index != undefined_at)
        .map(|(_, item)| item)
}

fn print_literal(value: &LiteralValue) -> String {
    match value {
        // The embedded double quotes signal "exact-match literal" to the
        // engine, distinct from a type-naming scalar.
        LiteralValue::String(s) => format!("'\"{s}\"'"),
        number => number.to_string(),
    }
}

fn print_value(value: &Scalar) -> String {
    match value {
        Scalar::String(s) => format!("'{s}'"),
        scalar => scalar.to_string(),
    }
}

/// Prints schema Asts in the validator's rule notation.
///
/// Printing is total and pure: well-formed input never fails, nothing is
/// mutated, and an [`Ast::Unknown`] node serializes to the empty string
/// instead of aborting the batch.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    options: PrintOptions,
}

impl Printer {
    /// Create a printer with the given options.
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    /// Prints the full module text: one declaration per item, each followed
    /// by a blank line, then one aggregate export block (keys in
    /// lexicographic order) unless per-declaration exports are enabled.
    pub fn print(&self, items: &[Declaration]) -> String {
        let mut out = String::new();

        for item in items {
            let marker = if self.options.use_export { "export " } else { "" };
            out.push_str(&format!(
                "{marker}const {} = {};\n\n",
                item.key,
                self.print_ast(&item.ast)
            ));
        }

        if !self.options.use_export {
            let mut keys: Vec<&str> = items.iter().map(|item| item.key.as_str()).collect();
            keys.sort_unstable();

            out.push_str("module.exports = {");
            for key in keys {
                out.push_str(&format!("\n  {key},"));
            }
            out.push_str("\n};\n");
        }

        out
    }

    /// Serializes a single node.
    pub fn print_ast(&self, ast: &Ast) -> String {
        match ast {
            Ast::Array { item } => self.print_array(item),
            Ast::Function { key, name } => self.print_function(key, name),
            Ast::Literal { value } => print_literal(value),
            Ast::Object {
                strict,
                extends_from,
                properties,
            } => self.print_object(*strict, extends_from, properties),
            Ast::Regexp { value } => value.to_string(),
            Ast::Union { items } => self.print_union(items),
            Ast::Value { value } => print_value(value),
            Ast::Unknown => String::new(),
        }
    }

    fn print_array(&self, item: &Ast) -> String {
        match item {
            // A union element is spread into the array's own brackets
            // rather than nesting a union bracket inside an array bracket.
            Ast::Union { items } => {
                let parts: Vec<String> = items.iter().map(|i| self.print_ast(i)).collect();
                format!("[{}]", parts.join(","))
            }
            _ => format!("[{}]", self.print_ast(item)),
        }
    }

    fn print_function(&self, key: &[String], name: &str) -> String {
        if is_ref_kind(&key.join(".")) {
            if self.options.quote {
                format!("'{name}'")
            } else {
                name.to_string()
            }
        } else {
            // A named custom validator must stay distinguishable as a
            // string token.
            format!("'{name}'")
        }
    }

    fn print_object(
        &self,
        strict: bool,
        extends_from: &[String],
        properties: &[ObjectProperty],
    ) -> String {
        let mut out = String::from("{");

        if !strict {
            out.push_str("\n  $strict: false,");
        }
        for base in extends_from {
            out.push_str(&format!("\n  ...{base},"));
        }
        for property in properties {
            out.push_str(&format!("\n  {},", self.print_property(property)));
        }

        out.push_str("\n}");
        out
    }

    fn print_property(&self, property: &ObjectProperty) -> String {
        let (suffix, value) = key_suffix(&property.ast);
        let key = &property.key;

        let printed_key = if !suffix.is_empty() {
            format!("'{key}{suffix}'")
        } else if key.chars().any(|c| !is_bare_key_char(c)) {
            format!("'{key}'")
        } else {
            key.clone()
        };

        format!("{printed_key}: {}", pad(&self.print_ast(value)))
    }

    fn print_union(&self, items: &[Ast]) -> String {
        // Eligible for the compact string-enum form when every item prints
        // as a quoted token: scalars, literals, and functions that are not
        // bare schema references.
        let use_string = items.iter().all(|item| match item {
            Ast::Function { key, .. } => self.options.quote || !is_ref_kind(&key.join(".")),
            Ast::Value { .. } | Ast::Literal { .. } => true,
            _ => false,
        });

        if use_string && items.len() == 2 && items.iter().any(Ast::is_undefined) {
            if let Some(item) = other_union_item(items) {
                // Optional-scalar shorthand.
                return format!("'{}?'", self.print_ast(item).replace('\'', ""));
            }
        }

        let parts: Vec<String> = items.iter().map(|i| self.print_ast(i)).collect();
        if use_string {
            format!("'{}'", parts.join("|").replace('\'', ""))
        } else {
            format!("[[{}]]", parts.join(","))
        }
    }
}

/// Prints the full module text for a batch of named schemas.
pub fn print(items: &[Declaration], options: &PrintOptions) -> String {
    Printer::new(*options).print(items)
}
