//! # valschema
//!
//! Prints declarative schema descriptions as rule-notation modules for a
//! runtime validation engine.
//!
//! A schema is an [`Ast`]: a tagged tree of objects, arrays, unions,
//! literals, patterns, and references to other named schemas. The printer
//! walks that tree and emits one `const` declaration per named schema in
//! the engine's textual micro-syntax, plus either per-declaration `export`
//! markers or one aggregate export block.
//!
//! ## Notation
//!
//! | Ast | Printed form |
//! |-----|--------------|
//! | `Value` (string `s`) | `'s'` |
//! | `Value` (number, bool, null, undefined) | bare text |
//! | `Literal` (string `s`) | `'"s"'` (exact match) |
//! | `Literal` (number) | bare text |
//! | `Regexp` | `/source/flags` |
//! | `Array` | `[item]`; a union item is spread: `[a,b]` |
//! | `Union` (scalar-like) | `'a\|b'`, or `'a?'` with an `undefined` arm |
//! | `Union` (structural) | `[[a,b]]` |
//! | `Object` | block with `$strict`, `...Base` spreads, suffixed keys |
//! | `Function` (reference kinds) | bare or quoted schema name |
//! | `Function` (other paths) | quoted validator name |
//!
//! Object keys carry suffixes encoding reference kind and optionality:
//! `/` (partial), `//` (recursive partial), `?` (optional, composable with
//! the others), and `:keyof` (the key-set of another schema).
//!
//! ## Quick start
//!
//! ```rust
//! use valschema::{Ast, Declaration, ObjectProperty, PrintOptions};
//!
//! let user = Declaration::new(
//!     "User",
//!     Ast::object(vec![
//!         ObjectProperty::new("name", Ast::string("string")),
//!         ObjectProperty::new("email", Ast::string("email").optional()),
//!         ObjectProperty::new("friends", Ast::array(Ast::reference("User"))),
//!     ]),
//! );
//!
//! let text = valschema::print(&[user], &PrintOptions::default());
//! assert!(text.starts_with("const User = {"));
//! ```
//!
//! Printing is a pure function: no I/O, no shared state, and a node with an
//! unrecognized tag prints as the empty string instead of failing the batch.
//! Use [`SchemaRegistry`] to collect declarations (rejecting duplicate keys)
//! or to load a batch from its JSON form.

pub mod ast;
pub mod error;
pub mod options;
pub mod print;
pub mod registry;

pub use ast::{Ast, Declaration, LiteralValue, ObjectProperty, Pattern, Scalar};
pub use error::{Error, Result};
pub use options::PrintOptions;
pub use print::{print, Printer};
pub use registry::SchemaRegistry;
