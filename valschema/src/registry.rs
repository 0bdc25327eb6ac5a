//! Registry collecting named schemas for one printed module.

use crate::ast::Declaration;
use crate::error::{Error, Result};
use crate::options::PrintOptions;
use crate::print::Printer;

/// An ordered collection of named schema declarations.
///
/// Registration order is preserved in the printed declarations; the
/// aggregate export block sorts its keys on its own, so registration order
/// never leaks into the module's external surface.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    declarations: Vec<Declaration>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named schema. Keys must be unique within the batch.
    pub fn register(&mut self, declaration: Declaration) -> Result<()> {
        if self.declarations.iter().any(|d| d.key == declaration.key) {
            return Err(Error::DuplicateKey {
                key: declaration.key,
            });
        }
        self.declarations.push(declaration);
        Ok(())
    }

    /// Load a batch from its JSON form: an array of tagged nodes, each
    /// carrying a `key`. Nodes with unrecognized tags load as
    /// [`Ast::Unknown`](crate::ast::Ast::Unknown) and print as empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let declarations: Vec<Declaration> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for declaration in declarations {
            registry.register(declaration)?;
        }
        Ok(registry)
    }

    /// Get a declaration by key.
    pub fn get(&self, key: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.key == key)
    }

    /// All declarations in registration order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Print the whole batch as one module.
    pub fn print(&self, options: &PrintOptions) -> String {
        Printer::new(*options).print(&self.declarations)
    }
}
