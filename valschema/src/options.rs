//! Formatting options accepted by the printer.

/// Print options.
///
/// Both options default to off: references print bare and the module ends
/// with one aggregate export block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Wrap bare schema-reference names in quotes. Also makes reference
    /// unions eligible for the string-enum shorthand.
    pub quote: bool,

    /// Emit a per-declaration `export` marker instead of one aggregate
    /// export block.
    pub use_export: bool,
}

impl PrintOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether reference names are quoted.
    pub fn with_quote(mut self, quote: bool) -> Self {
        self.quote = quote;
        self
    }

    /// Set whether declarations carry their own export markers.
    pub fn with_export(mut self, use_export: bool) -> Self {
        self.use_export = use_export;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off() {
        let options = PrintOptions::default();
        assert!(!options.quote);
        assert!(!options.use_export);
    }

    #[test]
    fn builder_sets_flags() {
        let options = PrintOptions::new().with_quote(true).with_export(true);
        assert!(options.quote);
        assert!(options.use_export);
    }
}
