//! Configuration options for emission.
//!
//! The output format is mostly fixed by the directory's conventions; the one
//! knob is indentation width.
//!
//! ## Examples
//!
//! ```rust
//! use dirstyle::EmitOptions;
//!
//! let options = EmitOptions::new().with_indent(4);
//! assert_eq!(options.indent, 4);
//! ```

/// Configuration options for YAML emission.
#[derive(Clone, Debug)]
pub struct EmitOptions {
    /// Spaces per nesting level. Default is 2.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions { indent: 2 }
    }
}

impl EmitOptions {
    /// Creates default options (2-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
