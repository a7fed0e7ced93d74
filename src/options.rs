//! Configuration options for pretty output.
//!
//! Compact output has no knobs by construction; [`FormatOptions`] only affects
//! the re-indentation pass.
//!
//! ## Examples
//!
//! ```rust
//! use json_scribe::{to_pretty_with_options, Document, FormatOptions};
//!
//! let mut document = Document::new();
//! document.field("x").set(1);
//!
//! let options = FormatOptions::new().with_indent(4);
//! let pretty = to_pretty_with_options(&document, options).unwrap();
//! assert!(pretty.contains("    \"x\": 1"));
//! ```

/// Configuration options for the pretty formatter.
///
/// # Examples
///
/// ```rust
/// use json_scribe::FormatOptions;
///
/// // Default: two spaces per nesting level
/// let options = FormatOptions::new();
/// assert_eq!(options.indent, 2);
///
/// // Wider indentation
/// let options = FormatOptions::new().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// Number of spaces emitted per nesting level.
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { indent: 2 }
    }
}

impl FormatOptions {
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
