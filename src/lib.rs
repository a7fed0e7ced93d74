//! # json_scribe
//!
//! A write-only, in-memory JSON document builder with insertion-ordered keys
//! and a compact-to-pretty reformatter.
//!
//! ## What it does
//!
//! Documents are built programmatically, field by field, and serialized to
//! compact or indented JSON text. Nothing is ever parsed back: the crate has
//! no deserializer at all, by design.
//!
//! - **Insertion order preserved**: fields render in first-assignment order,
//!   through reassignment and merges
//! - **Implicit arrays**: the first indexed access promotes a field into an
//!   array, permanently
//! - **Append-only merge**: merging two documents keeps duplicate keys
//!   instead of overwriting
//! - **Checked construction gaps**: a field reserved by indexed access but
//!   never assigned is a render error, not silent `null`
//! - **Serde interop**: `Document`, `Slot` and `Value` implement `Serialize`,
//!   so documents can be fed to any serde serializer
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! use json_scribe::{doc, Document, True};
//!
//! let mut root = Document::new();
//! root.field("name").set("Bob");
//! root.field("age").set(44);
//! root.field("likes rust").set(True);
//! root.field("children").at(0).set(doc! { "name": "Joe" });
//!
//! assert_eq!(
//!     root.to_compact().unwrap(),
//!     r#"{"name":"Bob","age":44,"likes rust":true,"children":[{"name":"Joe"}]}"#
//! );
//!
//! let pretty = json_scribe::to_pretty(&root).unwrap();
//! assert!(pretty.starts_with("{\n  \"name\": \"Bob\",\n"));
//! ```
//!
//! ## Pretty output
//!
//! Indented output is produced in two stages: the document renders to compact
//! text, then [`reindent`] re-indents that text in a single character scan
//! with one character of lookback. The scan knows nothing about string
//! literals, so strings containing structural characters (`{`, `,`, `:` and
//! friends) are outside its contract; see [`pretty`] for the details.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - building and pretty-printing a document field by field
//! - **`builder_macro.rs`** - the `doc!` literal syntax
//!
//! Run any demo with: `cargo run --example <name>`

pub mod document;
pub mod error;
pub mod macros;
pub mod options;
pub mod pretty;
mod ser;
pub mod slot;
pub mod value;

pub use document::Document;
pub use error::{Error, Result};
pub use options::FormatOptions;
pub use pretty::{reindent, reindent_with_options};
pub use slot::Slot;
pub use value::{False, Null, True, Value};

use std::io;

/// Renders a document as compact JSON text: no whitespace, keys in insertion
/// order.
///
/// # Examples
///
/// ```rust
/// use json_scribe::{to_compact, Document};
///
/// let mut document = Document::new();
/// document.field("x").set(1);
/// assert_eq!(to_compact(&document).unwrap(), r#"{"x":1}"#);
/// ```
///
/// # Errors
///
/// Returns an error if any reachable cell was reserved by indexed access but
/// never assigned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_compact(document: &Document) -> Result<String> {
    ser::render_document(document)
}

/// Renders a document as indented JSON text with two spaces per level.
///
/// # Examples
///
/// ```rust
/// use json_scribe::{to_pretty, Document};
///
/// let mut document = Document::new();
/// document.field("name").set("Bob");
/// document.field("age").set(44);
///
/// assert_eq!(
///     to_pretty(&document).unwrap(),
///     "{\n  \"name\": \"Bob\",\n  \"age\": 44\n}"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if any reachable cell is still unassigned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_pretty(document: &Document) -> Result<String> {
    to_pretty_with_options(document, FormatOptions::default())
}

/// Renders a document as indented JSON text with custom options.
///
/// # Errors
///
/// Returns an error if any reachable cell is still unassigned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_pretty_with_options(document: &Document, options: FormatOptions) -> Result<String> {
    let compact = ser::render_document(document)?;
    Ok(pretty::reindent_with_options(&compact, options))
}

/// Writes the indented rendering of a document, plus a trailing newline, to a
/// writer.
///
/// # Examples
///
/// ```rust
/// use json_scribe::{write_pretty, Document};
///
/// let mut document = Document::new();
/// document.field("x").set(1);
///
/// let mut buffer = Vec::new();
/// write_pretty(&mut buffer, &document).unwrap();
/// assert!(buffer.ends_with(b"}\n"));
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails or the writer fails.
pub fn write_pretty<W>(mut writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    let text = to_pretty(document)?;
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(|e| Error::io(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_then_pretty_agree() {
        let mut document = Document::new();
        document.field("name").set("Bob");
        document.field("age").set(44);

        let compact = to_compact(&document).unwrap();
        assert_eq!(to_pretty(&document).unwrap(), reindent(&compact));
    }

    #[test]
    fn test_write_pretty_appends_newline() {
        let mut document = Document::new();
        document.field("x").set(1);

        let mut buffer = Vec::new();
        write_pretty(&mut buffer, &document).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "{\n  \"x\": 1\n}\n");
    }

    #[test]
    fn test_unset_error_propagates_to_entry_points() {
        let mut document = Document::new();
        document.field("pending");

        assert!(to_compact(&document).is_err());
        assert!(to_pretty(&document).is_err());
        assert!(write_pretty(Vec::new(), &document).is_err());
    }
}
