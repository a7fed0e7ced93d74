//! Error types for document rendering.
//!
//! Construction of a document cannot fail: every assignment replaces whatever
//! a cell previously held, key lookup creates missing slots, and merges append
//! unconditionally. The only failure the model can reach is rendering a value
//! that was reserved by indexed access but never assigned; the render entry
//! points report that instead of emitting malformed output.
//!
//! ## Examples
//!
//! ```rust
//! use json_scribe::Document;
//!
//! let mut document = Document::new();
//! document.field("items").at(1).set("second");
//!
//! // index 0 was grown as a gap and never assigned
//! let err = document.to_compact().unwrap_err();
//! assert!(err.to_string().contains("items[0]"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering or writing
/// a document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing rendered text
    #[error("IO error: {0}")]
    Io(String),

    /// A cell was reserved by indexed access but never assigned a value
    #[error("field `{path}` was reserved but never assigned")]
    Unset { path: String },

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unset-cell error for the given field path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_scribe::Error;
    ///
    /// let err = Error::unset("children[1]");
    /// assert!(err.to_string().contains("children[1]"));
    /// ```
    pub fn unset(path: impl Into<String>) -> Self {
        Error::Unset { path: path.into() }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
