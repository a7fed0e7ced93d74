//! The compact renderer.
//!
//! A depth-first single pass over the model into a pre-allocated `String`:
//! no whitespace, keys in insertion order, strings quoted with `"` and `\`
//! escaped, numbers in their shortest decimal form. The output of this pass
//! is the input contract of [`crate::pretty`].
//!
//! Rendering is total over every assigned document; the one failure mode is
//! a cell reserved by indexed access that was never assigned, reported with
//! the path of the offending field.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::slot::Slot;
use crate::value::Value;

pub(crate) fn render_document(document: &Document) -> Result<String> {
    // 256 bytes covers typical small documents without reallocation
    let mut out = String::with_capacity(256);
    write_document(&mut out, document)?;
    Ok(out)
}

fn write_document(out: &mut String, document: &Document) -> Result<()> {
    out.push('{');
    for (i, (key, slot)) in document.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_quoted(out, key);
        out.push(':');
        write_slot(out, key, slot)?;
    }
    out.push('}');
    Ok(())
}

fn write_slot(out: &mut String, key: &str, slot: &Slot) -> Result<()> {
    if slot.is_array() {
        out.push('[');
        for (i, cell) in slot.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_value(out, cell).map_err(|e| locate(e, key, Some(i)))?;
        }
        out.push(']');
        Ok(())
    } else {
        write_value(out, slot.first()).map_err(|e| locate(e, key, None))
    }
}

fn write_value(out: &mut String, value: &Value) -> Result<()> {
    match value {
        // detected here without key context; the slot level fills the path in
        Value::Unset => Err(Error::unset("")),
        Value::String(s) => {
            write_quoted(out, s);
            Ok(())
        }
        Value::Number(n) => {
            out.push_str(&n.to_string());
            Ok(())
        }
        Value::Object(document) => write_document(out, document),
        Value::True => {
            out.push_str("true");
            Ok(())
        }
        Value::False => {
            out.push_str("false");
            Ok(())
        }
        Value::Null => {
            out.push_str("null");
            Ok(())
        }
    }
}

fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}

// Prefixes an unset-cell error with the field it was found under, building
// the full path outward as the recursion unwinds.
fn locate(err: Error, key: &str, index: Option<usize>) -> Error {
    let prefix = match index {
        Some(i) => format!("{key}[{i}]"),
        None => key.to_string(),
    };
    match err {
        Error::Unset { path } if path.is_empty() => Error::Unset { path: prefix },
        Error::Unset { path } => Error::Unset {
            path: format!("{prefix}.{path}"),
        },
        other => other,
    }
}
