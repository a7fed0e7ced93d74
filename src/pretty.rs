//! The pretty formatter.
//!
//! [`reindent`] re-indents compact JSON text produced by the renderer in a
//! single forward scan, deciding each step from the current character and the
//! immediately preceding one. There is no parser and no token buffer beyond
//! that single character of lookback.
//!
//! The scan has no notion of string literals. Text whose strings contain
//! structural characters (`{`, `}`, `[`, `]`, `:`, `,` or `"`) will be
//! re-indented incorrectly, because the scan cannot tell a quoted brace from
//! a real one. Stick to input produced by [`crate::to_compact`] over
//! documents whose strings avoid those characters; `to_pretty` is the
//! packaged combination.
//!
//! One quirk worth knowing about: `{` checks whether it follows a `:` (a `{`
//! right after a key's colon sits on the key's line; anywhere else it starts
//! its own line), while `[` performs no such check. For input produced by
//! this crate the difference is unobservable — an array can only appear as a
//! field value, so `[` always follows a colon — but hand-crafted compact text
//! can tell the two apart.
//!
//! ## Examples
//!
//! ```rust
//! use json_scribe::reindent;
//!
//! let pretty = reindent(r#"{"name":"Bob","age":44}"#);
//! assert_eq!(pretty, "{\n  \"name\": \"Bob\",\n  \"age\": 44\n}");
//! ```

use crate::options::FormatOptions;

/// Re-indents compact JSON text with two spaces per nesting level.
#[must_use]
pub fn reindent(compact: &str) -> String {
    reindent_with_options(compact, FormatOptions::default())
}

/// Re-indents compact JSON text with the given options.
///
/// Single pass, left to right, no backtracking; output grows linearly with
/// the input. Depth starts at 0 and returns to 0 at the final `}` of
/// well-formed input. The decrement saturates, so unbalanced input cannot
/// underflow the depth counter.
#[must_use]
pub fn reindent_with_options(compact: &str, options: FormatOptions) -> String {
    let mut out = String::with_capacity(compact.len() * 2);
    let mut depth = 0usize;
    let mut prev = '\0';

    for ch in compact.chars() {
        match ch {
            '{' => {
                if prev != ':' {
                    push_indent(&mut out, depth, options.indent);
                }
                out.push('{');
                out.push('\n');
                depth += 1;
            }
            '}' => {
                out.push('\n');
                depth = depth.saturating_sub(1);
                push_indent(&mut out, depth, options.indent);
                out.push('}');
            }
            '[' => {
                out.push('[');
                out.push('\n');
                depth += 1;
            }
            ']' => {
                out.push('\n');
                depth = depth.saturating_sub(1);
                push_indent(&mut out, depth, options.indent);
                out.push(']');
            }
            ':' => {
                out.push(':');
                out.push(' ');
            }
            ',' => {
                out.push(',');
                out.push('\n');
            }
            // this quote opens a new key, or a new string element at this depth
            '"' if prev == ',' || prev == '{' => {
                push_indent(&mut out, depth, options.indent);
                out.push('"');
            }
            _ => {
                // first fragment after an opener or comma that is not itself
                // a quote, e.g. a number or a literal
                if prev == ',' || prev == '{' || prev == '[' {
                    push_indent(&mut out, depth, options.indent);
                }
                out.push(ch);
            }
        }
        prev = ch;
    }

    out
}

fn push_indent(out: &mut String, depth: usize, width: usize) {
    for _ in 0..depth * width {
        out.push(' ');
    }
}
