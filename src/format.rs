//! Argument rendering for call signatures
//!
//! Every rule here is total: formatting must never fail or panic, because it
//! runs inside the observation hook of a live program. Malformed or oversized
//! values degrade to a short placeholder instead of propagating an error.

use std::borrow::Cow;

use crate::site::ArgValue;

/// Longest string argument rendered verbatim
const MAX_STR_LEN: usize = 40;

/// Characters kept when a string argument is truncated
const TRUNCATED_LEN: usize = 37;

/// Render an argument list into the `a, b, c` form used inside signatures
///
/// An empty list renders as an empty string.
pub fn format_args(args: &[ArgValue]) -> String {
    if args.is_empty() {
        return String::new();
    }

    args.iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a single argument into a short, stable token
pub fn format_value(arg: &ArgValue) -> String {
    match arg {
        ArgValue::Object { type_name } => format!("object({})", type_name),
        ArgValue::Array { len } => format!("array[{}]", len),
        ArgValue::Str(s) => format!("\"{}\"", escape(&clip(s))),
        ArgValue::Bool(true) => "true".to_string(),
        ArgValue::Bool(false) => "false".to_string(),
        ArgValue::Int(n) => n.to_string(),
        ArgValue::Float(x) => x.to_string(),
        ArgValue::Null => "null".to_string(),
    }
}

/// Truncate long strings to `TRUNCATED_LEN` characters plus an ellipsis
///
/// Counts characters, not bytes, so multibyte input can never split a code
/// point.
fn clip(s: &str) -> Cow<'_, str> {
    if s.chars().count() > MAX_STR_LEN {
        let head: String = s.chars().take(TRUNCATED_LEN).collect();
        Cow::Owned(format!("{}...", head))
    } else {
        Cow::Borrowed(s)
    }
}

/// Backslash-escape quotes and backslashes embedded in a string argument
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '"' | '\'' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
