//! Value inspection
//!
//! Flattens a [`Value`] into a display string, stepping into nested arrays
//! and objects until the configured depth is exceeded.

use crate::value::Value;

/// Marker emitted in place of anything nested deeper than the limit
pub const ELLIPSIS: &str = "...";

/// Default maximum depth of inspection
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Render `value` starting at depth 0
pub fn inspect(value: &Value, max_depth: usize) -> String {
    inspect_at(value, 0, max_depth)
}

/// Render `value` as if found `depth` levels below the top
///
/// Each array element and object member is rendered one level deeper than
/// its container. Anything at a depth greater than `max_depth` collapses to
/// [`ELLIPSIS`].
pub fn inspect_at(value: &Value, depth: usize, max_depth: usize) -> String {
    if depth > max_depth {
        return ELLIPSIS.to_string();
    }

    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Function => "function".to_string(),
        Value::Array(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| inspect_at(item, depth + 1, max_depth))
                .collect();
            format!("[{}]", rendered.join(","))
        }
        Value::Object(entries) => {
            let mut out = String::from("{\n");
            for (key, member) in entries {
                out.push_str(key);
                out.push_str(": ");
                out.push_str(&inspect_at(member, depth + 1, max_depth));
                out.push('\n');
            }
            out.push_str("}\n");
            out
        }
        scalar => scalar.scalar_text().unwrap_or_default(),
    }
}
