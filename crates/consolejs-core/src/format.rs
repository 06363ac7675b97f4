//! Message formatting
//!
//! Turns the variadic argument list of a log call into the payload handed
//! to a sink: either the raw values, or one flattened string when pretty
//! printing is on.

use serde::{Deserialize, Serialize};

use crate::inspect::{inspect, DEFAULT_MAX_DEPTH};
use crate::value::Value;

/// Inspection settings read on every formatting call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionConfig {
    /// Deepest level that is still rendered
    pub max_depth: usize,
    /// Flatten every payload to a single string
    pub pretty_print: bool,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            pretty_print: false,
        }
    }
}

/// Formatted message
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Raw values, for sinks that render structured values themselves
    Values(Vec<Value>),
    /// Single flattened string
    Text(String),
}

impl Payload {
    /// Flatten the payload into one line of text
    pub fn to_text(&self, max_depth: usize) -> String {
        match self {
            Payload::Text(text) => text.clone(),
            Payload::Values(values) => join_inspected(values.iter(), max_depth),
        }
    }
}

/// Drop falsy entries, keeping the order of the rest
pub fn truthy_values(values: &[Value]) -> impl Iterator<Item = &Value> {
    values.iter().filter(|v| v.is_truthy())
}

/// Inspect each value at depth 0 and join with a single space
pub fn join_inspected<'a>(values: impl Iterator<Item = &'a Value>, max_depth: usize) -> String {
    values
        .map(|v| inspect(v, max_depth))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an argument list under `config`
pub fn format(values: &[Value], config: &InspectionConfig) -> Payload {
    if config.pretty_print {
        Payload::Text(join_inspected(truthy_values(values), config.max_depth))
    } else {
        Payload::Values(truthy_values(values).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pretty() -> InspectionConfig {
        InspectionConfig {
            pretty_print: true,
            ..InspectionConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = InspectionConfig::default();
        assert_eq!(config.max_depth, 2);
        assert!(!config.pretty_print);
    }

    #[test]
    fn test_raw_mode_drops_falsy() {
        let values = vec![
            Value::from(0),
            Value::from(""),
            Value::from(false),
            Value::from("hello"),
            Value::Null,
        ];
        assert_eq!(
            format(&values, &InspectionConfig::default()),
            Payload::Values(vec![Value::from("hello")])
        );
    }

    #[test]
    fn test_raw_mode_preserves_order_and_structure() {
        let object = Value::object([("a", Value::from(1))]);
        let values = vec![Value::from("x"), Value::Undefined, object.clone(), Value::from(3)];
        assert_eq!(
            format(&values, &InspectionConfig::default()),
            Payload::Values(vec![Value::from("x"), object, Value::from(3)])
        );
    }

    #[test]
    fn test_pretty_mode_joins() {
        let values = vec![Value::from("hello"), Value::from(42)];
        assert_eq!(format(&values, &pretty()), Payload::Text("hello 42".to_string()));
    }

    #[test]
    fn test_pretty_mode_inspects_structures() {
        let values = vec![Value::from("list:"), Value::array([1, 2]), Value::Null];
        assert_eq!(format(&values, &pretty()), Payload::Text("list: [1,2]".to_string()));
    }

    #[test]
    fn test_pretty_mode_respects_depth() {
        let config = InspectionConfig {
            max_depth: 0,
            pretty_print: true,
        };
        let values = vec![Value::array([Value::array([1])])];
        assert_eq!(format(&values, &config), Payload::Text("[...]".to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format(&[], &pretty()), Payload::Text(String::new()));
        assert_eq!(format(&[], &InspectionConfig::default()), Payload::Values(vec![]));
    }

    #[test]
    fn test_payload_to_text() {
        let payload = Payload::Values(vec![Value::from("a"), Value::array([1])]);
        assert_eq!(payload.to_text(2), "a [1]");
    }
}
