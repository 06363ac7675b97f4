//! Loggable values
//!
//! A closed set of shapes that host values are mapped onto before they
//! reach the formatter: absent, null, callable, sequence, associative and
//! scalar (bool, number, text).

/// A host value handed to the console
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value at all (`undefined`)
    Undefined,
    Null,
    /// A callable; only its presence is rendered, never its body
    Function,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Ordered sequence
    Array(Vec<Value>),
    /// Own keys of an associative value, in the order the host reported them
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Build an object from key/value pairs
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build an array from anything convertible into values
    pub fn array<T, I>(items: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Host truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""`
    /// are falsy, everything else (including empty arrays and objects) is truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::Function | Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Textual representation of a scalar, `None` for structured values
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(number_text(*n)),
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Render a number the way a script host prints it
fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // covers -0
        "0".to_string()
    } else {
        finite_number_text(n)
    }
}

/// Shortest round-trip digits, laid out as a script host's `toString`
///
/// Plain notation for decimal exponents in `-7..21`, exponent notation
/// (`1e+21`, `1.5e-7`) outside that range.
fn finite_number_text(n: f64) -> String {
    let sign = if n < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest digits, e.g. "1.2345e2"
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return n.to_string(),
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return n.to_string(),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // position of the decimal point relative to the digit string
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, exponent.abs())
        }
    };
    format!("{}{}", sign, body)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        let falsy = [
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(-0.0),
            Value::Number(f64::NAN),
            Value::from(""),
        ];
        for value in falsy {
            assert!(!value.is_truthy(), "{:?} should be falsy", value);
        }

        let truthy = [
            Value::Function,
            Value::Bool(true),
            Value::from(-1),
            Value::from("0"),
            Value::Array(vec![]),
            Value::Object(vec![]),
        ];
        for value in truthy {
            assert!(value.is_truthy(), "{:?} should be truthy", value);
        }
    }

    #[test]
    fn test_number_text() {
        assert_eq!(Value::from(42).scalar_text().unwrap(), "42");
        assert_eq!(Value::from(1.5).scalar_text().unwrap(), "1.5");
        assert_eq!(Value::from(-0.0).scalar_text().unwrap(), "0");
        assert_eq!(Value::Number(f64::INFINITY).scalar_text().unwrap(), "Infinity");
        assert_eq!(Value::Number(f64::NAN).scalar_text().unwrap(), "NaN");
        assert!(Value::Null.scalar_text().is_none());
    }

    #[test]
    fn test_number_text_exponent_range() {
        let text = |n: f64| Value::Number(n).scalar_text().unwrap();
        assert_eq!(text(1e21), "1e+21");
        assert_eq!(text(1e20), "100000000000000000000");
        assert_eq!(text(-1.5e300), "-1.5e+300");
        assert_eq!(text(1e-7), "1e-7");
        assert_eq!(text(1.5e-7), "1.5e-7");
        assert_eq!(text(0.000001), "0.000001");
        assert_eq!(text(0.1), "0.1");
        assert_eq!(text(123.456), "123.456");
        assert_eq!(text(-2.5), "-2.5");
    }

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({"name": "cjs", "tags": [1, null], "on": true}));
        let Value::Object(entries) = value else {
            panic!("expected object");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"name"));
        assert!(entries
            .iter()
            .any(|(k, v)| k == "tags" && *v == Value::Array(vec![Value::Number(1.0), Value::Null])));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
