use std::fmt;

use super::path::Path;

/// A concrete value supplied in place of a captured path.
///
/// Values are resolved to rule-language text with [`resolve()`]. A
/// [`Value::Path`] resolves to its raw path text, everything else to its
/// literal syntax.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Explicit null. Also what an absent value (`None`) becomes.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    /// A keyed structure. Entries render in insertion order.
    Map(Vec<(String, Value)>),
    /// A captured path, rendered verbatim.
    Path(Path),
}

impl Value {
    /// Render this value as rule-language text.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Value::Path(path) => path.as_str().to_owned(),
            Value::List(items) => {
                let items: Vec<String> = items.iter().map(Value::resolve).collect();
                format!("[{}]", items.join(", "))
            }
            Value::Map(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{key}: {}", value.resolve()))
                    .collect();
                format!("{{ {} }}", entries.join(", "))
            }
            Value::Null => "null".to_owned(),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            // Non-finite numbers have no literal form.
            Value::Float(v) if !v.is_finite() => "null".to_owned(),
            Value::Float(v) => format_float(*v),
            Value::String(v) => serde_json::Value::String(v.clone()).to_string(),
        }
    }

    /// Build a keyed structure from `(key, value)` pairs, keeping their order.
    #[must_use]
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// JSON number text: shortest round-trip digits, positional when the decimal
// exponent is in -7 < e < 21, exponent form with an explicit sign otherwise.
// `-0` renders `0`.
fn format_float(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    // `{:e}` gives the shortest digits, e.g. `1.2345e3`.
    let scientific = format!("{:e}", v.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return v.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return v.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let frac = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let sign = if n > 0 { '+' } else { '-' };
        format!("{first}{frac}e{sign}{}", (n - 1).abs())
    };

    if v.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Render any value (literal or captured path) as rule-language text.
///
/// ```
/// use typed_rules::{resolve, Value};
///
/// assert_eq!(resolve("hello"), "\"hello\"");
/// assert_eq!(resolve(None::<i64>), "null");
/// assert_eq!(resolve(vec![1_i64, 2]), "[1, 2]");
/// assert_eq!(resolve(Value::map([("a", 1_i64)])), "{ a: 1 }");
/// ```
#[must_use]
pub fn resolve(value: impl Into<Value>) -> String {
    value.into().resolve()
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Path> for Value {
    fn from(v: Path) -> Self {
        Value::Path(v)
    }
}

impl From<&Path> for Value {
    fn from(v: &Path) -> Self {
        Value::Path(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}
