//! Dynamic value model compared by the explainer.
//!
//! Composite values (`Array`, `Object`, `Function`) are reference counted:
//! cloning a [`Value`] shares the allocation, so the clone is identity-equal
//! to the original, while two separately built composites never are even when
//! their contents match. Scalars compare by value.

use crate::errors::{Result, WhyDiffError};
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Keyed members of an `Object`, in insertion order
pub type Record = IndexMap<String, Value>;

/// Opaque callable, compared by identity only
#[derive(Debug)]
pub struct Callable {
    name: String,
}

impl Callable {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Function(Rc<Callable>),
    Array(Rc<Vec<Value>>),
    Object(Rc<Record>),
}

/// Traversal view of a value
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// No traversable members (primitives and callables)
    Scalar,
    /// Ordered, index-addressable members
    Sequence(&'a [Value]),
    /// Keyed members
    Record(&'a Record),
}

impl Value {
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(Rc::new(items.into_iter().collect()))
    }

    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(Rc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Rc::from(s.as_ref()))
    }

    /// A fresh callable; every call yields a distinct identity
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(Rc::new(Callable { name: name.into() }))
    }

    /// Parse a JSON document into a value tree
    ///
    /// # Errors
    ///
    /// `InvalidJson` when `text` is not valid JSON; `source_name` is carried
    /// into the error for reporting.
    pub fn from_json_str(source_name: &str, text: &str) -> Result<Self> {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|e| WhyDiffError::InvalidJson {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Value::from(json))
    }

    pub fn shape(&self) -> Shape<'_> {
        match self {
            Value::Array(items) => Shape::Sequence(items.as_slice()),
            Value::Object(record) => Shape::Record(record),
            _ => Shape::Scalar,
        }
    }

    /// `null` or `undefined`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Arrays, objects and callables; everything compared by reference
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Function(_)
        )
    }

    /// Keyed member lookup; only objects have keyed members
    pub fn member(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(record) => record.get(key),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// String form used when a composite is coerced against a primitive
    ///
    /// Arrays join their elements with `,` (nullish elements render empty),
    /// objects render as `[object Object]`.
    pub fn to_primitive_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.to_string(),
            Value::Function(f) => format!("function {}() {{ [native code] }}", f.name),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        item.to_primitive_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Numeric conversion used by loose equality
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(true) => 1.0,
            Value::Bool(false) => 0.0,
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            composite => string_to_number(&composite.to_primitive_string()),
        }
    }
}

/// Render a number the way a script console would (`1`, not `1.0`)
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// Numeric conversion of a string: blank is zero, unparseable is NaN
pub(crate) fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }
    }
    let decimal_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_chars {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

const PREVIEW_KEYS: usize = 3;

/// Compact one-line preview, never the full tree
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Function(c) => write!(f, "ƒ {}()", c.name),
            Value::Array(items) => write!(f, "Array({})", items.len()),
            Value::Object(record) => {
                let keys: Vec<&str> = record.keys().take(PREVIEW_KEYS).map(String::as_str).collect();
                let more = if record.len() > PREVIEW_KEYS { ", …" } else { "" };
                write!(f, "{{{}{}}}", keys.join(", "), more)
            }
        }
    }
}
