//! Values threaded through a pipeline.

use crate::adapter::NodeRef;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// A single slot value.
///
/// `Absent` marks a slot that produced no value. Fatal faults never appear
/// here, they travel as `Err` through the evaluator instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The neutral "no value" output
    Null,
    /// A boolean value
    Boolean(bool),
    /// A numeric value (floating point)
    Number(f64),
    /// A string value
    String(String),
    /// An ordered list of values
    Array(Vec<Value>),
    /// A keyed map of values
    Object(BTreeMap<String, Value>),
    /// A node handle issued by the document adapter
    Node(NodeRef),
    /// Recoverable "nothing was produced here"
    Absent,
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the first `Absent` directly inside a container value.
    ///
    /// Only the immediate elements are inspected, nested containers are left
    /// for the transformation to deal with.
    pub fn first_absent(&self) -> Option<&Value> {
        match self {
            Value::Array(items) => items.iter().find(|v| v.is_absent()),
            Value::Object(map) => map.values().find(|v| v.is_absent()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<NodeRef> {
        match self {
            Value::Node(node) => Some(*node),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Node(_) => "node",
            Value::Absent => "absent",
        }
    }

    /// Replaces every `Absent`, at any depth, with `Null`.
    pub fn sanitize(self) -> Value {
        match self {
            Value::Absent => Value::Null,
            Value::Array(items) => Value::Array(items.into_iter().map(Value::sanitize).collect()),
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, v.sanitize()))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Converts to JSON. Nodes and absent slots become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null | Value::Absent | Value::Node(_) => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        JsonValue::Number(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Node(node) => write!(f, "<node {}>", node.0),
            Value::Absent => write!(f, "NoValue"),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(a) => Value::Array(a.into_iter().map(Value::from).collect()),
            JsonValue::Object(o) => {
                Value::Object(o.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
