//! Pipeline descriptions.

use crate::transform::Transformation;
use crate::Value;

/// A pipeline description, in shorthand or canonical form.
///
/// Shorthand: a bare `Selector`, or a `List` starting with selectors.
/// Canonical (see [`crate::pipeline::normalize`]): a list of steps whose first
/// step is a `List` of transformations, one per initial slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Pipe {
    /// A selector string, resolved through the document adapter
    Selector(String),
    /// A transformation step
    Transform(Transformation),
    /// A sequence of steps, a selector list, or a zipped step
    List(Vec<Pipe>),
    /// A plain value where a step was expected; always rejected by validation
    Literal(Value),
}

impl Pipe {
    pub fn selector(selector: impl Into<String>) -> Self {
        Pipe::Selector(selector.into())
    }

    pub fn list<I, P>(items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pipe>,
    {
        Pipe::List(items.into_iter().map(Into::into).collect())
    }

    /// Short human-readable name for logs and traces.
    pub fn label(&self) -> String {
        match self {
            Pipe::Selector(s) => format!("'{}'", s),
            Pipe::Transform(t) => t.name().to_string(),
            Pipe::List(items) => {
                let names: Vec<String> = items.iter().map(Pipe::label).collect();
                format!("[{}]", names.join(", "))
            }
            Pipe::Literal(v) => v.to_string(),
        }
    }
}

impl From<Transformation> for Pipe {
    fn from(t: Transformation) -> Self {
        Pipe::Transform(t)
    }
}

impl From<&str> for Pipe {
    fn from(s: &str) -> Self {
        Pipe::Selector(s.to_string())
    }
}

impl From<String> for Pipe {
    fn from(s: String) -> Self {
        Pipe::Selector(s)
    }
}

impl From<Vec<Pipe>> for Pipe {
    fn from(items: Vec<Pipe>) -> Self {
        Pipe::List(items)
    }
}

impl From<Value> for Pipe {
    fn from(v: Value) -> Self {
        Pipe::Literal(v)
    }
}
