//! Pipelines described as JSON.
//!
//! ```json
//! ["title", {"fn": "trim"}, {"fn": "default_value", "args": ["untitled"]}]
//! ```
//!
//! Strings are selectors, arrays are lists, `{"fn": name, "args": [...]}`
//! looks `name` up in a [`TransformRegistry`] and binds `args`. Any other
//! value is kept as a literal and rejected later by validation.

use super::Pipe;
use crate::error::{PipelineError, PipelineResult};
use crate::transform::TransformRegistry;
use crate::Value;
use serde_json::Value as JsonValue;

impl Pipe {
    pub fn from_json(description: &JsonValue, registry: &TransformRegistry) -> PipelineResult<Pipe> {
        match description {
            JsonValue::String(s) => Ok(Pipe::Selector(s.clone())),
            JsonValue::Array(items) => items
                .iter()
                .map(|item| Pipe::from_json(item, registry))
                .collect::<PipelineResult<Vec<Pipe>>>()
                .map(Pipe::List),
            JsonValue::Object(map) => match map.get("fn") {
                Some(JsonValue::String(name)) => {
                    let transformation = registry.get(name).ok_or_else(|| {
                        PipelineError::InvalidDescription(format!("unknown transformation '{}'", name))
                    })?;
                    let args = match map.get("args") {
                        None => Vec::new(),
                        Some(JsonValue::Array(args)) => args.iter().cloned().map(Value::from).collect(),
                        Some(other) => vec![Value::from(other.clone())],
                    };
                    Ok(Pipe::Transform(transformation.bind(args)))
                }
                Some(other) => Err(PipelineError::InvalidDescription(format!(
                    "\"fn\" must name a transformation, got {}",
                    other
                ))),
                None => Ok(Pipe::Literal(Value::from(description.clone()))),
            },
            other => Ok(Pipe::Literal(Value::from(other.clone()))),
        }
    }

    /// Parses JSON text, then converts it with [`Pipe::from_json`].
    pub fn parse_json(source: &str, registry: &TransformRegistry) -> PipelineResult<Pipe> {
        let description: JsonValue = serde_json::from_str(source)
            .map_err(|e| PipelineError::InvalidDescription(e.to_string()))?;
        Pipe::from_json(&description, registry)
    }
}
