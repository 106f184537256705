//! List transformations. The many-to-one ones receive the whole vector.

use crate::error::{TransformError, TransformResult};
use crate::transform::curry::arg;
use crate::transform::Transformation;
use crate::Value;

fn array_arg<'a>(args: &'a [Value], index: usize, name: &str) -> TransformResult<&'a [Value]> {
    let value = arg(args, index, name)?;
    value
        .as_array()
        .ok_or_else(|| TransformError::type_mismatch("array", value))
}

fn count_arg(args: &[Value], index: usize, name: &str) -> TransformResult<usize> {
    let value = arg(args, index, name)?;
    match value.as_f64() {
        Some(n) if n >= 0.0 && n.fract() == 0.0 => Ok(n as usize),
        _ => Err(TransformError::type_mismatch("non-negative integer", value)),
    }
}

fn element_text(value: &Value) -> TransformResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(_) | Value::Boolean(_) => Ok(value.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(TransformError::type_mismatch("string", other)),
    }
}

fn join_with(sep: &str, items: &[Value]) -> TransformResult<Value> {
    let parts = items
        .iter()
        .map(element_text)
        .collect::<TransformResult<Vec<String>>>()?;
    Ok(Value::String(parts.join(sep)))
}

pub fn concat() -> Transformation {
    Transformation::new("concat", 1, |_, args| join_with("", array_arg(args, 0, "concat")?))
        .many_to_one()
        .with_body("concat(xs) -> xs.join('')")
}

/// `join(sep)`
pub fn join() -> Transformation {
    Transformation::new("join", 2, |_, args| {
        let sep = arg(args, 0, "join")?;
        let sep = sep
            .as_str()
            .ok_or_else(|| TransformError::type_mismatch("separator string", sep))?;
        join_with(sep, array_arg(args, 1, "join")?)
    })
    .many_to_one()
    .with_body("join(sep, xs) -> xs.join(sep)")
}

pub fn head() -> Transformation {
    Transformation::new("head", 1, |_, args| {
        array_arg(args, 0, "head")?
            .first()
            .cloned()
            .ok_or_else(|| TransformError::Failed("head of empty list".to_string()))
    })
    .many_to_one()
    .with_body("head(xs) -> xs[0]")
}

/// `chunk(n)`: regroups the vector into slots of `n` values each.
pub fn chunk() -> Transformation {
    Transformation::new("chunk", 2, |_, args| {
        let size = count_arg(args, 0, "chunk")?;
        if size == 0 {
            return Err(TransformError::Failed("chunk size must be positive".to_string()));
        }
        let items = array_arg(args, 1, "chunk")?;
        Ok(Value::Array(
            items
                .chunks(size)
                .map(|c| Value::Array(c.to_vec()))
                .collect(),
        ))
    })
    .many_to_many()
    .with_body("chunk(n, xs) -> xs in groups of n")
}

/// Flattens one level of nesting.
pub fn flatten() -> Transformation {
    Transformation::new("flatten", 1, |_, args| {
        let items = array_arg(args, 0, "flatten")?;
        let mut flat = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Array(inner) => flat.extend(inner.iter().cloned()),
                other => flat.push(other.clone()),
            }
        }
        Ok(Value::Array(flat))
    })
    .with_body("flatten(xs) -> xs flattened one level")
}

/// `drop(n)`: removes the first `n` elements.
pub fn drop() -> Transformation {
    Transformation::new("drop", 2, |_, args| {
        let n = count_arg(args, 0, "drop")?;
        let items = array_arg(args, 1, "drop")?;
        Ok(Value::Array(items.iter().skip(n).cloned().collect()))
    })
    .with_body("drop(n, xs) -> xs without its first n elements")
}
