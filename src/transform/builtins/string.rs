//! String transformations.

use crate::error::{TransformError, TransformResult};
use crate::transform::curry::arg;
use crate::transform::Transformation;
use crate::Value;
use regex::Regex;

fn string_arg<'a>(args: &'a [Value], index: usize, name: &str) -> TransformResult<&'a str> {
    let value = arg(args, index, name)?;
    value
        .as_str()
        .ok_or_else(|| TransformError::type_mismatch("string", value))
}

pub fn trim() -> Transformation {
    Transformation::new("trim", 1, |_, args| {
        Ok(Value::from(string_arg(args, 0, "trim")?.trim()))
    })
    .with_body("trim(x) -> x.trim()")
}

pub fn to_lower_case() -> Transformation {
    Transformation::new("to_lower_case", 1, |_, args| {
        Ok(Value::from(string_arg(args, 0, "to_lower_case")?.to_lowercase()))
    })
    .with_body("to_lower_case(x) -> x.to_lowercase()")
}

pub fn to_upper_case() -> Transformation {
    Transformation::new("to_upper_case", 1, |_, args| {
        Ok(Value::from(string_arg(args, 0, "to_upper_case")?.to_uppercase()))
    })
    .with_body("to_upper_case(x) -> x.to_uppercase()")
}

/// `split(sep)`: splits a string into an array of strings.
pub fn split() -> Transformation {
    Transformation::new("split", 2, |_, args| {
        let sep = string_arg(args, 0, "split")?;
        let text = string_arg(args, 1, "split")?;
        Ok(Value::Array(text.split(sep).map(Value::from).collect()))
    })
    .with_body("split(sep, x) -> x.split(sep)")
}

/// `regex_capture(pattern)`: the first capture group of the first match, or
/// the whole match when the pattern has no groups.
pub fn regex_capture() -> Transformation {
    Transformation::new("regex_capture", 2, |_, args| {
        let pattern = string_arg(args, 0, "regex_capture")?;
        let text = string_arg(args, 1, "regex_capture")?;
        let re = Regex::new(pattern)
            .map_err(|e| TransformError::Failed(format!("invalid pattern '{}': {}", pattern, e)))?;
        let captures = re
            .captures(text)
            .ok_or_else(|| TransformError::Failed(format!("'{}' does not match", pattern)))?;
        let matched = captures
            .get(1)
            .or_else(|| captures.get(0))
            .map(|m| m.as_str())
            .unwrap_or_default();
        Ok(Value::from(matched))
    })
    .with_body("regex_capture(pattern, x) -> first group of pattern in x")
}
