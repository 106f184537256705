//! Per-slot error isolation.

use super::EvalContext;
use crate::error::TransformResult;
use crate::log_transform_debug;
use crate::transform::Transformation;
use crate::Value;

/// Runs one transformation on one slot.
///
/// Absent inputs, or containers holding an absent element, skip the call
/// unless the transformation accepts errors. A `Required` error is returned
/// as `Err` and must abort the evaluation; any other error becomes
/// `Value::Absent`.
pub fn guarded_call(
    ctx: &EvalContext<'_>,
    transformation: &Transformation,
    value: Value,
    index: usize,
) -> TransformResult<Value> {
    if !transformation.accepts_errors() {
        if value.is_absent() {
            return Ok(value);
        }
        if let Some(absent) = value.first_absent() {
            return Ok(absent.clone());
        }
    }

    match transformation.invoke(ctx, value, index) {
        Ok(result) => Ok(result),
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            log_transform_debug!(
                "{} failed at slot {}, continuing with no value: {}",
                transformation.name(),
                index,
                err
            );
            Ok(Value::Absent)
        }
    }
}
