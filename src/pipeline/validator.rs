//! Structural checks on canonical pipelines.

use super::Pipe;
use crate::error::{PipelineError, PipelineResult};
use crate::transform::Transformation;
use crate::{log_validate_debug, log_validate_warn, Value};

/// Checks every step of a normalized pipeline.
///
/// Each transformation must have exactly 1 or 2 unbound parameters, nested
/// lists are checked recursively, and selectors or plain values are rejected
/// anywhere they are left over.
///
/// The first step is checked too, since it runs as a zipped step over the
/// seeded slots. Errors name the step by its index in `steps`, so the first
/// step after the selectors is step 1, matching `TraceEntry::step`.
pub fn validate(steps: &[Pipe]) -> PipelineResult<()> {
    for (index, step) in steps.iter().enumerate() {
        validate_step(index, step).map_err(|err| {
            log_validate_warn!("{}", err);
            err
        })?;
    }
    log_validate_debug!("validated {} steps", steps.len());
    Ok(())
}

fn validate_step(index: usize, step: &Pipe) -> PipelineResult<()> {
    match step {
        Pipe::List(items) => items.iter().try_for_each(|item| validate_step(index, item)),
        Pipe::Transform(t) => validate_transformation(index, t),
        Pipe::Selector(selector) => Err(PipelineError::Validation {
            step: index,
            message: format!(
                "Selector '{}' can only appear at the start of the pipeline.",
                selector
            ),
        }),
        Pipe::Literal(value) => Err(PipelineError::Validation {
            step: index,
            message: format!(
                "Transformation is not a function.\n\
                 Maybe you supplied too many config parameters? (i.e. \"join('sep','x')\" rather than \"join('sep')\")\n\
                 Transformation:\n{}",
                value.to_json()
            ),
        }),
    }
}

fn validate_transformation(index: usize, t: &Transformation) -> PipelineResult<()> {
    let remaining = t.remaining_arity();
    if (1..=2).contains(&remaining) {
        return Ok(());
    }

    let message = if remaining == 0 {
        let bound = if t.is_over_applied() {
            format!(" ({} bound for {} parameters)", t.applied_args().len(), t.arity())
        } else {
            String::new()
        };
        format!(
            "Transformation \"{}\" takes 0 arguments, but should take 1 or 2. Possible reasons:\n\
             * No parameters were declared (should be value, or value and index)\n\
             * Too many config parameters were given{} (for example join(\"sep\", \"I am wrong\"))\n\
             Function:\n{}\n\
             Applied to: {}",
            t.name(),
            bound,
            t.body(),
            applied_args_json(t.applied_args())
        )
    } else {
        format!(
            "Transformation \"{}\" takes {} arguments, but should take 1 or 2.\n\
             Maybe you forgot to provide some config parameters? (i.e. \"join\" rather than \"join('sep')\")\n\
             Function:\n{}\n\
             Applied to: {}",
            t.name(),
            remaining,
            t.body(),
            applied_args_json(t.applied_args())
        )
    };

    Err(PipelineError::Validation {
        step: index,
        message,
    })
}

fn applied_args_json(args: &[Value]) -> String {
    serde_json::Value::Array(args.iter().map(Value::to_json).collect()).to_string()
}
