use crate::error::TransformError;
use crate::transform::curry::arg;
use crate::transform::Transformation;
use crate::Value;

/// Fails the whole evaluation when its input is absent. The error message is
/// the rendered trace of every step run so far.
pub fn required() -> Transformation {
    Transformation::new("required", 1, |ctx, args| match arg(args, 0, "required")? {
        Value::Absent => Err(TransformError::Required {
            message: ctx.render_trace(),
        }),
        value => Ok(value.clone()),
    })
    .accepting_errors()
    .with_body("required(x) -> x, or abort when x has no value")
}

/// `default_value(fallback)`: replaces an absent or null input.
pub fn default_value() -> Transformation {
    Transformation::new("default_value", 2, |_, args| {
        let fallback = arg(args, 0, "default_value")?;
        match arg(args, 1, "default_value")? {
            Value::Absent | Value::Null => Ok(fallback.clone()),
            value => Ok(value.clone()),
        }
    })
    .accepting_errors()
    .with_body("default_value(def, x) -> x has no value ? def : x")
}

/// Runs `stages` one after another on a single slot, with the same error
/// isolation between stages as between pipeline steps. The flow itself
/// always receives absent inputs; each stage decides for itself.
pub fn flow(stages: Vec<Transformation>) -> Transformation {
    let inner = stages.clone();
    Transformation::new("flow", 2, move |ctx, args| {
        let mut value = arg(args, 0, "flow")?.clone();
        let index = args.get(1).and_then(Value::as_f64).unwrap_or(0.0) as usize;
        for stage in &inner {
            value = ctx.guarded_call(stage, value, index)?;
        }
        Ok(value)
    })
    .accepting_errors()
    .with_body(format!(
        "flow([{}])",
        stages.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
    ))
    .with_stages(stages)
}
