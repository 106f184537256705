//! Pipeline evaluation.
//!
//! `evaluate` runs in four phases:
//!
//! 1. normalize the description into canonical steps,
//! 2. validate every step,
//! 3. thread a value vector through the steps, recording each one in the trace,
//! 4. check that exactly one value is left and strip absent markers from it.
//!
//! Phases 1 and 2 fail with `PipelineError::InvalidDescription` or
//! `PipelineError::Validation` before anything runs. During phase 3 only a
//! `Required` fault or a zipped step of the wrong width aborts; every other
//! failure degrades to `Value::Absent` at the slot that failed.

mod context;
mod guard;
pub mod trace;

pub use context::EvalContext;
pub use guard::guarded_call;
pub use trace::{StepDescriptor, Trace, TraceEntry};

use crate::adapter::DocumentAdapter;
use crate::config::EvaluatorConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::logging::features::{LogFeature, PerformanceTimer};
use crate::pipeline::{normalize, validate, Pipe};
use crate::transform::{Kind, Transformation};
use crate::{log_evaluate_debug, log_evaluate_warn, Value};

/// Evaluates pipelines against one document.
pub struct Evaluator<A: DocumentAdapter> {
    adapter: A,
    config: EvaluatorConfig,
    trace: Trace,
}

impl<A: DocumentAdapter> Evaluator<A> {
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, EvaluatorConfig::default())
    }

    pub fn with_config(adapter: A, config: EvaluatorConfig) -> Self {
        Self {
            adapter,
            config,
            trace: Trace::new(),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Trace of the most recent `evaluate` call, including failed ones.
    pub fn last_trace(&self) -> &Trace {
        &self.trace
    }

    /// Runs `pipeline` and returns its single, sanitized result.
    pub fn evaluate(&mut self, pipeline: &Pipe) -> PipelineResult<Value> {
        self.trace = Trace::new();

        let steps = normalize(pipeline)?;
        validate(&steps)?;

        let timer = PerformanceTimer::new(LogFeature::Evaluate, "evaluate".to_string());
        let seed_width = match steps.first() {
            Some(Pipe::List(selectors)) => selectors.len(),
            _ => 0,
        };
        let mut values = vec![Value::Null; seed_width];

        for (index, step) in steps.iter().enumerate() {
            let result = {
                let ctx = EvalContext::new(&self.adapter, &self.trace, &self.config.trace);
                execute_step(&ctx, step, &values)
            };
            let next = match result {
                Ok(next) => next,
                Err(err) => {
                    log_evaluate_warn!("Evaluation aborted at step {}: {}", index, err);
                    return Err(err);
                }
            };
            log_evaluate_debug!(
                "step {} ({}): {} -> {} slots",
                index,
                step.label(),
                values.len(),
                next.len()
            );
            self.trace.push(TraceEntry {
                step: index,
                input: std::mem::take(&mut values),
                output: next.clone(),
                descriptor: StepDescriptor::of(step),
            });
            values = next;
        }
        timer.finish();

        if values.len() != 1 {
            log_evaluate_warn!("Pipeline finished with {} values", values.len());
            return Err(PipelineError::Divergent {
                width: values.len(),
            });
        }
        Ok(values.remove(0).sanitize())
    }
}

/// Applies one step to the current vector.
fn execute_step(ctx: &EvalContext<'_>, step: &Pipe, values: &[Value]) -> PipelineResult<Vec<Value>> {
    match step {
        Pipe::Transform(t) if t.kind() == Kind::ManyToOne => {
            let result = ctx.guarded_call(t, Value::Array(values.to_vec()), 0)?;
            Ok(vec![result])
        }
        Pipe::Transform(t) if t.kind() == Kind::ManyToMany => {
            match ctx.guarded_call(t, Value::Array(values.to_vec()), 0)? {
                Value::Array(items) => Ok(items),
                other => Ok(vec![other]),
            }
        }
        Pipe::Transform(t) => {
            let mut next = Vec::with_capacity(values.len());
            for (j, value) in values.iter().enumerate() {
                let result = ctx.guarded_call(t, value.clone(), j)?;
                push_slot(&mut next, t, result);
            }
            Ok(next)
        }
        Pipe::List(items) => {
            if items.len() != values.len() {
                return Err(PipelineError::ShapeMismatch {
                    width: values.len(),
                    transformations: items.len(),
                });
            }
            let mut next = Vec::with_capacity(values.len());
            for (j, (item, value)) in items.iter().zip(values).enumerate() {
                match item {
                    Pipe::Transform(t) => {
                        let result = ctx.guarded_call(t, value.clone(), j)?;
                        push_slot(&mut next, t, result);
                    }
                    nested => next.push(run_nested(ctx, nested, value.clone(), j)?),
                }
            }
            Ok(next)
        }
        Pipe::Selector(_) | Pipe::Literal(_) => Err(PipelineError::InvalidDescription(format!(
            "step {} is not executable",
            step.label()
        ))),
    }
}

/// One-to-many results are spliced into the vector, everything else takes
/// exactly one slot.
fn push_slot(next: &mut Vec<Value>, t: &Transformation, result: Value) {
    match (t.kind(), result) {
        (Kind::OneToMany, Value::Array(items)) => next.extend(items),
        (_, result) => next.push(result),
    }
}

/// A list nested inside a zipped step runs as a sequence on its one slot.
fn run_nested(ctx: &EvalContext<'_>, pipe: &Pipe, value: Value, index: usize) -> PipelineResult<Value> {
    match pipe {
        Pipe::Transform(t) => Ok(ctx.guarded_call(t, value, index)?),
        Pipe::List(stages) => stages
            .iter()
            .try_fold(value, |value, stage| run_nested(ctx, stage, value, index)),
        other => Err(PipelineError::InvalidDescription(format!(
            "{} is not executable",
            other.label()
        ))),
    }
}
