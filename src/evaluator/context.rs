use super::guard::guarded_call;
use super::trace::Trace;
use crate::adapter::DocumentAdapter;
use crate::config::TraceConfig;
use crate::error::TransformResult;
use crate::transform::Transformation;
use crate::Value;

/// What a transformation can see while it runs.
///
/// Passed explicitly to every call: the document adapter for node access and
/// the trace recorded so far for diagnostics.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    adapter: &'a dyn DocumentAdapter,
    trace: &'a Trace,
    trace_config: &'a TraceConfig,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        adapter: &'a dyn DocumentAdapter,
        trace: &'a Trace,
        trace_config: &'a TraceConfig,
    ) -> Self {
        Self {
            adapter,
            trace,
            trace_config,
        }
    }

    pub fn adapter(&self) -> &'a dyn DocumentAdapter {
        self.adapter
    }

    /// Steps completed before the current one.
    pub fn trace(&self) -> &'a Trace {
        self.trace
    }

    pub fn render_trace(&self) -> String {
        self.trace.render(self.trace_config)
    }

    /// Runs `transformation` on one slot with the evaluator's error isolation.
    pub fn guarded_call(
        &self,
        transformation: &Transformation,
        value: Value,
        index: usize,
    ) -> TransformResult<Value> {
        guarded_call(self, transformation, value, index)
    }
}
