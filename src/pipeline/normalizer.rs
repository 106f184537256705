//! Shorthand expansion.

use super::Pipe;
use crate::error::{PipelineError, PipelineResult};
use crate::log_normalize_debug;
use crate::transform::builtins::node::select_text;

/// Rewrites a description into canonical steps.
///
/// - `"a"` becomes `[["a"]]`.
/// - A leading run of selectors is gathered into one selector list:
///   `["a", "b", f]` becomes `[["a", "b"], f]`.
/// - Every selector directly inside the first step becomes
///   `flow([get(selector), node_text])`.
///
/// The input is never modified. Normalizing a canonical pipeline returns it
/// unchanged.
pub fn normalize(pipeline: &Pipe) -> PipelineResult<Vec<Pipe>> {
    let mut steps = match pipeline {
        Pipe::Selector(s) => vec![Pipe::Selector(s.clone())],
        Pipe::List(items) => items.clone(),
        _ => {
            return Err(PipelineError::InvalidDescription(
                "pipeline must be a selector, array, or nested structure".to_string(),
            ))
        }
    };

    let leading = steps
        .iter()
        .take_while(|p| matches!(p, Pipe::Selector(_)))
        .count();
    if leading > 0 {
        let selectors: Vec<Pipe> = steps.drain(..leading).collect();
        steps.insert(0, Pipe::List(selectors));
    }

    match steps.first_mut() {
        Some(Pipe::List(first)) => {
            for slot in first.iter_mut() {
                if let Pipe::Selector(selector) = slot {
                    log_normalize_debug!("expanding selector '{}'", selector);
                    *slot = Pipe::Transform(select_text(selector));
                }
            }
        }
        _ => {
            return Err(PipelineError::InvalidDescription(
                "pipeline must begin with a selector or a list of selectors".to_string(),
            ))
        }
    }

    Ok(steps)
}
