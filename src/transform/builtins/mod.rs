//! Ready-made transformations.
//!
//! Each constructor returns a fresh unbound [`Transformation`]; configurable
//! ones are bound before use, e.g. `list::join().bind([", ".into()])`.

pub mod control_flow;
pub mod datetime;
pub mod list;
pub mod node;
pub mod string;

use super::Transformation;
use std::collections::HashMap;

/// Returns every builtin keyed by name. `flow` is not included because it
/// is configured with transformations rather than values.
pub fn builtin_transformations() -> HashMap<String, Transformation> {
    let all = [
        string::trim(),
        string::to_lower_case(),
        string::to_upper_case(),
        string::split(),
        string::regex_capture(),
        list::concat(),
        list::join(),
        list::head(),
        list::chunk(),
        list::flatten(),
        list::drop(),
        node::get(),
        node::node_text(),
        node::node_children(),
        control_flow::required(),
        control_flow::default_value(),
        datetime::parse_datetime(),
        datetime::combine_datetime(),
    ];
    all.into_iter()
        .map(|t| (t.name().to_string(), t))
        .collect()
}
