//! Transformations that talk to the document adapter.
//!
//! "Node" means any addressable part of the document, such as an HTML
//! element or a JSON object.

use super::control_flow::flow;
use crate::error::TransformError;
use crate::transform::curry::arg;
use crate::transform::Transformation;
use crate::Value;

/// `get(selector)`: resolves `selector` relative to the input node, or
/// against the document root when the input is not a node. A selector that
/// matches nothing yields an absent slot.
pub fn get() -> Transformation {
    Transformation::new("get", 3, |ctx, args| {
        let selector = arg(args, 0, "get")?;
        let selector = selector
            .as_str()
            .ok_or_else(|| TransformError::type_mismatch("selector string", selector))?;
        let context = args.get(1).and_then(Value::as_node);
        Ok(ctx
            .adapter()
            .resolve(selector, context)
            .map(Value::Node)
            .unwrap_or(Value::Absent))
    })
    .with_body("get(selector, node, index) -> adapter.resolve(selector, node)")
}

/// Text content of a node.
pub fn node_text() -> Transformation {
    Transformation::new("node_text", 2, |ctx, args| {
        let input = arg(args, 0, "node_text")?;
        let node = input
            .as_node()
            .ok_or_else(|| TransformError::type_mismatch("node", input))?;
        Ok(Value::String(ctx.adapter().text(node)?))
    })
    .with_body("node_text(node, index) -> adapter.text(node)")
}

/// Children of a node, spliced into the vector as separate slots.
pub fn node_children() -> Transformation {
    Transformation::new("node_children", 2, |ctx, args| {
        let input = arg(args, 0, "node_children")?;
        let node = input
            .as_node()
            .ok_or_else(|| TransformError::type_mismatch("node", input))?;
        let children = ctx.adapter().children(node)?;
        Ok(Value::Array(children.into_iter().map(Value::Node).collect()))
    })
    .one_to_many()
    .with_body("node_children(node, index) -> adapter.children(node)")
}

/// What a bare selector stands for: resolve it, then read the text.
pub fn select_text(selector: &str) -> Transformation {
    flow(vec![get().bind([Value::from(selector)]), node_text()])
}
