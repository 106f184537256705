//! Document adapters.
//!
//! The evaluator never looks inside a document. Everything it knows about
//! nodes goes through a [`DocumentAdapter`], which hands out opaque
//! [`NodeRef`] handles and answers text/children queries about them.

pub mod json;

pub use json::JsonDocument;

use crate::error::AdapterResult;

/// Opaque node handle. Only the adapter that issued it can interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(pub usize);

/// Read-only access to an addressable document.
///
/// Implementations must tolerate repeated calls with the same selector during
/// one evaluation. They may cache internally.
pub trait DocumentAdapter {
    /// Resolves `selector` against the document root, or relative to
    /// `context` when given. `None` means the selector matched nothing.
    fn resolve(&self, selector: &str, context: Option<NodeRef>) -> Option<NodeRef>;

    /// Text content of a node.
    fn text(&self, node: NodeRef) -> AdapterResult<String>;

    /// Direct children of a node, in document order.
    fn children(&self, node: NodeRef) -> AdapterResult<Vec<NodeRef>>;
}

impl<A: DocumentAdapter + ?Sized> DocumentAdapter for &A {
    fn resolve(&self, selector: &str, context: Option<NodeRef>) -> Option<NodeRef> {
        (**self).resolve(selector, context)
    }

    fn text(&self, node: NodeRef) -> AdapterResult<String> {
        (**self).text(node)
    }

    fn children(&self, node: NodeRef) -> AdapterResult<Vec<NodeRef>> {
        (**self).children(node)
    }
}
