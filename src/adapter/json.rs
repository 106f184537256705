//! Adapter over an in-memory JSON document.
//!
//! Selectors are dot-separated paths (`items.0.title`) or JSON pointers when
//! they start with `/`. A segment is a plain object key or an array index, so
//! keys like `#a` resolve as-is.

use super::{DocumentAdapter, NodeRef};
use crate::error::{AdapterError, AdapterResult};
use crate::log_adapter_debug;
use serde_json::Value as JsonValue;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct NodeTable {
    pointers: Vec<String>,
    by_pointer: HashMap<String, NodeRef>,
}

impl NodeTable {
    fn intern(&mut self, pointer: String) -> NodeRef {
        if let Some(node) = self.by_pointer.get(&pointer) {
            return *node;
        }
        let node = NodeRef(self.pointers.len());
        self.pointers.push(pointer.clone());
        self.by_pointer.insert(pointer, node);
        node
    }
}

/// A JSON value exposed as a document.
pub struct JsonDocument {
    root: JsonValue,
    nodes: RefCell<NodeTable>,
}

impl JsonDocument {
    pub fn new(root: JsonValue) -> Self {
        Self {
            root,
            nodes: RefCell::new(NodeTable::default()),
        }
    }

    /// Parses a JSON string into a document.
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(source)?))
    }

    /// Handle for the document root.
    pub fn root(&self) -> NodeRef {
        self.nodes.borrow_mut().intern(String::new())
    }

    /// JSON value behind a handle.
    pub fn value(&self, node: NodeRef) -> AdapterResult<&JsonValue> {
        let pointer = self.pointer(node)?;
        self.root
            .pointer(&pointer)
            .ok_or(AdapterError::UnknownNode(node))
    }

    fn pointer(&self, node: NodeRef) -> AdapterResult<String> {
        self.nodes
            .borrow()
            .pointers
            .get(node.0)
            .cloned()
            .ok_or(AdapterError::UnknownNode(node))
    }

    fn selector_to_pointer(base: &str, selector: &str) -> String {
        if selector.starts_with('/') {
            return format!("{}{}", base, selector);
        }
        let mut pointer = base.to_string();
        for segment in selector.split('.').filter(|s| !s.is_empty()) {
            pointer.push('/');
            pointer.push_str(&escape_segment(segment));
        }
        pointer
    }
}

fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

impl DocumentAdapter for JsonDocument {
    fn resolve(&self, selector: &str, context: Option<NodeRef>) -> Option<NodeRef> {
        let base = match context {
            Some(node) => self.pointer(node).ok()?,
            None => String::new(),
        };
        let pointer = Self::selector_to_pointer(&base, selector);
        if self.root.pointer(&pointer).is_none() {
            log_adapter_debug!("selector '{}' matched nothing (pointer '{}')", selector, pointer);
            return None;
        }
        Some(self.nodes.borrow_mut().intern(pointer))
    }

    fn text(&self, node: NodeRef) -> AdapterResult<String> {
        match self.value(node)? {
            JsonValue::String(s) => Ok(s.clone()),
            JsonValue::Null => Ok(String::new()),
            JsonValue::Bool(b) => Ok(b.to_string()),
            JsonValue::Number(n) => Ok(n.to_string()),
            other => Err(AdapterError::NotText(other.to_string())),
        }
    }

    fn children(&self, node: NodeRef) -> AdapterResult<Vec<NodeRef>> {
        let base = self.pointer(node)?;
        let pointers: Vec<String> = match self.value(node)? {
            JsonValue::Array(items) => (0..items.len())
                .map(|i| format!("{}/{}", base, i))
                .collect(),
            JsonValue::Object(map) => map
                .keys()
                .map(|k| format!("{}/{}", base, escape_segment(k)))
                .collect(),
            _ => Vec::new(),
        };
        let mut nodes = self.nodes.borrow_mut();
        Ok(pointers.into_iter().map(|p| nodes.intern(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> JsonDocument {
        JsonDocument::new(json!({
            "#a": " Hello ",
            "items": [{"title": "one"}, {"title": "two"}],
            "a/b": 3
        }))
    }

    #[test]
    fn resolves_plain_keys_and_paths() {
        let doc = doc();
        let a = doc.resolve("#a", None).unwrap();
        assert_eq!(doc.text(a).unwrap(), " Hello ");
        let t = doc.resolve("items.1.title", None).unwrap();
        assert_eq!(doc.text(t).unwrap(), "two");
        assert!(doc.resolve("items.5", None).is_none());
    }

    #[test]
    fn resolves_relative_to_context() {
        let doc = doc();
        let first = doc.resolve("items.0", None).unwrap();
        let title = doc.resolve("title", Some(first)).unwrap();
        assert_eq!(doc.text(title).unwrap(), "one");
    }

    #[test]
    fn escapes_pointer_characters_in_keys() {
        let doc = doc();
        let node = doc.resolve("a/b", None).unwrap();
        assert_eq!(doc.text(node).unwrap(), "3");
    }

    #[test]
    fn same_selector_yields_same_handle() {
        let doc = doc();
        assert_eq!(doc.resolve("#a", None), doc.resolve("#a", None));
    }

    #[test]
    fn children_of_array_in_order() {
        let doc = doc();
        let items = doc.resolve("items", None).unwrap();
        let children = doc.children(items).unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(doc.value(children[1]).unwrap(), &json!({"title": "two"}));
    }

    #[test]
    fn containers_have_no_text() {
        let doc = doc();
        let items = doc.resolve("items", None).unwrap();
        assert!(matches!(doc.text(items), Err(AdapterError::NotText(_))));
    }
}
