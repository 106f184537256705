use super::builtins::builtin_transformations;
use super::Transformation;
use std::collections::HashMap;

/// Named transformations available to JSON pipeline descriptions.
pub struct TransformRegistry {
    transformations: HashMap<String, Transformation>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self {
            transformations: builtin_transformations(),
        }
    }
}

impl TransformRegistry {
    /// Creates a registry preloaded with the builtins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with nothing in it.
    pub fn empty() -> Self {
        Self {
            transformations: HashMap::new(),
        }
    }

    /// Registers or replaces a transformation, returning the previous one.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        transformation: Transformation,
    ) -> Option<Transformation> {
        self.transformations.insert(name.into(), transformation)
    }

    pub fn get(&self, name: &str) -> Option<&Transformation> {
        self.transformations.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transformations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
