//! Transformations: the callable units a pipeline is built from.

pub mod builtins;
pub mod curry;
pub mod registry;

pub use curry::{Applied, Kind, TransformFn, Transformation};
pub use registry::TransformRegistry;
