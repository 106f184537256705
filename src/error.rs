//! Error types for pipeline evaluation.
//!
//! Two channels exist. `TransformError` is what a single transformation call
//! returns; everything except `Required` is recoverable and is turned into
//! `Value::Absent` at the slot that produced it. `PipelineError` is what
//! `Evaluator::evaluate` returns and is always fatal for the evaluation.

use crate::adapter::NodeRef;
use thiserror::Error;

/// Result type for a single transformation call.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for whole-pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for document adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors raised from inside a transformation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// A value was demanded but the slot was absent. Aborts the evaluation.
    #[error("RequiredError: {message}")]
    Required { message: String },

    /// Generic recoverable failure.
    #[error("transformation failed: {0}")]
    Failed(String),

    /// The input did not have the shape the transformation expects.
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// The document adapter could not serve a request.
    #[error("adapter error: {0}")]
    Adapter(#[from] AdapterError),
}

impl TransformError {
    /// Builds a type mismatch against the rendered input value.
    pub fn type_mismatch(expected: impl Into<String>, found: &crate::Value) -> Self {
        TransformError::TypeMismatch {
            expected: expected.into(),
            found: found.type_name().to_string(),
        }
    }

    /// Returns true for the fault kind that must abort evaluation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TransformError::Required { .. })
    }
}

/// Fatal errors produced by evaluating a pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    /// The description could not be turned into a pipeline at all.
    #[error("invalid pipeline description: {0}")]
    InvalidDescription(String),

    /// Structural validation failed before any step ran.
    #[error("PipelineValidationError in step {step}:\n{message}")]
    Validation { step: usize, message: String },

    /// A `required` style transformation found no value.
    #[error("RequiredError: {message}")]
    Required { message: String },

    /// A zipped step did not match the current vector width.
    #[error(
        "Mismatching number of arguments ({width}) and transformations ({transformations})"
    )]
    ShapeMismatch { width: usize, transformations: usize },

    /// The pipeline finished with more or fewer than one value.
    #[error("Transformation must always result in 1 value (got {width})")]
    Divergent { width: usize },

    /// Any other fatal error escaping a transformation.
    #[error("transformation aborted evaluation: {0}")]
    Transform(TransformError),
}

impl From<TransformError> for PipelineError {
    fn from(error: TransformError) -> Self {
        match error {
            TransformError::Required { message } => PipelineError::Required { message },
            other => PipelineError::Transform(other),
        }
    }
}

/// Errors reported by a document adapter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdapterError {
    /// The handle was not issued by this adapter.
    #[error("unknown node handle {0:?}")]
    UnknownNode(NodeRef),

    /// The node cannot be rendered as text.
    #[error("node has no text representation: {0}")]
    NotText(String),
}
