//! # Pipelinr
//!
//! Evaluates declarative extraction pipelines against a document.
//!
//! A pipeline starts with one or more selectors, each filling one slot of a
//! value vector, and continues with transformations that are broadcast over
//! the slots, zipped with them one-to-one, or that collapse the whole vector.
//! A failing step does not stop the pipeline: the slot simply holds no value
//! from then on. Only an explicit `required` step turns a missing value into
//! an error, carrying a trace of every step that ran.
//!
//! ## Components
//!
//! * `adapter` - the document access interface and a JSON-backed adapter
//! * `pipeline` - descriptions, normalization and validation
//! * `transform` - the transformation wrapper, builtins and registry
//! * `evaluator` - step execution, error isolation and the execution trace
//! * `config` / `logging` - TOML configuration and log setup
//!
//! ```
//! use pipelinr::adapter::JsonDocument;
//! use pipelinr::transform::builtins::string::trim;
//! use pipelinr::{Evaluator, Pipe, Value};
//! use serde_json::json;
//!
//! let doc = JsonDocument::new(json!({"title": "  Hello  "}));
//! let mut evaluator = Evaluator::new(doc);
//! let result = evaluator
//!     .evaluate(&Pipe::list(vec![Pipe::selector("title"), trim().into()]))
//!     .unwrap();
//! assert_eq!(result, Value::from("Hello"));
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod pipeline;
pub mod transform;

pub use adapter::{DocumentAdapter, NodeRef};
pub use config::EvaluatorConfig;
pub use error::{AdapterError, PipelineError, PipelineResult, TransformError, TransformResult};
pub use evaluator::{EvalContext, Evaluator, Trace};
pub use pipeline::{Pipe, Value};
pub use transform::{Kind, TransformRegistry, Transformation};
