//! Pipeline descriptions and their preparation for evaluation.

mod json;
pub mod normalizer;
pub mod pipe;
pub mod validator;
pub mod value;

pub use normalizer::normalize;
pub use pipe::Pipe;
pub use validator::validate;
pub use value::Value;
