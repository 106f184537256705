//! Callable transformations with partial application.
//!
//! A [`Transformation`] wraps a plain function together with its declared
//! arity, its behavioral flags and the leading arguments bound so far.
//! Binding never mutates: every [`Transformation::bind`] builds a new value
//! that shares the function and copies the flags.

use crate::error::{TransformError, TransformResult};
use crate::evaluator::EvalContext;
use crate::Value;
use std::fmt;
use std::sync::Arc;

/// Signature of the wrapped function.
///
/// The slice holds the bound arguments followed by the call arguments. For a
/// pipeline step that is `applied_args ++ [value]`, plus the slot index when
/// two parameters remain unbound.
pub type TransformFn =
    Arc<dyn Fn(&EvalContext<'_>, &[Value]) -> TransformResult<Value> + Send + Sync>;

/// How a transformation consumes the value vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Applied to each slot independently
    #[default]
    OneToOne,
    /// Consumes the whole vector, produces one slot
    ManyToOne,
    /// Produces several slots from one
    OneToMany,
    /// Consumes the whole vector, produces a new vector
    ManyToMany,
}

/// Outcome of [`Transformation::call`].
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// Not enough arguments yet
    Partial(Transformation),
    /// The function ran
    Value(Value),
}

/// A named, configurable pipeline step.
#[derive(Clone)]
pub struct Transformation {
    name: String,
    arity: usize,
    kind: Kind,
    accepts_errors: bool,
    applied_args: Vec<Value>,
    body: String,
    stages: Vec<Transformation>,
    func: TransformFn,
}

impl Transformation {
    /// Wraps `f`, which declares `arity` parameters in total (configuration
    /// parameters first, then the value, then optionally the slot index).
    pub fn new<F>(name: impl Into<String>, arity: usize, f: F) -> Self
    where
        F: Fn(&EvalContext<'_>, &[Value]) -> TransformResult<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        Self {
            body: format!("fn {}/{}", name, arity),
            name,
            arity,
            kind: Kind::OneToOne,
            accepts_errors: false,
            applied_args: Vec::new(),
            stages: Vec::new(),
            func: Arc::new(f),
        }
    }

    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn many_to_one(self) -> Self {
        self.with_kind(Kind::ManyToOne)
    }

    pub fn one_to_many(self) -> Self {
        self.with_kind(Kind::OneToMany)
    }

    pub fn many_to_many(self) -> Self {
        self.with_kind(Kind::ManyToMany)
    }

    /// Receive absent inputs instead of being skipped over them.
    pub fn accepting_errors(mut self) -> Self {
        self.accepts_errors = true;
        self
    }

    /// Diagnostic text for the unbound function, shown by the validator.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Records the transformations this one is composed of.
    pub fn with_stages(mut self, stages: Vec<Transformation>) -> Self {
        self.stages = stages;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter count of the unbound function.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Parameters still unbound.
    pub fn remaining_arity(&self) -> usize {
        self.arity.saturating_sub(self.applied_args.len())
    }

    /// True when more arguments were bound than the function declares.
    pub fn is_over_applied(&self) -> bool {
        self.applied_args.len() > self.arity
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn accepts_errors(&self) -> bool {
        self.accepts_errors
    }

    pub fn applied_args(&self) -> &[Value] {
        &self.applied_args
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn stages(&self) -> &[Transformation] {
        &self.stages
    }

    /// Binds leading arguments, returning a new transformation.
    pub fn bind<I>(&self, args: I) -> Transformation
    where
        I: IntoIterator<Item = Value>,
    {
        let mut bound = self.clone();
        bound.applied_args.extend(args);
        bound
    }

    /// Calls with `args`. Runs the function once the declared arity is
    /// reached, otherwise returns the partially applied transformation.
    pub fn call(&self, ctx: &EvalContext<'_>, args: Vec<Value>) -> TransformResult<Applied> {
        if self.applied_args.len() + args.len() < self.arity {
            return Ok(Applied::Partial(self.bind(args)));
        }
        let mut all = self.applied_args.clone();
        all.extend(args);
        (self.func)(ctx, &all).map(Applied::Value)
    }

    /// Runs as a pipeline step on one value at slot `index`.
    pub fn invoke(&self, ctx: &EvalContext<'_>, value: Value, index: usize) -> TransformResult<Value> {
        let mut args = self.applied_args.clone();
        match self.remaining_arity() {
            1 => args.push(value),
            2 => {
                args.push(value);
                args.push(Value::Number(index as f64));
            }
            n => {
                return Err(TransformError::Failed(format!(
                    "{} has {} unbound parameters, expected 1 or 2",
                    self.name, n
                )))
            }
        }
        (self.func)(ctx, &args)
    }

    /// Identity of the wrapped function, shared by all bindings of it.
    pub fn same_function(&self, other: &Transformation) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for Transformation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.arity == other.arity
            && self.kind == other.kind
            && self.accepts_errors == other.accepts_errors
            && self.applied_args == other.applied_args
            && self.stages == other.stages
            && self.same_function(other)
    }
}

impl fmt::Debug for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformation")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("kind", &self.kind)
            .field("accepts_errors", &self.accepts_errors)
            .field("applied_args", &self.applied_args)
            .field("stages", &self.stages)
            .finish()
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.applied_args.is_empty() {
            write!(f, "(")?;
            for (i, arg) in self.applied_args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Fetches a positional argument or fails with a recoverable error.
pub fn arg<'a>(args: &'a [Value], index: usize, name: &str) -> TransformResult<&'a Value> {
    args.get(index)
        .ok_or_else(|| TransformError::Failed(format!("{}: missing argument {}", name, index)))
}
