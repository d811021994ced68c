//! Error types for the AST crate.
//!
//! Construction errors come from the [`ModelFactory`](crate::factory::ModelFactory),
//! traversal errors from partial visitors, and internal errors from the
//! structural algorithms when an invariant of the traversal itself is broken.
//! Rendering errors come from the [`emitter`](crate::emitter).

use thiserror::Error;

use crate::nodes::{InfixOperator, NodeKind};

/// Errors raised while constructing a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum ModelError {
    /// A sequence that must declare at least one element was empty.
    #[error("{kind:?}: `{name}` must not be empty")]
    EmptySequence { kind: NodeKind, name: &'static str },

    /// A dimension or arity argument was negative.
    #[error("{kind:?}: `{name}` must not be negative (got {value})")]
    Negative {
        kind: NodeKind,
        name: &'static str,
        value: i32,
    },

    /// An identifier token is not a valid simple name.
    #[error("`{token}` is not a valid identifier")]
    InvalidIdentifier { token: String },

    /// A literal token was empty.
    #[error("literal token must not be empty")]
    EmptyLiteral,

    /// An array creation has more dimension expressions than its type has dimensions.
    #[error("array creation has {expressions} dimension expressions but the type has only {dimensions} dimensions")]
    TooManyDimensions {
        expressions: usize,
        dimensions: usize,
    },

    /// A textual name or type could not be converted into a model.
    #[error("cannot convert `{text}` into a {target}")]
    Unparsable { text: String, target: &'static str },
}

/// Errors raised while traversing a tree with a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum VisitError {
    /// A strict visitor was applied to a kind it does not handle.
    #[error("visitor does not implement {0:?}")]
    Unimplemented(NodeKind),
}

/// A defect in a structural algorithm, as opposed to invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum InternalError {
    /// A visitor branch for one kind received a node of another concrete type.
    #[error("{algorithm}: branch for {expected:?} reached with a {found:?} context")]
    KindMismatch {
        algorithm: &'static str,
        expected: NodeKind,
        found: NodeKind,
    },
}

/// Errors raised while rendering a tree.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum EmitError {
    /// The emitter produced an inconsistent token stream.
    #[error("internal emitter error: {0}")]
    Internal(String),

    /// An assignment uses an operator without an assignment form, such as `<`.
    #[error("operator `{}` cannot be used in an assignment", .operator.symbol())]
    InvalidAssignment { operator: InfixOperator },

    /// Emit options could not be read.
    #[error("invalid emit options: {0}")]
    Options(#[from] toml::de::Error),
}
