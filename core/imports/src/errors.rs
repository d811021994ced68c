use jmodel_ast::errors::{ModelError, VisitError};
use thiserror::Error;

/// Errors raised while resolving imports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum ImportError {
    /// The resolver met a kind that cannot occur inside a type.
    #[error("cannot resolve imports: {0}")]
    Visit(#[from] VisitError),

    /// A rewritten type or a textual type could not be built.
    #[error("cannot resolve imports: {0}")]
    Model(#[from] ModelError),
}
