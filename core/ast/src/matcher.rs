//! Structural equality.
//!
//! Two nodes are equal when they have the same kind and pairwise equal
//! children. The comparison runs through the visitor protocol: the left node
//! is visited with the right node as context. This relation is the
//! `PartialEq` of every node and category union.

use tracing::error;

use crate::errors::InternalError;
use crate::nodes::Node;

/// The visitor that compares a node against its context node.
#[derive(Debug, Default, Clone, Copy)]
pub struct Matcher;

impl Matcher {
    /// Views `other` as the concrete type of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError::KindMismatch`] if `other` reports a kind
    /// other than `T`'s.
    pub(crate) fn counterpart<'b, T: Node>(
        node: &T,
        other: &'b dyn Node,
    ) -> Result<&'b T, InternalError> {
        other
            .as_any()
            .downcast_ref::<T>()
            .ok_or(InternalError::KindMismatch {
                algorithm: "matcher",
                expected: node.kind(),
                found: other.kind(),
            })
    }
}

/// Structural equality of two trees.
///
/// # Errors
///
/// Returns an [`InternalError`] if the traversal reaches a branch with a
/// node of the wrong concrete type.
pub fn try_equal<T: Node>(left: &T, right: &T) -> Result<bool, InternalError> {
    if std::ptr::eq(left, right) {
        return Ok(true);
    }
    if left.kind() != right.kind() {
        return Ok(false);
    }
    let right: &dyn Node = right;
    left.accept(&mut Matcher, right)
}

/// Structural equality of two trees.
///
/// A traversal defect is logged and reported as inequality; use
/// [`try_equal`] to observe it.
#[must_use]
pub fn equal<T: Node>(left: &T, right: &T) -> bool {
    match try_equal(left, right) {
        Ok(equal) => equal,
        Err(err) => {
            error!(%err, "structural comparison failed");
            false
        }
    }
}
