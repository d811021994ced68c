//! Structural hashing consistent with the [`matcher`](crate::matcher).
//!
//! The hash of a node seeds from its kind and folds in the hash of every
//! child in declaration order. Trees are acyclic because a parent can only be
//! built from children that already exist, so no cycle detection is done.

use crate::nodes::{Node, NodeKind};

/// The visitor that hashes a node.
#[derive(Debug, Default, Clone, Copy)]
pub struct Digest;

impl Digest {
    const PRIME: u64 = 31;

    pub(crate) fn seed(kind: NodeKind) -> u64 {
        // Offset by one so the first kind does not seed with zero.
        kind as u64 + 1
    }

    pub(crate) fn combine(hash: u64, child: u64) -> u64 {
        hash.wrapping_mul(Self::PRIME).wrapping_add(child)
    }
}

/// Structural hash of a tree.
#[must_use]
pub fn compute<T: Node>(node: &T) -> u64 {
    let Ok(hash) = node.accept(&mut Digest, ());
    hash
}
