//! Child-level building blocks of the matcher and the digest.
//!
//! Every child type of a node (shared nodes, category unions, sequences,
//! optional children and scalars) knows how to compare itself against its
//! counterpart and how to contribute to a hash. Nodes are always reached
//! through `accept`, so kind dispatch stays in the visitor protocol.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

use crate::digest::Digest;
use crate::errors::InternalError;
use crate::matcher::Matcher;
use crate::nodes::{
    BasicTypeKind, ImportKind, InfixOperator, ModifierKind, Node, PostfixOperator, UnaryOperator,
    WildcardBoundKind,
};

pub(crate) trait Structural {
    fn matches(&self, other: &Self, matcher: &mut Matcher) -> Result<bool, InternalError>;

    fn digest(&self, digest: &mut Digest) -> u64;
}

impl<T: Node> Structural for Arc<T> {
    fn matches(&self, other: &Self, matcher: &mut Matcher) -> Result<bool, InternalError> {
        if Arc::ptr_eq(self, other) {
            return Ok(true);
        }
        let other: &dyn Node = &**other;
        (**self).accept(matcher, other)
    }

    fn digest(&self, digest: &mut Digest) -> u64 {
        let Ok(hash) = (**self).accept(digest, ());
        hash
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn matches(&self, other: &Self, matcher: &mut Matcher) -> Result<bool, InternalError> {
        if self.len() != other.len() {
            return Ok(false);
        }
        for (left, right) in self.iter().zip(other) {
            if !left.matches(right, matcher)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn digest(&self, digest: &mut Digest) -> u64 {
        self.iter()
            .fold(1, |hash, element| Digest::combine(hash, element.digest(digest)))
    }
}

impl<T: Structural> Structural for Option<T> {
    fn matches(&self, other: &Self, matcher: &mut Matcher) -> Result<bool, InternalError> {
        match (self, other) {
            (None, None) => Ok(true),
            (Some(left), Some(right)) => left.matches(right, matcher),
            _ => Ok(false),
        }
    }

    fn digest(&self, digest: &mut Digest) -> u64 {
        self.as_ref().map_or(0, |value| value.digest(digest))
    }
}

macro_rules! scalar_structural {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Structural for $ty {
                fn matches(&self, other: &Self, _: &mut Matcher) -> Result<bool, InternalError> {
                    Ok(self == other)
                }

                fn digest(&self, _: &mut Digest) -> u64 {
                    let mut hasher = FxHasher::default();
                    self.hash(&mut hasher);
                    hasher.finish()
                }
            }
        )+
    };
}

scalar_structural!(
    String,
    bool,
    u32,
    InfixOperator,
    UnaryOperator,
    PostfixOperator,
    BasicTypeKind,
    ModifierKind,
    WildcardBoundKind,
    ImportKind,
);
