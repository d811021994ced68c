//! Per-node auxiliary metadata ("model traits").
//!
//! Every node owns a [`Traits`] table that maps a trait type to at most one
//! value of that type. Traits are orthogonal to the structural children: they
//! never take part in equality, hashing, or rewriting. The table lives and
//! dies with its node; there is no weak-reference bookkeeping.
//!
//! The emitter understands two traits out of the box:
//!
//! - [`CommentTrait`]: plain comment lines emitted before the node,
//! - [`DocumentationTrait`]: documentation blocks emitted before the node.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::nodes::DocBlock;

type Slot = Arc<dyn Any + Send + Sync>;

/// A side table of trait values keyed by their type.
#[derive(Default)]
pub struct Traits {
    slots: RwLock<FxHashMap<TypeId, Slot>>,
}

impl Traits {
    /// Returns the trait value of type `T`, if one is attached.
    #[must_use]
    pub fn find<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let slot = self.slots.read().get(&TypeId::of::<T>()).cloned()?;
        slot.downcast::<T>().ok()
    }

    /// Attaches `value` as the trait of type `T`, replacing any previous one.
    /// Passing `None` removes the trait.
    pub fn put<T: Any + Send + Sync>(&self, value: Option<T>) {
        let mut slots = self.slots.write();
        match value {
            Some(value) => {
                slots.insert(TypeId::of::<T>(), Arc::new(value));
            }
            None => {
                slots.remove(&TypeId::of::<T>());
            }
        }
    }

    /// Returns `true` if no trait is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl fmt::Debug for Traits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traits")
            .field("len", &self.slots.read().len())
            .finish()
    }
}

/// Comment lines emitted as a block comment immediately before the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTrait {
    pub contents: Vec<String>,
}

impl CommentTrait {
    #[must_use]
    pub fn new<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contents: contents.into_iter().map(Into::into).collect(),
        }
    }
}

/// Documentation produced by an external documentation parser.
///
/// The blocks are passed to the emitter as they are; the model does not
/// interpret them.
#[derive(Debug, Clone)]
pub struct DocumentationTrait {
    pub blocks: Vec<Arc<DocBlock>>,
}

impl DocumentationTrait {
    #[must_use]
    pub fn new(blocks: Vec<Arc<DocBlock>>) -> Self {
        Self { blocks }
    }
}
