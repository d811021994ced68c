#![warn(clippy::pedantic)]
//! An in-memory model of Java source code.
//!
//! Trees are built through [`ModelFactory`], compared with [`matcher`],
//! hashed with [`digest`] and turned back into text with [`emitter`].
//! Nodes are immutable and shared through `Arc`, so subtrees can be reused
//! between trees and handed to other threads.

pub mod digest;
pub mod emitter;
pub(crate) mod enums_impl;
pub mod errors;
pub mod factory;
pub mod matcher;
pub mod nodes;
pub(crate) mod nodes_impl;
pub(crate) mod structural;
pub mod traits;

pub use emitter::{EmitOptions, Precedence, emit, render};
pub use errors::{EmitError, InternalError, ModelError, VisitError};
pub use factory::{ModelFactory, is_identifier};
pub use nodes::{Node, NodeKind, StrictVisitor, Visitor};
pub use traits::{CommentTrait, DocumentationTrait, Traits};
