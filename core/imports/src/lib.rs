#![warn(clippy::pedantic)]
//! Import resolution for `jmodel-ast` trees.
//!
//! An [`ImportBuilder`] is a session bound to one compilation unit. Every type
//! passed through [`ImportBuilder::resolve`] is rewritten to use the shortest
//! unambiguous name, and the imports needed by the rewritten types are
//! collected for [`ImportBuilder::to_import_declarations`].

pub mod errors;
pub mod import_builder;

pub use errors::ImportError;
pub use import_builder::{ImportBuilder, ImportStrategy};
