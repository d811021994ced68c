#![warn(clippy::pedantic)]
//! Helpers layered on top of `jmodel-ast`: a fluent [`ExpressionBuilder`],
//! conversions from values and text into nodes ([`models`]) and a [`Filer`]
//! that writes compilation units to disk.

pub mod expression_builder;
pub mod filer;
pub mod models;

pub use expression_builder::ExpressionBuilder;
pub use filer::{Filer, find_primary_type};
pub use models::{LiteralValue, to_literal, to_name, to_type};
