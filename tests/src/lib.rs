//! Cross-crate tests for the jmodel workspace.

#[cfg(test)]
mod emitter;
#[cfg(test)]
mod factory;
#[cfg(test)]
mod imports;
#[cfg(test)]
mod matcher;
#[cfg(test)]
mod utils;
#[cfg(test)]
mod visitor;
