//! Precedence-aware source emitter.
//!
//! The emitter is a [`Visitor`](crate::nodes::Visitor) whose context is the
//! minimum [`Precedence`] demanded by the position of the visited node. An
//! expression binding more loosely than its position demands is wrapped in
//! parentheses; everything else is emitted as is. The resulting tokens are
//! laid out into lines by [`layout`].
//!
//! [`CommentTrait`](crate::traits::CommentTrait) and
//! [`DocumentationTrait`](crate::traits::DocumentationTrait) values attached
//! to a node are emitted right before the node's own text.

mod engine;
mod layout;
mod options;

use tracing::trace;

use crate::errors::EmitError;
use crate::nodes::Node;

pub(crate) use engine::Emitter;
pub use options::EmitOptions;

/// Binding strength of expressions, loosest first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Precedence {
    Lowest,
    Assignment,
    Conditional,
    ConditionalOr,
    ConditionalAnd,
    BitOr,
    BitXor,
    BitAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Unary,
    Postfix,
    Primary,
}

impl Precedence {
    /// The next tighter level. [`Precedence::Primary`] is its own successor.
    #[must_use]
    pub fn tighter(self) -> Precedence {
        match self {
            Precedence::Lowest => Precedence::Assignment,
            Precedence::Assignment => Precedence::Conditional,
            Precedence::Conditional => Precedence::ConditionalOr,
            Precedence::ConditionalOr => Precedence::ConditionalAnd,
            Precedence::ConditionalAnd => Precedence::BitOr,
            Precedence::BitOr => Precedence::BitXor,
            Precedence::BitXor => Precedence::BitAnd,
            Precedence::BitAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Shift,
            Precedence::Shift => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary => Precedence::Postfix,
            Precedence::Postfix | Precedence::Primary => Precedence::Primary,
        }
    }
}

/// Renders `node` with the default options.
///
/// # Errors
///
/// See [`emit`].
pub fn render<T: Node>(node: &T) -> Result<String, EmitError> {
    emit(node, &EmitOptions::default())
}

/// Renders `node` as source text.
///
/// # Errors
///
/// Returns [`EmitError::Internal`] if the emitter produced an unbalanced
/// token stream and [`EmitError::InvalidAssignment`] for an assignment whose
/// operator has no assignment form.
pub fn emit<T: Node>(node: &T, options: &EmitOptions) -> Result<String, EmitError> {
    let mut emitter = Emitter::new(options.blank_line_between_members);
    emitter.child(node, Precedence::Lowest)?;
    let tokens = emitter.into_tokens();
    trace!(kind = ?node.kind(), tokens = tokens.len(), "laying out emitted tokens");
    layout::layout(&tokens, options)
}
