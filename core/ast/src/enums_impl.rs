//! Implementation methods for the scalar enums of the model.
//!
//! Operator symbols, keyword spellings and binding strengths used by the
//! emitter and the textual helpers.

use crate::emitter::Precedence;
use crate::nodes::{
    BasicTypeKind, ImportKind, InfixOperator, ModifierKind, PostfixOperator, UnaryOperator,
    WildcardBoundKind,
};

impl InfixOperator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            InfixOperator::Times => "*",
            InfixOperator::Divide => "/",
            InfixOperator::Remainder => "%",
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::LeftShift => "<<",
            InfixOperator::RightShiftSigned => ">>",
            InfixOperator::RightShiftUnsigned => ">>>",
            InfixOperator::Less => "<",
            InfixOperator::Greater => ">",
            InfixOperator::LessEquals => "<=",
            InfixOperator::GreaterEquals => ">=",
            InfixOperator::Equals => "==",
            InfixOperator::NotEquals => "!=",
            InfixOperator::And => "&",
            InfixOperator::Xor => "^",
            InfixOperator::Or => "|",
            InfixOperator::ConditionalAnd => "&&",
            InfixOperator::ConditionalOr => "||",
            InfixOperator::Assign => "=",
        }
    }

    /// The operator spelled as an assignment: `=` for [`InfixOperator::Assign`],
    /// otherwise the compound form such as `+=`.
    ///
    /// Returns `None` for operators that have no compound assignment form.
    #[must_use]
    pub fn assignment_symbol(self) -> Option<&'static str> {
        let symbol = match self {
            InfixOperator::Assign => "=",
            InfixOperator::Times => "*=",
            InfixOperator::Divide => "/=",
            InfixOperator::Remainder => "%=",
            InfixOperator::Plus => "+=",
            InfixOperator::Minus => "-=",
            InfixOperator::LeftShift => "<<=",
            InfixOperator::RightShiftSigned => ">>=",
            InfixOperator::RightShiftUnsigned => ">>>=",
            InfixOperator::And => "&=",
            InfixOperator::Xor => "^=",
            InfixOperator::Or => "|=",
            InfixOperator::Less
            | InfixOperator::Greater
            | InfixOperator::LessEquals
            | InfixOperator::GreaterEquals
            | InfixOperator::Equals
            | InfixOperator::NotEquals
            | InfixOperator::ConditionalAnd
            | InfixOperator::ConditionalOr => return None,
        };
        Some(symbol)
    }

    #[must_use]
    pub fn precedence(self) -> Precedence {
        match self {
            InfixOperator::Times | InfixOperator::Divide | InfixOperator::Remainder => {
                Precedence::Multiplicative
            }
            InfixOperator::Plus | InfixOperator::Minus => Precedence::Additive,
            InfixOperator::LeftShift
            | InfixOperator::RightShiftSigned
            | InfixOperator::RightShiftUnsigned => Precedence::Shift,
            InfixOperator::Less
            | InfixOperator::Greater
            | InfixOperator::LessEquals
            | InfixOperator::GreaterEquals => Precedence::Relational,
            InfixOperator::Equals | InfixOperator::NotEquals => Precedence::Equality,
            InfixOperator::And => Precedence::BitAnd,
            InfixOperator::Xor => Precedence::BitXor,
            InfixOperator::Or => Precedence::BitOr,
            InfixOperator::ConditionalAnd => Precedence::ConditionalAnd,
            InfixOperator::ConditionalOr => Precedence::ConditionalOr,
            InfixOperator::Assign => Precedence::Assignment,
        }
    }
}

impl UnaryOperator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Complement => "~",
            UnaryOperator::Not => "!",
            UnaryOperator::Increment => "++",
            UnaryOperator::Decrement => "--",
        }
    }
}

impl PostfixOperator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            PostfixOperator::Increment => "++",
            PostfixOperator::Decrement => "--",
        }
    }
}

impl BasicTypeKind {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            BasicTypeKind::Boolean => "boolean",
            BasicTypeKind::Byte => "byte",
            BasicTypeKind::Short => "short",
            BasicTypeKind::Int => "int",
            BasicTypeKind::Long => "long",
            BasicTypeKind::Char => "char",
            BasicTypeKind::Float => "float",
            BasicTypeKind::Double => "double",
            BasicTypeKind::Void => "void",
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "boolean" => BasicTypeKind::Boolean,
            "byte" => BasicTypeKind::Byte,
            "short" => BasicTypeKind::Short,
            "int" => BasicTypeKind::Int,
            "long" => BasicTypeKind::Long,
            "char" => BasicTypeKind::Char,
            "float" => BasicTypeKind::Float,
            "double" => BasicTypeKind::Double,
            "void" => BasicTypeKind::Void,
            _ => return None,
        };
        Some(kind)
    }
}

impl ModifierKind {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            ModifierKind::Public => "public",
            ModifierKind::Protected => "protected",
            ModifierKind::Private => "private",
            ModifierKind::Static => "static",
            ModifierKind::Abstract => "abstract",
            ModifierKind::Final => "final",
            ModifierKind::Native => "native",
            ModifierKind::Synchronized => "synchronized",
            ModifierKind::Transient => "transient",
            ModifierKind::Volatile => "volatile",
            ModifierKind::Strictfp => "strictfp",
        }
    }
}

impl WildcardBoundKind {
    /// The keyword between `?` and the bound, if any.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            WildcardBoundKind::Unbound => None,
            WildcardBoundKind::UpperBounded => Some("extends"),
            WildcardBoundKind::LowerBounded => Some("super"),
        }
    }
}

impl ImportKind {
    #[must_use]
    pub fn is_static(self) -> bool {
        matches!(self, ImportKind::SingleStatic | ImportKind::StaticOnDemand)
    }

    #[must_use]
    pub fn is_on_demand(self) -> bool {
        matches!(self, ImportKind::TypeOnDemand | ImportKind::StaticOnDemand)
    }
}
