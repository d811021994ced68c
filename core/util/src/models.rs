//! Conversions from plain values and text into model nodes.

use std::fmt::Write as _;
use std::sync::Arc;

use jmodel_ast::errors::ModelError;
use jmodel_ast::factory::ModelFactory;
use jmodel_ast::nodes::{BasicTypeKind, Literal, Name, SimpleName, Type, WildcardBoundKind};

/// Converts dotted text such as `java.util.List` into a name.
///
/// Whitespace around the dots is ignored.
///
/// # Errors
///
/// Returns [`ModelError::Unparsable`] for empty text and
/// [`ModelError::InvalidIdentifier`] for a malformed segment.
pub fn to_name(factory: ModelFactory, text: &str) -> Result<Name, ModelError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Unparsable {
            text: text.to_string(),
            target: "name",
        });
    }
    let mut segments = trimmed.split('.').map(str::trim);
    let first = segments.next().unwrap_or_default();
    let mut name: Name = factory.new_simple_name(first)?.into();
    for segment in segments {
        let segment = factory.new_simple_name(segment)?;
        name = factory.new_qualified_name(name, segment).into();
    }
    Ok(name)
}

/// The name of a member of `owner`, e.g. an enum constant.
///
/// # Errors
///
/// See [`to_name`].
pub fn to_member_name(
    factory: ModelFactory,
    owner: &str,
    member: &str,
) -> Result<Name, ModelError> {
    let owner = to_name(factory, owner)?;
    let member = factory.new_simple_name(member.trim())?;
    Ok(factory.new_qualified_name(owner, member).into())
}

/// Qualifies `prefix` with each of `segments` in turn.
#[must_use]
pub fn append(
    factory: ModelFactory,
    prefix: Name,
    segments: impl IntoIterator<Item = Arc<SimpleName>>,
) -> Name {
    segments.into_iter().fold(prefix, |name, segment| {
        factory.new_qualified_name(name, segment).into()
    })
}

/// Values that have a literal form in source.
pub trait LiteralValue {
    /// The literal token denoting this value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Unparsable`] if the value cannot be written as
    /// a literal.
    fn literal_token(&self) -> Result<String, ModelError>;
}

fn no_literal(value: impl ToString, target: &'static str) -> ModelError {
    ModelError::Unparsable {
        text: value.to_string(),
        target,
    }
}

impl LiteralValue for i32 {
    fn literal_token(&self) -> Result<String, ModelError> {
        Ok(self.to_string())
    }
}

impl LiteralValue for i64 {
    fn literal_token(&self) -> Result<String, ModelError> {
        Ok(format!("{self}L"))
    }
}

impl LiteralValue for f32 {
    fn literal_token(&self) -> Result<String, ModelError> {
        if !self.is_finite() {
            return Err(no_literal(self, "float literal"));
        }
        Ok(format!("{self:?}f"))
    }
}

impl LiteralValue for f64 {
    fn literal_token(&self) -> Result<String, ModelError> {
        if !self.is_finite() {
            return Err(no_literal(self, "double literal"));
        }
        Ok(format!("{self:?}"))
    }
}

impl LiteralValue for bool {
    fn literal_token(&self) -> Result<String, ModelError> {
        Ok(self.to_string())
    }
}

fn escape(c: char, quote: char, out: &mut String) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => {
            let _ = write!(out, "\\u{:04x}", u32::from(c));
        }
        c => out.push(c),
    }
}

impl LiteralValue for char {
    fn literal_token(&self) -> Result<String, ModelError> {
        // Characters outside the basic plane need two code units.
        if u32::from(*self) > 0xFFFF {
            return Err(no_literal(self, "char literal"));
        }
        let mut token = String::from('\'');
        escape(*self, '\'', &mut token);
        token.push('\'');
        Ok(token)
    }
}

impl LiteralValue for str {
    fn literal_token(&self) -> Result<String, ModelError> {
        let mut token = String::with_capacity(self.len() + 2);
        token.push('"');
        for c in self.chars() {
            escape(c, '"', &mut token);
        }
        token.push('"');
        Ok(token)
    }
}

impl LiteralValue for String {
    fn literal_token(&self) -> Result<String, ModelError> {
        self.as_str().literal_token()
    }
}

/// Creates the literal denoting `value`.
///
/// # Errors
///
/// See [`LiteralValue::literal_token`].
pub fn to_literal<T: LiteralValue + ?Sized>(
    factory: ModelFactory,
    value: &T,
) -> Result<Arc<Literal>, ModelError> {
    factory.new_literal(value.literal_token()?)
}

/// Creates the `null` literal.
///
/// # Errors
///
/// Never fails in practice; the error is the factory's.
pub fn null_literal(factory: ModelFactory) -> Result<Arc<Literal>, ModelError> {
    factory.new_literal("null")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Ident(&'a str),
    Punct(char),
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn pieces(text: &str) -> Option<Vec<Piece<'_>>> {
    let mut out = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if matches!(c, '<' | '>' | ',' | '.' | '[' | ']' | '?') {
            out.push(Piece::Punct(c));
            chars.next();
        } else if is_identifier_char(c) {
            let mut end = start;
            while let Some(&(index, c)) = chars.peek() {
                if !is_identifier_char(c) {
                    break;
                }
                end = index + c.len_utf8();
                chars.next();
            }
            out.push(Piece::Ident(&text[start..end]));
        } else {
            return None;
        }
    }
    Some(out)
}

struct TypeParser<'a> {
    factory: ModelFactory,
    text: &'a str,
    pieces: Vec<Piece<'a>>,
    position: usize,
}

impl<'a> TypeParser<'a> {
    fn unparsable(&self) -> ModelError {
        ModelError::Unparsable {
            text: self.text.to_string(),
            target: "type",
        }
    }

    fn peek(&self) -> Option<Piece<'a>> {
        self.pieces.get(self.position).copied()
    }

    fn eat(&mut self, punct: char) -> bool {
        if self.peek() == Some(Piece::Punct(punct)) {
            self.position += 1;
            return true;
        }
        false
    }

    fn ident(&mut self) -> Result<&'a str, ModelError> {
        match self.peek() {
            Some(Piece::Ident(ident)) => {
                self.position += 1;
                Ok(ident)
            }
            _ => Err(self.unparsable()),
        }
    }

    fn simple_name(&mut self) -> Result<Arc<SimpleName>, ModelError> {
        let token = self.ident()?;
        self.factory.new_simple_name(token)
    }

    fn parse(mut self) -> Result<Type, ModelError> {
        let ty = self.ty()?;
        if self.position != self.pieces.len() {
            return Err(self.unparsable());
        }
        Ok(ty)
    }

    fn ty(&mut self) -> Result<Type, ModelError> {
        let mut ty = self.element()?;
        while self.eat('[') {
            if matches!(ty, Type::Wildcard(_)) || !self.eat(']') {
                return Err(self.unparsable());
            }
            ty = self.factory.new_array_type(ty).into();
        }
        Ok(ty)
    }

    fn element(&mut self) -> Result<Type, ModelError> {
        if self.eat('?') {
            return self.wildcard();
        }
        let first = self.ident()?;
        if let Some(kind) = BasicTypeKind::from_keyword(first) {
            return Ok(self.factory.new_basic_type(kind).into());
        }
        let mut name: Name = self.factory.new_simple_name(first)?.into();
        while self.peek() == Some(Piece::Punct('.')) {
            self.position += 1;
            let segment = self.simple_name()?;
            name = self.factory.new_qualified_name(name, segment).into();
        }
        let mut ty: Type = self.factory.new_named_type(name).into();
        loop {
            if self.peek() == Some(Piece::Punct('<')) {
                ty = self.arguments(ty)?;
            } else if matches!(ty, Type::Named(_)) || !self.eat('.') {
                break;
            } else {
                let member = self.simple_name()?;
                ty = self.factory.new_qualified_type(ty, member).into();
            }
        }
        Ok(ty)
    }

    fn arguments(&mut self, base: Type) -> Result<Type, ModelError> {
        self.eat('<');
        let mut arguments = vec![self.ty()?];
        while self.eat(',') {
            arguments.push(self.ty()?);
        }
        if !self.eat('>') {
            return Err(self.unparsable());
        }
        Ok(self.factory.new_parameterized_type(base, arguments)?.into())
    }

    fn wildcard(&mut self) -> Result<Type, ModelError> {
        let kind = match self.peek() {
            Some(Piece::Ident("extends")) => WildcardBoundKind::UpperBounded,
            Some(Piece::Ident("super")) => WildcardBoundKind::LowerBounded,
            _ => return Ok(self.factory.new_wildcard(WildcardBoundKind::Unbound, None).into()),
        };
        self.position += 1;
        let bound = self.ty()?;
        Ok(self.factory.new_wildcard(kind, Some(bound)).into())
    }
}

/// Converts source text of a type, such as `java.util.Map<String, int[]>`,
/// into a type model.
///
/// Supports primitive types, dotted names, type arguments, wildcards,
/// member types of parameterized types (`Outer<T>.Inner`) and array
/// dimensions.
///
/// # Errors
///
/// Returns [`ModelError::Unparsable`] if `text` is not a type.
pub fn to_type(factory: ModelFactory, text: &str) -> Result<Type, ModelError> {
    let Some(pieces) = pieces(text) else {
        return Err(ModelError::Unparsable {
            text: text.to_string(),
            target: "type",
        });
    };
    TypeParser {
        factory,
        text,
        pieces,
        position: 0,
    }
    .parse()
}
