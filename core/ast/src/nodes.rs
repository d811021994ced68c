//! The closed alphabet of syntax-tree nodes.
//!
//! Every node kind is a struct with private, immutable children and a
//! [`Traits`] side table. Kinds are grouped into category unions
//! ([`Expression`], [`Type`], [`Statement`], ...) whose variants hold the
//! shared node. All of it, together with [`NodeKind`] and the visitor traits,
//! is generated from the single kind table at the bottom of this file.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::digest::Digest;
use crate::errors::{InternalError, VisitError};
use crate::matcher::Matcher;
use crate::structural::Structural;
use crate::traits::Traits;

/// Behaviour shared by every node and every category union.
pub trait Node: Any + fmt::Debug + Send + Sync {
    /// The discriminant of this node's variant.
    fn kind(&self) -> NodeKind;

    /// The auxiliary metadata attached to this node.
    fn traits(&self) -> &Traits;

    /// The concrete node as `Any`.
    ///
    /// Category unions answer with the wrapped node, so a downcast always
    /// targets the struct named by [`Node::kind`].
    fn as_any(&self) -> &dyn Any;

    /// Invokes the visitor method of this node's own kind.
    ///
    /// # Errors
    ///
    /// Returns whatever the visitor method returns.
    fn accept<C, V>(&self, visitor: &mut V, context: C) -> Result<V::Output, V::Error>
    where
        V: Visitor<C> + ?Sized,
        Self: Sized;
}

macro_rules! node_accessor {
    ($(#[$meta:meta])* $field:ident, $ty:ty, copy) => {
        $(#[$meta])*
        #[must_use]
        pub fn $field(&self) -> $ty {
            self.$field
        }
    };
    ($(#[$meta:meta])* $field:ident, $ty:ty, ) => {
        $(#[$meta])*
        #[must_use]
        pub fn $field(&self) -> &$ty {
            &self.$field
        }
    };
}

/// Equality, hashing and display shared by nodes and category unions.
macro_rules! node_protocols {
    ($name:ident) => {
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::matcher::equal(self, other)
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::digest::compute(self));
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let text = $crate::emitter::render(self).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    };
}

macro_rules! ast_nodes {
    (
        $(
            $(#[$outer:meta])*
            $name:ident => $visit:ident {
                $(
                    $(#[$field_meta:meta])*
                    $field:ident : $(@$copy:ident)? $field_ty:ty
                ),* $(,)?
            }
        )+
    ) => {
        /// One tag per node variant.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub enum NodeKind {
            $( $name, )+
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$name, )+ ];
        }

        $(
            $(#[$outer])*
            #[derive(Debug)]
            pub struct $name {
                $( $field: $field_ty, )*
                traits: Traits,
            }

            impl $name {
                #[allow(clippy::too_many_arguments)]
                pub(crate) fn from_parts($( $field: $field_ty ),*) -> Self {
                    Self {
                        $( $field, )*
                        traits: Traits::default(),
                    }
                }

                $(
                    node_accessor!($(#[$field_meta])* $field, $field_ty, $($copy)?);
                )*

                #[allow(unused_variables)]
                pub(crate) fn match_children(
                    &self,
                    other: &Self,
                    matcher: &mut Matcher,
                ) -> Result<bool, InternalError> {
                    $(
                        if !Structural::matches(&self.$field, &other.$field, matcher)? {
                            return Ok(false);
                        }
                    )*
                    Ok(true)
                }

                #[allow(unused_mut, unused_variables)]
                pub(crate) fn digest_children(&self, digest: &mut Digest) -> u64 {
                    let mut hash = Digest::seed(NodeKind::$name);
                    $(
                        hash = Digest::combine(hash, Structural::digest(&self.$field, digest));
                    )*
                    hash
                }
            }

            impl Node for $name {
                fn kind(&self) -> NodeKind {
                    NodeKind::$name
                }

                fn traits(&self) -> &Traits {
                    &self.traits
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn accept<C, V>(&self, visitor: &mut V, context: C) -> Result<V::Output, V::Error>
                where
                    V: Visitor<C> + ?Sized,
                {
                    visitor.$visit(self, context)
                }
            }

            node_protocols!($name);
        )+

        /// A tree algorithm: one method per node kind.
        ///
        /// `C` is the context threaded through the traversal by the caller.
        pub trait Visitor<C> {
            type Output;
            type Error;

            $(
                fn $visit(&mut self, node: &$name, context: C) -> Result<Self::Output, Self::Error>;
            )+
        }

        /// A partial visitor.
        ///
        /// Every method defaults to failing with [`VisitError::Unimplemented`];
        /// implementors override the kinds they handle. Every strict visitor is
        /// a [`Visitor`].
        pub trait StrictVisitor<C> {
            type Output;
            type Error: From<VisitError>;

            $(
                fn $visit(&mut self, node: &$name, context: C) -> Result<Self::Output, Self::Error> {
                    let _ = (node, context);
                    Err(VisitError::Unimplemented(NodeKind::$name).into())
                }
            )+
        }

        impl<C, T: StrictVisitor<C> + ?Sized> Visitor<C> for T {
            type Output = <T as StrictVisitor<C>>::Output;
            type Error = <T as StrictVisitor<C>>::Error;

            $(
                fn $visit(&mut self, node: &$name, context: C) -> Result<Self::Output, Self::Error> {
                    <T as StrictVisitor<C>>::$visit(self, node, context)
                }
            )+
        }

        // Matching and hashing are uniform over kinds.
        impl<'a> Visitor<&'a dyn Node> for Matcher {
            type Output = bool;
            type Error = InternalError;

            $(
                fn $visit(&mut self, node: &$name, other: &'a dyn Node) -> Result<bool, InternalError> {
                    let other = Matcher::counterpart(node, other)?;
                    node.match_children(other, self)
                }
            )+
        }

        impl Visitor<()> for Digest {
            type Output = u64;
            type Error = std::convert::Infallible;

            $(
                fn $visit(&mut self, node: &$name, (): ()) -> Result<u64, Self::Error> {
                    Ok(node.digest_children(self))
                }
            )+
        }
    };
}

macro_rules! ast_enums {
    (
        $(
            $(#[$outer:meta])*
            pub enum $name:ident {
                $( $arm:ident($arm_ty:ty) ),+ $(,)?
            }
        )+
    ) => {
        $(
            $(#[$outer])*
            #[derive(Clone, Debug)]
            pub enum $name {
                $( $arm($arm_ty), )+
            }

            $(
                impl From<$arm_ty> for $name {
                    fn from(value: $arm_ty) -> Self {
                        $name::$arm(value)
                    }
                }
            )+

            impl Node for $name {
                fn kind(&self) -> NodeKind {
                    match self {
                        $( $name::$arm(inner) => inner.kind(), )+
                    }
                }

                fn traits(&self) -> &Traits {
                    match self {
                        $( $name::$arm(inner) => inner.traits(), )+
                    }
                }

                fn as_any(&self) -> &dyn Any {
                    match self {
                        $( $name::$arm(inner) => inner.as_any(), )+
                    }
                }

                fn accept<C, V>(&self, visitor: &mut V, context: C) -> Result<V::Output, V::Error>
                where
                    V: Visitor<C> + ?Sized,
                {
                    match self {
                        $( $name::$arm(inner) => inner.accept(visitor, context), )+
                    }
                }
            }

            impl Structural for $name {
                fn matches(&self, other: &Self, matcher: &mut Matcher) -> Result<bool, InternalError> {
                    match (self, other) {
                        $( ($name::$arm(left), $name::$arm(right)) => left.matches(right, matcher), )+
                        #[allow(unreachable_patterns)]
                        _ => Ok(false),
                    }
                }

                fn digest(&self, digest: &mut Digest) -> u64 {
                    match self {
                        $( $name::$arm(inner) => inner.digest(digest), )+
                    }
                }
            }

            node_protocols!($name);
        )+
    };
}

/// Binary operators, including plain assignment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InfixOperator {
    Times,
    Divide,
    Remainder,
    Plus,
    Minus,
    LeftShift,
    RightShiftSigned,
    RightShiftUnsigned,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,
    NotEquals,
    And,
    Xor,
    Or,
    ConditionalAnd,
    ConditionalOr,
    Assign,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Complement,
    Not,
    Increment,
    Decrement,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PostfixOperator {
    Increment,
    Decrement,
}

/// Primitive types plus `void`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BasicTypeKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ModifierKind {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WildcardBoundKind {
    /// `?`
    Unbound,
    /// `? extends T`
    UpperBounded,
    /// `? super T`
    LowerBounded,
}

/// Import flavours, in the order imports are listed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ImportKind {
    SingleType,
    TypeOnDemand,
    SingleStatic,
    StaticOnDemand,
}

ast_enums! {
    pub enum Name {
        Simple(Arc<SimpleName>),
        Qualified(Arc<QualifiedName>),
    }

    pub enum Type {
        Array(Arc<ArrayType>),
        Basic(Arc<BasicType>),
        Named(Arc<NamedType>),
        Parameterized(Arc<ParameterizedType>),
        Qualified(Arc<QualifiedType>),
        Wildcard(Arc<Wildcard>),
    }

    pub enum Expression {
        ArrayAccess(Arc<ArrayAccessExpression>),
        ArrayCreation(Arc<ArrayCreationExpression>),
        ArrayInitializer(Arc<ArrayInitializer>),
        Assignment(Arc<AssignmentExpression>),
        Cast(Arc<CastExpression>),
        ClassInstanceCreation(Arc<ClassInstanceCreationExpression>),
        ClassLiteral(Arc<ClassLiteral>),
        Conditional(Arc<ConditionalExpression>),
        FieldAccess(Arc<FieldAccessExpression>),
        Infix(Arc<InfixExpression>),
        Instanceof(Arc<InstanceofExpression>),
        Literal(Arc<Literal>),
        MethodInvocation(Arc<MethodInvocationExpression>),
        Parenthesized(Arc<ParenthesizedExpression>),
        Postfix(Arc<PostfixExpression>),
        Super(Arc<Super>),
        This(Arc<This>),
        Unary(Arc<UnaryExpression>),
        Name(Name),
    }

    pub enum Statement {
        AlternateConstructorInvocation(Arc<AlternateConstructorInvocation>),
        Assert(Arc<AssertStatement>),
        Block(Arc<Block>),
        Break(Arc<BreakStatement>),
        Continue(Arc<ContinueStatement>),
        Do(Arc<DoStatement>),
        Empty(Arc<EmptyStatement>),
        EnhancedFor(Arc<EnhancedForStatement>),
        Expression(Arc<ExpressionStatement>),
        For(Arc<ForStatement>),
        If(Arc<IfStatement>),
        Labeled(Arc<LabeledStatement>),
        LocalClass(Arc<LocalClassDeclaration>),
        LocalVariable(Arc<LocalVariableDeclaration>),
        Return(Arc<ReturnStatement>),
        SuperConstructorInvocation(Arc<SuperConstructorInvocation>),
        SwitchCase(Arc<SwitchCaseLabel>),
        SwitchDefault(Arc<SwitchDefaultLabel>),
        Switch(Arc<SwitchStatement>),
        Synchronized(Arc<SynchronizedStatement>),
        Throw(Arc<ThrowStatement>),
        Try(Arc<TryStatement>),
        While(Arc<WhileStatement>),
    }

    pub enum TypeDeclaration {
        Class(Arc<ClassDeclaration>),
        Interface(Arc<InterfaceDeclaration>),
        Enum(Arc<EnumDeclaration>),
        Annotation(Arc<AnnotationDeclaration>),
    }

    pub enum TypeBodyDeclaration {
        Type(TypeDeclaration),
        Field(Arc<FieldDeclaration>),
        Method(Arc<MethodDeclaration>),
        Constructor(Arc<ConstructorDeclaration>),
        Initializer(Arc<InitializerDeclaration>),
        AnnotationElement(Arc<AnnotationElementDeclaration>),
    }

    /// A modifier keyword or an annotation.
    pub enum Attribute {
        Modifier(Arc<Modifier>),
        Annotation(Annotation),
    }

    pub enum Annotation {
        Marker(Arc<MarkerAnnotation>),
        Normal(Arc<NormalAnnotation>),
        SingleElement(Arc<SingleElementAnnotation>),
    }

    pub enum Comment {
        Block(Arc<BlockComment>),
        Line(Arc<LineComment>),
        Javadoc(Arc<Javadoc>),
    }

    /// A fragment of a documentation block.
    pub enum DocElement {
        Block(Arc<DocBlock>),
        Field(Arc<DocField>),
        Method(Arc<DocMethod>),
        Text(Arc<DocText>),
        Name(Name),
        Type(Type),
    }

    pub enum ForInitializer {
        LocalVariable(Arc<LocalVariableDeclaration>),
        Expressions(Arc<StatementExpressionList>),
    }
}

ast_nodes! {
    /// `this(...)` as the first statement of a constructor.
    AlternateConstructorInvocation => visit_alternate_constructor_invocation {
        type_arguments: Vec<Type>,
        arguments: Vec<Expression>,
    }

    AnnotationDeclaration => visit_annotation_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        body_declarations: Vec<TypeBodyDeclaration>,
    }

    /// `name = value` inside a normal annotation.
    AnnotationElement => visit_annotation_element {
        name: Arc<SimpleName>,
        expression: Expression,
    }

    /// An element of an annotation type: `int value() default 0;`.
    AnnotationElementDeclaration => visit_annotation_element_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        ty: Type,
        name: Arc<SimpleName>,
        default_expression: Option<Expression>,
    }

    ArrayAccessExpression => visit_array_access_expression {
        array: Expression,
        index: Expression,
    }

    ArrayCreationExpression => visit_array_creation_expression {
        ty: Arc<ArrayType>,
        dimension_expressions: Vec<Expression>,
        array_initializer: Option<Arc<ArrayInitializer>>,
    }

    ArrayInitializer => visit_array_initializer {
        elements: Vec<Expression>,
    }

    ArrayType => visit_array_type {
        component_type: Type,
    }

    AssertStatement => visit_assert_statement {
        expression: Expression,
        message: Option<Expression>,
    }

    /// `lhs = rhs` or a compound assignment such as `lhs += rhs`.
    AssignmentExpression => visit_assignment_expression {
        left_hand_side: Expression,
        operator: @copy InfixOperator,
        right_hand_side: Expression,
    }

    BasicType => visit_basic_type {
        type_kind: @copy BasicTypeKind,
    }

    Block => visit_block {
        statements: Vec<Statement>,
    }

    /// `/*string*/`
    BlockComment => visit_block_comment {
        string: String,
    }

    BreakStatement => visit_break_statement {
        target_label: Option<Arc<SimpleName>>,
    }

    CastExpression => visit_cast_expression {
        ty: Type,
        expression: Expression,
    }

    CatchClause => visit_catch_clause {
        parameter: Arc<FormalParameterDeclaration>,
        body: Arc<Block>,
    }

    /// The body of an anonymous class or of an enum constant.
    ClassBody => visit_class_body {
        body_declarations: Vec<TypeBodyDeclaration>,
    }

    ClassDeclaration => visit_class_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        type_parameters: Vec<Arc<TypeParameterDeclaration>>,
        super_class: Option<Type>,
        super_interface_types: Vec<Type>,
        body_declarations: Vec<TypeBodyDeclaration>,
    }

    /// `qualifier.new <T> Type(args) { body }`
    ClassInstanceCreationExpression => visit_class_instance_creation_expression {
        qualifier: Option<Expression>,
        type_arguments: Vec<Type>,
        ty: Type,
        arguments: Vec<Expression>,
        body: Option<Arc<ClassBody>>,
    }

    /// `Type.class`
    ClassLiteral => visit_class_literal {
        ty: Type,
    }

    CompilationUnit => visit_compilation_unit {
        package_declaration: Option<Arc<PackageDeclaration>>,
        import_declarations: Vec<Arc<ImportDeclaration>>,
        type_declarations: Vec<TypeDeclaration>,
        comments: Vec<Comment>,
    }

    ConditionalExpression => visit_conditional_expression {
        condition: Expression,
        then_expression: Expression,
        else_expression: Expression,
    }

    ConstructorDeclaration => visit_constructor_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        type_parameters: Vec<Arc<TypeParameterDeclaration>>,
        name: Arc<SimpleName>,
        formal_parameters: Vec<Arc<FormalParameterDeclaration>>,
        exception_types: Vec<Type>,
        body: Arc<Block>,
    }

    ContinueStatement => visit_continue_statement {
        target_label: Option<Arc<SimpleName>>,
    }

    DoStatement => visit_do_statement {
        body: Statement,
        condition: Expression,
    }

    /// A documentation block. The synopsis has an empty tag; other tags
    /// carry their leading `@`.
    DocBlock => visit_doc_block {
        tag: String,
        elements: Vec<DocElement>,
    }

    /// A field reference inside documentation: `Type#name`.
    DocField => visit_doc_field {
        ty: Option<Type>,
        name: Arc<SimpleName>,
    }

    /// A method reference inside documentation: `Type#name(params)`.
    DocMethod => visit_doc_method {
        ty: Option<Type>,
        name: Arc<SimpleName>,
        formal_parameters: Vec<Arc<DocMethodParameter>>,
    }

    DocMethodParameter => visit_doc_method_parameter {
        ty: Type,
        name: Option<Arc<SimpleName>>,
        variable_arity: @copy bool,
    }

    /// Verbatim documentation text.
    DocText => visit_doc_text {
        string: String,
    }

    EmptyStatement => visit_empty_statement {}

    /// `for (parameter : expression) body`
    EnhancedForStatement => visit_enhanced_for_statement {
        parameter: Arc<FormalParameterDeclaration>,
        expression: Expression,
        body: Statement,
    }

    EnumConstantDeclaration => visit_enum_constant_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        arguments: Vec<Expression>,
        body: Option<Arc<ClassBody>>,
    }

    EnumDeclaration => visit_enum_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        super_interface_types: Vec<Type>,
        constant_declarations: Vec<Arc<EnumConstantDeclaration>>,
        body_declarations: Vec<TypeBodyDeclaration>,
    }

    ExpressionStatement => visit_expression_statement {
        expression: Expression,
    }

    FieldAccessExpression => visit_field_access_expression {
        qualifier: Expression,
        name: Arc<SimpleName>,
    }

    FieldDeclaration => visit_field_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        ty: Type,
        /// Never empty.
        variable_declarators: Vec<Arc<VariableDeclarator>>,
    }

    ForStatement => visit_for_statement {
        initialization: Option<ForInitializer>,
        condition: Option<Expression>,
        update: Option<Arc<StatementExpressionList>>,
        body: Statement,
    }

    FormalParameterDeclaration => visit_formal_parameter_declaration {
        modifiers: Vec<Attribute>,
        ty: Type,
        variable_arity: @copy bool,
        name: Arc<SimpleName>,
        /// Trailing `[]` pairs after the name.
        extra_dimensions: @copy u32,
    }

    IfStatement => visit_if_statement {
        condition: Expression,
        then_statement: Statement,
        else_statement: Option<Statement>,
    }

    ImportDeclaration => visit_import_declaration {
        import_kind: @copy ImportKind,
        name: Name,
    }

    InfixExpression => visit_infix_expression {
        left_operand: Expression,
        operator: @copy InfixOperator,
        right_operand: Expression,
    }

    /// A static or instance initializer block.
    InitializerDeclaration => visit_initializer_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        body: Arc<Block>,
    }

    InstanceofExpression => visit_instanceof_expression {
        expression: Expression,
        ty: Type,
    }

    InterfaceDeclaration => visit_interface_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        type_parameters: Vec<Arc<TypeParameterDeclaration>>,
        super_interface_types: Vec<Type>,
        body_declarations: Vec<TypeBodyDeclaration>,
    }

    Javadoc => visit_javadoc {
        blocks: Vec<Arc<DocBlock>>,
    }

    LabeledStatement => visit_labeled_statement {
        label: Arc<SimpleName>,
        body: Statement,
    }

    /// `//string`
    LineComment => visit_line_comment {
        string: String,
    }

    /// A literal token as it appears in source, e.g. `1L`, `"a\n"` or `null`.
    Literal => visit_literal {
        token: String,
    }

    LocalClassDeclaration => visit_local_class_declaration {
        declaration: Arc<ClassDeclaration>,
    }

    LocalVariableDeclaration => visit_local_variable_declaration {
        modifiers: Vec<Attribute>,
        ty: Type,
        /// Never empty.
        variable_declarators: Vec<Arc<VariableDeclarator>>,
    }

    MarkerAnnotation => visit_marker_annotation {
        ty: Arc<NamedType>,
    }

    MethodDeclaration => visit_method_declaration {
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        type_parameters: Vec<Arc<TypeParameterDeclaration>>,
        return_type: Type,
        name: Arc<SimpleName>,
        formal_parameters: Vec<Arc<FormalParameterDeclaration>>,
        extra_dimensions: @copy u32,
        exception_types: Vec<Type>,
        /// `None` for abstract and native methods.
        body: Option<Arc<Block>>,
    }

    MethodInvocationExpression => visit_method_invocation_expression {
        qualifier: Option<Expression>,
        type_arguments: Vec<Type>,
        name: Arc<SimpleName>,
        arguments: Vec<Expression>,
    }

    Modifier => visit_modifier {
        modifier_kind: @copy ModifierKind,
    }

    NamedType => visit_named_type {
        name: Name,
    }

    NormalAnnotation => visit_normal_annotation {
        ty: Arc<NamedType>,
        elements: Vec<Arc<AnnotationElement>>,
    }

    PackageDeclaration => visit_package_declaration {
        javadoc: Option<Arc<Javadoc>>,
        annotations: Vec<Annotation>,
        name: Name,
    }

    ParameterizedType => visit_parameterized_type {
        ty: Type,
        /// Never empty.
        type_arguments: Vec<Type>,
    }

    ParenthesizedExpression => visit_parenthesized_expression {
        expression: Expression,
    }

    PostfixExpression => visit_postfix_expression {
        operand: Expression,
        operator: @copy PostfixOperator,
    }

    QualifiedName => visit_qualified_name {
        qualifier: Name,
        name: Arc<SimpleName>,
    }

    /// A member type of a parameterized type: `Outer<T>.Inner`.
    QualifiedType => visit_qualified_type {
        qualifier: Type,
        name: Arc<SimpleName>,
    }

    ReturnStatement => visit_return_statement {
        expression: Option<Expression>,
    }

    SimpleName => visit_simple_name {
        token: String,
    }

    SingleElementAnnotation => visit_single_element_annotation {
        ty: Arc<NamedType>,
        expression: Expression,
    }

    /// Comma separated statement expressions of a `for` header.
    StatementExpressionList => visit_statement_expression_list {
        /// Never empty.
        expressions: Vec<Expression>,
    }

    /// `super` or `Outer.super`.
    Super => visit_super {
        qualifier: Option<Arc<NamedType>>,
    }

    SuperConstructorInvocation => visit_super_constructor_invocation {
        qualifier: Option<Expression>,
        type_arguments: Vec<Type>,
        arguments: Vec<Expression>,
    }

    SwitchCaseLabel => visit_switch_case_label {
        expression: Expression,
    }

    SwitchDefaultLabel => visit_switch_default_label {}

    SwitchStatement => visit_switch_statement {
        expression: Expression,
        statements: Vec<Statement>,
    }

    SynchronizedStatement => visit_synchronized_statement {
        expression: Expression,
        body: Arc<Block>,
    }

    /// `this` or `Outer.this`.
    This => visit_this {
        qualifier: Option<Arc<NamedType>>,
    }

    ThrowStatement => visit_throw_statement {
        expression: Expression,
    }

    TryStatement => visit_try_statement {
        try_block: Arc<Block>,
        catch_clauses: Vec<Arc<CatchClause>>,
        finally_block: Option<Arc<Block>>,
    }

    TypeParameterDeclaration => visit_type_parameter_declaration {
        name: Arc<SimpleName>,
        type_bounds: Vec<Type>,
    }

    UnaryExpression => visit_unary_expression {
        operator: @copy UnaryOperator,
        operand: Expression,
    }

    VariableDeclarator => visit_variable_declarator {
        name: Arc<SimpleName>,
        extra_dimensions: @copy u32,
        initializer: Option<Expression>,
    }

    WhileStatement => visit_while_statement {
        condition: Expression,
        body: Statement,
    }

    Wildcard => visit_wildcard {
        bound_kind: @copy WildcardBoundKind,
        type_bound: Option<Type>,
    }
}
