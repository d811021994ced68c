//! Validating constructors for every node kind.
//!
//! Each `new_*` method takes exactly the semantic children of its kind and
//! returns the shared node. Sequence children are taken by value, so the
//! caller's collection is moved into the node and cannot change it later.

use std::sync::Arc;

use crate::errors::ModelError;
use crate::nodes::{
    AlternateConstructorInvocation, Annotation, AnnotationDeclaration, AnnotationElement,
    AnnotationElementDeclaration, ArrayAccessExpression, ArrayCreationExpression,
    ArrayInitializer, ArrayType, AssertStatement, AssignmentExpression, Attribute, BasicType,
    BasicTypeKind, Block, BlockComment, BreakStatement, CastExpression, CatchClause, ClassBody,
    ClassDeclaration, ClassInstanceCreationExpression, ClassLiteral, Comment, CompilationUnit,
    ConditionalExpression, ConstructorDeclaration, ContinueStatement, DoStatement, DocBlock,
    DocElement, DocField, DocMethod, DocMethodParameter, DocText, EmptyStatement,
    EnhancedForStatement, EnumConstantDeclaration, EnumDeclaration, Expression,
    ExpressionStatement, FieldAccessExpression, FieldDeclaration, ForInitializer, ForStatement,
    FormalParameterDeclaration, IfStatement, ImportDeclaration, ImportKind, InfixExpression,
    InfixOperator, InitializerDeclaration, InstanceofExpression, InterfaceDeclaration, Javadoc,
    LabeledStatement, LineComment, Literal, LocalClassDeclaration, LocalVariableDeclaration,
    MarkerAnnotation, MethodDeclaration, MethodInvocationExpression, Modifier, ModifierKind, Name,
    NamedType, NodeKind, NormalAnnotation, PackageDeclaration, ParameterizedType,
    ParenthesizedExpression, PostfixExpression, PostfixOperator, QualifiedName, QualifiedType,
    ReturnStatement, SimpleName, SingleElementAnnotation, Statement, StatementExpressionList,
    Super, SuperConstructorInvocation, SwitchCaseLabel, SwitchDefaultLabel, SwitchStatement,
    SynchronizedStatement, This, ThrowStatement, TryStatement, Type, TypeBodyDeclaration,
    TypeDeclaration, TypeParameterDeclaration, UnaryExpression, UnaryOperator,
    VariableDeclarator, WhileStatement, Wildcard, WildcardBoundKind,
};

fn non_empty<T>(kind: NodeKind, name: &'static str, elements: &[T]) -> Result<(), ModelError> {
    if elements.is_empty() {
        return Err(ModelError::EmptySequence { kind, name });
    }
    Ok(())
}

fn non_negative(kind: NodeKind, name: &'static str, value: i32) -> Result<u32, ModelError> {
    u32::try_from(value).map_err(|_| ModelError::Negative { kind, name, value })
}

/// Returns `true` if `token` is a well-formed identifier.
#[must_use]
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Constructs nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelFactory;

#[allow(clippy::unused_self, clippy::too_many_arguments)]
impl ModelFactory {
    #[must_use]
    pub fn new_alternate_constructor_invocation(
        self,
        type_arguments: Vec<Type>,
        arguments: Vec<Expression>,
    ) -> Arc<AlternateConstructorInvocation> {
        Arc::new(AlternateConstructorInvocation::from_parts(
            type_arguments,
            arguments,
        ))
    }

    #[must_use]
    pub fn new_annotation_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        body_declarations: Vec<TypeBodyDeclaration>,
    ) -> Arc<AnnotationDeclaration> {
        Arc::new(AnnotationDeclaration::from_parts(
            javadoc,
            modifiers,
            name,
            body_declarations,
        ))
    }

    #[must_use]
    pub fn new_annotation_element(
        self,
        name: Arc<SimpleName>,
        expression: impl Into<Expression>,
    ) -> Arc<AnnotationElement> {
        Arc::new(AnnotationElement::from_parts(name, expression.into()))
    }

    #[must_use]
    pub fn new_annotation_element_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        ty: impl Into<Type>,
        name: Arc<SimpleName>,
        default_expression: Option<Expression>,
    ) -> Arc<AnnotationElementDeclaration> {
        Arc::new(AnnotationElementDeclaration::from_parts(
            javadoc,
            modifiers,
            ty.into(),
            name,
            default_expression,
        ))
    }

    #[must_use]
    pub fn new_array_access_expression(
        self,
        array: impl Into<Expression>,
        index: impl Into<Expression>,
    ) -> Arc<ArrayAccessExpression> {
        Arc::new(ArrayAccessExpression::from_parts(array.into(), index.into()))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::TooManyDimensions`] if there are more dimension
    /// expressions than `ty` has dimensions.
    pub fn new_array_creation_expression(
        self,
        ty: Arc<ArrayType>,
        dimension_expressions: Vec<Expression>,
        array_initializer: Option<Arc<ArrayInitializer>>,
    ) -> Result<Arc<ArrayCreationExpression>, ModelError> {
        let dimensions = ty.dimensions();
        if dimension_expressions.len() > dimensions {
            return Err(ModelError::TooManyDimensions {
                expressions: dimension_expressions.len(),
                dimensions,
            });
        }
        Ok(Arc::new(ArrayCreationExpression::from_parts(
            ty,
            dimension_expressions,
            array_initializer,
        )))
    }

    #[must_use]
    pub fn new_array_initializer(self, elements: Vec<Expression>) -> Arc<ArrayInitializer> {
        Arc::new(ArrayInitializer::from_parts(elements))
    }

    #[must_use]
    pub fn new_array_type(self, component_type: impl Into<Type>) -> Arc<ArrayType> {
        Arc::new(ArrayType::from_parts(component_type.into()))
    }

    #[must_use]
    pub fn new_assert_statement(
        self,
        expression: impl Into<Expression>,
        message: Option<Expression>,
    ) -> Arc<AssertStatement> {
        Arc::new(AssertStatement::from_parts(expression.into(), message))
    }

    #[must_use]
    pub fn new_assignment_expression(
        self,
        left_hand_side: impl Into<Expression>,
        operator: InfixOperator,
        right_hand_side: impl Into<Expression>,
    ) -> Arc<AssignmentExpression> {
        Arc::new(AssignmentExpression::from_parts(
            left_hand_side.into(),
            operator,
            right_hand_side.into(),
        ))
    }

    #[must_use]
    pub fn new_basic_type(self, type_kind: BasicTypeKind) -> Arc<BasicType> {
        Arc::new(BasicType::from_parts(type_kind))
    }

    #[must_use]
    pub fn new_block(self, statements: Vec<Statement>) -> Arc<Block> {
        Arc::new(Block::from_parts(statements))
    }

    #[must_use]
    pub fn new_block_comment(self, string: impl Into<String>) -> Arc<BlockComment> {
        Arc::new(BlockComment::from_parts(string.into()))
    }

    #[must_use]
    pub fn new_break_statement(self, target_label: Option<Arc<SimpleName>>) -> Arc<BreakStatement> {
        Arc::new(BreakStatement::from_parts(target_label))
    }

    #[must_use]
    pub fn new_cast_expression(
        self,
        ty: impl Into<Type>,
        expression: impl Into<Expression>,
    ) -> Arc<CastExpression> {
        Arc::new(CastExpression::from_parts(ty.into(), expression.into()))
    }

    #[must_use]
    pub fn new_catch_clause(
        self,
        parameter: Arc<FormalParameterDeclaration>,
        body: Arc<Block>,
    ) -> Arc<CatchClause> {
        Arc::new(CatchClause::from_parts(parameter, body))
    }

    #[must_use]
    pub fn new_class_body(self, body_declarations: Vec<TypeBodyDeclaration>) -> Arc<ClassBody> {
        Arc::new(ClassBody::from_parts(body_declarations))
    }

    #[must_use]
    pub fn new_class_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        type_parameters: Vec<Arc<TypeParameterDeclaration>>,
        super_class: Option<Type>,
        super_interface_types: Vec<Type>,
        body_declarations: Vec<TypeBodyDeclaration>,
    ) -> Arc<ClassDeclaration> {
        Arc::new(ClassDeclaration::from_parts(
            javadoc,
            modifiers,
            name,
            type_parameters,
            super_class,
            super_interface_types,
            body_declarations,
        ))
    }

    #[must_use]
    pub fn new_class_instance_creation_expression(
        self,
        qualifier: Option<Expression>,
        type_arguments: Vec<Type>,
        ty: impl Into<Type>,
        arguments: Vec<Expression>,
        body: Option<Arc<ClassBody>>,
    ) -> Arc<ClassInstanceCreationExpression> {
        Arc::new(ClassInstanceCreationExpression::from_parts(
            qualifier,
            type_arguments,
            ty.into(),
            arguments,
            body,
        ))
    }

    #[must_use]
    pub fn new_class_literal(self, ty: impl Into<Type>) -> Arc<ClassLiteral> {
        Arc::new(ClassLiteral::from_parts(ty.into()))
    }

    #[must_use]
    pub fn new_compilation_unit(
        self,
        package_declaration: Option<Arc<PackageDeclaration>>,
        import_declarations: Vec<Arc<ImportDeclaration>>,
        type_declarations: Vec<TypeDeclaration>,
        comments: Vec<Comment>,
    ) -> Arc<CompilationUnit> {
        Arc::new(CompilationUnit::from_parts(
            package_declaration,
            import_declarations,
            type_declarations,
            comments,
        ))
    }

    #[must_use]
    pub fn new_conditional_expression(
        self,
        condition: impl Into<Expression>,
        then_expression: impl Into<Expression>,
        else_expression: impl Into<Expression>,
    ) -> Arc<ConditionalExpression> {
        Arc::new(ConditionalExpression::from_parts(
            condition.into(),
            then_expression.into(),
            else_expression.into(),
        ))
    }

    #[must_use]
    pub fn new_constructor_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        type_parameters: Vec<Arc<TypeParameterDeclaration>>,
        name: Arc<SimpleName>,
        formal_parameters: Vec<Arc<FormalParameterDeclaration>>,
        exception_types: Vec<Type>,
        body: Arc<Block>,
    ) -> Arc<ConstructorDeclaration> {
        Arc::new(ConstructorDeclaration::from_parts(
            javadoc,
            modifiers,
            type_parameters,
            name,
            formal_parameters,
            exception_types,
            body,
        ))
    }

    #[must_use]
    pub fn new_continue_statement(
        self,
        target_label: Option<Arc<SimpleName>>,
    ) -> Arc<ContinueStatement> {
        Arc::new(ContinueStatement::from_parts(target_label))
    }

    #[must_use]
    pub fn new_do_statement(
        self,
        body: impl Into<Statement>,
        condition: impl Into<Expression>,
    ) -> Arc<DoStatement> {
        Arc::new(DoStatement::from_parts(body.into(), condition.into()))
    }

    /// An empty `tag` denotes the synopsis block.
    #[must_use]
    pub fn new_doc_block(self, tag: impl Into<String>, elements: Vec<DocElement>) -> Arc<DocBlock> {
        Arc::new(DocBlock::from_parts(tag.into(), elements))
    }

    #[must_use]
    pub fn new_doc_field(self, ty: Option<Type>, name: Arc<SimpleName>) -> Arc<DocField> {
        Arc::new(DocField::from_parts(ty, name))
    }

    #[must_use]
    pub fn new_doc_method(
        self,
        ty: Option<Type>,
        name: Arc<SimpleName>,
        formal_parameters: Vec<Arc<DocMethodParameter>>,
    ) -> Arc<DocMethod> {
        Arc::new(DocMethod::from_parts(ty, name, formal_parameters))
    }

    #[must_use]
    pub fn new_doc_method_parameter(
        self,
        ty: impl Into<Type>,
        name: Option<Arc<SimpleName>>,
        variable_arity: bool,
    ) -> Arc<DocMethodParameter> {
        Arc::new(DocMethodParameter::from_parts(ty.into(), name, variable_arity))
    }

    #[must_use]
    pub fn new_doc_text(self, string: impl Into<String>) -> Arc<DocText> {
        Arc::new(DocText::from_parts(string.into()))
    }

    #[must_use]
    pub fn new_empty_statement(self) -> Arc<EmptyStatement> {
        Arc::new(EmptyStatement::from_parts())
    }

    #[must_use]
    pub fn new_enhanced_for_statement(
        self,
        parameter: Arc<FormalParameterDeclaration>,
        expression: impl Into<Expression>,
        body: impl Into<Statement>,
    ) -> Arc<EnhancedForStatement> {
        Arc::new(EnhancedForStatement::from_parts(
            parameter,
            expression.into(),
            body.into(),
        ))
    }

    #[must_use]
    pub fn new_enum_constant_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        arguments: Vec<Expression>,
        body: Option<Arc<ClassBody>>,
    ) -> Arc<EnumConstantDeclaration> {
        Arc::new(EnumConstantDeclaration::from_parts(
            javadoc, modifiers, name, arguments, body,
        ))
    }

    #[must_use]
    pub fn new_enum_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        super_interface_types: Vec<Type>,
        constant_declarations: Vec<Arc<EnumConstantDeclaration>>,
        body_declarations: Vec<TypeBodyDeclaration>,
    ) -> Arc<EnumDeclaration> {
        Arc::new(EnumDeclaration::from_parts(
            javadoc,
            modifiers,
            name,
            super_interface_types,
            constant_declarations,
            body_declarations,
        ))
    }

    #[must_use]
    pub fn new_expression_statement(
        self,
        expression: impl Into<Expression>,
    ) -> Arc<ExpressionStatement> {
        Arc::new(ExpressionStatement::from_parts(expression.into()))
    }

    #[must_use]
    pub fn new_field_access_expression(
        self,
        qualifier: impl Into<Expression>,
        name: Arc<SimpleName>,
    ) -> Arc<FieldAccessExpression> {
        Arc::new(FieldAccessExpression::from_parts(qualifier.into(), name))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if no variable is declared.
    pub fn new_field_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        ty: impl Into<Type>,
        variable_declarators: Vec<Arc<VariableDeclarator>>,
    ) -> Result<Arc<FieldDeclaration>, ModelError> {
        non_empty(
            NodeKind::FieldDeclaration,
            "variable_declarators",
            &variable_declarators,
        )?;
        Ok(Arc::new(FieldDeclaration::from_parts(
            javadoc,
            modifiers,
            ty.into(),
            variable_declarators,
        )))
    }

    #[must_use]
    pub fn new_for_statement(
        self,
        initialization: Option<ForInitializer>,
        condition: Option<Expression>,
        update: Option<Arc<StatementExpressionList>>,
        body: impl Into<Statement>,
    ) -> Arc<ForStatement> {
        Arc::new(ForStatement::from_parts(
            initialization,
            condition,
            update,
            body.into(),
        ))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::Negative`] if `extra_dimensions` is negative.
    pub fn new_formal_parameter_declaration(
        self,
        modifiers: Vec<Attribute>,
        ty: impl Into<Type>,
        variable_arity: bool,
        name: Arc<SimpleName>,
        extra_dimensions: i32,
    ) -> Result<Arc<FormalParameterDeclaration>, ModelError> {
        let extra_dimensions = non_negative(
            NodeKind::FormalParameterDeclaration,
            "extra_dimensions",
            extra_dimensions,
        )?;
        Ok(Arc::new(FormalParameterDeclaration::from_parts(
            modifiers,
            ty.into(),
            variable_arity,
            name,
            extra_dimensions,
        )))
    }

    #[must_use]
    pub fn new_if_statement(
        self,
        condition: impl Into<Expression>,
        then_statement: impl Into<Statement>,
        else_statement: Option<Statement>,
    ) -> Arc<IfStatement> {
        Arc::new(IfStatement::from_parts(
            condition.into(),
            then_statement.into(),
            else_statement,
        ))
    }

    #[must_use]
    pub fn new_import_declaration(
        self,
        import_kind: ImportKind,
        name: impl Into<Name>,
    ) -> Arc<ImportDeclaration> {
        Arc::new(ImportDeclaration::from_parts(import_kind, name.into()))
    }

    #[must_use]
    pub fn new_infix_expression(
        self,
        left_operand: impl Into<Expression>,
        operator: InfixOperator,
        right_operand: impl Into<Expression>,
    ) -> Arc<InfixExpression> {
        Arc::new(InfixExpression::from_parts(
            left_operand.into(),
            operator,
            right_operand.into(),
        ))
    }

    #[must_use]
    pub fn new_initializer_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        body: Arc<Block>,
    ) -> Arc<InitializerDeclaration> {
        Arc::new(InitializerDeclaration::from_parts(javadoc, modifiers, body))
    }

    #[must_use]
    pub fn new_instanceof_expression(
        self,
        expression: impl Into<Expression>,
        ty: impl Into<Type>,
    ) -> Arc<InstanceofExpression> {
        Arc::new(InstanceofExpression::from_parts(expression.into(), ty.into()))
    }

    #[must_use]
    pub fn new_interface_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        name: Arc<SimpleName>,
        type_parameters: Vec<Arc<TypeParameterDeclaration>>,
        super_interface_types: Vec<Type>,
        body_declarations: Vec<TypeBodyDeclaration>,
    ) -> Arc<InterfaceDeclaration> {
        Arc::new(InterfaceDeclaration::from_parts(
            javadoc,
            modifiers,
            name,
            type_parameters,
            super_interface_types,
            body_declarations,
        ))
    }

    #[must_use]
    pub fn new_javadoc(self, blocks: Vec<Arc<DocBlock>>) -> Arc<Javadoc> {
        Arc::new(Javadoc::from_parts(blocks))
    }

    #[must_use]
    pub fn new_labeled_statement(
        self,
        label: Arc<SimpleName>,
        body: impl Into<Statement>,
    ) -> Arc<LabeledStatement> {
        Arc::new(LabeledStatement::from_parts(label, body.into()))
    }

    #[must_use]
    pub fn new_line_comment(self, string: impl Into<String>) -> Arc<LineComment> {
        Arc::new(LineComment::from_parts(string.into()))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EmptyLiteral`] if `token` is empty.
    pub fn new_literal(self, token: impl Into<String>) -> Result<Arc<Literal>, ModelError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ModelError::EmptyLiteral);
        }
        Ok(Arc::new(Literal::from_parts(token)))
    }

    #[must_use]
    pub fn new_local_class_declaration(
        self,
        declaration: Arc<ClassDeclaration>,
    ) -> Arc<LocalClassDeclaration> {
        Arc::new(LocalClassDeclaration::from_parts(declaration))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if no variable is declared.
    pub fn new_local_variable_declaration(
        self,
        modifiers: Vec<Attribute>,
        ty: impl Into<Type>,
        variable_declarators: Vec<Arc<VariableDeclarator>>,
    ) -> Result<Arc<LocalVariableDeclaration>, ModelError> {
        non_empty(
            NodeKind::LocalVariableDeclaration,
            "variable_declarators",
            &variable_declarators,
        )?;
        Ok(Arc::new(LocalVariableDeclaration::from_parts(
            modifiers,
            ty.into(),
            variable_declarators,
        )))
    }

    #[must_use]
    pub fn new_marker_annotation(self, ty: Arc<NamedType>) -> Arc<MarkerAnnotation> {
        Arc::new(MarkerAnnotation::from_parts(ty))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::Negative`] if `extra_dimensions` is negative.
    pub fn new_method_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        modifiers: Vec<Attribute>,
        type_parameters: Vec<Arc<TypeParameterDeclaration>>,
        return_type: impl Into<Type>,
        name: Arc<SimpleName>,
        formal_parameters: Vec<Arc<FormalParameterDeclaration>>,
        extra_dimensions: i32,
        exception_types: Vec<Type>,
        body: Option<Arc<Block>>,
    ) -> Result<Arc<MethodDeclaration>, ModelError> {
        let extra_dimensions = non_negative(
            NodeKind::MethodDeclaration,
            "extra_dimensions",
            extra_dimensions,
        )?;
        Ok(Arc::new(MethodDeclaration::from_parts(
            javadoc,
            modifiers,
            type_parameters,
            return_type.into(),
            name,
            formal_parameters,
            extra_dimensions,
            exception_types,
            body,
        )))
    }

    #[must_use]
    pub fn new_method_invocation_expression(
        self,
        qualifier: Option<Expression>,
        type_arguments: Vec<Type>,
        name: Arc<SimpleName>,
        arguments: Vec<Expression>,
    ) -> Arc<MethodInvocationExpression> {
        Arc::new(MethodInvocationExpression::from_parts(
            qualifier,
            type_arguments,
            name,
            arguments,
        ))
    }

    #[must_use]
    pub fn new_modifier(self, modifier_kind: ModifierKind) -> Arc<Modifier> {
        Arc::new(Modifier::from_parts(modifier_kind))
    }

    #[must_use]
    pub fn new_named_type(self, name: impl Into<Name>) -> Arc<NamedType> {
        Arc::new(NamedType::from_parts(name.into()))
    }

    #[must_use]
    pub fn new_normal_annotation(
        self,
        ty: Arc<NamedType>,
        elements: Vec<Arc<AnnotationElement>>,
    ) -> Arc<NormalAnnotation> {
        Arc::new(NormalAnnotation::from_parts(ty, elements))
    }

    #[must_use]
    pub fn new_package_declaration(
        self,
        javadoc: Option<Arc<Javadoc>>,
        annotations: Vec<Annotation>,
        name: impl Into<Name>,
    ) -> Arc<PackageDeclaration> {
        Arc::new(PackageDeclaration::from_parts(
            javadoc,
            annotations,
            name.into(),
        ))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if `type_arguments` is empty.
    pub fn new_parameterized_type(
        self,
        ty: impl Into<Type>,
        type_arguments: Vec<Type>,
    ) -> Result<Arc<ParameterizedType>, ModelError> {
        non_empty(
            NodeKind::ParameterizedType,
            "type_arguments",
            &type_arguments,
        )?;
        Ok(Arc::new(ParameterizedType::from_parts(
            ty.into(),
            type_arguments,
        )))
    }

    #[must_use]
    pub fn new_parenthesized_expression(
        self,
        expression: impl Into<Expression>,
    ) -> Arc<ParenthesizedExpression> {
        Arc::new(ParenthesizedExpression::from_parts(expression.into()))
    }

    #[must_use]
    pub fn new_postfix_expression(
        self,
        operand: impl Into<Expression>,
        operator: PostfixOperator,
    ) -> Arc<PostfixExpression> {
        Arc::new(PostfixExpression::from_parts(operand.into(), operator))
    }

    #[must_use]
    pub fn new_qualified_name(
        self,
        qualifier: impl Into<Name>,
        name: Arc<SimpleName>,
    ) -> Arc<QualifiedName> {
        Arc::new(QualifiedName::from_parts(qualifier.into(), name))
    }

    #[must_use]
    pub fn new_qualified_type(
        self,
        qualifier: impl Into<Type>,
        name: Arc<SimpleName>,
    ) -> Arc<QualifiedType> {
        Arc::new(QualifiedType::from_parts(qualifier.into(), name))
    }

    #[must_use]
    pub fn new_return_statement(self, expression: Option<Expression>) -> Arc<ReturnStatement> {
        Arc::new(ReturnStatement::from_parts(expression))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::InvalidIdentifier`] if `token` is not an identifier.
    pub fn new_simple_name(self, token: impl Into<String>) -> Result<Arc<SimpleName>, ModelError> {
        let token = token.into();
        if !is_identifier(&token) {
            return Err(ModelError::InvalidIdentifier { token });
        }
        Ok(Arc::new(SimpleName::from_parts(token)))
    }

    #[must_use]
    pub fn new_single_element_annotation(
        self,
        ty: Arc<NamedType>,
        expression: impl Into<Expression>,
    ) -> Arc<SingleElementAnnotation> {
        Arc::new(SingleElementAnnotation::from_parts(ty, expression.into()))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if `expressions` is empty.
    pub fn new_statement_expression_list(
        self,
        expressions: Vec<Expression>,
    ) -> Result<Arc<StatementExpressionList>, ModelError> {
        non_empty(
            NodeKind::StatementExpressionList,
            "expressions",
            &expressions,
        )?;
        Ok(Arc::new(StatementExpressionList::from_parts(expressions)))
    }

    #[must_use]
    pub fn new_super(self, qualifier: Option<Arc<NamedType>>) -> Arc<Super> {
        Arc::new(Super::from_parts(qualifier))
    }

    #[must_use]
    pub fn new_super_constructor_invocation(
        self,
        qualifier: Option<Expression>,
        type_arguments: Vec<Type>,
        arguments: Vec<Expression>,
    ) -> Arc<SuperConstructorInvocation> {
        Arc::new(SuperConstructorInvocation::from_parts(
            qualifier,
            type_arguments,
            arguments,
        ))
    }

    #[must_use]
    pub fn new_switch_case_label(self, expression: impl Into<Expression>) -> Arc<SwitchCaseLabel> {
        Arc::new(SwitchCaseLabel::from_parts(expression.into()))
    }

    #[must_use]
    pub fn new_switch_default_label(self) -> Arc<SwitchDefaultLabel> {
        Arc::new(SwitchDefaultLabel::from_parts())
    }

    #[must_use]
    pub fn new_switch_statement(
        self,
        expression: impl Into<Expression>,
        statements: Vec<Statement>,
    ) -> Arc<SwitchStatement> {
        Arc::new(SwitchStatement::from_parts(expression.into(), statements))
    }

    #[must_use]
    pub fn new_synchronized_statement(
        self,
        expression: impl Into<Expression>,
        body: Arc<Block>,
    ) -> Arc<SynchronizedStatement> {
        Arc::new(SynchronizedStatement::from_parts(expression.into(), body))
    }

    #[must_use]
    pub fn new_this(self, qualifier: Option<Arc<NamedType>>) -> Arc<This> {
        Arc::new(This::from_parts(qualifier))
    }

    #[must_use]
    pub fn new_throw_statement(self, expression: impl Into<Expression>) -> Arc<ThrowStatement> {
        Arc::new(ThrowStatement::from_parts(expression.into()))
    }

    #[must_use]
    pub fn new_try_statement(
        self,
        try_block: Arc<Block>,
        catch_clauses: Vec<Arc<CatchClause>>,
        finally_block: Option<Arc<Block>>,
    ) -> Arc<TryStatement> {
        Arc::new(TryStatement::from_parts(
            try_block,
            catch_clauses,
            finally_block,
        ))
    }

    #[must_use]
    pub fn new_type_parameter_declaration(
        self,
        name: Arc<SimpleName>,
        type_bounds: Vec<Type>,
    ) -> Arc<TypeParameterDeclaration> {
        Arc::new(TypeParameterDeclaration::from_parts(name, type_bounds))
    }

    #[must_use]
    pub fn new_unary_expression(
        self,
        operator: UnaryOperator,
        operand: impl Into<Expression>,
    ) -> Arc<UnaryExpression> {
        Arc::new(UnaryExpression::from_parts(operator, operand.into()))
    }

    /// # Errors
    ///
    /// Returns [`ModelError::Negative`] if `extra_dimensions` is negative.
    pub fn new_variable_declarator(
        self,
        name: Arc<SimpleName>,
        extra_dimensions: i32,
        initializer: Option<Expression>,
    ) -> Result<Arc<VariableDeclarator>, ModelError> {
        let extra_dimensions = non_negative(
            NodeKind::VariableDeclarator,
            "extra_dimensions",
            extra_dimensions,
        )?;
        Ok(Arc::new(VariableDeclarator::from_parts(
            name,
            extra_dimensions,
            initializer,
        )))
    }

    #[must_use]
    pub fn new_while_statement(
        self,
        condition: impl Into<Expression>,
        body: impl Into<Statement>,
    ) -> Arc<WhileStatement> {
        Arc::new(WhileStatement::from_parts(condition.into(), body.into()))
    }

    #[must_use]
    pub fn new_wildcard(
        self,
        bound_kind: WildcardBoundKind,
        type_bound: Option<Type>,
    ) -> Arc<Wildcard> {
        Arc::new(Wildcard::from_parts(bound_kind, type_bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("value"));
        assert!(is_identifier("_x1"));
        assert!(is_identifier("$proxy"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a.b"));
    }

    #[test]
    fn rejects_invalid_simple_name() {
        let err = ModelFactory.new_simple_name("java.util").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidIdentifier {
                token: "java.util".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_literal() {
        assert_eq!(ModelFactory.new_literal("").unwrap_err(), ModelError::EmptyLiteral);
    }

    #[test]
    fn rejects_negative_extra_dimensions() {
        let f = ModelFactory;
        let name = f.new_simple_name("x").unwrap();
        let err = f.new_variable_declarator(name, -1, None).unwrap_err();
        assert_eq!(
            err,
            ModelError::Negative {
                kind: NodeKind::VariableDeclarator,
                name: "extra_dimensions",
                value: -1,
            }
        );
    }

    #[test]
    fn rejects_empty_type_arguments() {
        let f = ModelFactory;
        let list = f.new_named_type(f.new_simple_name("List").unwrap());
        let err = f.new_parameterized_type(list, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            ModelError::EmptySequence {
                kind: NodeKind::ParameterizedType,
                ..
            }
        ));
    }

    #[test]
    fn rejects_excess_dimension_expressions() {
        let f = ModelFactory;
        let int = f.new_basic_type(BasicTypeKind::Int);
        let array = f.new_array_type(int);
        let one = Expression::from(f.new_literal("1").unwrap());
        let err = f
            .new_array_creation_expression(array.clone(), vec![one.clone(), one.clone()], None)
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::TooManyDimensions {
                expressions: 2,
                dimensions: 1,
            }
        );
        assert!(f.new_array_creation_expression(array, vec![one], None).is_ok());
    }
}
