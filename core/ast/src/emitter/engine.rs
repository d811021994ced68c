use std::sync::Arc;

use crate::emitter::Precedence;
use crate::emitter::layout::Token;
use crate::errors::EmitError;
use crate::nodes::{
    AlternateConstructorInvocation, AnnotationDeclaration, AnnotationElement,
    AnnotationElementDeclaration, ArrayAccessExpression, ArrayCreationExpression,
    ArrayInitializer, ArrayType, AssertStatement, AssignmentExpression, Attribute, BasicType,
    Block, BlockComment, BreakStatement, CastExpression, CatchClause, ClassBody, ClassDeclaration,
    ClassInstanceCreationExpression, ClassLiteral, CompilationUnit, ConditionalExpression,
    ConstructorDeclaration, ContinueStatement, DoStatement, DocBlock, DocElement, DocField,
    DocMethod, DocMethodParameter, DocText, EmptyStatement, EnhancedForStatement,
    EnumConstantDeclaration, EnumDeclaration, Expression, ExpressionStatement,
    FieldAccessExpression, FieldDeclaration, ForInitializer, ForStatement,
    FormalParameterDeclaration, IfStatement, ImportDeclaration, InfixExpression,
    InitializerDeclaration, InstanceofExpression, InterfaceDeclaration, Javadoc,
    LabeledStatement, LineComment, Literal, LocalClassDeclaration, LocalVariableDeclaration,
    MarkerAnnotation, MethodDeclaration, MethodInvocationExpression, Modifier, NamedType, Node,
    NodeKind, NormalAnnotation, PackageDeclaration, ParameterizedType, ParenthesizedExpression,
    PostfixExpression, QualifiedName, QualifiedType, ReturnStatement, SimpleName,
    SingleElementAnnotation, Statement, StatementExpressionList, Super,
    SuperConstructorInvocation, SwitchCaseLabel, SwitchDefaultLabel, SwitchStatement,
    SynchronizedStatement, This, ThrowStatement, TryStatement, Type, TypeBodyDeclaration,
    TypeParameterDeclaration, UnaryExpression, UnaryOperator, VariableDeclarator, Visitor,
    WhileStatement, Wildcard,
};
use crate::traits::{CommentTrait, DocumentationTrait, Traits};

type Emitted = Result<(), EmitError>;

/// Kinds whose text starts on a line of its own.
fn starts_line(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::CompilationUnit
            | NodeKind::PackageDeclaration
            | NodeKind::ImportDeclaration
            | NodeKind::ClassDeclaration
            | NodeKind::InterfaceDeclaration
            | NodeKind::EnumDeclaration
            | NodeKind::AnnotationDeclaration
            | NodeKind::EnumConstantDeclaration
            | NodeKind::FieldDeclaration
            | NodeKind::MethodDeclaration
            | NodeKind::ConstructorDeclaration
            | NodeKind::InitializerDeclaration
            | NodeKind::AnnotationElementDeclaration
            | NodeKind::AlternateConstructorInvocation
            | NodeKind::AssertStatement
            | NodeKind::BreakStatement
            | NodeKind::ContinueStatement
            | NodeKind::DoStatement
            | NodeKind::EmptyStatement
            | NodeKind::EnhancedForStatement
            | NodeKind::ExpressionStatement
            | NodeKind::ForStatement
            | NodeKind::IfStatement
            | NodeKind::LabeledStatement
            | NodeKind::LocalClassDeclaration
            | NodeKind::LocalVariableDeclaration
            | NodeKind::ReturnStatement
            | NodeKind::SuperConstructorInvocation
            | NodeKind::SwitchCaseLabel
            | NodeKind::SwitchDefaultLabel
            | NodeKind::SwitchStatement
            | NodeKind::SynchronizedStatement
            | NodeKind::ThrowStatement
            | NodeKind::TryStatement
            | NodeKind::WhileStatement
    )
}

/// Returns `true` if an `else` written after `statement` would bind to an
/// `if` nested inside it.
fn open_ended(statement: &Statement) -> bool {
    match statement {
        Statement::If(inner) => inner.else_statement().as_ref().is_none_or(open_ended),
        Statement::While(inner) => open_ended(inner.body()),
        Statement::For(inner) => open_ended(inner.body()),
        Statement::EnhancedFor(inner) => open_ended(inner.body()),
        Statement::Labeled(inner) => open_ended(inner.body()),
        _ => false,
    }
}

pub(crate) struct Emitter {
    tokens: Vec<Token>,
    blank_line_between_members: bool,
}

impl Emitter {
    pub(crate) fn new(blank_line_between_members: bool) -> Self {
        Self {
            tokens: Vec::new(),
            blank_line_between_members,
        }
    }

    pub(crate) fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn word(&mut self, word: impl Into<String>) {
        self.tokens.push(Token::Word(word.into()));
    }

    fn punct(&mut self, punct: &'static str) {
        self.tokens.push(Token::Punct(punct));
    }

    fn operator(&mut self, operator: &'static str) {
        self.tokens.push(Token::Operator(operator));
    }

    fn comma(&mut self) {
        self.tokens.push(Token::Comma);
    }

    fn space(&mut self) {
        self.tokens.push(Token::Space);
    }

    fn newline(&mut self) {
        self.tokens.push(Token::Newline);
    }

    fn indent(&mut self) {
        self.tokens.push(Token::Indent);
    }

    fn dedent(&mut self) {
        self.tokens.push(Token::Dedent);
    }

    fn raw(&mut self, text: impl Into<String>) {
        self.tokens.push(Token::Raw(text.into()));
    }

    /// Emits the attached traits of `node`, then `node` itself.
    pub(crate) fn child<T: Node>(&mut self, node: &T, context: Precedence) -> Emitted {
        self.attached(starts_line(node.kind()), node.traits())?;
        node.accept(self, context)
    }

    fn shared<T: Node>(&mut self, node: &Arc<T>, context: Precedence) -> Emitted {
        self.child(node.as_ref(), context)
    }

    fn separated<T: Node>(&mut self, nodes: &[T], context: Precedence) -> Emitted {
        for (index, node) in nodes.iter().enumerate() {
            if index > 0 {
                self.comma();
            }
            self.child(node, context)?;
        }
        Ok(())
    }

    fn separated_shared<T: Node>(&mut self, nodes: &[Arc<T>], context: Precedence) -> Emitted {
        for (index, node) in nodes.iter().enumerate() {
            if index > 0 {
                self.comma();
            }
            self.shared(node, context)?;
        }
        Ok(())
    }

    fn wrap(
        &mut self,
        own: Precedence,
        demanded: Precedence,
        emit: impl FnOnce(&mut Self) -> Emitted,
    ) -> Emitted {
        let parenthesize = own < demanded;
        if parenthesize {
            self.punct("(");
        }
        emit(self)?;
        if parenthesize {
            self.punct(")");
        }
        Ok(())
    }

    fn attached(&mut self, line_level: bool, traits: &Traits) -> Emitted {
        if let Some(comment) = traits.find::<CommentTrait>() {
            if line_level {
                self.raw("/*");
                self.newline();
                for line in &comment.contents {
                    self.raw(format!(" * {line}"));
                    self.newline();
                }
                self.raw(" */");
                self.newline();
            } else {
                self.raw(format!("/* {} */", comment.contents.join(" ")));
                self.space();
            }
        }
        if let Some(documentation) = traits.find::<DocumentationTrait>() {
            self.documentation(&documentation.blocks)?;
            if line_level {
                self.newline();
            } else {
                self.space();
            }
        }
        Ok(())
    }

    fn documentation(&mut self, blocks: &[Arc<DocBlock>]) -> Emitted {
        self.raw("/**");
        self.newline();
        for block in blocks {
            self.raw(" * ");
            self.shared(block, Precedence::Lowest)?;
            self.newline();
        }
        self.raw(" */");
        Ok(())
    }

    fn doc_text(&mut self, text: &str) {
        for (index, segment) in text.split('\n').enumerate() {
            if index > 0 {
                self.newline();
                self.raw(" * ");
            }
            self.raw(segment);
        }
    }

    fn doc_elements(&mut self, elements: &[DocElement]) -> Emitted {
        for element in elements {
            match element {
                DocElement::Text(text) => self.doc_text(text.string()),
                DocElement::Block(block) => {
                    self.space();
                    self.attached(false, block.traits())?;
                    self.raw("{");
                    self.raw(block.tag().as_str());
                    self.doc_elements(block.elements())?;
                    self.raw("}");
                }
                _ => {
                    self.space();
                    self.child(element, Precedence::Lowest)?;
                }
            }
        }
        Ok(())
    }

    fn javadoc(&mut self, javadoc: Option<&Arc<Javadoc>>) -> Emitted {
        if let Some(javadoc) = javadoc {
            self.shared(javadoc, Precedence::Lowest)?;
            self.newline();
        }
        Ok(())
    }

    /// Emits modifiers and annotations. Declaration annotations go on lines
    /// of their own.
    fn attributes(&mut self, attributes: &[Attribute], own_lines: bool) -> Emitted {
        for attribute in attributes {
            self.child(attribute, Precedence::Lowest)?;
            match attribute {
                Attribute::Annotation(_) if own_lines => self.newline(),
                _ => self.space(),
            }
        }
        Ok(())
    }

    fn type_parameters(&mut self, parameters: &[Arc<TypeParameterDeclaration>]) -> Emitted {
        if !parameters.is_empty() {
            self.punct("<");
            self.separated_shared(parameters, Precedence::Lowest)?;
            self.punct(">");
        }
        Ok(())
    }

    fn type_arguments(&mut self, arguments: &[Type]) -> Emitted {
        if !arguments.is_empty() {
            self.punct("<");
            self.separated(arguments, Precedence::Lowest)?;
            self.punct(">");
        }
        Ok(())
    }

    /// Type arguments of an invocation, attached to what follows.
    fn invocation_type_arguments(&mut self, arguments: &[Type]) -> Emitted {
        if !arguments.is_empty() {
            self.type_arguments(arguments)?;
            self.tokens.push(Token::Join);
        }
        Ok(())
    }

    fn arguments(&mut self, arguments: &[Expression]) -> Emitted {
        self.punct("(");
        self.separated(arguments, Precedence::Lowest)?;
        self.punct(")");
        Ok(())
    }

    fn dimensions(&mut self, count: usize) {
        for _ in 0..count {
            self.punct("[");
            self.punct("]");
        }
    }

    fn exceptions(&mut self, exception_types: &[Type]) -> Emitted {
        if !exception_types.is_empty() {
            self.word("throws");
            self.separated(exception_types, Precedence::Lowest)?;
        }
        Ok(())
    }

    fn member(&mut self, index: usize, member: &TypeBodyDeclaration) -> Emitted {
        if index > 0 && self.blank_line_between_members {
            self.newline();
        }
        self.child(member, Precedence::Lowest)?;
        self.newline();
        Ok(())
    }

    fn members(&mut self, members: &[TypeBodyDeclaration]) -> Emitted {
        self.space();
        self.punct("{");
        self.newline();
        self.indent();
        for (index, member) in members.iter().enumerate() {
            self.member(index, member)?;
        }
        self.dedent();
        self.punct("}");
        Ok(())
    }

    fn statements(&mut self, statements: &[Statement]) -> Emitted {
        for statement in statements {
            self.child(statement, Precedence::Lowest)?;
            self.newline();
        }
        Ok(())
    }

    fn braced(&mut self, statement: &Statement) -> Emitted {
        self.space();
        self.punct("{");
        self.newline();
        self.indent();
        self.statements(std::slice::from_ref(statement))?;
        self.dedent();
        self.punct("}");
        Ok(())
    }

    /// Emits the body of a compound statement and reports whether it ended
    /// with a closing brace.
    fn body(&mut self, statement: &Statement) -> Result<bool, EmitError> {
        if let Statement::Block(block) = statement {
            self.space();
            self.shared(block, Precedence::Lowest)?;
            return Ok(true);
        }
        self.newline();
        self.indent();
        self.child(statement, Precedence::Lowest)?;
        self.dedent();
        Ok(false)
    }

    fn condition(&mut self, keyword: &'static str, condition: &Expression) -> Emitted {
        self.word(keyword);
        self.space();
        self.punct("(");
        self.child(condition, Precedence::Lowest)?;
        self.punct(")");
        Ok(())
    }

    fn local_variable(&mut self, node: &LocalVariableDeclaration, terminate: bool) -> Emitted {
        self.attributes(node.modifiers(), false)?;
        self.child(node.ty(), Precedence::Lowest)?;
        self.separated_shared(node.variable_declarators(), Precedence::Lowest)?;
        if terminate {
            self.punct(";");
        }
        Ok(())
    }

    fn qualifier(&mut self, qualifier: Option<&Expression>) -> Emitted {
        if let Some(qualifier) = qualifier {
            self.child(qualifier, Precedence::Primary)?;
            self.punct(".");
        }
        Ok(())
    }

    fn type_qualifier(&mut self, qualifier: Option<&Arc<NamedType>>) -> Emitted {
        if let Some(qualifier) = qualifier {
            self.shared(qualifier, Precedence::Lowest)?;
            self.punct(".");
        }
        Ok(())
    }
}

impl Visitor<Precedence> for Emitter {
    type Output = ();
    type Error = EmitError;

    fn visit_alternate_constructor_invocation(
        &mut self,
        node: &AlternateConstructorInvocation,
        _: Precedence,
    ) -> Emitted {
        self.invocation_type_arguments(node.type_arguments())?;
        self.word("this");
        self.arguments(node.arguments())?;
        self.punct(";");
        Ok(())
    }

    fn visit_annotation_declaration(
        &mut self,
        node: &AnnotationDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        self.punct("@");
        self.word("interface");
        self.shared(node.name(), Precedence::Lowest)?;
        self.members(node.body_declarations())
    }

    fn visit_annotation_element(&mut self, node: &AnnotationElement, _: Precedence) -> Emitted {
        self.shared(node.name(), Precedence::Lowest)?;
        self.operator("=");
        self.child(node.expression(), Precedence::Lowest)
    }

    fn visit_annotation_element_declaration(
        &mut self,
        node: &AnnotationElementDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        self.child(node.ty(), Precedence::Lowest)?;
        self.shared(node.name(), Precedence::Lowest)?;
        self.punct("(");
        self.punct(")");
        if let Some(value) = node.default_expression() {
            self.word("default");
            self.space();
            self.child(value, Precedence::Lowest)?;
        }
        self.punct(";");
        Ok(())
    }

    fn visit_array_access_expression(
        &mut self,
        node: &ArrayAccessExpression,
        context: Precedence,
    ) -> Emitted {
        self.wrap(Precedence::Primary, context, |this| {
            // `new int[1][0]` would read as a two-dimensional creation.
            if let Expression::ArrayCreation(_) = node.array() {
                this.punct("(");
                this.child(node.array(), Precedence::Lowest)?;
                this.punct(")");
            } else {
                this.child(node.array(), Precedence::Primary)?;
            }
            this.punct("[");
            this.child(node.index(), Precedence::Lowest)?;
            this.punct("]");
            Ok(())
        })
    }

    fn visit_array_creation_expression(
        &mut self,
        node: &ArrayCreationExpression,
        context: Precedence,
    ) -> Emitted {
        self.wrap(Precedence::Primary, context, |this| {
            this.word("new");
            this.child(node.ty().element_type(), Precedence::Lowest)?;
            for dimension in node.dimension_expressions() {
                this.punct("[");
                this.child(dimension, Precedence::Lowest)?;
                this.punct("]");
            }
            let open = node
                .ty()
                .dimensions()
                .saturating_sub(node.dimension_expressions().len());
            this.dimensions(open);
            if let Some(initializer) = node.array_initializer() {
                this.space();
                this.shared(initializer, Precedence::Lowest)?;
            }
            Ok(())
        })
    }

    fn visit_array_initializer(&mut self, node: &ArrayInitializer, _: Precedence) -> Emitted {
        self.punct("{");
        self.separated(node.elements(), Precedence::Lowest)?;
        self.punct("}");
        Ok(())
    }

    fn visit_array_type(&mut self, node: &ArrayType, _: Precedence) -> Emitted {
        self.child(node.component_type(), Precedence::Lowest)?;
        self.dimensions(1);
        Ok(())
    }

    fn visit_assert_statement(&mut self, node: &AssertStatement, _: Precedence) -> Emitted {
        self.word("assert");
        self.space();
        self.child(node.expression(), Precedence::Lowest)?;
        if let Some(message) = node.message() {
            self.operator(":");
            self.child(message, Precedence::Lowest)?;
        }
        self.punct(";");
        Ok(())
    }

    fn visit_assignment_expression(
        &mut self,
        node: &AssignmentExpression,
        context: Precedence,
    ) -> Emitted {
        let operator = node.operator();
        let symbol = operator
            .assignment_symbol()
            .ok_or(EmitError::InvalidAssignment { operator })?;
        self.wrap(Precedence::Assignment, context, |this| {
            this.child(node.left_hand_side(), Precedence::Primary)?;
            this.operator(symbol);
            this.child(node.right_hand_side(), Precedence::Assignment)
        })
    }

    fn visit_basic_type(&mut self, node: &BasicType, _: Precedence) -> Emitted {
        self.word(node.type_kind().keyword());
        Ok(())
    }

    fn visit_block(&mut self, node: &Block, _: Precedence) -> Emitted {
        self.punct("{");
        self.newline();
        self.indent();
        self.statements(node.statements())?;
        self.dedent();
        self.punct("}");
        Ok(())
    }

    fn visit_block_comment(&mut self, node: &BlockComment, _: Precedence) -> Emitted {
        self.raw(format!("/*{}*/", node.string()));
        Ok(())
    }

    fn visit_break_statement(&mut self, node: &BreakStatement, _: Precedence) -> Emitted {
        self.word("break");
        if let Some(label) = node.target_label() {
            self.shared(label, Precedence::Lowest)?;
        }
        self.punct(";");
        Ok(())
    }

    fn visit_cast_expression(&mut self, node: &CastExpression, context: Precedence) -> Emitted {
        // `(Foo) -x` would read as a subtraction and `(Foo) ++x` does not parse.
        let ambiguous = !matches!(node.ty(), Type::Basic(_))
            && matches!(
                node.expression(),
                Expression::Unary(unary)
                    if matches!(
                        unary.operator(),
                        UnaryOperator::Plus
                            | UnaryOperator::Minus
                            | UnaryOperator::Increment
                            | UnaryOperator::Decrement
                    )
            );
        let operand = if ambiguous {
            Precedence::Primary
        } else {
            Precedence::Unary
        };
        self.wrap(Precedence::Unary, context, |this| {
            this.punct("(");
            this.child(node.ty(), Precedence::Lowest)?;
            this.punct(")");
            this.space();
            this.child(node.expression(), operand)
        })
    }

    fn visit_catch_clause(&mut self, node: &CatchClause, _: Precedence) -> Emitted {
        self.word("catch");
        self.space();
        self.punct("(");
        self.shared(node.parameter(), Precedence::Lowest)?;
        self.punct(")");
        self.space();
        self.shared(node.body(), Precedence::Lowest)
    }

    fn visit_class_body(&mut self, node: &ClassBody, _: Precedence) -> Emitted {
        self.members(node.body_declarations())
    }

    fn visit_class_declaration(&mut self, node: &ClassDeclaration, _: Precedence) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        self.word("class");
        self.shared(node.name(), Precedence::Lowest)?;
        self.type_parameters(node.type_parameters())?;
        if let Some(super_class) = node.super_class() {
            self.word("extends");
            self.child(super_class, Precedence::Lowest)?;
        }
        if !node.super_interface_types().is_empty() {
            self.word("implements");
            self.separated(node.super_interface_types(), Precedence::Lowest)?;
        }
        self.members(node.body_declarations())
    }

    fn visit_class_instance_creation_expression(
        &mut self,
        node: &ClassInstanceCreationExpression,
        context: Precedence,
    ) -> Emitted {
        self.wrap(Precedence::Primary, context, |this| {
            this.qualifier(node.qualifier().as_ref())?;
            this.word("new");
            if !node.type_arguments().is_empty() {
                this.space();
                this.type_arguments(node.type_arguments())?;
            }
            this.child(node.ty(), Precedence::Lowest)?;
            this.arguments(node.arguments())?;
            if let Some(body) = node.body() {
                this.shared(body, Precedence::Lowest)?;
            }
            Ok(())
        })
    }

    fn visit_class_literal(&mut self, node: &ClassLiteral, _: Precedence) -> Emitted {
        self.child(node.ty(), Precedence::Lowest)?;
        self.punct(".");
        self.word("class");
        Ok(())
    }

    fn visit_compilation_unit(&mut self, node: &CompilationUnit, _: Precedence) -> Emitted {
        let mut separate = false;
        for comment in node.comments() {
            self.child(comment, Precedence::Lowest)?;
            self.newline();
            separate = true;
        }
        if let Some(package) = node.package_declaration() {
            if separate {
                self.newline();
            }
            self.shared(package, Precedence::Lowest)?;
            self.newline();
            separate = true;
        }
        if !node.import_declarations().is_empty() {
            if separate {
                self.newline();
            }
            for import in node.import_declarations() {
                self.shared(import, Precedence::Lowest)?;
                self.newline();
            }
            separate = true;
        }
        for (index, declaration) in node.type_declarations().iter().enumerate() {
            if separate || index > 0 {
                self.newline();
            }
            self.child(declaration, Precedence::Lowest)?;
            self.newline();
            separate = false;
        }
        Ok(())
    }

    fn visit_conditional_expression(
        &mut self,
        node: &ConditionalExpression,
        context: Precedence,
    ) -> Emitted {
        self.wrap(Precedence::Conditional, context, |this| {
            this.child(node.condition(), Precedence::ConditionalOr)?;
            this.operator("?");
            this.child(node.then_expression(), Precedence::Lowest)?;
            this.operator(":");
            this.child(node.else_expression(), Precedence::Conditional)
        })
    }

    fn visit_constructor_declaration(
        &mut self,
        node: &ConstructorDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        if !node.type_parameters().is_empty() {
            self.type_parameters(node.type_parameters())?;
            self.space();
        }
        self.shared(node.name(), Precedence::Lowest)?;
        self.punct("(");
        self.separated_shared(node.formal_parameters(), Precedence::Lowest)?;
        self.punct(")");
        self.exceptions(node.exception_types())?;
        self.space();
        self.shared(node.body(), Precedence::Lowest)
    }

    fn visit_continue_statement(&mut self, node: &ContinueStatement, _: Precedence) -> Emitted {
        self.word("continue");
        if let Some(label) = node.target_label() {
            self.shared(label, Precedence::Lowest)?;
        }
        self.punct(";");
        Ok(())
    }

    fn visit_do_statement(&mut self, node: &DoStatement, _: Precedence) -> Emitted {
        self.word("do");
        if self.body(node.body())? {
            self.space();
        } else {
            self.newline();
        }
        self.condition("while", node.condition())?;
        self.punct(";");
        Ok(())
    }

    fn visit_doc_block(&mut self, node: &DocBlock, _: Precedence) -> Emitted {
        if !node.tag().is_empty() {
            self.raw(node.tag().as_str());
        }
        self.doc_elements(node.elements())
    }

    fn visit_doc_field(&mut self, node: &DocField, _: Precedence) -> Emitted {
        if let Some(ty) = node.ty() {
            self.child(ty, Precedence::Lowest)?;
        }
        self.punct("#");
        self.shared(node.name(), Precedence::Lowest)
    }

    fn visit_doc_method(&mut self, node: &DocMethod, _: Precedence) -> Emitted {
        if let Some(ty) = node.ty() {
            self.child(ty, Precedence::Lowest)?;
        }
        self.punct("#");
        self.shared(node.name(), Precedence::Lowest)?;
        self.punct("(");
        self.separated_shared(node.formal_parameters(), Precedence::Lowest)?;
        self.punct(")");
        Ok(())
    }

    fn visit_doc_method_parameter(
        &mut self,
        node: &DocMethodParameter,
        _: Precedence,
    ) -> Emitted {
        self.child(node.ty(), Precedence::Lowest)?;
        if node.variable_arity() {
            self.punct("...");
        }
        if let Some(name) = node.name() {
            self.space();
            self.shared(name, Precedence::Lowest)?;
        }
        Ok(())
    }

    fn visit_doc_text(&mut self, node: &DocText, _: Precedence) -> Emitted {
        self.doc_text(node.string());
        Ok(())
    }

    fn visit_empty_statement(&mut self, _: &EmptyStatement, _: Precedence) -> Emitted {
        self.punct(";");
        Ok(())
    }

    fn visit_enhanced_for_statement(
        &mut self,
        node: &EnhancedForStatement,
        _: Precedence,
    ) -> Emitted {
        self.word("for");
        self.space();
        self.punct("(");
        self.shared(node.parameter(), Precedence::Lowest)?;
        self.operator(":");
        self.child(node.expression(), Precedence::Lowest)?;
        self.punct(")");
        self.body(node.body())?;
        Ok(())
    }

    fn visit_enum_constant_declaration(
        &mut self,
        node: &EnumConstantDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        self.shared(node.name(), Precedence::Lowest)?;
        if !node.arguments().is_empty() {
            self.arguments(node.arguments())?;
        }
        if let Some(body) = node.body() {
            self.shared(body, Precedence::Lowest)?;
        }
        Ok(())
    }

    fn visit_enum_declaration(&mut self, node: &EnumDeclaration, _: Precedence) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        self.word("enum");
        self.shared(node.name(), Precedence::Lowest)?;
        if !node.super_interface_types().is_empty() {
            self.word("implements");
            self.separated(node.super_interface_types(), Precedence::Lowest)?;
        }
        self.space();
        self.punct("{");
        self.newline();
        self.indent();
        let constants = node.constant_declarations();
        let members = node.body_declarations();
        for (index, constant) in constants.iter().enumerate() {
            self.shared(constant, Precedence::Lowest)?;
            if index + 1 < constants.len() {
                self.punct(",");
            } else if !members.is_empty() {
                self.punct(";");
            }
            self.newline();
        }
        if constants.is_empty() && !members.is_empty() {
            self.punct(";");
            self.newline();
        }
        for (index, member) in members.iter().enumerate() {
            // Constants count as the first member.
            self.member(index + 1, member)?;
        }
        self.dedent();
        self.punct("}");
        Ok(())
    }

    fn visit_expression_statement(
        &mut self,
        node: &ExpressionStatement,
        _: Precedence,
    ) -> Emitted {
        self.child(node.expression(), Precedence::Lowest)?;
        self.punct(";");
        Ok(())
    }

    fn visit_field_access_expression(
        &mut self,
        node: &FieldAccessExpression,
        context: Precedence,
    ) -> Emitted {
        self.wrap(Precedence::Primary, context, |this| {
            this.child(node.qualifier(), Precedence::Primary)?;
            this.punct(".");
            this.shared(node.name(), Precedence::Lowest)
        })
    }

    fn visit_field_declaration(&mut self, node: &FieldDeclaration, _: Precedence) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        self.child(node.ty(), Precedence::Lowest)?;
        self.separated_shared(node.variable_declarators(), Precedence::Lowest)?;
        self.punct(";");
        Ok(())
    }

    fn visit_for_statement(&mut self, node: &ForStatement, _: Precedence) -> Emitted {
        self.word("for");
        self.space();
        self.punct("(");
        match node.initialization() {
            Some(ForInitializer::LocalVariable(declaration)) => {
                self.attached(false, declaration.traits())?;
                self.local_variable(declaration, false)?;
            }
            Some(ForInitializer::Expressions(expressions)) => {
                self.shared(expressions, Precedence::Lowest)?;
            }
            None => {}
        }
        self.punct(";");
        if let Some(condition) = node.condition() {
            self.space();
            self.child(condition, Precedence::Lowest)?;
        }
        self.punct(";");
        if let Some(update) = node.update() {
            self.space();
            self.shared(update, Precedence::Lowest)?;
        }
        self.punct(")");
        self.body(node.body())?;
        Ok(())
    }

    fn visit_formal_parameter_declaration(
        &mut self,
        node: &FormalParameterDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.attributes(node.modifiers(), false)?;
        self.child(node.ty(), Precedence::Lowest)?;
        if node.variable_arity() {
            self.punct("...");
            self.space();
        }
        self.shared(node.name(), Precedence::Lowest)?;
        self.dimensions(node.extra_dimensions() as usize);
        Ok(())
    }

    fn visit_if_statement(&mut self, node: &IfStatement, _: Precedence) -> Emitted {
        self.condition("if", node.condition())?;
        let Some(else_statement) = node.else_statement() else {
            self.body(node.then_statement())?;
            return Ok(());
        };
        let closed = if open_ended(node.then_statement()) {
            self.braced(node.then_statement())?;
            true
        } else {
            self.body(node.then_statement())?
        };
        if closed {
            self.space();
        } else {
            self.newline();
        }
        self.word("else");
        if let Statement::If(_) = else_statement {
            self.space();
            self.child(else_statement, Precedence::Lowest)
        } else {
            self.body(else_statement)?;
            Ok(())
        }
    }

    fn visit_import_declaration(&mut self, node: &ImportDeclaration, _: Precedence) -> Emitted {
        self.word("import");
        if node.import_kind().is_static() {
            self.word("static");
        }
        self.child(node.name(), Precedence::Lowest)?;
        if node.import_kind().is_on_demand() {
            self.punct(".");
            self.punct("*");
        }
        self.punct(";");
        Ok(())
    }

    fn visit_infix_expression(&mut self, node: &InfixExpression, context: Precedence) -> Emitted {
        let operator = node.operator();
        let own = operator.precedence();
        self.wrap(own, context, |this| {
            this.child(node.left_operand(), own)?;
            this.operator(operator.symbol());
            this.child(node.right_operand(), own.tighter())
        })
    }

    fn visit_initializer_declaration(
        &mut self,
        node: &InitializerDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        self.shared(node.body(), Precedence::Lowest)
    }

    fn visit_instanceof_expression(
        &mut self,
        node: &InstanceofExpression,
        context: Precedence,
    ) -> Emitted {
        self.wrap(Precedence::Relational, context, |this| {
            this.child(node.expression(), Precedence::Relational)?;
            this.operator("instanceof");
            this.child(node.ty(), Precedence::Lowest)
        })
    }

    fn visit_interface_declaration(
        &mut self,
        node: &InterfaceDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        self.word("interface");
        self.shared(node.name(), Precedence::Lowest)?;
        self.type_parameters(node.type_parameters())?;
        if !node.super_interface_types().is_empty() {
            self.word("extends");
            self.separated(node.super_interface_types(), Precedence::Lowest)?;
        }
        self.members(node.body_declarations())
    }

    fn visit_javadoc(&mut self, node: &Javadoc, _: Precedence) -> Emitted {
        self.documentation(node.blocks())
    }

    fn visit_labeled_statement(&mut self, node: &LabeledStatement, _: Precedence) -> Emitted {
        self.shared(node.label(), Precedence::Lowest)?;
        self.punct(":");
        self.space();
        self.child(node.body(), Precedence::Lowest)
    }

    fn visit_line_comment(&mut self, node: &LineComment, _: Precedence) -> Emitted {
        self.raw(format!("//{}", node.string()));
        Ok(())
    }

    fn visit_literal(&mut self, node: &Literal, _: Precedence) -> Emitted {
        self.word(node.token().as_str());
        Ok(())
    }

    fn visit_local_class_declaration(
        &mut self,
        node: &LocalClassDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.shared(node.declaration(), Precedence::Lowest)
    }

    fn visit_local_variable_declaration(
        &mut self,
        node: &LocalVariableDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.local_variable(node, true)
    }

    fn visit_marker_annotation(&mut self, node: &MarkerAnnotation, _: Precedence) -> Emitted {
        self.punct("@");
        self.shared(node.ty(), Precedence::Lowest)
    }

    fn visit_method_declaration(&mut self, node: &MethodDeclaration, _: Precedence) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        self.attributes(node.modifiers(), true)?;
        if !node.type_parameters().is_empty() {
            self.type_parameters(node.type_parameters())?;
            self.space();
        }
        self.child(node.return_type(), Precedence::Lowest)?;
        self.shared(node.name(), Precedence::Lowest)?;
        self.punct("(");
        self.separated_shared(node.formal_parameters(), Precedence::Lowest)?;
        self.punct(")");
        self.dimensions(node.extra_dimensions() as usize);
        self.exceptions(node.exception_types())?;
        match node.body() {
            Some(body) => {
                self.space();
                self.shared(body, Precedence::Lowest)
            }
            None => {
                self.punct(";");
                Ok(())
            }
        }
    }

    fn visit_method_invocation_expression(
        &mut self,
        node: &MethodInvocationExpression,
        context: Precedence,
    ) -> Emitted {
        self.wrap(Precedence::Primary, context, |this| {
            this.qualifier(node.qualifier().as_ref())?;
            this.invocation_type_arguments(node.type_arguments())?;
            this.shared(node.name(), Precedence::Lowest)?;
            this.arguments(node.arguments())
        })
    }

    fn visit_modifier(&mut self, node: &Modifier, _: Precedence) -> Emitted {
        self.word(node.modifier_kind().keyword());
        Ok(())
    }

    fn visit_named_type(&mut self, node: &NamedType, _: Precedence) -> Emitted {
        self.child(node.name(), Precedence::Lowest)
    }

    fn visit_normal_annotation(&mut self, node: &NormalAnnotation, _: Precedence) -> Emitted {
        self.punct("@");
        self.shared(node.ty(), Precedence::Lowest)?;
        self.punct("(");
        self.separated_shared(node.elements(), Precedence::Lowest)?;
        self.punct(")");
        Ok(())
    }

    fn visit_package_declaration(&mut self, node: &PackageDeclaration, _: Precedence) -> Emitted {
        self.javadoc(node.javadoc().as_ref())?;
        for annotation in node.annotations() {
            self.child(annotation, Precedence::Lowest)?;
            self.newline();
        }
        self.word("package");
        self.child(node.name(), Precedence::Lowest)?;
        self.punct(";");
        Ok(())
    }

    fn visit_parameterized_type(&mut self, node: &ParameterizedType, _: Precedence) -> Emitted {
        self.child(node.ty(), Precedence::Lowest)?;
        self.type_arguments(node.type_arguments())
    }

    fn visit_parenthesized_expression(
        &mut self,
        node: &ParenthesizedExpression,
        _: Precedence,
    ) -> Emitted {
        self.punct("(");
        self.child(node.expression(), Precedence::Lowest)?;
        self.punct(")");
        Ok(())
    }

    fn visit_postfix_expression(
        &mut self,
        node: &PostfixExpression,
        context: Precedence,
    ) -> Emitted {
        self.wrap(Precedence::Postfix, context, |this| {
            this.child(node.operand(), Precedence::Postfix)?;
            this.punct(node.operator().symbol());
            Ok(())
        })
    }

    fn visit_qualified_name(&mut self, node: &QualifiedName, _: Precedence) -> Emitted {
        self.child(node.qualifier(), Precedence::Lowest)?;
        self.punct(".");
        self.shared(node.name(), Precedence::Lowest)
    }

    fn visit_qualified_type(&mut self, node: &QualifiedType, _: Precedence) -> Emitted {
        self.child(node.qualifier(), Precedence::Lowest)?;
        self.punct(".");
        self.shared(node.name(), Precedence::Lowest)
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement, _: Precedence) -> Emitted {
        self.word("return");
        if let Some(expression) = node.expression() {
            self.space();
            self.child(expression, Precedence::Lowest)?;
        }
        self.punct(";");
        Ok(())
    }

    fn visit_simple_name(&mut self, node: &SimpleName, _: Precedence) -> Emitted {
        self.word(node.as_str());
        Ok(())
    }

    fn visit_single_element_annotation(
        &mut self,
        node: &SingleElementAnnotation,
        _: Precedence,
    ) -> Emitted {
        self.punct("@");
        self.shared(node.ty(), Precedence::Lowest)?;
        self.punct("(");
        self.child(node.expression(), Precedence::Lowest)?;
        self.punct(")");
        Ok(())
    }

    fn visit_statement_expression_list(
        &mut self,
        node: &StatementExpressionList,
        _: Precedence,
    ) -> Emitted {
        self.separated(node.expressions(), Precedence::Lowest)
    }

    fn visit_super(&mut self, node: &Super, _: Precedence) -> Emitted {
        self.type_qualifier(node.qualifier().as_ref())?;
        self.word("super");
        Ok(())
    }

    fn visit_super_constructor_invocation(
        &mut self,
        node: &SuperConstructorInvocation,
        _: Precedence,
    ) -> Emitted {
        self.qualifier(node.qualifier().as_ref())?;
        self.invocation_type_arguments(node.type_arguments())?;
        self.word("super");
        self.arguments(node.arguments())?;
        self.punct(";");
        Ok(())
    }

    fn visit_switch_case_label(&mut self, node: &SwitchCaseLabel, _: Precedence) -> Emitted {
        self.word("case");
        self.space();
        self.child(node.expression(), Precedence::Lowest)?;
        self.punct(":");
        Ok(())
    }

    fn visit_switch_default_label(&mut self, _: &SwitchDefaultLabel, _: Precedence) -> Emitted {
        self.word("default");
        self.punct(":");
        Ok(())
    }

    fn visit_switch_statement(&mut self, node: &SwitchStatement, _: Precedence) -> Emitted {
        self.condition("switch", node.expression())?;
        self.space();
        self.punct("{");
        self.newline();
        self.indent();
        for statement in node.statements() {
            let label = matches!(
                statement,
                Statement::SwitchCase(_) | Statement::SwitchDefault(_)
            );
            if !label {
                self.indent();
            }
            self.child(statement, Precedence::Lowest)?;
            self.newline();
            if !label {
                self.dedent();
            }
        }
        self.dedent();
        self.punct("}");
        Ok(())
    }

    fn visit_synchronized_statement(
        &mut self,
        node: &SynchronizedStatement,
        _: Precedence,
    ) -> Emitted {
        self.condition("synchronized", node.expression())?;
        self.space();
        self.shared(node.body(), Precedence::Lowest)
    }

    fn visit_this(&mut self, node: &This, _: Precedence) -> Emitted {
        self.type_qualifier(node.qualifier().as_ref())?;
        self.word("this");
        Ok(())
    }

    fn visit_throw_statement(&mut self, node: &ThrowStatement, _: Precedence) -> Emitted {
        self.word("throw");
        self.space();
        self.child(node.expression(), Precedence::Lowest)?;
        self.punct(";");
        Ok(())
    }

    fn visit_try_statement(&mut self, node: &TryStatement, _: Precedence) -> Emitted {
        self.word("try");
        self.space();
        self.shared(node.try_block(), Precedence::Lowest)?;
        for catch_clause in node.catch_clauses() {
            self.space();
            self.shared(catch_clause, Precedence::Lowest)?;
        }
        if let Some(finally_block) = node.finally_block() {
            self.space();
            self.word("finally");
            self.space();
            self.shared(finally_block, Precedence::Lowest)?;
        }
        Ok(())
    }

    fn visit_type_parameter_declaration(
        &mut self,
        node: &TypeParameterDeclaration,
        _: Precedence,
    ) -> Emitted {
        self.shared(node.name(), Precedence::Lowest)?;
        for (index, bound) in node.type_bounds().iter().enumerate() {
            if index == 0 {
                self.word("extends");
            } else {
                self.operator("&");
            }
            self.child(bound, Precedence::Lowest)?;
        }
        Ok(())
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression, context: Precedence) -> Emitted {
        self.wrap(Precedence::Unary, context, |this| {
            this.tokens.push(Token::Prefix(node.operator().symbol()));
            this.child(node.operand(), Precedence::Unary)
        })
    }

    fn visit_variable_declarator(&mut self, node: &VariableDeclarator, _: Precedence) -> Emitted {
        self.shared(node.name(), Precedence::Lowest)?;
        self.dimensions(node.extra_dimensions() as usize);
        if let Some(initializer) = node.initializer() {
            self.operator("=");
            self.child(initializer, Precedence::Lowest)?;
        }
        Ok(())
    }

    fn visit_while_statement(&mut self, node: &WhileStatement, _: Precedence) -> Emitted {
        self.condition("while", node.condition())?;
        self.body(node.body())?;
        Ok(())
    }

    fn visit_wildcard(&mut self, node: &Wildcard, _: Precedence) -> Emitted {
        self.word("?");
        if let Some(keyword) = node.bound_kind().keyword() {
            self.word(keyword);
        }
        if let Some(bound) = node.type_bound() {
            self.child(bound, Precedence::Lowest)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::emitter::{EmitOptions, emit, render};
    use crate::errors::EmitError;
    use crate::factory::ModelFactory;
    use crate::nodes::{
        Attribute, BasicTypeKind, DocElement, Expression, ImportKind, InfixOperator, ModifierKind,
        Node, PostfixOperator, SimpleName, Statement, Type, TypeBodyDeclaration, TypeDeclaration,
        UnaryOperator,
    };
    use crate::traits::{CommentTrait, DocumentationTrait};

    const F: ModelFactory = ModelFactory;

    fn name(token: &str) -> Arc<SimpleName> {
        F.new_simple_name(token).unwrap()
    }

    fn var(token: &str) -> Expression {
        name(token).into()
    }

    fn lit(token: &str) -> Expression {
        F.new_literal(token).unwrap().into()
    }

    fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Expression {
        F.new_infix_expression(left, operator, right).into()
    }

    fn named(token: &str) -> Type {
        F.new_named_type(name(token)).into()
    }

    fn basic(kind: BasicTypeKind) -> Type {
        F.new_basic_type(kind).into()
    }

    fn call(token: &str) -> Expression {
        F.new_method_invocation_expression(None, vec![], name(token), vec![])
            .into()
    }

    fn stmt(expression: Expression) -> Statement {
        F.new_expression_statement(expression).into()
    }

    fn text<T: Node>(node: &T) -> String {
        render(node).unwrap()
    }

    #[test]
    fn looser_operands_are_parenthesized() {
        let sum = infix(var("a"), InfixOperator::Plus, var("b"));
        let product = infix(sum, InfixOperator::Times, var("c"));
        assert_eq!(text(&product), "(a + b) * c");

        let product = infix(var("b"), InfixOperator::Times, var("c"));
        let sum = infix(var("a"), InfixOperator::Plus, product);
        assert_eq!(text(&sum), "a + b * c");
    }

    #[test]
    fn left_associativity_is_preserved() {
        let right = infix(var("b"), InfixOperator::Minus, var("c"));
        assert_eq!(
            text(&infix(var("a"), InfixOperator::Minus, right)),
            "a - (b - c)"
        );

        let left = infix(var("a"), InfixOperator::Minus, var("b"));
        assert_eq!(
            text(&infix(left, InfixOperator::Minus, var("c"))),
            "a - b - c"
        );
    }

    #[test]
    fn assignments_chain_to_the_right() {
        let inner: Expression = F
            .new_assignment_expression(var("b"), InfixOperator::Assign, var("c"))
            .into();
        let outer = F.new_assignment_expression(var("a"), InfixOperator::Assign, inner);
        assert_eq!(text(&*outer), "a = b = c");

        let compound = F.new_assignment_expression(var("a"), InfixOperator::Plus, lit("1"));
        assert_eq!(text(&*compound), "a += 1");
    }

    #[test]
    fn relational_assignment_is_rejected() {
        let invalid = F.new_assignment_expression(var("a"), InfixOperator::Less, var("b"));
        let err = render(&*invalid).unwrap_err();
        assert!(matches!(
            err,
            EmitError::InvalidAssignment {
                operator: InfixOperator::Less
            }
        ));
    }

    #[test]
    fn conditionals_nest_in_the_else_branch_only() {
        let nested: Expression = F
            .new_conditional_expression(var("b"), var("x"), var("y"))
            .into();
        let tail = F.new_conditional_expression(var("c"), var("a"), nested.clone());
        assert_eq!(text(&*tail), "c ? a : b ? x : y");

        let head = F.new_conditional_expression(nested, var("a"), var("z"));
        assert_eq!(text(&*head), "(b ? x : y) ? a : z");
    }

    #[test]
    fn cast_of_signed_operand_is_disambiguated() {
        let negated: Expression = F.new_unary_expression(UnaryOperator::Minus, var("x")).into();
        let reference = F.new_cast_expression(named("Foo"), negated.clone());
        assert_eq!(text(&*reference), "(Foo) (-x)");

        let primitive = F.new_cast_expression(basic(BasicTypeKind::Int), negated);
        assert_eq!(text(&*primitive), "(int) -x");
    }

    #[test]
    fn prefix_operators_stay_apart() {
        let inner: Expression = F.new_unary_expression(UnaryOperator::Minus, var("x")).into();
        let outer = F.new_unary_expression(UnaryOperator::Minus, inner);
        assert_eq!(text(&*outer), "- -x");

        let increment: Expression = F
            .new_postfix_expression(var("i"), PostfixOperator::Increment)
            .into();
        let negated = F.new_unary_expression(UnaryOperator::Minus, increment);
        assert_eq!(text(&*negated), "-i++");
    }

    #[test]
    fn qualifiers_bind_tightest() {
        let sum = infix(var("a"), InfixOperator::Plus, var("b"));
        let access = F.new_field_access_expression(sum, name("c"));
        assert_eq!(text(&*access), "(a + b).c");
    }

    #[test]
    fn array_creation_lists_open_dimensions() {
        let matrix = F.new_array_type(F.new_array_type(basic(BasicTypeKind::Int)));
        let creation = F
            .new_array_creation_expression(matrix, vec![var("n")], None)
            .unwrap();
        assert_eq!(text(&*creation), "new int[n][]");

        let access = F.new_array_access_expression(creation, lit("0"));
        assert_eq!(text(&*access), "(new int[n][])[0]");
    }

    #[test]
    fn dangling_else_gets_braces() {
        let inner = F.new_if_statement(var("b"), stmt(call("x")), None);
        let outer = F.new_if_statement(var("a"), inner, Some(stmt(call("y"))));
        assert_eq!(
            text(&*outer),
            "if (a) {\n    if (b)\n        x();\n} else\n    y();"
        );
    }

    #[test]
    fn else_if_chains_stay_flat() {
        let tail = F.new_if_statement(var("b"), stmt(call("y")), Some(stmt(call("z"))));
        let head = F.new_if_statement(var("a"), stmt(call("x")), Some(tail.into()));
        assert_eq!(
            text(&*head),
            "if (a)\n    x();\nelse if (b)\n    y();\nelse\n    z();"
        );
    }

    #[test]
    fn loops_render_their_headers() {
        let declarator = F.new_variable_declarator(name("i"), 0, Some(lit("0"))).unwrap();
        let init = F
            .new_local_variable_declaration(vec![], basic(BasicTypeKind::Int), vec![declarator])
            .unwrap();
        let update = F
            .new_statement_expression_list(vec![
                F.new_postfix_expression(var("i"), PostfixOperator::Increment)
                    .into(),
            ])
            .unwrap();
        let counted = F.new_for_statement(
            Some(init.into()),
            Some(infix(var("i"), InfixOperator::Less, var("n"))),
            Some(update),
            stmt(call("x")),
        );
        assert_eq!(text(&*counted), "for (int i = 0; i < n; i++)\n    x();");

        let forever = F.new_for_statement(None, None, None, F.new_block(vec![]));
        assert_eq!(text(&*forever), "for (;;) {\n}");

        let body = F.new_block(vec![stmt(call("y"))]);
        let looping = F.new_do_statement(body, var("x"));
        assert_eq!(text(&*looping), "do {\n    y();\n} while (x);");
    }

    #[test]
    fn switch_indents_labels_and_statements() {
        let switch = F.new_switch_statement(
            var("x"),
            vec![
                F.new_switch_case_label(lit("1")).into(),
                stmt(call("y")),
                F.new_break_statement(None).into(),
                F.new_switch_default_label().into(),
                stmt(call("z")),
            ],
        );
        assert_eq!(
            text(&*switch),
            "switch (x) {\n    case 1:\n        y();\n        break;\n    default:\n        z();\n}"
        );
    }

    #[test]
    fn try_statement_renders_all_clauses() {
        let parameter = F
            .new_formal_parameter_declaration(vec![], named("Exception"), false, name("e"), 0)
            .unwrap();
        let clause = F.new_catch_clause(parameter, F.new_block(vec![]));
        let statement = F.new_try_statement(
            F.new_block(vec![stmt(call("x"))]),
            vec![clause],
            Some(F.new_block(vec![])),
        );
        assert_eq!(
            text(&*statement),
            "try {\n    x();\n} catch (Exception e) {\n} finally {\n}"
        );
    }

    fn sample_class() -> TypeDeclaration {
        let public: Attribute = F.new_modifier(ModifierKind::Public).into();
        let private: Attribute = F.new_modifier(ModifierKind::Private).into();
        let field = F
            .new_field_declaration(
                None,
                vec![private],
                basic(BasicTypeKind::Int),
                vec![F.new_variable_declarator(name("x"), 0, Some(lit("1"))).unwrap()],
            )
            .unwrap();
        let args = F
            .new_formal_parameter_declaration(vec![], named("String"), true, name("args"), 0)
            .unwrap();
        let method = F
            .new_method_declaration(
                None,
                vec![public.clone()],
                vec![],
                basic(BasicTypeKind::Void),
                name("run"),
                vec![args],
                0,
                vec![],
                Some(F.new_block(vec![F.new_return_statement(None).into()])),
            )
            .unwrap();
        F.new_class_declaration(
            None,
            vec![public],
            name("Foo"),
            vec![F.new_type_parameter_declaration(name("T"), vec![])],
            Some(named("Bar")),
            vec![named("Baz")],
            vec![
                TypeBodyDeclaration::Field(field),
                TypeBodyDeclaration::Method(method),
            ],
        )
        .into()
    }

    #[test]
    fn class_members_are_separated_by_blank_lines() {
        assert_eq!(
            text(&sample_class()),
            "public class Foo<T> extends Bar implements Baz {\n    private int x = 1;\n\n    public void run(String... args) {\n        return;\n    }\n}"
        );
    }

    #[test]
    fn options_change_the_layout() {
        let options = EmitOptions {
            indent: "\t".to_string(),
            blank_line_between_members: false,
            ..EmitOptions::default()
        };
        assert_eq!(
            emit(&sample_class(), &options).unwrap(),
            "public class Foo<T> extends Bar implements Baz {\n\tprivate int x = 1;\n\tpublic void run(String... args) {\n\t\treturn;\n\t}\n}"
        );
    }

    #[test]
    fn compilation_unit_separates_sections() {
        let package = F.new_package_declaration(
            None,
            vec![],
            F.new_qualified_name(name("a"), name("b")),
        );
        let list = F.new_qualified_name(F.new_qualified_name(name("java"), name("util")), name("List"));
        let import = F.new_import_declaration(ImportKind::SingleType, list);
        let class = F.new_class_declaration(None, vec![], name("Foo"), vec![], None, vec![], vec![]);
        let unit = F.new_compilation_unit(Some(package), vec![import], vec![class.into()], vec![]);
        assert_eq!(
            text(&*unit),
            "package a.b;\n\nimport java.util.List;\n\nclass Foo {\n}\n"
        );
    }

    #[test]
    fn comment_trait_precedes_the_node() {
        let statement = stmt(call("x"));
        statement
            .traits()
            .put(Some(CommentTrait::new(["first", "second"])));
        assert_eq!(text(&statement), "/*\n * first\n * second\n */\nx();");

        let operand = var("y");
        operand.traits().put(Some(CommentTrait::new(["why"])));
        let sum = infix(var("x"), InfixOperator::Plus, operand);
        assert_eq!(text(&sum), "x + /* why */ y");
    }

    #[test]
    fn documentation_renders_as_javadoc() {
        let synopsis = F.new_doc_block("", vec![F.new_doc_text("Runs.").into()]);
        let param = F.new_doc_block(
            "@param",
            vec![
                DocElement::Name(name("args").into()),
                F.new_doc_text(" the arguments").into(),
            ],
        );
        let method = F
            .new_method_declaration(
                None,
                vec![],
                vec![],
                basic(BasicTypeKind::Void),
                name("run"),
                vec![],
                0,
                vec![],
                None,
            )
            .unwrap();
        method
            .traits()
            .put(Some(DocumentationTrait::new(vec![synopsis, param])));
        assert_eq!(
            text(&*method),
            "/**\n * Runs.\n * @param args the arguments\n */\nvoid run();"
        );
    }

    #[test]
    fn inline_doc_blocks_are_braced() {
        let link = F.new_doc_block("@link", vec![DocElement::Name(name("Foo").into())]);
        let synopsis = F.new_doc_block(
            "",
            vec![
                F.new_doc_text("See").into(),
                link.into(),
                F.new_doc_text(".\nMore.").into(),
            ],
        );
        let javadoc = F.new_javadoc(vec![synopsis]);
        assert_eq!(text(&*javadoc), "/**\n * See {@link Foo}.\n * More.\n */");
    }

    #[test]
    fn emission_is_deterministic() {
        let class = sample_class();
        assert_eq!(text(&class), text(&class));
        assert_eq!(class.to_string(), text(&class));
    }

    #[test]
    fn invocation_type_arguments_attach_to_the_name() {
        let generic = F.new_method_invocation_expression(
            Some(F.new_this(None).into()),
            vec![named("T")],
            name("foo"),
            vec![],
        );
        assert_eq!(text(&*generic), "this.<T>foo()");

        let delegated = F.new_alternate_constructor_invocation(vec![named("T")], vec![var("x")]);
        assert_eq!(text(&*delegated), "<T>this(x);");

        // Type arguments of a type keep their space before the next word.
        let list: Type = F
            .new_parameterized_type(named("List"), vec![named("T")])
            .unwrap()
            .into();
        let declarator = F.new_variable_declarator(name("items"), 0, None).unwrap();
        let local = F.new_local_variable_declaration(vec![], list, vec![declarator]).unwrap();
        assert_eq!(text(&*local), "List<T> items;");
    }

    #[test]
    fn for_initializer_keeps_its_comment() {
        let declarator = F.new_variable_declarator(name("i"), 0, Some(lit("0"))).unwrap();
        let init = F
            .new_local_variable_declaration(vec![], basic(BasicTypeKind::Int), vec![declarator])
            .unwrap();
        init.traits().put(Some(CommentTrait::new(["start"])));
        let looping = F.new_for_statement(Some(init.into()), None, None, F.new_block(vec![]));
        assert_eq!(text(&*looping), "for (/* start */ int i = 0;;) {\n}");
    }

    #[test]
    fn inline_doc_blocks_keep_their_comment() {
        let link = F.new_doc_block("@link", vec![DocElement::Name(name("Foo").into())]);
        link.traits().put(Some(CommentTrait::new(["ref"])));
        let synopsis = F.new_doc_block("", vec![F.new_doc_text("See").into(), link.into()]);
        let javadoc = F.new_javadoc(vec![synopsis]);
        assert_eq!(text(&*javadoc), "/**\n * See /* ref */ {@link Foo}\n */");
    }
}
