//! Fluent construction of expressions.
//!
//! ```ignore
//! let call = ExpressionBuilder::new(factory, this)
//!     .field("items")?
//!     .method("add", vec![value])?
//!     .to_statement();
//! ```

use std::sync::Arc;

use jmodel_ast::errors::ModelError;
use jmodel_ast::factory::ModelFactory;
use jmodel_ast::nodes::{
    Expression, ExpressionStatement, InfixOperator, PostfixOperator, ReturnStatement, SimpleName,
    Type, UnaryOperator,
};

use crate::models;

/// Builds an expression by repeatedly wrapping the current one.
#[derive(Debug, Clone)]
pub struct ExpressionBuilder {
    factory: ModelFactory,
    context: Expression,
}

impl ExpressionBuilder {
    #[must_use]
    pub fn new(factory: ModelFactory, context: impl Into<Expression>) -> Self {
        Self {
            factory,
            context: context.into(),
        }
    }

    fn wrap(self, expression: impl Into<Expression>) -> Self {
        Self {
            factory: self.factory,
            context: expression.into(),
        }
    }

    /// The expression built so far.
    #[must_use]
    pub fn to_expression(&self) -> Expression {
        self.context.clone()
    }

    #[must_use]
    pub fn into_expression(self) -> Expression {
        self.context
    }

    /// `expression;`
    #[must_use]
    pub fn to_statement(&self) -> Arc<ExpressionStatement> {
        self.factory.new_expression_statement(self.to_expression())
    }

    /// `return expression;`
    #[must_use]
    pub fn to_return_statement(&self) -> Arc<ReturnStatement> {
        self.factory.new_return_statement(Some(self.to_expression()))
    }

    /// `expression operator right`
    #[must_use]
    pub fn apply(self, operator: InfixOperator, right: impl Into<Expression>) -> Self {
        let infix = self
            .factory
            .new_infix_expression(self.to_expression(), operator, right);
        self.wrap(infix)
    }

    /// `operator expression`
    #[must_use]
    pub fn unary(self, operator: UnaryOperator) -> Self {
        let unary = self
            .factory
            .new_unary_expression(operator, self.to_expression());
        self.wrap(unary)
    }

    /// `expression operator`
    #[must_use]
    pub fn postfix(self, operator: PostfixOperator) -> Self {
        let postfix = self
            .factory
            .new_postfix_expression(self.to_expression(), operator);
        self.wrap(postfix)
    }

    /// `expression = right_hand_side`
    #[must_use]
    pub fn assign_from(self, right_hand_side: impl Into<Expression>) -> Self {
        self.assign_with(InfixOperator::Assign, right_hand_side)
    }

    /// A compound assignment such as `expression += right_hand_side`.
    #[must_use]
    pub fn assign_with(self, operator: InfixOperator, right_hand_side: impl Into<Expression>) -> Self {
        let assignment = self.factory.new_assignment_expression(
            self.to_expression(),
            operator,
            right_hand_side,
        );
        self.wrap(assignment)
    }

    /// `(ty) expression`
    #[must_use]
    pub fn cast_to(self, ty: impl Into<Type>) -> Self {
        let cast = self.factory.new_cast_expression(ty, self.to_expression());
        self.wrap(cast)
    }

    /// `expression instanceof ty`
    #[must_use]
    pub fn instance_of(self, ty: impl Into<Type>) -> Self {
        let test = self
            .factory
            .new_instanceof_expression(self.to_expression(), ty);
        self.wrap(test)
    }

    /// `expression.name`
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidIdentifier`] if `name` is not an identifier.
    pub fn field(self, name: &str) -> Result<Self, ModelError> {
        let name = self.factory.new_simple_name(name)?;
        Ok(self.field_name(name))
    }

    #[must_use]
    pub fn field_name(self, name: Arc<SimpleName>) -> Self {
        let access = self
            .factory
            .new_field_access_expression(self.to_expression(), name);
        self.wrap(access)
    }

    /// `expression[index]`
    #[must_use]
    pub fn array(self, index: impl Into<Expression>) -> Self {
        let access = self
            .factory
            .new_array_access_expression(self.to_expression(), index);
        self.wrap(access)
    }

    /// `expression[index]` with a constant index.
    ///
    /// # Errors
    ///
    /// Propagates literal construction errors.
    pub fn array_at(self, index: i32) -> Result<Self, ModelError> {
        let index = models::to_literal(self.factory, &index)?;
        Ok(self.array(index))
    }

    /// `expression[variable]` where `variable` is dotted text.
    ///
    /// # Errors
    ///
    /// See [`models::to_name`].
    pub fn array_named(self, index: &str) -> Result<Self, ModelError> {
        let index = models::to_name(self.factory, index)?;
        Ok(self.array(index))
    }

    /// `expression.name(arguments)`
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidIdentifier`] if `name` is not an identifier.
    pub fn method(self, name: &str, arguments: Vec<Expression>) -> Result<Self, ModelError> {
        let name = self.factory.new_simple_name(name)?;
        Ok(self.method_with(Vec::new(), name, arguments))
    }

    /// `expression.<type_arguments>name(arguments)`
    #[must_use]
    pub fn method_with(
        self,
        type_arguments: Vec<Type>,
        name: Arc<SimpleName>,
        arguments: Vec<Expression>,
    ) -> Self {
        let invocation = self.factory.new_method_invocation_expression(
            Some(self.to_expression()),
            type_arguments,
            name,
            arguments,
        );
        self.wrap(invocation)
    }
}
