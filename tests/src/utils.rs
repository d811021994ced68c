use std::sync::Arc;

use jmodel_ast::factory::ModelFactory;
use jmodel_ast::nodes::{Expression, InfixOperator, SimpleName, Statement, Type};
use jmodel_util::models;

pub(crate) const F: ModelFactory = ModelFactory;

pub(crate) fn name(token: &str) -> Arc<SimpleName> {
    F.new_simple_name(token).unwrap()
}

pub(crate) fn var(token: &str) -> Expression {
    name(token).into()
}

pub(crate) fn int(value: i32) -> Expression {
    models::to_literal(F, &value).unwrap().into()
}

pub(crate) fn ty(text: &str) -> Type {
    models::to_type(F, text).unwrap()
}

pub(crate) fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Expression {
    F.new_infix_expression(left, operator, right).into()
}

pub(crate) fn call(target: Option<Expression>, method: &str, arguments: Vec<Expression>) -> Expression {
    F.new_method_invocation_expression(target, vec![], name(method), arguments)
        .into()
}

pub(crate) fn stmt(expression: Expression) -> Statement {
    F.new_expression_statement(expression).into()
}
