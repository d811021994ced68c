use jmodel_ast::errors::VisitError;
use jmodel_ast::nodes::{
    Expression, InfixExpression, InfixOperator, Literal, Name, Node, NodeKind, SimpleName,
    StrictVisitor,
};
use rustc_hash::FxHashMap;

use crate::utils::{call, infix, int, var};

/// Evaluates integer arithmetic over literals and bound variables.
struct Evaluator<'a> {
    bindings: &'a FxHashMap<&'static str, i64>,
}

impl StrictVisitor<()> for Evaluator<'_> {
    type Output = i64;
    type Error = anyhow::Error;

    fn visit_literal(&mut self, node: &Literal, (): ()) -> anyhow::Result<i64> {
        Ok(node.token().parse()?)
    }

    fn visit_simple_name(&mut self, node: &SimpleName, (): ()) -> anyhow::Result<i64> {
        self.bindings
            .get(node.as_str())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("`{}` is unbound", node.as_str()))
    }

    fn visit_infix_expression(&mut self, node: &InfixExpression, (): ()) -> anyhow::Result<i64> {
        let left = node.left_operand().accept(self, ())?;
        let right = node.right_operand().accept(self, ())?;
        Ok(match node.operator() {
            InfixOperator::Plus => left + right,
            InfixOperator::Minus => left - right,
            InfixOperator::Times => left * right,
            other => anyhow::bail!("unsupported operator {}", other.symbol()),
        })
    }
}

fn bindings() -> FxHashMap<&'static str, i64> {
    FxHashMap::from_iter([("x", 4), ("y", 10)])
}

#[test]
fn test_partial_visitor_handles_its_kinds() {
    let bindings = bindings();
    let mut evaluator = Evaluator {
        bindings: &bindings,
    };
    let expression = infix(
        infix(var("x"), InfixOperator::Times, int(3)),
        InfixOperator::Minus,
        var("y"),
    );
    assert_eq!(expression.accept(&mut evaluator, ()).unwrap(), 2);
}

#[test]
fn test_partial_visitor_rejects_other_kinds() {
    let bindings = bindings();
    let mut evaluator = Evaluator {
        bindings: &bindings,
    };
    let expression = infix(int(1), InfixOperator::Plus, call(None, "next", vec![]));
    let error = expression.accept(&mut evaluator, ()).unwrap_err();
    assert_eq!(
        error.downcast_ref::<VisitError>(),
        Some(&VisitError::Unimplemented(NodeKind::MethodInvocationExpression))
    );
}

#[test]
fn test_visitor_errors_propagate() {
    let bindings = bindings();
    let mut evaluator = Evaluator {
        bindings: &bindings,
    };
    let error = var("z").accept(&mut evaluator, ()).unwrap_err();
    assert_eq!(error.to_string(), "`z` is unbound");
    assert!(error.downcast_ref::<VisitError>().is_none());
}

/// Collects every simple name in the order it is first reached.
#[derive(Default)]
struct NameCollector {
    names: Vec<String>,
}

impl StrictVisitor<()> for NameCollector {
    type Output = ();
    type Error = VisitError;

    fn visit_simple_name(&mut self, node: &SimpleName, (): ()) -> Result<(), VisitError> {
        self.names.push(node.as_str().to_string());
        Ok(())
    }

    fn visit_infix_expression(&mut self, node: &InfixExpression, (): ()) -> Result<(), VisitError> {
        node.left_operand().accept(self, ())?;
        node.right_operand().accept(self, ())
    }

    fn visit_literal(&mut self, _: &Literal, (): ()) -> Result<(), VisitError> {
        Ok(())
    }
}

#[test]
fn test_unions_dispatch_to_the_wrapped_kind() {
    let expression: Expression = infix(
        var("a"),
        InfixOperator::Plus,
        infix(int(1), InfixOperator::Times, var("b")),
    );
    let mut collector = NameCollector::default();
    expression.accept(&mut collector, ()).unwrap();
    assert_eq!(collector.names, vec!["a", "b"]);

    let Expression::Name(name @ Name::Simple(_)) = var("c") else {
        unreachable!();
    };
    assert_eq!(name.kind(), NodeKind::SimpleName);
    name.accept(&mut collector, ()).unwrap();
    assert_eq!(collector.names, vec!["a", "b", "c"]);
}
