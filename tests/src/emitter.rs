use jmodel_ast::digest::compute;
use jmodel_ast::emitter::{EmitOptions, emit, render};
use jmodel_ast::nodes::{Expression, InfixOperator, PostfixOperator, Statement, UnaryOperator};
use jmodel_util::ExpressionBuilder;
use pretty_assertions::assert_eq;

use crate::utils::{F, call, infix, int, name, stmt, ty, var};

#[test]
fn test_builder_and_factory_agree() {
    let built = ExpressionBuilder::new(F, F.new_this(None))
        .field("items")
        .unwrap()
        .method("add", vec![var("value")])
        .unwrap()
        .to_statement();

    let access = F.new_field_access_expression(F.new_this(None), name("items"));
    let direct = stmt(call(Some(access.into()), "add", vec![var("value")]));

    let built: Statement = built.into();
    assert_eq!(built, direct);
    assert_eq!(compute(&built), compute(&direct));
    assert_eq!(render(&built).unwrap(), render(&direct).unwrap());
    assert_eq!(render(&built).unwrap(), "this.items.add(value);");
}

#[test]
fn test_grouping_follows_the_tree() {
    let a = || var("a");
    let b = || var("b");
    let c = || var("c");

    let grouped = infix(infix(a(), InfixOperator::Plus, b()), InfixOperator::Times, c());
    assert_eq!(render(&grouped).unwrap(), "(a + b) * c");

    let natural = infix(a(), InfixOperator::Plus, infix(b(), InfixOperator::Times, c()));
    assert_eq!(render(&natural).unwrap(), "a + b * c");

    // Explicit parentheses stay as written.
    let explicit: Expression = F
        .new_parenthesized_expression(infix(b(), InfixOperator::Times, c()))
        .into();
    let redundant = infix(a(), InfixOperator::Plus, explicit);
    assert_eq!(render(&redundant).unwrap(), "a + (b * c)");
}

#[test]
fn test_builder_chains_respect_precedence() {
    let negated_sum = ExpressionBuilder::new(F, var("a"))
        .apply(InfixOperator::Plus, int(1))
        .unary(UnaryOperator::Minus)
        .into_expression();
    assert_eq!(render(&negated_sum).unwrap(), "-(a + 1)");

    let counter = ExpressionBuilder::new(F, var("counts"))
        .array_named("i")
        .unwrap()
        .postfix(PostfixOperator::Increment)
        .to_statement();
    assert_eq!(render(&*counter).unwrap(), "counts[i]++;");

    let test = ExpressionBuilder::new(F, var("item"))
        .instance_of(ty("String"))
        .unary(UnaryOperator::Not)
        .into_expression();
    assert_eq!(render(&test).unwrap(), "!(item instanceof String)");
}

#[test]
fn test_rendering_is_deterministic() {
    let body: Vec<Statement> = vec![
        stmt(call(None, "open", vec![])),
        stmt(
            ExpressionBuilder::new(F, var("total"))
                .assign_with(InfixOperator::Plus, infix(var("x"), InfixOperator::Times, int(2)))
                .into_expression(),
        ),
        F.new_return_statement(Some(var("total"))).into(),
    ];
    let block = F.new_block(body);
    let first = render(&*block).unwrap();
    for _ in 0..8 {
        assert_eq!(render(&*block).unwrap(), first);
    }
    assert_eq!(first, "{\n    open();\n    total += x * 2;\n    return total;\n}");
}

#[test]
fn test_options_only_change_whitespace() {
    let block = F.new_block(vec![
        F.new_if_statement(var("ready"), F.new_block(vec![stmt(call(None, "go", vec![]))]), None)
            .into(),
    ]);
    let options = EmitOptions {
        indent: "  ".to_string(),
        line_separator: "\r\n".to_string(),
        ..EmitOptions::default()
    };
    let text = emit(&*block, &options).unwrap();
    assert_eq!(text, "{\r\n  if (ready) {\r\n    go();\r\n  }\r\n}");

    let squashed: String = text.split_whitespace().collect();
    let default: String = render(&*block).unwrap().split_whitespace().collect();
    assert_eq!(squashed, default);
}

#[test]
fn test_reference_casts_wrap_prefix_operands() {
    for (operator, expected) in [
        (UnaryOperator::Increment, "(Foo) (++x)"),
        (UnaryOperator::Decrement, "(Foo) (--x)"),
        (UnaryOperator::Minus, "(Foo) (-x)"),
        (UnaryOperator::Not, "(Foo) !x"),
    ] {
        let cast = F.new_cast_expression(ty("Foo"), F.new_unary_expression(operator, var("x")));
        assert_eq!(render(&*cast).unwrap(), expected);
    }

    let primitive = F.new_cast_expression(
        ty("int"),
        F.new_unary_expression(UnaryOperator::Increment, var("x")),
    );
    assert_eq!(render(&*primitive).unwrap(), "(int) ++x");
}

#[test]
fn test_prefix_operators_never_merge_with_literals() {
    let negated = F.new_unary_expression(UnaryOperator::Minus, int(-5));
    assert_eq!(render(&*negated).unwrap(), "- -5");

    let decremented = F.new_unary_expression(
        UnaryOperator::Minus,
        F.new_unary_expression(UnaryOperator::Decrement, var("x")),
    );
    assert_eq!(render(&*decremented).unwrap(), "- --x");

    let plain = F.new_unary_expression(UnaryOperator::Minus, int(5));
    assert_eq!(render(&*plain).unwrap(), "-5");

    let complement = F.new_unary_expression(UnaryOperator::Complement, int(-1));
    assert_eq!(render(&*complement).unwrap(), "~-1");
}
