use std::sync::Arc;

use jmodel_ast::errors::ModelError;
use jmodel_ast::nodes::{
    Attribute, Expression, ModifierKind, Name, Node, NodeKind, Statement, TypeBodyDeclaration,
};
use pretty_assertions::assert_eq;

use crate::utils::{F, int, name, ty, var};

fn private_final() -> Vec<Attribute> {
    vec![
        F.new_modifier(ModifierKind::Private).into(),
        F.new_modifier(ModifierKind::Final).into(),
    ]
}

#[test]
fn test_field_without_variables_is_rejected() {
    let result = F.new_field_declaration(None, private_final(), ty("int"), vec![]);
    assert_eq!(
        result.unwrap_err(),
        ModelError::EmptySequence {
            kind: NodeKind::FieldDeclaration,
            name: "variable_declarators",
        }
    );
}

#[test]
fn test_local_variable_without_variables_is_rejected() {
    let error = F
        .new_local_variable_declaration(vec![], ty("int"), vec![])
        .unwrap_err();
    assert!(matches!(
        error,
        ModelError::EmptySequence {
            kind: NodeKind::LocalVariableDeclaration,
            ..
        }
    ));
}

#[test]
fn test_negative_extra_dimensions_are_rejected() {
    let error = F.new_variable_declarator(name("x"), -1, None).unwrap_err();
    assert_eq!(
        error,
        ModelError::Negative {
            kind: NodeKind::VariableDeclarator,
            name: "extra_dimensions",
            value: -1,
        }
    );
    let declarator = F.new_variable_declarator(name("x"), 2, None).unwrap();
    assert_eq!(declarator.extra_dimensions(), 2);
}

#[test]
fn test_invalid_tokens_are_rejected() {
    for token in ["", "1abc", "a.b", "a b", "x-y"] {
        assert!(
            matches!(F.new_simple_name(token), Err(ModelError::InvalidIdentifier { .. })),
            "`{token}` was accepted"
        );
    }
    assert_eq!(F.new_literal("").unwrap_err(), ModelError::EmptyLiteral);
}

#[test]
fn test_too_many_dimension_expressions_are_rejected() {
    let ty = F.new_array_type(F.new_array_type(ty("int")));
    let error = F
        .new_array_creation_expression(ty.clone(), vec![int(1), int(2), int(3)], None)
        .unwrap_err();
    assert_eq!(
        error,
        ModelError::TooManyDimensions {
            expressions: 3,
            dimensions: 2,
        }
    );
    assert!(F.new_array_creation_expression(ty, vec![int(1)], None).is_ok());
}

#[test]
fn test_independently_built_fields_are_equal() {
    let build = || {
        F.new_field_declaration(
            None,
            private_final(),
            ty("java.util.List<String>"),
            vec![
                F.new_variable_declarator(name("items"), 0, None).unwrap(),
                F.new_variable_declarator(name("count"), 0, Some(int(0))).unwrap(),
            ],
        )
        .unwrap()
    };
    let first = build();
    let second = build();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
    assert_eq!(
        first.to_string(),
        "private final java.util.List<String> items, count = 0;"
    );
}

#[test]
fn test_children_are_copied_out_of_the_caller() {
    let mut statements: Vec<Statement> = vec![F.new_return_statement(Some(var("a"))).into()];
    let block = F.new_block(statements.clone());

    statements.push(F.new_empty_statement().into());
    statements[0] = F.new_return_statement(None).into();

    assert_eq!(block.statements().len(), 1);
    assert_eq!(block.to_string(), "{\n    return a;\n}");
}

#[test]
fn test_shared_children_keep_identity() {
    let shared = name("value");
    let call = F.new_method_invocation_expression(
        None,
        vec![],
        name("use"),
        vec![shared.clone().into()],
    );
    let Expression::Name(Name::Simple(argument)) = &call.arguments()[0] else {
        panic!("argument is not a simple name");
    };
    assert!(Arc::ptr_eq(argument, &shared));
}

#[test]
fn test_class_members_keep_their_order() {
    let field = F
        .new_field_declaration(
            None,
            vec![],
            ty("int"),
            vec![F.new_variable_declarator(name("a"), 0, None).unwrap()],
        )
        .unwrap();
    let method = F
        .new_method_declaration(
            None,
            vec![],
            vec![],
            ty("void"),
            name("run"),
            vec![],
            0,
            vec![],
            Some(F.new_block(vec![])),
        )
        .unwrap();
    let class = F.new_class_declaration(
        None,
        vec![],
        name("Foo"),
        vec![],
        None,
        vec![],
        vec![method.into(), field.into()],
    );
    let kinds: Vec<NodeKind> = class
        .body_declarations()
        .iter()
        .map(TypeBodyDeclaration::kind)
        .collect();
    assert_eq!(kinds, vec![NodeKind::MethodDeclaration, NodeKind::FieldDeclaration]);
}
