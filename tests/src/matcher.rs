use jmodel_ast::digest::compute;
use jmodel_ast::matcher::{equal, try_equal};
use jmodel_ast::nodes::{Expression, InfixOperator, Node, NodeKind, Type};
use jmodel_ast::traits::CommentTrait;
use rustc_hash::FxHashSet;

use crate::utils::{F, call, infix, int, name, ty, var};

fn samples() -> Vec<Expression> {
    vec![
        var("a"),
        int(1),
        infix(var("a"), InfixOperator::Plus, int(1)),
        infix(int(1), InfixOperator::Plus, var("a")),
        infix(var("a"), InfixOperator::Minus, int(1)),
        call(Some(var("list")), "add", vec![var("a")]),
        call(Some(var("list")), "add", vec![var("a"), var("b")]),
        call(None, "add", vec![var("a")]),
        F.new_cast_expression(ty("long"), var("a")).into(),
        F.new_cast_expression(ty("java.util.List<String>"), var("a")).into(),
    ]
}

#[test]
fn test_equality_is_reflexive_and_symmetric() {
    let left = samples();
    let right = samples();
    for (i, a) in left.iter().enumerate() {
        assert!(equal(a, a), "{a} is not equal to itself");
        for (j, b) in right.iter().enumerate() {
            assert_eq!(equal(a, b), i == j, "{a} vs {b}");
            assert_eq!(equal(a, b), equal(b, a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_equal_trees_hash_equally() {
    let left = samples();
    let right = samples();
    for (a, b) in left.iter().zip(&right) {
        assert!(equal(a, b));
        assert_eq!(compute(a), compute(b), "{a}");
    }

    let set: FxHashSet<Expression> = left.into_iter().chain(right).collect();
    assert_eq!(set.len(), samples().len());
}

#[test]
fn test_kinds_never_match_across() {
    // Both render as `a.Foo`.
    let named = ty("a.Foo");
    let qualified: Type = F.new_qualified_type(ty("a"), name("Foo")).into();
    assert_eq!(named.to_string(), qualified.to_string());
    assert_eq!(named.kind(), NodeKind::NamedType);
    assert_eq!(qualified.kind(), NodeKind::QualifiedType);
    assert!(!equal(&named, &qualified));
    assert_eq!(try_equal(&named, &qualified), Ok(false));
}

#[test]
fn test_absent_and_present_children_differ() {
    let bare = F.new_return_statement(None);
    let valued = F.new_return_statement(Some(int(0)));
    assert!(!equal(&*bare, &*valued));
    assert!(equal(&*bare, &*F.new_return_statement(None)));
}

#[test]
fn test_traits_do_not_affect_equality() {
    let plain = var("x");
    let commented = var("x");
    commented.traits().put(Some(CommentTrait::new(["note"])));
    assert_eq!(plain, commented);
    assert_eq!(compute(&plain), compute(&commented));

    commented.traits().put::<CommentTrait>(None);
    assert!(commented.traits().is_empty());
}

#[test]
fn test_type_unions_compare_structurally() {
    let parsed: Type = ty("java.util.Map<K, V[]>");
    let built: Type = F
        .new_parameterized_type(
            F.new_named_type(F.new_qualified_name(
                F.new_qualified_name(name("java"), name("util")),
                name("Map"),
            )),
            vec![
                F.new_named_type(name("K")).into(),
                F.new_array_type(F.new_named_type(name("V"))).into(),
            ],
        )
        .unwrap()
        .into();
    assert_eq!(parsed, built);
    assert_eq!(compute(&parsed), compute(&built));
}

#[test]
fn test_kind_registry_is_complete() {
    assert_eq!(NodeKind::ALL.len(), 81);
    let distinct: FxHashSet<NodeKind> = NodeKind::ALL.iter().copied().collect();
    assert_eq!(distinct.len(), NodeKind::ALL.len());
}
