use std::fs;
use std::sync::Arc;

use jmodel_ast::nodes::{
    Attribute, ImportKind, ModifierKind, Name, PackageDeclaration, TypeBodyDeclaration,
};
use jmodel_ast::render;
use jmodel_imports::{ImportBuilder, ImportStrategy};
use jmodel_util::{Filer, to_name};
use pretty_assertions::assert_eq;

use crate::utils::{F, name};

fn package(text: &str) -> Arc<PackageDeclaration> {
    let name: Name = to_name(F, text).unwrap();
    F.new_package_declaration(None, vec![], name)
}

fn field(builder: &mut ImportBuilder, ty: &str, variable: &str) -> TypeBodyDeclaration {
    let private: Attribute = F.new_modifier(ModifierKind::Private).into();
    F.new_field_declaration(
        None,
        vec![private],
        builder.to_type(ty).unwrap(),
        vec![F.new_variable_declarator(name(variable), 0, None).unwrap()],
    )
    .unwrap()
    .into()
}

#[test]
fn test_generated_unit_is_written_with_its_imports() {
    let package = package("com.example");
    let mut builder = ImportBuilder::new(F, Some(package.clone()), ImportStrategy::TopLevel);

    let members = vec![
        field(&mut builder, "java.util.List<com.example.Item>", "items"),
        field(&mut builder, "java.util.Map<String, com.other.Item>", "index"),
        field(&mut builder, "java.util.Map.Entry<String, Integer>", "last"),
        field(&mut builder, "java.lang.StringBuilder", "buffer"),
    ];
    let public: Attribute = F.new_modifier(ModifierKind::Public).into();
    let class = F.new_class_declaration(
        None,
        vec![public],
        name("Registry"),
        vec![],
        None,
        vec![],
        members,
    );
    let unit = F.new_compilation_unit(
        Some(package),
        builder.to_import_declarations(),
        vec![class.into()],
        vec![],
    );

    let expected = "\
package com.example;

import java.util.List;
import java.util.Map;

public class Registry {
    private List<Item> items;

    private Map<String, com.other.Item> index;

    private Map.Entry<String, Integer> last;

    private StringBuilder buffer;
}
";
    assert_eq!(render(&*unit).unwrap(), expected);

    let root = tempfile::tempdir().unwrap();
    let filer = Filer::new(root.path());
    let path = filer.write(&unit).unwrap();
    assert_eq!(path, root.path().join("com").join("example").join("Registry.java"));
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_colliding_simple_names_stay_qualified() {
    let mut builder = ImportBuilder::new(F, Some(package("app")), ImportStrategy::TopLevel);
    let first = builder.to_type("com.example.Foo").unwrap();
    let second = builder.to_type("com.other.Foo").unwrap();
    let again = builder.to_type("com.example.Foo").unwrap();

    assert_eq!(render(&first).unwrap(), "Foo");
    assert_eq!(render(&second).unwrap(), "com.other.Foo");
    assert_eq!(again, first);

    let imports = builder.to_import_declarations();
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].import_kind(), ImportKind::SingleType);
    assert_eq!(render(&*imports[0]).unwrap(), "import com.example.Foo;");
}

#[test]
fn test_strategies_differ_only_for_member_types() {
    let text = "java.util.Map.Entry<java.io.File, String>";
    let mut top = ImportBuilder::new(F, None, ImportStrategy::TopLevel);
    let mut enclosing = ImportBuilder::new(F, None, ImportStrategy::Enclosing);

    assert_eq!(render(&top.to_type(text).unwrap()).unwrap(), "Map.Entry<File, String>");
    assert_eq!(render(&enclosing.to_type(text).unwrap()).unwrap(), "Entry<File, String>");

    let dotted = |builder: &ImportBuilder| -> Vec<String> {
        builder
            .to_import_declarations()
            .iter()
            .map(|import| import.name().dotted())
            .collect()
    };
    assert_eq!(dotted(&top), vec!["java.io.File", "java.util.Map"]);
    assert_eq!(dotted(&enclosing), vec!["java.io.File", "java.util.Map.Entry"]);
}

#[test]
fn test_capitalised_package_segments_read_as_enclosing_types() {
    let mut top = ImportBuilder::new(F, None, ImportStrategy::TopLevel);
    assert_eq!(render(&top.to_type("com.Example.Foo").unwrap()).unwrap(), "Example.Foo");
    assert_eq!(
        render(&top.to_type("com.example.Outer.Inner.Deep").unwrap()).unwrap(),
        "Outer.Inner.Deep"
    );
    let imported: Vec<String> = top
        .to_import_declarations()
        .iter()
        .map(|import| import.name().dotted())
        .collect();
    assert_eq!(imported, vec!["com.Example", "com.example.Outer"]);

    let mut enclosing = ImportBuilder::new(F, None, ImportStrategy::Enclosing);
    assert_eq!(render(&enclosing.to_type("com.Example.Foo").unwrap()).unwrap(), "Foo");
    let imported: Vec<String> = enclosing
        .to_import_declarations()
        .iter()
        .map(|import| import.name().dotted())
        .collect();
    assert_eq!(imported, vec!["com.Example.Foo"]);
}
