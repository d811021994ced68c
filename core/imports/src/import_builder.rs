//! Import resolution for type references.
//!
//! The resolver rewrites qualified type names to their shortest unambiguous
//! form and records the imports that make the short form valid. The first
//! type to claim a simple name wins it: later types with the same simple name
//! but a different qualified name keep their qualified form.

use std::sync::Arc;

use jmodel_ast::Node;
use jmodel_ast::factory::ModelFactory;
use jmodel_ast::nodes::{
    ArrayType, BasicType, ImportDeclaration, ImportKind, Name, NamedType, PackageDeclaration,
    ParameterizedType, QualifiedName, QualifiedType, SimpleName, StrictVisitor, Type, Wildcard,
};
use jmodel_util::models;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ImportError;

/// Package whose members are visible without an import.
const IMPLICIT_PACKAGE: &str = "java.lang";

/// How much of a member type's name is imported.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportStrategy {
    /// Imports the top-level type and refers to member types through it:
    /// `java.util.Map.Entry` becomes `Map.Entry`.
    ///
    /// A segment is taken for a type if it starts with an upper-case letter.
    #[default]
    TopLevel,
    /// Imports the named type itself: `java.util.Map.Entry` becomes `Entry`.
    Enclosing,
}

fn is_class_name(name: &SimpleName) -> bool {
    name.as_str().chars().next().is_some_and(char::is_uppercase)
}

#[derive(Debug)]
struct Resolver {
    factory: ModelFactory,
    strategy: ImportStrategy,
    imported: FxHashMap<Arc<QualifiedName>, Arc<SimpleName>>,
    used: FxHashSet<Arc<SimpleName>>,
}

impl Resolver {
    fn rewrite(&mut self, ty: &Type) -> Result<Type, ImportError> {
        Ok(ty.accept(self, ())?.unwrap_or_else(|| ty.clone()))
    }

    /// Splits `name` into the part to import and the member type segments
    /// below it.
    fn normalize(&self, name: &Name) -> (Name, Vec<Arc<SimpleName>>) {
        let mut current = name.clone();
        let mut members = Vec::new();
        if self.strategy == ImportStrategy::TopLevel {
            while let Name::Qualified(qualified) = &current
                && is_class_name(qualified.qualifier().simple_name())
            {
                members.push(qualified.name().clone());
                let parent = qualified.qualifier().clone();
                current = parent;
            }
        }
        members.reverse();
        (current, members)
    }

    fn shorten(&mut self, node: &NamedType) -> Option<Type> {
        let (head, members) = self.normalize(node.name());
        let head = match head {
            Name::Simple(simple) => {
                self.used.insert(simple);
                return None;
            }
            Name::Qualified(qualified) => qualified,
        };
        let short = if let Some(short) = self.imported.get(&head) {
            short.clone()
        } else {
            let short = head.name().clone();
            if self.used.contains(&short) {
                debug!(name = %head, "simple name already in use, keeping the qualified name");
                return None;
            }
            debug!(name = %head, "registering import");
            self.imported.insert(head.clone(), short.clone());
            self.used.insert(short.clone());
            short
        };
        let name = models::append(self.factory, short.into(), members);
        Some(self.factory.new_named_type(name).into())
    }
}

// `None` means the visited type needs no rewrite.
impl StrictVisitor<()> for Resolver {
    type Output = Option<Type>;
    type Error = ImportError;

    fn visit_array_type(&mut self, node: &ArrayType, (): ()) -> Result<Option<Type>, ImportError> {
        let Some(component) = node.component_type().accept(self, ())? else {
            return Ok(None);
        };
        Ok(Some(self.factory.new_array_type(component).into()))
    }

    fn visit_basic_type(&mut self, _: &BasicType, (): ()) -> Result<Option<Type>, ImportError> {
        Ok(None)
    }

    fn visit_named_type(&mut self, node: &NamedType, (): ()) -> Result<Option<Type>, ImportError> {
        Ok(self.shorten(node))
    }

    fn visit_parameterized_type(
        &mut self,
        node: &ParameterizedType,
        (): (),
    ) -> Result<Option<Type>, ImportError> {
        let base = node.ty().accept(self, ())?;
        let mut changed = base.is_some();
        let mut arguments = Vec::with_capacity(node.type_arguments().len());
        for argument in node.type_arguments() {
            let rewritten = argument.accept(self, ())?;
            changed |= rewritten.is_some();
            arguments.push(rewritten.unwrap_or_else(|| argument.clone()));
        }
        if !changed {
            return Ok(None);
        }
        let base = base.unwrap_or_else(|| node.ty().clone());
        Ok(Some(
            self.factory.new_parameterized_type(base, arguments)?.into(),
        ))
    }

    fn visit_qualified_type(
        &mut self,
        node: &QualifiedType,
        (): (),
    ) -> Result<Option<Type>, ImportError> {
        let Some(qualifier) = node.qualifier().accept(self, ())? else {
            return Ok(None);
        };
        let rewritten = self
            .factory
            .new_qualified_type(qualifier, node.name().clone());
        Ok(Some(rewritten.into()))
    }

    fn visit_wildcard(&mut self, node: &Wildcard, (): ()) -> Result<Option<Type>, ImportError> {
        let Some(bound) = node.type_bound() else {
            return Ok(None);
        };
        let Some(bound) = bound.accept(self, ())? else {
            return Ok(None);
        };
        let rewritten = self.factory.new_wildcard(node.bound_kind(), Some(bound));
        Ok(Some(rewritten.into()))
    }
}

/// An import session for one compilation unit.
#[derive(Debug)]
pub struct ImportBuilder {
    package: Option<Arc<PackageDeclaration>>,
    resolver: Resolver,
}

impl ImportBuilder {
    /// Starts a session for a unit in `package`, or in the default package.
    #[must_use]
    pub fn new(
        factory: ModelFactory,
        package: Option<Arc<PackageDeclaration>>,
        strategy: ImportStrategy,
    ) -> Self {
        Self {
            package,
            resolver: Resolver {
                factory,
                strategy,
                imported: FxHashMap::default(),
                used: FxHashSet::default(),
            },
        }
    }

    #[must_use]
    pub fn package_declaration(&self) -> Option<&Arc<PackageDeclaration>> {
        self.package.as_ref()
    }

    #[must_use]
    pub fn strategy(&self) -> ImportStrategy {
        self.resolver.strategy
    }

    /// Imports what `ty` refers to where possible and returns the type
    /// rewritten to the imported names. Parts that need no rewrite are
    /// shared with `ty`.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Model`] if a rewritten type cannot be built.
    pub fn resolve(&mut self, ty: &Type) -> Result<Type, ImportError> {
        self.resolver.rewrite(ty)
    }

    /// Parses `text` as a type and resolves it.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Model`] if `text` is not a type.
    pub fn to_type(&mut self, text: &str) -> Result<Type, ImportError> {
        let ty = models::to_type(self.resolver.factory, text)?;
        self.resolve(&ty)
    }

    /// The imports registered so far, ordered by kind and then by name.
    ///
    /// Types of `java.lang` and of the current package are not listed.
    #[must_use]
    pub fn to_import_declarations(&self) -> Vec<Arc<ImportDeclaration>> {
        let package = self.package.as_ref().map(|package| package.name().dotted());
        let mut imports: Vec<_> = self
            .resolver
            .imported
            .keys()
            .filter(|name| {
                let qualifier = name.qualifier().dotted();
                qualifier != IMPLICIT_PACKAGE && package.as_deref() != Some(qualifier.as_str())
            })
            .map(|name| {
                self.resolver
                    .factory
                    .new_import_declaration(ImportKind::SingleType, name.clone())
            })
            .collect();
        imports.sort_by_cached_key(|import| (import.import_kind(), import.name().dotted()));
        imports
    }
}
