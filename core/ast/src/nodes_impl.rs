//! Convenience methods and conversions on nodes and category unions.

use std::sync::Arc;

use crate::nodes::{
    AnnotationDeclaration, Annotation, ArrayType, Attribute, ClassDeclaration, DocElement,
    EnumDeclaration, Expression, InterfaceDeclaration, MarkerAnnotation, ModifierKind, Name,
    NormalAnnotation, QualifiedName, SimpleName, SingleElementAnnotation, Type,
    TypeBodyDeclaration, TypeDeclaration,
};

/// Conversions that wrap a node in two layers of category unions.
macro_rules! lift {
    ($target:ident :: $arm:ident ($via:ident) <= $($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for $target {
                fn from(value: $source) -> Self {
                    $target::$arm($via::from(value))
                }
            }
        )+
    };
}

lift!(Expression::Name(Name) <= Arc<SimpleName>, Arc<QualifiedName>);
lift!(DocElement::Name(Name) <= Arc<SimpleName>, Arc<QualifiedName>);
lift!(Attribute::Annotation(Annotation) <=
    Arc<MarkerAnnotation>,
    Arc<NormalAnnotation>,
    Arc<SingleElementAnnotation>,
);
lift!(TypeBodyDeclaration::Type(TypeDeclaration) <=
    Arc<ClassDeclaration>,
    Arc<InterfaceDeclaration>,
    Arc<EnumDeclaration>,
    Arc<AnnotationDeclaration>,
);

impl SimpleName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.token()
    }
}

impl Name {
    /// The last identifier of the name.
    #[must_use]
    pub fn simple_name(&self) -> &Arc<SimpleName> {
        match self {
            Name::Simple(simple) => simple,
            Name::Qualified(qualified) => qualified.name(),
        }
    }

    /// Everything but the last identifier, if the name is qualified.
    #[must_use]
    pub fn qualifier(&self) -> Option<&Name> {
        match self {
            Name::Simple(_) => None,
            Name::Qualified(qualified) => Some(qualified.qualifier()),
        }
    }

    /// The identifiers of the name, outermost first.
    #[must_use]
    pub fn segments(&self) -> Vec<Arc<SimpleName>> {
        let mut segments = Vec::new();
        let mut current = self;
        loop {
            match current {
                Name::Simple(simple) => {
                    segments.push(simple.clone());
                    break;
                }
                Name::Qualified(qualified) => {
                    segments.push(qualified.name().clone());
                    current = qualified.qualifier();
                }
            }
        }
        segments.reverse();
        segments
    }

    /// The name as dotted text, e.g. `java.util.Map`.
    #[must_use]
    pub fn dotted(&self) -> String {
        self.segments()
            .iter()
            .map(|segment| segment.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl ArrayType {
    /// Number of array dimensions, counting nested array component types.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        let mut dimensions = 1;
        let mut component = self.component_type();
        while let Type::Array(array) = component {
            dimensions += 1;
            component = array.component_type();
        }
        dimensions
    }

    /// The innermost non-array component type.
    #[must_use]
    pub fn element_type(&self) -> &Type {
        let mut component = self.component_type();
        while let Type::Array(array) = component {
            component = array.component_type();
        }
        component
    }
}

impl Attribute {
    #[must_use]
    pub fn modifier_kind(&self) -> Option<ModifierKind> {
        match self {
            Attribute::Modifier(modifier) => Some(modifier.modifier_kind()),
            Attribute::Annotation(_) => None,
        }
    }
}

impl TypeDeclaration {
    #[must_use]
    pub fn name(&self) -> &Arc<SimpleName> {
        match self {
            TypeDeclaration::Class(declaration) => declaration.name(),
            TypeDeclaration::Interface(declaration) => declaration.name(),
            TypeDeclaration::Enum(declaration) => declaration.name(),
            TypeDeclaration::Annotation(declaration) => declaration.name(),
        }
    }

    #[must_use]
    pub fn modifiers(&self) -> &[Attribute] {
        match self {
            TypeDeclaration::Class(declaration) => declaration.modifiers(),
            TypeDeclaration::Interface(declaration) => declaration.modifiers(),
            TypeDeclaration::Enum(declaration) => declaration.modifiers(),
            TypeDeclaration::Annotation(declaration) => declaration.modifiers(),
        }
    }

    /// Returns `true` if the declaration carries the `public` modifier.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.modifiers()
            .iter()
            .any(|attribute| attribute.modifier_kind() == Some(ModifierKind::Public))
    }
}
