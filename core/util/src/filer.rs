//! Writing compilation units below a source root.
//!
//! A unit in package `com.example` whose primary type is `Foo` is written to
//! `<root>/com/example/Foo.java`. A unit without type declarations is
//! written as `package-info.java`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use jmodel_ast::emitter::{EmitOptions, emit};
use jmodel_ast::nodes::{CompilationUnit, PackageDeclaration, TypeDeclaration};
use tracing::info;

const EXTENSION: &str = "java";
const PACKAGE_INFO: &str = "package-info.java";

/// Returns the type a compilation unit is named after: the first `public`
/// type, or the first type if none is public.
#[must_use]
pub fn find_primary_type(unit: &CompilationUnit) -> Option<&TypeDeclaration> {
    let declarations = unit.type_declarations();
    declarations
        .iter()
        .find(|declaration| declaration.is_public())
        .or_else(|| declarations.first())
}

#[derive(Debug, Clone)]
pub struct Filer {
    root: PathBuf,
    options: EmitOptions,
}

impl Filer {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_options(root, EmitOptions::default())
    }

    #[must_use]
    pub fn with_options(root: impl Into<PathBuf>, options: EmitOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The folder of `package`, or the root for the default package.
    #[must_use]
    pub fn folder_for(&self, package: Option<&PackageDeclaration>) -> PathBuf {
        let mut folder = self.root.clone();
        if let Some(package) = package {
            for segment in package.name().segments() {
                folder.push(segment.as_str());
            }
        }
        folder
    }

    /// The file `unit` is written to.
    #[must_use]
    pub fn path_for(&self, unit: &CompilationUnit) -> PathBuf {
        let folder = self.folder_for(unit.package_declaration().as_deref());
        match find_primary_type(unit) {
            Some(primary) => folder
                .join(primary.name().as_str())
                .with_extension(EXTENSION),
            None => folder.join(PACKAGE_INFO),
        }
    }

    /// Renders `unit` and writes it to [`Filer::path_for`], creating missing
    /// folders. Returns the written path.
    ///
    /// # Errors
    ///
    /// Fails if the unit cannot be rendered or the file cannot be written.
    pub fn write(&self, unit: &CompilationUnit) -> anyhow::Result<PathBuf> {
        let path = self.path_for(unit);
        let text = emit(unit, &self.options).context("failed to render compilation unit")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote compilation unit");
        Ok(path)
    }
}
