//! Maps catalog entries to their template files.
//!
//! Resolution is purely syntactic: `<root>/<kind directory>/<file>`, always
//! keeping all three parts. There is no existence check and no cleanup of
//! `file` beyond dropping a leading root. Catalog documents are shipped with
//! the package and trusted as such; the contract check in `validation`
//! reports entries whose `file` would leave the kind directory or whose
//! template is missing.

use crate::catalog::identity::EntryKind;
use crate::catalog::index::TemplateCatalog;
use crate::catalog::model::CatalogEntry;
use std::path::{Component, Path, PathBuf};

/// Resolves entry ids to template paths under a catalog's package root.
#[derive(Clone, Copy, Debug)]
pub struct PathResolver<'a> {
    catalog: &'a TemplateCatalog,
}

impl<'a> PathResolver<'a> {
    pub fn new(catalog: &'a TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Template path for a pipeline, or `None` when the id is unknown or the
    /// entry has no backing file.
    pub fn resolve_pipeline_path(&self, id: &str) -> Option<PathBuf> {
        let entry = self.catalog.get_pipeline(id)?;
        self.resolve_entry(entry)
    }

    /// Template path for a transform; see [`Self::resolve_pipeline_path`].
    pub fn resolve_transform_path(&self, id: &str) -> Option<PathBuf> {
        let entry = self.catalog.get_transform(id)?;
        self.resolve_entry(entry)
    }

    pub fn resolve_entry<E: CatalogEntry>(&self, entry: &E) -> Option<PathBuf> {
        template_path(self.catalog.package_root(), E::KIND, entry.file())
    }
}

/// Join `root`, the kind's directory, and `file`.
///
/// `file` is appended component by component so a leading `/` (or drive
/// prefix) cannot replace the root. `..` is kept as written. Absent and empty
/// filenames resolve to `None`.
pub fn template_path(root: &Path, kind: EntryKind, file: Option<&str>) -> Option<PathBuf> {
    let file = file.filter(|name| !name.is_empty())?;
    let mut path = root.join(kind.directory());
    for component in Path::new(file).components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {}
            other => path.push(other),
        }
    }
    Some(path)
}
