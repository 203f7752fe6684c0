//! Where the catalog documents live.

use crate::catalog::identity::EntryKind;
use std::path::{Path, PathBuf};

pub const WORKLOAD_DIAGRAMS_DOCUMENT: &str = "workload-diagrams.json";

/// Package root recorded by `build.rs` when the crate was compiled.
pub fn default_package_root() -> PathBuf {
    PathBuf::from(env!("HARMONY_EXAMPLES_ROOT"))
}

/// Package root and document names used to load a [`TemplateCatalog`].
///
/// Document names are joined onto `root`; absolute names replace it, which
/// lets callers point a single document somewhere else.
///
/// [`TemplateCatalog`]: crate::catalog::TemplateCatalog
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogConfig {
    pub root: PathBuf,
    pub pipelines_document: PathBuf,
    pub transforms_document: PathBuf,
    pub workload_diagrams_document: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::with_root(default_package_root())
    }
}

impl CatalogConfig {
    /// Default document names under an explicit package root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pipelines_document: PathBuf::from(EntryKind::Pipeline.document_name()),
            transforms_document: PathBuf::from(EntryKind::Transform.document_name()),
            workload_diagrams_document: PathBuf::from(WORKLOAD_DIAGRAMS_DOCUMENT),
        }
    }

    pub fn pipelines_document(mut self, name: impl Into<PathBuf>) -> Self {
        self.pipelines_document = name.into();
        self
    }

    pub fn transforms_document(mut self, name: impl Into<PathBuf>) -> Self {
        self.transforms_document = name.into();
        self
    }

    pub fn workload_diagrams_document(mut self, name: impl Into<PathBuf>) -> Self {
        self.workload_diagrams_document = name.into();
        self
    }

    pub fn pipelines_path(&self) -> PathBuf {
        self.root.join(&self.pipelines_document)
    }

    pub fn transforms_path(&self) -> PathBuf {
        self.root.join(&self.transforms_document)
    }

    pub fn workload_diagrams_path(&self) -> PathBuf {
        self.root.join(&self.workload_diagrams_document)
    }

    /// Document path for one half of the catalog.
    pub fn document_path(&self, kind: EntryKind) -> PathBuf {
        match kind {
            EntryKind::Pipeline => self.pipelines_path(),
            EntryKind::Transform => self.transforms_path(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
