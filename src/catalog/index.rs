//! Loaded, read-only view of the example catalog.
//!
//! `TemplateCatalog` is built once from the three catalog documents and then
//! handed to whoever needs lookups. It has no mutating methods; reloading
//! means building a new value.

use crate::catalog::config::CatalogConfig;
use crate::catalog::identity::EntryId;
use crate::catalog::loader::{
    CatalogLoadError, load_pipelines, load_transforms, load_workload_diagrams,
};
use crate::catalog::model::{PipelineCatalog, PipelineEntry, TransformCatalog, TransformEntry};
use crate::catalog::resolver::PathResolver;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
/// Pipelines, transforms, and workload diagrams loaded from one package root.
pub struct TemplateCatalog {
    root: PathBuf,
    pipelines: PipelineCatalog,
    transforms: TransformCatalog,
    workload_diagrams: Option<Value>,
}

impl TemplateCatalog {
    /// Load the catalog shipped with this crate.
    pub fn load_default() -> Result<Self, CatalogLoadError> {
        Self::load(&CatalogConfig::default())
    }

    /// Load every catalog document named by `config`.
    ///
    /// Pipelines and transforms are required; the workload diagram document
    /// is optional. The first failing document aborts the load.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogLoadError> {
        let pipelines = load_pipelines(&config.pipelines_path())?;
        let transforms = load_transforms(&config.transforms_path())?;
        let workload_diagrams = load_workload_diagrams(&config.workload_diagrams_path())?;
        debug!(
            root = %config.root.display(),
            pipelines = pipelines.len(),
            transforms = transforms.len(),
            "template catalog ready"
        );
        Ok(Self::from_parts(
            config.root.clone(),
            pipelines,
            transforms,
            workload_diagrams,
        ))
    }

    /// Assemble a catalog from already-decoded maps.
    pub fn from_parts(
        root: PathBuf,
        pipelines: PipelineCatalog,
        transforms: TransformCatalog,
        workload_diagrams: Option<Value>,
    ) -> Self {
        Self {
            root,
            pipelines,
            transforms,
            workload_diagrams,
        }
    }

    /// Directory template paths are resolved against.
    pub fn package_root(&self) -> &Path {
        &self.root
    }

    pub fn pipelines(&self) -> &PipelineCatalog {
        &self.pipelines
    }

    pub fn transforms(&self) -> &TransformCatalog {
        &self.transforms
    }

    /// Workload diagram payload, passed through as decoded.
    pub fn workload_diagrams(&self) -> Option<&Value> {
        self.workload_diagrams.as_ref()
    }

    /// Look up a pipeline by id.
    ///
    /// Unknown ids return `None`; that is an expected outcome, not an error.
    pub fn get_pipeline(&self, id: &str) -> Option<&PipelineEntry> {
        self.pipelines.get(id)
    }

    /// Look up a transform by id.
    pub fn get_transform(&self, id: &str) -> Option<&TransformEntry> {
        self.transforms.get(id)
    }

    /// Pipeline ids in stable order.
    pub fn pipeline_ids(&self) -> impl Iterator<Item = &EntryId> {
        self.pipelines.keys()
    }

    /// Transform ids in stable order.
    pub fn transform_ids(&self) -> impl Iterator<Item = &EntryId> {
        self.transforms.keys()
    }

    /// Resolver over this catalog and its package root.
    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(self)
    }

    pub fn resolve_pipeline_path(&self, id: &str) -> Option<PathBuf> {
        self.resolver().resolve_pipeline_path(id)
    }

    pub fn resolve_transform_path(&self, id: &str) -> Option<PathBuf> {
        self.resolver().resolve_transform_path(id)
    }
}
