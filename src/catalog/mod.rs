//! Example catalog wiring.
//!
//! This module wraps `pipelines.json`, `transforms.json`, and the optional
//! `workload-diagrams.json` at the package root. Types here mirror the
//! document fields; callers load a `TemplateCatalog` once and use it (and its
//! `PathResolver`) for lookups.

pub mod config;
pub mod identity;
pub mod index;
pub mod loader;
pub mod model;
pub mod resolver;

pub use config::{CatalogConfig, WORKLOAD_DIAGRAMS_DOCUMENT, default_package_root};
pub use identity::{EntryId, EntryKind};
pub use index::TemplateCatalog;
pub use loader::{
    CatalogLoadError, load_json_object, load_json_value, load_pipelines, load_transforms,
    load_workload_diagrams, pipelines_from_value, transforms_from_value,
};
pub use model::{
    Catalog, CatalogEntry, PipelineCatalog, PipelineEntry, TransformCatalog, TransformEntry,
    UseCase,
};
pub use resolver::{PathResolver, template_path};
