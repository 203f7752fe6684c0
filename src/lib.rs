//! Catalog of the Harmony example pipelines and transforms.
//!
//! The package ships two JSON documents at its root, `pipelines.json` and
//! `transforms.json`, describing example configurations whose template files
//! live under `pipelines/` and `transforms/`. This crate loads them into an
//! immutable [`TemplateCatalog`], answers lookups by id, and resolves an
//! entry's template path. The shipped data is additionally held to the
//! contract checked by [`check_package`].
//!
//! Load the catalog once and pass it by reference:
//!
//! ```ignore
//! let catalog = harmony_examples::TemplateCatalog::load_default()?;
//! let path = catalog.resolve_pipeline_path("basic-echo");
//! ```

pub mod catalog;
pub mod schema_loader;
pub mod validation;

pub use catalog::{
    CatalogConfig, CatalogEntry, CatalogLoadError, EntryId, EntryKind, PathResolver,
    PipelineCatalog, PipelineEntry, TemplateCatalog, TransformCatalog, TransformEntry, UseCase,
    default_package_root, load_pipelines, load_transforms, load_workload_diagrams,
};
pub use schema_loader::CatalogSchema;
pub use validation::{check_package, missing_templates, validate_catalog};
