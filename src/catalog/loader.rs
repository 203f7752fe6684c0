//! Reads catalog documents from disk.
//!
//! Every failure mode is surfaced here, at load time, as a
//! [`CatalogLoadError`]. Once a document has loaded, lookups against the
//! resulting map are total.

use crate::catalog::identity::EntryId;
use crate::catalog::model::{Catalog, CatalogEntry, PipelineCatalog, TransformCatalog};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors that can occur while loading a catalog document.
#[derive(Debug)]
pub enum CatalogLoadError {
    /// Nothing exists at the document path.
    NotFound { path: PathBuf },
    /// The path exists but could not be read as a file.
    Read { path: PathBuf, source: io::Error },
    /// The contents are not valid JSON.
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The JSON is well formed but does not have the catalog shape.
    Schema { path: PathBuf, detail: String },
}

impl CatalogLoadError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            CatalogLoadError::NotFound { path }
            | CatalogLoadError::Read { path, .. }
            | CatalogLoadError::Decode { path, .. }
            | CatalogLoadError::Schema { path, .. } => path,
        }
    }
}

impl fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogLoadError::NotFound { path } => {
                write!(f, "File not found: {}", path.display())
            }
            CatalogLoadError::Read { path, source } => {
                write!(f, "Failed to read file: {} ({source})", path.display())
            }
            CatalogLoadError::Decode { path, source } => {
                write!(f, "Failed to decode JSON in {}: {source}", path.display())
            }
            CatalogLoadError::Schema { path, detail } => {
                write!(f, "Unexpected catalog shape in {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogLoadError::Read { source, .. } => Some(source),
            CatalogLoadError::Decode { source, .. } => Some(source),
            CatalogLoadError::NotFound { .. } | CatalogLoadError::Schema { .. } => None,
        }
    }
}

/// Read a JSON document and require an object at the top level.
pub fn load_json_object(path: &Path) -> Result<Map<String, Value>, CatalogLoadError> {
    expect_object(path, load_json_value(path)?)
}

fn expect_object(path: &Path, value: Value) -> Result<Map<String, Value>, CatalogLoadError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CatalogLoadError::Schema {
            path: path.to_path_buf(),
            detail: format!("expected object, got {}", json_type_name(&other)),
        }),
    }
}

/// Read and decode a JSON document of any shape.
pub fn load_json_value(path: &Path) -> Result<Value, CatalogLoadError> {
    let data = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CatalogLoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&data).map_err(|source| CatalogLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a pipeline catalog document.
pub fn load_pipelines(path: &Path) -> Result<PipelineCatalog, CatalogLoadError> {
    pipelines_from_value(path, load_json_value(path)?)
}

/// Load a transform catalog document.
pub fn load_transforms(path: &Path) -> Result<TransformCatalog, CatalogLoadError> {
    transforms_from_value(path, load_json_value(path)?)
}

/// Decode an already-parsed pipeline document; `path` is only used in errors.
pub fn pipelines_from_value(
    path: &Path,
    document: Value,
) -> Result<PipelineCatalog, CatalogLoadError> {
    entries_from_value(path, document)
}

/// Decode an already-parsed transform document; `path` is only used in errors.
pub fn transforms_from_value(
    path: &Path,
    document: Value,
) -> Result<TransformCatalog, CatalogLoadError> {
    entries_from_value(path, document)
}

/// Load the optional workload diagram document.
///
/// A missing file yields `None`; the payload itself is passed through
/// without any shape checks.
pub fn load_workload_diagrams(path: &Path) -> Result<Option<Value>, CatalogLoadError> {
    match load_json_value(path) {
        Ok(value) => Ok(Some(value)),
        Err(CatalogLoadError::NotFound { .. }) => {
            debug!(path = %path.display(), "no workload diagram document");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn entries_from_value<E>(path: &Path, document: Value) -> Result<Catalog<E>, CatalogLoadError>
where
    E: CatalogEntry + DeserializeOwned,
{
    let document = expect_object(path, document)?;
    let mut catalog = Catalog::new();
    for (id, raw) in document {
        let entry: E = serde_json::from_value(raw).map_err(|err| CatalogLoadError::Schema {
            path: path.to_path_buf(),
            detail: format!("{} '{id}' is malformed: {err}", E::KIND),
        })?;
        if entry.declared_kind() != E::KIND {
            return Err(CatalogLoadError::Schema {
                path: path.to_path_buf(),
                detail: format!(
                    "'{id}' declares type '{}', expected '{}'",
                    entry.declared_kind(),
                    E::KIND
                ),
            });
        }
        catalog.insert(EntryId(id), entry);
    }

    let kind = E::KIND;
    debug!(
        path = %path.display(),
        kind = %kind,
        entries = catalog.len(),
        "loaded catalog document"
    );
    Ok(catalog)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
