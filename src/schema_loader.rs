//! JSON Schema contracts for the catalog documents.
//!
//! The schemas under `schema/` describe the latest catalog shape (tags
//! required, categories and directory optional). They are stricter than the
//! loader, which also accepts the older categories-only entries.

use crate::catalog::EntryKind;
use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const SCHEMA_DIR: &str = "schema";

/// Location of the schema for one half of the catalog under `root`.
pub fn schema_path(root: &Path, kind: EntryKind) -> PathBuf {
    let name = match kind {
        EntryKind::Pipeline => "pipelines.schema.json",
        EntryKind::Transform => "transforms.schema.json",
    };
    root.join(SCHEMA_DIR).join(name)
}

/// Compiled schema for one catalog document.
pub struct CatalogSchema {
    kind: EntryKind,
    compiled: JSONSchema,
}

impl CatalogSchema {
    /// Load the schema for `kind` from the package root.
    pub fn for_kind(root: &Path, kind: EntryKind) -> Result<Self> {
        Self::load(&schema_path(root, kind), kind)
    }

    pub fn load(path: &Path, kind: EntryKind) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
        let raw: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&raw, kind).with_context(|| format!("compiling schema {}", path.display()))
    }

    pub fn compile(raw: &Value, kind: EntryKind) -> Result<Self> {
        // The compile error borrows `raw`, so flatten it to text here.
        let compiled = JSONSchema::compile(raw).map_err(|err| anyhow!("{err}"))?;
        Ok(Self { kind, compiled })
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Validate a raw catalog document, returning every violation.
    ///
    /// An empty list means the document conforms.
    pub fn violations(&self, document: &Value) -> Vec<String> {
        match self.compiled.validate(document) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| {
                    let pointer = err.instance_path.to_string();
                    if pointer.is_empty() {
                        err.to_string()
                    } else {
                        format!("{pointer}: {err}")
                    }
                })
                .collect(),
        }
    }
}
