//! Deserializable representation of `pipelines.json` and `transforms.json`.
//!
//! The structs follow the latest catalog schema: `tags` is the primary
//! classification, `categories` and `directory` are optional. Older documents
//! that predate `tags` still decode (the field defaults to empty) and are
//! flagged by the contract check instead of failing the load.

use crate::catalog::identity::{EntryId, EntryKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identifier-keyed mapping for one half of the catalog.
pub type Catalog<E> = BTreeMap<EntryId, E>;
pub type PipelineCatalog = Catalog<PipelineEntry>;
pub type TransformCatalog = Catalog<TransformEntry>;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One example pipeline shipped with the package.
pub struct PipelineEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<UseCase>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Short scenario attached to a pipeline.
pub struct UseCase {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One example transform shipped with the package.
pub struct TransformEntry {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Fields shared by pipeline and transform entries.
///
/// Lets the loader, resolver, and contract check work over either half of the
/// catalog without duplicating logic per entry type.
pub trait CatalogEntry {
    /// Kind every entry of this type must declare in its `type` field.
    const KIND: EntryKind;

    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn categories(&self) -> &BTreeSet<String>;
    /// Declared `type` literal as decoded from the document.
    fn declared_kind(&self) -> EntryKind;
    /// Template filename relative to the kind's directory, if any.
    fn file(&self) -> Option<&str>;
}

impl CatalogEntry for PipelineEntry {
    const KIND: EntryKind = EntryKind::Pipeline;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    fn declared_kind(&self) -> EntryKind {
        self.kind
    }

    fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

impl CatalogEntry for TransformEntry {
    const KIND: EntryKind = EntryKind::Transform;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    fn declared_kind(&self) -> EntryKind {
        self.kind
    }

    fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pipeline_decodes_latest_schema() {
        let entry: PipelineEntry = serde_json::from_value(json!({
            "name": "Basic Echo",
            "shortDescription": "Echo requests back",
            "description": "Returns the inbound HTTP request unchanged.",
            "categories": ["http", "starter"],
            "tags": ["http", "echo"],
            "useCases": [{"title": "Smoke test", "description": "Check the proxy is up"}],
            "prerequisites": [],
            "file": "basic-echo.toml",
            "type": "pipeline"
        }))
        .unwrap();

        assert_eq!(entry.short_description.as_deref(), Some("Echo requests back"));
        assert_eq!(entry.tags, vec!["http", "echo"]);
        assert!(entry.categories.contains("starter"));
        assert_eq!(entry.use_cases[0].title, "Smoke test");
        assert_eq!(CatalogEntry::file(&entry), Some("basic-echo.toml"));
        assert_eq!(entry.declared_kind(), EntryKind::Pipeline);
    }

    #[test]
    fn pipeline_decodes_older_shape_without_tags() {
        let entry: PipelineEntry = serde_json::from_value(json!({
            "name": "Legacy",
            "description": "categories-only entry",
            "categories": ["fhir"],
            "type": "pipeline"
        }))
        .unwrap();

        assert!(entry.tags.is_empty());
        assert!(entry.file.is_none());
        assert!(entry.short_description.is_none());
    }

    #[test]
    fn transform_requires_type_literal() {
        let result = serde_json::from_value::<TransformEntry>(json!({
            "name": "FHIR to HL7",
            "description": "missing type"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn serialization_uses_catalog_field_names() {
        let entry = PipelineEntry {
            name: "n".into(),
            short_description: Some("s".into()),
            description: "d".into(),
            categories: BTreeSet::new(),
            tags: vec!["t".into()],
            use_cases: Vec::new(),
            prerequisites: Vec::new(),
            file: Some("f.toml".into()),
            directory: None,
            kind: EntryKind::Pipeline,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["shortDescription"], "s");
        assert_eq!(value["type"], "pipeline");
        assert!(value.get("useCases").is_some());
        assert!(value.get("categories").is_none());
        assert!(value.get("directory").is_none());
    }
}
