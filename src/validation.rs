//! Contract checks for the shipped catalog.
//!
//! Loading only guarantees that documents decode. The checks here enforce the
//! data rules the package promises on top of that: schema conformance, a few
//! semantic rules the schema cannot express, and that every declared template
//! is actually shipped. Violations are collected
//! rather than short-circuited so one run reports every problem.

use crate::catalog::{
    CatalogConfig, CatalogEntry, EntryId, EntryKind, PathResolver, TemplateCatalog,
    load_json_value, load_workload_diagrams, pipelines_from_value, transforms_from_value,
};
use crate::schema_loader::CatalogSchema;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Component, Path};

/// Semantic checks over a loaded catalog.
pub fn validate_catalog(catalog: &TemplateCatalog) -> Vec<String> {
    let mut errors = validate_entries(catalog.pipelines());
    errors.extend(validate_entries(catalog.transforms()));

    for (id, pipeline) in catalog.pipelines() {
        for tag in &pipeline.tags {
            if tag.trim().is_empty() {
                errors.push(format!("pipeline '{id}' has an empty tag"));
            } else if !is_lowercase(tag) {
                errors.push(format!("pipeline '{id}' has non-lowercase tag: '{tag}'"));
            }
        }
    }
    errors
}

/// Load the package described by `config` and run every check.
///
/// Each document is read and parsed once: the raw value is checked against
/// its schema and then decoded into entries. Returns the combined violation
/// list; load failures are errors rather than violations because nothing
/// else can be checked without a catalog.
pub fn check_package(config: &CatalogConfig) -> Result<Vec<String>> {
    let mut errors = Vec::new();

    let pipelines_path = config.pipelines_path();
    let document = load_json_value(&pipelines_path).context("loading template catalog")?;
    errors.extend(schema_violations(config, EntryKind::Pipeline, &pipelines_path, &document)?);
    let pipelines =
        pipelines_from_value(&pipelines_path, document).context("loading template catalog")?;

    let transforms_path = config.transforms_path();
    let document = load_json_value(&transforms_path).context("loading template catalog")?;
    errors.extend(schema_violations(config, EntryKind::Transform, &transforms_path, &document)?);
    let transforms =
        transforms_from_value(&transforms_path, document).context("loading template catalog")?;

    let workload_diagrams = load_workload_diagrams(&config.workload_diagrams_path())
        .context("loading template catalog")?;
    let catalog =
        TemplateCatalog::from_parts(config.root.clone(), pipelines, transforms, workload_diagrams);

    errors.extend(validate_catalog(&catalog));
    errors.extend(missing_templates(&catalog));
    Ok(errors)
}

/// Entries whose declared template file is not present on disk.
///
/// Entries without a `file` are skipped; not every entry has a template.
pub fn missing_templates(catalog: &TemplateCatalog) -> Vec<String> {
    let resolver = catalog.resolver();
    let mut errors = missing_entry_templates(&resolver, catalog.pipelines());
    errors.extend(missing_entry_templates(&resolver, catalog.transforms()));
    errors
}

fn missing_entry_templates<E: CatalogEntry>(
    resolver: &PathResolver<'_>,
    entries: &BTreeMap<EntryId, E>,
) -> Vec<String> {
    let kind = E::KIND;
    entries
        .iter()
        .filter_map(|(id, entry)| {
            let path = resolver.resolve_entry(entry)?;
            (!path.is_file())
                .then(|| format!("{kind} '{id}' template not found: {}", path.display()))
        })
        .collect()
}

fn schema_violations(
    config: &CatalogConfig,
    kind: EntryKind,
    document_path: &Path,
    document: &Value,
) -> Result<Vec<String>> {
    let schema = CatalogSchema::for_kind(&config.root, kind)?;
    Ok(schema
        .violations(document)
        .into_iter()
        .map(|violation| format!("{}: {violation}", document_path.display()))
        .collect())
}

fn validate_entries<E: CatalogEntry>(entries: &BTreeMap<EntryId, E>) -> Vec<String> {
    let kind = E::KIND;
    let mut errors = Vec::new();
    for (id, entry) in entries {
        if entry.name().trim().is_empty() {
            errors.push(format!("{kind} '{id}' has an empty name"));
        }
        if entry.description().trim().is_empty() {
            errors.push(format!("{kind} '{id}' has an empty description"));
        }
        for category in entry.categories() {
            if !is_lowercase(category) {
                errors.push(format!(
                    "{kind} '{id}' has non-lowercase category: '{category}'"
                ));
            }
        }
        match entry.file() {
            Some(file) if file.trim().is_empty() => {
                errors.push(format!("{kind} '{id}' declares an empty file"));
            }
            Some(file) if escapes_directory(Path::new(file)) => {
                errors.push(format!(
                    "{kind} '{id}' file '{file}' resolves outside {}/",
                    kind.directory()
                ));
            }
            _ => {}
        }
    }
    errors
}

fn is_lowercase(value: &str) -> bool {
    value.to_lowercase() == value
}

fn escapes_directory(file: &Path) -> bool {
    file.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
