#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use harmony_examples::default_package_root;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn repo_root() -> PathBuf {
    default_package_root()
}

pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_harmony-catalog"))
}

/// Scratch package root holding the given pipeline and transform documents.
///
/// Schemas are copied from the repository so `check` runs against the real
/// contract.
pub fn scratch_package(pipelines: &Value, transforms: &Value) -> Result<TempDir> {
    let dir = TempDir::new().context("failed to allocate scratch package")?;
    write_document(dir.path(), "pipelines.json", pipelines)?;
    write_document(dir.path(), "transforms.json", transforms)?;

    let schema_dir = dir.path().join("schema");
    fs::create_dir_all(&schema_dir)?;
    for name in ["pipelines.schema.json", "transforms.schema.json"] {
        fs::copy(repo_root().join("schema").join(name), schema_dir.join(name))
            .with_context(|| format!("copying schema {name}"))?;
    }
    Ok(dir)
}

pub fn write_document(dir: &Path, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Create an empty template at `<dir>/<kind directory>/<file>`.
pub fn write_template(dir: &Path, kind_directory: &str, file: &str) -> Result<PathBuf> {
    let path = dir.join(kind_directory).join(file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, "").with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
