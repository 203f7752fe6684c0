// Drives the harmony-catalog binary end to end.
mod support;

use anyhow::Result;
use serde_json::{Value, json};
use std::process::Command;
use support::{catalog_binary, repo_root, run_command, scratch_package, write_template};

#[test]
fn list_prints_both_halves() -> Result<()> {
    let mut cmd = Command::new(catalog_binary());
    cmd.arg("list");
    let output = run_command(cmd)?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("pipeline\tbasic-echo\tBasic Echo"), "{stdout}");
    assert!(stdout.lines().any(|line| line.starts_with("transform\t")));
    Ok(())
}

#[test]
fn list_filters_by_kind() -> Result<()> {
    let mut cmd = Command::new(catalog_binary());
    cmd.args(["list", "--kind", "transforms"]);
    let output = run_command(cmd)?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(!stdout.is_empty());
    assert!(stdout.lines().all(|line| line.starts_with("transform\t")), "{stdout}");
    Ok(())
}

#[test]
fn show_renders_entry_json() -> Result<()> {
    let mut cmd = Command::new(catalog_binary());
    cmd.args(["show", "basic-echo"]);
    let output = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["type"], "pipeline");
    assert_eq!(value["name"], "Basic Echo");
    Ok(())
}

#[test]
fn path_prints_resolved_template() -> Result<()> {
    let mut cmd = Command::new(catalog_binary());
    cmd.args(["path", "basic-echo", "--kind", "pipelines"]);
    let output = run_command(cmd)?;
    let stdout = String::from_utf8(output.stdout)?;
    let expected = repo_root().join("pipelines").join("basic-echo.toml");
    assert_eq!(stdout.trim_end(), expected.display().to_string());
    Ok(())
}

#[test]
fn unknown_ids_exit_nonzero() -> Result<()> {
    for args in [
        ["show", "does-not-exist"],
        ["path", "does-not-exist"],
    ] {
        let output = Command::new(catalog_binary()).args(args).output()?;
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("does-not-exist"), "{stderr}");
    }
    Ok(())
}

#[test]
fn check_passes_for_shipped_catalog() -> Result<()> {
    let mut cmd = Command::new(catalog_binary());
    cmd.arg("check");
    run_command(cmd)?;
    Ok(())
}

#[test]
fn check_reports_violations_for_bad_root() -> Result<()> {
    let package = scratch_package(
        &json!({
            "shouty": {
                "name": "Shouty",
                "description": "uppercase tag",
                "tags": ["HTTP"],
                "file": "shouty.toml",
                "type": "pipeline"
            }
        }),
        &json!({}),
    )?;
    write_template(package.path(), "pipelines", "shouty.toml")?;

    let output = Command::new(catalog_binary())
        .arg("--root")
        .arg(package.path())
        .arg("check")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("pipeline 'shouty' has non-lowercase tag: 'HTTP'"),
        "{stderr}"
    );
    assert!(stderr.contains("1 violation(s)"), "{stderr}");
    Ok(())
}

#[test]
fn missing_root_reports_load_failure() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let output = Command::new(catalog_binary())
        .arg("--root")
        .arg(dir.path())
        .arg("list")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading template catalog"), "{stderr}");
    assert!(stderr.contains("File not found:"), "{stderr}");
    Ok(())
}
