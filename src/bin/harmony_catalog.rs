//! Inspect the example catalog from the command line.
//!
//! Usage:
//!   harmony-catalog list [--kind pipelines|transforms]
//!   harmony-catalog show basic-echo --kind pipelines
//!   harmony-catalog path fhir-to-hl7v2 --kind transforms
//!   harmony-catalog check
//!
//! `--root` points every command at another package tree.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use harmony_examples::{CatalogConfig, EntryKind, TemplateCatalog, check_package};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "harmony-catalog", version)]
#[command(about = "Look up Harmony example pipelines and transforms")]
struct Cli {
    /// Package root holding pipelines.json and transforms.json.
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List entry ids and names.
    List {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Print one entry as JSON.
    Show {
        id: String,
        #[arg(long, value_enum, default_value_t = KindArg::Pipelines)]
        kind: KindArg,
    },
    /// Print the resolved template path for an entry.
    Path {
        id: String,
        #[arg(long, value_enum, default_value_t = KindArg::Pipelines)]
        kind: KindArg,
    },
    /// Check the catalog documents against their schemas and data rules.
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Pipelines,
    Transforms,
}

impl From<KindArg> for EntryKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Pipelines => EntryKind::Pipeline,
            KindArg::Transforms => EntryKind::Transform,
        }
    }
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.root {
        Some(root) => CatalogConfig::with_root(root),
        None => CatalogConfig::default(),
    };

    match cli.command {
        Command::Check => run_check(&config),
        Command::List { kind } => list(&load(&config)?, kind.map(EntryKind::from)),
        Command::Show { id, kind } => show(&load(&config)?, &id, kind.into()),
        Command::Path { id, kind } => path(&load(&config)?, &id, kind.into()),
    }
}

fn load(config: &CatalogConfig) -> Result<TemplateCatalog> {
    TemplateCatalog::load(config).context("loading template catalog")
}

fn list(catalog: &TemplateCatalog, kind: Option<EntryKind>) -> Result<()> {
    if kind != Some(EntryKind::Transform) {
        for (id, entry) in catalog.pipelines() {
            println!("pipeline\t{id}\t{}", entry.name);
        }
    }
    if kind != Some(EntryKind::Pipeline) {
        for (id, entry) in catalog.transforms() {
            println!("transform\t{id}\t{}", entry.name);
        }
    }
    Ok(())
}

fn show(catalog: &TemplateCatalog, id: &str, kind: EntryKind) -> Result<()> {
    let rendered = match kind {
        EntryKind::Pipeline => catalog
            .get_pipeline(id)
            .map(serde_json::to_string_pretty)
            .transpose()?,
        EntryKind::Transform => catalog
            .get_transform(id)
            .map(serde_json::to_string_pretty)
            .transpose()?,
    };
    let Some(rendered) = rendered else {
        bail!("unknown {kind} '{id}'");
    };
    println!("{rendered}");
    Ok(())
}

fn path(catalog: &TemplateCatalog, id: &str, kind: EntryKind) -> Result<()> {
    let resolved = match kind {
        EntryKind::Pipeline => catalog.resolve_pipeline_path(id),
        EntryKind::Transform => catalog.resolve_transform_path(id),
    };
    let Some(resolved) = resolved else {
        bail!("no template file for {kind} '{id}'");
    };
    println!("{}", resolved.display());
    Ok(())
}

fn run_check(config: &CatalogConfig) -> Result<()> {
    let errors = check_package(config)?;
    if errors.is_empty() {
        info!(root = %config.root.display(), "catalog contract satisfied");
        return Ok(());
    }
    for error in &errors {
        eprintln!("{error}");
    }
    bail!("catalog contract check failed with {} violation(s)", errors.len());
}
