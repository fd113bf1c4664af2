//! gomodel CLI
//!
//! # Usage
//!
//! ```bash
//! # Package hierarchy
//! gomodel ./service packages
//!
//! # All structs, first match lookup, canonical re-rendering
//! gomodel ./service list struct
//! gomodel ./service get struct User
//! gomodel ./service render method User.Rename
//! gomodel ./service render constant MaxConns --template variable
//!
//! # Whole model as JSON
//! gomodel ./service --config gomodel.yaml dump
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gomodel_ir::{
    CanonicalRenderer, EntityKind, ModelConfig, ModelError, ModelGraph, ModelSession,
    PackageModel, TemplateName, TemplateRenderer,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gomodel")]
#[command(about = "Normalized declaration model of a Go source tree", long_about = None)]
struct Cli {
    /// Root directory to discover
    root: PathBuf,

    /// YAML configuration file (version: 1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip symbolic links instead of following them
    #[arg(long)]
    no_follow_symlinks: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the package hierarchy
    Packages,

    /// List every entity of a kind
    List {
        /// struct, interface, function, method, variable, constant or import
        kind: EntityKind,
    },

    /// Print the first entity of a kind with the given name as JSON
    Get { kind: EntityKind, name: String },

    /// Re-emit the first entity of a kind with the given name
    Render {
        kind: EntityKind,
        name: String,

        /// Template to render with instead of the one matching the kind
        #[arg(long)]
        template: Option<TemplateName>,
    },

    /// Print the whole model as JSON
    Dump,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, ModelError> {
    let config = match &cli.config {
        Some(path) => ModelConfig::from_yaml(path)?,
        None => ModelConfig::default(),
    };
    let config = if cli.no_follow_symlinks {
        config.with_follow_symlinks(false)
    } else {
        config
    };
    let session = ModelSession::open(&cli.root, &config)?;
    let query = session.query();

    for diagnostic in session.diagnostics() {
        eprintln!("warning: {}", diagnostic);
    }

    match cli.command {
        Commands::Packages => {
            let graph = session.graph();
            for package in graph.packages().iter().filter(|p| p.parent.is_none()) {
                print_package(graph, package, 0);
            }
        }
        Commands::List { kind } => {
            for entity in query.list_all(kind) {
                println!("{}\t{}\t{}", entity.name(), entity.package(), entity.file_path());
            }
        }
        Commands::Get { kind, name } => match query.get_by_name(kind, &name) {
            Some(entity) => println!("{}", serde_json::to_string_pretty(&entity)?),
            None => return Ok(not_found(kind, &name)),
        },
        Commands::Render {
            kind,
            name,
            template,
        } => match query.get_by_name(kind, &name) {
            Some(entity) => {
                let renderer = CanonicalRenderer::new();
                let text = match template {
                    Some(template) => renderer.render(template, entity)?,
                    None => renderer.render_entity(entity)?,
                };
                println!("{}", text);
            }
            None => return Ok(not_found(kind, &name)),
        },
        Commands::Dump => {
            println!("{}", serde_json::to_string_pretty(session.graph())?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_package(graph: &ModelGraph, package: &PackageModel, depth: usize) {
    println!(
        "{}{} ({}, {} files)",
        "  ".repeat(depth),
        package.name,
        package.directory.display(),
        package.files.len()
    );
    for child in graph.children(package.id) {
        print_package(graph, child, depth + 1);
    }
}

fn not_found(kind: EntityKind, name: &str) -> ExitCode {
    eprintln!("no {} named '{}'", kind, name);
    ExitCode::from(2)
}
