//! # CLI Layer
//!
//! The only place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the logging subscriber
//! - Handles argument parsing
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load [`RwsConfig`] and resolve the output mode
//! 3. **Dispatch**: Route each subcommand to its handler
//! 4. **Output Formatting**: Delegate to `render.rs`

use super::render;
use super::setup::{Cli, Commands, QueryArgs};
use anyhow::{Context, Result};
use clap::Parser;
use rwsxml::config::RwsConfig;
use rwsxml::constants::XML_ATTRIBUTES;
use rwsxml::{Document, XmlAttribute};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Settings shared by every handler.
struct AppState {
    config: RwsConfig,
    json: bool,
    color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config =
        RwsConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config, cli.verbose);

    let state = AppState {
        json: cli.json || config.json,
        color: console::colors_enabled(),
        config,
    };

    match &cli.command {
        Commands::Nodes(query) => handle_nodes(&state, query),
        Commands::Text(query) => handle_text(&state, query),
        Commands::Attributes => handle_attributes(&state),
        Commands::Config => handle_config(&state),
    }
}

/// `RUST_LOG` wins over the configured filter; `-v` overrides both.
fn init_logging(config: &RwsConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_document(path: &Path) -> Result<Document> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Document::parse_str(&text).context("failed to parse stdin")
    } else {
        Document::parse_file(path).with_context(|| format!("failed to load {}", path.display()))
    }
}

fn predicate(state: &AppState, query: &QueryArgs) -> XmlAttribute {
    let name = query
        .name
        .clone()
        .unwrap_or_else(|| state.config.attribute_name.clone());
    XmlAttribute::new(name, query.value.clone())
}

fn handle_nodes(state: &AppState, query: &QueryArgs) -> Result<()> {
    let doc = load_document(&query.file)?;
    let attribute = predicate(state, query);

    let nodes = doc.find_nodes(&attribute);
    tracing::info!(%attribute, matches = nodes.len(), "nodes query");

    let summaries = render::node_summaries(&nodes);
    let output = if state.json {
        render::to_json(&summaries)?
    } else {
        render::nodes_text(&summaries, state.color)
    };
    print!("{}", output);
    Ok(())
}

fn handle_text(state: &AppState, query: &QueryArgs) -> Result<()> {
    let doc = load_document(&query.file)?;
    let attribute = predicate(state, query);

    let text = doc.find_text_content(&attribute);
    tracing::info!(%attribute, found = !text.is_empty(), "text query");

    if state.json {
        print!("{}", render::to_json(&text)?);
    } else if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}

fn handle_attributes(state: &AppState) -> Result<()> {
    let output = if state.json {
        render::to_json(XML_ATTRIBUTES)?
    } else {
        render::attributes_text(XML_ATTRIBUTES, state.color)
    };
    print!("{}", output);
    Ok(())
}

fn handle_config(state: &AppState) -> Result<()> {
    let output = if state.json {
        render::to_json(&state.config)?
    } else {
        render::config_text(&state.config)
    };
    print!("{}", output);
    Ok(())
}
