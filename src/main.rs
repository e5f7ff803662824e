use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use dirtree::app::App;
use dirtree::config::Config;
use dirtree::tree::{scan_directory, DirTree, ManifestNode};
use dirtree::logging;
use std::io::stdout;
use std::path::PathBuf;

/// A terminal viewer for collapsible directory trees
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Browse a directory tree, expanding and collapsing folders", long_about = None)]
#[command(version)]
struct Args {
    /// Directory to scan into a tree (ignored when --manifest is given)
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Load a pre-generated tree manifest (JSON) instead of scanning
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the generated manifest as JSON and exit
    #[arg(long)]
    dump_manifest: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_manifest(args: &Args) -> AnyhowResult<ManifestNode> {
    match &args.manifest {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read manifest {:?}", path))?;
            ManifestNode::from_json(&content)
                .with_context(|| format!("Failed to parse manifest {:?}", path))
        }
        None => {
            let path = args
                .path
                .canonicalize()
                .with_context(|| format!("Failed to resolve {:?}", args.path))?;
            scan_directory(&path).with_context(|| format!("Failed to scan {:?}", path))
        }
    }
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let log_file_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("dirtree.log"));
    if !logging::init_global(&log_file_path) {
        eprintln!("warning: could not create log file {:?}", log_file_path);
    }

    let manifest = load_manifest(&args)?;

    if args.dump_manifest {
        println!("{}", manifest.to_json_pretty()?);
        return Ok(());
    }

    let tree = DirTree::from_manifest(&manifest);
    tracing::info!(
        "loaded tree with {} nodes, theme {:?}",
        tree.node_count(),
        config.theme
    );

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;

    let mut app = App::new(tree, config);
    let result = app.run(terminal);

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result.context("Terminal event loop failed")
}
