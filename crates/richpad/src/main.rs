mod script;

use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use richpad_config::EditorConfig;
use richpad_core::{EditorShell, MemoryMirror, MemorySurface};

/// Replays an editing script against a headless rich-text editor.
#[derive(Parser, Debug)]
#[command(name = "richpad", version, about)]
struct Cli {
    /// Script to replay. Reads stdin when omitted.
    script: Option<PathBuf>,

    /// Editor config file. Defaults to `richpad.json` next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial HTML of the mirrored input.
    #[arg(long, default_value = "")]
    content: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(EditorConfig::config_path);
    let config = EditorConfig::load_or_create(&config_path);
    tracing::info!("Starting richpad with config {}", config_path.display());

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };
    let steps = script::parse(&source)?;

    let shell = EditorShell::new(
        MemorySurface::new(),
        MemoryMirror::new(cli.content),
        config,
    );
    let stdout = std::io::stdout();
    let last = script::run(steps, shell, Instant::now(), &mut stdout.lock())?;
    println!("{last}");
    Ok(())
}
