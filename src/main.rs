use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use flexprefix_core::{apply_prefixes, StyleMap};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// JSON object, fallback lists as arrays
    Json,
    /// CSS declarations, one line per fallback
    Css,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the style object to prefix. Reads stdin when omitted or "-".
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging. RUST_LOG takes precedence over --debug.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.debug { "debug" } else { "info" })
    });
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let source = read_input(args.input.as_ref())?;
    let styles = StyleMap::from_json_str(&source).context("Failed to decode style object")?;
    info!("Loaded {} declarations", styles.len());

    let prefixed = apply_prefixes(styles);
    debug!("Prefixed style object has {} declarations", prefixed.len());

    let output = match args.format {
        Format::Json if args.compact => serde_json::to_string(&prefixed)?,
        Format::Json => serde_json::to_string_pretty(&prefixed)?,
        Format::Css => prefixed.to_declarations().trim_end().to_string(),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write output")?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Style file not found: {}", path.display());
            }
            info!("Reading style object from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            debug!("Reading style object from stdin");
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}
