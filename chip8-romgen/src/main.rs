//! chip8-romgen - CHIP-8 ROM packager
//!
//! Reads a ROM directory and its manifest and writes C source (or JSON, or a
//! disassembly listing) to stdout. Diagnostics go to stderr.

use anyhow::{Context, Result};
use chip8_romgen::config::{DEFAULT_MANIFEST, DEFAULT_WORDS_PER_GROUP};
use chip8_romgen::{pack_directory, render, OutputFormat, PackConfig};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chip8-romgen")]
#[command(about = "Package CHIP-8 ROMs as C source for filesystem-less firmware")]
#[command(version)]
struct Cli {
    /// Directory holding the manifest, ROMs and sidecars
    dir: PathBuf,

    /// Manifest file name inside the ROM directory
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    manifest: String,

    /// Header to #include at the top of C output
    #[arg(short, long)]
    include: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::C)]
    format: Format,

    /// Words per annotated line group
    #[arg(long, default_value_t = DEFAULT_WORDS_PER_GROUP)]
    group_words: usize,

    /// Keymap for ROMs without one of their own (e.g. "0x58, 0x79, 0x46")
    #[arg(short, long)]
    keymap: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    C,
    Json,
    Listing,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::C => OutputFormat::C,
            Format::Json => OutputFormat::Json,
            Format::Listing => OutputFormat::Listing,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = PackConfig {
        manifest_name: cli.manifest,
        words_per_group: cli.group_words,
        include_header: cli.include,
        ..PackConfig::default()
    };
    if let Some(keymap) = cli.keymap {
        config
            .set_default_keymap(&keymap)
            .with_context(|| format!("Invalid --keymap {keymap:?}"))?;
    }

    let decls = pack_directory(&cli.dir, &config)
        .with_context(|| format!("Failed to package {}", cli.dir.display()))?;
    let output = render(cli.format.into(), &decls)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(output.as_bytes())
        .context("Failed to write output")?;
    out.flush().context("Failed to write output")?;

    Ok(())
}
