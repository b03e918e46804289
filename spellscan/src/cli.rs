// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::config::{Config, load_config};
use crate::core::command::CheckCommand;
use crate::core::exclude::Patterns;
use crate::core::scanner::{ScanOptions, scan_directories};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan for source files
    pub root: PathBuf,

    /// Config file (defaults to the nearest .spellscan.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target file extension, overriding the config (e.g., "go")
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Print the command line instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Exit with the spell checker's status instead of 0
    #[arg(short, long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Scans `args.root`, runs the spell checker over the qualifying directories
/// and prints its exit status.
///
/// Returns the exit code for this process: 0, or the checker's status when
/// `--strict` is set.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The root cannot be scanned
/// * The spell checker cannot be started
#[inline]
pub fn run(args: Args) -> Result<i32> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            let (config, source) = load_config(&cwd)?;
            if let Some(source) = source {
                info!(path = %source.display(), "loaded config");
            }
            config
        }
    };
    if let Some(extension) = args.extension {
        config.extension = extension;
    }

    let exclude = Patterns::from_lines(&config.exclude)?;
    let options = ScanOptions {
        extension: config.target_extension(),
        exclude: (!exclude.is_empty()).then_some(&exclude),
        follow_links: config.follow_links,
    };
    let dirs = scan_directories(&args.root, &options)
        .with_context(|| format!("Failed to scan directory: {}", args.root.display()))?;

    let command = CheckCommand::new(&config, dirs);
    info!(command = %command.command_line(), "assembled command");

    if args.dry_run {
        println!("{}", command.command_line());
        return Ok(0);
    }

    let status = command.execute()?;
    println!("{status}");

    Ok(if args.strict { status.code() } else { 0 })
}
