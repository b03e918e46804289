// src/main.rs
use anyhow::Result;
use clap::Parser;
use spellscan::{Args, logging, run};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.verbose);
    let code = run(args)?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
