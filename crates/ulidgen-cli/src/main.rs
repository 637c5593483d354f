#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Command};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    telemetry::init_telemetry()?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    match &args.command {
        Command::New(new) => commands::run_new(new, &mut out)?,
        Command::Parse(parse) => commands::run_parse(parse, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
