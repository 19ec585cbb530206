//! Hero Factory - Entry Point
//!
//! Recruits a party of heroes through their faction factories and has each
//! hero act once, in roster order.

use hero_factory::core::error::Result;
use hero_factory::muster::{muster, OutputFormat};
use hero_factory::roster::Roster;

use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Recruit Human and Orc heroes and print what each of them does
#[derive(Parser, Debug)]
#[command(name = "hero_factory")]
#[command(about = "Recruit heroes through faction factories and let them act")]
struct Args {
    /// TOML roster to recruit instead of the default party
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // stdout carries hero lines only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();

    let roster = match &args.roster {
        Some(path) => Roster::load(path)?,
        None => Roster::default(),
    };

    muster(&roster, args.format, io::stdout().lock())?;
    Ok(())
}
