//! duel_cli - Evaluate one duel from local JSON documents
//!
//! Loads a duel record and a talent catalog, runs a single evaluation and
//! prints the result envelope as JSON. Sample documents live under `data/`:
//!
//! ```text
//! duel_cli --duel data/duel.json --talents data/talents.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use duel_core::config::{load_duel_record, load_talent_catalog, ResultEnvelope};
use duel_core::evaluate_duel;

#[derive(Parser, Debug)]
#[command(name = "duel_cli", about = "Evaluate a duel record against a talent catalog")]
struct Args {
    /// Path to the duel record JSON (bare or {"data":{"duel":...}} envelope)
    #[arg(long)]
    duel: PathBuf,

    /// Path to the talent catalog JSON
    #[arg(long)]
    talents: PathBuf,

    /// Print the result on one line instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let catalog = load_talent_catalog(&args.talents)
        .with_context(|| format!("loading talent catalog from {}", args.talents.display()))?;
    debug!(talents = catalog.len(), "talent catalog loaded");

    let duel = load_duel_record(&args.duel)
        .with_context(|| format!("loading duel record from {}", args.duel.display()))?;

    let result = evaluate_duel(&duel, &catalog)?;
    debug!(
        raw_damage = result.raw_damage,
        effective_total = result.effective_damage.total(),
        "duel evaluated"
    );

    let envelope = ResultEnvelope::new(result);
    let output = if args.compact {
        serde_json::to_string(&envelope)?
    } else {
        serde_json::to_string_pretty(&envelope)?
    };
    println!("{output}");

    Ok(())
}
