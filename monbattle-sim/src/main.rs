use std::io;

use anyhow::Result;
use clap::Parser;
use monbattle::{
    BattleEngineOptions,
    MoveCatalog,
};
use monbattle_sim::Shell;

/// Mon Battle Simulator - a two-player, turn-based battle in the terminal
#[derive(Parser, Debug)]
#[command(name = "monbattle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only hand out the two damage moves, with no stat or mega moves
    #[arg(long)]
    classic: bool,

    /// Print every factor of each damage calculation
    #[arg(long)]
    show_calculation: bool,

    /// Write engine debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing_core::Level::DEBUG
        } else {
            tracing_core::Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let options = BattleEngineOptions {
        seed: args.seed,
        move_catalog: if args.classic {
            MoveCatalog::classic()
        } else {
            MoveCatalog::full()
        },
        ..Default::default()
    };

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock())
        .with_show_calculation(args.show_calculation);
    shell.run(options)?;
    Ok(())
}
