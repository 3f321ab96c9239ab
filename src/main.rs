//! Gakusei: an old-school heuristic Go engine.
//!
//! ## Usage
//!
//! - `gakusei` - Show a demo
//! - `gakusei gtp` - Start GTP server for GUI integration
//! - `gakusei demo` - Play a short opening and show the engine's reply
//!
//! Logging goes to stderr; set `RUST_LOG=debug` to see root move scores.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use gakusei::board::Color;
use gakusei::config::{EngineConfig, PrunePolicy};
use gakusei::constants::{DEFAULT_DEPTH, DEFAULT_SIZE, LADDER_MAX_DEPTH};
use gakusei::engine::Engine;
use gakusei::gtp::{GtpEngine, format_vertex};

/// Gakusei: an old-school heuristic Go engine
#[derive(Parser)]
#[command(name = "gakusei")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Keep only the K most urgent candidates (default: drop the least urgent one)
    #[arg(long)]
    top_k: Option<usize>,

    /// Recursion cap for ladder reading
    #[arg(long, default_value_t = LADDER_MAX_DEPTH)]
    ladder_depth: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = EngineConfig {
        depth: cli.depth,
        prune: cli.top_k.map_or(PrunePolicy::DropLowest, PrunePolicy::TopK),
        ladder_depth: cli.ladder_depth,
    };
    let engine = Engine::new(cli.size, config)?;

    match cli.command {
        Some(Commands::Gtp) => GtpEngine::new(engine).run()?,
        Some(Commands::Demo) | None => run_demo(engine)?,
    }
    Ok(())
}

fn run_demo(mut engine: Engine) -> Result<()> {
    println!("Gakusei: old-school heuristic Go engine\n");

    let size = engine.size();
    let opening = [(2, 2, Color::Black), (size - 3, size - 3, Color::White)];
    for (col, row, color) in opening {
        engine.play_move(col, row, color)?;
        println!("{color} plays {}", format_vertex(col, row, size));
    }

    let depth = engine.config().depth;
    let color = engine.side_to_move();
    println!("\nSearching {depth} plies for {color}...");
    match engine.generate_move(color, depth) {
        Some((col, row)) => {
            engine.play_move(col, row, color)?;
            println!("{color} plays {}\n", format_vertex(col, row, size));
        }
        None => {
            engine.pass_turn();
            println!("{color} passes\n");
        }
    }
    println!("{}", engine.render_board());
    Ok(())
}
