//! netlens CLI — offline projection, layout, and validation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "netlens")]
#[command(version, about = "netlens — projects network-anomaly feeds into renderable primitives")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a recorded engine snapshot into a visual snapshot.
    Project {
        /// Path to the engine snapshot (JSON).
        #[arg(short, long)]
        input: String,

        /// Path to projection config (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Projection time in ms since the epoch (defaults to now).
        #[arg(long)]
        now: Option<u64>,

        /// Output JSON file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Lay out a device feed on a drawing surface.
    Layout {
        /// Path to the device feed (JSON).
        #[arg(short, long)]
        input: String,

        /// Surface width.
        #[arg(long, default_value_t = 800.0)]
        width: f32,

        /// Surface height.
        #[arg(long, default_value_t = 400.0)]
        height: f32,

        /// Device to mark as selected.
        #[arg(short, long)]
        select: Option<String>,

        /// Output JSON file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a config, engine snapshot, or device feed.
    Validate {
        /// Path to a .toml config or a .json snapshot/feed.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Project {
            input,
            config,
            now,
            output,
        } => commands::project(&input, config.as_deref(), now, output.as_deref()),
        Commands::Layout {
            input,
            width,
            height,
            select,
            output,
        } => commands::layout(&input, width, height, select.as_deref(), output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
