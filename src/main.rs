use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brickpix::convert::{self, Direction};

#[derive(Parser)]
#[command(name = "brickpix")]
#[command(about = "Convert PNG pixel art into LXFML brick mosaics and back")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert PNG image(s) into LXFML brick models
    Encode {
        /// Path to the input PNG file(s)
        #[arg(value_name = "IMAGE", required = true)]
        images: Vec<PathBuf>,
    },
    /// Reconstruct PNG image(s) from LXFML brick models
    Decode {
        /// Path to the input LXFML file(s)
        #[arg(value_name = "LXFML", required = true)]
        models: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brickpix=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let (paths, direction) = match cli.command {
        Commands::Encode { images } => (images, Direction::Encode),
        Commands::Decode { models } => (models, Direction::Decode),
    };

    let converted = convert::run_batch(&paths, direction);
    if converted == 0 {
        anyhow::bail!("no files converted");
    }
    Ok(())
}
