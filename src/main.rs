use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use snake_levels::game::{Difficulty, GameConfig};
use snake_levels::modes::HumanMode;
use snake_levels::storage::{JsonScoreStore, MemoryScoreStore, ScoreStore};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "snake_levels")]
#[command(version, about = "Snake in the terminal with selectable difficulty")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "24")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "24")]
    height: usize,

    /// Difficulty preselected on the start screen
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Keep the high score in this JSON file between runs
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The terminal belongs to the game, so logs only ever go to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::new(cli.width, cli.height).with_difficulty(cli.difficulty);
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid game configuration")?;

    let score_store: Box<dyn ScoreStore> = match cli.score_file {
        Some(path) => Box::new(JsonScoreStore::new(path)),
        None => Box::new(MemoryScoreStore::new()),
    };

    let mut human_mode = HumanMode::new(config, score_store)?;
    human_mode.run().await?;

    Ok(())
}
