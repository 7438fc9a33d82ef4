//! AEI Driver binary
//!
//! Launches the configured Arimaa engine, feeds it the opening setup,
//! requests a move, echoes every engine line to the console, and prints
//! the final move once the engine reports it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aei_driver::{Config, ConfigLoader, EngineSession, Position};

#[derive(Parser)]
#[command(name = "aei-driver", version, about = "Drive an AEI-speaking Arimaa engine through one move computation")]
struct Cli {
    /// Engine executable path (overrides the config file)
    #[arg(short, long)]
    engine: Option<PathBuf>,

    /// Arguments passed to the engine (overrides the config file)
    #[arg(short = 'a', long = "engine-arg")]
    engine_args: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Poll interval for the wait loop, in milliseconds
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Overall deadline for the result line, in seconds
    #[arg(long)]
    deadline_secs: Option<u64>,
}

impl Cli {
    /// Load configuration and apply command-line overrides
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ConfigLoader::load().context("loading configuration")?,
        };

        if let Some(engine) = &self.engine {
            config.engine.command = engine.clone();
        }
        if !self.engine_args.is_empty() {
            config.engine.args = self.engine_args.clone();
        }
        if let Some(interval) = self.poll_interval_ms {
            config.session.poll_interval_ms = interval;
        }
        if let Some(deadline) = self.deadline_secs {
            config.session.wait_deadline_secs = deadline;
        }

        config.validate().context("validating configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let mut session = EngineSession::launch(&config.engine, config.session.clone())
        .context("launching engine")?;

    session
        .send_position(&Position::opening())
        .context("sending board setup")?;
    session.request_move().context("requesting move")?;

    let best = session
        .wait_for_bestmove(|line| println!("ENGINE: {}", line.text))
        .await
        .context("waiting for engine result")?;

    println!();
    println!("Final engine move: {}", best.text);

    let process = session.shutdown().context("shutting engine down")?;
    info!("Engine exited: {}", process);

    Ok(())
}
