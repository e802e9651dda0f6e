use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_set::{platform, GameConfig};

#[derive(Parser, Debug)]
#[clap(name = "rust-set", version, about = "The card game Set")]
struct Cli {
    #[clap(long, short, help = "JSON config file; omitted fields use defaults")]
    config: Option<PathBuf>,

    #[clap(long, short, help = "Shuffle seed, for replaying a deal")]
    seed: Option<u64>,

    #[clap(long, help = "Target frames per second")]
    fps: Option<u32>,
}

fn main() -> Result<()> {
    // info+ by default; RUST_LOG overrides. GPU backends are noisy at info.
    let default = "info,wgpu_hal=off,wgpu_core=off,wgpu=warn,naga=off";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(fps) = cli.fps {
        config = config.with_fps(fps);
    }
    config.validate().context("invalid configuration")?;

    platform::run(config)
}
