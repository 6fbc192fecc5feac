use anyhow::{Context, Result};
use clap::Parser;
use lunar_rover::{MissionControl, RoverConfig};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run rover commands against the configured obstacle map.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Commands to run in order, each made of F, B, L and R
    commands: Vec<String>,

    /// Obstacle map to use instead of OBSTACLES_JSON_PATH
    #[arg(short, long)]
    obstacles: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Compact)]
    log_format: LogFormatArg,
}

/// Available log formats
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormatArg {
    /// Multi-line, human-oriented output
    Pretty,
    /// One line per event (default)
    Compact,
    /// One JSON object per event
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    initialize_tracing(args.log_format);

    let mut config = RoverConfig::from_env().context("invalid rover configuration")?;
    if let Some(path) = args.obstacles {
        config.obstacles_path = path;
    }
    info!(start = %config.start_position, obstacles = %config.obstacles_path.display(), "rover ready");

    let mut mission = MissionControl::from_config(&config);

    if args.commands.is_empty() {
        println!("{}", serde_json::to_string(&mission.current_position())?);
        return Ok(());
    }

    for raw in &args.commands {
        match mission.execute_command(raw) {
            Ok(outcome) => println!("{}", serde_json::to_string(&outcome)?),
            Err(err) => {
                error!(command = %raw, "{err}");
                return Err(err).with_context(|| format!("command {raw:?} rejected"));
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn initialize_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lunar_rover=info,rover=info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match format {
        LogFormatArg::Json => subscriber.json().init(),
        LogFormatArg::Pretty => subscriber.pretty().init(),
        LogFormatArg::Compact => subscriber.compact().init(),
    }
}
