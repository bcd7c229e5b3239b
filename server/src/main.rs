mod config;
mod http;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{HrModule, fixtures};
use tracing::info;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "promocode-factory", version, about = "PromoCode Factory HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeCommand),
    /// Print the demo fixtures loaded at startup.
    Fixtures {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
    #[arg(long, help = "Start with empty stores even if SEED_DEMO_DATA is set")]
    no_seed: bool,
}

impl From<&ServeCommand> for ServeConfig {
    fn from(value: &ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let app_config = Arc::new(AppConfig::load()?);
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, app_config).await,
        Command::Fixtures { output } => print_fixtures(output),
    }
}

fn print_fixtures(path: Option<PathBuf>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(&fixtures::all())?;
    match path {
        Some(target) => {
            std::fs::write(&target, rendered)
                .with_context(|| format!("failed to write {}", target.display()))?;
            info!(path = %target.display(), "fixtures written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let hr = if config.seed_demo_data && !cmd.no_seed {
        HrModule::with_fixtures()
    } else {
        info!("starting with empty stores");
        HrModule::in_memory()
    };
    let state = AppState { hr, config };
    http::serve((&cmd).into(), state).await
}
