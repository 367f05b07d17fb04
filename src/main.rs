//! Finledger main entry point

use clap::Parser;
use finledger_api::start_server;
use finledger_config::{Config, ConfigError};
use finledger_core::Store;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "finledger")]
#[command(version = "0.1.0")]
#[command(about = "A minimal personal finance ledger HTTP service", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound { path }) => {
            eprintln!("[WARN] Config file not found: {}, using defaults", path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    log::info!("Config loaded: data file={}", config.data_file().display());

    let store = Store::new(config.data_file());
    match store.load() {
        Ok(transactions) => log::info!("Store loaded: {} transaction(s)", transactions.len()),
        Err(e) => log::error!("Failed to load store: {}", e),
    }
    let store = Arc::new(RwLock::new(store));

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, store));

    Ok(())
}
