mod budget;
mod config;
mod logging;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

use crate::budget::BudgetController;
use crate::config::Config;
use crate::store::{KeyValueStore, MemoryStore, SqliteStore};

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let config = Config::from_args(&mut args)?;
    config.ensure_data_dir()?;
    logging::init(&config.log_path())?;

    let store = open_store(&config)?;
    let mut budget = BudgetController::mount(store)?;

    match args.len() {
        0 | 1 => run::as_tui(budget),
        _ => run::as_cli(&args, &mut budget),
    }
}

fn open_store(config: &Config) -> Result<Box<dyn KeyValueStore>> {
    if config.ephemeral {
        tracing::info!("using in-memory store");
        return Ok(Box::new(MemoryStore::new()));
    }
    Ok(Box::new(SqliteStore::open(&config.db_path())?))
}
