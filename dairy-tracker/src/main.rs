// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

use dairy_store_db::RecordStore;
use dairy_tracker::config::Config;
use dairy_tracker::error::TrackerError;
use dairy_tracker::menu::Menu;
use log::info;

fn main() -> Result<(), TrackerError> {
    // Load configuration
    let config = Config::load()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting dairy-tracker");
    info!("Database path: {}", config.db_path.display());

    let store = RecordStore::open(&config.db_path)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(store, stdin.lock(), stdout.lock()).run()?;

    info!("dairy-tracker stopped");
    Ok(())
}
