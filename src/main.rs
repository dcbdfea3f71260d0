//! Address Book - Main entry point
//!
//! Starts the HTTP contact directory on the configured address.

use address_book::repositories::{AddressBook, ContactRepository};
use address_book::Config;
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting address book on {}", config.bind_addr);

    // One store for the whole process, shared by every handler
    let store = Arc::new(AddressBook::new()) as Arc<dyn ContactRepository>;

    if let Err(e) = address_book::server::run_server(config.bind_addr, store).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    info!("Address book shutdown complete");
    Ok(())
}
