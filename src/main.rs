//! Care Network localization CLI
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tracing::{info, error};

use care_network::{
    config::Settings,
    handlers::{handle_command, Command},
    i18n::TranslationStore,
    state::{create_storage, LanguageContext, LanguageOptions},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file when present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", care_network::info());

    // Build translation tables
    let mut store = TranslationStore::new();
    if let Some(dir) = &settings.i18n.translations_dir {
        info!("Loading translation overrides from {}", dir);
        store.load_overrides(dir).await?;
    }

    // Restore the session language
    let options = LanguageOptions::from_settings(&settings)?;
    let storage = create_storage(&settings.storage);
    let mut context = LanguageContext::initialize(Arc::new(store), storage, options);

    let command = Command::parse(std::env::args().skip(1))?;
    match handle_command(&mut context, command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Command failed");
            Err(e.into())
        }
    }
}
