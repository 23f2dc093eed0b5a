//! Community Care Network localization core
//!
//! Translation tables for every supported language, dotted-key lookup with
//! key fallback, and the session language context that persists the user's
//! choice and drives document text direction.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CareNetworkError, Result};

// Re-export main components for easy access
pub use i18n::{Language, TextDirection, TranslationStore};
pub use state::{LanguageContext, LanguageOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
