//! Internationalization module
//!
//! This module holds the translation tables for every supported language and
//! the lookup machinery on top of them: dotted-key resolution, `{{name}}`
//! interpolation, on-disk overrides and coverage statistics.

mod catalog;
pub mod format;
pub mod language;
pub mod loader;
pub mod node;

// Re-export commonly used i18n components
pub use format::{interpolate, params, TranslationParams};
pub use language::{Language, TextDirection};
pub use loader::{TranslationStore, TranslationStats, LanguageStats};
pub use node::TranslationNode;
