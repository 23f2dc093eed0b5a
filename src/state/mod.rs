//! State management module
//!
//! This module handles the session language state and its persistence

pub mod context;
pub mod storage;

// Re-export commonly used state components
pub use context::{DocumentMetadata, LanguageContext, LanguageOptions};
pub use storage::{create_storage, FileStorage, MemoryStorage, PreferenceStore};
