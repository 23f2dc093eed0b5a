//! Test helpers
//!
//! Shared setup for integration tests: a scratch directory holding the
//! preferences file, and constructors that simulate an app start.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use care_network::i18n::TranslationStore;
use care_network::state::{FileStorage, LanguageContext, LanguageOptions};

/// Scratch device with its own preferences file
pub struct TestDevice {
    pub temp_dir: TempDir,
    pub store: Arc<TranslationStore>,
}

impl TestDevice {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
            store: Arc::new(TranslationStore::new()),
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.temp_dir.path().join("preferences.json")
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.preferences_path())
    }

    /// Start a new session against this device's storage
    pub fn start_session(&self) -> LanguageContext {
        self.start_session_with(LanguageOptions::default())
    }

    pub fn start_session_with(&self, options: LanguageOptions) -> LanguageContext {
        LanguageContext::initialize(self.store.clone(), Box::new(self.storage()), options)
    }

    /// Overwrite the preferences file with raw content
    pub fn write_raw_preferences(&self, content: &str) {
        std::fs::write(self.preferences_path(), content).expect("Failed to write preferences");
    }
}
