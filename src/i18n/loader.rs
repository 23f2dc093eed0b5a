//! Translation store and loader
//!
//! This module owns the per-language translation tables, exact-path lookup,
//! optional on-disk overrides, and coverage statistics.

use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn, error, debug};
use crate::utils::errors::{CareNetworkError, Result};
use crate::utils::logging;
use super::catalog;
use super::format::{interpolate, TranslationParams};
use super::language::Language;
use super::node::TranslationNode;

/// Immutable, language-keyed collection of translation trees
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationStore {
    /// Root node per language, indexed by `Language as usize`
    tables: [TranslationNode; Language::COUNT],
}

impl TranslationStore {
    /// Build the store from the built-in tables
    pub fn new() -> Self {
        Self {
            tables: Language::ALL.map(catalog::builtin),
        }
    }

    /// Build a store from explicit tables.
    ///
    /// Languages absent from `tables` get an empty root, so every lookup for
    /// them misses instead of failing.
    pub fn from_tables(mut tables: HashMap<Language, TranslationNode>) -> Self {
        Self {
            tables: Language::ALL.map(|language| tables.remove(&language).unwrap_or_default()),
        }
    }

    /// Resolve `key` for `language` to the stored leaf text
    pub fn resolve(&self, language: Language, key: &str) -> Option<&str> {
        self.table(language).resolve(key)
    }

    /// Get a translated message, falling back to `key` itself
    pub fn t(&self, key: &str, language: Language, params: Option<&TranslationParams>) -> String {
        match self.resolve(language, key) {
            Some(text) => {
                logging::log_translation_hit(key, language.code());
                match params {
                    Some(params) => interpolate(text, params),
                    None => text.to_string(),
                }
            }
            None => {
                logging::log_missing_translation(key, language.code());
                key.to_string()
            }
        }
    }

    /// Root node for `language`
    pub fn table(&self, language: Language) -> &TranslationNode {
        &self.tables[language as usize]
    }

    /// Merge `<dir>/<code>.json` files over the current tables.
    ///
    /// A missing file is skipped. A file that does not parse as a translation
    /// tree fails the call and leaves that language's table untouched.
    /// Returns the number of files applied.
    pub async fn load_overrides(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();

        if !dir.exists() {
            warn!("Translations directory not found: {}", dir.display());
            return Ok(0);
        }

        let mut applied = 0;
        for language in Language::ALL {
            let file_path = dir.join(format!("{}.json", language.code()));

            if !file_path.exists() {
                debug!("No translation overrides for {}", language);
                continue;
            }

            match self.load_language_file(&file_path, language).await {
                Ok(key_count) => {
                    info!("Loaded {} override keys for language: {}", key_count, language);
                    applied += 1;
                }
                Err(e) => {
                    error!("Failed to load translations for {}: {}", language, e);
                    return Err(e);
                }
            }
        }

        Ok(applied)
    }

    /// Load a single language file and merge it
    async fn load_language_file(&mut self, file_path: &Path, language: Language) -> Result<usize> {
        let content = fs::read_to_string(file_path).await?;
        let overrides: TranslationNode = serde_json::from_str(&content).map_err(|e| {
            CareNetworkError::InvalidTranslations {
                language: language.code().to_string(),
                reason: e.to_string(),
            }
        })?;

        if overrides.is_leaf() {
            return Err(CareNetworkError::InvalidTranslations {
                language: language.code().to_string(),
                reason: "top level must be an object".to_string(),
            });
        }

        let key_count = overrides.leaf_count();
        self.tables[language as usize].merge(overrides);
        Ok(key_count)
    }

    /// Leaf keys resolvable in `reference` but not in `language`
    pub fn missing_keys(&self, language: Language, reference: Language) -> Vec<String> {
        self.table(reference)
            .leaf_keys()
            .into_iter()
            .filter(|key| self.resolve(language, key).is_none())
            .collect()
    }

    /// Get translation statistics, totals measured against `reference`
    pub fn stats(&self, reference: Language) -> TranslationStats {
        let languages = Language::ALL
            .iter()
            .map(|&language| LanguageStats {
                code: language.code().to_string(),
                key_count: self.table(language).leaf_count(),
                missing_count: self.missing_keys(language, reference).len(),
            })
            .collect();

        TranslationStats {
            languages,
            total_keys: self.table(reference).leaf_count(),
        }
    }
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
    pub missing_count: usize,
}
