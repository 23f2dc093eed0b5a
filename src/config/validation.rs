//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::Language;
use crate::utils::errors::{CareNetworkError, Result};
use super::{Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(CareNetworkError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(CareNetworkError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    for code in &config.supported_languages {
        if code.parse::<Language>().is_err() {
            return Err(CareNetworkError::Config(
                format!("Unknown supported language: {}. Known languages: {:?}", code, Language::codes())
            ));
        }
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(CareNetworkError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    if let Some(dir) = &config.translations_dir {
        if dir.trim().is_empty() {
            return Err(CareNetworkError::Config(
                "Translations directory cannot be blank".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate preference storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.language_key.is_empty() {
        return Err(CareNetworkError::Config(
            "Language storage key is required".to_string()
        ));
    }

    if config.backend == StorageBackend::File && config.path.is_empty() {
        return Err(CareNetworkError::Config(
            "Storage path is required for the file backend".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CareNetworkError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CareNetworkError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_not_in_supported() {
        let mut settings = Settings::default();
        settings.i18n.supported_languages = vec!["en".to_string()];
        assert_matches!(settings.validate(), Err(CareNetworkError::Config(_)));
    }

    #[test]
    fn test_unknown_supported_language() {
        let mut settings = Settings::default();
        settings.i18n.supported_languages.push("fr".to_string());
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn test_empty_storage_key() {
        let mut settings = Settings::default();
        settings.storage.language_key.clear();
        assert_matches!(settings.validate(), Err(CareNetworkError::Config(_)));
    }

    #[test]
    fn test_memory_backend_needs_no_path() {
        let mut settings = Settings::default();
        settings.storage.backend = StorageBackend::Memory;
        settings.storage.path.clear();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(settings.validate(), Err(CareNetworkError::Config(_)));
    }
}
