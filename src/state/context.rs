//! Language context management
//!
//! This module owns the Active Language for a running session: it restores the
//! persisted choice on startup, persists every change, keeps the document
//! direction in step, and translates keys for the current language.

use std::sync::Arc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::i18n::{Language, TextDirection, TranslationParams, TranslationStore};
use crate::utils::errors::{CareNetworkError, Result};
use crate::utils::logging;
use super::storage::PreferenceStore;

/// How a [`LanguageContext`] picks and stores its language
///
/// Always holds a non-empty enabled set that contains the default language,
/// so a context never starts on a language it would refuse to switch to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOptions {
    default_language: Language,
    supported_languages: Vec<Language>,
    storage_key: String,
}

impl LanguageOptions {
    /// Build options, deduplicating `supported_languages` in order.
    pub fn new(
        default_language: Language,
        supported_languages: impl IntoIterator<Item = Language>,
        storage_key: impl Into<String>,
    ) -> Result<Self> {
        let mut enabled: Vec<Language> = Vec::new();
        for language in supported_languages {
            if !enabled.contains(&language) {
                enabled.push(language);
            }
        }

        if enabled.is_empty() {
            return Err(CareNetworkError::Config(
                "At least one supported language is required".to_string(),
            ));
        }
        if !enabled.contains(&default_language) {
            return Err(CareNetworkError::Config(format!(
                "Default language '{}' is not among the supported languages",
                default_language
            )));
        }

        let storage_key = storage_key.into();
        if storage_key.trim().is_empty() {
            return Err(CareNetworkError::Config("Language storage key cannot be empty".to_string()));
        }

        Ok(Self {
            default_language,
            supported_languages: enabled,
            storage_key,
        })
    }

    /// Derive options from settings that already passed `Settings::validate`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let default_language = settings.i18n.default_language.parse::<Language>()?;
        let supported_languages = settings
            .i18n
            .supported_languages
            .iter()
            .map(|code| code.parse::<Language>())
            .collect::<Result<Vec<_>>>()?;

        Self::new(default_language, supported_languages, settings.storage.language_key.clone())
    }

    /// Used when nothing valid is persisted
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Languages the session may switch to, in toggle order
    pub fn supported_languages(&self) -> &[Language] {
        &self.supported_languages
    }

    /// Storage key of the persisted preference
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn is_supported(&self, language: Language) -> bool {
        self.supported_languages.contains(&language)
    }
}

impl Default for LanguageOptions {
    fn default() -> Self {
        Self {
            default_language: Language::He,
            supported_languages: Language::ALL.to_vec(),
            storage_key: "language".to_string(),
        }
    }
}

/// Document-level properties the presentation layer reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    /// Reading direction (`dir` attribute)
    pub direction: TextDirection,
    /// Language tag (`lang` attribute)
    pub lang: Language,
}

impl DocumentMetadata {
    pub fn for_language(language: Language) -> Self {
        Self {
            direction: language.direction(),
            lang: language,
        }
    }
}

/// Session-wide language state
///
/// Constructed once by the application root and handed to whatever renders
/// text. Readers call [`LanguageContext::language`] or [`LanguageContext::t`]
/// and always observe the latest value set through
/// [`LanguageContext::set_language`].
pub struct LanguageContext {
    store: Arc<TranslationStore>,
    storage: Box<dyn PreferenceStore>,
    options: LanguageOptions,
    language: Language,
    document: DocumentMetadata,
}

impl LanguageContext {
    /// Initialize from the persisted preference, else the default language.
    ///
    /// An absent, unreadable, unknown or disabled persisted value all fall back
    /// to the default.
    pub fn initialize(
        store: Arc<TranslationStore>,
        storage: Box<dyn PreferenceStore>,
        options: LanguageOptions,
    ) -> Self {
        let language = restore_language(storage.as_ref(), &options);
        info!(language = %language, direction = %language.direction(), "Language context initialized");

        Self {
            store,
            storage,
            options,
            language,
            document: DocumentMetadata::for_language(language),
        }
    }

    /// Current Active Language
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn document(&self) -> DocumentMetadata {
        self.document
    }

    pub fn direction(&self) -> TextDirection {
        self.document.direction
    }

    pub fn options(&self) -> &LanguageOptions {
        &self.options
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Switch the Active Language.
    ///
    /// A language outside the enabled set is rejected and the current language
    /// kept. Persisting is best effort: a failed write is logged and the new
    /// language stays active for this session.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        if !self.options.is_supported(language) {
            warn!(language = %language, "Rejected switch to a disabled language");
            return Err(CareNetworkError::UnsupportedLanguage(language.code().to_string()));
        }

        let previous = self.language;
        self.language = language;
        self.document = DocumentMetadata::for_language(language);

        let persisted = match self.storage.set(&self.options.storage_key, language.code()) {
            Ok(()) => true,
            Err(e) => {
                logging::log_storage_failure("write", &self.options.storage_key, &e.to_string());
                false
            }
        };

        logging::log_language_change(previous.code(), language.code(), persisted);
        Ok(())
    }

    /// Parse `code` and switch to it; unknown codes keep the current language
    pub fn set_language_code(&mut self, code: &str) -> Result<Language> {
        let language = code.parse::<Language>().map_err(|e| {
            warn!(code = code, "Rejected switch to an unknown language code");
            e
        })?;
        self.set_language(language)?;
        Ok(language)
    }

    /// Switch to the next enabled language, wrapping around
    pub fn toggle_language(&mut self) -> Language {
        let supported = &self.options.supported_languages;
        let next = supported
            .iter()
            .position(|&language| language == self.language)
            .map(|index| supported[(index + 1) % supported.len()])
            .unwrap_or(self.options.default_language);

        // next always comes from the enabled list
        if let Err(e) = self.set_language(next) {
            warn!(error = %e, "Language toggle failed");
        }
        self.language
    }

    /// Translate `key` for the Active Language.
    ///
    /// Unresolved keys come back unchanged and `params` is then ignored.
    pub fn t(&self, key: &str, params: Option<&TranslationParams>) -> String {
        self.store.t(key, self.language, params)
    }
}

fn restore_language(storage: &dyn PreferenceStore, options: &LanguageOptions) -> Language {
    let stored = match storage.get(&options.storage_key) {
        Ok(stored) => stored,
        Err(e) => {
            logging::log_storage_failure("read", &options.storage_key, &e.to_string());
            None
        }
    };

    let Some(code) = stored else {
        debug!(default = %options.default_language, "No persisted language, using default");
        return options.default_language;
    };

    match code.parse::<Language>() {
        Ok(language) if options.is_supported(language) => language,
        Ok(language) => {
            warn!(language = %language, "Persisted language is disabled, using default");
            options.default_language
        }
        Err(_) => {
            warn!(value = %code, "Persisted language is not recognized, using default");
            options.default_language
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::params;
    use crate::state::storage::MemoryStorage;
    use assert_matches::assert_matches;

    struct FailingStorage;

    impl PreferenceStore for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(CareNetworkError::Storage("unavailable".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(CareNetworkError::Storage("quota exceeded".to_string()))
        }
    }

    fn context_with(storage: MemoryStorage) -> LanguageContext {
        LanguageContext::initialize(
            Arc::new(TranslationStore::new()),
            Box::new(storage),
            LanguageOptions::default(),
        )
    }

    #[test]
    fn test_defaults_to_hebrew() {
        let context = context_with(MemoryStorage::new());
        assert_eq!(context.language(), Language::He);
        assert_eq!(context.direction(), TextDirection::Rtl);
        assert_eq!(context.document().lang, Language::He);
    }

    #[test]
    fn test_restores_persisted_language() {
        let storage = MemoryStorage::new();
        storage.set("language", "en").unwrap();

        let context = context_with(storage);
        assert_eq!(context.language(), Language::En);
        assert_eq!(context.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_corrupted_value_uses_default() {
        let storage = MemoryStorage::new();
        storage.set("language", "klingon").unwrap();

        let context = context_with(storage);
        assert_eq!(context.language(), Language::He);
    }

    #[test]
    fn test_set_language_persists_and_flips_direction() {
        let storage = MemoryStorage::new();
        let mut context = context_with(storage.clone());

        context.set_language(Language::En).unwrap();
        assert_eq!(context.language(), Language::En);
        assert_eq!(context.direction(), TextDirection::Ltr);
        assert_eq!(storage.get("language").unwrap(), Some("en".to_string()));

        context.set_language(Language::He).unwrap();
        assert_eq!(context.direction(), TextDirection::Rtl);
        assert_eq!(storage.get("language").unwrap(), Some("he".to_string()));
    }

    #[test]
    fn test_set_language_is_idempotent() {
        let storage = MemoryStorage::new();
        let mut context = context_with(storage.clone());

        context.set_language(Language::En).unwrap();
        let document = context.document();
        context.set_language(Language::En).unwrap();

        assert_eq!(context.language(), Language::En);
        assert_eq!(context.document(), document);
        assert_eq!(storage.get("language").unwrap(), Some("en".to_string()));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_disabled_language_rejected() {
        let options = LanguageOptions::new(Language::En, [Language::En], "language").unwrap();
        let storage = MemoryStorage::new();
        let mut context = LanguageContext::initialize(
            Arc::new(TranslationStore::new()),
            Box::new(storage.clone()),
            options,
        );

        assert_matches!(context.set_language(Language::He), Err(CareNetworkError::UnsupportedLanguage(_)));
        assert_eq!(context.language(), Language::En);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_unknown_code_keeps_current_language() {
        let mut context = context_with(MemoryStorage::new());
        assert!(context.set_language_code("fr").is_err());
        assert_eq!(context.language(), Language::He);

        assert_eq!(context.set_language_code("en").unwrap(), Language::En);
    }

    #[test]
    fn test_write_failure_keeps_new_language() {
        let mut context = LanguageContext::initialize(
            Arc::new(TranslationStore::new()),
            Box::new(FailingStorage),
            LanguageOptions::default(),
        );
        assert_eq!(context.language(), Language::He);

        assert!(context.set_language(Language::En).is_ok());
        assert_eq!(context.language(), Language::En);
        assert_eq!(context.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_toggle_cycles_languages() {
        let mut context = context_with(MemoryStorage::new());
        assert_eq!(context.toggle_language(), Language::En);
        assert_eq!(context.toggle_language(), Language::He);
    }

    #[test]
    fn test_translate_follows_active_language() {
        let mut context = context_with(MemoryStorage::new());
        assert_eq!(context.t("nav.home", None), "בית");

        context.set_language(Language::En).unwrap();
        assert_eq!(context.t("nav.home", None), "Home");
        assert_eq!(context.t("nav.missing", None), "nav.missing");

        let p = params([("language", "English")]);
        assert_eq!(context.t("settings.language_changed", Some(&p)), "Language changed to English");
        assert_eq!(context.t("settings.unknown", Some(&p)), "settings.unknown");
    }

    #[test]
    fn test_options_from_settings() {
        let mut settings = Settings::default();
        settings.i18n.supported_languages = vec!["he".to_string(), "en".to_string(), "he".to_string()];
        let options = LanguageOptions::from_settings(&settings).unwrap();
        assert_eq!(options.default_language(), Language::He);
        assert_eq!(options.supported_languages(), &[Language::He, Language::En]);
        assert_eq!(options.storage_key(), "language");

        settings.i18n.default_language = "fr".to_string();
        assert!(LanguageOptions::from_settings(&settings).is_err());

        settings.i18n.default_language = "he".to_string();
        settings.i18n.supported_languages = vec!["en".to_string()];
        assert_matches!(LanguageOptions::from_settings(&settings), Err(CareNetworkError::Config(_)));
    }

    #[test]
    fn test_options_only_read_language_settings() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(settings.validate().is_err());

        let options = LanguageOptions::from_settings(&settings).unwrap();
        assert_eq!(options, LanguageOptions::default());
    }

    #[test]
    fn test_options_reject_disabled_default() {
        assert_matches!(
            LanguageOptions::new(Language::He, [Language::En], "language"),
            Err(CareNetworkError::Config(_))
        );
        assert_matches!(
            LanguageOptions::new(Language::He, Vec::new(), "language"),
            Err(CareNetworkError::Config(_))
        );
        assert_matches!(
            LanguageOptions::new(Language::He, Language::ALL, " "),
            Err(CareNetworkError::Config(_))
        );
    }

    #[test]
    fn test_single_language_session_accepts_current_language() {
        let storage = MemoryStorage::new();
        let options = LanguageOptions::new(Language::En, [Language::En], "language").unwrap();
        let mut context = LanguageContext::initialize(
            Arc::new(TranslationStore::new()),
            Box::new(storage.clone()),
            options,
        );

        assert_eq!(context.language(), Language::En);
        assert!(context.options().is_supported(context.language()));
        assert!(context.set_language(Language::En).is_ok());
        assert_eq!(context.toggle_language(), Language::En);
        assert_eq!(storage.get("language").unwrap(), Some("en".to_string()));
    }
}
