//! Command handlers
//!
//! Parses the binary's arguments into a [`Command`] and runs it against a
//! [`LanguageContext`], producing the text to print.

use std::fmt::Write as _;
use crate::i18n::{Language, TranslationParams};
use crate::state::LanguageContext;
use crate::utils::errors::{CareNetworkError, Result};

/// All available commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the active language and document direction
    Show,
    /// Switch to the given language code
    Set(String),
    /// Switch to the next enabled language
    Toggle,
    /// Translate a key with optional `name=value` parameters
    Translate { key: String, params: TranslationParams },
    /// Show per-language key counts
    Stats,
    /// List keys missing from a language
    Missing(String),
    /// Show help information
    Help,
}

impl Command {
    /// Parse command-line arguments (without the program name)
    pub fn parse<I, S>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|arg| arg.as_ref().to_string()).collect();
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Show);
        };

        match (name.as_str(), rest) {
            ("show", []) => Ok(Command::Show),
            ("set", [code]) => Ok(Command::Set(code.clone())),
            ("toggle", []) => Ok(Command::Toggle),
            ("t", [key, pairs @ ..]) => Ok(Command::Translate {
                key: key.clone(),
                params: parse_params(pairs)?,
            }),
            ("stats", []) => Ok(Command::Stats),
            ("missing", [code]) => Ok(Command::Missing(code.clone())),
            ("help" | "--help" | "-h", _) => Ok(Command::Help),
            (other, _) => Err(CareNetworkError::InvalidInput(format!(
                "Unknown command or arguments: {}. Run 'help' for usage.",
                other
            ))),
        }
    }
}

fn parse_params(pairs: &[String]) -> Result<TranslationParams> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
            _ => Err(CareNetworkError::InvalidInput(format!(
                "Expected name=value parameter, got '{}'",
                pair
            ))),
        })
        .collect()
}

/// Main command dispatcher
pub fn handle_command(context: &mut LanguageContext, cmd: Command) -> Result<String> {
    match cmd {
        Command::Show => Ok(describe_language(context)),
        Command::Set(code) => {
            let language = context.set_language_code(&code)?;
            Ok(language_changed(context, language))
        }
        Command::Toggle => {
            let language = context.toggle_language();
            Ok(language_changed(context, language))
        }
        Command::Translate { key, params } => {
            let params = (!params.is_empty()).then_some(&params);
            Ok(context.t(&key, params))
        }
        Command::Stats => Ok(handle_stats(context)),
        Command::Missing(code) => {
            let language = code.parse::<Language>()?;
            let reference = context.options().default_language();
            let missing = context.store().missing_keys(language, reference);
            Ok(missing.join("\n"))
        }
        Command::Help => Ok(help_text()),
    }
}

fn describe_language(context: &LanguageContext) -> String {
    let language = context.language();
    format!(
        "{}: {} ({})\n{}: {}",
        context.t("settings.language", None),
        language.native_name(),
        language.code(),
        context.t("settings.direction", None),
        context.direction()
    )
}

fn language_changed(context: &LanguageContext, language: Language) -> String {
    let params = crate::i18n::params([("language", language.native_name())]);
    context.t("settings.language_changed", Some(&params))
}

fn handle_stats(context: &LanguageContext) -> String {
    let reference = context.options().default_language();
    let stats = context.store().stats(reference);

    let mut output = format!("Reference language: {} ({} keys)\n", reference, stats.total_keys);
    for language in &stats.languages {
        let _ = writeln!(
            output,
            "{}: {} keys, {} missing",
            language.code, language.key_count, language.missing_count
        );
    }
    output.trim_end().to_string()
}

fn help_text() -> String {
    "care-network: localization tools\n\n\
        show                     Show the active language\n\
        set <code>               Switch language (en, he)\n\
        toggle                   Switch to the next language\n\
        t <key> [name=value...]  Translate a key\n\
        stats                    Show translation statistics\n\
        missing <code>           List keys missing from a language\n\
        help                     Show this help message"
        .to_string()
}
