//! Placeholder substitution for translated text.

use std::collections::HashMap;
use regex::{Captures, Regex};
use tracing::warn;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Pattern matching `{{name}}` for exactly the given parameter names.
///
/// Names are escaped, so any name (empty, or containing braces) matches
/// literally. Longer names come first, making the longest name win when
/// two literals start at the same position.
fn placeholder_regex(params: &TranslationParams) -> Result<Regex, regex::Error> {
    let mut names: Vec<&str> = params.keys().map(String::as_str).collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternatives = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\{{\{{({})\}}\}}", alternatives))
}

/// Build parameters from `(name, value)` pairs
///
/// ```
/// use care_network::i18n::params;
///
/// let p = params([("name", "Ana"), ("count", "3")]);
/// assert_eq!(p["name"], "Ana");
/// ```
pub fn params<I, K, V>(pairs: I) -> TranslationParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.to_string()))
        .collect()
}

/// Replace every `{{name}}` in `template` whose name appears in `params`.
///
/// Each parameter name is matched literally. Unknown placeholders are kept
/// verbatim and unused parameters are ignored. Substituted values are not
/// scanned again.
pub fn interpolate(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() || !template.contains("{{") {
        return template.to_string();
    }

    let pattern = match placeholder_regex(params) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(error = %e, "Could not build placeholder pattern, leaving text as is");
            return template.to_string();
        }
    };

    pattern
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
