//! Display language handling.

use serde::{Deserialize, Serialize};

/// Display language for quote output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Pick the localized variant of a text pair, falling back to the
    /// primary (English) text when no translation was recorded.
    pub fn resolve<'a>(self, primary: &'a str, localized: Option<&'a str>) -> &'a str {
        match self {
            Language::En => primary,
            Language::Zh => localized.unwrap_or(primary),
        }
    }
}
