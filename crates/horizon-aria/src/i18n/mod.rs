//! Locale detection and localized message formatting.
//!
//! User-facing strings (section announcements, channel names) live in JSON
//! catalogs embedded into the binary at compile time, one file per
//! namespace and locale under `intl/<namespace>/<locale>.json`.
//!
//! # Example
//!
//! ```
//! use horizon_aria::i18n::{FormatValue, LocalizedStringFormatter};
//!
//! let formatter = LocalizedStringFormatter::new("grid", "en-US")?;
//! let message = formatter.format(
//!     "sectionAnnouncement",
//!     &[("sectionTitle", "Fruits".into()), ("sectionSize", FormatValue::from(3))],
//! )?;
//! assert_eq!(message, "Fruits, section, 3 rows");
//! # Ok::<(), horizon_aria::i18n::I18nError>(())
//! ```

mod catalog;
mod formatter;
mod locale;

pub use catalog::{DEFAULT_LOCALE, MessageCatalog, SUPPORTED_LOCALES, resolve_locale};
pub use formatter::{FormatValue, LocalizedStringFormatter};
pub use locale::{LocaleInfo, SystemLocale};

/// Errors raised while loading catalogs or formatting messages.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// No catalog exists for the namespace, not even in the default locale.
    #[error("Unknown message namespace '{0}'")]
    UnknownNamespace(String),

    /// The catalog has no message with this key.
    #[error("Missing message '{key}' for locale {locale}")]
    MissingMessage { locale: String, key: String },

    /// The message references an argument the caller did not supply.
    #[error("Message '{key}' requires argument '{argument}'")]
    MissingArgument { key: String, argument: String },

    /// The message template is malformed.
    #[error("Invalid message '{key}': {message}")]
    Syntax { key: String, message: String },

    /// An embedded catalog file is not valid JSON.
    #[error("Failed to parse catalog '{path}': {source}")]
    Catalog {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl I18nError {
    /// Create a syntax error.
    pub fn syntax(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Syntax {
            key: key.into(),
            message: message.into(),
        }
    }
}
