//! Crate-level error type.

use crate::collection::CollectionError;
use crate::color::ColorParseError;
use crate::config::ConfigError;
use crate::i18n::I18nError;

/// Result type alias for Horizon Aria operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur anywhere in Horizon Aria.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Collection mutation error.
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// Color parsing error.
    #[error(transparent)]
    Color(#[from] ColorParseError),

    /// Localization error.
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns true if this is a localization error.
    pub fn is_i18n(&self) -> bool {
        matches!(self, Error::I18n(_))
    }

    /// Returns true if this is a color parsing error.
    pub fn is_color(&self) -> bool {
        matches!(self, Error::Color(_))
    }
}
