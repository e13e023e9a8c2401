//! Locale identifiers and system locale detection.

use horizon_aria_core::logging::targets;

/// The components of a BCP 47 locale identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    /// The full locale identifier as given (e.g., "en-US", "fr_FR").
    pub identifier: String,
    /// The lowercase language code (e.g., "en", "fr").
    pub language: String,
    /// The uppercase region code (e.g., "US", "FR"), if present.
    pub region: Option<String>,
    /// The script code (e.g., "Latn", "Hans"), if present.
    pub script: Option<String>,
}

impl LocaleInfo {
    /// Parse a locale identifier into its components.
    ///
    /// Both `-` and `_` separators are accepted, and POSIX suffixes such as
    /// `.UTF-8` or `@euro` are ignored.
    pub fn parse(identifier: &str) -> Self {
        let tag = identifier.split(['.', '@']).next().unwrap_or(identifier);
        let mut parts = tag.split(['-', '_']).filter(|part| !part.is_empty());

        let language = parts
            .next()
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "en".to_string());

        let mut region = None;
        let mut script = None;

        for part in parts {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let mut chars = part.chars();
                script = chars
                    .next()
                    .map(|first| first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase());
            } else if (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
            {
                region = Some(part.to_ascii_uppercase());
            }
        }

        Self {
            identifier: identifier.to_string(),
            language,
            region,
            script,
        }
    }

    /// The normalized `language[-Script][-REGION]` tag.
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(script) = &self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(region) = &self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }
}

impl Default for LocaleInfo {
    fn default() -> Self {
        Self::parse("en-US")
    }
}

/// One-shot queries for the operating system's locale.
pub struct SystemLocale;

impl SystemLocale {
    /// Get the current system locale identifier.
    ///
    /// Falls back to `en-US` when the platform reports nothing, or when the
    /// `system-locale` feature is disabled.
    #[cfg(feature = "system-locale")]
    pub fn current() -> String {
        match sys_locale::get_locale() {
            Some(locale) => locale,
            None => {
                tracing::debug!(target: targets::I18N, "system locale unavailable, using en-US");
                "en-US".to_string()
            }
        }
    }

    #[cfg(not(feature = "system-locale"))]
    pub fn current() -> String {
        tracing::trace!(target: targets::I18N, "system-locale feature disabled, using en-US");
        "en-US".to_string()
    }

    /// Get the parsed components of the current system locale.
    pub fn info() -> LocaleInfo {
        LocaleInfo::parse(&Self::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_region() {
        let info = LocaleInfo::parse("fr-FR");
        assert_eq!(info.language, "fr");
        assert_eq!(info.region.as_deref(), Some("FR"));
        assert_eq!(info.script, None);
    }

    #[test]
    fn test_parse_posix_identifier() {
        let info = LocaleInfo::parse("de_de.UTF-8");
        assert_eq!(info.language, "de");
        assert_eq!(info.region.as_deref(), Some("DE"));
        assert_eq!(info.tag(), "de-DE");
    }

    #[test]
    fn test_parse_script() {
        let info = LocaleInfo::parse("zh-hant-TW");
        assert_eq!(info.script.as_deref(), Some("Hant"));
        assert_eq!(info.tag(), "zh-Hant-TW");
    }

    #[test]
    fn test_parse_empty_defaults_to_english() {
        assert_eq!(LocaleInfo::parse("").language, "en");
        assert_eq!(LocaleInfo::default().tag(), "en-US");
    }

    #[test]
    fn test_system_locale_is_parseable() {
        let info = SystemLocale::info();
        assert!(!info.language.is_empty());
    }
}
