//! Embedded message catalogs.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use horizon_aria_core::logging::targets;
use include_dir::{Dir, include_dir};
use parking_lot::Mutex;

use super::I18nError;
use super::locale::LocaleInfo;

static INTL: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/intl");

/// Locales shipped with every namespace.
pub const SUPPORTED_LOCALES: &[&str] = &["en-US", "de-DE", "fr-FR", "es-ES", "ja-JP"];

/// The locale used when nothing better matches.
pub const DEFAULT_LOCALE: &str = "en-US";

type CacheKey = (String, &'static str);

static CACHE: LazyLock<Mutex<HashMap<CacheKey, Arc<MessageCatalog>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Map a requested locale onto a supported one.
///
/// Tries the exact tag first, then any supported locale with the same
/// language, then [`DEFAULT_LOCALE`].
pub fn resolve_locale(requested: &str) -> &'static str {
    let info = LocaleInfo::parse(requested);
    let tag = info.tag();

    if let Some(exact) = SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|l| l.eq_ignore_ascii_case(&tag))
    {
        return exact;
    }
    if let Some(same_language) = SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|l| LocaleInfo::parse(l).language == info.language)
    {
        return same_language;
    }

    tracing::debug!(target: targets::I18N, requested, fallback = DEFAULT_LOCALE, "unsupported locale");
    DEFAULT_LOCALE
}

/// The messages of one namespace in one locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    namespace: String,
    locale: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Parse a catalog from JSON text (an object of key → message template).
    pub fn from_json(
        namespace: impl Into<String>,
        locale: impl Into<String>,
        json: &str,
    ) -> Result<Self, I18nError> {
        let namespace = namespace.into();
        let locale = locale.into();
        let messages = serde_json::from_str(json).map_err(|source| I18nError::Catalog {
            path: format!("{namespace}/{locale}.json"),
            source,
        })?;
        Ok(Self {
            namespace,
            locale,
            messages,
        })
    }

    /// Load the embedded catalog for `namespace`, resolving `locale` first.
    ///
    /// If the resolved locale has no file for this namespace, the default
    /// locale's file is used instead. Parsed catalogs are cached for the
    /// lifetime of the process.
    pub fn load(namespace: &str, locale: &str) -> Result<Arc<Self>, I18nError> {
        let resolved = resolve_locale(locale);
        let key = (namespace.to_string(), resolved);
        if let Some(cached) = CACHE.lock().get(&key) {
            return Ok(cached.clone());
        }

        let (file_locale, contents) = [resolved, DEFAULT_LOCALE]
            .into_iter()
            .find_map(|candidate| {
                INTL.get_file(format!("{namespace}/{candidate}.json"))
                    .and_then(|file| file.contents_utf8())
                    .map(|contents| (candidate, contents))
            })
            .ok_or_else(|| I18nError::UnknownNamespace(namespace.to_string()))?;

        if file_locale != resolved {
            tracing::warn!(
                target: targets::I18N,
                namespace,
                locale = resolved,
                "no catalog for locale, falling back to {DEFAULT_LOCALE}"
            );
        }

        let catalog = Arc::new(Self::from_json(namespace, file_locale, contents)?);
        tracing::debug!(
            target: targets::I18N,
            namespace,
            locale = file_locale,
            messages = catalog.len(),
            "loaded message catalog"
        );
        Ok(CACHE.lock().entry(key).or_insert(catalog).clone())
    }

    /// The namespace this catalog belongs to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The locale of the messages.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a raw message template.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
