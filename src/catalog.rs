//! Translation catalog management
//!
//! Loads per-locale string catalogs used to localize status labels and
//! other display strings. A catalog file is a plain YAML map from source
//! string to translated string; lookups fall back to the source string so
//! display never fails on a missing entry.
//!
//! Catalog files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/checkup/translations/<locale>.yaml`
//! - Linux: `~/.config/checkup/translations/<locale>.yaml`
//! - Windows: `%APPDATA%\checkup\translations\<locale>.yaml`

use crate::traits::Translate;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A per-locale catalog of translated display strings
///
/// Maps source-language strings to their localized equivalents for one
/// locale. An empty catalog behaves as the identity translation.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    /// Locale tag the catalog was requested for (e.g. "de-DE")
    locale: String,
    strings: HashMap<String, String>,
}

impl StringCatalog {
    /// Loads the catalog for a locale from the default translations directory
    ///
    /// Resolution order: `<locale>.yaml`, then the bare language part (so
    /// "de-DE" falls back to `de.yaml`). If neither file exists the catalog
    /// is empty and every lookup returns its input unchanged.
    ///
    /// # Errors
    /// Returns an error if a catalog file exists but cannot be read or parsed.
    pub fn load(locale: &str) -> Result<Self> {
        let dir = Self::translations_dir()?;
        Self::load_from(&dir, locale)
    }

    /// Loads the catalog for a locale from an explicit directory
    ///
    /// Same resolution rules as [`StringCatalog::load`]; exposed separately
    /// so hosts can ship catalogs next to their own assets.
    ///
    /// # Errors
    /// Returns an error if a catalog file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path, locale: &str) -> Result<Self> {
        for candidate in locale_candidates(locale) {
            let path = dir.join(format!("{}.yaml", candidate));
            if !path.exists() {
                continue;
            }
            if candidate != locale {
                warn!(locale, fallback = %candidate, "locale catalog missing, using language fallback");
            }

            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read catalog from {:?}", path))?;
            let catalog = Self::from_yaml_str(locale, &contents)
                .with_context(|| format!("Failed to parse catalog {:?}", path))?;

            debug!(locale, entries = catalog.len(), path = %path.display(), "loaded translation catalog");
            return Ok(catalog);
        }

        debug!(locale, "no translation catalog found, using identity");
        Ok(Self {
            locale: locale.to_string(),
            strings: HashMap::new(),
        })
    }

    /// Parses a catalog from YAML text
    ///
    /// The document must be a flat map of source string to translation.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid YAML string map.
    pub fn from_yaml_str(locale: &str, contents: &str) -> Result<Self> {
        let strings: HashMap<String, String> =
            serde_yaml::from_str(contents).with_context(|| "Catalog is not a YAML string map")?;
        Ok(Self {
            locale: locale.to_string(),
            strings,
        })
    }

    /// Returns the platform-specific translations directory
    ///
    /// Uses the `directories` crate to determine the appropriate location,
    /// falling back to `~/.config/checkup/translations` if platform
    /// detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn translations_dir() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "checkup") {
            Ok(proj_dirs.config_dir().join("translations"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/checkup/translations"))
        }
    }

    /// Locale tag this catalog was loaded for
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of translated entries
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when the catalog holds no translations
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Translate for StringCatalog {
    fn translate(&self, text: &str) -> String {
        match self.strings.get(text) {
            Some(translated) => translated.clone(),
            None => text.to_string(),
        }
    }
}

/// Lookup candidates for a locale tag: the tag itself, then its language part
fn locale_candidates(locale: &str) -> Vec<String> {
    let mut candidates = vec![locale.to_string()];
    if let Some(language) = locale.split(['-', '_']).next() {
        if !language.is_empty() && language != locale {
            candidates.push(language.to_string());
        }
    }
    candidates
}
