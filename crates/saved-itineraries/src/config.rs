//! Saved-itinerary storage configuration loaded via OrthoConfig.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    DEFAULT_STORAGE_KEY, Locale, StorageKey, StorageKeyValidationError, UnsupportedLocaleError,
};

const DEFAULT_DATA_DIR: &str = ".tripshare";

/// Configuration values controlling where saved itineraries live.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SAVED_ITINERARIES")]
pub struct SavedItinerariesSettings {
    /// Directory holding the key-value files.
    pub data_dir: Option<PathBuf>,
    /// Key the saved-itinerary blob is stored under.
    pub storage_key: Option<String>,
    /// Language used for relative date labels (`fr` or `en`).
    pub locale: Option<String>,
}

/// Errors raised when settings hold unusable values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The data directory is not valid UTF-8.
    #[error("data directory '{path}' is not valid UTF-8")]
    NonUtf8DataDir {
        /// Lossy rendering of the offending path.
        path: String,
    },
    /// The storage key failed validation.
    #[error("invalid storage key: {0}")]
    StorageKey(#[from] StorageKeyValidationError),
    /// The locale is not supported.
    #[error(transparent)]
    Locale(#[from] UnsupportedLocaleError),
}

impl SavedItinerariesSettings {
    /// Return the configured data directory, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NonUtf8DataDir`] for non-UTF-8 paths.
    pub fn data_dir(&self) -> Result<Utf8PathBuf, SettingsError> {
        let Some(path) = self.data_dir.clone() else {
            return Ok(Utf8PathBuf::from(DEFAULT_DATA_DIR));
        };
        Utf8PathBuf::from_path_buf(path).map_err(|raw| SettingsError::NonUtf8DataDir {
            path: raw.to_string_lossy().into_owned(),
        })
    }

    /// Return the configured storage key, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::StorageKey`] when the key is unsafe.
    pub fn storage_key(&self) -> Result<StorageKey, SettingsError> {
        let raw = self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY);
        StorageKey::new(raw).map_err(SettingsError::from)
    }

    /// Return the configured locale, falling back to French.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Locale`] for unsupported codes.
    pub fn locale(&self) -> Result<Locale, SettingsError> {
        self.locale
            .as_deref()
            .map_or(Ok(Locale::default()), str::parse::<Locale>)
            .map_err(SettingsError::from)
    }
}
