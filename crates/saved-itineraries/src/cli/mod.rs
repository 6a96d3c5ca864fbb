//! CLI support for inspecting and editing saved itineraries on disk.
//!
//! The binary parses [`CliArgs`] and delegates here, so option resolution and
//! command execution can be exercised in tests without spawning a process.

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::{Parser, Subcommand};
use mockable::Clock;

pub use self::error::CliError;
use crate::config::SavedItinerariesSettings;
use crate::domain::ports::{KeyValueStore, SavedItinerariesCommand, SavedItinerariesQuery};
use crate::domain::{
    Locale, SavedItinerary, SavedItineraryDraft, SavedItineraryStore, StorageKey,
    filter_by_destination, filter_by_tag,
};
use crate::outbound::DirectoryKeyValueStore;

/// `saved-itineraries` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "saved-itineraries",
    about = "Inspect and edit the saved-itinerary collection stored on this device",
    version
)]
pub struct CliArgs {
    /// Directory holding the key-value files. Overrides configuration.
    #[arg(long = "data-dir", value_name = "path", global = true)]
    pub data_dir: Option<PathBuf>,
    /// Key the collection is stored under. Overrides configuration.
    #[arg(long = "storage-key", value_name = "key", global = true)]
    pub storage_key: Option<String>,
    /// Locale for relative date labels (`fr` or `en`). Overrides configuration.
    #[arg(long = "locale", value_name = "code", global = true)]
    pub locale: Option<String>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands understood by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List saved itineraries, newest first.
    List {
        /// Keep itineraries whose destination contains this text.
        #[arg(long = "destination", value_name = "query")]
        destination: Option<String>,
        /// Keep itineraries with a tag containing this text.
        #[arg(long = "tag", value_name = "query")]
        tag: Option<String>,
    },
    /// Save an itinerary from a JSON draft file.
    Save {
        /// Path to the draft JSON file.
        #[arg(long = "file", value_name = "path")]
        file: Utf8PathBuf,
    },
    /// Remove the itinerary saved for a trip.
    Remove {
        /// Trip identifier.
        trip_id: String,
    },
    /// Report whether a trip has a saved itinerary.
    Exists {
        /// Trip identifier.
        trip_id: String,
    },
    /// Print the number of saved itineraries.
    Count,
    /// Delete the whole collection.
    Clear,
}

/// Options resolved from flags layered over loaded settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Directory holding the key-value files.
    pub data_dir: Utf8PathBuf,
    /// Key the collection is stored under.
    pub storage_key: StorageKey,
    /// Locale for relative date labels.
    pub locale: Locale,
}

/// Layer command-line flags over `settings` and validate the result.
///
/// # Errors
///
/// Returns [`CliError::Settings`] when a value is unusable.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use saved_itineraries::cli::{CliArgs, resolve_options};
/// use saved_itineraries::config::SavedItinerariesSettings;
/// use saved_itineraries::domain::Locale;
///
/// let args = CliArgs::parse_from(["saved-itineraries", "--locale", "en", "count"]);
/// let settings = SavedItinerariesSettings {
///     data_dir: None,
///     storage_key: Some("favorites".to_owned()),
///     locale: Some("fr".to_owned()),
/// };
///
/// let options = resolve_options(&args, settings).expect("options resolve");
/// assert_eq!(options.locale, Locale::English);
/// assert_eq!(options.storage_key.as_str(), "favorites");
/// ```
pub fn resolve_options(
    args: &CliArgs,
    settings: SavedItinerariesSettings,
) -> Result<ResolvedOptions, CliError> {
    let merged = SavedItinerariesSettings {
        data_dir: args.data_dir.clone().or(settings.data_dir),
        storage_key: args.storage_key.clone().or(settings.storage_key),
        locale: args.locale.clone().or(settings.locale),
    };
    Ok(ResolvedOptions {
        data_dir: merged.data_dir()?,
        storage_key: merged.storage_key()?,
        locale: merged.locale()?,
    })
}

/// Open the directory-backed store described by `options`.
///
/// # Errors
///
/// Returns [`CliError::OpenDataDir`] when the directory cannot be created or
/// opened.
pub fn open_store(
    options: &ResolvedOptions,
    clock: Arc<dyn Clock>,
) -> Result<SavedItineraryStore<DirectoryKeyValueStore>, CliError> {
    let storage =
        DirectoryKeyValueStore::open(&options.data_dir).map_err(|err| CliError::OpenDataDir {
            path: options.data_dir.to_string(),
            message: err.to_string(),
        })?;
    Ok(SavedItineraryStore::new(
        Arc::new(storage),
        options.storage_key.clone(),
        clock,
    ))
}

/// Read and parse a draft JSON file.
///
/// # Errors
///
/// Returns [`CliError::ReadDraft`] or [`CliError::ParseDraft`].
pub fn read_draft(path: &Utf8Path) -> Result<SavedItineraryDraft, CliError> {
    let read_error = |message: String| CliError::ReadDraft {
        path: path.to_string(),
        message,
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error("draft path must name a file".to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| read_error(err.to_string()))?;
    let text = dir
        .read_to_string(file_name)
        .map_err(|err| read_error(err.to_string()))?;
    serde_json::from_str(&text).map_err(|err| CliError::ParseDraft {
        path: path.to_string(),
        message: err.to_string(),
    })
}

/// Run `command` against `store`, returning the lines to print.
///
/// # Errors
///
/// Returns [`CliError::Store`] when the store rejects a mutation, including
/// duplicate saves, and the draft errors of [`read_draft`].
pub async fn execute<S>(
    store: &SavedItineraryStore<S>,
    command: &Command,
    locale: Locale,
) -> Result<Vec<String>, CliError>
where
    S: KeyValueStore,
{
    match command {
        Command::List { destination, tag } => {
            let mut itineraries = store.list().await;
            if let Some(query) = destination {
                itineraries = filter_by_destination(itineraries, query);
            }
            if let Some(query) = tag {
                itineraries = filter_by_tag(itineraries, query);
            }
            if itineraries.is_empty() {
                return Ok(vec!["no saved itineraries".to_owned()]);
            }
            Ok(itineraries
                .iter()
                .map(|itinerary| listing_line(store, itinerary, locale))
                .collect())
        }
        Command::Save { file } => {
            let draft = read_draft(file)?;
            let saved = store.save(draft).await?;
            Ok(vec![format!(
                "saved trip '{}' to {}",
                saved.trip_id(),
                saved.destination()
            )])
        }
        Command::Remove { trip_id } => {
            store.remove(trip_id).await?;
            Ok(vec![format!("removed trip '{trip_id}'")])
        }
        Command::Exists { trip_id } => {
            let verdict = if store.exists(trip_id).await {
                "is saved"
            } else {
                "is not saved"
            };
            Ok(vec![format!("trip '{trip_id}' {verdict}")])
        }
        Command::Count => Ok(vec![store.count().await.to_string()]),
        Command::Clear => {
            store.clear().await?;
            Ok(vec!["cleared saved itineraries".to_owned()])
        }
    }
}

fn listing_line<S>(
    store: &SavedItineraryStore<S>,
    itinerary: &SavedItinerary,
    locale: Locale,
) -> String {
    let label = store.saved_date_label(itinerary, locale);
    let tags = itinerary.display_tags().join(", ");
    if tags.is_empty() {
        format!("{}\t{}\t{label}", itinerary.destination(), itinerary.trip_id())
    } else {
        format!(
            "{}\t{}\t{label}\t{tags}",
            itinerary.destination(),
            itinerary.trip_id()
        )
    }
}
