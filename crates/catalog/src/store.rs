//! Dataset file loading with XDG path support.
//!
//! The event dataset is a JSON array of event records. By default it is read
//! from `~/.local/share/evsite/events.json`; any other path can be supplied.
//!
//! Both synchronous and asynchronous I/O methods are provided:
//! - `load()` - Synchronous, using `std::fs`
//! - `load_async()` - Asynchronous, using `tokio::fs`
//!
//! The dataset is read once, wholesale, and never written back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::{Catalog, CatalogError, Event};

/// Default dataset filename.
const DATA_FILENAME: &str = "events.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "evsite";

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// Failed to determine XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read dataset '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON deserialization error.
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The records parsed but do not form a valid catalog.
    #[error("invalid dataset: {0}")]
    Invalid(#[from] CatalogError),
}

/// Result type for dataset store operations.
pub type Result<T> = std::result::Result<T, CatalogStoreError>;

/// Read-only access to the event dataset file.
///
/// # Example
///
/// ```no_run
/// use evsite_catalog::CatalogStore;
///
/// let store = CatalogStore::with_path("data/events.json".into());
/// let catalog = store.load()?;
/// println!("{} events", catalog.len());
/// # Ok::<(), evsite_catalog::CatalogStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Path to the dataset file.
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a new `CatalogStore` with the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `CatalogStore` reading from a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default XDG path for the dataset file.
    ///
    /// On Unix: `~/.local/share/evsite/events.json`
    /// On macOS: `~/Library/Application Support/evsite/events.json`
    /// On Windows: `C:\Users\<User>\AppData\Roaming\evsite\data\events.json`
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CatalogStoreError::NoDataDir)?;

        Ok(project_dirs.data_dir().join(DATA_FILENAME))
    }

    /// Returns the path to the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the dataset file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the dataset from disk.
    ///
    /// # Errors
    ///
    /// - Returns `CatalogStoreError::ReadError` if the file cannot be read.
    /// - Returns `CatalogStoreError::Json` if the file is not a JSON array of events.
    /// - Returns `CatalogStoreError::Invalid` for blank or duplicate ids.
    pub fn load(&self) -> Result<Catalog> {
        let contents = fs::read_to_string(&self.path).map_err(|e| CatalogStoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        self.parse(&contents)
    }

    /// Loads the dataset from disk asynchronously.
    ///
    /// Uses `tokio::fs` to avoid blocking the async runtime.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogStore::load`].
    pub async fn load_async(&self) -> Result<Catalog> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogStoreError::ReadError {
                path: self.path.clone(),
                source: e,
            }
        })?;
        self.parse(&contents)
    }

    /// Parses dataset contents into a validated catalog.
    fn parse(&self, contents: &str) -> Result<Catalog> {
        let events: Vec<Event> = serde_json::from_str(contents)?;
        debug!(path = %self.path.display(), count = events.len(), "parsed event dataset");
        Ok(Catalog::from_events(events)?)
    }
}
