//! Static site generation.
//!
//! Renders the event listing as plain HTML files:
//!
//! - `index.html` - homepage with filter controls and one card per event
//! - `events/{id}.html` - one detail page per event
//! - `404.html` - page for unknown event ids
//!
//! Rendering is pure (see [`render_index`], [`render_event_page`]); only
//! [`SiteBuilder::build`] touches the filesystem.

mod html;
mod pages;

use std::io;
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;
use tracing::{debug, info};

use crate::filter::FilterCriteria;
use crate::view::ListingView;
use crate::Catalog;

pub use html::escape_html;
pub use pages::{render_event_page, render_index, render_not_found};

/// Directory (under the output root) holding the detail pages.
const EVENTS_DIR: &str = "events";

/// Default site title.
const DEFAULT_TITLE: &str = "Events";

/// Bytes escaped in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Errors that can occur while writing the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// An event id cannot be used as a file name.
    #[error("event id '{id}' cannot be used as a page name")]
    UnsafeId {
        /// The offending id.
        id: String,
    },

    /// I/O error during directory creation.
    #[error("failed to create directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write page '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for site generation.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site-wide rendering settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Site title, used for the homepage `<title>` and header.
    pub title: String,
    /// Homepage meta description.
    pub description: Option<String>,
    /// URL prefix for links. Empty means relative links.
    pub base_path: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: None,
            base_path: String::new(),
        }
    }
}

impl SiteOptions {
    /// Returns the base path with a trailing slash, or empty for relative links.
    fn prefix(&self) -> String {
        let base = self.base_path.trim();
        if base.is_empty() || base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        }
    }

    /// Link to an event's detail page from the homepage.
    ///
    /// The id is percent-encoded, so `rock#2` links to `events/rock%232.html`,
    /// which a static server maps back to the file `events/rock#2.html`.
    pub fn event_href(&self, id: &str) -> String {
        format!(
            "{}{}/{}.html",
            self.prefix(),
            EVENTS_DIR,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    /// Link to the homepage from a top-level page.
    pub fn index_href(&self) -> String {
        format!("{}index.html", self.prefix())
    }

    /// Link to the homepage from a detail page.
    pub fn index_href_from_event(&self) -> String {
        let prefix = self.prefix();
        if prefix.is_empty() {
            "../index.html".to_string()
        } else {
            format!("{prefix}index.html")
        }
    }
}

/// Result of resolving a detail page by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The rendered detail page.
    Found(String),
    /// No event has the id; callers should serve the 404 page.
    NotFound,
}

/// Renders the detail page for `id`, or reports that it does not exist.
pub fn render_event_page_by_id(catalog: &Catalog, id: &str, options: &SiteOptions) -> PageOutcome {
    match catalog.lookup_by_id(id) {
        Some(event) => PageOutcome::Found(render_event_page(event, options)),
        None => PageOutcome::NotFound,
    }
}

/// Returns true if the id is usable as a single path segment.
fn is_safe_page_name(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control())
}

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Output root directory.
    pub out_dir: PathBuf,
    /// Every file written, in write order.
    pub pages: Vec<PathBuf>,
    /// Number of events shown on the homepage.
    pub listed: usize,
}

impl BuildReport {
    /// Number of files written.
    pub fn pages_written(&self) -> usize {
        self.pages.len()
    }
}

/// Writes the full static site for a catalog.
///
/// # Example
///
/// ```no_run
/// use evsite_catalog::site::{SiteBuilder, SiteOptions};
/// use evsite_catalog::CatalogStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = CatalogStore::with_path("data/events.json".into()).load()?;
///     let report = SiteBuilder::new(&catalog, SiteOptions::default())
///         .build("public".as_ref())
///         .await?;
///     println!("wrote {} pages", report.pages_written());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SiteBuilder<'a> {
    catalog: &'a Catalog,
    options: SiteOptions,
    criteria: FilterCriteria,
}

impl<'a> SiteBuilder<'a> {
    /// Creates a builder that lists every event on the homepage.
    pub fn new(catalog: &'a Catalog, options: SiteOptions) -> Self {
        Self {
            catalog,
            options,
            criteria: FilterCriteria::default(),
        }
    }

    /// Pre-filters the homepage listing.
    ///
    /// Detail pages are still written for every event.
    pub fn with_criteria(self, criteria: FilterCriteria) -> Self {
        Self { criteria, ..self }
    }

    /// Renders and writes every page under `out_dir`.
    ///
    /// # Errors
    ///
    /// - Returns `SiteError::UnsafeId` if an id contains a path separator.
    ///   Ids are checked before anything is written.
    /// - Returns `SiteError::CreateDirError` or `SiteError::WriteError` on I/O failure.
    pub async fn build(&self, out_dir: &Path) -> Result<BuildReport> {
        if let Some(event) = self
            .catalog
            .events()
            .iter()
            .find(|e| !is_safe_page_name(&e.id))
        {
            return Err(SiteError::UnsafeId {
                id: event.id.clone(),
            });
        }

        let events_dir = out_dir.join(EVENTS_DIR);
        create_dir(&events_dir).await?;

        let view = ListingView::with_criteria(self.catalog, self.criteria.clone());
        let listed = view.visible().len();
        let mut pages = Vec::with_capacity(self.catalog.len() + 2);

        let index_path = out_dir.join("index.html");
        write_page(&index_path, &render_index(&view, &self.options)).await?;
        pages.push(index_path);

        let not_found_path = out_dir.join("404.html");
        write_page(&not_found_path, &render_not_found(&self.options)).await?;
        pages.push(not_found_path);

        for event in self.catalog.events() {
            let path = events_dir.join(format!("{}.html", event.id));
            write_page(&path, &render_event_page(event, &self.options)).await?;
            pages.push(path);
        }

        info!(
            out_dir = %out_dir.display(),
            pages = pages.len(),
            listed,
            "site written"
        );

        Ok(BuildReport {
            out_dir: out_dir.to_path_buf(),
            pages,
            listed,
        })
    }
}

async fn create_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| SiteError::CreateDirError {
            path: path.to_path_buf(),
            source: e,
        })
}

async fn write_page(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = contents.len(), "writing page");
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| SiteError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests;
