//! Catalog loading with a one-shot fallback.
//!
//! A session loads its catalog once, before anything is rendered. The
//! primary source is tried first; if it fails for any reason the fallback
//! is tried exactly once. If both fail the session carries on with an
//! empty catalog and a status message describing the last failure.
//!
//! Sources are anything implementing [`CatalogSource`]. Local files are
//! always available; URLs need the `http` feature.

use std::fs;
use std::path::PathBuf;

use log::{error, info, warn};

use super::registry::CardCatalog;
use crate::core::error::CatalogError;

/// Somewhere a catalog document can be fetched from.
pub trait CatalogSource {
    /// Where this source points, for status messages.
    fn describe(&self) -> String;

    /// Fetch the raw catalog document.
    fn fetch(&self) -> Result<String, CatalogError>;

    /// Fetch and parse.
    fn load(&self) -> Result<CardCatalog, CatalogError> {
        let body = self.fetch()?;
        CardCatalog::from_json(&body).map_err(|source| CatalogError::Parse {
            origin: self.describe(),
            source,
        })
    }
}

/// A catalog document on the local filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, CatalogError> {
        fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// A catalog document served over HTTP.
#[cfg(feature = "http")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSource {
    url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "http")]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, CatalogError> {
        let request_error = |source| CatalogError::Request {
            url: self.url.clone(),
            source,
        };

        let response = reqwest::blocking::get(&self.url).map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(request_error)
    }
}

/// A URL given to a build without the `http` feature. Always fails.
#[cfg(not(feature = "http"))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct UnsupportedSource {
    location: String,
}

#[cfg(not(feature = "http"))]
impl CatalogSource for UnsupportedSource {
    fn describe(&self) -> String {
        self.location.clone()
    }

    fn fetch(&self) -> Result<String, CatalogError> {
        Err(CatalogError::Unsupported {
            location: self.location.clone(),
        })
    }
}

/// Pick a source for a path or `http(s)://` URL.
#[must_use]
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    let is_url = location.starts_with("http://") || location.starts_with("https://");
    if !is_url {
        return Box::new(FileSource::new(location));
    }

    #[cfg(feature = "http")]
    {
        Box::new(HttpSource::new(location))
    }
    #[cfg(not(feature = "http"))]
    {
        Box::new(UnsupportedSource {
            location: location.to_string(),
        })
    }
}

/// Outcome of a catalog load, shown to the user as a status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Loaded from the named source.
    Loaded { source: String },

    /// Every source failed; the catalog is empty.
    Failed { message: String },
}

impl CatalogStatus {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogStatus::Loaded { .. })
    }
}

impl std::fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogStatus::Loaded { source } => write!(f, "Cards loaded from {source}."),
            CatalogStatus::Failed { message } => write!(f, "Failed to load cards: {message}"),
        }
    }
}

/// Result of [`load_catalog`]: always a usable catalog, plus how it went.
#[derive(Clone, Debug)]
pub struct CatalogLoad {
    pub catalog: CardCatalog,
    pub status: CatalogStatus,
}

/// Load a catalog from `primary`, retrying once against `fallback`.
///
/// Never fails: when no source works the returned catalog is empty and
/// `status` carries the last error.
pub fn load_catalog(
    primary: &dyn CatalogSource,
    fallback: Option<&dyn CatalogSource>,
) -> CatalogLoad {
    let mut last_error = match primary.load() {
        Ok(catalog) => return loaded(catalog, primary),
        Err(err) => err,
    };

    if let Some(fallback) = fallback {
        warn!(
            "catalog source {} failed ({last_error}), trying {}",
            primary.describe(),
            fallback.describe()
        );
        match fallback.load() {
            Ok(catalog) => return loaded(catalog, fallback),
            Err(err) => last_error = err,
        }
    }

    error!("failed to load cards: {last_error}");
    CatalogLoad {
        catalog: CardCatalog::new(),
        status: CatalogStatus::Failed {
            message: last_error.to_string(),
        },
    }
}

fn loaded(catalog: CardCatalog, source: &dyn CatalogSource) -> CatalogLoad {
    info!("loaded {} card definitions from {}", catalog.len(), source.describe());
    CatalogLoad {
        catalog,
        status: CatalogStatus::Loaded {
            source: source.describe(),
        },
    }
}
