//! One-shot catalog loading.
//!
//! The catalog is fetched exactly once at startup. This is the only
//! suspension point in the program: nothing is filtered or rendered until it
//! has completed, and a failure is fatal. There is no retry and no partial
//! fallback.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::{CatalogError, RecordStore};
use thiserror::Error;

/// Time allowed for an HTTP fetch, connection included.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that stop the catalog from loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading a local catalog file failed.
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request could not be completed.
    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The payload is not a usable catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

// =============================================================================
// Sources
// =============================================================================

/// Somewhere a catalog can be fetched from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location for logs.
    fn describe(&self) -> String;

    /// Fetch the raw catalog bytes.
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

/// A catalog stored on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// A catalog served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|source| LoadError::Http {
                url: url.clone(),
                source,
            })?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let http_error = |source| LoadError::Http {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(http_error)?;
        Ok(bytes.to_vec())
    }
}

/// Pick a source for a location: `http://` and `https://` are fetched over
/// the network, anything else is a file path.
pub fn source_for(location: &str) -> Result<Box<dyn CatalogSource>, LoadError> {
    let location = location.trim();
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Fetch and parse the catalog.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<RecordStore, LoadError> {
    tracing::info!("Loading catalog from {}", source.describe());

    let bytes = source.fetch().await?;
    let store = RecordStore::from_json(&bytes)?;

    if store.is_empty() {
        tracing::warn!("Catalog at {} contains no records", source.describe());
    } else {
        tracing::info!("Loaded {} records", store.len());
    }

    Ok(store)
}
