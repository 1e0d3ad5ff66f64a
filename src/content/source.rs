use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::content::sources::{BuiltinSource, FileSource, HttpSource};
use crate::core::catalog::{Catalog, CatalogError};

/// Errors that can occur while fetching a catalog.
#[derive(Debug)]
pub enum SourceError {
    /// Source misconfigured (bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// Server returned an error response.
    Api { status: u16, message: String },
    /// Local file could not be read.
    Io(std::io::Error),
    /// The document was fetched but is not a valid catalog.
    Catalog(CatalogError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "config error: {msg}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            SourceError::Io(e) => write!(f, "read error: {e}"),
            SourceError::Catalog(e) => write!(f, "invalid catalog: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<CatalogError> for SourceError {
    fn from(e: CatalogError) -> Self {
        SourceError::Catalog(e)
    }
}

/// Where the FAQ snapshot comes from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short human-readable description for logs.
    fn name(&self) -> &str;

    /// Fetches and validates the whole catalog.
    async fn load(&self) -> Result<Catalog, SourceError>;
}

/// Picks a source for a configured catalog location: http(s) URLs are
/// fetched, anything else is a file path, and `None` is the built-in demo.
pub fn source_for(location: Option<&str>) -> Result<Arc<dyn ContentSource>, SourceError> {
    match location {
        None => Ok(Arc::new(BuiltinSource)),
        Some(s) if s.starts_with("http://") || s.starts_with("https://") => {
            Ok(Arc::new(HttpSource::new(s)?))
        }
        Some(s) => Ok(Arc::new(FileSource::new(s))),
    }
}
