//! Catalog read from a local JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::content::{ContentSource, SourceError};
use crate::core::catalog::Catalog;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// A leading `~/` is expanded to the home directory.
    pub fn new(path: &str) -> Self {
        let path = match (path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(path),
        };
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl ContentSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<Catalog, SourceError> {
        info!("Reading catalog from {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(SourceError::Io)?;
        Ok(Catalog::from_json(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_kept() {
        assert_eq!(FileSource::new("faq.json").path(), &PathBuf::from("faq.json"));
    }

    #[test]
    fn test_tilde_expanded() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(FileSource::new("~/faq.json").path(), &home.join("faq.json"));
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here/catalog.json");
        assert!(matches!(source.load().await, Err(SourceError::Io(_))));
    }
}
