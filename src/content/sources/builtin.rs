//! The demo catalog compiled into the binary, used when nothing is configured.

use async_trait::async_trait;

use crate::content::{ContentSource, SourceError};
use crate::core::catalog::Catalog;

pub const BUILTIN_CATALOG: &str = include_str!("../../../assets/catalog.json");

pub struct BuiltinSource;

#[async_trait]
impl ContentSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn load(&self) -> Result<Catalog, SourceError> {
        Ok(Catalog::from_json(BUILTIN_CATALOG)?)
    }
}
