//! # Catalog
//!
//! The read-only FAQ snapshot the core queries. A catalog is loaded once (see
//! `content`) and shared as `Arc<Catalog>`; nothing in the core mutates it.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::category::{CuratedView, Taxonomy};

/// A single FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Markdown answer body. Opaque to the core.
    #[serde(default)]
    pub content: Option<String>,
}

impl Item {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    NoCategories,
    UnknownDefault(String),
    /// A curated or direct-link category that is not in the declared set.
    UnknownCategory {
        role: &'static str,
        category: String,
    },
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::NoCategories => write!(f, "catalog declares no categories"),
            CatalogError::UnknownDefault(c) => {
                write!(f, "default category {c:?} is not a declared category")
            }
            CatalogError::UnknownCategory { role, category } => {
                write!(f, "{role} category {category:?} is not a declared category")
            }
            CatalogError::DuplicateId(id) => write!(f, "duplicate item id {id:?}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Document
// ============================================================================

/// On-disk / over-the-wire shape of a catalog.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    categories: Vec<String>,
    default_category: String,
    #[serde(default)]
    curated: Option<CuratedView>,
    #[serde(default)]
    direct_links: BTreeMap<String, String>,
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    taxonomy: Taxonomy,
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(taxonomy: Taxonomy, items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        let known = taxonomy.categories();
        for item in &items {
            if !known.iter().any(|c| c.as_str() == item.category) {
                warn!(
                    "Item {:?} has undeclared category {:?}; it will not be listed",
                    item.id, item.category
                );
            }
        }

        Ok(Self { taxonomy, items })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        let taxonomy = Taxonomy::new(
            doc.categories,
            doc.default_category,
            doc.curated,
            doc.direct_links,
        )?;
        let catalog = Self::new(taxonomy, doc.items)?;
        info!(
            "Catalog ready: {} items, {} categories",
            catalog.items.len(),
            catalog.taxonomy.categories().len()
        );
        Ok(catalog)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Items in collection order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Every tag used by at least one item, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let tags: BTreeSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().collect()
    }
}
