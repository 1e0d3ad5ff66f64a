//! # Categories
//!
//! A catalog declares a closed set of category tokens plus the one the app
//! falls back to. External strings (URL parameters, CLI flags, key presses)
//! only become a [`Category`] by going through [`Taxonomy::validate`], so
//! holding a `Category` means holding a member of the set.
//!
//! ```text
//! Taxonomy
//! ├── categories: Vec<String>          // declared order, used for tabs
//! ├── default: String                  // fallback for anything invalid
//! ├── curated: Option<CuratedView>     // "top questions" view + id order
//! └── direct_links: BTreeMap<..>       // category → the one item it opens
//! ```

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::catalog::CatalogError;

/// A validated member of the catalog's category set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category(String);

impl Category {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The curated listing: a category whose items are an authored id sequence
/// rather than a view-count sort.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CuratedView {
    pub category: String,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<String>,
    default: String,
    curated: Option<CuratedView>,
    direct_links: BTreeMap<String, String>,
}

impl Taxonomy {
    /// Builds a taxonomy, rejecting configurations whose special categories
    /// are not members of the declared set.
    pub fn new(
        categories: Vec<String>,
        default: String,
        curated: Option<CuratedView>,
        direct_links: BTreeMap<String, String>,
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        if !categories.contains(&default) {
            return Err(CatalogError::UnknownDefault(default));
        }
        if let Some(view) = &curated
            && !categories.contains(&view.category)
        {
            return Err(CatalogError::UnknownCategory {
                role: "curated",
                category: view.category.clone(),
            });
        }
        if let Some(category) = direct_links.keys().find(|c| !categories.contains(c)) {
            return Err(CatalogError::UnknownCategory {
                role: "direct link",
                category: category.clone(),
            });
        }

        Ok(Self {
            categories,
            default,
            curated,
            direct_links,
        })
    }

    /// Maps any external string to a member of the set.
    ///
    /// Matching is exact: no trimming, no case folding. Absent, empty and
    /// unknown values all yield the default category.
    pub fn validate(&self, raw: Option<&str>) -> Category {
        match raw {
            Some(value) if self.categories.iter().any(|c| c == value) => {
                Category(value.to_string())
            }
            Some(value) => {
                debug!("Unknown category {:?}, falling back to {:?}", value, self.default);
                self.default_category()
            }
            None => self.default_category(),
        }
    }

    pub fn default_category(&self) -> Category {
        Category(self.default.clone())
    }

    /// All categories in declared order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.iter().cloned().map(Category).collect()
    }

    pub fn is_curated(&self, category: &Category) -> bool {
        self.curated
            .as_ref()
            .is_some_and(|view| view.category == category.as_str())
    }

    /// The authored id order for the curated view (empty when none is configured).
    pub fn curated_ids(&self) -> &[String] {
        self.curated.as_ref().map(|v| v.ids.as_slice()).unwrap_or(&[])
    }

    /// Returns the item a direct-link category opens, or `None` for a normal
    /// listing category.
    pub fn resolve_direct_link(&self, category: &Category) -> Option<&str> {
        self.direct_links.get(category.as_str()).map(String::as_str)
    }
}
