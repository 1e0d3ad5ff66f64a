//! # Result Resolution
//!
//! Decides which signal produces the visible list. Precedence, strongest first:
//!
//! ```text
//! query (trimmed, non-empty) ──► fuzzy title search      (category + tag ignored)
//! curated category          ──► authored id order
//! any other category        ──► category filter, view_count desc
//!            then, unless searching: keep items carrying `tag`
//! ```

use crate::core::catalog::{Catalog, Item};
use crate::core::category::Category;
use crate::core::ordering::{by_view_count, curated};
use crate::core::search::Matcher;

/// The triple that fully determines the visible list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub query: String,
    pub category: Category,
    pub tag: Option<String>,
}

impl NavigationState {
    pub fn new(category: Category) -> Self {
        Self {
            query: String::new(),
            category,
            tag: None,
        }
    }

    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// True when a non-blank query overrides category and tag.
    pub fn is_searching(&self) -> bool {
        !self.trimmed_query().is_empty()
    }
}

pub fn resolve<'a>(state: &NavigationState, catalog: &'a Catalog, matcher: &Matcher) -> Vec<&'a Item> {
    let items = catalog.items();

    if state.is_searching() {
        return matcher.search(state.trimmed_query(), items);
    }

    let taxonomy = catalog.taxonomy();
    let listed = if taxonomy.is_curated(&state.category) {
        curated(taxonomy.curated_ids(), items)
    } else {
        by_view_count(&state.category, items)
    };

    match &state.tag {
        Some(tag) => listed.into_iter().filter(|item| item.has_tag(tag)).collect(),
        None => listed,
    }
}
