//! # Application State
//!
//! Core navigation state for faqnav. Domain logic only: presentation state
//! (selection, scroll, focus) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>     // immutable snapshot for the session
//! ├── matcher: Matcher          // title search + threshold
//! ├── base_url: Url             // origin for shareable links
//! ├── share_reset: Duration     // how long "Copied" stays lit
//! ├── nav: NavigationState      // (query, category, tag)
//! ├── view: View                // listing / detail / not found
//! ├── share: ShareState         // copied flag, manual-copy fallback
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::core::catalog::{Catalog, Item};
use crate::core::category::Category;
use crate::core::config::{DEFAULT_SHARE_RESET_MS, ResolvedConfig};
use crate::core::location::Location;
use crate::core::resolve::{NavigationState, resolve};
use crate::core::search::Matcher;

/// Which route is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Listing,
    Detail {
        id: String,
        /// Category the user came from, for the way back. Never filters.
        context: Option<Category>,
    },
    NotFound {
        path: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareState {
    pub copied: bool,
    /// Bumped on every successful copy so stale reset timers are ignored.
    pub generation: u64,
    /// Set when the clipboard failed: the link the user should copy by hand.
    pub manual_copy: Option<String>,
}

pub struct App {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub base_url: Url,
    pub share_reset: Duration,
    pub nav: NavigationState,
    pub view: View,
    pub share: ShareState,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, base_url: Url) -> Self {
        let nav = NavigationState::new(catalog.taxonomy().default_category());
        Self {
            catalog,
            matcher: Matcher::default(),
            base_url,
            share_reset: Duration::from_millis(DEFAULT_SHARE_RESET_MS),
            nav,
            view: View::Listing,
            share: ShareState::default(),
            status_message: String::new(),
        }
    }

    pub fn from_config(catalog: Arc<Catalog>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog, config.base_url.clone());
        app.matcher = Matcher::new(config.search_threshold);
        app.share_reset = config.share_reset;
        app
    }

    /// The visible list for the current navigation state.
    pub fn results(&self) -> Vec<&Item> {
        resolve(&self.nav, &self.catalog, &self.matcher)
    }

    /// The item a detail view points at, if it exists.
    pub fn detail_item(&self) -> Option<&Item> {
        match &self.view {
            View::Detail { id, .. } => self.catalog.get(id),
            _ => None,
        }
    }

    /// The category the tab strip shows as selected.
    ///
    /// A direct-link category never becomes `nav.category`, so while its item
    /// is open the detail context stands in for it.
    pub fn active_category(&self) -> &Category {
        if let View::Detail {
            context: Some(category),
            ..
        } = &self.view
            && self.catalog.taxonomy().resolve_direct_link(category).is_some()
        {
            return category;
        }
        &self.nav.category
    }

    /// Canonical location for the current state.
    ///
    /// The default category is left out of listing URLs, so a reset state is
    /// exactly `/`.
    pub fn location(&self) -> Location {
        match &self.view {
            View::Listing => {
                let default = self.catalog.taxonomy().default_category();
                Location::Listing {
                    category: (self.nav.category != default)
                        .then(|| self.nav.category.to_string()),
                    tag: self.nav.tag.clone(),
                }
            }
            View::Detail { id, context } => {
                Location::detail(id, context.as_ref().map(Category::as_str))
            }
            View::NotFound { path } => Location::NotFound { path: path.clone() },
        }
    }

    pub fn share_url(&self) -> String {
        self.location().to_url(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.nav.category.as_str(), "top");
        assert!(app.nav.query.is_empty());
        assert_eq!(app.nav.tag, None);
        assert_eq!(app.view, View::Listing);
        assert_eq!(app.location(), Location::home());
    }

    #[test]
    fn test_location_includes_non_default_category() {
        let mut app = test_app();
        app.nav.category = app.catalog.taxonomy().validate(Some("piano"));
        app.nav.tag = Some("tuning".into());
        assert_eq!(app.location(), Location::listing("piano", Some("tuning")));
    }

    #[test]
    fn test_active_category_follows_direct_link() {
        let mut app = test_app();
        assert_eq!(app.active_category().as_str(), "top");

        app.view = View::Detail {
            id: "7".into(),
            context: Some(app.catalog.taxonomy().validate(Some("contact"))),
        };
        assert_eq!(app.active_category().as_str(), "contact");

        app.view = View::Detail {
            id: "5".into(),
            context: Some(app.catalog.taxonomy().validate(Some("lessons"))),
        };
        assert_eq!(app.active_category().as_str(), "top");
    }

    #[test]
    fn test_share_url_is_absolute() {
        let mut app = test_app();
        app.view = View::Detail {
            id: "7".into(),
            context: Some(app.catalog.taxonomy().validate(Some("contact"))),
        };
        assert_eq!(app.share_url(), "https://faq.example.com/faq/7?category=contact");
    }

    #[test]
    fn test_detail_item_lookup() {
        let mut app = test_app();
        app.view = View::Detail { id: "1".into(), context: None };
        assert_eq!(app.detail_item().map(|i| i.id.as_str()), Some("1"));
        app.view = View::Detail { id: "missing".into(), context: None };
        assert!(app.detail_item().is_none());
    }
}
