//! # Actions
//!
//! Everything that can happen in faqnav becomes an `Action`.
//! User picks a category? That's `Action::SelectCategory(name)`.
//! Back button? The runtime moves `History` and dispatches
//! `Action::LocationChanged(location)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing the I/O the runtime should
//! perform (push a URL, touch the clipboard, start a timer). No side effects
//! here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! URL reads only ever arrive as `LocationChanged`; URL writes only ever leave
//! as `Effect::PushLocation` / `Effect::ReplaceLocation`. State is never
//! written from a URL inside a render path, so the two can't loop.

use std::time::Duration;

use log::{debug, info};

use crate::core::history::History;
use crate::core::location::Location;
use crate::core::state::{App, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The URL changed outside the app: startup, back/forward, a pasted link.
    LocationChanged(Location),
    /// Search text edited.
    QueryChanged(String),
    /// A category was picked (raw string, validated here).
    SelectCategory(String),
    /// A tag was picked; picking the active tag clears it.
    ToggleTag(String),
    ClearTag,
    OpenItem(String),
    /// Leave a detail view when there is no history entry to go back to.
    CloseDetail,
    /// Title/logo click: back to the canonical home state.
    Reset,
    Share,
    ShareCopied,
    ShareFailed(String),
    ShareIndicatorExpired(u64),
    DismissManualCopy,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Add a history entry.
    PushLocation(Location),
    /// Overwrite the current history entry (redirects).
    ReplaceLocation(Location),
    CopyToClipboard(String),
    /// Send `ShareIndicatorExpired(generation)` after `after`.
    ScheduleShareReset { generation: u64, after: Duration },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::LocationChanged(location) => apply_location(app, location),

        Action::QueryChanged(query) => {
            app.nav.query = query;
            Effect::None
        }

        Action::SelectCategory(raw) => {
            let category = app.catalog.taxonomy().validate(Some(&raw));

            if let Some(id) = app.catalog.taxonomy().resolve_direct_link(&category) {
                info!("Category {} links directly to item {}", category, id);
                app.view = View::Detail {
                    id: id.to_string(),
                    context: Some(category),
                };
                return Effect::PushLocation(app.location());
            }

            // A live query would hide the category change, so picking one ends the search.
            app.nav.query.clear();
            app.nav.category = category;
            app.view = View::Listing;
            Effect::PushLocation(app.location())
        }

        Action::ToggleTag(tag) => {
            app.nav.tag = if app.nav.tag.as_deref() == Some(tag.as_str()) {
                None
            } else {
                Some(tag)
            };
            app.nav.query.clear();
            app.view = View::Listing;
            Effect::PushLocation(app.location())
        }

        Action::ClearTag => {
            app.nav.tag = None;
            app.view = View::Listing;
            Effect::PushLocation(app.location())
        }

        Action::OpenItem(id) => {
            app.view = View::Detail {
                id,
                context: Some(app.nav.category.clone()),
            };
            Effect::PushLocation(app.location())
        }

        Action::CloseDetail => {
            if let View::Detail {
                context: Some(category),
                ..
            } = &app.view
                && app.catalog.taxonomy().resolve_direct_link(category).is_none()
            {
                app.nav.category = category.clone();
            }
            app.view = View::Listing;
            Effect::PushLocation(app.location())
        }

        Action::Reset => {
            app.nav.query.clear();
            app.nav.category = app.catalog.taxonomy().default_category();
            app.nav.tag = None;
            app.view = View::Listing;
            app.status_message.clear();
            Effect::PushLocation(Location::home())
        }

        Action::Share => Effect::CopyToClipboard(app.share_url()),

        Action::ShareCopied => {
            app.share.generation += 1;
            app.share.copied = true;
            app.share.manual_copy = None;
            app.status_message = "Link copied".to_string();
            Effect::ScheduleShareReset {
                generation: app.share.generation,
                after: app.share_reset,
            }
        }

        Action::ShareFailed(url) => {
            app.share.copied = false;
            app.share.manual_copy = Some(url);
            app.status_message = "Clipboard unavailable, copy the link manually".to_string();
            Effect::None
        }

        Action::ShareIndicatorExpired(generation) => {
            if generation == app.share.generation {
                app.share.copied = false;
                app.status_message.clear();
            }
            Effect::None
        }

        Action::DismissManualCopy => {
            app.share.manual_copy = None;
            app.status_message.clear();
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Startup: seed a history with `location` (a shared link, or `/`) and bring
/// `app` in line with it. A redirecting location is replaced in place.
pub fn start(app: &mut App, location: Location) -> History {
    let mut history = History::new(location.clone());
    if let Effect::ReplaceLocation(redirect) = update(app, Action::LocationChanged(location)) {
        history.replace(redirect);
    }
    history
}

/// Inbound half of URL sync: bring state in line with `location`, touching
/// nothing that already matches.
///
/// An inbound URL that is not the canonical form of the state it produces
/// (an unknown or default category, a direct-link category) is replaced in
/// place, so the next push of that same state can't stack a duplicate entry.
fn apply_location(app: &mut App, location: Location) -> Effect {
    let inbound = location.clone();
    match location {
        Location::Listing { category, tag } => {
            let category = app.catalog.taxonomy().validate(category.as_deref());

            if let Some(id) = app.catalog.taxonomy().resolve_direct_link(&category) {
                app.view = View::Detail {
                    id: id.to_string(),
                    context: Some(category),
                };
            } else {
                if app.nav.category != category {
                    app.nav.category = category;
                }
                if app.nav.tag != tag {
                    app.nav.tag = tag;
                }
                if app.view != View::Listing {
                    app.view = View::Listing;
                }
            }
        }
        Location::Detail { id, category } => {
            let context = category.map(|c| app.catalog.taxonomy().validate(Some(&c)));
            let view = View::Detail { id, context };
            if app.view != view {
                app.view = view;
            }
        }
        Location::NotFound { path } => {
            info!("No route for {}", path);
            app.view = View::NotFound { path };
        }
    }

    let canonical = app.location();
    if canonical == inbound {
        Effect::None
    } else {
        debug!("Rewriting {} as {}", inbound, canonical);
        Effect::ReplaceLocation(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, test_app};

    #[test]
    fn test_select_category_pushes_listing() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectCategory("piano".into()));
        assert_eq!(effect, Effect::PushLocation(Location::listing("piano", None)));
        assert_eq!(app.nav.category.as_str(), "piano");
        assert_eq!(ids(&app.results()), ["2", "1", "4"]);
    }

    #[test]
    fn test_select_invalid_category_falls_back_to_default() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        let effect = update(&mut app, Action::SelectCategory("PIANO".into()));
        assert_eq!(app.nav.category.as_str(), "top");
        assert_eq!(effect, Effect::PushLocation(Location::home()));
    }

    #[test]
    fn test_select_category_keeps_tag() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTag("beginners".into()));
        let effect = update(&mut app, Action::SelectCategory("lessons".into()));
        assert_eq!(effect, Effect::PushLocation(Location::listing("lessons", Some("beginners"))));
        assert_eq!(app.nav.tag.as_deref(), Some("beginners"));
    }

    #[test]
    fn test_select_category_ends_search() {
        let mut app = test_app();
        update(&mut app, Action::QueryChanged("guitar".into()));
        update(&mut app, Action::SelectCategory("piano".into()));
        assert!(app.nav.query.is_empty());
    }

    #[test]
    fn test_direct_link_category_opens_item() {
        let mut app = test_app();
        let before = app.nav.clone();
        let effect = update(&mut app, Action::SelectCategory("contact".into()));
        assert_eq!(effect, Effect::PushLocation(Location::detail("7", Some("contact"))));
        assert_eq!(
            app.view,
            View::Detail {
                id: "7".into(),
                context: Some(app.catalog.taxonomy().validate(Some("contact"))),
            }
        );
        // The listing state is left alone.
        assert_eq!(app.nav, before);
    }

    #[test]
    fn test_toggle_tag_twice_clears() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        let first = update(&mut app, Action::ToggleTag("tuning".into()));
        assert_eq!(first, Effect::PushLocation(Location::listing("piano", Some("tuning"))));
        let second = update(&mut app, Action::ToggleTag("tuning".into()));
        assert_eq!(second, Effect::PushLocation(Location::listing("piano", None)));
        assert_eq!(app.nav.tag, None);
    }

    #[test]
    fn test_toggle_other_tag_replaces() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTag("tuning".into()));
        update(&mut app, Action::ToggleTag("care".into()));
        assert_eq!(app.nav.tag.as_deref(), Some("care"));
    }

    #[test]
    fn test_clear_tag_keeps_category() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        update(&mut app, Action::ToggleTag("tuning".into()));
        let effect = update(&mut app, Action::ClearTag);
        assert_eq!(effect, Effect::PushLocation(Location::listing("piano", None)));
    }

    #[test]
    fn test_location_changed_updates_state() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::LocationChanged(Location::listing("lessons", Some("scheduling"))),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.category.as_str(), "lessons");
        assert_eq!(app.nav.tag.as_deref(), Some("scheduling"));
        assert_eq!(ids(&app.results()), ["6"]);
    }

    #[test]
    fn test_location_changed_same_state_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        let before = app.nav.clone();
        let effect = update(&mut app, Action::LocationChanged(Location::listing("piano", None)));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav, before);
    }

    #[test]
    fn test_location_changed_keeps_query() {
        let mut app = test_app();
        update(&mut app, Action::QueryChanged("piano".into()));
        update(&mut app, Action::LocationChanged(Location::listing("guitar", None)));
        assert_eq!(app.nav.query, "piano");
    }

    #[test]
    fn test_location_with_invalid_category_uses_default() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        update(
            &mut app,
            Action::LocationChanged(Location::Listing {
                category: Some("<script>".into()),
                tag: None,
            }),
        );
        assert_eq!(app.nav.category.as_str(), "top");
    }

    #[test]
    fn test_location_naming_direct_link_category_redirects_in_place() {
        let mut app = test_app();
        let effect = update(&mut app, Action::LocationChanged(Location::listing("contact", None)));
        assert_eq!(effect, Effect::ReplaceLocation(Location::detail("7", Some("contact"))));
        assert!(matches!(app.view, View::Detail { ref id, .. } if id == "7"));
    }

    #[test]
    fn test_non_canonical_location_is_rewritten() {
        let mut app = test_app();
        let effect = update(&mut app, Action::LocationChanged(Location::parse("/?category=drums")));
        assert_eq!(effect, Effect::ReplaceLocation(Location::home()));

        let effect = update(&mut app, Action::LocationChanged(Location::parse("/?category=top")));
        assert_eq!(effect, Effect::ReplaceLocation(Location::home()));

        let effect = update(&mut app, Action::LocationChanged(Location::parse("/faq/5?category=bogus")));
        assert_eq!(effect, Effect::ReplaceLocation(Location::detail("5", Some("top"))));
    }

    #[test]
    fn test_start_on_unknown_category_leaves_single_entry() {
        let mut app = test_app();
        let mut history = start(&mut app, Location::parse("/?category=drums"));
        assert_eq!(history.current(), &Location::home());

        if let Effect::PushLocation(location) = update(&mut app, Action::Reset) {
            history.push(location);
        }
        assert_eq!(history.len(), 1);
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_location_detail_and_not_found() {
        let mut app = test_app();
        update(&mut app, Action::LocationChanged(Location::detail("5", Some("lessons"))));
        assert_eq!(app.detail_item().map(|i| i.id.as_str()), Some("5"));

        update(&mut app, Action::LocationChanged(Location::parse("/nowhere")));
        assert!(matches!(app.view, View::NotFound { .. }));
    }

    #[test]
    fn test_open_and_close_item() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("lessons".into()));
        let effect = update(&mut app, Action::OpenItem("6".into()));
        assert_eq!(effect, Effect::PushLocation(Location::detail("6", Some("lessons"))));

        app.nav.category = app.catalog.taxonomy().default_category();
        let effect = update(&mut app, Action::CloseDetail);
        assert_eq!(effect, Effect::PushLocation(Location::listing("lessons", None)));
        assert_eq!(app.view, View::Listing);
    }

    #[test]
    fn test_close_direct_link_detail_keeps_listing_category() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        update(&mut app, Action::SelectCategory("contact".into()));
        update(&mut app, Action::CloseDetail);
        assert_eq!(app.nav.category.as_str(), "piano");
    }

    #[test]
    fn test_reset_goes_home() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        update(&mut app, Action::ToggleTag("tuning".into()));
        update(&mut app, Action::QueryChanged("keys".into()));
        let effect = update(&mut app, Action::Reset);
        assert_eq!(effect, Effect::PushLocation(Location::home()));
        assert!(app.nav.query.is_empty());
        assert_eq!(app.nav.category, app.catalog.taxonomy().default_category());
        assert_eq!(app.nav.tag, None);
    }

    #[test]
    fn test_share_flow() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        let effect = update(&mut app, Action::Share);
        assert_eq!(
            effect,
            Effect::CopyToClipboard("https://faq.example.com/?category=piano".into())
        );

        let effect = update(&mut app, Action::ShareCopied);
        assert!(app.share.copied);
        assert_eq!(
            effect,
            Effect::ScheduleShareReset { generation: 1, after: app.share_reset }
        );

        update(&mut app, Action::ShareIndicatorExpired(1));
        assert!(!app.share.copied);
    }

    #[test]
    fn test_stale_share_reset_ignored() {
        let mut app = test_app();
        update(&mut app, Action::ShareCopied);
        update(&mut app, Action::ShareCopied);
        update(&mut app, Action::ShareIndicatorExpired(1));
        assert!(app.share.copied);
        update(&mut app, Action::ShareIndicatorExpired(2));
        assert!(!app.share.copied);
    }

    #[test]
    fn test_share_failure_falls_back_to_manual_copy() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ShareFailed("https://faq.example.com/".into()));
        assert_eq!(effect, Effect::None);
        assert!(!app.share.copied);
        assert_eq!(app.share.manual_copy.as_deref(), Some("https://faq.example.com/"));

        update(&mut app, Action::DismissManualCopy);
        assert!(app.share.manual_copy.is_none());
    }

    #[test]
    fn test_start_from_shared_link() {
        let mut app = test_app();
        let history = start(&mut app, Location::parse("/?category=lessons&tag=scheduling"));
        assert_eq!(history.len(), 1);
        assert_eq!(ids(&app.results()), ["6"]);
    }

    #[test]
    fn test_start_on_direct_link_category_replaces_entry() {
        let mut app = test_app();
        let history = start(&mut app, Location::listing("contact", None));
        assert_eq!(history.current(), &Location::detail("7", Some("contact")));
        assert_eq!(history.len(), 1);
        assert_eq!(app.detail_item().map(|i| i.id.as_str()), Some("7"));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
