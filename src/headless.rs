//! `--print` mode: render the current view as plain text and exit.
//!
//! Listings print one `id<TAB>title` row per result so the output pipes into
//! `cut`/`grep`. A detail view prints its share URL, the title row and the
//! raw Markdown answer.

use crate::core::state::{App, View};

pub fn render(app: &App) -> String {
    match &app.view {
        View::Listing => app
            .results()
            .iter()
            .map(|item| format!("{}\t{}\n", item.id, item.title))
            .collect(),
        View::Detail { id, .. } => match app.catalog.get(id) {
            Some(item) => {
                let mut out = format!("{}\n{}\t{}\n", app.share_url(), item.id, item.title);
                if let Some(content) = item.content.as_deref() {
                    out.push('\n');
                    out.push_str(content.trim_end());
                    out.push('\n');
                }
                out
            }
            None => format!("not found: no item {id:?}\n"),
        },
        View::NotFound { path } => format!("not found: {path}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::location::Location;
    use crate::test_support::test_app;

    #[test]
    fn test_listing_rows() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("piano".into()));
        assert_eq!(
            render(&app),
            "2\tWhat causes sticky piano keys?\n\
             1\tHow often should I tune my piano?\n\
             4\tShould I buy a digital or acoustic piano?\n"
        );
    }

    #[test]
    fn test_direct_link_prints_target() {
        let mut app = test_app();
        update(&mut app, Action::LocationChanged(Location::listing("contact", None)));
        let out = render(&app);
        assert!(out.starts_with("https://faq.example.com/faq/7?category=contact\n7\tHow can I contact the shop?\n"));
    }

    #[test]
    fn test_detail_prints_answer() {
        let mut app = test_app();
        update(&mut app, Action::OpenItem("5".into()));
        assert_eq!(
            render(&app),
            "https://faq.example.com/faq/5?category=top\n\
             5\tDo you offer lessons for beginners?\n\
             \n\
             Answer to *Do you offer lessons for beginners?*\n"
        );
    }

    #[test]
    fn test_not_found() {
        let mut app = test_app();
        update(&mut app, Action::LocationChanged(Location::parse("/pricing")));
        assert_eq!(render(&app), "not found: /pricing\n");
    }
}
