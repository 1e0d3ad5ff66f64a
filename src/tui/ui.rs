//! Frame layout: decides which components get which props.
//!
//! ```text
//! ┌ title bar ───────────────────────────────┐ 1
//! │ search bar                               │ 3
//! │ category tabs                            │ 1
//! │ result list  /  detail view              │ *
//! └ help line ───────────────────────────────┘ 1
//! ```
//! Overlays (tag picker, manual copy) draw last, on top.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{App, View};
use crate::tui::component::Component;
use crate::tui::components::{
    CategoryTabs, DetailContent, DetailView, ItemList, ManualCopy, SEARCH_BAR_HEIGHT, TagPicker,
    TitleBar,
};
use crate::tui::{Focus, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, search_area, tabs_area, main_area, help_area] = Layout::vertical([
        Length(1),
        Length(SEARCH_BAR_HEIGHT),
        Length(1),
        Min(0),
        Length(1),
    ])
    .areas(frame.area());

    TitleBar::new(
        app.location().to_string(),
        app.status_message.clone(),
        app.share.copied,
    )
    .render(frame, title_area);

    tui.search.render(frame, search_area);

    let categories: Vec<String> = app
        .catalog
        .taxonomy()
        .categories()
        .iter()
        .map(|c| c.to_string())
        .collect();
    CategoryTabs {
        categories: &categories,
        active: app.active_category().as_str(),
        dimmed: app.nav.is_searching(),
    }
    .render(frame, tabs_area);

    match &app.view {
        View::Listing => {
            let results = app.results();
            ItemList::new(
                &mut tui.list,
                &results,
                list_title(app),
                tui.focus == Focus::Results,
            )
            .render(frame, main_area);
        }
        View::Detail { id, context } => {
            let content = match app.catalog.get(id) {
                Some(item) => DetailContent::Item(item),
                None => DetailContent::MissingItem(id),
            };
            DetailView::new(&mut tui.detail, content, context.as_ref().map(|c| c.as_str()))
                .render(frame, main_area);
        }
        View::NotFound { path } => {
            DetailView::new(&mut tui.detail, DetailContent::UnknownRoute(path), None)
                .render(frame, main_area);
        }
    }

    frame.render_widget(
        Span::styled(help_text(app, tui), Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(picker) = tui.tag_picker.as_mut() {
        TagPicker::new(picker).render(frame, frame.area());
    }
    if let Some(url) = app.share.manual_copy.as_deref() {
        ManualCopy { url }.render(frame, frame.area());
    }
}

fn list_title(app: &App) -> String {
    if app.nav.is_searching() {
        return format!("Results for \"{}\"", app.nav.trimmed_query());
    }
    match &app.nav.tag {
        Some(tag) => format!("{} · #{}", app.nav.category, tag),
        None => app.nav.category.to_string(),
    }
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    if tui.tag_picker.is_some() || app.share.manual_copy.is_some() {
        return "";
    }
    match (&app.view, tui.focus) {
        (View::Listing, Focus::Search) => {
            " Enter open · Esc done · ↑↓ move · Tab category · ^S share · ^R home · ^C quit"
        }
        (View::Listing, Focus::Results) => {
            " type to search · Enter open · t tags · Tab category · [ ] back/fwd · ^S share · ^R home"
        }
        _ => " Esc back · ↑↓ scroll · [ ] back/fwd · ^S share · ^R home · ^C quit",
    }
}
