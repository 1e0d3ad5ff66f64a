//! # TUI Components
//!
//! All UI pieces of the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, current location, share status
//! - `CategoryTabs`: the category strip
//! - `ManualCopy`: clipboard fallback overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBar`: query editor, emits `SearchEvent`
//! - `ItemList` / `ItemListState`: result list and selection
//! - `DetailView` / `DetailViewState`: scrollable answer
//! - `TagPicker` / `TagPickerState`: tag overlay, emits `TagEvent`
//!
//! Components receive data as props and never read `App` directly; the
//! adapter in `tui/mod.rs` decides what each one is given.

pub mod category_tabs;
pub mod detail_view;
pub mod item_list;
pub mod manual_copy;
pub mod search_bar;
pub mod tag_picker;
mod title_bar;

pub use category_tabs::CategoryTabs;
pub use detail_view::{DetailContent, DetailView, DetailViewState};
pub use item_list::{ItemList, ItemListState, ListEvent};
pub use manual_copy::ManualCopy;
pub use search_bar::{SEARCH_BAR_HEIGHT, SearchBar, SearchEvent};
pub use tag_picker::{TagEvent, TagPicker, TagPickerState};
pub use title_bar::TitleBar;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
