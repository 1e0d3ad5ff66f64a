//! # CategoryTabs Component
//!
//! One-line strip of the catalog's categories in declared order, with the
//! active one highlighted. While a search is running the strip is dimmed,
//! since the category doesn't filter search results.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::tui::component::Component;

pub struct CategoryTabs<'a> {
    pub categories: &'a [String],
    pub active: &'a str,
    pub dimmed: bool,
}

impl Component for CategoryTabs<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let selected = self.categories.iter().position(|c| c == self.active);
        let base = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let highlight = if self.dimmed {
            base.add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        };

        let tabs = Tabs::new(self.categories.iter().map(String::as_str))
            .select(selected)
            .style(base)
            .highlight_style(highlight)
            .divider("│");
        frame.render_widget(tabs, area);
    }
}

/// The category `step` places away from `current`, wrapping at both ends.
/// An unknown `current` counts as the first tab.
pub fn cycle(categories: &[String], current: &str, step: isize) -> Option<String> {
    if categories.is_empty() {
        return None;
    }
    let len = categories.len() as isize;
    let index = categories.iter().position(|c| c == current).unwrap_or(0) as isize;
    let next = (index + step).rem_euclid(len) as usize;
    categories.get(next).cloned()
}
