//! # TitleBar Component
//!
//! Top line: app name, the current shareable location, and status.
//!
//! Stateless. All three props come from core `App`:
//! - `location`: `app.location()` rendered as a path, e.g. `/?category=piano`
//! - `status_message`: transient text ("Link copied", clipboard fallback, ...)
//! - `copied`: share indicator, lit until the reset timer fires
//!
//! ```text
//! faqnav  /?category=piano&tag=tuning                        ✓ Copied
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    pub location: String,
    pub status_message: String,
    pub copied: bool,
}

impl TitleBar {
    pub fn new(location: String, status_message: String, copied: bool) -> Self {
        Self {
            location,
            status_message,
            copied,
        }
    }

    fn right_text(&self) -> String {
        if self.copied {
            "✓ Copied".to_string()
        } else {
            self.status_message.clone()
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let right = self.right_text();
        let right_width = unicode_width::UnicodeWidthStr::width(right.as_str()) as u16;
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

        let left = Line::from(vec![
            Span::styled(
                "faqnav  ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.location.clone(), Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(left, left_area);

        let right_style = if self.copied {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(Span::styled(right, right_style), right_area);
    }
}
