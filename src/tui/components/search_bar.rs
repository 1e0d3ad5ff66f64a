//! # SearchBar Component
//!
//! Single-line query editor. Any keystroke that changes the text emits
//! `SearchEvent::Changed` so results update live.
//!
//! ## State Management
//!
//! The buffer and cursor (a byte offset on a char boundary) are internal
//! state; `focused` is a prop from `TuiState`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Text changed; carries the whole new query.
    Changed(String),
    /// Enter pressed: move focus to the results.
    Submit,
    /// Esc pressed: give up focus, keep the query.
    Leave,
}

pub struct SearchBar {
    /// Query text (Internal State)
    pub buffer: String,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            cursor: 0,
        }
    }

    /// Replace the text from outside (e.g. after a reset), cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor = self.buffer.len();
        }
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Search (/) ");

        // Keep the cursor visible when the query is wider than the box.
        let inner_width = area.width.saturating_sub(2) as usize;
        let before_cursor = &self.buffer[..self.cursor];
        let cursor_col = before_cursor.width();
        let skip = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let mut visible = String::new();
        let mut col = 0;
        for c in self.buffer.chars() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if col >= skip {
                visible.push(c);
            }
            col += w;
        }

        let text_style = if self.buffer.is_empty() && !self.focused {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let shown = if self.buffer.is_empty() && !self.focused {
            "type to search all questions".to_string()
        } else {
            visible
        };
        frame.render_widget(Paragraph::new(shown).style(text_style).block(block), area);

        if self.focused {
            let x = area.x + 1 + (cursor_col - skip) as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Queries are single-line.
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit),
            TuiEvent::Escape => Some(SearchEvent::Leave),
            _ => None,
        }
    }
}
