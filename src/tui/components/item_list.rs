//! # ItemList Component
//!
//! The resolved result list. Follows the persistent state + transient
//! wrapper pattern:
//! - `ItemListState` lives in `TuiState` (selection survives redraws)
//! - `ItemList` is created each frame with the current results borrowed

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::core::catalog::Item;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::truncate_str;
use crate::tui::event::TuiEvent;

const PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Open the item at this index of the current results.
    Open(usize),
}

#[derive(Default)]
pub struct ItemListState {
    pub selected: usize,
    /// Result count from the last render, used to clamp movement.
    pub len: usize,
    list_state: ListState,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. when the result set changes.
    pub fn reset(&mut self) {
        self.selected = 0;
        *self.list_state.offset_mut() = 0;
    }

    /// Record the current result count and keep the selection inside it.
    pub fn clamp(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let max = self.len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
    }
}

impl EventHandler for ItemListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.move_by(-1),
            TuiEvent::CursorDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-(PAGE as isize)),
            TuiEvent::PageDown => self.move_by(PAGE as isize),
            TuiEvent::CursorHome => self.selected = 0,
            TuiEvent::CursorEnd => self.selected = self.len.saturating_sub(1),
            TuiEvent::Submit if self.len > 0 => return Some(ListEvent::Open(self.selected)),
            _ => {}
        }
        None
    }
}

pub struct ItemList<'a> {
    state: &'a mut ItemListState,
    items: &'a [&'a Item],
    title: String,
    focused: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(
        state: &'a mut ItemListState,
        items: &'a [&'a Item],
        title: String,
        focused: bool,
    ) -> Self {
        Self {
            state,
            items,
            title,
            focused,
        }
    }
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.items.len());

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.title))
            .title_bottom(Line::from(format!(" {} ", self.items.len())).right_aligned());

        if self.items.is_empty() {
            let empty = Paragraph::new("No questions match.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // "  title ........ #tag #tag"
        let inner_width = area.width.saturating_sub(4) as usize;
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let tags: String = item.tags.iter().map(|t| format!(" #{t}")).collect();
                let tags_width = unicode_width::UnicodeWidthStr::width(tags.as_str());
                let title_width = inner_width.saturating_sub(tags_width + 1);
                let title = truncate_str(&item.title, title_width);
                let pad = title_width.saturating_sub(unicode_width::UnicodeWidthStr::width(
                    title.as_str(),
                ));
                ListItem::new(Line::from(vec![
                    Span::raw(title),
                    Span::raw(" ".repeat(pad + 1)),
                    Span::styled(tags, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(rows)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("› ");

        self.state.list_state.select(Some(self.state.selected));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
