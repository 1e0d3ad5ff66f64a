//! # Tag Picker Component
//!
//! Overlay listing every tag in the catalog. Opened with `t`, dismissed with
//! Esc. The active tag is marked; picking it again clears it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TagPickerState` lives in `TuiState` while the overlay is open
//! - `TagPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::component::EventHandler;
use crate::tui::components::{centered_rect, truncate_str};
use crate::tui::event::TuiEvent;

/// Persistent state for the tag picker overlay.
pub struct TagPickerState {
    pub tags: Vec<String>,
    pub active: Option<String>,
    pub selected: usize,
    list_state: ListState,
}

impl TagPickerState {
    /// Opens with the active tag (if any) preselected.
    pub fn new(tags: Vec<String>, active: Option<String>) -> Self {
        let selected = active
            .as_ref()
            .and_then(|a| tags.iter().position(|t| t == a))
            .unwrap_or(0);
        let mut list_state = ListState::default();
        if !tags.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            tags,
            active,
            selected,
            list_state,
        }
    }
}

/// Events emitted by the tag picker.
#[derive(Debug, Clone, PartialEq)]
pub enum TagEvent {
    Toggle(String),
    Clear,
    Dismiss,
}

impl EventHandler for TagPickerState {
    type Event = TagEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TagEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('t') => Some(TagEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.tags.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.tags.is_empty() {
                    self.selected = (self.selected + 1).min(self.tags.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self.tags.get(self.selected).cloned().map(TagEvent::Toggle),
            TuiEvent::Backspace | TuiEvent::Delete | TuiEvent::InputChar('x') => {
                self.active.is_some().then_some(TagEvent::Clear)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the tag picker overlay.
pub struct TagPicker<'a> {
    state: &'a mut TagPickerState,
}

impl<'a> TagPicker<'a> {
    pub fn new(state: &'a mut TagPickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 60, area);
        frame.render_widget(Clear, overlay);

        let help = if self.state.active.is_some() {
            " Enter Toggle  x Clear  Esc Back "
        } else {
            " Enter Filter  Esc Back "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Tags ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));

        if self.state.tags.is_empty() {
            let empty = Paragraph::new("No tags in this catalog.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let inner_width = overlay.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = self
            .state
            .tags
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                let is_active = self.state.active.as_deref() == Some(tag.as_str());
                let marker = if is_active { "● " } else { "  " };
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(format!("#{}", truncate_str(tag, inner_width)), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn tags() -> Vec<String> {
        ["beginners", "care", "tuning"].iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_preselects_active_tag() {
        let state = TagPickerState::new(tags(), Some("tuning".into()));
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_navigate_and_toggle() {
        let mut state = TagPickerState::new(tags(), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(TagEvent::Toggle("care".into()))
        );
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_clear_only_when_active() {
        let mut state = TagPickerState::new(tags(), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
        let mut state = TagPickerState::new(tags(), Some("care".into()));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), Some(TagEvent::Clear));
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = TagPickerState::new(vec![], None);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(TagEvent::Dismiss));
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_render_marks_active() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TagPickerState::new(tags(), Some("care".into()));
        terminal
            .draw(|f| TagPicker::new(&mut state).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Tags"));
        assert!(text.contains("● #care"));
        assert!(text.contains("#beginners"));
    }
}
