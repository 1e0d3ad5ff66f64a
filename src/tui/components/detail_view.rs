//! # DetailView Component
//!
//! One item: title, category/tags line, then the Markdown answer in a
//! scrollable canvas. Also renders the "not found" state for unknown ids and
//! unknown routes.
//!
//! The canvas height must be known before rendering into a `ScrollView`, so
//! `wrapped_height` predicts the wrapped line count with the same greedy
//! word wrapping `Paragraph` uses.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Item;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

#[derive(Default)]
pub struct DetailViewState {
    pub scroll: ScrollViewState,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.scroll.scroll_to_top();
    }
}

impl EventHandler for DetailViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.scroll.scroll_up(),
            TuiEvent::CursorDown => self.scroll.scroll_down(),
            TuiEvent::PageUp => self.scroll.scroll_page_up(),
            TuiEvent::PageDown => self.scroll.scroll_page_down(),
            TuiEvent::CursorHome => self.scroll.scroll_to_top(),
            TuiEvent::CursorEnd => self.scroll.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

/// What the detail pane shows.
pub enum DetailContent<'a> {
    Item(&'a Item),
    /// A detail route whose id isn't in the catalog.
    MissingItem(&'a str),
    /// A path that isn't a route at all.
    UnknownRoute(&'a str),
}

pub struct DetailView<'a> {
    state: &'a mut DetailViewState,
    content: DetailContent<'a>,
    /// Category shown as "back to" context.
    context: Option<&'a str>,
}

impl<'a> DetailView<'a> {
    pub fn new(
        state: &'a mut DetailViewState,
        content: DetailContent<'a>,
        context: Option<&'a str>,
    ) -> Self {
        Self {
            state,
            content,
            context,
        }
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect, message: String) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(" Not found ");
        let body = Paragraph::new(vec![
            Line::default(),
            Line::from(message),
            Line::default(),
            Line::from(Span::styled(
                "Esc to go back · Ctrl-R for home",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(body, area);
    }
}

/// Number of rows `text` occupies when word-wrapped at `width`.
pub fn wrapped_height(text: &Text, width: u16) -> u16 {
    let width = width as usize;
    if width == 0 {
        return 0;
    }
    let rows: usize = text
        .lines
        .iter()
        .map(|line| {
            let content: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrapped_rows(&content, width)
        })
        .sum();
    rows.min(u16::MAX as usize) as u16
}

fn wrapped_rows(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut col = 0;
    for word in line.split_inclusive(' ') {
        let w = word.trim_end().width();
        let full = word.width();
        if col > 0 && col + w > width {
            rows += 1;
            col = 0;
        }
        // Words longer than a row are broken across rows.
        if w > width {
            rows += (col + w - 1) / width;
            col = (col + w) % width;
        } else {
            col += full;
        }
    }
    rows
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let item = match self.content {
            DetailContent::Item(item) => item,
            DetailContent::MissingItem(id) => {
                self.render_not_found(frame, area, format!("No question with id {id:?}."));
                return;
            }
            DetailContent::UnknownRoute(path) => {
                self.render_not_found(frame, area, format!("Nothing lives at {path}."));
                return;
            }
        };

        let back = self
            .context
            .map(|c| format!(" ← {c} (Esc) "))
            .unwrap_or_else(|| " ← back (Esc) ".to_string());
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(back)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut text = Text::from(vec![
            Line::from(Span::styled(
                item.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(item.category.clone(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    item.tags.iter().map(|t| format!("  #{t}")).collect::<String>(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::default(),
        ]);
        match item.content.as_deref() {
            Some(body) if !body.trim().is_empty() => {
                text.lines.extend(markdown::render(body, Color::Gray).lines);
            }
            _ => text.lines.push(Line::from(Span::styled(
                "No answer written yet.",
                Style::default().fg(Color::DarkGray),
            ))),
        }

        // -1 for the scrollbar column
        let content_width = inner.width.saturating_sub(1);
        let height = wrapped_height(&text, content_width).max(inner.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: false }),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll);
    }
}
