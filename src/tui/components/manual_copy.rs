//! # Manual Copy Overlay
//!
//! Shown when the clipboard is unavailable (headless session, no display
//! server): the share link is printed in a box so it can be selected with
//! the mouse. Any of Esc/Enter dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct ManualCopy<'a> {
    pub url: &'a str,
}

impl ManualCopy<'_> {
    pub fn dismisses(event: &crate::tui::event::TuiEvent) -> bool {
        use crate::tui::event::TuiEvent;
        matches!(event, TuiEvent::Escape | TuiEvent::Submit)
    }
}

impl Component for ManualCopy<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(4).min(72);
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, overlay, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(row);

        frame.render_widget(Clear, overlay);
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Copy this link ")
            .title_bottom(Line::from(" Esc Close ").centered());
        let body = Paragraph::new(vec![
            Line::from("The clipboard isn't available here."),
            Line::default(),
            Line::styled(
                self.url.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
        frame.render_widget(body, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::TuiEvent;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_shows_url() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut overlay = ManualCopy {
            url: "https://faq.example.com/?category=piano",
        };
        terminal.draw(|f| overlay.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("https://faq.example.com/?category=piano"));
    }

    #[test]
    fn test_dismiss_keys() {
        assert!(ManualCopy::dismisses(&TuiEvent::Escape));
        assert!(ManualCopy::dismisses(&TuiEvent::Submit));
        assert!(!ManualCopy::dismisses(&TuiEvent::InputChar('q')));
    }
}
