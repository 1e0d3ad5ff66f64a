//! Answer bodies: Markdown → ratatui `Text`.
//!
//! Covers what FAQ answers actually use: paragraphs, headings, emphasis,
//! inline code, (nested) lists, links and fenced code blocks. Fenced blocks
//! with a known language are highlighted with syntect.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME: LazyLock<Option<Theme>> = LazyLock::new(|| {
    ThemeSet::load_defaults()
        .themes
        .remove("base16-ocean.dark")
});

const FRAME: Color = Color::DarkGray;

/// Render an answer body. Output is owned so it can outlive `content`.
pub fn render(content: &str, fg: Color) -> Text<'static> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = AnswerText::new(fg);
    for event in Parser::new_ext(content, options) {
        out.push(event);
    }
    out.finish()
}

/// Fenced code block being collected; highlighted when it closes.
struct CodeBlock {
    lang: String,
    body: String,
}

struct AnswerText {
    fg: Color,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    modifiers: Vec<Modifier>,
    /// `None` = bullet list, `Some(n)` = ordered list at n.
    lists: Vec<Option<u64>>,
    code: Option<CodeBlock>,
    link: Option<String>,
}

impl AnswerText {
    fn new(fg: Color) -> Self {
        Self {
            fg,
            lines: Vec::new(),
            current: Vec::new(),
            modifiers: Vec::new(),
            lists: Vec::new(),
            code: None,
            link: None,
        }
    }

    fn style(&self) -> Style {
        let modifier = self
            .modifiers
            .iter()
            .fold(Modifier::empty(), |acc, m| acc | *m);
        let style = Style::default().fg(self.fg).add_modifier(modifier);
        if self.link.is_some() {
            style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    /// Blank line between blocks, never at the very top or twice in a row.
    fn gap(&mut self) {
        self.flush();
        if self.lists.is_empty() && self.lines.last().is_some_and(|l| l.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn push(&mut self, event: Event<'_>) {
        if let Some(code) = &mut self.code {
            match event {
                Event::Text(t) => code.body.push_str(&t),
                Event::End(TagEnd::CodeBlock) => self.close_code_block(),
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(Tag::Paragraph) => {
                if self.lists.is_empty() {
                    self.gap();
                }
            }
            Event::End(TagEnd::Paragraph) => self.flush(),
            Event::Start(Tag::Heading { level, .. }) => {
                self.gap();
                self.modifiers.push(heading_modifier(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                self.modifiers.pop();
                self.flush();
            }
            Event::Start(Tag::Emphasis) => self.modifiers.push(Modifier::ITALIC),
            Event::Start(Tag::Strong) => self.modifiers.push(Modifier::BOLD),
            Event::Start(Tag::Strikethrough) => self.modifiers.push(Modifier::CROSSED_OUT),
            Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough) => {
                self.modifiers.pop();
            }
            Event::Start(Tag::Link { dest_url, .. }) => self.link = Some(dest_url.to_string()),
            Event::End(TagEnd::Link) => {
                if let Some(url) = self.link.take() {
                    self.current
                        .push(Span::styled(format!(" <{url}>"), Style::default().fg(FRAME)));
                }
            }
            Event::Start(Tag::List(start)) => {
                if self.lists.is_empty() {
                    self.gap();
                } else {
                    self.flush();
                }
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.flush();
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.current.push(Span::styled(marker, Style::default().fg(FRAME)));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                self.gap();
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = Some(CodeBlock {
                    lang,
                    body: String::new(),
                });
            }
            Event::Text(t) => {
                let style = self.style();
                self.current.push(Span::styled(t.replace('\t', "    "), style));
            }
            Event::Code(c) => {
                self.current.push(Span::styled(
                    c.to_string(),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ));
            }
            Event::SoftBreak => self.current.push(Span::raw(" ")),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.gap();
                self.lines
                    .push(Line::from(Span::styled("─".repeat(32), Style::default().fg(FRAME))));
            }
            _ => {}
        }
    }

    fn close_code_block(&mut self) {
        let Some(block) = self.code.take() else {
            return;
        };
        let frame = Style::default().fg(FRAME);
        let label = if block.lang.is_empty() {
            "┌──".to_string()
        } else {
            format!("┌── {}", block.lang)
        };
        self.lines.push(Line::from(Span::styled(label, frame)));

        let mut highlighter = SYNTAXES
            .find_syntax_by_token(&block.lang)
            .filter(|_| !block.lang.is_empty())
            .zip(THEME.as_ref())
            .map(|(syntax, theme)| HighlightLines::new(syntax, theme));

        for raw in LinesWithEndings::from(&block.body) {
            let mut spans = vec![Span::styled("│ ", frame)];
            match highlighter
                .as_mut()
                .and_then(|h| h.highlight_line(raw, &SYNTAXES).ok())
            {
                Some(ranges) => spans.extend(ranges.into_iter().map(|(style, text)| {
                    let c = style.foreground;
                    Span::styled(
                        text.trim_end_matches('\n').replace('\t', "    "),
                        Style::default().fg(Color::Rgb(c.r, c.g, c.b)),
                    )
                })),
                None => spans.push(Span::styled(
                    raw.trim_end_matches('\n').replace('\t', "    "),
                    Style::default().fg(Color::White),
                )),
            }
            self.lines.push(Line::from(spans));
        }
        self.lines.push(Line::from(Span::styled("└──", frame)));
    }

    fn finish(mut self) -> Text<'static> {
        self.flush();
        Text::from(self.lines)
    }
}

fn heading_modifier(level: HeadingLevel) -> Modifier {
    match level {
        HeadingLevel::H1 => Modifier::BOLD | Modifier::UNDERLINED,
        HeadingLevel::H2 => Modifier::BOLD,
        _ => Modifier::BOLD | Modifier::ITALIC,
    }
}
