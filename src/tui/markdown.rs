//! Markdown → ratatui `Text` renderer for the site copy.
//!
//! Thin wrapper around `pulldown_cmark`. The hero and about copy only use a
//! small subset: headings, paragraphs, bold/italic, bullet lists, links and
//! inline code (rendered as a key cap, since the copy uses it for shortcuts).

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::tui::theme;

/// Parse markdown into styled `Text` with `base_fg` as the body color.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut copy = CopyRenderer {
        body: Style::default().fg(base_fg),
        ..Default::default()
    };
    Parser::new(content).for_each(|event| copy.apply(event));
    Text::from(copy.lines)
}

#[derive(Default)]
struct CopyRenderer {
    lines: Vec<Line<'static>>,
    body: Style,
    /// Inline styles, innermost last. Each entry already includes its parents.
    inline: Vec<Style>,
    bullets: usize,
    /// Destination of the link being written, shown after its label.
    href: Option<String>,
    /// A block just ended; the next block starts after a blank line.
    gap: bool,
}

impl CopyRenderer {
    fn current(&self) -> Style {
        self.inline.last().copied().unwrap_or(self.body)
    }

    fn nest(&mut self, extra: Style) {
        let style = self.current().patch(extra);
        self.inline.push(style);
    }

    fn unnest(&mut self) {
        self.inline.pop();
    }

    /// Begin a new line, preceded by a blank one if a block just closed.
    fn start_block(&mut self) {
        if std::mem::take(&mut self.gap) {
            self.lines.push(Line::default());
        }
        self.lines.push(Line::default());
    }

    fn append(&mut self, span: Span<'static>) {
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        if let Some(line) = self.lines.last_mut() {
            line.push_span(span);
        }
    }

    fn apply(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) => self.start_block(),
            Event::Start(Tag::Heading { level, .. }) => {
                self.start_block();
                self.nest(heading_style(level));
            }
            Event::Start(Tag::List(_)) => {
                if self.bullets == 0 && self.gap {
                    self.gap = false;
                    self.lines.push(Line::default());
                }
                self.bullets += 1;
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(self.bullets.saturating_sub(1));
                self.lines.push(Line::default());
                self.append(Span::styled(format!("{indent}• "), theme::accent()));
            }
            Event::Start(Tag::Strong) => self.nest(Style::new().add_modifier(Modifier::BOLD)),
            Event::Start(Tag::Emphasis) => self.nest(Style::new().add_modifier(Modifier::ITALIC)),
            Event::Start(Tag::Link { dest_url, .. }) => {
                self.href = Some(dest_url.into_string());
                self.nest(theme::link());
            }
            Event::End(TagEnd::Paragraph) => self.gap = true,
            Event::End(TagEnd::Heading(_)) => {
                self.unnest();
                self.gap = true;
            }
            Event::End(TagEnd::List(_)) => {
                self.bullets = self.bullets.saturating_sub(1);
                self.gap = true;
            }
            Event::End(TagEnd::Strong | TagEnd::Emphasis) => self.unnest(),
            Event::End(TagEnd::Link) => {
                self.unnest();
                if let Some(href) = self.href.take() {
                    self.append(Span::styled(format!(" ({href})"), theme::muted()));
                }
            }
            Event::Text(words) => {
                // ratatui draws a tab as zero width
                let span = Span::styled(words.replace('\t', "    "), self.current());
                self.append(span);
            }
            Event::Code(keys) => self.append(Span::styled(format!(" {keys} "), theme::key_cap())),
            Event::SoftBreak => self.append(Span::raw(" ")),
            Event::HardBreak => self.lines.push(Line::default()),
            Event::Rule => {
                self.start_block();
                self.append(Span::styled("─".repeat(40), theme::muted()));
                self.gap = true;
            }
            _ => {}
        }
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => theme::accent().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => theme::accent().add_modifier(Modifier::BOLD),
        _ => Style::new().add_modifier(Modifier::BOLD),
    }
}
