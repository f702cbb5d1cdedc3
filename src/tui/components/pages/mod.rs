//! # Pages
//!
//! One module per navigation tab. Home, About and Services are read-only
//! content and render as a stack of [`Section`]s inside a scroll view; the
//! Contact page owns a form and draws straight to the frame so its fields
//! can place the terminal cursor.

pub mod about;
pub mod contact;
pub mod home;
pub mod services;

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::Modifier;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::components::card::Card;
use crate::tui::theme;

pub use about::AboutPage;
pub use contact::{ContactFormEvent, ContactFormState, ContactPage, FormFocus};
pub use home::HomePage;
pub use services::ServicesPage;

/// Width below which card grids collapse to one column.
const TWO_COLUMN_MIN_WIDTH: u16 = 72;

/// A vertical slice of a content page.
pub enum Section {
    Heading(&'static str),
    Text(Text<'static>),
    Cards(Vec<Card>),
    Gap(u16),
}

impl Section {
    fn paragraph(text: &Text<'static>) -> Paragraph<'static> {
        Paragraph::new(text.clone()).wrap(Wrap { trim: false })
    }

    fn heading_line(title: &'static str) -> Line<'static> {
        Line::styled(
            title.to_uppercase(),
            theme::accent().add_modifier(Modifier::BOLD),
        )
    }

    fn columns(width: u16) -> u16 {
        if width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 }
    }

    /// Rows this section needs at `width`.
    pub fn height(&self, width: u16) -> u16 {
        match self {
            Section::Heading(_) => 2,
            Section::Text(text) => Self::paragraph(text).line_count(width) as u16,
            Section::Cards(cards) => {
                let columns = Self::columns(width);
                let card_width = width / columns;
                cards
                    .chunks(columns as usize)
                    .map(|row| row.iter().map(|c| c.height(card_width)).max().unwrap_or(0))
                    .sum()
            }
            Section::Gap(rows) => *rows,
        }
    }

    fn render(&self, view: &mut ScrollView, area: Rect) {
        match self {
            Section::Heading(title) => {
                view.render_widget(Paragraph::new(Self::heading_line(title)), area);
            }
            Section::Text(text) => view.render_widget(Self::paragraph(text), area),
            Section::Cards(cards) => {
                let columns = Self::columns(area.width);
                let card_width = area.width / columns;
                let mut y = area.y;
                for row in cards.chunks(columns as usize) {
                    let row_height = row.iter().map(|c| c.height(card_width)).max().unwrap_or(0);
                    for (i, card) in row.iter().enumerate() {
                        let rect = Rect::new(
                            area.x + card_width * i as u16,
                            y,
                            card_width,
                            row_height,
                        );
                        view.render_widget(card.paragraph(), rect);
                    }
                    y += row_height;
                }
            }
            Section::Gap(_) => {}
        }
    }
}

/// Lay `sections` out top to bottom inside a scroll view filling `area`.
pub fn render_sections(
    frame: &mut Frame,
    area: Rect,
    sections: &[Section],
    scroll_state: &mut ScrollViewState,
) {
    // One column reserved for the scrollbar
    let content_width = area.width.saturating_sub(1);
    let heights: Vec<u16> = sections.iter().map(|s| s.height(content_width)).collect();
    let total_height: u16 = heights.iter().sum();

    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let mut y_offset: u16 = 0;
    for (section, height) in sections.iter().zip(&heights) {
        section.render(
            &mut scroll_view,
            Rect::new(0, y_offset, content_width, *height),
        );
        y_offset += height;
    }

    frame.render_stateful_widget(scroll_view, area, scroll_state);
}
