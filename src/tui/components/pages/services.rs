//! # Services Page
//!
//! The full price list as a card grid. Featured services get a brighter
//! border and a star.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use tui_scrollview::ScrollViewState;

use crate::core::content::{SERVICES, Service};
use crate::core::format::{format_duration, format_price};
use crate::tui::component::Component;
use crate::tui::components::button::Button;
use crate::tui::components::card::Card;
use crate::tui::components::pages::{Section, render_sections};
use crate::tui::theme;

/// Card for one service: name, price badge, description and duration.
pub fn service_card(service: &Service) -> Card {
    let title = if service.featured {
        format!("★ {}", service.name)
    } else {
        service.name.to_string()
    };
    let body = Text::from(vec![
        Line::raw(service.description),
        Line::styled(format!("⏱ {}", format_duration(service.duration_minutes)), theme::muted()),
    ]);
    Card::new(title, body)
        .badge(format_price(service.price_cents))
        .highlighted(service.featured)
}

pub struct ServicesPage<'a> {
    pub scroll: &'a mut ScrollViewState,
}

impl ServicesPage<'_> {
    pub fn sections() -> Vec<Section> {
        vec![
            Section::Heading("Services & Prices"),
            Section::Text(Text::from(vec![
                Line::raw("Every service includes a consultation and a hot towel finish."),
                Line::default(),
            ])),
            Section::Cards(SERVICES.iter().map(service_card).collect()),
            Section::Gap(1),
            Section::Text(Text::from(vec![
                Button::new("Book Now").hint("Ctrl+B or Enter").line(),
                Line::from(Span::styled(
                    "Prices include tax. Walk-ins welcome when a chair is free.",
                    theme::muted(),
                )),
            ])),
        ]
    }
}

impl Component for ServicesPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render_sections(frame, area, &Self::sections(), self.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn featured_cards_are_marked() {
        let featured = SERVICES.iter().find(|s| s.featured).unwrap();
        let card = service_card(featured);
        assert!(card.title.starts_with('★'));
        assert!(card.highlighted);

        let plain = SERVICES.iter().find(|s| !s.featured).unwrap();
        assert!(!service_card(plain).highlighted);
    }

    #[test]
    fn card_badge_is_formatted_price() {
        let works = SERVICES.iter().find(|s| s.id == "the-works").unwrap();
        assert_eq!(service_card(works).badge.as_deref(), Some("$85.50"));
    }

    #[test]
    fn page_lists_services_with_prices() {
        let backend = TestBackend::new(100, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut scroll = ScrollViewState::default();
        terminal
            .draw(|f| ServicesPage { scroll: &mut scroll }.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("SERVICES & PRICES"));
        assert!(text.contains("Skin Fade"));
        assert!(text.contains("$35"));
        assert!(text.contains("1h 30min"));
    }
}
