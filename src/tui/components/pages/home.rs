//! # Home Page
//!
//! Hero copy with the booking call to action, the featured services and a
//! few words from clients.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use tui_scrollview::ScrollViewState;

use crate::core::content::{self, CONTACT, TESTIMONIALS, Testimonial};
use crate::tui::component::Component;
use crate::tui::components::button::{Button, Variant};
use crate::tui::components::card::Card;
use crate::tui::components::pages::services::service_card;
use crate::tui::components::pages::{Section, render_sections};
use crate::tui::markdown;
use crate::tui::theme;

/// `★★★★☆` for a rating out of five.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn testimonial_card(testimonial: &Testimonial) -> Card {
    Card::new(
        testimonial.author,
        Line::styled(format!("“{}”", testimonial.quote), theme::muted()),
    )
    .badge(stars(testimonial.rating))
}

pub struct HomePage<'a> {
    pub scroll: &'a mut ScrollViewState,
}

impl HomePage<'_> {
    pub fn sections() -> Vec<Section> {
        let mut hero = markdown::render(content::HERO_MARKDOWN, theme::BODY);
        hero.lines.push(Line::default());
        hero.lines.push(Line::from(
            [
                Button::new("Book Now").hint("Ctrl+B").line().spans,
                vec![Span::raw("   ")],
                Button::new("See Services")
                    .variant(Variant::Secondary)
                    .hint("F3")
                    .line()
                    .spans,
            ]
            .concat(),
        ));

        vec![
            Section::Text(hero),
            Section::Gap(1),
            Section::Heading("Featured Services"),
            Section::Cards(content::featured_services().map(service_card).collect()),
            Section::Gap(1),
            Section::Heading("What Clients Say"),
            Section::Cards(TESTIMONIALS.iter().map(testimonial_card).collect()),
            Section::Gap(1),
            Section::Heading("Find Us"),
            Section::Text(Text::from(vec![
                Line::raw(format!(
                    "{}, {}, {} {}",
                    CONTACT.street, CONTACT.city, CONTACT.region, CONTACT.postal_code
                )),
                Line::styled(
                    format!("{}  ·  {}", CONTACT.phone, CONTACT.email),
                    theme::accent(),
                ),
            ])),
        ]
    }
}

impl Component for HomePage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render_sections(frame, area, &Self::sections(), self.scroll);
    }
}
