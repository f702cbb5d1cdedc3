//! # About Page
//!
//! Shop story, the team and the weekly opening hours. Today's row in the
//! hours table is highlighted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use tui_scrollview::ScrollViewState;

use crate::core::content::{self, HOURS, TEAM, TeamMember};
use crate::core::format::format_hours;
use crate::tui::component::Component;
use crate::tui::components::card::Card;
use crate::tui::components::pages::{Section, render_sections};
use crate::tui::markdown;
use crate::tui::theme;

fn team_card(member: &TeamMember) -> Card {
    let body = Text::from(vec![
        Line::raw(member.bio),
        Line::styled(member.specialties.join(" · "), theme::muted()),
    ]);
    Card::new(member.name, body).badge(member.role)
}

/// Opening hours, one row per day. `today` is Monday = 0.
pub fn hours_table(today: Option<u32>) -> Text<'static> {
    let lines: Vec<Line> = HOURS
        .iter()
        .enumerate()
        .map(|(i, hours)| {
            let is_today = today == Some(i as u32);
            let day_style = if is_today {
                theme::accent().add_modifier(Modifier::BOLD)
            } else {
                theme::accent()
            };
            let hours_style = if hours.open.is_some() {
                ratatui::style::Style::default().fg(theme::BODY)
            } else {
                theme::muted()
            };
            let mut spans = vec![
                Span::styled(format!("{:<11}", hours.day), day_style),
                Span::styled(format_hours(hours.open), hours_style),
            ];
            if is_today {
                spans.push(Span::styled("  ← today", theme::muted()));
            }
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

pub struct AboutPage<'a> {
    pub scroll: &'a mut ScrollViewState,
    /// Monday = 0
    pub today: Option<u32>,
}

impl AboutPage<'_> {
    pub fn sections(today: Option<u32>) -> Vec<Section> {
        vec![
            Section::Text(markdown::render(content::ABOUT_MARKDOWN, theme::BODY)),
            Section::Gap(1),
            Section::Heading("The Team"),
            Section::Cards(TEAM.iter().map(team_card).collect()),
            Section::Gap(1),
            Section::Heading("Opening Hours"),
            Section::Text(hours_table(today)),
        ]
    }
}

impl Component for AboutPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render_sections(frame, area, &Self::sections(self.today), self.scroll);
    }
}
