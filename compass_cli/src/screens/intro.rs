/// Introduction screen: assessment overview and Salesforce primer
use crate::components::StepHeader;
use compass_core::question_bank::{
    APP_TAGLINE, ASSESSMENT_MINUTES, CORE_DOMAINS, INTRO_PURPOSE, INTRO_TIME_NOTE, REFERENCE_URL,
    REQUIRED_TRAITS, TYPICAL_ROLES, WHAT_IS_SALESFORCE,
};
use compass_core::session::AssessmentSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct IntroScreen<'a> {
    session: &'a AssessmentSession,
    high_contrast: bool,
}

impl<'a> IntroScreen<'a> {
    pub fn new(session: &'a AssessmentSession, high_contrast: bool) -> Self {
        Self {
            session,
            high_contrast,
        }
    }
}

impl<'a> Widget for IntroScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let header = StepHeader::new(self.session.stage(), self.session.progress())
            .subtitle("Test Introduction")
            .high_contrast(self.high_contrast);
        Widget::render(header, chunks[0], buf);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.render_overview(body[0], buf);
        self.render_at_a_glance(body[1], buf);
    }
}

impl<'a> IntroScreen<'a> {
    fn render_overview(&self, area: Rect, buf: &mut Buffer) {
        let accent = if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(79, 70, 229)
        };

        let border_style = if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                " About This Assessment ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let text = vec![
            Line::from(Span::styled(
                APP_TAGLINE,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(INTRO_PURPOSE),
            Line::from(""),
            Line::from(Span::styled(
                "What Is Salesforce?",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(WHAT_IS_SALESFORCE),
            Line::from(""),
            Line::from(format!(
                "Takes approximately {} minutes. {}",
                ASSESSMENT_MINUTES, INTRO_TIME_NOTE
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Learn more: {}", REFERENCE_URL),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                "[Enter] Start Assessment",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }

    fn render_at_a_glance(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let domain_lines: Vec<Line> = CORE_DOMAINS
            .iter()
            .map(|domain| {
                Line::from(vec![
                    Span::styled(
                        domain.title,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(": {}", domain.detail),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ])
            })
            .collect();
        self.render_panel(chunks[0], " Core Domains ", domain_lines, buf);

        let role_lines = vec![Line::from(TYPICAL_ROLES.join(", "))];
        self.render_panel(chunks[1], " Typical Roles ", role_lines, buf);

        let trait_lines: Vec<Line> = REQUIRED_TRAITS
            .iter()
            .map(|t| Line::from(format!("• {}", t)))
            .collect();
        self.render_panel(chunks[2], " Required Traits ", trait_lines, buf);
    }

    fn render_panel(&self, area: Rect, title: &str, lines: Vec<Line>, buf: &mut Buffer) {
        let accent = if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(79, 70, 229)
        };

        let border_style = if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                title.to_string(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }
}
