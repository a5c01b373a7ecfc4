/// Results stage: overall verdict, section scores, and WISCAR breakdown
use crate::components::StepHeader;
use compass_core::guidance::{self, ScoreBadge, Tone};
use compass_core::question_bank::WISCAR_DESCRIPTORS;
use compass_core::session::AssessmentSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

pub struct ResultsScreen<'a> {
    session: &'a AssessmentSession,
    high_contrast: bool,
}

impl<'a> ResultsScreen<'a> {
    pub fn new(session: &'a AssessmentSession, high_contrast: bool) -> Self {
        Self {
            session,
            high_contrast,
        }
    }

    fn tone_color(&self, tone: Tone) -> Color {
        if self.high_contrast {
            return Color::White;
        }
        match tone {
            Tone::Positive => Color::Green,
            Tone::Cautious => Color::Yellow,
            Tone::Negative => Color::Red,
        }
    }

    fn badge_color(&self, badge: ScoreBadge) -> Color {
        if self.high_contrast {
            return Color::White;
        }
        match badge {
            ScoreBadge::Strong => Color::Green,
            ScoreBadge::Moderate => Color::Yellow,
            ScoreBadge::NeedsDevelopment => Color::Red,
        }
    }
}

impl<'a> Widget for ResultsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        let header = StepHeader::new(self.session.stage(), self.session.progress())
            .subtitle("Your Assessment Results")
            .high_contrast(self.high_contrast);
        Widget::render(header, chunks[0], buf);

        self.render_verdict(chunks[1], buf);
        self.render_section_scores(chunks[2], buf);
        self.render_wiscar_breakdown(chunks[3], buf);
    }
}

impl<'a> ResultsScreen<'a> {
    fn render_verdict(&self, area: Rect, buf: &mut Buffer) {
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

        let data = self.session.data();
        let summary = guidance::recommendation_summary(data.recommendation);
        let verdict_color = self.tone_color(summary.tone);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                " Recommendation ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(inner);

        let text = vec![
            Line::from(Span::styled(
                summary.headline,
                Style::default()
                    .fg(verdict_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("Overall Score: {}/100", data.overall_score),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", data.recommendation.as_str()),
                    Style::default().fg(verdict_color),
                ),
            ]),
            Line::from(Span::styled(
                summary.message,
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        Widget::render(Paragraph::new(text), parts[0], buf);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(verdict_color))
            .ratio(data.overall_score as f64 / 100.0)
            .label(format!("{}/100", data.overall_score));
        Widget::render(gauge, parts[1], buf);
    }

    fn render_section_scores(&self, area: Rect, buf: &mut Buffer) {
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
                " Section Scores ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let data = self.session.data();
        let wiscar_average = data.wiscar_scores.average().round() as u8;
        let rows = [
            (
                "Psychometric",
                data.psychometric_score,
                "Personality alignment with Salesforce careers",
            ),
            (
                "Technical",
                data.technical_score,
                "Aptitude and platform knowledge",
            ),
            (
                "WISCAR Average",
                wiscar_average,
                "Holistic readiness across six dimensions",
            ),
        ];

        let lines: Vec<Line> = rows
            .iter()
            .map(|(label, score, caption)| {
                let badge = ScoreBadge::from_score(*score);
                Line::from(vec![
                    Span::styled(
                        format!("{:<15}", label),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("{:>3}/100  ", score), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("{:<19}", format!("[{}]", badge.as_str())),
                        Style::default().fg(self.badge_color(badge)),
                    ),
                    Span::styled(format!(" {}", caption), Style::default().add_modifier(Modifier::DIM)),
                ])
            })
            .collect();

        Widget::render(Paragraph::new(lines), inner, buf);
    }

    fn render_wiscar_breakdown(&self, area: Rect, buf: &mut Buffer) {
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
                " WISCAR Breakdown ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); WISCAR_DESCRIPTORS.len()])
            .split(inner);

        let data = self.session.data();
        for (descriptor, row) in WISCAR_DESCRIPTORS.iter().zip(rows.iter()) {
            let value = data.wiscar_scores.get(descriptor.dimension);
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(18), Constraint::Min(0)])
                .split(*row);

            let label = Paragraph::new(Span::styled(
                descriptor.title,
                Style::default().fg(Color::White),
            ));
            Widget::render(label, cols[0], buf);

            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(accent))
                .ratio(value as f64 / 100.0)
                .label(format!("{}/100", value));
            Widget::render(gauge, cols[1], buf);
        }
    }
}
