/// Guidance stage: career-path table, skill gaps, and learning path
use crate::components::StepHeader;
use compass_core::guidance::{self, FitLevel};
use compass_core::question_bank::REFERENCE_URL;
use compass_core::scoring::GapLevel;
use compass_core::session::AssessmentSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};

pub struct GuidanceScreen<'a> {
    session: &'a AssessmentSession,
    high_contrast: bool,
}

impl<'a> GuidanceScreen<'a> {
    pub fn new(session: &'a AssessmentSession, high_contrast: bool) -> Self {
        Self {
            session,
            high_contrast,
        }
    }

    fn fit_color(&self, fit: FitLevel) -> Color {
        if self.high_contrast {
            return Color::White;
        }
        match fit {
            FitLevel::Excellent => Color::Green,
            FitLevel::Good => Color::Yellow,
            FitLevel::ConsiderDevelopment => Color::Red,
        }
    }

    fn gap_color(&self, level: GapLevel) -> Color {
        if self.high_contrast {
            return Color::White;
        }
        match level {
            GapLevel::None => Color::Green,
            GapLevel::Low => Color::Yellow,
            GapLevel::Moderate => Color::LightRed,
            GapLevel::High => Color::Red,
        }
    }
}

impl<'a> Widget for GuidanceScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let header = StepHeader::new(self.session.stage(), self.session.progress())
            .subtitle("Career & Learning Guidance")
            .high_contrast(self.high_contrast);
        Widget::render(header, chunks[0], buf);

        self.render_career_paths(chunks[1], buf);
        self.render_skill_gaps(chunks[2], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[3]);

        self.render_learning_path(bottom[0], buf);
        self.render_alternatives(bottom[1], buf);
    }
}

impl<'a> GuidanceScreen<'a> {
    fn block(&self, title: &'static str) -> Block<'static> {
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

        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
    }

    fn header_row(&self, cells: &[&'static str]) -> Row<'static> {
        let accent = if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(79, 70, 229)
        };

        Row::new(
            cells
                .iter()
                .map(|h| Span::styled(*h, Style::default().fg(accent).add_modifier(Modifier::BOLD)))
                .collect::<Vec<_>>(),
        )
        .height(1)
    }

    fn render_career_paths(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = guidance::role_fits(self.session.data())
            .iter()
            .map(|fit| {
                Row::new(vec![
                    Cell::from(Span::styled(
                        fit.role.title,
                        Style::default().fg(Color::White),
                    )),
                    Cell::from(Span::styled(
                        fit.fit.as_str(),
                        Style::default().fg(self.fit_color(fit.fit)),
                    )),
                    Cell::from(Span::styled(
                        fit.role.skills.join(", "),
                        Style::default().add_modifier(Modifier::DIM),
                    )),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(22),
                Constraint::Length(22),
                Constraint::Min(0),
            ],
        )
        .header(self.header_row(&["Role", "Fit", "Key Skills"]))
        .block(self.block(" Top Salesforce Career Paths "));

        Widget::render(table, area, buf);
    }

    fn render_skill_gaps(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = guidance::skill_gaps(self.session.data())
            .iter()
            .map(|row| {
                let level = match row.level {
                    GapLevel::None => "None".to_string(),
                    other => format!("{} Gap", other.as_str()),
                };
                Row::new(vec![
                    Cell::from(Span::styled(row.skill, Style::default().fg(Color::White))),
                    Cell::from(row.provided.to_string()),
                    Cell::from(row.required.to_string()),
                    Cell::from(row.shortfall().to_string()),
                    Cell::from(Span::styled(
                        level,
                        Style::default().fg(self.gap_color(row.level)),
                    )),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(18),
                Constraint::Length(7),
                Constraint::Length(10),
                Constraint::Length(5),
                Constraint::Min(0),
            ],
        )
        .header(self.header_row(&["Skill Area", "Yours", "Required", "Gap", "Level"]))
        .block(self.block(" Skill Gap Analysis "));

        Widget::render(table, area, buf);
    }

    fn render_learning_path(&self, area: Rect, buf: &mut Buffer) {
        let block = self.block(" Recommended Learning Path ");
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let tier = self.session.data().recommendation;
        let mut lines: Vec<Line> = guidance::learning_path(tier)
            .iter()
            .enumerate()
            .map(|(i, step)| {
                Line::from(Span::styled(
                    format!("{}. {}", i + 1, step),
                    Style::default().fg(Color::White),
                ))
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Start here: {}", REFERENCE_URL),
            Style::default().add_modifier(Modifier::DIM),
        )));

        Widget::render(Paragraph::new(lines).wrap(Wrap { trim: true }), inner, buf);
    }

    fn render_alternatives(&self, area: Rect, buf: &mut Buffer) {
        let tier = self.session.data().recommendation;
        let alternatives = guidance::alternative_paths(tier);

        if alternatives.is_empty() {
            let block = self.block(" Next Steps ");
            let inner = block.inner(area);
            Widget::render(block, area, buf);

            let lines = vec![
                Line::from(Span::styled(
                    "No alternatives needed.",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Start the learning path today and build on a free Developer Edition org.",
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ];
            Widget::render(Paragraph::new(lines).wrap(Wrap { trim: true }), inner, buf);
            return;
        }

        let block = self.block(" Alternative Career Paths ");
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let lines: Vec<Line> = alternatives
            .iter()
            .map(|path| {
                Line::from(vec![
                    Span::styled(
                        path.title,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(": {}", path.description),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ])
            })
            .collect();

        Widget::render(Paragraph::new(lines).wrap(Wrap { trim: true }), inner, buf);
    }
}
