/// WISCAR stage: six self-rating sliders, one per readiness dimension
use crate::components::{SliderRow, StepHeader};
use compass_core::question_bank::WISCAR_DESCRIPTORS;
use compass_core::session::AssessmentSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct WiscarScreen<'a> {
    session: &'a AssessmentSession,
    cursor: usize,
    high_contrast: bool,
}

impl<'a> WiscarScreen<'a> {
    pub fn new(session: &'a AssessmentSession, cursor: usize, high_contrast: bool) -> Self {
        Self {
            session,
            cursor,
            high_contrast,
        }
    }
}

impl<'a> Widget for WiscarScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Min(0),
            ])
            .split(area);

        let header = StepHeader::new(self.session.stage(), self.session.progress())
            .subtitle("WISCAR Framework Analysis")
            .high_contrast(self.high_contrast);
        Widget::render(header, chunks[0], buf);

        let prompt = Paragraph::new(Span::styled(
            " Move the sliders to indicate how well each statement describes you.",
            Style::default().add_modifier(Modifier::DIM),
        ));
        Widget::render(prompt, chunks[1], buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2); 6])
            .split(chunks[2]);

        for (i, descriptor) in WISCAR_DESCRIPTORS.iter().enumerate() {
            let row = SliderRow::new(
                descriptor.title,
                descriptor.description,
                self.session.slider(descriptor.dimension),
            )
            .selected(i == self.cursor)
            .high_contrast(self.high_contrast);
            Widget::render(row, rows[i], buf);
        }

        self.render_statement(chunks[3], buf);
    }
}

impl<'a> WiscarScreen<'a> {
    fn render_statement(&self, area: Rect, buf: &mut Buffer) {
        let accent = if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(79, 70, 229)
        };

        let descriptor = &WISCAR_DESCRIPTORS[self.cursor.min(WISCAR_DESCRIPTORS.len() - 1)];
        let text = vec![
            Line::from(vec![
                Span::styled("\"", Style::default().fg(accent)),
                Span::styled(descriptor.statement, Style::default().fg(Color::White)),
                Span::styled("\"", Style::default().fg(accent)),
            ]),
            Line::from(Span::styled(
                "Strongly Disagree ◄──► Strongly Agree",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
        Widget::render(paragraph, area, buf);
    }
}
