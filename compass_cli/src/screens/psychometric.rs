/// Psychometric stage: one Likert statement with five labeled ratings
use crate::components::{ChoiceList, StepHeader};
use compass_core::question_bank::{LIKERT_STATEMENTS, RATING_LABELS};
use compass_core::session::AssessmentSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct PsychometricScreen<'a> {
    session: &'a AssessmentSession,
    cursor: usize,
    high_contrast: bool,
}

impl<'a> PsychometricScreen<'a> {
    pub fn new(session: &'a AssessmentSession, cursor: usize, high_contrast: bool) -> Self {
        Self {
            session,
            cursor,
            high_contrast,
        }
    }
}

impl<'a> Widget for PsychometricScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let subtitle = format!(
            "Question {} of {}",
            self.session.statement_index() + 1,
            LIKERT_STATEMENTS.len()
        );
        let header = StepHeader::new(self.session.stage(), self.session.progress())
            .subtitle(&subtitle)
            .high_contrast(self.high_contrast);
        Widget::render(header, chunks[0], buf);

        self.render_statement(chunks[1], buf);
        self.render_ratings(chunks[2], buf);
    }
}

impl<'a> PsychometricScreen<'a> {
    fn render_statement(&self, area: Rect, buf: &mut Buffer) {
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
                " Rate how much you agree with this statement: ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let statement = Paragraph::new(Span::styled(
            self.session.current_statement(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true });
        Widget::render(statement, inner, buf);
    }

    fn render_ratings(&self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                " Your Answer ",
                Style::default().add_modifier(Modifier::DIM),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let chosen = self.session.current_rating().map(|r| (r - 1) as usize);
        let list = ChoiceList::new(&RATING_LABELS)
            .cursor(Some(self.cursor))
            .chosen(chosen)
            .high_contrast(self.high_contrast);
        Widget::render(list, inner, buf);
    }
}
