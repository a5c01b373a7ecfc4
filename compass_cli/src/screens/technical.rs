/// Technical stage: one subsection with its three choice questions
use crate::components::{ChoiceList, StepHeader};
use compass_core::question_bank::TECHNICAL_SECTIONS;
use compass_core::session::AssessmentSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget, Wrap},
};

pub struct TechnicalScreen<'a> {
    session: &'a AssessmentSession,
    question_cursor: usize,
    option_cursor: usize,
    high_contrast: bool,
}

impl<'a> TechnicalScreen<'a> {
    pub fn new(
        session: &'a AssessmentSession,
        question_cursor: usize,
        option_cursor: usize,
        high_contrast: bool,
    ) -> Self {
        Self {
            session,
            question_cursor,
            option_cursor,
            high_contrast,
        }
    }
}

impl<'a> Widget for TechnicalScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let section = self.session.current_section();

        let mut constraints = vec![Constraint::Length(4)];
        for question in section.questions {
            constraints.push(Constraint::Length(question.options.len() as u16 + 2));
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let subtitle = format!(
            "Section {} of {}: {}",
            self.session.section_index() + 1,
            TECHNICAL_SECTIONS.len(),
            section.title
        );
        let header = StepHeader::new(self.session.stage(), self.session.progress())
            .subtitle(&subtitle)
            .high_contrast(self.high_contrast);
        Widget::render(header, chunks[0], buf);

        for (i, question) in section.questions.iter().enumerate() {
            self.render_question(chunks[i + 1], i, question, buf);
        }
    }
}

impl<'a> TechnicalScreen<'a> {
    fn render_question(
        &self,
        area: Rect,
        index: usize,
        question: &compass_core::question_bank::ChoiceQuestion,
        buf: &mut Buffer,
    ) {
        let accent = if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(79, 70, 229)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(question.options.len() as u16),
            ])
            .split(area);

        let focused = index == self.question_cursor;
        let answered = self.session.choice(question.id).is_some();
        let marker = if focused {
            "▸"
        } else if answered {
            "✓"
        } else {
            "○"
        };

        let prompt_style = if focused {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let prompt = Paragraph::new(Span::styled(
            format!("{} {}", marker, question.prompt),
            prompt_style,
        ))
        .wrap(Wrap { trim: true });
        Widget::render(prompt, chunks[0], buf);

        let list = ChoiceList::new(question.options)
            .cursor(if focused { Some(self.option_cursor) } else { None })
            .chosen(self.session.choice(question.id))
            .high_contrast(self.high_contrast);
        Widget::render(list, chunks[1], buf);
    }
}
