/// Single-choice option list with a movable cursor and a recorded pick

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct ChoiceList<'a> {
    options: &'a [&'a str],
    cursor: Option<usize>,
    chosen: Option<usize>,
    high_contrast: bool,
}

impl<'a> ChoiceList<'a> {
    pub fn new(options: &'a [&'a str]) -> Self {
        Self {
            options,
            cursor: None,
            chosen: None,
            high_contrast: false,
        }
    }

    /// Highlighted row; None when the list is unfocused.
    pub fn cursor(mut self, index: Option<usize>) -> Self {
        self.cursor = index;
        self
    }

    /// Recorded answer, marked independently of the cursor.
    pub fn chosen(mut self, index: Option<usize>) -> Self {
        self.chosen = index;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for ChoiceList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(79, 70, 229)
        };

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let marker = if self.chosen == Some(i) { "(•)" } else { "( )" };
                let style = if self.cursor == Some(i) {
                    Style::default()
                        .bg(accent)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else if self.chosen == Some(i) {
                    Style::default().fg(accent)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(
                    format!(" {} {}. {}", marker, i + 1, option),
                    style,
                ))
            })
            .collect();

        let paragraph = Paragraph::new(lines);
        Widget::render(paragraph, area, buf);
    }
}
