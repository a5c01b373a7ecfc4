/// Labeled 0-100 slider rendered as a title line over a gauge

use compass_core::question_bank::SLIDER_MAX;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

pub struct SliderRow<'a> {
    title: &'a str,
    description: &'a str,
    value: u8,
    selected: bool,
    high_contrast: bool,
}

impl<'a> SliderRow<'a> {
    pub fn new(title: &'a str, description: &'a str, value: u8) -> Self {
        Self {
            title,
            description,
            value,
            selected: false,
            high_contrast: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for SliderRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(79, 70, 229)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let marker = if self.selected { "▸ " } else { "  " };
        let title_style = if self.selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let title_line = Line::from(vec![
            Span::styled(format!("{}{}", marker, self.title), title_style),
            Span::styled(
                format!("  {}", self.description),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        Widget::render(Paragraph::new(title_line), chunks[0], buf);

        let gauge_style = if self.selected {
            Style::default().fg(accent)
        } else if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let gauge = Gauge::default()
            .gauge_style(gauge_style)
            .ratio(self.value as f64 / SLIDER_MAX as f64)
            .label(format!("{}/{}", self.value, SLIDER_MAX));
        Widget::render(gauge, chunks[1], buf);
    }
}
