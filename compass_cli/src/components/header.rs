/// Assessment chrome: app title, step counter, and stage strip

use compass_core::question_bank::APP_TITLE;
use compass_core::session::{Stage, StageProgress};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StepHeader<'a> {
    stage: Stage,
    progress: StageProgress,
    subtitle: &'a str,
    high_contrast: bool,
}

impl<'a> StepHeader<'a> {
    pub fn new(stage: Stage, progress: StageProgress) -> Self {
        Self {
            stage,
            progress,
            subtitle: "",
            high_contrast: false,
        }
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    fn get_accent_color(&self) -> Color {
        if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(79, 70, 229) // Indigo #4F46E5
        }
    }
}

impl<'a> Widget for StepHeader<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.get_accent_color();
        let border_style = if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", APP_TITLE),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut step_spans = vec![Span::styled(
            format!(
                "Step {} of {}",
                self.progress.stage_index + 1,
                self.progress.stage_count
            ),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )];
        if !self.subtitle.is_empty() {
            step_spans.push(Span::raw("  "));
            step_spans.push(Span::styled(
                self.subtitle,
                Style::default().fg(Color::White),
            ));
        }
        step_spans.push(Span::raw("  "));
        step_spans.push(Span::styled(
            format!("{}% Complete", self.progress.percent()),
            Style::default().add_modifier(Modifier::DIM),
        ));

        let mut stage_spans: Vec<Span> = Vec::new();
        for stage in Stage::ALL {
            let style = if stage == self.stage {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else if stage.index() < self.stage.index() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            stage_spans.push(Span::styled(stage.title(), style));
            if stage.index() + 1 < Stage::COUNT {
                stage_spans.push(Span::styled(
                    " · ",
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
        }

        let paragraph = Paragraph::new(vec![Line::from(step_spans), Line::from(stage_spans)]);
        Widget::render(paragraph, inner, buf);
    }
}
