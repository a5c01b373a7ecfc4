use crate::keymap::KeyMap;
/// Top-level TUI event loop and input handler
use crate::screens::{
    GuidanceScreen, IntroScreen, PsychometricScreen, ResultsScreen, TechnicalScreen, WiscarScreen,
};
use anyhow::Result;
use compass_core::question_bank::{RATING_LABELS, SLIDER_MAX, SLIDER_STEP, WISCAR_DESCRIPTORS};
use compass_core::session::{AssessmentSession, Progression, Stage};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    ConfirmRestart,
}

pub struct AppState {
    pub session: AssessmentSession,
    pub overlay: Option<Overlay>,
    /// Highlighted rating on the psychometric screen (0..5).
    pub option_cursor: usize,
    /// Focused question within the current technical section.
    pub question_cursor: usize,
    /// Focused slider on the WISCAR screen.
    pub dimension_cursor: usize,
    pub status: String,
    pub high_contrast: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(high_contrast: bool) -> Self {
        Self {
            session: AssessmentSession::new(),
            overlay: None,
            option_cursor: 2,
            question_cursor: 0,
            dimension_cursor: 0,
            status: "Press Enter to start the assessment".to_string(),
            high_contrast,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: crossterm::event::KeyModifiers) {
        // Overlays capture input before anything else
        if let Some(overlay) = self.overlay {
            match overlay {
                Overlay::Help => {
                    // Any key closes help
                    if matches!(code, KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc) {
                        self.overlay = None;
                    }
                }
                Overlay::ConfirmRestart => {
                    if KeyMap::is_confirm(code) {
                        self.session.restart();
                        self.sync_cursors();
                        self.overlay = None;
                        self.status = "Assessment restarted".to_string();
                    } else if matches!(code, KeyCode::Esc | KeyCode::Char('n')) {
                        self.overlay = None;
                        self.status = "Restart cancelled".to_string();
                    }
                }
            }
            return;
        }

        // Global keys
        if KeyMap::is_quit(code, modifiers) {
            self.should_quit = true;
            return;
        }

        if KeyMap::is_help(code) {
            self.overlay = Some(Overlay::Help);
            return;
        }

        if KeyMap::is_toggle_theme(code) {
            self.high_contrast = !self.high_contrast;
            return;
        }

        if KeyMap::is_restart(code) && self.session.stage() != Stage::Introduction {
            self.overlay = Some(Overlay::ConfirmRestart);
            return;
        }

        if KeyMap::is_back(code) {
            self.retreat();
            return;
        }

        match self.session.stage() {
            Stage::Introduction => self.handle_intro_key(code),
            Stage::Psychometric => self.handle_psychometric_key(code),
            Stage::Technical => self.handle_technical_key(code),
            Stage::Wiscar => self.handle_wiscar_key(code),
            Stage::Results | Stage::Guidance => self.handle_readout_key(code),
        }
    }

    fn handle_intro_key(&mut self, code: KeyCode) {
        if KeyMap::is_confirm(code) {
            self.advance();
        }
    }

    fn handle_psychometric_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            self.option_cursor = (self.option_cursor + 1).min(RATING_LABELS.len() - 1);
        } else if KeyMap::is_up(code) {
            self.option_cursor = self.option_cursor.saturating_sub(1);
        } else if KeyMap::is_space(code) {
            self.record_rating(self.option_cursor as u8 + 1);
        } else if KeyMap::is_confirm(code) {
            self.advance();
        } else if KeyMap::is_left(code) {
            self.retreat();
        } else if let Some(digit) = KeyMap::digit(code) {
            if (1..=RATING_LABELS.len() as u8).contains(&digit) {
                self.record_rating(digit);
            }
        }
    }

    fn handle_technical_key(&mut self, code: KeyCode) {
        let section = self.session.current_section();
        let question = &section.questions[self.question_cursor];

        if KeyMap::is_down(code) {
            if self.option_cursor + 1 < question.options.len() {
                self.option_cursor += 1;
            } else if self.question_cursor + 1 < section.questions.len() {
                self.question_cursor += 1;
                self.option_cursor = 0;
            }
        } else if KeyMap::is_up(code) {
            if self.option_cursor > 0 {
                self.option_cursor -= 1;
            } else if self.question_cursor > 0 {
                self.question_cursor -= 1;
                self.option_cursor = section.questions[self.question_cursor].options.len() - 1;
            }
        } else if KeyMap::is_next_question(code) {
            self.question_cursor = (self.question_cursor + 1) % section.questions.len();
            self.option_cursor = 0;
        } else if KeyMap::is_space(code) {
            self.record_choice(question.id, self.option_cursor);
        } else if KeyMap::is_confirm(code) {
            self.advance();
        } else if KeyMap::is_left(code) {
            self.retreat();
        } else if let Some(digit) = KeyMap::digit(code) {
            if digit >= 1 && (digit as usize) <= question.options.len() {
                self.record_choice(question.id, (digit - 1) as usize);
            }
        }
    }

    fn handle_wiscar_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            self.dimension_cursor = (self.dimension_cursor + 1).min(WISCAR_DESCRIPTORS.len() - 1);
        } else if KeyMap::is_up(code) {
            self.dimension_cursor = self.dimension_cursor.saturating_sub(1);
        } else if KeyMap::is_left(code) {
            self.nudge_slider(false);
        } else if KeyMap::is_right(code) {
            self.nudge_slider(true);
        } else if KeyMap::is_confirm(code) {
            self.advance();
        }
    }

    fn handle_readout_key(&mut self, code: KeyCode) {
        if KeyMap::is_confirm(code) {
            self.advance();
        } else if KeyMap::is_left(code) {
            self.retreat();
        }
    }

    fn record_rating(&mut self, rating: u8) {
        let index = self.session.statement_index();
        match self.session.record_rating(index, rating) {
            Ok(()) => {
                self.option_cursor = (rating - 1) as usize;
                self.status = format!("Rated: {}", RATING_LABELS[(rating - 1) as usize]);
            }
            Err(e) => self.status = format!("Error: {}", e),
        }
    }

    fn record_choice(&mut self, id: &'static str, option: usize) {
        let section = self.session.current_section();
        match self.session.record_choice(id, option) {
            Ok(()) => {
                if let Some(question) = section.questions.iter().find(|q| q.id == id) {
                    self.status = format!("Selected: {}", question.options[option]);
                }
                // Jump focus to the first question still unanswered
                if let Some(next) = section
                    .questions
                    .iter()
                    .position(|q| self.session.choice(q.id).is_none())
                {
                    self.question_cursor = next;
                    self.option_cursor = 0;
                }
            }
            Err(e) => self.status = format!("Error: {}", e),
        }
    }

    fn nudge_slider(&mut self, increase: bool) {
        let descriptor = &WISCAR_DESCRIPTORS[self.dimension_cursor];
        let current = self.session.slider(descriptor.dimension);
        let value = if increase {
            (current + SLIDER_STEP).min(SLIDER_MAX)
        } else {
            current.saturating_sub(SLIDER_STEP)
        };
        match self.session.record_slider(descriptor.dimension, value) {
            Ok(()) => self.status = format!("{}: {}", descriptor.title, value),
            Err(e) => self.status = format!("Error: {}", e),
        }
    }

    fn advance(&mut self) {
        match self.session.advance() {
            Ok(Progression::Advanced) => {
                self.sync_cursors();
                self.status.clear();
            }
            Ok(Progression::Blocked) => {
                self.status = match self.session.stage() {
                    Stage::Psychometric => "Pick a rating before continuing".to_string(),
                    Stage::Technical => {
                        "Answer all questions in this section before continuing".to_string()
                    }
                    _ => "Cannot continue yet".to_string(),
                };
            }
            Ok(Progression::AtEnd) => {
                self.status = "End of assessment. Press r to restart or q to quit".to_string();
            }
            Err(e) => self.status = format!("Error: {}", e),
        }
    }

    fn retreat(&mut self) {
        if self.session.retreat() {
            self.sync_cursors();
            self.status.clear();
        }
    }

    fn sync_cursors(&mut self) {
        self.option_cursor = match self.session.current_rating() {
            Some(rating) => (rating - 1) as usize,
            None => 2,
        };
        self.question_cursor = 0;
        self.dimension_cursor = 0;
    }
}

pub fn run_tui(high_contrast: bool) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, AppState::new(high_contrast));

    // Restore terminal before surfacing any loop error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: AppState) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code, key.modifiers);
            }
        }
    }
    Ok(())
}

pub fn draw(f: &mut ratatui::Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    match app.session.stage() {
        Stage::Introduction => {
            f.render_widget(IntroScreen::new(&app.session, app.high_contrast), chunks[0]);
        }
        Stage::Psychometric => {
            f.render_widget(
                PsychometricScreen::new(&app.session, app.option_cursor, app.high_contrast),
                chunks[0],
            );
        }
        Stage::Technical => {
            f.render_widget(
                TechnicalScreen::new(
                    &app.session,
                    app.question_cursor,
                    app.option_cursor,
                    app.high_contrast,
                ),
                chunks[0],
            );
        }
        Stage::Wiscar => {
            f.render_widget(
                WiscarScreen::new(&app.session, app.dimension_cursor, app.high_contrast),
                chunks[0],
            );
        }
        Stage::Results => {
            f.render_widget(ResultsScreen::new(&app.session, app.high_contrast), chunks[0]);
        }
        Stage::Guidance => {
            f.render_widget(GuidanceScreen::new(&app.session, app.high_contrast), chunks[0]);
        }
    }

    render_status_bar(f, chunks[1], app);

    match app.overlay {
        Some(Overlay::Help) => render_help(f, f.area(), app.high_contrast),
        Some(Overlay::ConfirmRestart) => render_modal(
            f,
            f.area(),
            "Confirm Restart",
            "Discard all answers and return to the introduction?\n\n[Enter/y] Confirm  [Esc/n] Cancel",
            app.high_contrast,
        ),
        None => {}
    }
}

fn stage_hints(stage: Stage) -> &'static str {
    match stage {
        Stage::Introduction => "[Enter] Start  [t] Theme  [?] Help  [q] Quit",
        Stage::Psychometric => "[1-5] Rate  [j/k] Move  [Space] Select  [Enter] Next  [h/←] Back",
        Stage::Technical => "[1-4] Answer  [Tab] Next question  [j/k] Move  [Enter] Continue",
        Stage::Wiscar => "[j/k] Dimension  [h/l] Adjust  [Enter] Continue",
        Stage::Results => "[Enter] Guidance  [h/←] Back  [r] Restart  [q] Quit",
        Stage::Guidance => "[h/←] Back  [r] Restart  [q] Quit",
    }
}

fn render_status_bar(f: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let accent = if app.high_contrast {
        Color::White
    } else {
        Color::Rgb(79, 70, 229)
    };

    let mut spans = Vec::new();
    if !app.status.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", app.status),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        format!(" {}", stage_hints(app.session.stage())),
        Style::default().add_modifier(Modifier::DIM),
    ));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Black))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn render_help(f: &mut ratatui::Frame, area: Rect, high_contrast: bool) {
    let accent = if high_contrast {
        Color::White
    } else {
        Color::Rgb(79, 70, 229)
    };

    let border_style = if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            " Help - Keybindings ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let help_items = KeyMap::help_text();
    let mut lines = vec![
        Line::from(Span::styled(
            "Career Compass",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, desc) in help_items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn render_modal(
    f: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    message: &str,
    high_contrast: bool,
) {
    let accent = if high_contrast {
        Color::White
    } else {
        Color::Rgb(79, 70, 229)
    };

    // Center the modal
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    let modal_area = horizontal[1];

    // Clear the area
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let text = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);
    f.render_widget(text, inner);
}
