/// Smoke tests for assessment TUI input handling

use compass_cli::ui::{AppState, Overlay};
use compass_core::question_bank::TECHNICAL_SECTIONS;
use compass_core::session::Stage;
use compass_core::types::{Recommendation, WiscarDimension, WiscarScores};
use crossterm::event::{KeyCode, KeyModifiers};

fn press(app: &mut AppState, code: KeyCode) {
    app.handle_key(code, KeyModifiers::NONE);
}

fn press_char(app: &mut AppState, c: char) {
    press(app, KeyCode::Char(c));
}

/// Rates every Likert statement with the same digit and advances.
fn rate_all_statements(app: &mut AppState, digit: char) {
    for _ in 0..15 {
        press_char(app, digit);
        press(app, KeyCode::Enter);
    }
}

/// Answers every technical question correctly and advances through
/// all three sections.
fn answer_all_sections_correctly(app: &mut AppState) {
    for section in &TECHNICAL_SECTIONS {
        for question in section.questions {
            press_char(app, char::from(b'1' + question.correct as u8));
        }
        press(app, KeyCode::Enter);
    }
}

#[test]
fn test_intro_enter_starts_assessment() {
    let mut app = AppState::new(false);
    assert_eq!(app.session.stage(), Stage::Introduction);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Psychometric);
    assert_eq!(app.session.statement_index(), 0);
}

#[test]
fn test_psychometric_blocked_without_rating() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);

    // No rating recorded yet, so Enter must not move
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Psychometric);
    assert_eq!(app.session.statement_index(), 0);
    assert_eq!(app.status, "Pick a rating before continuing");
}

#[test]
fn test_full_run_reaches_guidance() {
    let mut app = AppState::new(false);

    press(&mut app, KeyCode::Enter);
    rate_all_statements(&mut app, '4');
    assert_eq!(app.session.stage(), Stage::Technical);

    answer_all_sections_correctly(&mut app);
    assert_eq!(app.session.stage(), Stage::Wiscar);

    // Push every slider from the default 50 up to 60
    for _ in 0..6 {
        press_char(&mut app, 'l');
        press_char(&mut app, 'l');
        press_char(&mut app, 'j');
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Results);

    let data = app.session.data();
    assert_eq!(data.psychometric_score, 80);
    assert_eq!(data.technical_score, 100);
    assert_eq!(data.wiscar_scores, WiscarScores::uniform(60));
    assert_eq!(data.overall_score, 80);
    assert_eq!(data.recommendation, Recommendation::Yes);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Guidance);

    // Guidance is terminal
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Guidance);
    assert_eq!(app.status, "End of assessment. Press r to restart or q to quit");
}

#[test]
fn test_technical_blocked_until_section_answered() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    rate_all_statements(&mut app, '3');
    assert_eq!(app.session.stage(), Stage::Technical);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Technical);
    assert_eq!(app.session.section_index(), 0);
    assert_eq!(
        app.status,
        "Answer all questions in this section before continuing"
    );

    for question in TECHNICAL_SECTIONS[0].questions {
        press_char(&mut app, char::from(b'1' + question.correct as u8));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.section_index(), 1);
}

#[test]
fn test_back_key_keeps_prior_rating() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    press_char(&mut app, '4');
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.statement_index(), 1);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.session.stage(), Stage::Psychometric);
    assert_eq!(app.session.statement_index(), 0);
    assert_eq!(app.session.current_rating(), Some(4));
    // Cursor resyncs to the remembered answer
    assert_eq!(app.option_cursor, 3);
}

#[test]
fn test_restart_requires_confirmation() {
    let mut app = AppState::new(false);

    // Restart is not offered on the introduction
    press_char(&mut app, 'r');
    assert_eq!(app.overlay, None);

    press(&mut app, KeyCode::Enter);
    press_char(&mut app, '5');
    press(&mut app, KeyCode::Enter);

    press_char(&mut app, 'r');
    assert_eq!(app.overlay, Some(Overlay::ConfirmRestart));

    // Cancelling keeps all progress
    press_char(&mut app, 'n');
    assert_eq!(app.overlay, None);
    assert_eq!(app.session.stage(), Stage::Psychometric);
    assert_eq!(app.session.statement_index(), 1);
    assert_eq!(app.status, "Restart cancelled");

    // Confirming discards everything
    press_char(&mut app, 'r');
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.overlay, None);
    assert_eq!(app.session.stage(), Stage::Introduction);
    assert_eq!(app.session.statement_index(), 0);
    assert_eq!(app.session.data().psychometric_score, 0);
    assert_eq!(app.session.data().overall_score, 0);
    assert_eq!(app.session.data().recommendation, Recommendation::No);
    assert_eq!(app.status, "Assessment restarted");
}

#[test]
fn test_sliders_clamp_at_bounds() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    rate_all_statements(&mut app, '3');
    answer_all_sections_correctly(&mut app);
    assert_eq!(app.session.stage(), Stage::Wiscar);

    // 12 steps down from 50 would be -10; must stop at 0
    for _ in 0..12 {
        press_char(&mut app, 'h');
    }
    assert_eq!(app.session.slider(WiscarDimension::Will), 0);

    // 25 steps up from 0 would be 125; must stop at 100
    for _ in 0..25 {
        press_char(&mut app, 'l');
    }
    assert_eq!(app.session.slider(WiscarDimension::Will), 100);
}

#[test]
fn test_left_key_adjusts_slider_on_wiscar() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    rate_all_statements(&mut app, '3');
    answer_all_sections_correctly(&mut app);
    assert_eq!(app.session.stage(), Stage::Wiscar);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.session.stage(), Stage::Wiscar);
    assert_eq!(app.session.slider(WiscarDimension::Will), 45);

    press_char(&mut app, 'h');
    assert_eq!(app.session.slider(WiscarDimension::Will), 40);
}

#[test]
fn test_left_key_retreats_from_results() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    rate_all_statements(&mut app, '3');
    answer_all_sections_correctly(&mut app);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Results);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.session.stage(), Stage::Wiscar);
}

#[test]
fn test_help_overlay_opens_and_closes() {
    let mut app = AppState::new(false);

    press_char(&mut app, '?');
    assert_eq!(app.overlay, Some(Overlay::Help));

    // Any key closes help
    press_char(&mut app, 'x');
    assert_eq!(app.overlay, None);

    press_char(&mut app, '?');
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.overlay, None);
}

#[test]
fn test_quit_keys() {
    let mut app = AppState::new(false);
    press_char(&mut app, 'q');
    assert!(app.should_quit);

    let mut app = AppState::new(false);
    app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
}

#[test]
fn test_theme_toggle() {
    let mut app = AppState::new(false);
    assert!(!app.high_contrast);

    press_char(&mut app, 't');
    assert!(app.high_contrast);

    press_char(&mut app, 't');
    assert!(!app.high_contrast);
}

#[test]
fn test_space_selects_highlighted_rating() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);

    // Cursor starts on Neutral; move up once to Disagree and select
    press_char(&mut app, 'k');
    press_char(&mut app, ' ');
    assert_eq!(app.session.current_rating(), Some(2));
    assert_eq!(app.status, "Rated: Disagree");
}

#[test]
fn test_tab_cycles_technical_questions() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    rate_all_statements(&mut app, '3');
    assert_eq!(app.question_cursor, 0);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.question_cursor, 1);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.question_cursor, 2);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.question_cursor, 0);
}

#[test]
fn test_answering_hops_to_next_unanswered_question() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    rate_all_statements(&mut app, '3');

    press_char(&mut app, '2');
    assert_eq!(app.question_cursor, 1);
    press_char(&mut app, '2');
    assert_eq!(app.question_cursor, 2);
}
