/// Buffer snapshot tests for the assessment screens

use compass_cli::ui::{draw, AppState, Overlay};
use compass_core::question_bank::TECHNICAL_SECTIONS;
use compass_core::session::Stage;
use compass_core::types::Recommendation;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn press(app: &mut AppState, code: KeyCode) {
    app.handle_key(code, KeyModifiers::NONE);
}

fn press_char(app: &mut AppState, c: char) {
    press(app, KeyCode::Char(c));
}

fn render_to_string(app: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}

/// Drives a session to Results with strong answers (overall 80, YES).
fn strong_finish() -> AppState {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    for _ in 0..15 {
        press_char(&mut app, '4');
        press(&mut app, KeyCode::Enter);
    }
    for section in &TECHNICAL_SECTIONS {
        for question in section.questions {
            press_char(&mut app, char::from(b'1' + question.correct as u8));
        }
        press(&mut app, KeyCode::Enter);
    }
    for _ in 0..6 {
        press_char(&mut app, 'l');
        press_char(&mut app, 'l');
        press_char(&mut app, 'j');
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Results);
    app
}

/// Drives a session to Results with weak answers (overall 23, NO).
fn weak_finish() -> AppState {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    for _ in 0..15 {
        press_char(&mut app, '1');
        press(&mut app, KeyCode::Enter);
    }
    for section in &TECHNICAL_SECTIONS {
        for question in section.questions {
            let wrong: u8 = if question.correct == 0 { 2 } else { 1 };
            press_char(&mut app, char::from(b'0' + wrong));
        }
        press(&mut app, KeyCode::Enter);
    }
    // Sliders stay on the default 50
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Results);
    assert_eq!(app.session.data().recommendation, Recommendation::No);
    app
}

#[test]
fn test_intro_screen_renders() {
    let app = AppState::new(false);
    let buffer = render_to_string(&app, 80, 30);

    assert!(buffer.contains("Career Compass"));
    assert!(buffer.contains("Test Introduction"));
    assert!(buffer.contains("Should You Learn Salesforce?"));
    assert!(buffer.contains("What Is Salesforce?"));
    assert!(buffer.contains("Core Domains"));
    assert!(buffer.contains("[Enter] Start Assessment"));
    assert!(buffer.contains("Press Enter to start the assessment"));
}

#[test]
fn test_psychometric_screen_renders() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    let buffer = render_to_string(&app, 80, 30);

    assert!(buffer.contains("Step 2 of 6"));
    assert!(buffer.contains("Question 1 of 15"));
    assert!(buffer.contains("Your Answer"));
    assert!(buffer.contains("Strongly Agree"));
    assert!(buffer.contains("Neutral"));
}

#[test]
fn test_technical_screen_renders() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    for _ in 0..15 {
        press_char(&mut app, '3');
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.session.stage(), Stage::Technical);
    let buffer = render_to_string(&app, 80, 30);

    assert!(buffer.contains("Section 1 of 3: General Aptitude"));
    assert!(buffer.contains("What comes next in this sequence"));
    assert!(buffer.contains("32"));
}

#[test]
fn test_wiscar_screen_renders() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    for _ in 0..15 {
        press_char(&mut app, '3');
        press(&mut app, KeyCode::Enter);
    }
    for section in &TECHNICAL_SECTIONS {
        for question in section.questions {
            press_char(&mut app, char::from(b'1' + question.correct as u8));
        }
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.session.stage(), Stage::Wiscar);
    let buffer = render_to_string(&app, 80, 30);

    assert!(buffer.contains("WISCAR Framework Analysis"));
    assert!(buffer.contains("Will"));
    assert!(buffer.contains("Ability to Learn"));
    assert!(buffer.contains("Real-World Fit"));
    assert!(buffer.contains("50/100"));
    assert!(buffer.contains("Strongly Disagree"));
}

#[test]
fn test_results_screen_renders_yes_verdict() {
    let app = strong_finish();
    let buffer = render_to_string(&app, 80, 30);

    assert!(buffer.contains("Your Assessment Results"));
    assert!(buffer.contains("Excellent Fit!"));
    assert!(buffer.contains("Overall Score: 80/100"));
    assert!(buffer.contains("(YES)"));
    assert!(buffer.contains("Section Scores"));
    assert!(buffer.contains("Psychometric"));
    assert!(buffer.contains("[Strong]"));
    assert!(buffer.contains("WISCAR Breakdown"));
    assert!(buffer.contains("60/100"));
}

#[test]
fn test_guidance_screen_renders_yes_path() {
    let mut app = strong_finish();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Guidance);
    let buffer = render_to_string(&app, 80, 36);

    assert!(buffer.contains("Career & Learning Guidance"));
    assert!(buffer.contains("Top Salesforce Career Paths"));
    assert!(buffer.contains("Salesforce Admin"));
    assert!(buffer.contains("Skill Gap Analysis"));
    assert!(buffer.contains("CRM Logic"));
    assert!(buffer.contains("Recommended Learning Path"));
    assert!(buffer.contains("trailhead.salesforce.com"));
    // YES hides the alternatives panel
    assert!(buffer.contains("No alternatives needed."));
    assert!(!buffer.contains("Alternative Career Paths"));
}

#[test]
fn test_guidance_screen_renders_alternatives_for_no() {
    let mut app = weak_finish();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stage(), Stage::Guidance);
    let buffer = render_to_string(&app, 80, 36);

    assert!(buffer.contains("Alternative Career Paths"));
    assert!(buffer.contains("PowerApps Development"));
}

#[test]
fn test_help_overlay_renders() {
    let mut app = AppState::new(false);
    press_char(&mut app, '?');
    assert_eq!(app.overlay, Some(Overlay::Help));
    let buffer = render_to_string(&app, 80, 30);

    assert!(buffer.contains("Help - Keybindings"));
    assert!(buffer.contains("Restart the assessment"));
    assert!(buffer.contains("Press any key to close"));
}

#[test]
fn test_restart_modal_renders() {
    let mut app = AppState::new(false);
    press(&mut app, KeyCode::Enter);
    press_char(&mut app, 'r');
    assert_eq!(app.overlay, Some(Overlay::ConfirmRestart));
    let buffer = render_to_string(&app, 80, 30);

    assert!(buffer.contains("Confirm Restart"));
    assert!(buffer.contains("Discard all answers"));
}

#[test]
fn test_high_contrast_renders_without_panic() {
    let mut app = strong_finish();
    app.high_contrast = true;
    let buffer = render_to_string(&app, 80, 30);
    assert!(buffer.contains("Your Assessment Results"));
}
