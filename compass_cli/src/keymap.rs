/// Centralized keybindings and help text for the Career Compass TUI

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("1-5", "Answer the current question"),
            ("Space", "Select the highlighted option"),
            ("h/←", "Slider down / go back"),
            ("l/→", "Slider up"),
            ("Tab", "Jump to the next question"),
            ("Enter", "Continue"),
            ("Backspace", "Go back one step"),
            ("r", "Restart the assessment"),
            ("t", "Toggle high-contrast"),
            ("?", "Show help"),
            ("q/Esc", "Quit/Close"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q') | KeyCode::Esc)
            || (matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Check if key is help
    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    /// Check if key is left
    pub fn is_left(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('h') | KeyCode::Left)
    }

    /// Check if key is right
    pub fn is_right(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('l') | KeyCode::Right)
    }

    /// Check if key is confirm (Enter/y)
    pub fn is_confirm(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter | KeyCode::Char('y'))
    }

    /// Check if key is space (for selecting options)
    pub fn is_space(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char(' '))
    }

    /// Check if key is go-back
    pub fn is_back(code: KeyCode) -> bool {
        matches!(code, KeyCode::Backspace)
    }

    /// Check if key is restart
    pub fn is_restart(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('r'))
    }

    /// Check if key is toggle theme
    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }

    /// Check if key is next-question
    pub fn is_next_question(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab)
    }

    /// Numeric value of a digit key, if any
    pub fn digit(code: KeyCode) -> Option<u8> {
        match code {
            KeyCode::Char(c) => c.to_digit(10).map(|d| d as u8),
            _ => None,
        }
    }
}
