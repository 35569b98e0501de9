//! Key handling for the interactive view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shorter,
    Longer,
    ToggleNumbers,
    ToggleSpecial,
    Regenerate,
    Copy,
    Quit,
}

/// Map a key press to an action. Releases and unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Some(Action::Shorter),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::Longer)
        }
        KeyCode::Char('n') => Some(Action::ToggleNumbers),
        KeyCode::Char('s') => Some(Action::ToggleSpecial),
        KeyCode::Enter | KeyCode::Char('r') => Some(Action::Regenerate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
