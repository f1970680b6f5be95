/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into Actions. While the box score overlay is
/// open only the overlay keys and quit are active.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::AppState;

/// Handle global keys that work regardless of the overlay
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

fn handle_box_score_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Esc | KeyCode::Backspace => Some(Action::CloseBoxScore),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::OpenGamePage),
        _ => None,
    }
}

fn handle_scores_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::RefreshData),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousDay),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextDay),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Enter => Some(Action::OpenBoxScore),
        _ => None,
    }
}

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?}", key);

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    if state.box_score.is_some() {
        handle_box_score_keys(key.code)
    } else {
        handle_scores_keys(key.code)
    }
}
