use crossterm::event::KeyCode;

/// Returns true when the app should exit.
pub fn handle_key_event(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Esc)
}
