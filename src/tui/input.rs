// Input handling - key bindings and action debounce
//
// Keys fall into two groups:
// - Actions (submit, copy, focus, logs, quit): mapped by `action_for` and
//   fired once per press through `InputHandler`
// - Editing keys: everything else, forwarded to the source editor unchanged

use super::app::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap before a held action key fires again.
/// Needed for terminals that never send Release events.
const REPEAT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Something the user asked the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Submit,
    Copy,
    SwitchFocus,
    ToggleLogs,
    Quit,
}

/// Map a key press to an action, or `None` if it is an editing key
pub fn action_for(key: &KeyEvent, focus: Focus) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),

        // Ctrl+Enter needs keyboard enhancement, so offer fallbacks
        KeyCode::Enter if ctrl => Some(Action::Submit),
        KeyCode::Char('s') if ctrl => Some(Action::Submit),
        KeyCode::F(5) => Some(Action::Submit),

        KeyCode::Char('y') if ctrl => Some(Action::Copy),
        KeyCode::Char('y') if focus == Focus::Target => Some(Action::Copy),

        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('l') if ctrl => Some(Action::ToggleLogs),

        _ => None,
    }
}

/// Fires each action once per key press
#[derive(Debug, Default)]
pub struct InputHandler {
    /// When each held action last fired
    held: HashMap<Action, Instant>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the action should run for this press
    pub fn handle_press(&mut self, action: Action) -> bool {
        let now = Instant::now();
        match self.held.get(&action) {
            Some(last) if now.duration_since(*last) < REPEAT_DEBOUNCE => false,
            _ => {
                self.held.insert(action, now);
                true
            }
        }
    }

    pub fn handle_release(&mut self, action: Action) {
        self.held.remove(&action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn submit_bindings() {
        for event in [
            key(KeyCode::Enter, KeyModifiers::CONTROL),
            key(KeyCode::Char('s'), KeyModifiers::CONTROL),
            key(KeyCode::F(5), KeyModifiers::NONE),
        ] {
            assert_eq!(action_for(&event, Focus::Source), Some(Action::Submit));
        }
        // Plain Enter is a newline in the editor
        assert_eq!(
            action_for(&key(KeyCode::Enter, KeyModifiers::NONE), Focus::Source),
            None
        );
    }

    #[test]
    fn plain_y_copies_only_from_target() {
        let y = key(KeyCode::Char('y'), KeyModifiers::NONE);
        assert_eq!(action_for(&y, Focus::Source), None);
        assert_eq!(action_for(&y, Focus::Target), Some(Action::Copy));

        let ctrl_y = key(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&ctrl_y, Focus::Source), Some(Action::Copy));
    }

    #[test]
    fn held_action_fires_once_until_release() {
        let mut handler = InputHandler::new();

        assert!(handler.handle_press(Action::Submit));
        assert!(!handler.handle_press(Action::Submit));

        handler.handle_release(Action::Submit);
        assert!(handler.handle_press(Action::Submit));
    }

    #[test]
    fn missing_release_recovers_after_debounce() {
        let mut handler = InputHandler::new();
        assert!(handler.handle_press(Action::Copy));

        thread::sleep(REPEAT_DEBOUNCE + Duration::from_millis(20));
        assert!(handler.handle_press(Action::Copy));
    }
}
