// TUI application state
//
// Wraps the session controller with presentation state: the editor buffer,
// pane focus, toast, spinner frame and logs strip. All session changes go
// through the controller; this module only decides when to call it.

use super::components::Toast;
use super::editor::TextInput;
use super::input::{Action, InputHandler};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::service::{OutcomeKind, TranslationOutcome};
use crate::session::{CopyOutcome, Session, SessionController};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// English input editor
    #[default]
    Source,
    /// Hindi output (read-only)
    Target,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Source => Focus::Target,
            Focus::Target => Focus::Source,
        }
    }
}

pub struct App {
    pub controller: SessionController,
    pub editor: TextInput,
    pub focus: Focus,
    pub theme: Theme,
    pub toast: Option<Toast>,
    pub show_logs: bool,
    pub log_buffer: LogBuffer,
    pub should_quit: bool,
    /// Where requests go, shown in the status bar
    pub endpoint: String,
    animation_frame: usize,
    input_handler: InputHandler,
}

impl App {
    pub fn new(controller: SessionController, log_buffer: LogBuffer, config: &Config) -> Self {
        let endpoint = if config.demo_mode {
            "demo".to_string()
        } else {
            config.api_url.clone()
        };

        Self {
            controller,
            editor: TextInput::new(),
            focus: Focus::default(),
            theme: Theme::by_name(&config.theme),
            toast: None,
            show_logs: false,
            log_buffer,
            should_quit: false,
            endpoint,
            animation_frame: 0,
            input_handler: InputHandler::new(),
        }
    }

    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    /// Run an action if the debounce lets it through
    pub fn perform(&mut self, action: Action, outcome_tx: &mpsc::Sender<TranslationOutcome>) {
        if !self.input_handler.handle_press(action) {
            return;
        }

        match action {
            Action::Submit => self.submit(outcome_tx),
            Action::Copy => self.copy_output(),
            Action::SwitchFocus => self.focus = self.focus.toggle(),
            Action::ToggleLogs => self.show_logs = !self.show_logs,
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn release(&mut self, action: Action) {
        self.input_handler.handle_release(action);
    }

    /// Start a translation on a background task; the outcome comes back
    /// through `outcome_tx` and lands in [`App::finish_translation`].
    pub fn submit(&mut self, outcome_tx: &mpsc::Sender<TranslationOutcome>) {
        let Some(pending) = self.controller.begin_submit() else {
            return;
        };

        tracing::info!(
            chars = pending.request().text.chars().count(),
            "Translating"
        );

        let tx = outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = pending.dispatch_detached().await;
            if tx.send(outcome).await.is_err() {
                tracing::debug!("Translation finished after the UI closed");
            }
        });
    }

    pub fn finish_translation(&mut self, outcome: TranslationOutcome) {
        match self.controller.complete(outcome) {
            OutcomeKind::Success => tracing::info!("Translation received"),
            OutcomeKind::ServiceError => tracing::warn!("Service is warming up"),
            OutcomeKind::TransportFailure => {}
        }
    }

    pub fn copy_output(&mut self) {
        match self.controller.copy() {
            CopyOutcome::Copied => tracing::debug!("Output copied to clipboard"),
            CopyOutcome::NothingToCopy => self.show_toast("Nothing to copy yet"),
            CopyOutcome::Rejected => self.show_toast("✗ Failed to copy"),
        }
    }

    /// Apply an editing key to the source editor
    ///
    /// Only the source pane is editable. Returns true if the key was used.
    pub fn edit(&mut self, key: &KeyEvent) -> bool {
        if self.focus != Focus::Source {
            return false;
        }

        let typing = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        let changed = match key.code {
            KeyCode::Char(c) if typing => {
                self.editor.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.editor.newline();
                true
            }
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete(),
            KeyCode::Left => {
                self.editor.move_left();
                return true;
            }
            KeyCode::Right => {
                self.editor.move_right();
                return true;
            }
            KeyCode::Home => {
                self.editor.move_home();
                return true;
            }
            KeyCode::End => {
                self.editor.move_end();
                return true;
            }
            _ => return false,
        };

        if changed {
            self.sync_input();
        }
        true
    }

    /// Bracketed paste into the source editor
    pub fn paste(&mut self, text: &str) {
        if self.focus == Focus::Source {
            self.editor.insert_str(text);
            self.sync_input();
        }
    }

    fn sync_input(&mut self) {
        self.controller.on_input_change(self.editor.text());
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Advance the spinner and drop an expired toast
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardSink;
    use crate::service::{TranslationRequest, TranslationService};
    use crate::session::CONNECTION_ERROR_MESSAGE;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct EchoService;

    #[async_trait]
    impl TranslationService for EchoService {
        fn name(&self) -> &'static str {
            "echo"
        }

        async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome {
            TranslationOutcome::Success {
                translated_text: format!("hi:{}", request.text),
            }
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn write(&mut self, _text: &str) -> anyhow::Result<()> {
            anyhow::bail!("no display")
        }
    }

    fn app() -> App {
        let controller = SessionController::new(Arc::new(EchoService), Box::new(BrokenClipboard));
        App::new(controller, LogBuffer::new(), &Config::default())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.edit(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_updates_session_input() {
        let mut app = app();
        for c in "Act".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session().input_text(), "Ac");

        // Target pane is read-only
        app.focus = Focus::Target;
        assert!(!press(&mut app, KeyCode::Char('x')));
        assert_eq!(app.session().input_text(), "Ac");
    }

    #[tokio::test]
    async fn submit_round_trips_through_channel() {
        let mut app = app();
        app.paste("bail");
        let (tx, mut rx) = mpsc::channel(1);

        app.submit(&tx);
        assert!(app.session().is_pending());

        // Edits while pending are allowed and don't alter the request
        press(&mut app, KeyCode::Char('!'));

        let outcome = rx.recv().await.unwrap();
        app.finish_translation(outcome);
        assert!(!app.session().is_pending());
        assert_eq!(app.session().output_text(), "hi:bail");
        assert_eq!(app.session().input_text(), "bail!");
    }

    #[test]
    fn clipboard_failure_shows_toast_without_acknowledgment() {
        let mut app = app();
        app.copy_output();
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Nothing to copy yet")
        );

        app.paste("x");
        let _pending = app.controller.begin_submit();
        app.finish_translation(TranslationOutcome::TransportFailure(
            crate::service::TransportError::Timeout,
        ));
        assert_eq!(app.session().output_text(), CONNECTION_ERROR_MESSAGE);

        app.copy_output();
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("✗ Failed to copy")
        );
        assert!(!app.session().copy_acknowledged());
    }
}
