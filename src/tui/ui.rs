// UI rendering - screen layout
//
// ┌ title ───────────────────────────┐
// │ source pane   │   target pane    │  (stacked when narrow)
// │ logs strip (Ctrl+L)              │
// └ status bar ──────────────────────┘

use super::app::App;
use super::components::{logs_panel, source_pane, status_bar, target_pane, title_bar};
use super::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

const LOGS_HEIGHT: u16 = 8;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(logs_height),
            Constraint::Length(2),
        ])
        .split(area);

    title_bar::render(f, rows[0], app);

    let (source, target) = pane_areas(rows[1], Breakpoint::from_width(area.width));
    source_pane::render(f, source, app);
    target_pane::render(f, target, app);

    if app.show_logs {
        logs_panel::render(f, rows[2], app);
    }

    status_bar::render(f, rows[3], app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}

/// Split the main area into source and target panes
fn pane_areas(area: Rect, bp: Breakpoint) -> (Rect, Rect) {
    let direction = if bp.side_by_side() {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };

    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    (panes[0], panes[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardSink, SystemClipboard};
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::service::{DemoTranslationService, TranslationOutcome};
    use crate::session::SessionController;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    struct AcceptingClipboard;

    impl ClipboardSink for AcceptingClipboard {
        fn write(&mut self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn render_to_string(width: u16, height: u16, app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let controller = SessionController::new(
            Arc::new(DemoTranslationService::new()),
            Box::new(SystemClipboard),
        );
        App::new(controller, LogBuffer::new(), &Config::default())
    }

    #[test]
    fn panes_split_by_width() {
        let wide = Rect::new(0, 0, 120, 20);
        let (source, target) = pane_areas(wide, Breakpoint::from_width(120));
        assert_eq!(source.y, target.y);
        assert!(target.x > source.x);

        let narrow = Rect::new(0, 0, 80, 20);
        let (source, target) = pane_areas(narrow, Breakpoint::from_width(80));
        assert_eq!(source.x, target.x);
        assert!(target.y > source.y);
    }

    #[test]
    fn idle_screen_shows_placeholder_and_hints() {
        let screen = render_to_string(120, 24, &app());
        assert!(screen.contains("Translation results will appear here..."));
        assert!(screen.contains("Esc quit"));
    }

    #[test]
    fn pending_screen_shows_loading() {
        let mut app = app();
        app.paste("The Act");
        let _pending = app.controller.begin_submit();

        let screen = render_to_string(120, 24, &app);
        assert!(screen.contains("Translating..."));
        assert!(!screen.contains("Translation results will appear here..."));
    }

    #[tokio::test(start_paused = true)]
    async fn copied_label_shows_until_acknowledgment_expires() {
        let controller = SessionController::new(
            Arc::new(DemoTranslationService::new()),
            Box::new(AcceptingClipboard),
        );
        let mut app = App::new(controller, LogBuffer::new(), &Config::default());
        app.paste("Bail");
        let _pending = app.controller.begin_submit();
        app.finish_translation(TranslationOutcome::Success {
            translated_text: "जमानत".to_string(),
        });

        app.copy_output();
        let screen = render_to_string(120, 24, &app);
        assert!(screen.contains("✓ Copied"));
        assert!(!screen.contains("y Copy"));

        tokio::time::advance(Duration::from_millis(2001)).await;
        let screen = render_to_string(120, 24, &app);
        assert!(!screen.contains("✓ Copied"));
        assert!(screen.contains("y Copy"));
    }
}
