// Target pane - the Hindi output
//
// Shows, in priority order: the loading state while a request is
// outstanding, the last output text, or a placeholder.

use super::pane_block;
use crate::session::{Session, CONNECTION_ERROR_MESSAGE, WARMING_UP_MESSAGE};
use crate::theme::Theme;
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const PLACEHOLDER: &str = "Translation results will appear here...";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let theme = &app.theme;
    let focused = app.focus == Focus::Target;

    let copy_label = if session.copy_acknowledged() {
        Line::from(" ✓ Copied ").style(Style::default().fg(theme.success))
    } else {
        Line::from(" y Copy ").style(Style::default().fg(theme.muted))
    };

    let block = pane_block(" Target · हिन्दी ".to_string(), theme, theme.pane_target, focused)
        .title_bottom(copy_label.right_aligned());

    let (text, style) = if session.is_pending() {
        (
            format!("{} Translating...", app.spinner_char()),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        body(session, theme)
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(paragraph, area);
}

/// Output text and how to style it when idle
fn body(session: &Session, theme: &Theme) -> (String, Style) {
    let output = session.output_text();
    let style = match output {
        "" => return (PLACEHOLDER.to_string(), Style::default().fg(theme.muted)),
        WARMING_UP_MESSAGE => Style::default().fg(theme.warning),
        CONNECTION_ERROR_MESSAGE => Style::default().fg(theme.error),
        _ => Style::default().fg(theme.foreground),
    };
    (output.to_string(), style)
}
