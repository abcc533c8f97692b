// Source pane - the English input editor

use super::pane_block;
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

const PLACEHOLDER: &str = "Type or paste English legal text...";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Source;
    let theme = &app.theme;

    let block = pane_block(" Source · English ".to_string(), theme, theme.pane_source, focused)
        .title_bottom(Line::from(format!(" {} chars ", app.editor.char_count())).right_aligned());
    let inner = block.inner(area);

    // Lines are not wrapped so the cursor maps 1:1 onto cells; scroll to keep
    // it visible instead
    let (column, row) = app.editor.cursor_position();
    let offset = (
        scroll_offset(row, inner.height),
        scroll_offset(column, inner.width),
    );

    let paragraph = if app.editor.text().is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.muted))
    } else {
        Paragraph::new(app.editor.text())
            .style(Style::default().fg(theme.foreground))
            .scroll(offset)
    };

    f.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(
            inner.x + column - offset.1,
            inner.y + row - offset.0,
        ));
    }
}

/// Smallest scroll that keeps `position` inside a viewport of `size` cells
fn scroll_offset(position: u16, size: u16) -> u16 {
    position.saturating_sub(size.saturating_sub(1))
}
