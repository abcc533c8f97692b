// Status bar component
//
// Endpoint on the left, key hints on the right. Hints shrink on narrow
// terminals.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn hints(bp: Breakpoint) -> &'static str {
    match bp {
        Breakpoint::Compact => "^S send │ ^Y copy │ Esc quit",
        _ => "Ctrl+Enter/^S/F5 translate │ ^Y copy │ Tab focus │ ^L logs │ Esc quit",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(" 📡 {} │ {}", app.endpoint, hints(bp))
    } else {
        format!(" {}", hints(bp))
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
