// Title bar component
//
// Renders the app title with the pending indicator.

use crate::session::Status;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title text, including the spinner while a request is outstanding
pub fn title_text(app: &App) -> String {
    match app.session().status() {
        Status::Pending => format!(" ⚖ Legalis ── {} Translating...", app.spinner_char()),
        Status::Idle => " ⚖ Legalis ── English → हिन्दी".to_string(),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(title_text(app))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(format!(" {} ", app.theme.name)).right_aligned()),
        );

    f.render_widget(title, area);
}
