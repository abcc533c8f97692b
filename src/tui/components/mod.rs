// Components module - reusable UI building blocks
//
// - Title bar: App name, pending spinner
// - Source pane: English editor with character count
// - Target pane: Hindi output, loading state, copy acknowledgment
// - Status bar: Endpoint and key hints
// - Logs panel: Recent log entries (toggled)
// - Toast: Transient notifications
//
// Each component is a focused, single-responsibility module.

pub mod logs_panel;
pub mod source_pane;
pub mod status_bar;
pub mod target_pane;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::theme::Theme;
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

/// Bordered pane block, highlighted with the pane's identity color when focused
pub(crate) fn pane_block<'a>(
    title: String,
    theme: &Theme,
    identity: ratatui::style::Color,
    focused: bool,
) -> Block<'a> {
    let border = if focused { identity } else { theme.border };
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(identity))
}
