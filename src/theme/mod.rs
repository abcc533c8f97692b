// Theme system
//
// Themes are TOML documents. Lookup order for a name:
// 1. ~/.config/legalis/themes/<name>.toml
// 2. Bundled themes
// 3. Hardcoded fallback (Legalis)

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Resolved theme colors used by the TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // UI chrome
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused
    pub title: Color,
    pub status_bar: Color,
    pub muted: Color,
    pub border_type: BorderType,

    // Panes
    pub pane_source: Color,
    pub pane_target: Color,
    pub panel_logs: Color,

    // Feedback
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name("Legalis")
    }
}

impl Theme {
    /// Load theme by name, falling back to the default theme
    pub fn by_name(name: &str) -> Self {
        if let Some(theme) = Self::load_external(name) {
            return theme;
        }
        if let Some(theme) = Self::load_bundled(name) {
            return theme;
        }
        tracing::warn!("Unknown theme {:?}, using Legalis", name);
        Self::hardcoded_default()
    }

    /// Names of the bundled themes
    pub fn bundled_names() -> impl Iterator<Item = &'static str> {
        bundled::BUNDLED_THEMES
            .iter()
            .map(|t| t.filename.trim_end_matches(".toml"))
    }

    fn load_external(name: &str) -> Option<Self> {
        let path = Self::themes_dir()?.join(format!("{}.toml", name.replace(' ', "_")));
        let contents = std::fs::read_to_string(&path).ok()?;
        match TomlTheme::from_str(&contents) {
            Ok(toml) => Some(Self::from_toml(toml)),
            Err(e) => {
                tracing::warn!("Ignoring theme file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn load_bundled(name: &str) -> Option<Self> {
        let filename = format!("{}.toml", name.replace(' ', "_"));
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| TomlTheme::from_str(t.content).ok())
            .map(Self::from_toml)
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("legalis").join("themes"))
    }

    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    fn from_toml(toml: TomlTheme) -> Self {
        let parse = TomlTheme::parse_color;

        Self {
            name: toml.meta.name.clone(),

            background: parse(&toml.ui.background),
            foreground: parse(&toml.ui.foreground),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),
            title: parse(&toml.ui.title),
            status_bar: parse(&toml.ui.status_bar),
            muted: parse(&toml.ui.muted),
            border_type: Self::parse_border_type(toml.ui.border_type.as_deref()),

            pane_source: parse(&toml.panes.source),
            pane_target: parse(&toml.panes.target),
            panel_logs: parse(&toml.panes.logs),

            success: parse(&toml.status.success),
            warning: parse(&toml.status.warning),
            error: parse(&toml.status.error),
            debug: parse(&toml.status.debug),
        }
    }

    /// Used only if the bundled Legalis theme somehow fails to parse
    fn hardcoded_default() -> Self {
        Self::load_bundled("Legalis").unwrap_or(Self {
            name: "Legalis".to_string(),
            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            title: Color::Yellow,
            status_bar: Color::Gray,
            muted: Color::DarkGray,
            border_type: BorderType::Rounded,
            pane_source: Color::Blue,
            pane_target: Color::Yellow,
            panel_logs: Color::Green,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            debug: Color::DarkGray,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_all_parse() {
        for name in Theme::bundled_names() {
            assert!(Theme::load_bundled(name).is_some(), "{} failed to parse", name);
        }
    }

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(Theme::load_bundled("dark").unwrap().name, "Dark");
        assert_eq!(Theme::by_name("No Such Theme").name, "Legalis");
        assert_eq!(
            Theme::by_name("Terminal").background,
            Color::Reset
        );
    }
}
