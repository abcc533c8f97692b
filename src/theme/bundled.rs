//! Bundled TOML themes (compiled into binary)
//!
//! A file named `<theme>.toml` in ~/.config/legalis/themes/ overrides the
//! bundled theme of the same name.

pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Legalis.toml",
        content: LEGALIS,
    },
    BundledTheme {
        filename: "Dark.toml",
        content: DARK,
    },
    BundledTheme {
        filename: "Terminal.toml",
        content: TERMINAL,
    },
];

/// Flagship theme: parchment and saffron on deep navy
const LEGALIS: &str = r##"
[meta]
name = "Legalis"
version = 1

[ui]
background = "#14192b"
foreground = "#e8e1cf"
border = "#3b4363"
border_focused = "#f2a541"
title = "#f2a541"
status_bar = "#a9a392"
muted = "#6c7391"
border_type = "rounded"

[panes]
source = "#7fb2f0"
target = "#f2a541"
logs = "#8cc084"

[status]
success = "#8cc084"
warning = "#e9c46a"
error = "#e76f51"
debug = "#6c7391"
"##;

const DARK: &str = r##"
[meta]
name = "Dark"
version = 1

[ui]
background = "#1e1e1e"
foreground = "#d4d4d4"
border = "#3c3c3c"
border_focused = "#569cd6"
title = "#569cd6"
status_bar = "#9d9d9d"
muted = "#6a6a6a"

[panes]
source = "#569cd6"
target = "#c586c0"
logs = "#6a9955"

[status]
success = "#6a9955"
warning = "#dcdcaa"
error = "#f44747"
debug = "#808080"
"##;

/// Inherits the terminal's own palette
const TERMINAL: &str = r##"
[meta]
name = "Terminal"
version = 1

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:6"
title = "ansi:6"
status_bar = "ansi:7"
muted = "ansi:8"

[panes]
source = "ansi:4"
target = "ansi:5"
logs = "ansi:2"

[status]
success = "ansi:2"
warning = "ansi:3"
error = "ansi:1"
debug = "ansi:8"
"##;
