//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Post list
    pub id_color: Color,
    pub author: Color,
    pub comment_count: Color,
    pub long_post: Color,
    pub search_match: Color,

    // Status line
    pub loading: Color,
    pub error: Color,

    // Toggle indicators
    pub toggle_on: Color,
    pub toggle_off: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            id_color: Color::Cyan,
            author: Color::Magenta,
            comment_count: Color::Green,
            long_post: Color::Yellow,
            search_match: Color::Yellow,

            loading: Color::Cyan,
            error: Color::Red,

            toggle_on: Color::Green,
            toggle_off: GRAY,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
        }
    }
}

impl Theme {
    /// Color for an on/off indicator in the header
    pub fn toggle_color(&self, on: bool) -> Color {
        if on { self.toggle_on } else { self.toggle_off }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
