//! Page palettes - CSS colors for the light and dark themes

use crate::theme::ThemeMode;

/// Colors used by the generated page (CSS-formatted)
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub heading: &'static str,
    pub border: &'static str,
    pub header_background: &'static str,
    pub stripe: &'static str,
    pub hover: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub good: &'static str,
    pub warn: &'static str,
    pub bad: &'static str,
}

impl Palette {
    pub const DARK: Self = Self {
        background: "#1e1e1e",
        text: "#d4d4d4",
        heading: "#569cd6",
        border: "#3c3c3c",
        header_background: "#252526",
        stripe: "#222223",
        hover: "#2f3b4a",
        accent: "#dcdcaa",
        muted: "#858585",
        good: "#4ec9b0",
        warn: "#d7ba7d",
        bad: "#f44747",
    };

    pub const LIGHT: Self = Self {
        background: "#ffffff",
        text: "#24292f",
        heading: "#0550ae",
        border: "#d0d7de",
        header_background: "#f6f8fa",
        stripe: "#fafbfc",
        hover: "#ddf4ff",
        accent: "#bf8700",
        muted: "#57606a",
        good: "#1a7f37",
        warn: "#9a6700",
        bad: "#cf222e",
    };

    pub fn for_mode(mode: ThemeMode) -> &'static Self {
        match mode {
            ThemeMode::Light => &Self::LIGHT,
            ThemeMode::Dark => &Self::DARK,
        }
    }

    /// CSS custom properties for this palette
    pub fn css_variables(&self) -> String {
        format!(
            "--bg: {}; --text: {}; --heading: {}; --border: {}; --header-bg: {}; \
             --stripe: {}; --hover: {}; --accent: {}; --muted: {}; --good: {}; \
             --warn: {}; --bad: {};",
            self.background,
            self.text,
            self.heading,
            self.border,
            self.header_background,
            self.stripe,
            self.hover,
            self.accent,
            self.muted,
            self.good,
            self.warn,
            self.bad,
        )
    }
}
