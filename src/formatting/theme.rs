use colored::{Color, ColoredString, Colorize};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::RwLock;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Member state
    Working,
    OffShift,

    // Entity colors
    ZoneHeader,
    MemberName,
    LocalTime,
    Bar,
    BarTrack,

    // UI colors
    Error,
    Warning,
    Success,

    // Text colors
    Primary,
    Muted,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn default() -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::Working, Color::Green);
        colors.insert(SemanticColor::OffShift, Color::BrightBlack);

        colors.insert(SemanticColor::ZoneHeader, Color::Cyan);
        colors.insert(SemanticColor::MemberName, Color::White);
        colors.insert(SemanticColor::LocalTime, Color::Yellow);
        colors.insert(SemanticColor::Bar, Color::Green);
        colors.insert(SemanticColor::BarTrack, Color::BrightBlack);

        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Warning, Color::Yellow);
        colors.insert(SemanticColor::Success, Color::Green);

        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Muted, Color::BrightBlack);

        Self { colors }
    }

    pub fn get(&self, color: SemanticColor) -> Color {
        self.colors
            .get(&color)
            .copied()
            .unwrap_or(Color::White)
    }
}

lazy_static! {
    static ref CURRENT_THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::default());
}

pub fn theme_color(color: SemanticColor) -> Color {
    CURRENT_THEME.read().unwrap().get(color)
}

pub trait ThemedColorize {
    fn with_theme(self, color: SemanticColor) -> ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(self, color: SemanticColor) -> ColoredString {
        self.color(theme_color(color))
    }
}

impl ThemedColorize for String {
    fn with_theme(self, color: SemanticColor) -> ColoredString {
        self.color(theme_color(color))
    }
}

pub mod helpers {
    use super::SemanticColor;

    /// Semantic color for a member's working indicator.
    pub fn status_color(working: bool) -> SemanticColor {
        if working {
            SemanticColor::Working
        } else {
            SemanticColor::OffShift
        }
    }

    /// Indicator glyph for a member's working state.
    pub fn status_symbol(working: bool) -> &'static str {
        if working {
            "●"
        } else {
            "○"
        }
    }
}
