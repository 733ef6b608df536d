//! Contains various kinds of definition for formatting ANSI color/style codes.

use std::fmt::Display;

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        }
    }

    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> { Painted::new(display).style(self) }
}

/// Represents a color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1B[30m",
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Blue => "\x1B[34m",
            Self::Magenta => "\x1B[35m",
            Self::Cyan => "\x1B[36m",
            Self::White => "\x1B[37m",
        }
    }

    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> { Painted::new(display).color(self) }
}

/// Is a struct implementing [`Display`] that wraps a displayable object in ANSI escape codes.
///
/// A [`Painted`] with neither a color nor a style (or one that has been disabled) prints the
/// object untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<T> {
    display: T,
    color: Option<Color>,
    bold: bool,
    underline: bool,
    enabled: bool,
}

impl<T> Painted<T> {
    /// Wraps the displayable object without any color or style.
    pub fn new(display: T) -> Self {
        Self {
            display,
            color: None,
            bold: false,
            underline: false,
            enabled: true,
        }
    }

    /// Sets the color of the text.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Adds a style to the text.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        match style {
            Style::Bold => self.bold = true,
            Style::Underline => self.underline = true,
        }
        self
    }

    /// Turns the escape codes on or off; handy for plain output.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes = [
            self.bold.then_some(Style::Bold.code()),
            self.underline.then_some(Style::Underline.code()),
            self.color.map(Color::code),
        ];

        if !self.enabled || codes.iter().all(Option::is_none) {
            return write!(f, "{}", self.display);
        }

        for code in codes.into_iter().flatten() {
            f.write_str(code)?;
        }

        write!(f, "{}\x1B[0m", self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Painted, Style};

    #[test]
    fn painted_wraps_in_escape_codes() {
        assert_eq!(Color::Red.with("x").to_string(), "\x1B[31mx\x1B[0m");
        assert_eq!(
            Style::Bold.with(1).color(Color::Cyan).to_string(),
            "\x1B[1m\x1B[36m1\x1B[0m"
        );
    }

    #[test]
    fn disabled_or_unstyled_is_plain() {
        assert_eq!(Color::Blue.with("text").enabled(false).to_string(), "text");
        assert_eq!(Painted::new("text").to_string(), "text");
    }
}
