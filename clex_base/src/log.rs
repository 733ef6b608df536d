//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        }
        .style(Style::Bold);

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the line of source code a span starts on, with
/// the span itself underlined.
///
/// Spans covering several lines are underlined up to the end of their first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = self.span.start_location();
        let source_file = self.span.source_file();
        let gutter_width = get_digit(location.line);
        let pipe = Style::Bold.with(Color::Cyan.with("┃"));

        writeln!(
            f,
            "{:gutter_width$} {} {}:{location}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
        )?;
        writeln!(f, "{:gutter_width$} {pipe}", "")?;

        let line = source_file.get_line(location.line).unwrap_or_default();
        let line_start = self.span.start()
            - line
                .chars()
                .take(location.column - 1)
                .map(char::len_utf8)
                .sum::<usize>();

        write!(
            f,
            "{} {pipe} ",
            Style::Bold.with(Color::Cyan.with(location.line))
        )?;

        for (index, character) in line.char_indices() {
            let byte = line_start + index;
            let in_span = byte >= self.span.start()
                && (byte < self.span.end() || byte == self.span.start());

            match character {
                '\n' | '\r' => {}
                '\t' => f.write_str("    ")?,
                character if in_span => write!(
                    f,
                    "{}",
                    Color::Red
                        .with(character)
                        .style(Style::Bold)
                        .style(Style::Underline)
                )?,
                character => write!(f, "{character}")?,
            }
        }
        writeln!(f)?;

        if let Some(help) = &self.help_display {
            let indent: String = line
                .chars()
                .take(location.column - 1)
                .map(|character| if character == '\t' { "    " } else { " " })
                .collect();

            writeln!(
                f,
                "{:gutter_width$} {pipe} {indent}{}: {help}",
                "",
                Style::Bold.with("help")
            )?;
        }

        writeln!(f, "{:gutter_width$} {pipe}", "")
    }
}

#[cfg(test)]
mod tests {
    use super::{
        formatting::{Color, Style},
        Message, Severity, SourceCodeDisplay,
    };
    use crate::source_file::{SourceFile, Span};

    #[test]
    fn message_has_severity_header() {
        let message = Message::new(Severity::Warning, "careful").to_string();

        assert!(message.contains("[warning]:"));
        assert!(message.contains("careful"));
    }

    #[test]
    fn source_code_display_points_at_span() {
        let source_file = SourceFile::temp("int a;\nchar 'ab';\n").unwrap();
        let span = Span::new(source_file.clone(), 12, 13).unwrap();

        let display = SourceCodeDisplay::new(&span, Some("here")).to_string();

        assert!(display.contains(&format!("{}:2:6", source_file.full_path().display())));
        assert!(display.contains("char "));
        assert!(display.contains(
            &Color::Red
                .with('\'')
                .style(Style::Bold)
                .style(Style::Underline)
                .to_string()
        ));
        assert!(display.contains("help"));
        assert!(display.contains(": here"));
        assert!(!display.contains("int a;"));
    }
}
