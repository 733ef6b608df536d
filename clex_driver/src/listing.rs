//! Renders a token stream as a table of `KIND 'text' line:column` cells.

use std::fmt::Display;

use clex_base::log::formatting::Color;
use clex_lexical::token::{Token, TokenKind};
use derive_new::new;

/// The separator written between two cells of a row.
const GUTTER: &str = "  ";

/// Is a [`Display`] table of tokens, wrapped `columns` cells per row.
///
/// The [`TokenKind::Eof`] token is never listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Listing<'a> {
    /// The tokens to list.
    pub tokens: &'a [Token],

    /// The number of cells per row; zero is treated as one.
    pub columns: usize,

    /// Whether the kind and the text are painted with ANSI colors.
    pub colored: bool,
}

/// One `KIND 'text' line:column` entry of the listing.
///
/// The text is escaped, so a literal body never spans several lines or shifts the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
struct Cell<'a> {
    token: &'a Token,
    colored: bool,
}

impl Cell<'_> {
    fn plain_width(self) -> usize {
        Cell::new(self.token, false)
            .to_string()
            .chars()
            .count()
    }
}

impl Display for Cell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' {}",
            Color::Cyan.with(self.token.kind().name()).enabled(self.colored),
            Color::Blue
                .with(self.token.text().escape_debug())
                .enabled(self.colored),
            self.token.location()
        )
    }
}

impl Display for Listing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .tokens
            .iter()
            .filter(|token| token.kind() != TokenKind::Eof)
            .map(|token| Cell::new(token, self.colored))
            .collect::<Vec<_>>();
        let width = cells.iter().map(|cell| cell.plain_width()).max().unwrap_or(0);

        for row in cells.chunks(self.columns.max(1)) {
            for (index, cell) in row.iter().enumerate() {
                write!(f, "{cell}")?;

                if index + 1 < row.len() {
                    let padding = width - cell.plain_width();
                    write!(f, "{:padding$}{GUTTER}", "")?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
