//! Contains all kinds of lexical errors that can occur while scanning the source code.

use std::fmt::Display;

use clex_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{Location, SourceElement, Span},
};
use derive_more::From;
use enum_as_inner::EnumAsInner;

use crate::scanner::MAX_TOKEN_LEN;

/// The source code ends before a string literal's closing `"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedStringLiteral {
    /// The span of the opening `"`.
    pub span: Span,

    /// The location of the opening `"`.
    pub location: Location,
}

impl Display for UnterminatedStringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(&self.span, Some("this `\"` is never closed"))
        )
    }
}

/// The source code ends before a char literal's closing `'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedCharLiteral {
    /// The span of the opening `'`.
    pub span: Span,

    /// The location of the opening `'`.
    pub location: Location,
}

impl Display for UnterminatedCharLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated char literal"),
            SourceCodeDisplay::new(&self.span, Some("this `'` is never closed"))
        )
    }
}

/// A char literal holds more than one character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MultiCharacterLiteral {
    /// The span of the literal's body.
    pub span: Span,

    /// The location of the opening `'`.
    pub location: Location,

    /// The number of characters in the body, an escape sequence counting as one.
    pub characters: usize,
}

impl Display for MultiCharacterLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!(
                    "char literal holds {} characters, expected at most one",
                    self.characters
                )
            ),
            SourceCodeDisplay::new(&self.span, Some("use a string literal instead"))
        )
    }
}

/// An identifier, number, string or char literal is longer than [`MAX_TOKEN_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenTooLong {
    /// The span of the whole token.
    pub span: Span,

    /// The location of the token's first character (the opening quote for literals).
    pub location: Location,

    /// The length of the capture in bytes.
    pub length: usize,
}

impl Display for TokenTooLong {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!(
                    "token is {} bytes long, the limit is {MAX_TOKEN_LEN}",
                    self.length
                )
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{0}")]
    UnterminatedStringLiteral(UnterminatedStringLiteral),

    #[error("{0}")]
    UnterminatedCharLiteral(UnterminatedCharLiteral),

    #[error("{0}")]
    MultiCharacterLiteral(MultiCharacterLiteral),

    #[error("{0}")]
    TokenTooLong(TokenTooLong),
}

impl Error {
    /// Gets the location the error is reported at.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::UnterminatedStringLiteral(error) => error.location,
            Self::UnterminatedCharLiteral(error) => error.location,
            Self::MultiCharacterLiteral(error) => error.location,
            Self::TokenTooLong(error) => error.location,
        }
    }
}

impl SourceElement for Error {
    fn span(&self) -> Span {
        match self {
            Self::UnterminatedStringLiteral(error) => error.span.clone(),
            Self::UnterminatedCharLiteral(error) => error.span.clone(),
            Self::MultiCharacterLiteral(error) => error.span.clone(),
            Self::TokenTooLong(error) => error.span.clone(),
        }
    }
}
