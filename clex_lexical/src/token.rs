//! Is a module containing the [`Token`] type and all of its related types.

use clex_base::source_file::{Location, SourceElement, Span};
use derive_new::new;
use getset::CopyGetters;
use strum_macros::{EnumIter, IntoStaticStr};

/// Is an enumeration containing all kinds of tokens the scanner emits.
///
/// Every single-character symbol has a kind of its own; symbols are never fused into
/// multi-character operators.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    IntoStaticStr,
    strum_macros::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    Identifier,
    Keyword,
    NumberLiteral,
    StringLiteral,
    CharLiteral,
    Invalid,
    Eof,
    Comma,
    Dot,
    Semicolon,
    Colon,
    LeftCurlyBrace,
    RightCurlyBrace,
    LeftParenthesis,
    RightParenthesis,
    LeftSquareBracket,
    RightSquareBracket,
    Plus,
    Minus,
    Equal,
    Asterisk,
    ForwardSlash,
    Pipe,
    Ampersand,
    Exclamation,
    Hashtag,
    LeftAngleBracket,
    RightAngleBracket,
    QuestionMark,
    DoubleQuote,
    SingleQuote,
    Modulo,
    Xor,
}

impl TokenKind {
    /// Gets the kind of the single-character symbol, if `character` is one.
    #[must_use]
    pub fn from_punctuation(character: char) -> Option<Self> {
        Some(match character {
            ',' => Self::Comma,
            '.' => Self::Dot,
            ';' => Self::Semicolon,
            ':' => Self::Colon,
            '{' => Self::LeftCurlyBrace,
            '}' => Self::RightCurlyBrace,
            '(' => Self::LeftParenthesis,
            ')' => Self::RightParenthesis,
            '[' => Self::LeftSquareBracket,
            ']' => Self::RightSquareBracket,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '=' => Self::Equal,
            '*' => Self::Asterisk,
            '/' => Self::ForwardSlash,
            '|' => Self::Pipe,
            '&' => Self::Ampersand,
            '!' => Self::Exclamation,
            '#' => Self::Hashtag,
            '<' => Self::LeftAngleBracket,
            '>' => Self::RightAngleBracket,
            '?' => Self::QuestionMark,
            '"' => Self::DoubleQuote,
            '\'' => Self::SingleQuote,
            '%' => Self::Modulo,
            '^' => Self::Xor,
            _ => return None,
        })
    }

    /// Gets the character of a single-character symbol kind.
    #[must_use]
    pub fn punctuation(self) -> Option<char> {
        Some(match self {
            Self::Comma => ',',
            Self::Dot => '.',
            Self::Semicolon => ';',
            Self::Colon => ':',
            Self::LeftCurlyBrace => '{',
            Self::RightCurlyBrace => '}',
            Self::LeftParenthesis => '(',
            Self::RightParenthesis => ')',
            Self::LeftSquareBracket => '[',
            Self::RightSquareBracket => ']',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Equal => '=',
            Self::Asterisk => '*',
            Self::ForwardSlash => '/',
            Self::Pipe => '|',
            Self::Ampersand => '&',
            Self::Exclamation => '!',
            Self::Hashtag => '#',
            Self::LeftAngleBracket => '<',
            Self::RightAngleBracket => '>',
            Self::QuestionMark => '?',
            Self::DoubleQuote => '"',
            Self::SingleQuote => '\'',
            Self::Modulo => '%',
            Self::Xor => '^',
            Self::Identifier
            | Self::Keyword
            | Self::NumberLiteral
            | Self::StringLiteral
            | Self::CharLiteral
            | Self::Invalid
            | Self::Eof => return None,
        })
    }

    /// Checks whether the kind stands for a single-character symbol.
    #[must_use]
    pub fn is_punctuation(self) -> bool { self.punctuation().is_some() }

    /// Gets the name of the kind, e.g. `NUMBER_LITERAL`.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

/// Represents a classified piece of the source code.
///
/// Tokens are immutable; they're only created by the [`crate::scanner::Scanner`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters, new)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    text: String,

    /// Gets the location of the first character of the token.
    #[get_copy = "pub"]
    location: Location,

    span: Span,
}

impl Token {
    /// Gets the captured text of the token.
    ///
    /// Empty for the symbol kinds, whose kind already tells the character, and for
    /// [`TokenKind::Eof`]. String and char literals hold their body without the quotes.
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Gets the line the token starts on (starts at 1).
    #[must_use]
    pub fn line(&self) -> usize { self.location.line }

    /// Gets the column of the first character of the token (starts at 1).
    #[must_use]
    pub fn column(&self) -> usize { self.location.column }

    /// Gets the exact slice of source code the token covers.
    #[must_use]
    pub fn lexeme(&self) -> &str { self.span.str() }
}

/// The span covers the whole lexeme, quotes excluded for literal bodies.
impl SourceElement for Token {
    fn span(&self) -> Span { self.span.clone() }
}
