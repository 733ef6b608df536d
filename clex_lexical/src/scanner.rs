//! Contains the [`Scanner`], the state machine turning source code into [`Token`]s.

use std::{collections::VecDeque, sync::Arc};

use clex_base::{
    diagnostic::Handler,
    source_file::{ByteIndex, Location, SourceFile, Span},
};
use getset::Getters;

use crate::{
    error::{
        self, MultiCharacterLiteral, TokenTooLong, UnterminatedCharLiteral,
        UnterminatedStringLiteral,
    },
    keyword::KeywordTable,
    token::{Token, TokenKind},
    token_stream::TokenStream,
};

/// The maximum length in bytes of an identifier, a number or the body of a literal.
pub const MAX_TOKEN_LEN: usize = 256;

/// The scan position: where the next character is read from and where it sits in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    position: ByteIndex,
    line: usize,
    column: usize,
}

impl Cursor {
    fn location(self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Double,
    Single,
}

impl Quote {
    fn character(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }

    fn kind(self) -> TokenKind {
        match self {
            Self::Double => TokenKind::DoubleQuote,
            Self::Single => TokenKind::SingleQuote,
        }
    }

    fn literal_kind(self) -> TokenKind {
        match self {
            Self::Double => TokenKind::StringLiteral,
            Self::Single => TokenKind::CharLiteral,
        }
    }

    fn unterminated(self, span: Span, location: Location) -> error::Error {
        match self {
            Self::Double => UnterminatedStringLiteral { span, location }.into(),
            Self::Single => UnterminatedCharLiteral { span, location }.into(),
        }
    }
}

/// Checks if the given character is skipped between tokens.
fn is_layout_character(character: char) -> bool { matches!(character, ' ' | '\t' | '\r' | '\n') }

/// Checks if the given character is a valid first character of an identifier.
fn is_first_identifier_character(character: char) -> bool {
    character == '_' || character.is_ascii_alphabetic()
}

/// Checks if the given character is a valid character of an identifier.
fn is_identifier_character(character: char) -> bool {
    character == '_' || character.is_ascii_alphanumeric()
}

/// Scans a single source file into tokens.
///
/// The scanner owns the [`TokenStream`] it builds; consumers only ever get read access to it.
/// Identifier-shaped words are classified with the borrowed [`KeywordTable`].
#[derive(Debug, Getters)]
pub struct Scanner<'k> {
    source_file: Arc<SourceFile>,

    keywords: &'k KeywordTable,
    cursor: Cursor,

    /// Tokens already produced by a literal sub-scan but not yet handed out.
    pending: VecDeque<Token>,

    /// Gets the tokens appended so far by [`Self::advance`] and [`Self::tokenize`].
    #[get = "pub"]
    token_stream: TokenStream,
}

impl<'k> Scanner<'k> {
    /// Creates a scanner positioned at the start of the source file.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, keywords: &'k KeywordTable) -> Self {
        Self {
            source_file,
            keywords,
            cursor: Cursor {
                position: 0,
                line: 1,
                column: 1,
            },
            pending: VecDeque::new(),
            token_stream: TokenStream::default(),
        }
    }

    /// Gets the byte offset of the next character to be scanned.
    #[must_use]
    pub fn position(&self) -> ByteIndex { self.cursor.position }

    /// Gets the line and column of the next character to be scanned.
    #[must_use]
    pub fn location(&self) -> Location { self.cursor.location() }

    /// Checks whether the terminal [`TokenKind::Eof`] token has been appended to the stream.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.token_stream
            .last()
            .is_some_and(|token| token.kind() == TokenKind::Eof)
    }

    /// Gives up the scanner and keeps its token stream.
    #[must_use]
    pub fn into_token_stream(self) -> TokenStream { self.token_stream }

    fn peek(&self) -> Option<char> {
        self.source_file.content()[self.cursor.position..]
            .chars()
            .next()
    }

    /// Consumes one character, keeping the line and column in step.
    fn bump(&mut self) -> Option<char> {
        let character = self.peek()?;

        self.cursor.position += character.len_utf8();

        if character == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 1;
        } else {
            self.cursor.column += 1;
        }

        Some(character)
    }

    /// Consumes characters until the predicate returns false.
    fn walk(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
    }

    /// Goes back to `start` and skips its character, so scanning resumes right after it.
    fn rewind(&mut self, start: Cursor) {
        self.cursor = start;
        self.bump();
    }

    /// The cursor only ever moves by whole characters, so both ends are boundaries.
    fn span(&self, start: ByteIndex, end: ByteIndex) -> Span {
        Span::from_boundaries(self.source_file.clone(), start, end)
    }

    fn token(&self, kind: TokenKind, text: String, start: Cursor, end: ByteIndex) -> Token {
        Token::new(kind, text, start.location(), self.span(start.position, end))
    }

    /// Creates a token spanning from `start` to the current position.
    fn create_token(&self, kind: TokenKind, text: String, start: Cursor) -> Token {
        self.token(kind, text, start, self.cursor.position)
    }

    /// Fails with [`TokenTooLong`] if the capture of `length` bytes exceeds [`MAX_TOKEN_LEN`].
    fn check_length(
        &mut self,
        start: Cursor,
        length: usize,
        end: ByteIndex,
    ) -> Result<(), error::Error> {
        if length <= MAX_TOKEN_LEN {
            return Ok(());
        }

        let span = self.span(start.position, end);
        self.rewind(start);

        Err(TokenTooLong {
            span,
            location: start.location(),
            length,
        }
        .into())
    }

    fn handle_identifier_and_keyword(&mut self, start: Cursor) -> Result<Token, error::Error> {
        self.walk(is_identifier_character);

        let end = self.cursor.position;
        self.check_length(start, end - start.position, end)?;

        let word = &self.source_file.content()[start.position..end];
        let kind = if self.keywords.contains(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Ok(self.create_token(kind, word.to_owned(), start))
    }

    fn handle_number_literal(&mut self, start: Cursor) -> Result<Token, error::Error> {
        self.walk(|character| character.is_ascii_digit());

        let end = self.cursor.position;
        self.check_length(start, end - start.position, end)?;

        let digits = self.source_file.content()[start.position..end].to_owned();
        Ok(self.create_token(TokenKind::NumberLiteral, digits, start))
    }

    /// Scans the body of a string or char literal; the opening quote at `start` is consumed.
    ///
    /// Returns the opening quote token and queues the literal and the closing quote tokens.
    fn handle_quoted(&mut self, quote: Quote, start: Cursor) -> Result<Token, error::Error> {
        let body_start = self.cursor;
        let mut characters = 0;

        loop {
            match self.peek() {
                None => {
                    let span = self.span(start.position, body_start.position);
                    self.rewind(start);

                    return Err(quote.unterminated(span, start.location()));
                }
                Some(character) if character == quote.character() => break,
                Some('\\') => {
                    // the escaped character can't close the literal
                    self.bump();
                    self.bump();
                }
                Some(_) => {
                    self.bump();
                }
            }

            characters += 1;
        }

        let body_end = self.cursor;
        let length = body_end.position - body_start.position;

        // the closing quote is part of the reported span
        self.check_length(start, length, body_end.position + 1)?;

        if quote == Quote::Single && characters > 1 {
            let span = self.span(body_start.position, body_end.position);
            self.rewind(start);

            return Err(MultiCharacterLiteral {
                span,
                location: start.location(),
                characters,
            }
            .into());
        }

        let body = self.source_file.content()[body_start.position..body_end.position].to_owned();

        let open = self.token(quote.kind(), String::new(), start, body_start.position);
        let literal = self.token(quote.literal_kind(), body, body_start, body_end.position);

        self.bump();
        let close = self.create_token(quote.kind(), String::new(), body_end);

        self.pending.extend([literal, close]);

        Ok(open)
    }

    /// Produces the next token.
    ///
    /// Layout characters (space, tab, carriage return and line feed) are skipped first. Once the
    /// source is exhausted every call returns the same [`TokenKind::Eof`] token.
    ///
    /// The token is only returned, not appended to the [`TokenStream`]; see [`Self::advance`].
    ///
    /// # Errors
    /// Returns the lexical [`error::Error`] found at the current position. The scanner has then
    /// moved one character past the start of the offending token and can keep going.
    pub fn next_token(&mut self) -> Result<Token, error::Error> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        self.walk(is_layout_character);

        let start = self.cursor;
        let Some(character) = self.bump() else {
            return Ok(self.create_token(TokenKind::Eof, String::new(), start));
        };

        match character {
            '"' => self.handle_quoted(Quote::Double, start),
            '\'' => self.handle_quoted(Quote::Single, start),
            character if is_first_identifier_character(character) => {
                self.handle_identifier_and_keyword(start)
            }
            character if character.is_ascii_digit() => self.handle_number_literal(start),
            character => Ok(TokenKind::from_punctuation(character).map_or_else(
                || self.create_token(TokenKind::Invalid, character.to_string(), start),
                |kind| self.create_token(kind, String::new(), start),
            )),
        }
    }

    /// Produces the next token and appends it to the [`TokenStream`].
    ///
    /// After the [`TokenKind::Eof`] token has been appended, nothing more is appended and the
    /// same token is returned again.
    ///
    /// # Errors
    /// See [`Self::next_token`]; nothing is appended on error.
    pub fn advance(&mut self) -> Result<&Token, error::Error> {
        if self.is_finished() {
            return Ok(&self.token_stream[self.token_stream.len() - 1]);
        }

        let token = self.next_token()?;
        Ok(self.token_stream.push(token))
    }

    /// Scans the rest of the source file, up to and including the [`TokenKind::Eof`] token.
    ///
    /// Every lexical error is handed to the `handler` and scanning carries on, so all errors of
    /// the file are reported in one pass.
    pub fn tokenize(&mut self, handler: &dyn Handler<error::Error>) {
        while !self.is_finished() {
            if let Err(error) = self.advance() {
                handler.receive(error);
            }
        }
    }
}
