use std::{fmt::Display, path::PathBuf};

use clex_base::{
    diagnostic::Storage,
    source_file::{Location, SourceFile},
};
use clex_test::{
    input::Input,
    reader::{ChunkSize, Chunked},
};
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::TestCaseResult,
};

use crate::{
    error::Error,
    keyword::KeywordTable,
    token::{
        self,
        tests::{Expected, Layout},
        TokenKind,
    },
};

/// Represents an input for the [`super::TokenStream`]: tokens, each followed by some layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenStream {
    /// The tokens paired with the layout written after them.
    pub parts: Vec<(token::tests::Token, Layout)>,
}

impl Arbitrary for TokenStream {
    type Parameters = bool;
    type Strategy = BoxedStrategy<Self>;

    /// Generates literal-free streams when `literal_free` is set.
    fn arbitrary_with(literal_free: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(
            (
                token::tests::Token::arbitrary_with(literal_free),
                Layout::arbitrary(),
            ),
            0..=24,
        )
        .prop_map(|parts| Self { parts })
        .boxed()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (token, layout) in &self.parts {
            Display::fmt(token, f)?;
            Display::fmt(layout, f)?;
        }

        Ok(())
    }
}

impl Input<&super::TokenStream> for &TokenStream {
    fn assert(self, output: &super::TokenStream) -> TestCaseResult {
        let mut location = Location::default();
        let mut expected = Vec::new();

        for (token, layout) in &self.parts {
            expected.extend(token.expected(location));

            location.column += token.width();
            location = layout.advance(location);
        }

        expected.push(Expected {
            kind: TokenKind::Eof,
            text: String::new(),
            location,
        });

        expected.as_slice().assert(output.as_slice())
    }
}

fn tokenize(source_file: &std::sync::Arc<SourceFile>) -> (super::TokenStream, Vec<Error>) {
    let storage: Storage<Error> = Storage::new();
    let token_stream = super::TokenStream::tokenize(source_file, KeywordTable::shared(), &storage);

    (token_stream, storage.into_vec())
}

proptest! {
    #[test]
    fn token_stream_test(
        input in TokenStream::arbitrary()
    ) {
        let source_file = SourceFile::temp(&input)?;
        let (token_stream, errors) = tokenize(&source_file);

        prop_assert!(errors.is_empty());
        input.assert(&token_stream)?;
    }

    #[test]
    fn chunked_reading_gives_the_same_tokens(
        input in TokenStream::arbitrary(),
        chunk_size in ChunkSize::arbitrary()
    ) {
        let source = input.to_string();

        let whole = SourceFile::temp(&source)?;
        let chunked = SourceFile::read(Chunked::new(source, chunk_size.0), PathBuf::new())?;

        let (whole_tokens, _) = tokenize(&whole);
        let (chunked_tokens, _) = tokenize(&chunked);

        prop_assert!(whole_tokens.kinds().eq(chunked_tokens.kinds()));
        prop_assert!(whole_tokens
            .iter()
            .zip(chunked_tokens.iter())
            .all(|(lhs, rhs)| lhs.text() == rhs.text() && lhs.location() == rhs.location()));
    }

    #[test]
    fn lexemes_round_trip(
        input in TokenStream::arbitrary_with(true)
    ) {
        let source_file = SourceFile::temp(&input)?;
        let (token_stream, _) = tokenize(&source_file);

        let joined = token_stream
            .iter()
            .filter(|token| token.kind() != TokenKind::Eof)
            .map(|token| token.lexeme())
            .collect::<Vec<_>>()
            .join(" ");

        let expected = input
            .parts
            .iter()
            .map(|(token, _)| token.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        prop_assert_eq!(joined, expected);
    }
}

#[test]
fn tokenize_collects_every_error() {
    let source_file = SourceFile::temp("'ab' x \"open").unwrap();
    let (token_stream, errors) = tokenize(&source_file);

    assert_eq!(errors.len(), 3);
    assert!(errors[0].as_multi_character_literal().is_some());
    assert_eq!(errors[0].location(), Location { line: 1, column: 1 });
    // the closing `'` of the malformed literal starts a new, unterminated one
    assert!(errors[1].as_unterminated_char_literal().is_some());
    assert_eq!(errors[1].location(), Location { line: 1, column: 4 });
    assert!(errors[2].as_unterminated_string_literal().is_some());
    assert_eq!(errors[2].location(), Location { line: 1, column: 8 });

    assert_eq!(token_stream.last().map(|token| token.kind()), Some(TokenKind::Eof));
}

#[test]
fn empty_source_is_a_single_eof() {
    let source_file = SourceFile::temp("").unwrap();
    let (token_stream, errors) = tokenize(&source_file);

    assert!(errors.is_empty());
    assert_eq!(token_stream.len(), 1);
    assert_eq!(token_stream[0].kind(), TokenKind::Eof);
    assert_eq!(token_stream[0].location(), Location { line: 1, column: 1 });
}
