//! Contains the [`TokenStream`] struct.

use std::{ops::Index, sync::Arc};

use clex_base::{diagnostic::Handler, source_file::SourceFile};
use derive_more::Deref;

use crate::{
    error,
    keyword::KeywordTable,
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// Is the list of [`Token`]s of a source file, in source order.
///
/// The stream only grows while its [`Scanner`] appends to it; everyone else gets a read-only
/// view. When complete, its last token is the [`TokenKind::Eof`] token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// This function drives a [`Scanner`] over the whole source file, reporting every lexical
    /// error to the `handler`, and returns the tokens it produced.
    #[must_use]
    pub fn tokenize(
        source_file: &Arc<SourceFile>,
        keywords: &KeywordTable,
        handler: &dyn Handler<error::Error>,
    ) -> Self {
        let mut scanner = Scanner::new(source_file.clone(), keywords);
        scanner.tokenize(handler);

        scanner.into_token_stream()
    }

    /// Appends the token and returns a reference to it.
    pub(crate) fn push(&mut self, token: Token) -> &Token {
        self.tokens.push(token);
        &self.tokens[self.tokens.len() - 1]
    }

    /// Iterates over the kinds of the tokens.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ { self.tokens.iter().map(Token::kind) }

}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter { self.tokens.iter() }
}

#[cfg(test)]
pub(crate) mod tests;
