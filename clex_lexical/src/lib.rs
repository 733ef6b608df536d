//! This crate implements the lexical analysis of C-like source code. The [`scanner::Scanner`]
//! classifies the source text into [`token::Token`]s, checking identifier-shaped words against a
//! [`keyword::KeywordTable`].
//!
//! The final output of this phase is a [`token_stream::TokenStream`], representing the list of
//! tokens of a source file in source order.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod keyword;
pub mod scanner;
pub mod token;
pub mod token_stream;
