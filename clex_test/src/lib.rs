//! Shared helpers for the property based tests of the workspace.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links
)]
#![allow(clippy::missing_errors_doc, clippy::missing_const_for_fn)]

pub mod input;
pub mod reader;
