//! Contains the [`KeywordTable`], the set of reserved words identifier-shaped text is checked
//! against.

use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// The number of buckets of every [`KeywordTable`].
pub const BUCKET_COUNT: usize = 100;

/// Is an enumeration of the reserved words of the language: keywords and built-in type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Auto,
    Break,
    Case,
    Char,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extern,
    Float,
    For,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Register,
    Restrict,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    Struct,
    Switch,
    Typedef,
    Union,
    Unsigned,
    Void,
    Volatile,
    While,
    Bool,
    UnderscoreBool,
    Complex,
    Imaginary,
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Break => "break",
            Self::Case => "case",
            Self::Char => "char",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Do => "do",
            Self::Double => "double",
            Self::Else => "else",
            Self::Enum => "enum",
            Self::Extern => "extern",
            Self::Float => "float",
            Self::For => "for",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Inline => "inline",
            Self::Int => "int",
            Self::Long => "long",
            Self::Register => "register",
            Self::Restrict => "restrict",
            Self::Return => "return",
            Self::Short => "short",
            Self::Signed => "signed",
            Self::Sizeof => "sizeof",
            Self::Static => "static",
            Self::Struct => "struct",
            Self::Switch => "switch",
            Self::Typedef => "typedef",
            Self::Union => "union",
            Self::Unsigned => "unsigned",
            Self::Void => "void",
            Self::Volatile => "volatile",
            Self::While => "while",
            Self::Bool => "bool",
            Self::UnderscoreBool => "_Bool",
            Self::Complex => "_Complex",
            Self::Imaginary => "_Imaginary",
        }
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeywordTable::shared().get(s).ok_or(KeywordParseError)
    }
}

/// Hashes the bytes of the word: starting from 5381, every byte computes `hash * 33 + byte`.
#[must_use]
pub fn hash(word: &str) -> u64 {
    word.bytes().fold(5381, |hash: u64, byte| {
        hash.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}

#[allow(clippy::cast_possible_truncation)]
fn bucket_index(hash: u64) -> usize { (hash % BUCKET_COUNT as u64) as usize }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    hash: u64,
    keyword: KeywordKind,
}

/// Is a fixed-bucket hash set of reserved words.
///
/// Words are spread over [`BUCKET_COUNT`] buckets by [`hash`]; words landing in the same bucket
/// are chained. The table can't be modified once built, so a single table can be shared by
/// every scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

lazy_static! {
    static ref SHARED: KeywordTable = KeywordTable::new();
}

impl KeywordTable {
    /// Builds the table holding every [`KeywordKind`].
    #[must_use]
    pub fn new() -> Self { KeywordKind::iter().collect() }

    /// Gets the process-wide table holding every [`KeywordKind`].
    ///
    /// The table is built on first use, exactly once even when first used from several threads.
    #[must_use]
    pub fn shared() -> &'static Self { &SHARED }

    /// Adds the keyword to its bucket's chain.
    ///
    /// Returns `false` if the keyword was already present, in which case nothing changes.
    fn insert(&mut self, keyword: KeywordKind) -> bool {
        let hash = hash(keyword.as_str());
        let chain = &mut self.buckets[bucket_index(hash)];

        if chain.iter().any(|entry| entry.keyword == keyword) {
            return false;
        }

        chain.push(Entry { hash, keyword });
        self.len += 1;

        true
    }

    /// Gets the [`KeywordKind`] spelled exactly as `word`, if any.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<KeywordKind> {
        let hash = hash(word);

        self.buckets[bucket_index(hash)]
            .iter()
            .find(|entry| entry.hash == hash && entry.keyword.as_str() == word)
            .map(|entry| entry.keyword)
    }

    /// Checks whether `word` is a reserved word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool { self.get(word).is_some() }

    /// Gets the number of reserved words in the table.
    #[must_use]
    pub fn len(&self) -> usize { self.len }

    /// Checks whether the table holds no word at all.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Gets the length of the longest bucket chain.
    #[must_use]
    pub fn longest_chain(&self) -> usize { self.buckets.iter().map(Vec::len).max().unwrap_or(0) }

    /// Iterates over the reserved words, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = KeywordKind> + '_ {
        self.buckets.iter().flatten().map(|entry| entry.keyword)
    }
}

impl Default for KeywordTable {
    fn default() -> Self { Self::new() }
}

impl FromIterator<KeywordKind> for KeywordTable {
    fn from_iter<T: IntoIterator<Item = KeywordKind>>(iter: T) -> Self {
        let mut table = Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
            len: 0,
        };

        for keyword in iter {
            table.insert(keyword);
        }

        table
    }
}

#[cfg(test)]
mod tests;
