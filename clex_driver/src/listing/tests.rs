use clex_base::{diagnostic::Storage, source_file::SourceFile};
use clex_lexical::{error::Error, keyword::KeywordTable, token_stream::TokenStream};

use super::Listing;

fn tokenize(source: &str) -> TokenStream {
    let source_file = SourceFile::temp(source).unwrap();
    let storage: Storage<Error> = Storage::new();

    TokenStream::tokenize(&source_file, KeywordTable::shared(), &storage)
}

#[test]
fn one_cell_per_row() {
    let tokens = tokenize("int a;");
    let listing = Listing::new(&tokens, 1, false).to_string();

    assert_eq!(
        listing,
        "KEYWORD 'int' 1:1\nIDENTIFIER 'a' 1:5\nSEMICOLON '' 1:6\n"
    );
}

#[test]
fn cells_are_padded_to_the_widest() {
    let tokens = tokenize("int a;");
    let listing = Listing::new(&tokens, 2, false).to_string();

    assert_eq!(
        listing,
        "KEYWORD 'int' 1:1   IDENTIFIER 'a' 1:5\nSEMICOLON '' 1:6\n"
    );
}

#[test]
fn zero_columns_lists_one_per_row() {
    let tokens = tokenize("a b");

    assert_eq!(
        Listing::new(&tokens, 0, false).to_string(),
        Listing::new(&tokens, 1, false).to_string()
    );
}

#[test]
fn eof_is_not_listed() {
    let tokens = tokenize("");

    assert_eq!(Listing::new(&tokens, 4, true).to_string(), "");
}

#[test]
fn colored_listing_paints_kind_and_text() {
    let tokens = tokenize("x");
    let listing = Listing::new(&tokens, 1, true).to_string();

    assert_eq!(
        listing,
        "\x1B[36mIDENTIFIER\x1B[0m '\x1B[34mx\x1B[0m' 1:1\n"
    );
}

#[test]
fn literal_bodies_are_escaped() {
    let tokens = tokenize("\"a\nb\tc\" x");
    let listing = Listing::new(&tokens, 1, false).to_string();

    assert_eq!(
        listing,
        "DOUBLE_QUOTE '' 1:1\nSTRING_LITERAL 'a\\nb\\tc' 1:2\nDOUBLE_QUOTE '' 2:4\nIDENTIFIER 'x' 2:6\n"
    );
}
