use proptest::{prop_assert, prop_assert_eq, proptest};
use strum::IntoEnumIterator;

use super::{hash, KeywordKind, KeywordTable, BUCKET_COUNT};

#[test]
fn hash_multiplies_by_33() {
    assert_eq!(hash(""), 5381);
    assert_eq!(hash("a"), 5381 * 33 + u64::from(b'a'));
    assert_eq!(hash("ab"), (5381 * 33 + u64::from(b'a')) * 33 + u64::from(b'b'));
}

#[test]
fn hash_wraps_on_long_words() {
    // must not overflow-panic in debug builds
    let word = "x".repeat(1024);
    assert_eq!(hash(&word), hash(&word));
}

#[test]
fn table_contains_every_keyword() {
    let table = KeywordTable::new();

    assert_eq!(table.len(), KeywordKind::iter().count());

    for keyword in KeywordKind::iter() {
        assert!(table.contains(keyword.as_str()), "missing {keyword}");
        assert_eq!(table.get(keyword.as_str()), Some(keyword));
    }
}

#[test]
fn table_rejects_non_keywords() {
    let table = KeywordTable::new();

    for word in ["", "main", "Int", "INT", "integer", "in", "_bool", "printf", "whilst"] {
        assert!(!table.contains(word), "{word:?} is not reserved");
    }
}

#[test]
fn duplicate_insertion_is_ignored() {
    let table: KeywordTable = KeywordKind::iter().chain(KeywordKind::iter()).collect();

    assert_eq!(table, KeywordTable::new());
    assert_eq!(table.len(), KeywordKind::iter().count());
}

#[test]
fn chained_buckets_are_searched() {
    let table = KeywordTable::new();

    // with more keywords than it takes to fill a few buckets, collisions are expected in a
    // fixed-size table; every chained word must still be found
    assert!(table.longest_chain() >= 1);
    assert!(table.longest_chain() < BUCKET_COUNT);

    let mut found: Vec<_> = table.iter().collect();
    found.sort();

    let mut expected: Vec<_> = KeywordKind::iter().collect();
    expected.sort();

    assert_eq!(found, expected);
}

#[test]
fn partial_table() {
    let table: KeywordTable = [KeywordKind::Int, KeywordKind::Return].into_iter().collect();

    assert_eq!(table.len(), 2);
    assert!(table.contains("int"));
    assert!(table.contains("return"));
    assert!(!table.contains("char"));

    let empty: KeywordTable = std::iter::empty().collect();
    assert!(empty.is_empty());
    assert!(!empty.contains("int"));
}

#[test]
fn shared_table_is_built_once() {
    assert!(std::ptr::eq(KeywordTable::shared(), KeywordTable::shared()));
    assert_eq!(KeywordTable::shared(), &KeywordTable::new());
}

#[test]
fn keyword_from_str() {
    assert_eq!("sizeof".parse::<KeywordKind>(), Ok(KeywordKind::Sizeof));
    assert_eq!("_Bool".parse::<KeywordKind>(), Ok(KeywordKind::UnderscoreBool));
    assert!("Sizeof".parse::<KeywordKind>().is_err());
}

proptest! {
    #[test]
    fn arbitrary_words_match_the_keyword_list(word in "[A-Za-z_]{0,12}") {
        let expected = KeywordKind::iter().find(|keyword| keyword.as_str() == word);

        prop_assert_eq!(KeywordTable::shared().get(&word), expected);
        prop_assert!(KeywordTable::shared().contains(&word) == expected.is_some());
    }
}
