use retrieval_rs::Trie;

const WORDS: &[&str] = &[
    "apple", "apply", "ape", "bed", "between", "betray", "cat", "cold", "hot", "warm", "winter",
    "maze", "smash", "crush", "under", "above", "people", "negative", "poison", "place", "out",
    "divide", "zebra", "extended",
];

#[test]
fn contains_inserted_keys() {
    let trie = Trie::with_keys(WORDS);
    assert!(trie.contains("apple"));
    assert!(trie.contains("zebra"));
    assert!(!trie.contains("abcde"));
}

#[test]
fn prefix_paths_are_not_members() {
    let trie = Trie::with_keys(WORDS);
    assert!(!trie.contains("app"));
    assert!(!trie.contains("extend"));
    assert!(trie.contains("extended"));
}

#[test]
fn insert_reports_novelty() {
    let mut trie = Trie::new();
    assert!(trie.insert("apple"));
    assert!(!trie.insert("apple"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn insert_is_idempotent() {
    let mut a = Trie::with_keys(WORDS);
    let before = a.keys();
    a.insert("apple");
    a.insert_all(WORDS);
    assert_eq!(a.keys(), before);
    assert_eq!(a.len(), WORDS.len());
}

#[test]
fn insert_all_counts_new_keys() {
    let mut trie = Trie::with_keys(["apple", "ape"]);
    let added = trie.insert_all(["apple", "apply", "ape", "bed"]);
    assert_eq!(added, 2);
    assert_eq!(trie.len(), 4);
}

#[test]
fn empty_key_is_a_key() {
    let mut trie = Trie::new();
    assert!(!trie.contains(""));
    assert!(trie.insert(""));
    assert!(trie.contains(""));
    assert_eq!(trie.len(), 1);
    assert!(!trie.insert(""));
}

#[test]
fn empty_trie_contains_nothing() {
    let trie = Trie::new();
    assert!(trie.is_empty());
    assert!(!trie.contains("a"));
    assert!(!trie.contains(""));
}

#[test]
fn keys_are_raw_bytes() {
    let mut trie = Trie::new();
    trie.insert([0x00u8, 0xff, 0x80]);
    trie.insert([0x00u8, 0xff]);
    assert!(trie.contains([0x00u8, 0xff, 0x80]));
    assert!(trie.contains([0x00u8, 0xff]));
    assert!(!trie.contains([0x00u8]));
}

#[test]
fn collects_from_iterator() {
    let trie: Trie = WORDS.iter().collect();
    assert_eq!(trie.len(), WORDS.len());
    assert!(trie.contains("winter"));
}

#[test]
fn extend_adds_keys() {
    let mut trie = Trie::with_keys(["apple"]);
    trie.extend(["bed", "cat"]);
    assert_eq!(trie.len(), 3);
    assert!(trie.contains("cat"));
}

#[test]
fn clones_do_not_share_mutations() {
    let original = Trie::with_keys(["apple"]);
    let mut copy = original.clone();
    copy.insert("apply");
    assert!(copy.contains("apply"));
    assert!(!original.contains("apply"));
    assert_eq!(original.len(), 1);
}
