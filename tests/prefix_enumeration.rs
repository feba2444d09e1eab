use retrieval_rs::Trie;

const WORDS: &[&str] = &[
    "apple", "apply", "ape", "bed", "between", "betray", "cat", "cold", "hot", "warm", "winter",
    "maze", "smash", "crush", "under", "above", "people", "negative", "poison", "place", "out",
    "divide", "zebra", "extended",
];

fn strings(keys: Vec<Vec<u8>>) -> Vec<String> {
    keys.into_iter()
        .map(|key| String::from_utf8(key).expect("test keys are utf-8"))
        .collect()
}

#[test]
fn prefix_returns_full_keys_in_order() {
    let trie = Trie::with_keys(WORDS);
    assert_eq!(strings(trie.prefix("app")), ["apple", "apply"]);
    assert_eq!(strings(trie.prefix("n")), ["negative"]);
}

#[test]
fn prefix_without_matching_node_is_empty() {
    let trie = Trie::with_keys(WORDS);
    assert!(trie.prefix("x").is_empty());
    assert!(trie.prefix("applying").is_empty());
}

#[test]
fn stored_prefix_leads_its_own_result() {
    let trie = Trie::with_keys(["ape", "apex", "aperture"]);
    assert_eq!(strings(trie.prefix("ape")), ["ape", "aperture", "apex"]);
}

#[test]
fn empty_prefix_enumerates_everything_sorted() {
    let trie = Trie::with_keys(WORDS);
    let mut expected: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();
    expected.sort();
    assert_eq!(strings(trie.prefix("")), expected);
    assert_eq!(trie.keys(), trie.prefix(""));
}

#[test]
fn every_result_starts_with_the_prefix() {
    let trie = Trie::with_keys(WORDS);
    for key in trie.prefix("be") {
        assert!(key.starts_with(b"be"));
    }
    assert_eq!(strings(trie.prefix("be")), ["bed", "betray", "between"]);
}

#[test]
fn empty_key_appears_under_empty_prefix() {
    let mut trie = Trie::with_keys(["a"]);
    trie.insert("");
    assert_eq!(strings(trie.prefix("")), ["", "a"]);
}

#[test]
fn byte_order_is_unsigned() {
    // 0x80..0xff must sort after ASCII.
    let trie = Trie::with_keys([&[0xff_u8][..], &[0x00], &[0x7f], &[0x80]]);
    assert_eq!(
        trie.prefix(b""),
        [vec![0x00_u8], vec![0x7f], vec![0x80], vec![0xff]]
    );
}
