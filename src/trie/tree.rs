use super::node::TrieNode;
use super::traversal::collect_keys;
use crate::pattern::matcher::PatternMatcher;
use crate::pattern::{PatternResult, parse};

/// An ordered set of byte strings stored as a trie, one byte per edge.
///
/// Keys are raw bytes; anything that derefs to `[u8]` can be inserted or
/// queried, and no encoding is assumed. Three queries are supported: exact
/// membership ([`contains`](Trie::contains)), prefix enumeration
/// ([`prefix`](Trie::prefix)), and pattern enumeration
/// ([`pattern`](Trie::pattern)).
///
/// Mutation goes through `&mut self`, so a trie shared with other readers
/// cannot be modified out from under them; concurrent readers need no
/// synchronization.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// An empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// A trie holding every key from `keys`.
    pub fn with_keys<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut trie = Self::new();
        trie.insert_all(keys);
        trie
    }

    /// Number of distinct stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert one key. Returns `true` if the key was not already present.
    ///
    /// Re-inserting an existing key leaves the trie unchanged.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        tracing::event!(tracing::Level::TRACE, operation = "insert", key_len = key.len() as u64);

        let mut node = &mut self.root;
        for &byte in key {
            node = node.child_or_insert(byte);
        }
        if node.is_terminal() {
            return false;
        }
        node.set_terminal(true);
        self.len += 1;
        true
    }

    /// Insert every key from `keys`. Returns how many were newly added.
    pub fn insert_all<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        keys.into_iter().filter(|key| self.insert(key)).count()
    }

    /// Whether `key` was inserted.
    ///
    /// Only whole stored keys count; a path that exists merely as a prefix
    /// of longer keys is not a member.
    #[tracing::instrument(level = "trace", skip_all, fields(key_len = key.as_ref().len() as u64))]
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        match self.descend(key.as_ref()) {
            Some(node) => node.is_terminal(),
            None => false,
        }
    }

    /// Every stored key beginning with `prefix`, in lexicographic order.
    ///
    /// Keys are materialized in full, prefix included. If `prefix` itself
    /// is stored it leads the result. An empty `prefix` enumerates the
    /// whole trie.
    #[tracing::instrument(level = "trace", skip_all, fields(prefix_len = prefix.as_ref().len() as u64))]
    pub fn prefix(&self, prefix: impl AsRef<[u8]>) -> Vec<Vec<u8>> {
        let prefix = prefix.as_ref();
        let mut out = Vec::new();
        if let Some(node) = self.descend(prefix) {
            collect_keys(node, prefix.to_vec(), &mut out);
        }
        out
    }

    /// All stored keys in lexicographic order.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        self.prefix(b"")
    }

    /// Every stored key matching `pattern`, in lexicographic order.
    ///
    /// Pattern atoms: a literal byte matches itself, `*` matches any one
    /// byte, `[abc]` any enclosed byte, `[^abc]` any byte not enclosed,
    /// and `{name}` any one byte with equality enforced across repeated
    /// uses of the name. `{name[abc]}`/`{name[^abc]}` restrict the byte a
    /// name can bind to; a backslash escapes a metacharacter.
    ///
    /// The pattern is compiled first; a malformed pattern short-circuits
    /// into the parse error with no partial results.
    #[tracing::instrument(level = "trace", skip_all, fields(pattern_len = pattern.as_ref().len() as u64))]
    pub fn pattern(&self, pattern: impl AsRef<[u8]>) -> PatternResult<Vec<Vec<u8>>> {
        let tokens = parse(pattern.as_ref())?;
        Ok(PatternMatcher::new(&tokens).run(&self.root))
    }

    fn descend(&self, key: &[u8]) -> Option<&TrieNode> {
        let mut node = &self.root;
        for &byte in key {
            node = node.child(byte)?;
        }
        Some(node)
    }
}

impl<K: AsRef<[u8]>> FromIterator<K> for Trie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::with_keys(iter)
    }
}

impl<K: AsRef<[u8]>> Extend<K> for Trie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
