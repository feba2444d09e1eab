use smallvec::SmallVec;

/// One node of the byte trie.
///
/// Children are `(byte, child)` pairs kept sorted by byte, so lookups are a
/// binary search and in-order iteration enumerates edges in ascending byte
/// order. Most nodes carry only a handful of children, which keeps them
/// inline in the `SmallVec`.
#[derive(Debug, Default, Clone)]
pub(crate) struct TrieNode {
    children: SmallVec<[(u8, Box<TrieNode>); 4]>,
    terminal: bool,
}

impl TrieNode {
    #[inline(always)]
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[inline(always)]
    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    pub(crate) fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|pos| self.children[pos].1.as_ref())
    }

    /// Find the child for `byte`, inserting an empty one at its sorted
    /// position if missing.
    pub(crate) fn child_or_insert(&mut self, byte: u8) -> &mut TrieNode {
        let pos = match self.children.binary_search_by_key(&byte, |&(b, _)| b) {
            Ok(pos) => pos,
            Err(pos) => {
                self.children
                    .insert(pos, (byte, Box::new(TrieNode::default())));
                pos
            }
        };
        self.children[pos].1.as_mut()
    }

    /// Edges in ascending byte order.
    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = (u8, &TrieNode)> {
        self.children.iter().map(|(b, child)| (*b, child.as_ref()))
    }
}
