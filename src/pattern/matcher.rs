use smallvec::SmallVec;

use super::token::{CaptureToken, Token};
use crate::trie::TrieNode;

/// Capture bindings along the current search path. At most one binding per
/// name; names borrow from the token list.
type Bindings<'t> = SmallVec<[(&'t [u8], u8); 4]>;

/// Executes a compiled pattern against a trie.
///
/// The descent is indexed by the current node and token position and
/// carries the bytes consumed so far. Branches fan out over a node's
/// children in ascending byte order, so output is depth-first
/// lexicographic. Bindings pushed before a branch are popped after it,
/// which restores the environment on backtrack.
pub(crate) struct PatternMatcher<'t> {
    tokens: &'t [Token],
    bindings: Bindings<'t>,
    acc: Vec<u8>,
    out: Vec<Vec<u8>>,
}

impl<'t> PatternMatcher<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            bindings: SmallVec::new(),
            acc: Vec::new(),
            out: Vec::new(),
        }
    }

    pub(crate) fn run(mut self, root: &TrieNode) -> Vec<Vec<u8>> {
        self.descend(root, 0);
        self.out
    }

    fn descend(&mut self, node: &TrieNode, depth: usize) {
        let Some(token) = self.tokens.get(depth) else {
            // Tokens exhausted: the path is a match iff it spells a stored key.
            if node.is_terminal() {
                self.out.push(self.acc.clone());
            }
            return;
        };

        match token {
            Token::Literal(byte) => self.step_literal(node, depth, *byte),
            Token::Wildcard => {
                for (byte, child) in node.children() {
                    self.step(child, depth, byte);
                }
            }
            Token::Class(class) => {
                for (byte, child) in node.children() {
                    if class.admits(byte) {
                        self.step(child, depth, byte);
                    }
                }
            }
            Token::Capture(capture) => self.step_capture(node, depth, capture),
        }
    }

    fn step_capture(&mut self, node: &TrieNode, depth: usize, capture: &'t CaptureToken) {
        if let Some(bound) = self.lookup(&capture.name) {
            // A bound name behaves as a literal; its class constraint
            // applied at binding time only.
            self.step_literal(node, depth, bound);
            return;
        }
        for (byte, child) in node.children() {
            if let Some(class) = &capture.class
                && !class.admits(byte)
            {
                continue;
            }
            self.bindings.push((&capture.name, byte));
            self.step(child, depth, byte);
            self.bindings.pop();
        }
    }

    fn step_literal(&mut self, node: &TrieNode, depth: usize, byte: u8) {
        if let Some(child) = node.child(byte) {
            self.step(child, depth, byte);
        }
    }

    fn step(&mut self, child: &TrieNode, depth: usize, byte: u8) {
        self.acc.push(byte);
        self.descend(child, depth + 1);
        self.acc.pop();
    }

    fn lookup(&self, name: &[u8]) -> Option<u8> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == name)
            .map(|&(_, byte)| byte)
    }
}
