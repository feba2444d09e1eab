pub mod pattern;
pub mod trie;

pub use pattern::{ByteSet, GroupKind, PatternError, PatternResult, Token};
pub use trie::Trie;
