use thiserror::Error;

use super::token::GroupKind;

/// Pattern compilation errors. Columns are 1-based; a construct's start
/// column is the column of the last byte of its opening delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Unescaped symbol {symbol} at column {column}")]
    UnescapedSymbol { symbol: char, column: usize },
    #[error("Dangling group ({kind}) starting at column {column}, expecting ]")]
    DanglingGroup { kind: GroupKind, column: usize },
    #[error("Dangling group (capture) starting at column {column}, expecting }}")]
    DanglingCapture { column: usize },
    #[error("Unnamed capture starting at column {column}, capture cannot be empty")]
    EmptyCaptureName { column: usize },
    #[error("Unnamed capture starting at column {column}, capture must be named before group")]
    GroupBeforeCaptureName { column: usize },
    #[error("Group ({kind}) must in the tail position of capture starting at column {column}")]
    NonTailCaptureGroup { kind: GroupKind, column: usize },
}

pub type PatternResult<T> = Result<T, PatternError>;
