mod error;
pub(crate) mod matcher;
mod parser;
mod token;

pub use error::{PatternError, PatternResult};
pub use parser::parse;
pub use token::{ByteSet, CaptureToken, ClassToken, GroupKind, Token};
