use super::error::{PatternError, PatternResult};
use super::token::{ByteSet, CaptureToken, ClassToken, GroupKind, Token};

/// The reserved pattern bytes. Any of them can be matched literally by
/// escaping with a backslash; a backslash not followed by one of them is an
/// ordinary literal byte.
fn is_metacharacter(byte: u8) -> bool {
    matches!(byte, b'*' | b'^' | b'[' | b']' | b'{' | b'}')
}

/// Compile a pattern into its token sequence.
///
/// Errors carry the 1-based column of the offending byte, or of the last
/// byte of the offending construct's opening delimiter.
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern_len = pattern.len() as u64))]
pub fn parse(pattern: &[u8]) -> PatternResult<Vec<Token>> {
    Parser {
        bytes: pattern,
        pos: 0,
    }
    .run()
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn run(mut self) -> PatternResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(byte) = self.peek() {
            match byte {
                b'*' => {
                    self.bump(1);
                    tokens.push(Token::Wildcard);
                }
                b'[' => {
                    tokens.push(Token::Class(self.parse_class()?));
                }
                b'{' => {
                    tokens.push(Token::Capture(self.parse_capture()?));
                }
                b'^' | b']' | b'}' => {
                    return Err(PatternError::UnescapedSymbol {
                        symbol: byte as char,
                        column: self.column(),
                    });
                }
                _ => {
                    let literal = self.take_literal();
                    tokens.push(Token::Literal(literal));
                }
            }
        }
        Ok(tokens)
    }

    /// `[body]` or `[^body]` outside a capture.
    fn parse_class(&mut self) -> PatternResult<ClassToken> {
        let (kind, start) = self.open_group();
        let set = self.class_body(kind, start)?;
        Ok(ClassToken::new(kind, set))
    }

    /// `{name}`, `{name[body]}`, or `{name[^body]}`.
    fn parse_capture(&mut self) -> PatternResult<CaptureToken> {
        let start = self.column();
        self.bump(1); // '{'
        let mut name = Vec::new();
        loop {
            match self.peek() {
                None => return Err(PatternError::DanglingCapture { column: start }),
                Some(b'}') => {
                    if name.is_empty() {
                        return Err(PatternError::EmptyCaptureName { column: start });
                    }
                    self.bump(1);
                    return Ok(CaptureToken::new(name, None));
                }
                Some(b'[') => {
                    if name.is_empty() {
                        return Err(PatternError::GroupBeforeCaptureName { column: start });
                    }
                    let class = self.parse_capture_group(start)?;
                    return Ok(CaptureToken::new(name, Some(class)));
                }
                Some(byte) if is_metacharacter(byte) => {
                    return Err(PatternError::UnescapedSymbol {
                        symbol: byte as char,
                        column: self.column(),
                    });
                }
                Some(_) => name.push(self.take_literal()),
            }
        }
    }

    /// The class constraint of a capture. Its `]` must be immediately
    /// followed by the closing `}`.
    fn parse_capture_group(&mut self, capture_start: usize) -> PatternResult<ClassToken> {
        let (kind, start) = self.open_group();
        let set = self.class_body(kind, start)?;
        match self.peek() {
            Some(b'}') => {
                self.bump(1);
                Ok(ClassToken::new(kind, set))
            }
            Some(_) => Err(PatternError::NonTailCaptureGroup {
                kind,
                column: capture_start,
            }),
            None => Err(PatternError::DanglingCapture {
                column: capture_start,
            }),
        }
    }

    /// Consume `[` or `[^`. The reported start is the last byte of the
    /// opener: the `[` itself, or the `^` of `[^`.
    fn open_group(&mut self) -> (GroupKind, usize) {
        let bracket = self.column();
        self.bump(1); // '['
        if self.peek() == Some(b'^') {
            self.bump(1);
            (GroupKind::Exclusion, bracket + 1)
        } else {
            (GroupKind::Inclusion, bracket)
        }
    }

    /// Accumulate body bytes up to and including the closing `]`.
    fn class_body(&mut self, kind: GroupKind, start: usize) -> PatternResult<ByteSet> {
        let mut set = ByteSet::new();
        loop {
            match self.peek() {
                None => return Err(PatternError::DanglingGroup { kind, column: start }),
                Some(b']') => {
                    if set.is_empty() {
                        // The body needs at least one byte, so this ']' sits
                        // where a literal was required.
                        return Err(PatternError::UnescapedSymbol {
                            symbol: ']',
                            column: self.column(),
                        });
                    }
                    self.bump(1);
                    return Ok(set);
                }
                Some(byte) if is_metacharacter(byte) => {
                    return Err(PatternError::UnescapedSymbol {
                        symbol: byte as char,
                        column: self.column(),
                    });
                }
                Some(_) => {
                    set.insert(self.take_literal());
                }
            }
        }
    }

    /// Consume one literal, resolving a backslash escape to the escaped
    /// metacharacter. A backslash not followed by a metacharacter is itself
    /// the literal.
    fn take_literal(&mut self) -> u8 {
        let byte = self.bytes[self.pos];
        if byte == b'\\'
            && let Some(&escaped) = self.bytes.get(self.pos + 1)
            && is_metacharacter(escaped)
        {
            self.bump(2);
            return escaped;
        }
        self.bump(1);
        byte
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self, n: usize) {
        self.pos += n;
    }

    /// 1-based column of the next unconsumed byte. Escapes count two
    /// columns (the backslash and the symbol), so the column is always the
    /// byte offset plus one.
    fn column(&self) -> usize {
        self.pos + 1
    }
}
