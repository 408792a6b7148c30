/// Position in source code: character index plus 0-indexed line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(index: usize, line: u32, column: u32) -> Self {
        Self { index, line, column }
    }

    /// The position one character further along, given the character being
    /// stepped over. A newline advances the line and resets the column; the
    /// index always advances.
    pub fn advance(self, current: char) -> Self {
        if current == '\n' {
            Self {
                index: self.index + 1,
                line: self.line + 1,
                column: 0,
            }
        } else {
            Self {
                index: self.index + 1,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

/// Span representing a range in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Lexical categories, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Operator,    // + - * / =
    Comparator,  // < > ? !
    Identifier,
    Integer,
    Float,
    Parenthesis, // ( )
    Colon,
    Newline,
    Indent,      // one two-space unit of leading whitespace
    String,
    Invalid,
    Eof,
}

/// Token with its raw text and position information
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}
