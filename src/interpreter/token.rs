/// The kind of a lexical token.
///
/// Kinds are named after the grammar terminals. Keywords are matched
/// case-insensitively by the lexer, so `begin`, `BEGIN` and `BeGiN` all
/// produce [`TokenKind::Begin`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal such as `42` or `3.14`.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/` or the `DIV` keyword.
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `BEGIN`
    Begin,
    /// `END`
    End,
    /// `.`
    Dot,
    /// `;`
    Semi,
    /// `:=`
    Assign,
    /// Identifier, already normalized to upper case.
    Id,
    /// End of input.
    Eof,
    /// `VAR`
    Var,
    /// `INTEGER`
    IntegerType,
    /// `REAL`
    RealType,
    /// `STRING`
    StringType,
    /// `BOOLEAN`
    BooleanType,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `PROGRAM`
    Program,
    /// Single-quoted text such as `'hello'`.
    StringLiteral,
    /// `TRUE` or `FALSE`.
    BooleanConst,
}

impl TokenKind {
    /// Resolves an upper-cased word to its keyword kind, or [`TokenKind::Id`]
    /// when the word is not reserved.
    ///
    /// ## Example
    /// ```
    /// use minipas::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_word("BEGIN"), TokenKind::Begin);
    /// assert_eq!(TokenKind::from_word("DIV"), TokenKind::Div);
    /// assert_eq!(TokenKind::from_word("TOTAL"), TokenKind::Id);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        match word {
            "BEGIN" => Self::Begin,
            "END" => Self::End,
            "PROGRAM" => Self::Program,
            "VAR" => Self::Var,
            "INTEGER" => Self::IntegerType,
            "REAL" => Self::RealType,
            "DIV" => Self::Div,
            "STRING" => Self::StringType,
            "BOOLEAN" => Self::BooleanType,
            "TRUE" | "FALSE" => Self::BooleanConst,
            _ => Self::Id,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Dot => "DOT",
            Self::Semi => "SEMI",
            Self::Assign => "ASSIGN",
            Self::Id => "ID",
            Self::Eof => "EOF",
            Self::Var => "VAR",
            Self::IntegerType => "INTEGER_TYPE",
            Self::RealType => "REAL_TYPE",
            Self::StringType => "STRING_TYPE",
            Self::BooleanType => "BOOLEAN_TYPE",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Program => "PROGRAM",
            Self::StringLiteral => "STRING_LITERAL",
            Self::BooleanConst => "BOOLEAN_CONST",
        };
        write!(f, "{name}")
    }
}

/// A token produced by the lexer.
///
/// Tokens are immutable once produced. `line` and `column` are 1-based and
/// point at the first character of the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind:   TokenKind,
    /// The literal text. Identifiers and keywords are upper-cased, string
    /// literals have their quotes removed.
    pub text:   String,
    /// Source line of the first character.
    pub line:   usize,
    /// Source column of the first character.
    pub column: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               text: text.into(),
               line,
               column }
    }
}
