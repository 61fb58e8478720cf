use logos::Logos;
use tracing::trace;

use crate::{
    error::LexError,
    interpreter::token::{Token, TokenKind},
};

/// Raw lexemes recognized by the generated scanner.
///
/// Keyword resolution, case normalization and position bookkeeping happen in
/// [`Lexer`], which wraps the generated scanner and hands out [`Token`]s.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Numeric literals, such as `42` or `3.14`. A trailing `.` that is not
    /// followed by a digit stays a separate token.
    #[regex(r"[0-9]+\.[0-9]+")]
    #[regex(r"[0-9]+")]
    Number,
    /// Identifiers and keywords.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Word,
    /// `'text'`
    #[regex(r"'[^']*'", allow_greedy = true)]
    Text,
    /// An opening quote that is never closed.
    #[regex(r"'[^']*", allow_greedy = true)]
    UnterminatedText,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semi,
    /// Line breaks only move the position counters.
    #[token("\n", |lex| {
        let end = lex.span().end;
        lex.extras.new_line(end);
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Position bookkeeping carried by the scanner.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// columns can be derived from token spans.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current 1-based line number.
    pub line:       usize,
    /// Byte offset of the first character on the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

impl LexerExtras {
    /// Records a line break whose following line starts at `next_line_start`.
    pub const fn new_line(&mut self, next_line_start: usize) {
        self.line += 1;
        self.line_start = next_line_start;
    }

    /// Records every line break inside `text`, which begins at byte `offset`
    /// of the source.
    fn consume_newlines(&mut self, text: &str, offset: usize) {
        for (index, _) in text.match_indices('\n') {
            self.new_line(offset + index + 1);
        }
    }
}

/// Pull-based scanner over an in-memory source text.
///
/// Every call to [`Lexer::next_token`] scans exactly one token. Identifiers
/// and keywords are upper-cased, so the language is case-insensitive. Once the
/// input is exhausted every further call yields an EOF token.
///
/// ## Example
/// ```
/// use minipas::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("x := 2.5;");
///
/// let x = lexer.next_token().unwrap();
/// assert_eq!(x.kind, TokenKind::Id);
/// assert_eq!(x.text, "X");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
///
/// let number = lexer.next_token().unwrap();
/// assert_eq!(number.kind, TokenKind::Integer);
/// assert_eq!(number.text, "2.5");
/// assert_eq!(number.column, 6);
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semi);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: RawToken::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    /// - `LexError::UnexpectedCharacter` for a character that starts no token.
    /// - `LexError::UnterminatedString` when input ends inside a string
    ///   literal.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let Some(raw) = self.inner.next() else {
            let (line, column) = self.position(self.inner.source().len());
            return Ok(Token::new(TokenKind::Eof, "", line, column));
        };

        let span = self.inner.span();
        let slice = self.inner.slice();
        let (line, column) = self.position(span.start);

        let raw = raw.map_err(|()| {
                         LexError::UnexpectedCharacter { character: slice.chars()
                                                                         .next()
                                                                         .unwrap_or('\0'),
                                                         line,
                                                         column }
                     })?;

        let token = match raw {
            RawToken::Number => Token::new(TokenKind::Integer, slice, line, column),
            RawToken::Word => {
                let word = slice.to_ascii_uppercase();
                Token::new(TokenKind::from_word(&word), word, line, column)
            },
            RawToken::Text => {
                self.inner.extras.consume_newlines(slice, span.start);
                Token::new(TokenKind::StringLiteral, &slice[1..slice.len() - 1], line, column)
            },
            RawToken::UnterminatedText => {
                return Err(LexError::UnterminatedString { line, column });
            },
            RawToken::Assign => Token::new(TokenKind::Assign, slice, line, column),
            RawToken::Colon => Token::new(TokenKind::Colon, slice, line, column),
            RawToken::Comma => Token::new(TokenKind::Comma, slice, line, column),
            RawToken::Plus => Token::new(TokenKind::Plus, slice, line, column),
            RawToken::Minus => Token::new(TokenKind::Minus, slice, line, column),
            RawToken::Star => Token::new(TokenKind::Mul, slice, line, column),
            RawToken::Slash => Token::new(TokenKind::Div, slice, line, column),
            RawToken::LParen => Token::new(TokenKind::LParen, slice, line, column),
            RawToken::RParen => Token::new(TokenKind::RParen, slice, line, column),
            RawToken::Dot => Token::new(TokenKind::Dot, slice, line, column),
            RawToken::Semi => Token::new(TokenKind::Semi, slice, line, column),
            RawToken::NewLine | RawToken::Ignored => unreachable!("skipped by the scanner"),
        };

        trace!(kind = %token.kind, text = %token.text, line, column, "scanned token");
        Ok(token)
    }

    /// Converts a byte offset on the current line into a 1-based
    /// `(line, column)` pair.
    fn position(&self, offset: usize) -> (usize, usize) {
        let extras = self.inner.extras;
        let column = self.inner.source()[extras.line_start..offset].chars().count() + 1;
        (extras.line, column)
    }
}

/// Scans the whole of `source`, returning every token including the final
/// EOF token.
///
/// # Errors
/// Returns the first `LexError` encountered.
///
/// ## Example
/// ```
/// use minipas::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let kinds: Vec<_> = tokenize("begin END")
///     .unwrap()
///     .into_iter()
///     .map(|token| token.kind)
///     .collect();
///
/// assert_eq!(kinds, [TokenKind::Begin, TokenKind::End, TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
