use minipas::{
    error::LexError,
    interpreter::{
        lexer::{Lexer, tokenize},
        token::TokenKind,
    },
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to scan {src:?}: {e}"))
                 .into_iter()
                 .map(|token| token.kind)
                 .collect()
}

#[test]
fn punctuation_and_operators() {
    use TokenKind::{
        Assign, Colon, Comma, Div, Dot, Eof, LParen, Minus, Mul, Plus, RParen, Semi,
    };

    assert_eq!(kinds(":= : , + - * / ( ) . ;"),
               [Assign, Colon, Comma, Plus, Minus, Mul, Div, LParen, RParen, Dot, Semi, Eof]);
}

#[test]
fn reserved_words_ignore_case() {
    use TokenKind::{
        Begin, BooleanConst, BooleanType, Div, End, Eof, Id, IntegerType, Program, RealType,
        StringType, Var,
    };

    assert_eq!(kinds("program Var begin End integer REAL string Boolean div true False name"),
               [Program,
                Var,
                Begin,
                End,
                IntegerType,
                RealType,
                StringType,
                BooleanType,
                Div,
                BooleanConst,
                BooleanConst,
                Id,
                Eof]);
}

#[test]
fn identifiers_are_upper_cased() {
    let tokens = tokenize("myVar_2").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Id);
    assert_eq!(tokens[0].text, "MYVAR_2");
}

#[test]
fn numbers_share_one_kind() {
    let tokens = tokenize("42 3.14").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].text, "42");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].text, "3.14");
}

#[test]
fn dot_after_number_is_separate() {
    use TokenKind::{Dot, End, Eof, Integer};

    assert_eq!(kinds("END 5."), [End, Integer, Dot, Eof]);
}

#[test]
fn string_literals_keep_their_case() {
    let tokens = tokenize("'Hello, World' ''").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "Hello, World");
    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].text, "");
}

#[test]
fn positions_are_tracked() {
    let tokens = tokenize("BEGIN\n  x := 1\nEND").unwrap();

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    assert_eq!((tokens[2].line, tokens[2].column), (2, 5));
    assert_eq!((tokens[3].line, tokens[3].column), (2, 8));
    assert_eq!((tokens[4].line, tokens[4].column), (3, 1));
}

#[test]
fn newlines_inside_strings_advance_the_line() {
    let tokens = tokenize("'a\nb' x").unwrap();

    assert_eq!(tokens[0].text, "a\nb");
    assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::new("   ");

    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn unknown_character() {
    let error = tokenize("x := 1 # 2").unwrap_err();
    assert_eq!(error,
               LexError::UnexpectedCharacter { character: '#',
                                               line:      1,
                                               column:    8, });
}

#[test]
fn unterminated_string() {
    let error = tokenize("s := 'abc").unwrap_err();
    assert_eq!(error, LexError::UnterminatedString { line: 1, column: 6 });
}
