use minipas::{
    ast::{BinaryOperator, Expr, Statement, UnaryOperator, VarType},
    error::{Error, SyntaxError},
    interpreter::token::TokenKind,
    parse,
};

fn first_assignment_value(src: &str) -> Expr {
    let program = parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));

    match program.block.compound.children.into_iter().next() {
        Some(Statement::Assign(assign)) => assign.value,
        other => panic!("Expected an assignment, got {other:?}"),
    }
}

#[test]
fn declarations_expand_per_name() {
    let program = parse("PROGRAM P; VAR a, b: INTEGER; s: STRING; BEGIN END.").unwrap();
    let declared: Vec<_> = program.block
                                  .declarations
                                  .iter()
                                  .map(|d| (d.var.name.as_str(), d.type_spec.var_type))
                                  .collect();

    assert_eq!(declared,
               [("A", VarType::Integer), ("B", VarType::Integer), ("S", VarType::String)]);
}

#[test]
fn var_section_is_optional() {
    let program = parse("PROGRAM P; BEGIN END.").unwrap();

    assert!(program.block.declarations.is_empty());
    assert_eq!(program.block.compound.children, [Statement::Empty]);
}

#[test]
fn trailing_semicolon_adds_empty_statement() {
    let program = parse("PROGRAM P; VAR x: REAL; BEGIN x := 1; END.").unwrap();
    let children = &program.block.compound.children;

    assert_eq!(children.len(), 2);
    assert!(matches!(children[0], Statement::Assign(_)));
    assert_eq!(children[1], Statement::Empty);
}

#[test]
fn nested_compound_statements() {
    let program = parse("PROGRAM P; VAR x: REAL; BEGIN BEGIN x := 1 END; x := 2 END.").unwrap();
    let children = &program.block.compound.children;

    assert!(matches!(&children[0], Statement::Compound(inner) if inner.children.len() == 1));
    assert!(matches!(children[1], Statement::Assign(_)));
}

#[test]
fn multiplication_binds_tighter() {
    let source = "PROGRAM P; VAR x: REAL; BEGIN x := 1 + 2 * 3 END.";
    let Expr::BinOp(add) = first_assignment_value(source) else {
        panic!("Expected a binary operation");
    };

    assert_eq!(add.op, BinaryOperator::Add);
    assert!(matches!(*add.left, Expr::Num(ref n) if n.value == 1.0));
    assert!(matches!(*add.right, Expr::BinOp(ref mul) if mul.op == BinaryOperator::Mul));
}

#[test]
fn subtraction_is_left_associative() {
    let source = "PROGRAM P; VAR x: REAL; BEGIN x := 8 - 4 - 2 END.";
    let Expr::BinOp(outer) = first_assignment_value(source) else {
        panic!("Expected a binary operation");
    };

    assert_eq!(outer.op, BinaryOperator::Sub);
    assert!(matches!(*outer.left, Expr::BinOp(ref inner) if inner.op == BinaryOperator::Sub));
    assert!(matches!(*outer.right, Expr::Num(ref n) if n.value == 2.0));
}

#[test]
fn div_keyword_is_division() {
    let value = first_assignment_value("PROGRAM P; VAR x: REAL; BEGIN x := 7 div 2 END.");
    assert!(matches!(value, Expr::BinOp(ref op) if op.op == BinaryOperator::Div));
}

#[test]
fn unary_operators_nest() {
    let source = "PROGRAM P; VAR x: REAL; BEGIN x := -+5 END.";
    let Expr::UnaryOp(outer) = first_assignment_value(source) else {
        panic!("Expected a unary operation");
    };

    assert_eq!(outer.op, UnaryOperator::Minus);
    assert!(matches!(*outer.operand, Expr::UnaryOp(ref inner) if inner.op == UnaryOperator::Plus));
}

#[test]
fn literals() {
    let value = first_assignment_value("PROGRAM P; VAR s: STRING; BEGIN s := 'Mixed Case' END.");
    assert!(matches!(value, Expr::StringLiteral(ref s) if s.value == "Mixed Case"));

    let value = first_assignment_value("PROGRAM P; VAR b: BOOLEAN; BEGIN b := false END.");
    assert!(matches!(value, Expr::BooleanLiteral(ref b) if !b.value));
}

#[test]
fn assignment_keeps_operator_position() {
    let program = parse("PROGRAM P;\nVAR x: REAL;\nBEGIN\n  x := 1\nEND.").unwrap();
    let Statement::Assign(assign) = &program.block.compound.children[0] else {
        panic!("Expected an assignment");
    };

    assert_eq!(assign.target.name, "X");
    assert_eq!((assign.token.line, assign.token.column), (4, 5));
}

#[test]
fn missing_semicolon_before_begin() {
    let error = parse("PROGRAM P; BEGIN BEGIN END BEGIN END END.").unwrap_err();
    assert!(matches!(error,
                     Error::Syntax(SyntaxError::MissingSemicolon { found: TokenKind::Begin, .. })));
}

#[test]
fn unknown_type() {
    let error = parse("PROGRAM P; VAR x: CHAR; BEGIN END.").unwrap_err();
    assert!(matches!(error, Error::Syntax(SyntaxError::UnknownType { found: TokenKind::Id, .. })));
}

#[test]
fn lexical_errors_surface_through_the_parser() {
    let error = parse("PROGRAM P; BEGIN x := 'open END.").unwrap_err();
    assert!(matches!(error, Error::Lex(_)));
}

#[test]
fn unexpected_token_names_both_kinds() {
    let error = parse("PROGRAM P; VAR x: REAL; BEGIN x := ) END.").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 1, column 36: Syntax error: expected ID, got RPAREN.");
}
