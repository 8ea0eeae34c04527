use exprcalc::{
    ast::{BinaryOperator, Expr, NodeKind, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, lex},
        parser::core::{parse, parse_all},
    },
};

fn int(n: i64) -> Expr {
    Expr::Integer(n)
}

fn add(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOperator::Add, right)
}

fn sub(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOperator::Sub, right)
}

fn mul(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOperator::Mul, right)
}

fn div(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOperator::Div, right)
}

fn neg(expr: Expr) -> Expr {
    Expr::unary(UnaryOperator::Negate, expr)
}

fn parse_str(src: &str) -> Expr {
    let tokens = lex(src).unwrap_or_else(|e| panic!("Failed to lex {src:?}: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

fn parse_err(src: &str) -> ParseError {
    let tokens = lex(src).unwrap_or_else(|e| panic!("Failed to lex {src:?}: {e}"));
    match parse(&tokens) {
        Ok(expr) => panic!("{src:?} parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn lexer_produces_ordered_tokens() {
    assert_eq!(lex("1+2").unwrap(),
               vec![Token::Integer(1), Token::Plus, Token::Integer(2)]);
    assert_eq!(lex("(2)*3+2").unwrap(),
               vec![Token::LParen,
                    Token::Integer(2),
                    Token::RParen,
                    Token::Star,
                    Token::Integer(3),
                    Token::Plus,
                    Token::Integer(2)]);
    assert_eq!(lex(" 12 /-345 ").unwrap(),
               vec![Token::Integer(12), Token::Slash, Token::Minus, Token::Integer(345)]);
}

#[test]
fn lexer_handles_empty_and_blank_input() {
    assert_eq!(lex("").unwrap(), Vec::new());
    assert_eq!(lex(" \t\n ").unwrap(), Vec::new());
}

#[test]
fn lexing_is_idempotent() {
    for src in ["2 + 2 * 2", "(32 + 8) * 3", "-(3 + 4)", ""] {
        assert_eq!(lex(src), lex(src));
    }
}

#[test]
fn lexer_reports_position_of_unknown_character() {
    let err = lex("12 + 3 $ 4").unwrap_err();
    assert_eq!(err.position(), 7);
}

#[test]
fn literals_and_groups() {
    assert_eq!(parse_str("32"), int(32));
    assert_eq!(parse_str("(32)"), int(32));
}

#[test]
fn single_operators() {
    assert_eq!(parse_str("32 * 8"), mul(int(32), int(8)));
    assert_eq!(parse_str("5 / (4)"), div(int(5), int(4)));
    assert_eq!(parse_str("32 + 8"), add(int(32), int(8)));
}

#[test]
fn chains_are_left_associative() {
    assert_eq!(parse_str("2 + 2 + 2"), add(add(int(2), int(2)), int(2)));
    assert_eq!(parse_str("2 + 2 - 4"), sub(add(int(2), int(2)), int(4)));
    assert_eq!(parse_str("2 * 2 * 2"), mul(mul(int(2), int(2)), int(2)));
    assert_eq!(parse_str("8 / 4 * 2"), mul(div(int(8), int(4)), int(2)));
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(parse_str("2 - 4*3"), sub(int(2), mul(int(4), int(3))));
    assert_eq!(parse_str("2 + 2 - 4*3"),
               sub(add(int(2), int(2)), mul(int(4), int(3))));
    assert_eq!(parse_str("(32 + 8) * 3"), mul(add(int(32), int(8)), int(3)));
}

#[test]
fn leading_sign_wraps_first_term() {
    assert_eq!(parse_str("-3 + 4"), add(neg(int(3)), int(4)));
    assert_eq!(parse_str("-(3 + 4)"), neg(add(int(3), int(4))));
    assert_eq!(parse_str("-2 * 3"), neg(mul(int(2), int(3))));
    assert_eq!(parse_str("+2 * 3"), mul(int(2), int(3)));
    assert_eq!(parse_str("(-2 + 2) * 2"), mul(add(neg(int(2)), int(2)), int(2)));
}

#[test]
fn node_kinds() {
    assert_eq!(parse_str("1").kind(), NodeKind::Int);
    assert_eq!(parse_str("1 + 2").kind(), NodeKind::Plus);
    assert_eq!(parse_str("1 - 2").kind(), NodeKind::Minus);
    assert_eq!(parse_str("1 * 2").kind(), NodeKind::Mul);
    assert_eq!(parse_str("1 / 2").kind(), NodeKind::Div);
    assert_eq!(parse_str("-1").kind(), NodeKind::MinusUnary);
}

#[test]
fn structural_equality_distinguishes_shape() {
    assert_ne!(parse_str("1 - 2 - 3"), parse_str("1 - (2 - 3)"));
    assert_ne!(parse_str("1 + 2"), parse_str("2 + 1"));
    assert_eq!(parse_str("((1)) + (2)"), parse_str("1 + 2"));
}

#[test]
fn display_reparses_to_equal_tree() {
    for src in ["2 + 2 - 4*3", "-(3 + 4) * 2", "2 * (-3)", "-(-3)", "(-2 + 2) * 2", "7"] {
        let expr = parse_str(src);
        assert_eq!(parse_str(&expr.to_string()), expr, "round trip of {src:?}");
    }
    assert_eq!(parse_str("2 - 4*3").to_string(), "(2 - (4 * 3))");
}

#[test]
fn parse_errors() {
    assert_eq!(parse_err("(1+2"), ParseError::ExpectedClosingParen { found: None });
    assert_eq!(parse_err("(1 2"),
               ParseError::ExpectedClosingParen { found: Some(Token::Integer(2)) });
    assert_eq!(parse_err(""), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_err("3 *"), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_err("* 3"), ParseError::UnexpectedToken { token: Token::Star });
    assert_eq!(parse_err("--1"), ParseError::UnexpectedToken { token: Token::Minus });
    assert_eq!(parse_err("()"), ParseError::UnexpectedToken { token: Token::RParen });
}

#[test]
fn parse_leaves_trailing_tokens_but_parse_all_rejects_them() {
    let tokens = lex("1 + 2 )").unwrap();
    assert_eq!(parse(&tokens).unwrap(), add(int(1), int(2)));
    assert_eq!(parse_all(&tokens),
               Err(ParseError::UnexpectedTrailingTokens { token: Token::RParen }));

    let tokens = lex("1 + 2").unwrap();
    assert_eq!(parse_all(&tokens).unwrap(), add(int(1), int(2)));
}

#[test]
fn deep_chains_parse_iteratively() {
    let src = vec!["1"; 1_000].join(" + ");
    let tokens = lex(&src).unwrap();
    let expr = parse(&tokens).unwrap();
    assert_eq!(expr.kind(), NodeKind::Plus);
}
