//! Tokenization of expression text
//!
//! Turns a typed-out expression like `"2+3*4"` or `"12.5 ÷ 2"` into tokens.
//! This is a convenience front door for callers that hold a whole expression
//! as text; the calculator itself accepts tokens directly. Display glyphs for
//! multiply and divide are accepted alongside the canonical symbols.

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{map, map_opt, opt, recognize},
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};
use thiserror::Error;

use crate::expr::{Op, Token};

#[derive(Error, Debug, PartialEq)]
pub enum LexError {
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Parse an unsigned decimal number, keeping its text
fn number(input: &str) -> IResult<&str, Token> {
    map(
        recognize(pair(digit1, opt(preceded(char('.'), digit1)))),
        |text: &str| Token::Num(text.to_string()),
    )(input)
}

/// Parse an operator symbol or display glyph
fn operator(input: &str) -> IResult<&str, Token> {
    map(map_opt(one_of("+-*/×÷"), Op::from_symbol), Token::Op)(input)
}

/// Tokenize an expression string
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let (rest, tokens) = many0(preceded(multispace0, alt((number, operator))))(input)
        .map_err(|_| LexError::ParseError(input.to_string()))?;
    let rest = rest.trim_start();
    match rest.chars().next() {
        Some(c) => Err(LexError::UnexpectedChar(c)),
        None => Ok(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_simple_expression() {
        let tokens = lex("2+3*4").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Num("2".to_string()),
                Token::Op(Op::Add),
                Token::Num("3".to_string()),
                Token::Op(Op::Mul),
                Token::Num("4".to_string()),
            ]
        );
    }

    #[test]
    fn test_lex_decimals_and_whitespace() {
        let tokens = lex(" 12.5 / 0.5 ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Num("12.5".to_string()),
                Token::Op(Op::Div),
                Token::Num("0.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_lex_glyphs() {
        let tokens = lex("6×7÷2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Num("6".to_string()),
                Token::Op(Op::Mul),
                Token::Num("7".to_string()),
                Token::Op(Op::Div),
                Token::Num("2".to_string()),
            ]
        );
    }

    #[test]
    fn test_lex_empty() {
        assert_eq!(lex(""), Ok(vec![]));
        assert_eq!(lex("   "), Ok(vec![]));
    }

    #[test]
    fn test_lex_rejects_unknown_character() {
        assert_eq!(lex("2+x"), Err(LexError::UnexpectedChar('x')));
    }

    #[test]
    fn test_lex_minus_is_an_operator_not_a_sign() {
        // "2-3" is number, subtract, number; there is no unary minus
        let tokens = lex("2-3").unwrap();
        assert_eq!(tokens[1], Token::Op(Op::Sub));
        assert_eq!(tokens.len(), 3);
    }
}
