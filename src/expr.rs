//! Token model and the in-progress expression
//!
//! An expression is built left to right as the user commits numbers and taps
//! operators. Numbers keep their original text so that validation can look at
//! what was actually typed (e.g. the literal `"0"` after a divide), not a
//! normalized float.

use std::fmt;

/// One of the four arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Canonical symbol, as tokens carry it internally
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Typographic glyph for display (multiply and divide differ)
    pub fn glyph(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '×',
            Op::Div => '÷',
        }
    }

    /// Parse an operator from either its canonical symbol or its display
    /// glyph, so the glyph mapping is reversible
    pub fn from_symbol(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' | '×' => Some(Op::Mul),
            '/' | '÷' => Some(Op::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An atomic element of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A number, kept as the text it was committed with
    Num(String),
    /// An arithmetic operator
    Op(Op),
}

impl Token {
    /// Classify a textual token. A lone operator symbol (or glyph) becomes an
    /// operator; everything else is kept verbatim as a number candidate.
    /// Nothing is validated here - malformed tokens are only rejected when
    /// the expression is evaluated.
    pub fn from_text(text: &str) -> Token {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match Op::from_symbol(c) {
                Some(op) => Token::Op(op),
                None => Token::Num(text.to_string()),
            },
            _ => Token::Num(text.to_string()),
        }
    }

    /// Parse this token as a finite number, if it is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Num(text) => text.parse::<f64>().ok().filter(|n| n.is_finite()),
            Token::Op(_) => None,
        }
    }
}

impl From<f64> for Token {
    fn from(n: f64) -> Token {
        Token::Num(n.to_string())
    }
}

impl From<Op> for Token {
    fn from(op: Op) -> Token {
        Token::Op(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(text) => write!(f, "{}", text),
            Token::Op(op) => write!(f, "{}", op),
        }
    }
}

/// The ordered token sequence of the expression under construction
///
/// Insertion order is evaluation order. Appending never fails and never
/// validates; well-formedness is checked by the calculator at evaluation
/// time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an expression from textual tokens (e.g. `["2", "+", "3"]`)
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Expression {
            tokens: texts
                .into_iter()
                .map(|s| Token::from_text(s.as_ref()))
                .collect(),
        }
    }

    /// Append a token at the end
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Remove all tokens
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// An immutable copy of the current token order, never a live alias
    pub fn snapshot(&self) -> Vec<Token> {
        self.tokens.clone()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for Expression {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Expression {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
