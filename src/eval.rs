//! The calculator core - validation, fold, and exclusive access
//!
//! A [`Calculator`] owns one in-progress [`Expression`] and the last computed
//! result. Every public operation locks the shared state for its full
//! duration, so concurrent callers are serialized: operations take effect in
//! lock-acquisition order, `evaluate` reads and writes atomically, and no
//! caller ever observes a half-mutated sequence. Cloning a `Calculator`
//! yields another handle on the same state; separate `Calculator::new()`
//! instances share nothing.
//!
//! Evaluation runs three steps over a snapshot of the sequence:
//!
//! 1. Boundary check: the first and last tokens must parse as finite numbers.
//! 2. Syntactic divide-by-zero check: a token whose text is exactly `"0"`
//!    directly after a divide operator is rejected before folding.
//! 3. Fold: a precedence-aware left-to-right reduction. `*` and `/` bind into
//!    the current term, `+` and `-` commit it. A zero divisor the syntactic
//!    check missed (e.g. `"0.0"`) is caught here.
//!
//! A sequence that passes the boundary check but does not alternate
//! number/operator is rejected as malformed rather than silently producing
//! no result.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::expr::{Expression, Op, Token};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("first or last element not numeric")]
    InvalidBoundary,
    #[error("division by zero")]
    DivideByZero,
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}

fn malformed(detail: impl Into<String>) -> EvalError {
    EvalError::MalformedExpression(detail.into())
}

/// Fold a token sequence into a single value
///
/// Expects strict alternation: number, operator, number, ..., number.
/// Multiplicative operators are applied to the running term immediately;
/// additive operators commit the term and start the next one, which gives
/// standard precedence with left-to-right associativity.
fn fold(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut iter = tokens.iter();
    let first = iter
        .next()
        .ok_or_else(|| malformed("empty expression"))?;
    let mut term = first
        .as_number()
        .ok_or_else(|| malformed(format!("expected a number, found {first}")))?;
    let mut total = 0.0;
    let mut negate_term = false;

    loop {
        let op = match iter.next() {
            None => break,
            Some(Token::Op(op)) => *op,
            Some(token) => return Err(malformed(format!("expected an operator, found {token}"))),
        };
        let operand = match iter.next() {
            Some(token @ Token::Num(_)) => token
                .as_number()
                .ok_or_else(|| malformed(format!("expected a number, found {token}")))?,
            Some(token) => return Err(malformed(format!("expected a number, found {token}"))),
            None => return Err(malformed(format!("dangling operator {op}"))),
        };
        match op {
            Op::Mul => term *= operand,
            Op::Div => {
                if operand == 0.0 {
                    return Err(EvalError::DivideByZero);
                }
                term /= operand;
            }
            Op::Add | Op::Sub => {
                total += if negate_term { -term } else { term };
                negate_term = op == Op::Sub;
                term = operand;
            }
        }
    }

    total += if negate_term { -term } else { term };
    Ok(total)
}

#[derive(Debug, Default)]
struct State {
    expr: Expression,
    result: Option<f64>,
}

/// Shared handle to one calculator's serialized state
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: Arc<Mutex<State>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the token sequence wholesale. The stored result is untouched;
    /// only [`all_clear`](Self::all_clear) resets it.
    pub fn set_expression(&self, expr: Expression) {
        self.state.lock().unwrap().expr = expr;
    }

    /// Append one token to the current sequence. Never validates.
    pub fn push(&self, token: Token) {
        self.state.lock().unwrap().expr.push(token);
    }

    /// Validate and fold the current sequence, storing the result on success
    ///
    /// On any error the stored result and the token sequence are left
    /// unchanged, so the caller can fix the sequence and retry.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        let mut state = self.state.lock().unwrap();
        let tokens = state.expr.snapshot();

        let boundaries_numeric = tokens.first().and_then(Token::as_number).is_some()
            && tokens.last().and_then(Token::as_number).is_some();
        if !boundaries_numeric {
            return Err(EvalError::InvalidBoundary);
        }

        for pair in tokens.windows(2) {
            let literal_zero = matches!(&pair[1], Token::Num(text) if text == "0");
            if literal_zero && pair[0] == Token::Op(Op::Div) {
                return Err(EvalError::DivideByZero);
            }
        }

        let value = fold(&tokens)?;
        state.result = Some(value);
        Ok(value)
    }

    /// Clear the sequence and reset the stored result, atomically
    pub fn all_clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.expr.clear();
        state.result = None;
    }

    /// Snapshot of the current token sequence
    pub fn tokens(&self) -> Vec<Token> {
        self.state.lock().unwrap().expr.snapshot()
    }

    /// Copy of the last stored result, `None` until an evaluation succeeds
    pub fn last_result(&self) -> Option<f64> {
        self.state.lock().unwrap().result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(texts: &[&str]) -> Expression {
        Expression::from_texts(texts.iter().copied())
    }

    #[test]
    fn test_fold_precedence() {
        assert_eq!(fold(expr(&["2", "+", "3", "*", "4"]).tokens()), Ok(14.0));
        assert_eq!(fold(expr(&["2", "*", "3", "+", "4"]).tokens()), Ok(10.0));
    }

    #[test]
    fn test_fold_left_associative() {
        assert_eq!(fold(expr(&["2", "-", "3", "+", "4"]).tokens()), Ok(3.0));
        assert_eq!(fold(expr(&["20", "/", "4", "/", "5"]).tokens()), Ok(1.0));
    }

    #[test]
    fn test_fold_single_number() {
        assert_eq!(fold(expr(&["7.5"]).tokens()), Ok(7.5));
    }

    #[test]
    fn test_fold_rejects_adjacent_operators() {
        assert!(matches!(
            fold(expr(&["2", "+", "+", "3"]).tokens()),
            Err(EvalError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_fold_rejects_adjacent_numbers() {
        assert!(matches!(
            fold(expr(&["2", "3"]).tokens()),
            Err(EvalError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_fold_catches_computed_zero_divisor() {
        // "0.0" is not the literal "0", so only the fold can catch it
        assert_eq!(
            fold(expr(&["5", "/", "0.0"]).tokens()),
            Err(EvalError::DivideByZero)
        );
    }

    #[test]
    fn test_evaluate_stores_result() {
        let calc = Calculator::new();
        calc.set_expression(expr(&["2", "+", "3", "*", "4"]));
        assert_eq!(calc.evaluate(), Ok(14.0));
        assert_eq!(calc.last_result(), Some(14.0));
    }

    #[test]
    fn test_evaluate_failure_leaves_state_unchanged() {
        let calc = Calculator::new();
        calc.set_expression(expr(&["1", "+", "1"]));
        calc.evaluate().unwrap();

        calc.set_expression(expr(&["5", "/", "0"]));
        assert_eq!(calc.evaluate(), Err(EvalError::DivideByZero));
        // Prior result and the failed sequence both survive
        assert_eq!(calc.last_result(), Some(2.0));
        assert_eq!(calc.tokens(), expr(&["5", "/", "0"]).snapshot());
    }

    #[test]
    fn test_zero_dividend_is_fine() {
        let calc = Calculator::new();
        calc.set_expression(expr(&["0", "/", "5"]));
        assert_eq!(calc.evaluate(), Ok(0.0));
    }

    #[test]
    fn test_empty_sequence_is_invalid_boundary() {
        let calc = Calculator::new();
        assert_eq!(calc.evaluate(), Err(EvalError::InvalidBoundary));
    }

    #[test]
    fn test_cloned_handles_share_state() {
        let calc = Calculator::new();
        let other = calc.clone();
        other.push(Token::from_text("42"));
        assert_eq!(calc.tokens().len(), 1);
        assert_eq!(calc.evaluate(), Ok(42.0));
        assert_eq!(other.last_result(), Some(42.0));
    }
}
