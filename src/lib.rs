//! tapcalc - keypad-style arithmetic evaluator
//!
//! # Overview
//!
//! tapcalc is the engine behind a keypad calculator: an expression is built
//! left to right as a sequence of number and operator tokens, then folded
//! into a single value with standard precedence. The interesting parts are
//! the validation rules (numeric boundaries, literal divide-by-zero) and the
//! exclusive-access discipline: all operations on one [`Calculator`] are
//! serialized, so overlapping callers never see a torn expression or a
//! half-written result.
//!
//! # Core Concepts
//!
//! ## Token accumulation
//!
//! ```text
//! # Tokens arrive one at a time as the user types
//! 2        # Expression: [2]
//! 2 +      # Expression: [2, +]
//! 2 + 3    # Expression: [2, +, 3]
//! ```
//!
//! Appending never validates; a malformed sequence is only rejected when it
//! is evaluated.
//!
//! ## Evaluation
//!
//! ```text
//! 2 + 3 * 4    # -> 14 (multiplication binds first)
//! 5 / 0        # -> error: division by zero
//! + 3          # -> error: first or last element not numeric
//! ```
//!
//! # Example
//!
//! ```rust
//! use tapcalc::{Calculator, Expression};
//!
//! let calc = Calculator::new();
//! calc.set_expression(Expression::from_texts(["2", "+", "3", "*", "4"]));
//! assert_eq!(calc.evaluate().unwrap(), 14.0);
//! assert_eq!(calc.last_result(), Some(14.0));
//! ```

pub mod eval;
pub mod expr;
pub mod lexer;

// Re-export commonly used items
pub use eval::{Calculator, EvalError};
pub use expr::{Expression, Op, Token};
pub use lexer::{lex, LexError};

/// Convenience function to evaluate an expression string
pub fn eval(input: &str) -> Result<f64, String> {
    let tokens = lex(input).map_err(|e| e.to_string())?;
    let calc = Calculator::new();
    calc.set_expression(tokens.into_iter().collect());
    calc.evaluate().map_err(|e| e.to_string())
}
