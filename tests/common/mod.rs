//! Common test utilities for tapcalc integration tests

pub use tapcalc::{Calculator, EvalError, Expression};

/// Evaluate a textual token sequence on a fresh calculator
#[allow(dead_code)]
pub fn eval_tokens(texts: &[&str]) -> Result<f64, EvalError> {
    let calc = Calculator::new();
    calc.set_expression(Expression::from_texts(texts.iter().copied()));
    calc.evaluate()
}
