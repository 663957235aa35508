//! Failure kinds produced while evaluating an expression.

use thiserror::Error;

/// Evaluation error
///
/// Empty or whitespace-only input is not an error: it evaluates to `0`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Two binary operators with no operand between them
    #[error("Invalid expression: consecutive operators {first}{second}")]
    ConsecutiveOperators { first: char, second: char },

    /// A run of digits and dots that is not a number (e.g. `.` or `1.2.3`)
    #[error("Invalid number format: {0}")]
    InvalidNumberFormat(String),

    /// A `)` without an open `(`, or an unclosed `(`
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Unknown character in expression: {0}")]
    UnknownCharacter(char),

    /// Operator application with an empty operator stack
    #[error("Invalid expression: missing operator")]
    MissingOperator,

    /// Operator application with fewer than two operands
    #[error("Invalid expression: not enough values for operation")]
    InsufficientOperands,

    /// Right-hand side of `/` is zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Operand stack did not end with exactly one value
    #[error("Invalid expression")]
    InvalidExpression,
}

impl EvalError {
    /// The input was well formed but its value is undefined.
    pub fn is_undefined_result(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// The input itself is not a valid expression.
    pub fn is_malformed(&self) -> bool {
        !self.is_undefined_result()
    }
}

/// Result type for expression evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
