//! Arithmetic expression evaluation.
//!
//! Supports:
//! - Numbers (digits with an optional fractional part, e.g. `3`, `2.5`, `.5`)
//! - Binary operators (+, -, *, /) with the usual precedence
//! - Parentheses for grouping
//!
//! There are no variables, functions, unary signs or exponents.

pub mod error;
pub mod evaluator;
pub mod token;


pub use error::{EvalError, EvalResult};
pub use evaluator::evaluate;
pub use token::Operator;
