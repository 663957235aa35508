//! Single-pass shunting-yard evaluator.
//!
//! Scanning and evaluation are fused: literals go straight onto the operand
//! stack and operators are applied as soon as precedence allows, so no token
//! list or syntax tree is ever built.

use super::error::{EvalError, EvalResult};
use super::token::{is_literal_char, Operator, Pending};
use tracing::trace;

/// Operand and operator stacks for one evaluation
#[derive(Debug, Default)]
struct EvalContext {
    operands: Vec<f64>,
    operators: Vec<Pending>,
}

impl EvalContext {
    fn run(&mut self, source: &str) -> EvalResult<f64> {
        let mut chars = source.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if is_literal_char(c) {
                let mut end = start + c.len_utf8();
                while let Some(&(idx, next)) = chars.peek() {
                    if !is_literal_char(next) {
                        break;
                    }
                    end = idx + next.len_utf8();
                    chars.next();
                }
                self.push_literal(&source[start..end])?;
                continue;
            }

            match c {
                '(' => self.operators.push(Pending::OpenParen),
                ')' => self.close_paren()?,
                _ => match Operator::from_char(c) {
                    Some(op) => self.push_operator(op)?,
                    None => return Err(EvalError::UnknownCharacter(c)),
                },
            }
        }

        self.finish()
    }

    fn push_literal(&mut self, literal: &str) -> EvalResult<()> {
        let value = literal
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidNumberFormat(literal.to_string()))?;
        self.operands.push(value);
        Ok(())
    }

    /// Unwind to the matching `(` and discard it
    fn close_paren(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.last() {
                Some(Pending::OpenParen) => {
                    self.operators.pop();
                    return Ok(());
                }
                Some(Pending::Op(_)) => self.apply_top()?,
                None => return Err(EvalError::MismatchedParentheses),
            }
        }
    }

    /// Resolve pending operators that bind at least as tightly, then push.
    /// The `>=` makes equal precedence resolve left to right.
    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        while let Some(&Pending::Op(top)) = self.operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.apply_top()?;
        }
        self.operators.push(Pending::Op(op));
        Ok(())
    }

    fn finish(&mut self) -> EvalResult<f64> {
        while let Some(&top) = self.operators.last() {
            match top {
                Pending::OpenParen => return Err(EvalError::MismatchedParentheses),
                Pending::Op(_) => self.apply_top()?,
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::InvalidExpression),
        }
    }

    /// Pop the top operator and combine the top two operands with it
    fn apply_top(&mut self) -> EvalResult<()> {
        if self.operators.is_empty() {
            return Err(EvalError::MissingOperator);
        }
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::InsufficientOperands);
        };

        let op = match self.operators.pop() {
            Some(Pending::Op(op)) => op,
            Some(Pending::OpenParen) => return Err(EvalError::MismatchedParentheses),
            None => return Err(EvalError::MissingOperator),
        };

        if op == Operator::Div && right == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        self.operands.push(op.apply(left, right));
        Ok(())
    }
}

/// Reject two binary operators side by side, e.g. `3++4`.
///
/// Only the four binary operators are inspected; parentheses are not.
fn check_adjacent_operators(source: &str) -> EvalResult<()> {
    let pairs = source.chars().zip(source.chars().skip(1));
    for (first, second) in pairs {
        if Operator::from_char(first).is_some() && Operator::from_char(second).is_some() {
            return Err(EvalError::ConsecutiveOperators { first, second });
        }
    }
    Ok(())
}

/// Evaluate an arithmetic expression of numbers, `+ - * /` and parentheses.
///
/// Whitespace is ignored anywhere in the input. Empty or whitespace-only
/// input evaluates to `0`.
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let source: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    if source.is_empty() {
        trace!(expression, "empty expression evaluates to zero");
        return Ok(0.0);
    }

    let outcome =
        check_adjacent_operators(&source).and_then(|()| EvalContext::default().run(&source));

    match &outcome {
        Ok(value) => trace!(expression, value = *value, "expression evaluated"),
        Err(e) => trace!(expression, error = %e, "expression rejected"),
    }

    outcome
}
