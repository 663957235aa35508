//! Symbols recognised by the scanner and the fixed operator table.

use std::fmt;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Classify a character as one of the four binary operators
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength used when deciding whether a pending operator
    /// resolves before a new one is pushed. Higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Combine two operands. Division by zero is checked by the caller.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Entry on the operator stack.
///
/// `)` never appears here: it only triggers unwinding down to the
/// matching `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Op(Operator),
    OpenParen,
}

/// True for characters that belong to a numeric literal run
pub(crate) fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
