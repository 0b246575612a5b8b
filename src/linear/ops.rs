//! Operator kinds.
//!
//! Leading tokens are resolved into these enums once, so that the
//! interpreter dispatches by exhaustive match instead of repeated string
//! comparison.

use std::fmt;

/// Arithmetic operator inside a linear term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+` (variadic, two or more operands)
    Add,
    /// `-` (unary or binary)
    Sub,
    /// `*` (binary, one side must be constant)
    Mul,
    /// `/` (binary, divisor must be constant)
    Div,
}

impl ArithOp {
    /// Resolve a token into an arithmetic operator.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(ArithOp::Add),
            "-" => Some(ArithOp::Sub),
            "*" => Some(ArithOp::Mul),
            "/" => Some(ArithOp::Div),
            _ => None,
        }
    }
}

/// Relational operator at the head of a constraint atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `=`
    Eq,
}

impl RelOp {
    /// Resolve a token into a relational operator.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "<=" => Some(RelOp::Le),
            ">=" => Some(RelOp::Ge),
            "=" => Some(RelOp::Eq),
            _ => None,
        }
    }
}

/// Boolean connective at the head of a formula node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
}

impl BoolOp {
    /// Resolve a token into a boolean connective.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "and" => Some(BoolOp::And),
            "or" => Some(BoolOp::Or),
            "not" => Some(BoolOp::Not),
            _ => None,
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RelOp::Le => "<=",
            RelOp::Ge => ">=",
            RelOp::Eq => "=",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoolOp::And => "and",
            BoolOp::Or => "or",
            BoolOp::Not => "not",
        };
        write!(f, "{}", s)
    }
}
