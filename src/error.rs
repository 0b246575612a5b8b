//! Error types for certificate compilation.
//!
//! Each phase of the pipeline has its own error struct carrying the
//! offending input, plus a top-level enum that all of them convert into.
//! Parse and interpretation errors are always fatal to the one formula
//! being processed; there is no silent default substitution.

use crate::sexpr::SExpr;
use std::fmt;
use thiserror::Error;

/// Top-level error type for certificate compilation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CertError {
    /// Error while parsing the S-expression text
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A product or quotient of two non-constant terms
    #[error("nonlinear expression: {0}")]
    Nonlinear(#[from] NonlinearError),

    /// An unsupported relational or boolean shape
    #[error("malformed atom: {0}")]
    MalformedAtom(#[from] MalformedAtomError),

    /// The formula mentions variables outside the declared list
    #[error("variable set mismatch: {0}")]
    VariableSetMismatch(#[from] VariableSetMismatchError),
}

/// Error during S-expression parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The error message
    pub message: String,
    /// Byte offset into the source text
    pub offset: usize,
    /// The kind of parse error
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset,
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.offset)
    }
}

/// Kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Unbalanced parentheses (missing `)` or stray `)`)
    UnbalancedParen,
    /// A character outside the allowed token alphabet
    DisallowedChar,
    /// The input contains no expression
    EmptyInput,
    /// Text remains after the one top-level expression
    TrailingInput,
}

/// A term mixed two non-constant operands in a product or quotient.
///
/// Rows are linear by construction; such a term has no representation.
#[derive(Error, Debug, Clone, PartialEq)]
pub struct NonlinearError {
    /// The offending sub-expression
    pub expr: SExpr,
}

impl fmt::Display for NonlinearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a linear term", self.expr)
    }
}

/// A relational or boolean expression whose shape is not supported.
#[derive(Error, Debug, Clone, PartialEq)]
pub struct MalformedAtomError {
    /// The error message
    pub message: String,
    /// The offending sub-expression
    pub expr: SExpr,
}

impl MalformedAtomError {
    pub(crate) fn new(expr: &SExpr, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expr: expr.clone(),
        }
    }
}

impl fmt::Display for MalformedAtomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.expr)
    }
}

/// The variable set found in a formula differs from the declared list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct VariableSetMismatchError {
    /// Variable names declared by the caller, in declaration order
    pub declared: Vec<String>,
    /// Variable names found in the formula, sorted
    pub found: Vec<String>,
}

impl fmt::Display for VariableSetMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "formula variables [{}] do not match declared variables [{}]",
            self.found.join(", "),
            self.declared.join(", ")
        )
    }
}

/// Result type using CertError.
pub type CertResult<T> = Result<T, CertError>;
