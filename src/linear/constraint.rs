//! Constraint normalization.
//!
//! A relational atom becomes one canonical row: inequalities are brought
//! into the form `row · [x; 1] >= 0`, equalities into `row · [x; 1] = 0`.
//!
//! Negation convention: `(not atom)` is the exact elementwise arithmetic
//! negative of the un-negated row, with the same constraint kind. For
//! inequalities this under-approximates Boolean negation at the shared
//! boundary (`not (<= a b)` keeps the boundary points `a = b` feasible on
//! both sides). The certificates being visualized are produced under this
//! convention, so it is preserved rather than corrected; downstream
//! projection correctness assumes it.

use crate::error::{CertResult, MalformedAtomError};
use crate::linear::ops::{BoolOp, RelOp};
use crate::linear::row::Row;
use crate::linear::term::interpret_term;
use crate::linear::vars::VarList;
use crate::sexpr::SExpr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of canonical constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// `row · [x; 1] >= 0`
    Inequality,
    /// `row · [x; 1] = 0`
    Equality,
}

/// A normalized constraint: one row plus its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRow {
    /// The coefficient row
    pub row: Row,
    /// Whether the row is an inequality or an equality
    pub kind: RowKind,
}

impl fmt::Display for ConstraintRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RowKind::Inequality => write!(f, "{} >= 0", self.row),
            RowKind::Equality => write!(f, "{} = 0", self.row),
        }
    }
}

/// Normalize a relational atom `(op lhs rhs)` or a `not`-wrapped one.
///
/// - `<=` yields `interpret(rhs) - interpret(lhs)` as an inequality;
/// - `>=` is rewritten to `<=` by swapping the operands first;
/// - `=` yields `interpret(lhs) - interpret(rhs)` as an equality;
/// - `(not atom)` yields the arithmetic negation of `normalize(atom)`.
pub fn normalize_atom(expr: &SExpr, vars: &VarList) -> CertResult<ConstraintRow> {
    let items = expr
        .as_list()
        .ok_or_else(|| MalformedAtomError::new(expr, "expected a relational atom"))?;

    if expr.head().and_then(BoolOp::from_token) == Some(BoolOp::Not) {
        if items.len() != 2 {
            return Err(MalformedAtomError::new(expr, "not takes exactly one atom").into());
        }
        let inner = normalize_atom(&items[1], vars)?;
        return Ok(ConstraintRow {
            row: -inner.row,
            kind: inner.kind,
        });
    }

    let op = expr
        .head()
        .and_then(RelOp::from_token)
        .ok_or_else(|| MalformedAtomError::new(expr, "unsupported relational shape"))?;
    if items.len() != 3 {
        return Err(MalformedAtomError::new(expr, "relation takes exactly two operands").into());
    }

    // The >= case swaps operands before interpreting; one historical variant
    // of this normalizer omitted the swap (see the regression test).
    let (lhs, rhs, kind) = match op {
        RelOp::Le => (&items[1], &items[2], RowKind::Inequality),
        RelOp::Ge => (&items[2], &items[1], RowKind::Inequality),
        RelOp::Eq => (&items[2], &items[1], RowKind::Equality),
    };
    let row = interpret_term(rhs, vars)? - interpret_term(lhs, vars)?;
    Ok(ConstraintRow { row, kind })
}
