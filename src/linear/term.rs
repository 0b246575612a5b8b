//! Linear term interpretation.
//!
//! Turns a parsed arithmetic sub-tree into a coefficient [`Row`] over an
//! ordered variable list. Arithmetic is exact f64 on the coefficients; no
//! simplification is performed beyond the dispatch rules.

use crate::error::{CertResult, MalformedAtomError, NonlinearError, VariableSetMismatchError};
use crate::linear::ops::ArithOp;
use crate::linear::row::Row;
use crate::linear::vars::{is_variable_name, VarList};
use crate::sexpr::SExpr;

/// Interpret a parsed node as a linear term over `vars`.
///
/// Dispatch rules:
/// - an atom in `vars` becomes a unit row at its column;
/// - an atom parsing as f64 becomes a constant-only row;
/// - `(+ a b ...)` sums two or more operands elementwise;
/// - `(- a)` negates, `(- a b)` subtracts;
/// - `(* a b)` requires one constant-only side, `(/ a b)` a constant-only
///   divisor; otherwise the term is nonlinear and interpretation fails.
pub fn interpret_term(expr: &SExpr, vars: &VarList) -> CertResult<Row> {
    match expr {
        SExpr::Atom(token) => interpret_atom(expr, token, vars),
        SExpr::List(items) => {
            let op = expr
                .head()
                .and_then(ArithOp::from_token)
                .ok_or_else(|| MalformedAtomError::new(expr, "cannot interpret as a linear term"))?;
            match op {
                ArithOp::Add => {
                    if items.len() < 3 {
                        return Err(MalformedAtomError::new(expr, "+ needs at least two operands").into());
                    }
                    let mut sum = interpret_term(&items[1], vars)?;
                    for item in &items[2..] {
                        sum = sum + interpret_term(item, vars)?;
                    }
                    Ok(sum)
                }
                ArithOp::Sub => match items.len() {
                    2 => Ok(-interpret_term(&items[1], vars)?),
                    3 => Ok(interpret_term(&items[1], vars)? - interpret_term(&items[2], vars)?),
                    _ => Err(MalformedAtomError::new(expr, "- takes one or two operands").into()),
                },
                ArithOp::Mul => {
                    if items.len() != 3 {
                        return Err(MalformedAtomError::new(expr, "* takes exactly two operands").into());
                    }
                    let lhs = interpret_term(&items[1], vars)?;
                    let rhs = interpret_term(&items[2], vars)?;
                    if lhs.is_constant() {
                        Ok(rhs.scale(lhs.constant_term()))
                    } else if rhs.is_constant() {
                        Ok(lhs.scale(rhs.constant_term()))
                    } else {
                        Err(NonlinearError { expr: expr.clone() }.into())
                    }
                }
                ArithOp::Div => {
                    if items.len() != 3 {
                        return Err(MalformedAtomError::new(expr, "/ takes exactly two operands").into());
                    }
                    let lhs = interpret_term(&items[1], vars)?;
                    let rhs = interpret_term(&items[2], vars)?;
                    if rhs.is_constant() {
                        Ok(lhs.div(rhs.constant_term()))
                    } else {
                        Err(NonlinearError { expr: expr.clone() }.into())
                    }
                }
            }
        }
    }
}

fn interpret_atom(expr: &SExpr, token: &str, vars: &VarList) -> CertResult<Row> {
    if let Some(index) = vars.index_of(token) {
        return Ok(Row::unit(index, vars.len()));
    }
    if let Ok(value) = token.parse::<f64>() {
        return Ok(Row::constant(value, vars.len()));
    }
    if is_variable_name(token) {
        return Err(VariableSetMismatchError {
            declared: vars.names().to_vec(),
            found: vec![token.to_string()],
        }
        .into());
    }
    Err(MalformedAtomError::new(expr, "expected a variable or numeric literal").into())
}
