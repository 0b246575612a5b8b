//! Formula interpretation.
//!
//! Walks the boolean structure of a parsed certificate and assembles
//! canonical regions. A conjunction becomes one [`Region`]; a top-level
//! disjunction becomes a [`Union`] of regions, in source order. Row order
//! within a region is deterministic: pre-order, left to right.

use crate::error::{CertResult, MalformedAtomError, VariableSetMismatchError};
use crate::linear::constraint::{normalize_atom, RowKind};
use crate::linear::ops::BoolOp;
use crate::linear::row::Row;
use crate::linear::vars::{discover_variables, VarList};
use crate::sexpr::{parse, SExpr};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One conjunction's feasible set: inequality and equality row matrices.
///
/// Inequality rows encode `row · [x; 1] >= 0`, equality rows
/// `row · [x; 1] = 0`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    inequalities: Vec<Row>,
    equalities: Vec<Row>,
}

impl Region {
    /// Build a region from canonical rows.
    pub fn new(inequalities: Vec<Row>, equalities: Vec<Row>) -> Self {
        Self {
            inequalities,
            equalities,
        }
    }

    /// Inequality rows (`>= 0` form), in traversal order.
    pub fn inequalities(&self) -> &[Row] {
        &self.inequalities
    }

    /// Equality rows (`= 0` form), in traversal order.
    pub fn equalities(&self) -> &[Row] {
        &self.equalities
    }

    /// Total number of rows.
    pub fn len(&self) -> usize {
        self.inequalities.len() + self.equalities.len()
    }

    /// Check if the region carries no constraints at all.
    pub fn is_empty(&self) -> bool {
        self.inequalities.is_empty() && self.equalities.is_empty()
    }
}

/// An ordered, non-empty sequence of regions representing a disjunction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Union {
    regions: Vec<Region>,
}

impl Union {
    fn new(regions: Vec<Region>) -> Self {
        assert!(!regions.is_empty(), "a union holds at least one region");
        Self { regions }
    }

    /// The regions, in source order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// A union always holds at least one region.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a Union {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

fn head_op(expr: &SExpr) -> Option<BoolOp> {
    expr.head().and_then(BoolOp::from_token)
}

/// Interpret a parsed formula rooted at `and`, `or` or `not`.
///
/// A bare relational atom (possibly `not`-wrapped) is accepted as a
/// degenerate one-constraint conjunction. Deeper mixed `and`/`or` nesting
/// than one `or` level over conjunctions is unsupported and fails rather
/// than silently mis-interpreting.
pub fn interpret_formula(expr: &SExpr, vars: &VarList) -> CertResult<Union> {
    let union = match head_op(expr) {
        Some(BoolOp::Or) => {
            let items = expr.as_list().expect("or head implies a list");
            let mut regions = Vec::new();
            for child in &items[1..] {
                if head_op(child) == Some(BoolOp::Or) {
                    // one level of or-in-or flattening
                    let inner = child.as_list().expect("or head implies a list");
                    for grandchild in &inner[1..] {
                        regions.push(interpret_conjunction(grandchild, vars)?);
                    }
                } else {
                    regions.push(interpret_conjunction(child, vars)?);
                }
            }
            if regions.is_empty() {
                return Err(MalformedAtomError::new(expr, "or needs at least one disjunct").into());
            }
            Union::new(regions)
        }
        Some(BoolOp::Not) => interpret_negation(expr, vars)?,
        _ => Union::new(vec![interpret_conjunction(expr, vars)?]),
    };
    debug!(
        "interpreted formula into {} region(s), {} row(s) total",
        union.len(),
        union.regions().iter().map(Region::len).sum::<usize>()
    );
    Ok(union)
}

/// Interpret a conjunction (or a single atom) into one region.
fn interpret_conjunction(expr: &SExpr, vars: &VarList) -> CertResult<Region> {
    let mut inequalities = Vec::new();
    let mut equalities = Vec::new();
    collect_conjuncts(expr, vars, &mut inequalities, &mut equalities)?;
    Ok(Region::new(inequalities, equalities))
}

fn collect_conjuncts(
    expr: &SExpr,
    vars: &VarList,
    inequalities: &mut Vec<Row>,
    equalities: &mut Vec<Row>,
) -> CertResult<()> {
    match head_op(expr) {
        Some(BoolOp::And) => {
            let items = expr.as_list().expect("and head implies a list");
            for child in &items[1..] {
                match head_op(child) {
                    // nested `and` flattens by associativity
                    Some(BoolOp::And) => collect_conjuncts(child, vars, inequalities, equalities)?,
                    Some(BoolOp::Or) => {
                        return Err(MalformedAtomError::new(
                            child,
                            "or nested inside and is unsupported",
                        )
                        .into())
                    }
                    _ => push_atom(child, vars, inequalities, equalities)?,
                }
            }
            Ok(())
        }
        Some(BoolOp::Or) => {
            Err(MalformedAtomError::new(expr, "or is only supported at the top level").into())
        }
        _ => push_atom(expr, vars, inequalities, equalities),
    }
}

fn push_atom(
    expr: &SExpr,
    vars: &VarList,
    inequalities: &mut Vec<Row>,
    equalities: &mut Vec<Row>,
) -> CertResult<()> {
    let constraint = normalize_atom(expr, vars)?;
    match constraint.kind {
        RowKind::Inequality => inequalities.push(constraint.row),
        RowKind::Equality => equalities.push(constraint.row),
    }
    Ok(())
}

/// Interpret a top-level negation by pushing `not` to the leaves.
///
/// `(not atom)` yields one single-row region; `(not (and a b ...))` becomes
/// the union of the negated leaves by De Morgan. Anything deeper fails.
fn interpret_negation(expr: &SExpr, vars: &VarList) -> CertResult<Union> {
    let items = expr.as_list().expect("not head implies a list");
    if items.len() != 2 {
        return Err(MalformedAtomError::new(expr, "not takes exactly one operand").into());
    }
    let child = &items[1];
    match head_op(child) {
        Some(BoolOp::And) => {
            let conjuncts = child.as_list().expect("and head implies a list");
            let mut regions = Vec::new();
            for conjunct in &conjuncts[1..] {
                if head_op(conjunct) == Some(BoolOp::And) || head_op(conjunct) == Some(BoolOp::Or) {
                    return Err(MalformedAtomError::new(
                        expr,
                        "cannot distribute not over nested connectives",
                    )
                    .into());
                }
                let constraint = normalize_atom(conjunct, vars)?;
                let negated = -constraint.row;
                let region = match constraint.kind {
                    RowKind::Inequality => Region::new(vec![negated], Vec::new()),
                    RowKind::Equality => Region::new(Vec::new(), vec![negated]),
                };
                regions.push(region);
            }
            if regions.is_empty() {
                return Err(MalformedAtomError::new(expr, "not over an empty and").into());
            }
            Ok(Union::new(regions))
        }
        Some(BoolOp::Or) => {
            Err(MalformedAtomError::new(expr, "cannot distribute not over or").into())
        }
        _ => {
            // single (possibly nested-not) relational atom
            Ok(Union::new(vec![interpret_conjunction(expr, vars)?]))
        }
    }
}

/// Parse and interpret one formula in a single call.
///
/// With `Some(vars)`, the formula's variable set must equal the declared
/// list exactly; this is the contract for comparing several formulas under
/// one column layout. With `None`, the variables are discovered from the
/// formula and ordered by their integer suffix — valid for single-formula
/// use only.
pub fn parse_and_interpret(source: &str, vars: Option<&VarList>) -> CertResult<(Union, VarList)> {
    let tree = parse(source)?;
    let vars = match vars {
        Some(declared) => {
            let found = discover_variables(&tree);
            let declared_set: HashSet<String> = declared.names().iter().cloned().collect();
            if found != declared_set {
                let mut found: Vec<String> = found.into_iter().collect();
                found.sort();
                return Err(VariableSetMismatchError {
                    declared: declared.names().to_vec(),
                    found,
                }
                .into());
            }
            declared.clone()
        }
        None => VarList::from_discovered(&tree),
    };
    let union = interpret_formula(&tree, &vars)?;
    Ok((union, vars))
}
