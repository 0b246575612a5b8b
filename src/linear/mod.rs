//! Symbolic-to-numeric compilation of certificate formulas.
//!
//! This module turns parsed S-expression trees into canonical numeric form:
//! - linear terms become dense coefficient rows,
//! - relational atoms become normalized inequality/equality rows,
//! - boolean structure becomes one convex region per conjunction, or an
//!   ordered union of regions for a top-level disjunction.

pub mod constraint;
pub mod formula;
pub mod ops;
pub mod row;
pub mod term;
pub mod vars;

pub use constraint::{normalize_atom, ConstraintRow, RowKind};
pub use formula::{interpret_formula, parse_and_interpret, Region, Union};
pub use ops::{ArithOp, BoolOp, RelOp};
pub use row::Row;
pub use term::interpret_term;
pub use vars::{discover_variables, is_variable_name, VarList, VAR_PREFIX};
