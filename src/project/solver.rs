//! LP solver seam.
//!
//! The projector only needs one operation: maximize a linear objective over
//! a region intersected with box bounds. The trait keeps the solver a black
//! box so tests and callers can substitute their own; the default backend
//! is the pure-Rust `minilp` simplex implementation.

use crate::linear::{Region, Row};
use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

/// A black-box linear-program solver.
pub trait LpSolver {
    /// Maximize `objective · x` subject to the region's inequality rows
    /// (`>= 0` form), equality rows (`= 0` form) and per-variable box
    /// bounds. Returns the optimal point, or `None` when the program is
    /// infeasible or unbounded in this direction — the two are deliberately
    /// indistinguishable to the caller.
    fn maximize(&self, objective: &[f64], region: &Region, bounds: &[(f64, f64)])
        -> Option<Vec<f64>>;
}

/// The default solver, backed by `minilp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinilpSolver;

/// Outcome of resolving a row whose variable coefficients are all zero.
enum ConstantRow {
    TriviallyTrue,
    TriviallyFalse,
}

fn resolve_constant_row(row: &Row, op: ComparisonOp) -> ConstantRow {
    let k = row.constant_term();
    let holds = match op {
        ComparisonOp::Ge => k >= 0.0,
        ComparisonOp::Eq => k == 0.0,
        ComparisonOp::Le => k <= 0.0,
    };
    if holds {
        ConstantRow::TriviallyTrue
    } else {
        ConstantRow::TriviallyFalse
    }
}

impl LpSolver for MinilpSolver {
    fn maximize(
        &self,
        objective: &[f64],
        region: &Region,
        bounds: &[(f64, f64)],
    ) -> Option<Vec<f64>> {
        let n = bounds.len();
        debug_assert_eq!(objective.len(), n);

        let mut problem = Problem::new(OptimizationDirection::Maximize);
        let vars: Vec<minilp::Variable> = bounds
            .iter()
            .zip(objective)
            .map(|(&(lower, upper), &coeff)| problem.add_var(coeff, (lower, upper)))
            .collect();

        let row_groups = [
            (region.inequalities(), ComparisonOp::Ge),
            (region.equalities(), ComparisonOp::Eq),
        ];
        for (rows, op) in row_groups {
            for row in rows {
                debug_assert_eq!(row.len(), n + 1, "row width must match the bounds");
                // minilp has no use for a row without variables; resolve it here
                if row.is_constant() {
                    match resolve_constant_row(row, op) {
                        ConstantRow::TriviallyTrue => continue,
                        ConstantRow::TriviallyFalse => return None,
                    }
                }
                let mut terms = LinearExpr::empty();
                for (&var, &coeff) in vars.iter().zip(row.coeffs()) {
                    if coeff != 0.0 {
                        terms.add(var, coeff);
                    }
                }
                // row · [x; 1] (op) 0  ⇔  coeffs · x (op) -constant
                problem.add_constraint(terms, op, -row.constant_term());
            }
        }

        // Error::Infeasible and Error::Unbounded are both skips
        let solution = problem.solve().ok()?;
        Some(vars.iter().map(|&var| solution[var]).collect())
    }
}
