//! # Polyshadow - Certificate Shadow Renderer
//!
//! Compiles logical certificates produced by an external solver —
//! conjunctions and disjunctions of linear constraints over named real
//! variables, written as parenthesized prefix expressions — into canonical
//! polytope regions, and approximates the 2D shadows of those regions by
//! repeated linear-program solves.
//!
//! ## Architecture
//!
//! ```text
//! text → Parser → tree → Interpreter → region(s) → Projector → point sequence(s)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use polyshadow::prelude::*;
//!
//! let vars = VarList::numbered(3);
//! let (union, _) = parse_and_interpret(
//!     "(and (<= 0 x1) (<= x1 4) (<= (+ x2 x3) 4) (<= 0 x2) (<= 0 x3))",
//!     Some(&vars),
//! )?;
//!
//! let projector = Projector::new(vec![(0.0, 4.0); 3]);
//! let shadows = projector.project_union(&union, (0, 1));
//! ```
//!
//! ## Semantics caveats
//!
//! Negation is arithmetic, not Boolean: `(not atom)` produces the exact
//! elementwise negative of the atom's row, so `not (<= a b)` keeps the
//! shared boundary `a = b` feasible on both sides. The certificates this
//! crate visualizes are produced under that convention and it is preserved
//! deliberately; see [`linear::constraint`].
//!
//! Shadows are support-function approximations at a fixed angular
//! resolution, not exact projections; see [`project::shadow`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod linear;
pub mod project;
pub mod sexpr;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::error::{
        CertError, CertResult, MalformedAtomError, NonlinearError, ParseError, ParseErrorKind,
        VariableSetMismatchError,
    };
    pub use crate::linear::{
        interpret_formula, interpret_term, normalize_atom, parse_and_interpret, ConstraintRow,
        Region, Row, RowKind, Union, VarList,
    };
    pub use crate::project::{LpSolver, MinilpSolver, Point2, Projector, Shadow};
    pub use crate::sexpr::{parse, SExpr};
}

pub use error::{CertError, CertResult};
pub use linear::{parse_and_interpret, Region, Union, VarList};
pub use project::{Projector, Shadow};
pub use sexpr::{parse, SExpr};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
