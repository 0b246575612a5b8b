//! Dense coefficient rows.
//!
//! A row of length `n_vars + 1` encodes the affine form
//! `c_1*x_1 + ... + c_n*x_n + k`: the first `n_vars` entries are
//! per-variable coefficients in variable-list order, the last entry is the
//! constant term. Rows are linear by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A dense coefficient row over an ordered variable list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: Vec<f64>,
}

impl Row {
    /// Create a zero row for `n_vars` variables.
    pub fn zero(n_vars: usize) -> Self {
        Self {
            values: vec![0.0; n_vars + 1],
        }
    }

    /// Create a unit row: coefficient 1 for the variable at `index`.
    pub fn unit(index: usize, n_vars: usize) -> Self {
        assert!(index < n_vars);
        let mut row = Self::zero(n_vars);
        row.values[index] = 1.0;
        row
    }

    /// Create a constant-only row.
    pub fn constant(value: f64, n_vars: usize) -> Self {
        let mut row = Self::zero(n_vars);
        row.values[n_vars] = value;
        row
    }

    /// Create a row from raw values (coefficients followed by the constant).
    pub fn from_values(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "a row holds at least the constant slot");
        Self { values }
    }

    /// Total length, `n_vars + 1`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Number of variable slots.
    pub fn n_vars(&self) -> usize {
        self.values.len() - 1
    }

    /// A row always holds at least the constant slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Per-variable coefficients.
    pub fn coeffs(&self) -> &[f64] {
        &self.values[..self.values.len() - 1]
    }

    /// The constant term.
    pub fn constant_term(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Replace the constant term.
    pub fn set_constant(&mut self, value: f64) {
        let last = self.values.len() - 1;
        self.values[last] = value;
    }

    /// All values, coefficients followed by the constant.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Check if every variable coefficient is zero.
    pub fn is_constant(&self) -> bool {
        self.coeffs().iter().all(|&c| c == 0.0)
    }

    /// Scale every entry by a constant factor.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            values: self.values.iter().map(|&v| v * factor).collect(),
        }
    }

    /// Divide every entry by a constant divisor.
    pub fn div(&self, divisor: f64) -> Self {
        Self {
            values: self.values.iter().map(|&v| v / divisor).collect(),
        }
    }

    /// Evaluate `coeffs · point + constant`.
    pub fn dot(&self, point: &[f64]) -> f64 {
        assert_eq!(point.len(), self.n_vars());
        self.coeffs()
            .iter()
            .zip(point)
            .map(|(&c, &x)| c * x)
            .sum::<f64>()
            + self.constant_term()
    }
}

impl Add for Row {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        assert_eq!(self.values.len(), other.values.len());
        Self {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(&a, &b)| a + b)
                .collect(),
        }
    }
}

impl Sub for Row {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        assert_eq!(self.values.len(), other.values.len());
        Self {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(&a, &b)| a - b)
                .collect(),
        }
    }
}

impl Neg for Row {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (i, &c) in self.coeffs().iter().enumerate() {
            if c != 0.0 {
                if c == 1.0 {
                    parts.push(format!("x{}", i + 1));
                } else if c == -1.0 {
                    parts.push(format!("-x{}", i + 1));
                } else {
                    parts.push(format!("{}*x{}", c, i + 1));
                }
            }
        }
        let k = self.constant_term();
        if k != 0.0 || parts.is_empty() {
            parts.push(format!("{}", k));
        }
        write!(f, "{}", parts.join(" + ").replace("+ -", "- "))
    }
}
