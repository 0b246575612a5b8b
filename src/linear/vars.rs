//! Variable naming and discovery.
//!
//! Variables are named by a fixed prefix plus a positive integer (`x1`,
//! `x2`, ...). A session fixes one ordered variable list; the column index
//! of every row is the variable's position in that list. Comparisons across
//! formulas are only meaningful when all of them share the same list.

use crate::sexpr::SExpr;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Prefix of every variable token.
pub const VAR_PREFIX: &str = "x";

/// Extract the integer suffix of a variable token, if it is one.
pub fn variable_index(token: &str) -> Option<usize> {
    let digits = token.strip_prefix(VAR_PREFIX)?;
    match digits.parse::<usize>() {
        Ok(n) if n >= 1 && digits.chars().all(|c| c.is_ascii_digit()) => Some(n),
        _ => None,
    }
}

/// Check whether a token names a variable.
pub fn is_variable_name(token: &str) -> bool {
    variable_index(token).is_some()
}

/// Collect every variable name mentioned anywhere in a tree.
///
/// The result is a set with no ordering guarantee. Callers comparing two or
/// more formulas must supply an explicit ordered [`VarList`] instead;
/// discovery-based ordering is only valid for single-formula use.
pub fn discover_variables(expr: &SExpr) -> HashSet<String> {
    let mut found = HashSet::new();
    collect_variables(expr, &mut found);
    found
}

fn collect_variables(expr: &SExpr, found: &mut HashSet<String>) {
    match expr {
        SExpr::Atom(token) => {
            if is_variable_name(token) {
                found.insert(token.clone());
            }
        }
        SExpr::List(items) => {
            for item in items {
                collect_variables(item, found);
            }
        }
    }
}

/// An ordered variable list fixing the column layout of all rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarList {
    names: Vec<String>,
}

impl VarList {
    /// Create a list from explicit names, in column order.
    pub fn new(names: Vec<String>) -> Self {
        let unique: HashSet<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(unique.len(), names.len(), "variable names must be unique");
        Self { names }
    }

    /// The list `x1, x2, ..., xn`.
    pub fn numbered(n: usize) -> Self {
        Self::new((1..=n).map(|i| format!("{}{}", VAR_PREFIX, i)).collect())
    }

    /// Build a list from the variables discovered in one formula, ordered by
    /// their integer suffix. Only valid for single-formula use.
    pub fn from_discovered(expr: &SExpr) -> Self {
        let mut names: Vec<String> = discover_variables(expr).into_iter().collect();
        names.sort_by_key(|name| variable_index(name).unwrap_or(usize::MAX));
        Self { names }
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Variable names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Column index of a variable name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexpr::parse;

    #[test]
    fn test_variable_pattern() {
        assert_eq!(variable_index("x1"), Some(1));
        assert_eq!(variable_index("x13"), Some(13));
        assert!(!is_variable_name("x0"));
        assert!(!is_variable_name("x"));
        assert!(!is_variable_name("y1"));
        assert!(!is_variable_name("x1.5"));
        assert!(!is_variable_name("1.0"));
        assert!(!is_variable_name("x-1"));
    }

    #[test]
    fn test_discover() {
        let expr = parse("(and (<= x3 (+ x1 2.0)) (= x7 0.0))").unwrap();
        let found = discover_variables(&expr);
        let expected: HashSet<String> =
            ["x1", "x3", "x7"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_from_discovered_order() {
        let expr = parse("(and (<= x12 0.0) (<= x2 x5))").unwrap();
        let vars = VarList::from_discovered(&expr);
        assert_eq!(vars.names(), &["x2", "x5", "x12"]);
    }

    #[test]
    fn test_index_of() {
        let vars = VarList::numbered(3);
        assert_eq!(vars.names(), &["x1", "x2", "x3"]);
        assert_eq!(vars.index_of("x2"), Some(1));
        assert_eq!(vars.index_of("x4"), None);
    }

    #[test]
    #[should_panic(expected = "unique")]
    fn test_duplicate_names_rejected() {
        VarList::new(vec!["x1".to_string(), "x1".to_string()]);
    }
}
