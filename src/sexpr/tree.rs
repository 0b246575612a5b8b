//! Tagged S-expression trees.
//!
//! A parsed certificate is a heterogeneous tree: leaves are bare tokens
//! (operators, variable names, numeric literals) and interior nodes mirror
//! the parenthesis nesting of the input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in a parsed S-expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SExpr {
    /// A bare token: an operator, a variable name, or a numeric literal.
    Atom(String),
    /// A parenthesized sequence of sub-expressions.
    List(Vec<SExpr>),
}

impl SExpr {
    /// Create an atom node.
    pub fn atom(token: impl Into<String>) -> Self {
        SExpr::Atom(token.into())
    }

    /// Create a list node.
    pub fn list(items: Vec<SExpr>) -> Self {
        SExpr::List(items)
    }

    /// Get the token if this node is an atom.
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            SExpr::Atom(token) => Some(token),
            SExpr::List(_) => None,
        }
    }

    /// Get the children if this node is a list.
    pub fn as_list(&self) -> Option<&[SExpr]> {
        match self {
            SExpr::Atom(_) => None,
            SExpr::List(items) => Some(items),
        }
    }

    /// Leading atom of a list node, used for operator dispatch.
    pub fn head(&self) -> Option<&str> {
        self.as_list()?.first()?.as_atom()
    }

    /// Check if this node is an atom.
    pub fn is_atom(&self) -> bool {
        matches!(self, SExpr::Atom(_))
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SExpr::Atom(token) => write!(f, "{}", token),
            SExpr::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}
