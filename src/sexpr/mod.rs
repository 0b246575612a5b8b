//! S-expression parsing.
//!
//! Certificates arrive as parenthesized prefix expressions, one balanced
//! expression per formula. This module turns the text into a tagged tree
//! without performing any arithmetic interpretation.

pub mod parser;
pub mod tree;

pub use parser::parse;
pub use tree::SExpr;
