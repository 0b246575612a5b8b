//! Parser for certificate S-expressions.
//!
//! The input is a single balanced parenthesized expression whose tokens use
//! only alphanumerics and `_ < > = . + - * /`. Tokens separated by
//! whitespace become sibling leaves; nesting mirrors the parentheses.

use crate::error::{ParseError, ParseErrorKind};
use crate::sexpr::tree::SExpr;
use std::iter::Peekable;
use std::str::Chars;

/// Characters allowed inside a token besides alphanumerics.
const TOKEN_PUNCT: &str = "_<>=.+-*/";

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || TOKEN_PUNCT.contains(c)
}

/// Parse a string containing exactly one balanced S-expression.
pub fn parse(source: &str) -> Result<SExpr, ParseError> {
    let mut parser = Parser::new(source);
    parser.skip_whitespace();
    let expr = parser.parse_expr()?;
    parser.skip_whitespace();
    if let Some(c) = parser.peek() {
        return Err(parser.error(
            ParseErrorKind::TrailingInput,
            format!("unexpected '{}' after top-level expression", c),
        ));
    }
    Ok(expr)
}

/// A character-level parser over one source string.
struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            offset: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn error(&self, kind: ParseErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::new(kind, self.offset, message)
    }

    fn parse_expr(&mut self) -> Result<SExpr, ParseError> {
        match self.peek() {
            Some('(') => self.parse_list(),
            Some(c) => Err(self.error(
                ParseErrorKind::DisallowedChar,
                format!("expected '(', found '{}'", c),
            )),
            None => Err(self.error(ParseErrorKind::EmptyInput, "empty input")),
        }
    }

    fn parse_list(&mut self) -> Result<SExpr, ParseError> {
        self.advance(); // consume '('
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('(') => items.push(self.parse_list()?),
                Some(')') => {
                    self.advance();
                    return Ok(SExpr::List(items));
                }
                Some(c) if is_token_char(c) => items.push(self.parse_token()),
                Some(c) => {
                    return Err(self.error(
                        ParseErrorKind::DisallowedChar,
                        format!("disallowed character '{}'", c),
                    ))
                }
                None => {
                    return Err(self.error(
                        ParseErrorKind::UnbalancedParen,
                        "unexpected end of input, missing ')'",
                    ))
                }
            }
        }
    }

    fn parse_token(&mut self) -> SExpr {
        let mut token = String::new();
        while matches!(self.peek(), Some(c) if is_token_char(c)) {
            token.push(self.advance().unwrap());
        }
        SExpr::Atom(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_list() {
        let expr = parse("(<= x1 63.0)").unwrap();
        assert_eq!(
            expr,
            SExpr::list(vec![SExpr::atom("<="), SExpr::atom("x1"), SExpr::atom("63.0")])
        );
    }

    #[test]
    fn test_nested() {
        let expr = parse("(and (<= 63.0 x1) (<= (- (/ 133461.0 2440.0)) x3))").unwrap();
        let items = expr.as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_atom(), Some("and"));
        assert_eq!(items[1].head(), Some("<="));
        assert_eq!(items[2].head(), Some("<="));
    }

    #[test]
    fn test_whitespace_insensitive() {
        let a = parse("(+  x1\n\tx2)").unwrap();
        let b = parse("(+ x1 x2)").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(parse("()").unwrap(), SExpr::List(vec![]));
    }

    #[test]
    fn test_roundtrip_is_structural() {
        let source = "(and (<= x1 (+ (* 2.0 x2) 1.5)) (= x3 0.0))";
        let expr = parse(source).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();
        assert_eq!(expr, reparsed);
    }

    #[test]
    fn test_unbalanced() {
        let err = parse("(and (<= x1 2)").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnbalancedParen);
    }

    #[test]
    fn test_disallowed_char() {
        let err = parse("(and [x1])").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DisallowedChar);
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn test_empty_input() {
        let err = parse("   ").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyInput);
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("(<= x1 2) (<= x2 3)").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TrailingInput);
    }

    #[test]
    fn test_bare_atom_rejected() {
        // a formula must be parenthesized
        let err = parse("x1").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DisallowedChar);
    }
}
