//! Recursive-descent parser for polynomial literals such as `x^2*y - 3/2*z + 1`.

use std::iter::Peekable;
use std::vec::IntoIter;

use noether_core::errors::{AlgebraError, ErrorInfo};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::polynomial::Polynomial;
use crate::ring::PolyRing;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(BigInt),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LeftParenthesis,
    RightParenthesis,
}

/// True for names accepted as ring variables.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Largest total degree, and largest exponent, a parsed polynomial may use.
pub const MAX_DEGREE: u32 = 1_024;

fn degree_error(text: &str, degree: u64) -> AlgebraError {
    AlgebraError::InvalidExponent(
        ErrorInfo::new("exponent-overflow", "polynomial degree exceeds the parser limit")
            .with_context("input", text)
            .with_context("degree", degree.to_string())
            .with_hint(format!("keep exponents and total degrees at or below {MAX_DEGREE}")),
    )
}

fn syntax_error(text: &str, message: impl Into<String>) -> AlgebraError {
    AlgebraError::Parse(ErrorInfo::new("polynomial-syntax", message).with_context("input", text))
}

fn tokens(text: &str) -> Result<Vec<Token>, AlgebraError> {
    let mut out = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some((pos, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LeftParenthesis,
            ')' => Token::RightParenthesis,
            '0'..='9' => {
                let mut digits = c.to_string();
                while let Some((_, d)) = chars.next_if(|(_, d)| d.is_ascii_digit()) {
                    digits.push(d);
                }
                let value = digits
                    .parse::<BigInt>()
                    .map_err(|err| syntax_error(text, err.to_string()))?;
                Token::Number(value)
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = c.to_string();
                while let Some((_, d)) =
                    chars.next_if(|(_, d)| d.is_ascii_alphanumeric() || *d == '_')
                {
                    name.push(d);
                }
                Token::Ident(name)
            }
            other => {
                return Err(AlgebraError::Parse(
                    ErrorInfo::new("invalid-character", "unexpected character in polynomial")
                        .with_context("input", text)
                        .with_context("character", other.to_string())
                        .with_context("position", pos.to_string()),
                ))
            }
        };
        out.push(token);
    }
    Ok(out)
}

struct PolyParser<'a> {
    ring: &'a PolyRing,
    text: &'a str,
    tokens: Peekable<IntoIter<Token>>,
}

impl<'a> PolyParser<'a> {
    fn expr(&mut self) -> Result<Polynomial, AlgebraError> {
        let mut acc = self.term()?;
        loop {
            if self.tokens.next_if_eq(&Token::Plus).is_some() {
                acc = acc.add(&self.term()?);
            } else if self.tokens.next_if_eq(&Token::Minus).is_some() {
                acc = acc.sub(&self.term()?);
            } else {
                return Ok(acc);
            }
        }
    }

    fn term(&mut self) -> Result<Polynomial, AlgebraError> {
        let mut acc = self.factor()?;
        loop {
            if self.tokens.next_if_eq(&Token::Star).is_some() {
                let rhs = self.factor()?;
                self.check_degree(u64::from(acc.total_degree()) + u64::from(rhs.total_degree()))?;
                acc = acc.mul(&rhs);
            } else if self.tokens.next_if_eq(&Token::Slash).is_some() {
                let divisor = self.factor()?;
                let value = divisor
                    .constant_value()
                    .filter(|value| !value.is_zero())
                    .ok_or_else(|| {
                        syntax_error(self.text, "division is only defined by non-zero constants")
                    })?;
                acc = acc.scale(&value.recip());
            } else {
                return Ok(acc);
            }
        }
    }

    fn factor(&mut self) -> Result<Polynomial, AlgebraError> {
        if self.tokens.next_if_eq(&Token::Minus).is_some() {
            return Ok(self.factor()?.neg());
        }
        if self.tokens.next_if_eq(&Token::Plus).is_some() {
            return self.factor();
        }
        let base = self.atom()?;
        if self.tokens.next_if_eq(&Token::Caret).is_some() {
            let negative = self.tokens.next_if_eq(&Token::Minus).is_some();
            let exponent = match self.tokens.next() {
                Some(Token::Number(value)) => value,
                _ => return Err(syntax_error(self.text, "expected an integer exponent")),
            };
            if negative && !exponent.is_zero() {
                return Err(AlgebraError::InvalidExponent(
                    ErrorInfo::new("negative-exponent", "polynomial exponents must be non-negative")
                        .with_context("input", self.text)
                        .with_context("exponent", format!("-{exponent}")),
                ));
            }
            let exponent = exponent
                .to_u64()
                .ok_or_else(|| degree_error(self.text, u64::MAX))?;
            self.check_degree(exponent)?;
            self.check_degree(u64::from(base.total_degree()).saturating_mul(exponent))?;
            let exponent = u32::try_from(exponent).map_err(|_| degree_error(self.text, exponent))?;
            return Ok(base.pow(exponent));
        }
        Ok(base)
    }

    fn check_degree(&self, degree: u64) -> Result<(), AlgebraError> {
        if degree > u64::from(MAX_DEGREE) {
            return Err(degree_error(self.text, degree));
        }
        Ok(())
    }

    fn atom(&mut self) -> Result<Polynomial, AlgebraError> {
        match self.tokens.next() {
            Some(Token::Number(value)) => {
                Ok(Polynomial::constant(BigRational::from_integer(value)))
            }
            Some(Token::Ident(name)) => self.ring.variable(&name),
            Some(Token::LeftParenthesis) => {
                let inner = self.expr()?;
                match self.tokens.next() {
                    Some(Token::RightParenthesis) => Ok(inner),
                    _ => Err(syntax_error(self.text, "missing closing parenthesis")),
                }
            }
            Some(other) => Err(syntax_error(self.text, format!("unexpected token {other:?}"))),
            None => Err(syntax_error(self.text, "unexpected end of input")),
        }
    }
}

/// Parses `text` into a polynomial over `ring`.
pub fn parse_polynomial(ring: &PolyRing, text: &str) -> Result<Polynomial, AlgebraError> {
    let mut parser = PolyParser {
        ring,
        text,
        tokens: tokens(text)?.into_iter().peekable(),
    };
    let poly = parser.expr()?;
    if parser.tokens.next().is_some() {
        return Err(syntax_error(text, "trailing input after polynomial"));
    }
    Ok(poly)
}
