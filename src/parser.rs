//! Infix text to polynomial conversion.
//!
//! The grammar is deliberately loose: whitespace is ignored everywhere, a
//! `+` or `-` anywhere but the first position separates terms, and each term
//! is split at the first occurrence of the polynomial's variable. Position
//! decides whether a `-` is a sign or a separator, so this is a direct
//! two-cursor scan rather than a grammar-driven parser.

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;
use crate::term::Term;

/// Variable assumed for numeral-only input such as `"42"`.
const DEFAULT_VARIABLE: char = 'x';

/// Parses a free-form infix polynomial such as `"-5x^2 + 3x + 1"`.
///
/// Blank input yields the zero polynomial. The first alphabetic character
/// becomes the polynomial's variable; every term must use it. Bare signs act
/// as coefficients of `1` and `-1`, and a missing `^exponent` suffix means
/// exponent 1.
pub fn parse_polynomial(input: &str) -> Result<Polynomial> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Ok(Polynomial::zero());
    }

    let variable = stripped
        .chars()
        .find(|c| c.is_alphabetic())
        .unwrap_or(DEFAULT_VARIABLE);

    let mut terms = Vec::new();
    for piece in split_terms(&stripped) {
        terms.push(parse_term(piece, variable)?);
    }
    Polynomial::from_terms(terms)
}

/// Splits at every `+` or `-` that is not the very first character; a leading
/// sign belongs to the first term. Each piece keeps its own leading sign.
fn split_terms(input: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, c) in input.char_indices() {
        if i > 0 && (c == '+' || c == '-') {
            pieces.push(&input[start..i]);
            start = i;
        }
    }
    pieces.push(&input[start..]);
    pieces
}

fn parse_term(text: &str, variable: char) -> Result<Term> {
    let Some(split) = text.find(variable) else {
        // no variable in this piece: the whole piece is the coefficient
        let coefficient: f64 = text
            .parse()
            .map_err(|_| PolyError::MalformedNumber(text.to_string()))?;
        return Ok(Term::new(coefficient, variable, 0));
    };

    let (coefficient_part, literal_part) = text.split_at(split);
    let coefficient = parse_coefficient(coefficient_part)?;
    let exponent = parse_exponent(literal_part)?;
    Ok(Term::new(coefficient, variable, exponent))
}

fn parse_coefficient(part: &str) -> Result<f64> {
    match part {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => part
            .parse()
            .map_err(|_| PolyError::MalformedNumber(part.to_string())),
    }
}

/// Parses the literal part of a term: the variable itself (exponent 1) or
/// `<var>^<int>`. Anything else before the `^` means a second variable
/// sneaked in, which this engine does not support.
fn parse_exponent(literal_part: &str) -> Result<i32> {
    let (head, exponent_text) = match literal_part.split_once('^') {
        Some((head, rest)) => (head, Some(rest)),
        None => (literal_part, None),
    };
    if head.chars().count() > 1 {
        return Err(PolyError::MultiVariableTerm(literal_part.to_string()));
    }
    match exponent_text {
        None => Ok(1),
        Some(text) => text
            .parse()
            .map_err(|_| PolyError::MalformedNumber(literal_part.to_string())),
    }
}
