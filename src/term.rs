//! Monomial value type and its ordering.

use std::cmp::Ordering;
use std::fmt;

use num_traits::Zero;

use crate::error::{PolyError, Result};

/// A single monomial `coefficient * variable^exponent`.
///
/// A `Term` enforces nothing on its own: a zero coefficient is legal (it is
/// dropped by [`Polynomial`](crate::Polynomial) during canonicalization), and
/// nothing ties two terms to the same variable until they are combined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    coefficient: f64,
    variable: char,
    exponent: i32,
}

impl Term {
    pub fn new(coefficient: f64, variable: char, exponent: i32) -> Self {
        Term {
            coefficient,
            variable,
            exponent,
        }
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn variable(&self) -> char {
        self.variable
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Returns a copy of this term with a different coefficient.
    pub fn with_coefficient(&self, coefficient: f64) -> Self {
        Term {
            coefficient,
            ..*self
        }
    }

    /// Sums two like terms. Defined only when variable and exponent match.
    pub fn add(&self, other: &Term) -> Result<Term> {
        self.check_like(other)?;
        Ok(self.with_coefficient(self.coefficient + other.coefficient))
    }

    /// Subtracts a like term. Defined only when variable and exponent match.
    pub fn sub(&self, other: &Term) -> Result<Term> {
        self.check_like(other)?;
        Ok(self.with_coefficient(self.coefficient - other.coefficient))
    }

    /// Multiplies two terms of the same variable: exponents add.
    pub fn mul(&self, other: &Term) -> Result<Term> {
        self.check_variable(other)?;
        Ok(Term {
            coefficient: self.coefficient * other.coefficient,
            variable: self.variable,
            exponent: self.exponent + other.exponent,
        })
    }

    /// Divides by another term of the same variable: exponents subtract.
    ///
    /// The divisor's coefficient must be non-zero; the division engine only
    /// ever divides by the lead term of a canonical (zero-free) polynomial.
    pub fn div(&self, other: &Term) -> Result<Term> {
        self.check_variable(other)?;
        assert!(
            !other.coefficient.is_zero(),
            "division by a zero term; divisor polynomial is not canonical"
        );
        Ok(Term {
            coefficient: self.coefficient / other.coefficient,
            variable: self.variable,
            exponent: self.exponent - other.exponent,
        })
    }

    /// Evaluates the term at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * x.powi(self.exponent)
    }

    fn check_variable(&self, other: &Term) -> Result<()> {
        if self.variable != other.variable {
            return Err(PolyError::InconsistentVariable {
                expected: self.variable,
                found: other.variable,
            });
        }
        Ok(())
    }

    fn check_like(&self, other: &Term) -> Result<()> {
        self.check_variable(other)?;
        if self.exponent != other.exponent {
            return Err(PolyError::MismatchedExponents {
                left: self.exponent,
                right: other.exponent,
            });
        }
        Ok(())
    }
}

/// Canonical term order: descending exponent, ties broken by descending
/// coefficient. The tie-break only makes the order total; two like terms are
/// always merged before ordering ever observes a tie.
pub fn canonical_order(a: &Term, b: &Term) -> Ordering {
    b.exponent
        .cmp(&a.exponent)
        .then_with(|| b.coefficient.partial_cmp(&a.coefficient).unwrap_or(Ordering::Equal))
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty_term(self))
    }
}
