//! Canonical-form polynomials over a single variable.

use std::fmt;

use num_traits::Zero;

use crate::error::{PolyError, Result};
use crate::term::{canonical_order, Term};

/// A polynomial kept in canonical form: at most one term per exponent, no
/// zero-coefficient terms, terms in strictly descending exponent order.
///
/// Polynomials are never mutated after construction. Every arithmetic
/// operation collects a fresh term list and rebuilds through
/// [`Polynomial::from_terms`], which is the single place where merging,
/// zero-dropping, and ordering happen.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
    degree: i32,
    variable: Option<char>,
}

impl Polynomial {
    /// The zero polynomial: no terms, degree 0, no variable.
    pub fn zero() -> Self {
        Polynomial {
            terms: Vec::new(),
            degree: 0,
            variable: None,
        }
    }

    /// Builds a canonical polynomial from a raw term list.
    ///
    /// Terms with equal exponents are merged by summing coefficients, zero
    /// coefficients are dropped, and the result is sorted by descending
    /// exponent. All terms must share one variable.
    pub fn from_terms(terms: Vec<Term>) -> Result<Self> {
        let mut poly = Polynomial::zero();
        for term in terms {
            poly.add_term(term)?;
        }
        Ok(poly)
    }

    fn add_term(&mut self, term: Term) -> Result<()> {
        if let Some(variable) = self.variable {
            if term.variable() != variable {
                return Err(PolyError::InconsistentVariable {
                    expected: variable,
                    found: term.variable(),
                });
            }
        }
        if term.coefficient().is_zero() {
            return Ok(());
        }
        self.variable = Some(term.variable());

        match self.terms.iter().position(|t| t.exponent() == term.exponent()) {
            Some(i) => {
                let merged = self.terms[i].add(&term)?;
                if merged.coefficient().is_zero() {
                    self.terms.remove(i);
                } else {
                    self.terms[i] = merged;
                }
            }
            None => {
                self.terms.push(term);
                self.terms.sort_by(canonical_order);
            }
        }

        self.degree = self.terms.first().map(Term::exponent).unwrap_or(0);
        if self.terms.is_empty() {
            // all terms cancelled; the zero polynomial has no variable
            self.variable = None;
        }
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The exponent of the lead term, or 0 for the zero polynomial.
    pub fn degree(&self) -> i32 {
        self.degree
    }

    /// The polynomial's variable, or `None` for the zero polynomial.
    pub fn variable(&self) -> Option<char> {
        self.variable
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// The highest-exponent term, if any.
    pub fn lead_term(&self) -> Option<Term> {
        self.terms.first().copied()
    }

    /// Terms in descending exponent order.
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms.iter().copied()
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut all: Vec<Term> = self.terms.clone();
        all.extend(other.terms());
        Polynomial::from_terms(all)
    }

    /// Subtracts by negating every term of the subtrahend and re-unioning.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let mut all: Vec<Term> = self.terms.clone();
        all.extend(other.terms().map(|t| t.with_coefficient(-t.coefficient())));
        Polynomial::from_terms(all)
    }

    /// Multiplies via the Cartesian product of term pairs; cross terms with
    /// equal resulting exponents merge during reconstruction.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let mut products = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                products.push(a.mul(b)?);
            }
        }
        Polynomial::from_terms(products)
    }

    /// Evaluates the polynomial at `x`. The empty sum is 0.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}
