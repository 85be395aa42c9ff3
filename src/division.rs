//! Long division of polynomials.

use std::fmt;

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;
use crate::term::Term;

/// The outcome of one long division: a quotient and a remainder.
///
/// Both halves are plain polynomials; an exact division leaves the zero
/// polynomial as its remainder.
#[derive(Clone, Debug, PartialEq)]
pub struct DivisionResult {
    quotient: Polynomial,
    remainder: Polynomial,
}

impl DivisionResult {
    pub fn quotient(&self) -> &Polynomial {
        &self.quotient
    }

    pub fn remainder(&self) -> &Polynomial {
        &self.remainder
    }

    pub fn is_exact(&self) -> bool {
        self.remainder.is_zero()
    }
}

impl fmt::Display for DivisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.remainder.is_zero() {
            write!(f, "Result: {}", self.quotient)
        } else {
            write!(f, "Result: {}\nRemainder: {}", self.quotient, self.remainder)
        }
    }
}

impl Polynomial {
    /// Divides this polynomial by `divisor`, producing quotient and remainder.
    ///
    /// Classic long division as a bounded loop: divide the lead terms, append
    /// the quotient term, subtract `quotient term * divisor` from the running
    /// dividend, repeat. The loop stops once the dividend's degree falls below
    /// the divisor's, or the dividend has fewer terms than the divisor. The
    /// fewer-terms rule is observable: a sparse dividend stops early even
    /// when its degree would still allow a step.
    ///
    /// Dividing by the zero polynomial fails with
    /// [`PolyError::DivisionByZero`].
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<DivisionResult> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZero);
        }

        let mut dividend = self.clone();
        let mut quotient_terms: Vec<Term> = Vec::new();

        while !cannot_reduce(&dividend, divisor) {
            // cannot_reduce guarantees both lead terms exist here
            let (Some(lead), Some(divisor_lead)) = (dividend.lead_term(), divisor.lead_term())
            else {
                break;
            };
            let step = lead.div(&divisor_lead)?;
            quotient_terms.push(step);

            let subtrahend_terms = divisor
                .terms()
                .map(|t| step.mul(&t))
                .collect::<Result<Vec<Term>>>()?;
            let subtrahend = Polynomial::from_terms(subtrahend_terms)?;

            let next = dividend.sub(&subtrahend)?;
            debug_assert!(
                next.is_zero() || next.degree() <= dividend.degree(),
                "long division failed to reduce the dividend"
            );
            dividend = next;
        }

        Ok(DivisionResult {
            quotient: Polynomial::from_terms(quotient_terms)?,
            remainder: dividend,
        })
    }
}

fn cannot_reduce(dividend: &Polynomial, divisor: &Polynomial) -> bool {
    dividend.degree() < divisor.degree() || dividend.term_count() < divisor.term_count()
}
