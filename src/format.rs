//! Canonical text rendering for terms and polynomials.

use num_traits::Zero;

use crate::polynomial::Polynomial;
use crate::term::Term;

/// Renders a polynomial as canonical infix text, e.g. `"-5x^2 + 3x + 1"`.
///
/// The lead term keeps its natural sign; every following term is joined with
/// an explicit ` + ` or ` - ` and rendered from its coefficient's magnitude.
/// The zero polynomial renders as `"0"`.
pub fn pretty(poly: &Polynomial) -> String {
    let mut terms = poly.terms();
    let Some(first) = terms.next() else {
        return "0".to_string();
    };

    let mut out = pretty_term(&first);
    for term in terms {
        out.push_str(if term.coefficient() < 0.0 { " - " } else { " + " });
        out.push_str(&pretty_term(&term.with_coefficient(term.coefficient().abs())));
    }
    out
}

/// Renders a single term: `1` and `-1` coefficients drop the numeral (except
/// for constants), exponent 1 drops the `^1`, exponent 0 drops the variable.
pub fn pretty_term(term: &Term) -> String {
    if term.coefficient().is_zero() {
        return "0".to_string();
    }
    let literal = match term.exponent() {
        0 => String::new(),
        1 => term.variable().to_string(),
        exponent => format!("{}^{}", term.variable(), exponent),
    };
    if term.exponent() != 0 {
        if term.coefficient() == 1.0 {
            return literal;
        }
        if term.coefficient() == -1.0 {
            return format!("-{literal}");
        }
    }
    // f64's Display prints integral values without a trailing ".0"
    format!("{}{}", term.coefficient(), literal)
}
