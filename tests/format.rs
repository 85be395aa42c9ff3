use polyeval::{parse_polynomial, pretty, pretty_term, Polynomial, Term};

fn poly(input: &str) -> Polynomial {
    parse_polynomial(input).expect("parse polynomial")
}

#[test]
fn term_rendering_rules() {
    assert_eq!(pretty_term(&Term::new(0.0, 'x', 5)), "0");
    assert_eq!(pretty_term(&Term::new(1.0, 'x', 3)), "x^3");
    assert_eq!(pretty_term(&Term::new(-1.0, 'x', 3)), "-x^3");
    assert_eq!(pretty_term(&Term::new(7.0, 'x', 1)), "7x");
    assert_eq!(pretty_term(&Term::new(1.0, 'x', 1)), "x");
    assert_eq!(pretty_term(&Term::new(1.0, 'x', 0)), "1");
    assert_eq!(pretty_term(&Term::new(-1.0, 'x', 0)), "-1");
    assert_eq!(pretty_term(&Term::new(5.0, 'x', 0)), "5");
    assert_eq!(pretty_term(&Term::new(3.5, 'x', 2)), "3.5x^2");
}

#[test]
fn integral_coefficients_drop_the_decimal_point() {
    assert_eq!(pretty_term(&Term::new(4.0, 'x', 2)), "4x^2");
    assert_eq!(pretty_term(&Term::new(-12.0, 'x', 4)), "-12x^4");
}

#[test]
fn negative_exponents_render_explicitly() {
    assert_eq!(pretty_term(&Term::new(2.0, 'x', -2)), "2x^-2");
}

#[test]
fn zero_polynomial_renders_as_zero() {
    assert_eq!(pretty(&Polynomial::zero()), "0");
    assert_eq!(Polynomial::zero().to_string(), "0");
}

#[test]
fn shuffled_terms_render_canonically() {
    let terms = vec![
        Term::new(-3.0, 'x', 1),
        Term::new(-5.0, 'x', 3),
        Term::new(1.0, 'x', 0),
    ];
    let polynomial = Polynomial::from_terms(terms).expect("build polynomial");
    assert_eq!(polynomial.to_string(), "-5x^3 - 3x + 1");
}

#[test]
fn signs_become_separators_after_the_lead_term() {
    assert_eq!(poly("-x^2 - x - 1").to_string(), "-x^2 - x - 1");
    assert_eq!(poly("x^2 + x + 1").to_string(), "x^2 + x + 1");
}

#[test]
fn unit_coefficients_keep_their_numeral_for_constants() {
    assert_eq!(poly("x + 1").to_string(), "x + 1");
    assert_eq!(poly("x - 1").to_string(), "x - 1");
}

#[test]
fn display_matches_pretty() {
    let p = poly("2x^3 - 0.5x + 7");
    assert_eq!(p.to_string(), pretty(&p));
    assert_eq!(p.to_string(), "2x^3 - 0.5x + 7");
}
