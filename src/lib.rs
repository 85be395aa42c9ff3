//! Symbolic single-variable polynomial arithmetic: parsing free-form infix
//! text, canonical term-list representation, addition, subtraction,
//! multiplication, long division with remainder, and numeric evaluation.

pub mod division;
pub mod error;
pub mod format;
pub mod parser;
pub mod polynomial;
pub mod term;

pub use division::DivisionResult;
pub use error::{PolyError, Result};
pub use format::{pretty, pretty_term};
pub use parser::parse_polynomial;
pub use polynomial::Polynomial;
pub use term::{canonical_order, Term};
