use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolyError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolyError {
    #[error("inconsistent variable: expected '{expected}', found '{found}'")]
    InconsistentVariable { expected: char, found: char },
    #[error("multi-variable term '{0}' is not supported")]
    MultiVariableTerm(String),
    #[error("malformed number in '{0}'")]
    MalformedNumber(String),
    #[error("cannot combine terms with exponents {left} and {right}")]
    MismatchedExponents { left: i32, right: i32 },
    #[error("division by the zero polynomial")]
    DivisionByZero,
}
