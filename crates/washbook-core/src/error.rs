use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid appointment ID: {0}")]
    InvalidId(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Rejected creation input. Nothing is stored when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),
    #[error("price is missing")]
    MissingPrice,
    #[error("price cannot be negative")]
    NegativePrice,
    #[error("invalid price: {0}")]
    InvalidPrice(String),
}
