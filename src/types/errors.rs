use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: value is empty")]
    Empty,
    #[error("Amount error: [{value}] is not a number")]
    InvalidFormat {
        value: String
    }
}
