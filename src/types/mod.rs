mod errors;
mod money;

pub use errors::AmountError;
pub use money::{Currency, Percentage};

pub type ClientId = String;
pub type RowNumber = usize;
