use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const CURRENCY_NOISE: [char; 2] = ['$', ','];
const PERCENT_SIGN: char = '%';

/// A currency amount as written in a spreadsheet export, e.g. `$1,250,000.00`.
///
/// Parsing strips the dollar sign and thousands separators and keeps the
/// remaining digits exactly, without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Currency(Decimal);

impl Currency {
    pub fn new(value: Decimal) -> Self {
        Currency(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl Display for Currency {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let cleaned: String = value.chars().filter(|character| !CURRENCY_NOISE.contains(character)).collect();

        parse_decimal(value, &cleaned).map(Currency)
    }
}

/// A percentage such as a commission rate, `3.0%` or `3.0`.
///
/// The value is kept in percent units: `3.0%` is `3.0`, not `0.03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    pub fn new(value: Decimal) -> Self {
        Percentage(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Display for Percentage {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}%", self.0)
    }
}

impl FromStr for Percentage {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let cleaned = value.replace(PERCENT_SIGN, "");

        parse_decimal(value, &cleaned).map(Percentage)
    }
}

fn parse_decimal(original: &str, cleaned: &str) -> Result<Decimal, AmountError> {
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(AmountError::Empty);
    }

    // Values beyond 28 significant digits are rejected rather than rounded.
    Decimal::from_str_exact(cleaned).map_err(|_| AmountError::InvalidFormat { value: original.trim().to_string() })
}
