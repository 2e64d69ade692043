use std::fmt;

use crate::error::Result;
use crate::input::parse_number;

/// Message shown when the value to classify is not a number.
pub const NOT_A_NUMBER_MESSAGE: &str = "Error, You did not enter a number, try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    /// `-0.0` classifies as `Zero`.
    pub fn classify(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sign::Positive => "Positive",
            Sign::Negative => "Negative",
            Sign::Zero => "Zero",
        };
        f.write_str(name)
    }
}

/// Parse `raw` and classify it. Non-numeric text is a `Parse` error.
pub fn classify_str(raw: &str) -> Result<(f64, Sign)> {
    let value = parse_number(raw)?;
    Ok((value, Sign::classify(value)))
}

pub fn describe(value: f64, sign: Sign) -> String {
    // Print negative zero as "0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("The number {} is {}", value, sign)
}
