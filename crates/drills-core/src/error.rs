use thiserror::Error;

use crate::math::ShapeError;

pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors raised while reading or validating exercise input.
#[derive(Error, Debug)]
pub enum DrillError {
    /// Text that could not be read as the expected kind of number.
    #[error("could not parse {input:?} as {expected}")]
    Parse { input: String, expected: &'static str },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input ended before a required value was supplied.
    #[error("input ended while waiting for {0}")]
    EndOfInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl DrillError {
    pub fn parse(input: &str, expected: &'static str) -> Self {
        DrillError::Parse {
            input: input.to_string(),
            expected,
        }
    }

    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        DrillError::InvalidInput(msg.into())
    }

    /// True for errors caused by what the user typed, as opposed to I/O failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DrillError::Parse { .. }
                | DrillError::InvalidInput(_)
                | DrillError::EndOfInput(_)
                | DrillError::Shape(_)
        )
    }
}
