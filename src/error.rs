use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    #[error("expected at least 4 arguments <wheel_no> <start_letter> <step> <message>, got {0}")]
    InvalidArgumentCount(usize),

    #[error("Invalid wheel number: {0}. Must be between 0 and {max}", max = crate::wheel::WHEELS.len() - 1)]
    InvalidWheelIndex(String),

    #[error("Invalid step: {0}. Must be a whole number")]
    InvalidStepValue(String),

    #[error("Invalid start letter: {0:?}. Must be a single letter A-Z")]
    InvalidStartLetter(String),

    #[error("only letters are allowed, found {0:?}")]
    InvalidInput(char),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, EnigmaError>;
