use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CubeError {
    #[error("invalid instruction: {0}")]
    InvalidInstruction(String),
    #[error("invalid twist: {0:?}")]
    InvalidTwist(char),
    #[error("index {index} out of range for face of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("{0} overflowed")]
    Overflow(&'static str),
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CubeError>;
