use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DnaError {
    #[error("invalid character '{ch}' at position {pos}; run validation to locate mistakes")]
    InvalidChar { ch: char, pos: usize },

    #[error("sequence failed validation with {count} invalid position(s); run validation to locate mistakes")]
    InvalidSequence { count: usize },
}

pub type DnaResult<T> = Result<T, DnaError>;
