use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Solver error: {message}")]
    Solver { message: String },
}

impl PuzzleError {
    pub fn malformed(message: impl Into<String>) -> Self {
        PuzzleError::MalformedInput {
            message: message.into(),
        }
    }

    pub fn solver(message: impl Into<String>) -> Self {
        PuzzleError::Solver {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
