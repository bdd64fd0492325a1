use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid field: {0}. Expected one of title, actor, year, genre")]
    InvalidField(String),

    #[error("Invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("Invalid query for numeric field: {0}")]
    InvalidQuery(String),

    #[error("Invalid year '{value}' on line {line}")]
    InvalidYear { line: u64, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read movie file: {0}")]
    Csv(#[from] csv::Error),
}

impl StoreError {
    /// Failures coming from reading or writing movie files.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            StoreError::Io(_) | StoreError::Csv(_) | StoreError::InvalidYear { .. }
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
