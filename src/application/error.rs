use thiserror::Error;

use crate::domain::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to open file for writing: {path}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
