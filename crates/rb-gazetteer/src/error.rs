use thiserror::Error;

#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("gazetteer is missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GazetteerResult<T> = Result<T, GazetteerError>;
