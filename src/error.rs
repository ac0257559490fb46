use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unparseable date: {0}")]
    InvalidDate(String),

    #[error("invalid date format pattern: {0}")]
    InvalidDateFormat(String),

    #[error("unrecognized date interval: {0}")]
    InvalidInterval(String),

    #[error("series index {index} out of range for row of {columns} value columns")]
    SeriesOutOfRange { index: usize, columns: usize },
}
