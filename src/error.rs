use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset `{dataset}` has {values} values but chart has {labels} labels")]
    LengthMismatch {
        dataset: String,
        labels: usize,
        values: usize,
    },

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
