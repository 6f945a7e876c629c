use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Input table missing expected fields, wrong row arity, or a value that
    /// does not convert to the scalar type an operation needs.
    #[error("data format error: {0}")]
    DataFormat(String),

    /// A chart mapping referenced a field the table does not have, or the
    /// plotting backend rejected the drawing.
    #[error("render error: {0}")]
    Render(String),

    /// An incomplete chart specification (builder missing required fields).
    #[error("chart spec error: {0}")]
    Spec(#[from] crate::render::ChartSpecBuilderError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
