//! Result and Error types for thornado-average

/// Type alias for `Result<T, average::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `thornado-average` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to access field catalog")]
    FieldsError(#[from] thornado_fields::Error),

    #[error("inconsistent array shape")]
    ShapeError(#[from] ndarray::ShapeError),

    #[error("cell averages not available for {0} nodes per cell")]
    UnsupportedNodeCount(usize),

    #[error("length mismatch for {name} (expected {expected}, found {found})")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("failed to parse value \"{value}\" on line {line}")]
    ParseError { line: usize, value: String },

    #[error("expected {expected} columns on line {line}, found {found}")]
    RaggedTable {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("table contains no data rows")]
    EmptyTable,
}
