//! Result and Error types for thornado-decades

/// Type alias for `Result<T, decades::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `thornado-decades` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    #[error("failed to access field catalog")]
    FieldsError(#[from] thornado_fields::Error),

    #[error("density series is empty")]
    EmptySeries,

    #[error("{density} density values but {time} times")]
    LengthMismatch { density: usize, time: usize },
}
