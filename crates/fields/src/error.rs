//! Result and Error types for thornado-fields

/// Type alias for `Result<T, fields::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `thornado-fields` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed HDF5 operation")]
    Hdf5Error(#[from] hdf5::Error),

    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    #[error("failed to initialise progress bar: {0}")]
    ProgressBar(String),

    #[error("snapshot container not found: \"{0}\"")]
    MissingContainer(String),

    #[error("failed to read \"{name}\" from \"{file}\"")]
    MissingDataset {
        file: String,
        name: String,
        #[source]
        source: hdf5::Error,
    },

    #[error("dataset \"{name}\" is empty")]
    EmptyDataset { name: String },

    #[error("unexpected shape for \"{name}\" (expected {expected:?}, found {found:?})")]
    UnexpectedShape {
        name: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("invalid coordinate system: \"{0}\"")]
    UnknownCoordinateSystem(String),

    #[error("no snapshots requested")]
    NoSnapshots,

    #[error("invalid snapshot selection (first {first}, last {last}, every {every})")]
    InvalidSelection { first: u32, last: u32, every: u32 },

    #[error("index {index:?} outside of grid {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("no field named \"{0}\"")]
    UnknownField(String),

    #[error("field \"{0}\" was not loaded")]
    FieldNotLoaded(String),
}
