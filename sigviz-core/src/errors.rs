use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("sample {sample}: expected {expected} contributions, found {found}")]
    SampleShapeMismatch {
        sample: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ActivityTableError {
    #[error("missing header row")]
    MissingHeaders,

    #[error("column {column}: empty sample header")]
    EmptySampleHeader { column: usize },

    #[error("invalid signature name: {0}")]
    InvalidSignatureName(String),

    #[error("line {line}: invalid contribution value: {value}")]
    InvalidContribution { line: usize, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
