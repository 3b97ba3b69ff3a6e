use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("Expected a list of {entity} records, got a non-list value")]
    ExpectedRecordList { entity: &'static str },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
