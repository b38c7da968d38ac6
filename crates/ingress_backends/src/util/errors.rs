use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JsonSerializationError: {0}")]
    JsonSerializationError(#[source] serde_json::Error),

    #[error("YamlSerializationError: {0}")]
    YamlSerializationError(#[source] serde_yaml::Error),

    #[error("MetadataMissing: {0}")]
    MetadataMissing(String),

    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
