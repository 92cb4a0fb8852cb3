use thiserror::Error;

#[derive(Error, Debug)]
pub enum RwsError {
    #[error("XML parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid tri-state value: {0:?}")]
    InvalidTriBool(String),
}

#[cfg(feature = "xml")]
impl From<roxmltree::Error> for RwsError {
    fn from(err: roxmltree::Error) -> Self {
        RwsError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RwsError>;
