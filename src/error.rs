use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomerowError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Keymap: {0}")]
    InvalidKeymap(String),

    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),
}

pub type HrResult<T> = Result<T, HomerowError>;
