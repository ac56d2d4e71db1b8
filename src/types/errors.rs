use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Unrecognised game ID for World of Warcraft: {0}")]
    UnrecognisedGame(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Registry error: {0}")]
    Registry(String),
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Missing required file: {0}")]
    MissingFile(String),
}

impl From<zip::result::ZipError> for ExtensionError {
    fn from(error: zip::result::ZipError) -> Self {
        ExtensionError::Archive(error.to_string())
    }
}

// The host receives errors as plain strings.
impl Serialize for ExtensionError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type ExtensionResult<T> = Result<T, ExtensionError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
