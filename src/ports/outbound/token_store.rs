use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Error in token storage - {0}")]
pub struct StorageError(String);

impl StorageError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Durable client-side storage for the bearer credential.
#[cfg_attr(test, automock)]
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}
