use crate::domain::card::Card;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardLookupError {
    #[error("No card matched '{0}'")]
    NotFound(String),
    #[error("Card service request failed - {0}")]
    Transport(String),
    #[error("Card service returned an unreadable card - {0}")]
    Decode(String),
}

/// Fuzzy name lookup against the card metadata service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardLookup {
    async fn named(&self, fuzzy: &str) -> Result<Card, CardLookupError>;
}
