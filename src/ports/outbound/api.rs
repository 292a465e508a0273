use crate::domain::decklist::{Decklist, NewDecklist};
use crate::domain::scenario::{NewScenario, Scenario, ScenarioPage};
use crate::domain::user::{AuthResponse, Login, Registration};
use crate::domain::vote::{Decision, Vote};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Server responded {status} - {message}")]
    Status { status: u16, message: String },
    #[error("Request failed - {0}")]
    Transport(String),
    #[error("Unreadable response - {0}")]
    Decode(String),
    #[error("'{0}' is not a usable id")]
    InvalidId(String),
}

impl ApiError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthApi {
    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError>;
    async fn login(&self, login: &Login) -> Result<AuthResponse, ApiError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait DecklistApi {
    async fn list(&self) -> Result<Vec<Decklist>, ApiError>;
    async fn get(&self, id: &str) -> Result<Decklist, ApiError>;
    async fn mine(&self) -> Result<Vec<Decklist>, ApiError>;
    async fn create(&self, decklist: &NewDecklist) -> Result<Decklist, ApiError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScenarioApi {
    async fn list(&self, page: u32, per_page: u32) -> Result<ScenarioPage, ApiError>;
    async fn get(&self, id: &str) -> Result<Scenario, ApiError>;
    async fn create(&self, scenario: &NewScenario) -> Result<Scenario, ApiError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait VoteApi {
    async fn cast(&self, scenario_id: &str, decision: Decision) -> Result<(), ApiError>;
    async fn user_vote(&self, scenario_id: &str) -> Result<Option<Vote>, ApiError>;
}
