use crate::domain::scenario::ScenarioStore;
use crate::ports::outbound::api::{ApiError, ScenarioApi, VoteApi};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Keep,
    #[serde(rename = "mulligan", alias = "cut")]
    Cut,
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Decision::Keep => "keep",
            Decision::Cut => "cut",
        };

        write!(f, "{string}")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Decision must be 'keep' or 'cut', got '{0}'")]
pub struct UnknownDecision(String);

impl FromStr for Decision {
    type Err = UnknownDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Decision::Keep),
            "cut" | "mulligan" => Ok(Decision::Cut),
            other => Err(UnknownDecision(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Vote {
    #[serde(rename = "_id")]
    pub id: String,
    pub scenario_id: String,
    #[serde(default)]
    pub user_id: String,
    pub decision: Decision,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// What happened after a vote was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The loaded scenario was the one voted on and has been re-fetched.
    Refreshed,
    /// Nothing loaded, or a different scenario loaded.
    Idle,
}

/// Casts votes and keeps the loaded scenario's tallies server-authoritative.
/// Tallies are only ever replaced by a re-fetch, never adjusted locally.
pub struct VoteCoordinator<V, S> {
    api: V,
    scenarios: Arc<ScenarioStore<S>>,
}

impl<V, S> VoteCoordinator<V, S>
where
    V: VoteApi + Send + Sync,
    S: ScenarioApi + Send + Sync,
{
    pub fn new(api: V, scenarios: Arc<ScenarioStore<S>>) -> Self {
        Self { api, scenarios }
    }

    pub async fn submit(
        &self,
        scenario_id: &str,
        decision: Decision,
    ) -> Result<VoteOutcome, ApiError> {
        self.api.cast(scenario_id, decision).await?;
        log::info!("Voted {decision} on scenario {scenario_id}");

        if self.scenarios.current_id().as_deref() != Some(scenario_id) {
            return Ok(VoteOutcome::Idle);
        }

        self.scenarios.fetch_by_id(scenario_id).await?;
        Ok(VoteOutcome::Refreshed)
    }

    pub async fn get_user_vote(&self, scenario_id: &str) -> Result<Option<Vote>, ApiError> {
        self.api.user_vote(scenario_id).await
    }
}
