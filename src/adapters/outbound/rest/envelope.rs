use crate::domain::decklist::Decklist;
use crate::domain::scenario::Scenario;
use crate::domain::vote::{Decision, Vote};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub(super) struct ErrorBody {
    pub message: String,
}

#[derive(Deserialize)]
pub(super) struct DecklistsEnvelope {
    pub decklists: Vec<Decklist>,
}

#[derive(Deserialize)]
pub(super) struct DecklistEnvelope {
    pub decklist: Decklist,
}

#[derive(Deserialize)]
pub(super) struct ScenarioEnvelope {
    pub scenario: Scenario,
}

#[derive(Deserialize)]
pub(super) struct UserVoteEnvelope {
    #[serde(default)]
    pub vote: Option<Vote>,
}

#[derive(Serialize)]
pub(super) struct VoteBody<'a> {
    pub scenario_id: &'a str,
    pub decision: Decision,
}
