mod envelope;

use crate::adapters::outbound::rest::envelope::{
    DecklistEnvelope, DecklistsEnvelope, ErrorBody, ScenarioEnvelope, UserVoteEnvelope, VoteBody,
};
use crate::config::Config;
use crate::domain::decklist::{Decklist, NewDecklist};
use crate::domain::scenario::{NewScenario, Scenario, ScenarioPage};
use crate::domain::session::Credentials;
use crate::domain::user::{AuthResponse, Login, Registration};
use crate::domain::vote::{Decision, Vote};
use crate::ports::outbound::api::{ApiError, AuthApi, DecklistApi, ScenarioApi, VoteApi};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

/// Client for the scenario voting service.
///
/// Every request goes through [`RestClient::request`], which attaches the
/// bearer token held by the shared [`Credentials`] at the time of the call.
#[derive(Clone)]
pub struct RestClient {
    http_client: Client,
    base_url: String,
    credentials: Credentials,
}

impl RestClient {
    pub fn create(config: &Config, credentials: Credentials) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|why| ApiError::Transport(why.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.api_url.clone(),
            credentials,
        })
    }

    /// Base URL extended by `segments`, each percent-encoded as exactly one
    /// path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(ApiError::InvalidId((*segment).to_string()));
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|why| ApiError::Transport(why.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::Transport(format!("{} cannot be a base url", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let request = self.http_client.request(method, self.endpoint(segments)?);

        Ok(match self.credentials.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|why| ApiError::Transport(why.to_string()))?;

        Self::read(response).await
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
            };
            log::warn!("Server responded {status} - {message}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|why| ApiError::Decode(why.to_string()))
    }
}

#[async_trait]
impl AuthApi for RestClient {
    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        Self::send(self.request(Method::POST, &["auth", "register"])?.json(registration)).await
    }

    async fn login(&self, login: &Login) -> Result<AuthResponse, ApiError> {
        Self::send(self.request(Method::POST, &["auth", "login"])?.json(login)).await
    }
}

#[async_trait]
impl DecklistApi for RestClient {
    async fn list(&self) -> Result<Vec<Decklist>, ApiError> {
        let envelope: DecklistsEnvelope =
            Self::send(self.request(Method::GET, &["decklists"])?).await?;
        Ok(envelope.decklists)
    }

    async fn get(&self, id: &str) -> Result<Decklist, ApiError> {
        let envelope: DecklistEnvelope =
            Self::send(self.request(Method::GET, &["decklists", id])?).await?;
        Ok(envelope.decklist)
    }

    async fn mine(&self) -> Result<Vec<Decklist>, ApiError> {
        let envelope: DecklistsEnvelope =
            Self::send(self.request(Method::GET, &["decklists", "my"])?).await?;
        Ok(envelope.decklists)
    }

    async fn create(&self, decklist: &NewDecklist) -> Result<Decklist, ApiError> {
        let envelope: DecklistEnvelope =
            Self::send(self.request(Method::POST, &["decklists"])?.json(decklist)).await?;
        Ok(envelope.decklist)
    }
}

#[async_trait]
impl ScenarioApi for RestClient {
    async fn list(&self, page: u32, per_page: u32) -> Result<ScenarioPage, ApiError> {
        Self::send(
            self.request(Method::GET, &["scenarios"])?
                .query(&[("page", page), ("per_page", per_page)]),
        )
        .await
    }

    async fn get(&self, id: &str) -> Result<Scenario, ApiError> {
        let envelope: ScenarioEnvelope =
            Self::send(self.request(Method::GET, &["scenarios", id])?).await?;
        Ok(envelope.scenario)
    }

    async fn create(&self, scenario: &NewScenario) -> Result<Scenario, ApiError> {
        let envelope: ScenarioEnvelope =
            Self::send(self.request(Method::POST, &["scenarios"])?.json(scenario)).await?;
        Ok(envelope.scenario)
    }
}

#[async_trait]
impl VoteApi for RestClient {
    async fn cast(&self, scenario_id: &str, decision: Decision) -> Result<(), ApiError> {
        let body = VoteBody {
            scenario_id,
            decision,
        };
        let _: serde_json::Value =
            Self::send(self.request(Method::POST, &["votes"])?.json(&body)).await?;
        Ok(())
    }

    async fn user_vote(&self, scenario_id: &str) -> Result<Option<Vote>, ApiError> {
        let envelope: UserVoteEnvelope =
            Self::send(self.request(Method::GET, &["votes", "scenario", scenario_id])?).await?;
        Ok(envelope.vote)
    }
}
