use crate::config::Config;
use crate::domain::card::Card;
use crate::ports::outbound::card_lookup::{CardLookup, CardLookupError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder, StatusCode};

const NAMED: &str = "/cards/named";

pub struct Scryfall {
    http_client: Client,
    base_url: String,
}

impl Scryfall {
    pub fn create(config: &Config) -> Result<Self, CardLookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("keepcut/0.1"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|why| CardLookupError::Transport(why.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.card_api_url.clone(),
        })
    }

    fn named_request(&self, fuzzy: &str) -> RequestBuilder {
        self.http_client
            .get(format!("{}{NAMED}", self.base_url))
            .query(&[("fuzzy", fuzzy)])
    }
}

#[async_trait]
impl CardLookup for Scryfall {
    async fn named(&self, fuzzy: &str) -> Result<Card, CardLookupError> {
        log::debug!("Searching scryfall for \"{fuzzy}\"");
        let response = self
            .named_request(fuzzy)
            .send()
            .await
            .map_err(|why| CardLookupError::Transport(why.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<Card>()
                .await
                .map_err(|why| CardLookupError::Decode(why.to_string())),
            StatusCode::NOT_FOUND => Err(CardLookupError::NotFound(fuzzy.to_string())),
            status => Err(CardLookupError::Transport(format!(
                "scryfall responded {status}"
            ))),
        }
    }
}
