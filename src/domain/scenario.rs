use crate::domain::decklist::Decklist;
use crate::domain::utils::latest::Latest;
use crate::ports::outbound::api::{ApiError, ScenarioApi};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Scenario {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub decklist_id: String,
    #[serde(default)]
    pub hand: Vec<String>,
    #[serde(default)]
    pub mulligan_count: u32,
    #[serde(default)]
    pub num_cards: u32,
    #[serde(default)]
    pub on_play: bool,
    #[serde(default)]
    pub opponent_archetype: String,
    #[serde(default)]
    pub game_number: u32,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub keep_votes: u32,
    #[serde(default, alias = "mulligan_votes")]
    pub cut_votes: u32,
    #[serde(default)]
    pub decklist: Option<Decklist>,
}

impl Scenario {
    #[must_use]
    pub fn total_votes(&self) -> u32 {
        self.keep_votes.saturating_add(self.cut_votes)
    }

    /// Share of keep votes, `None` before anyone has voted.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn keep_ratio(&self) -> Option<f32> {
        match self.total_votes() {
            0 => None,
            total => Some(self.keep_votes as f32 / total as f32),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewScenario {
    pub decklist_id: String,
    pub opponent_archetype: String,
    pub game_number: u32,
    pub on_play: bool,
    pub num_cards: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioPage {
    pub scenarios: Vec<Scenario>,
    pub total: u64,
    pub page: u32,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl PageWindow {
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(self.per_page.max(1)))
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.page_count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Listing {
    scenarios: Vec<Scenario>,
    window: PageWindow,
}

pub struct ScenarioStore<A> {
    api: A,
    listing: Latest<Listing>,
    current: Latest<Option<Scenario>>,
}

impl<A> ScenarioStore<A>
where
    A: ScenarioApi + Send + Sync,
{
    pub fn new(api: A, per_page: u32) -> Self {
        Self {
            api,
            listing: Latest::new(Listing {
                scenarios: Vec::new(),
                window: PageWindow {
                    page: 1,
                    per_page,
                    total: 0,
                },
            }),
            current: Latest::new(None),
        }
    }

    /// Loads one page. Missing arguments default to page 1 and the page size
    /// currently held.
    pub async fn fetch_all(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<(), ApiError> {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page.unwrap_or_else(|| self.window().per_page);

        let ticket = self.listing.ticket();
        let response = self.api.list(page, per_page).await?;
        log::debug!(
            "Fetched {} scenarios (page {} of {} total)",
            response.scenarios.len(),
            response.page,
            response.total
        );

        self.listing.apply(
            ticket,
            Listing {
                window: PageWindow {
                    page: response.page,
                    per_page: response.per_page.unwrap_or(per_page),
                    total: response.total,
                },
                scenarios: response.scenarios,
            },
        );
        Ok(())
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<(), ApiError> {
        let ticket = self.current.ticket();
        let scenario = self.api.get(id).await?;
        self.current.apply(ticket, Some(scenario));
        Ok(())
    }

    pub async fn create(&self, scenario: &NewScenario) -> Result<Scenario, ApiError> {
        let created = self.api.create(scenario).await?;
        log::info!("Created scenario {}", created.id);
        Ok(created)
    }

    #[must_use]
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.listing.with(|listing| listing.scenarios.clone())
    }

    #[must_use]
    pub fn window(&self) -> PageWindow {
        self.listing.with(|listing| listing.window)
    }

    #[must_use]
    pub fn current(&self) -> Option<Scenario> {
        self.current.get()
    }

    #[must_use]
    pub fn current_id(&self) -> Option<String> {
        self.current
            .with(|current| current.as_ref().map(|scenario| scenario.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::api::MockScenarioApi;
    use mockall::predicate::*;

    fn create_test_scenario(id: &str, keep_votes: u32) -> Scenario {
        Scenario {
            id: id.to_string(),
            decklist_id: String::from("d1"),
            hand: vec![
                String::from("Mountain"),
                String::from("Lightning Bolt"),
                String::from("Goblin Guide"),
            ],
            mulligan_count: 0,
            num_cards: 7,
            on_play: true,
            opponent_archetype: String::from("Izzet Murktide"),
            game_number: 1,
            user_id: String::from("u1"),
            created_at: None,
            keep_votes,
            cut_votes: 0,
            decklist: None,
        }
    }

    fn create_test_page(ids: &[&str], total: u64, page: u32) -> ScenarioPage {
        ScenarioPage {
            scenarios: ids.iter().map(|id| create_test_scenario(id, 0)).collect(),
            total,
            page,
            per_page: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_all_mirrors_server_page() {
        let mut api = MockScenarioApi::new();
        api.expect_list()
            .times(1)
            .with(eq(1), eq(20))
            .returning(|_, _| Ok(create_test_page(&["1"], 10, 1)));

        let store = ScenarioStore::new(api, 20);
        store.fetch_all(None, None).await.unwrap();

        assert_eq!(store.scenarios(), vec![create_test_scenario("1", 0)]);
        assert_eq!(
            store.window(),
            PageWindow {
                page: 1,
                per_page: 20,
                total: 10
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_all_discards_previous_listing() {
        let mut api = MockScenarioApi::new();
        api.expect_list()
            .times(1)
            .with(eq(1), eq(2))
            .returning(|_, _| Ok(create_test_page(&["1", "2"], 3, 1)));
        api.expect_list()
            .times(1)
            .with(eq(2), eq(2))
            .returning(|_, _| {
                let mut page = create_test_page(&["3"], 3, 2);
                page.per_page = Some(2);
                Ok(page)
            });

        let store = ScenarioStore::new(api, 2);
        store.fetch_all(Some(1), None).await.unwrap();
        assert!(store.window().has_next());

        store.fetch_all(Some(2), Some(2)).await.unwrap();

        assert_eq!(store.scenarios(), vec![create_test_scenario("3", 0)]);
        assert_eq!(store.window().page, 2);
        assert!(!store.window().has_next());
    }

    #[tokio::test]
    async fn test_failed_fetch_all_keeps_prior_listing() {
        let mut api = MockScenarioApi::new();
        let mut sequence = mockall::Sequence::new();
        api.expect_list()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok(create_test_page(&["1"], 10, 1)));
        api.expect_list()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Err(ApiError::Transport(String::from("connection reset"))));

        let store = ScenarioStore::new(api, 20);
        store.fetch_all(None, None).await.unwrap();
        assert!(store.fetch_all(Some(2), None).await.is_err());

        assert_eq!(store.scenarios(), vec![create_test_scenario("1", 0)]);
        assert_eq!(store.window().total, 10);
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let mut api = MockScenarioApi::new();
        api.expect_get()
            .times(1)
            .with(eq("1"))
            .returning(|id| Ok(create_test_scenario(id, 4)));

        let store = ScenarioStore::new(api, 20);
        store.fetch_by_id("1").await.unwrap();

        assert_eq!(store.current_id().as_deref(), Some("1"));
        assert_eq!(store.current().map(|scenario| scenario.keep_votes), Some(4));
    }

    #[tokio::test]
    async fn test_create_does_not_insert_locally() {
        let mut api = MockScenarioApi::new();
        api.expect_create()
            .times(1)
            .withf(|scenario: &NewScenario| scenario.opponent_archetype == "Burn")
            .returning(|_| Ok(create_test_scenario("new", 0)));

        let store = ScenarioStore::new(api, 20);
        let created = store
            .create(&NewScenario {
                decklist_id: String::from("d1"),
                opponent_archetype: String::from("Burn"),
                game_number: 1,
                on_play: false,
                num_cards: 7,
            })
            .await
            .unwrap();

        assert_eq!(created.id, "new");
        assert!(store.scenarios().is_empty());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_deserialize_tallies() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"_id": "1", "keep_votes": 3, "mulligan_votes": 1, "hand": ["Island"]}"#,
        )
        .unwrap();

        assert_eq!(scenario.cut_votes, 1);
        assert_eq!(scenario.total_votes(), 4);
        assert_eq!(scenario.keep_ratio(), Some(0.75));
    }

    #[test]
    fn test_total_votes_saturates() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"_id": "1", "keep_votes": 4294967295, "mulligan_votes": 1}"#,
        )
        .unwrap();

        assert_eq!(scenario.total_votes(), u32::MAX);
        assert_eq!(scenario.keep_ratio(), Some(1.0));
    }

    #[test]
    fn test_keep_ratio_without_votes() {
        assert_eq!(create_test_scenario("1", 0).keep_ratio(), None);
    }

    #[test]
    fn test_page_count() {
        let window = PageWindow {
            page: 1,
            per_page: 20,
            total: 41,
        };
        assert_eq!(window.page_count(), 3);
        assert!(window.has_next());

        let empty = PageWindow {
            page: 1,
            per_page: 20,
            total: 0,
        };
        assert_eq!(empty.page_count(), 0);
        assert!(!empty.has_next());
    }
}
