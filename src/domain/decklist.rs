use crate::domain::resolver::unique_names;
use crate::domain::utils::latest::Latest;
use crate::ports::outbound::api::{ApiError, DecklistApi};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeckEntry {
    pub name: String,
    pub quantity: u32,
}

fn public() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Decklist {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub cards: Vec<DeckEntry>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default = "public")]
    pub is_public: bool,
}

impl Decklist {
    /// Distinct card names in list order, ready for batch resolution.
    #[must_use]
    pub fn card_names(&self) -> Vec<String> {
        let names: Vec<&str> = self.cards.iter().map(|entry| entry.name.as_str()).collect();
        unique_names(&names).into_iter().map(String::from).collect()
    }

    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.cards
            .iter()
            .fold(0_u32, |count, entry| count.saturating_add(entry.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDecklist {
    pub name: String,
    pub format: String,
    pub cards: Vec<DeckEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
}

/// Server-side decklists as last fetched. Every field is replaced wholesale
/// by its fetch; creating a decklist does not touch any of them.
pub struct DecklistStore<A> {
    api: A,
    decklists: Latest<Vec<Decklist>>,
    mine: Latest<Vec<Decklist>>,
    current: Latest<Option<Decklist>>,
}

impl<A> DecklistStore<A>
where
    A: DecklistApi + Send + Sync,
{
    pub fn new(api: A) -> Self {
        Self {
            api,
            decklists: Latest::new(Vec::new()),
            mine: Latest::new(Vec::new()),
            current: Latest::new(None),
        }
    }

    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        let ticket = self.decklists.ticket();
        let decklists = self.api.list().await?;
        log::debug!("Fetched {} public decklists", decklists.len());
        self.decklists.apply(ticket, decklists);
        Ok(())
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<(), ApiError> {
        let ticket = self.current.ticket();
        let decklist = self.api.get(id).await?;
        self.current.apply(ticket, Some(decklist));
        Ok(())
    }

    pub async fn fetch_mine(&self) -> Result<(), ApiError> {
        let ticket = self.mine.ticket();
        let decklists = self.api.mine().await?;
        log::debug!("Fetched {} own decklists", decklists.len());
        self.mine.apply(ticket, decklists);
        Ok(())
    }

    pub async fn create(&self, decklist: &NewDecklist) -> Result<Decklist, ApiError> {
        let created = self.api.create(decklist).await?;
        log::info!("Created decklist '{}' ({})", created.name, created.id);
        Ok(created)
    }

    #[must_use]
    pub fn decklists(&self) -> Vec<Decklist> {
        self.decklists.get()
    }

    #[must_use]
    pub fn my_decklists(&self) -> Vec<Decklist> {
        self.mine.get()
    }

    #[must_use]
    pub fn current(&self) -> Option<Decklist> {
        self.current.get()
    }
}
