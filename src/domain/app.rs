use crate::domain::access::{self, Access};
use crate::domain::card::ImageSize;
use crate::domain::decklist::DecklistStore;
use crate::domain::image::image_url;
use crate::domain::resolver::{unique_names, CardResolver};
use crate::domain::scenario::ScenarioStore;
use crate::domain::session::{Credentials, Session};
use crate::domain::vote::VoteCoordinator;
use crate::ports::outbound::api::{AuthApi, DecklistApi, ScenarioApi, VoteApi};
use crate::ports::outbound::card_lookup::CardLookup;
use crate::ports::outbound::token_store::TokenStore;
use std::sync::Arc;

pub struct App<L, TS, A> {
    pub resolver: CardResolver<L>,
    pub session: Session<A, TS>,
    pub decklists: DecklistStore<A>,
    pub scenarios: Arc<ScenarioStore<A>>,
    pub votes: VoteCoordinator<A, A>,
}

impl<L, TS, A> App<L, TS, A>
where
    L: CardLookup + Send + Sync,
    TS: TokenStore + Send + Sync,
    A: AuthApi + DecklistApi + ScenarioApi + VoteApi + Clone + Send + Sync,
{
    /// `api` must attach the bearer token from `credentials`.
    pub fn new(lookup: L, store: TS, api: A, credentials: Credentials, page_size: u32) -> Self {
        let scenarios = Arc::new(ScenarioStore::new(api.clone(), page_size));

        Self {
            resolver: CardResolver::new(lookup),
            session: Session::restore(api.clone(), store, credentials),
            decklists: DecklistStore::new(api.clone()),
            votes: VoteCoordinator::new(api, scenarios.clone()),
            scenarios,
        }
    }

    #[must_use]
    pub fn guard(&self, requested: &str) -> Access {
        access::guard(requested, self.session.is_authenticated())
    }

    /// Image URLs for the distinct card names given, in first-occurrence order.
    pub async fn card_images<S: AsRef<str>>(
        &self,
        names: &[S],
        size: ImageSize,
    ) -> Vec<(String, Option<String>)> {
        let cards = self.resolver.resolve_many(names).await;

        unique_names(names)
            .into_iter()
            .zip(cards)
            .map(|(name, card)| {
                let url = image_url(card.as_ref(), size).map(String::from);
                (name.to_string(), url)
            })
            .collect()
    }
}
