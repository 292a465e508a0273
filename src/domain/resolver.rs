use crate::domain::card::Card;
use crate::ports::outbound::card_lookup::CardLookup;
use futures::future::join_all;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Memoising card lookup.
///
/// Successful lookups are cached under the name exactly as queried, so a
/// repeated query hits the cache even when the service canonicalises the
/// name. Failures are logged and never cached.
pub struct CardResolver<L> {
    lookup: L,
    cache: RwLock<HashMap<String, Card>>,
}

impl<L> CardResolver<L>
where
    L: CardLookup + Send + Sync,
{
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub async fn resolve(&self, name: &str) -> Option<Card> {
        let cached = self.cache.read().await.get(name).cloned();
        if let Some(card) = cached {
            log::debug!("Cache hit for card '{name}'");
            return Some(card);
        }

        let start = Instant::now();
        match self.lookup.named(name).await {
            Ok(card) => {
                log::info!(
                    "Found match '{}' for query '{name}' in {} ms",
                    card.name,
                    start.elapsed().as_millis()
                );
                self.cache
                    .write()
                    .await
                    .insert(name.to_string(), card.clone());
                Some(card)
            }
            Err(why) => {
                log::warn!("Failed to fetch card '{name}' - {why}");
                None
            }
        }
    }

    /// Resolves each distinct name once, concurrently. Results follow the
    /// first-occurrence order of the distinct names.
    pub async fn resolve_many<S: AsRef<str>>(&self, names: &[S]) -> Vec<Option<Card>> {
        join_all(
            unique_names(names)
                .into_iter()
                .map(|name| self.resolve(name)),
        )
        .await
    }

    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }

    pub async fn is_cached(&self, name: &str) -> bool {
        self.cache.read().await.contains_key(name)
    }

    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[must_use]
pub fn unique_names<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| seen.insert(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{ImageSize, ImageUris};
    use crate::ports::outbound::card_lookup::{CardLookupError, MockCardLookup};
    use mockall::predicate::*;

    fn create_test_card(name: &str) -> Card {
        Card {
            name: name.to_string(),
            image_uris: Some(ImageUris::from([(ImageSize::Normal, "normal.jpg")])),
            ..Card::default()
        }
    }

    #[tokio::test]
    async fn test_resolve_fetches_card() {
        let mut lookup = MockCardLookup::new();
        lookup
            .expect_named()
            .times(1)
            .with(eq("Lightning Bolt"))
            .returning(|name| Ok(create_test_card(name)));

        let resolver = CardResolver::new(lookup);
        let card = resolver.resolve("Lightning Bolt").await;

        assert_eq!(card, Some(create_test_card("Lightning Bolt")));
    }

    #[tokio::test]
    async fn test_second_resolve_is_cache_hit() {
        let mut lookup = MockCardLookup::new();
        lookup
            .expect_named()
            .times(1)
            .returning(|name| Ok(create_test_card(name)));

        let resolver = CardResolver::new(lookup);
        let first = resolver.resolve("Lightning Bolt").await;
        let second = resolver.resolve("Lightning Bolt").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cached_under_queried_name() {
        let mut lookup = MockCardLookup::new();
        lookup
            .expect_named()
            .times(1)
            .with(eq("lightning blt"))
            .returning(|_| Ok(create_test_card("Lightning Bolt")));

        let resolver = CardResolver::new(lookup);
        resolver.resolve("lightning blt").await;

        assert!(resolver.is_cached("lightning blt").await);
        assert!(!resolver.is_cached("Lightning Bolt").await);
        assert_eq!(
            resolver.resolve("lightning blt").await.map(|card| card.name),
            Some(String::from("Lightning Bolt"))
        );
    }

    #[tokio::test]
    async fn test_failure_returns_none_and_is_not_cached() {
        let mut lookup = MockCardLookup::new();
        lookup
            .expect_named()
            .times(2)
            .returning(|name| Err(CardLookupError::NotFound(name.to_string())));

        let resolver = CardResolver::new(lookup);

        assert_eq!(resolver.resolve("Invalid Card").await, None);
        assert!(!resolver.is_cached("Invalid Card").await);
        assert_eq!(resolver.resolve("Invalid Card").await, None);
    }

    #[tokio::test]
    async fn test_retry_after_transport_failure() {
        let mut lookup = MockCardLookup::new();
        let mut sequence = mockall::Sequence::new();
        lookup
            .expect_named()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Err(CardLookupError::Transport(String::from("timed out"))));
        lookup
            .expect_named()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|name| Ok(create_test_card(name)));

        let resolver = CardResolver::new(lookup);

        assert_eq!(resolver.resolve("Opt").await, None);
        assert_eq!(resolver.resolve("Opt").await, Some(create_test_card("Opt")));
        assert_eq!(resolver.cached_count().await, 1);
    }

    #[tokio::test]
    async fn test_resolve_many_deduplicates() {
        let mut lookup = MockCardLookup::new();
        lookup
            .expect_named()
            .times(1)
            .with(eq("Card 1"))
            .returning(|name| Ok(create_test_card(name)));

        let resolver = CardResolver::new(lookup);
        let results = resolver.resolve_many(&["Card 1", "Card 1", "Card 1"]).await;

        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_many_one_lookup_per_distinct_name() {
        let mut lookup = MockCardLookup::new();
        lookup
            .expect_named()
            .times(1)
            .with(eq("Card 1"))
            .returning(|name| Ok(create_test_card(name)));
        lookup
            .expect_named()
            .times(1)
            .with(eq("Card 2"))
            .returning(|name| Err(CardLookupError::NotFound(name.to_string())));

        let resolver = CardResolver::new(lookup);
        let names = vec![
            String::from("Card 1"),
            String::from("Card 2"),
            String::from("Card 1"),
        ];
        let results = resolver.resolve_many(&names).await;

        assert_eq!(results, vec![Some(create_test_card("Card 1")), None]);
    }

    #[tokio::test]
    async fn test_clear_forces_new_lookup() {
        let mut lookup = MockCardLookup::new();
        lookup
            .expect_named()
            .times(2)
            .returning(|name| Ok(create_test_card(name)));

        let resolver = CardResolver::new(lookup);
        resolver.resolve("Card").await;
        resolver.clear().await;

        assert_eq!(resolver.cached_count().await, 0);
        resolver.resolve("Card").await;
    }

    #[test]
    fn test_unique_names_keeps_first_occurrence_order() {
        let names = ["Opt", "Brainstorm", "Opt", "Ponder", "Brainstorm"];
        assert_eq!(unique_names(&names), vec!["Opt", "Brainstorm", "Ponder"]);
    }
}
