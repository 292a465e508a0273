pub mod api;
pub mod card_lookup;
pub mod token_store;
