pub mod card_lookup;
pub mod rest;
pub mod token_store;
