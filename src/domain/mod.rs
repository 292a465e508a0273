pub mod access;
pub mod app;
pub mod archetypes;
pub mod card;
pub mod decklist;
pub mod image;
pub mod resolver;
pub mod scenario;
pub mod session;
pub mod user;
pub mod utils;
pub mod vote;
