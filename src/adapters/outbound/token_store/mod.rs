pub mod file_system;

use crate::adapters::outbound::token_store::file_system::FileSystem;
use crate::config::Config;
use crate::ports::outbound::token_store::TokenStore;

#[must_use]
pub fn init_token_store(config: &Config) -> impl TokenStore {
    FileSystem::create(config)
}
