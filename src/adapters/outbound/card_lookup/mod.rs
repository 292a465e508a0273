pub mod scryfall;

use crate::adapters::outbound::card_lookup::scryfall::Scryfall;
use crate::config::Config;
use crate::ports::outbound::card_lookup::{CardLookup, CardLookupError};

pub fn init_card_lookup(config: &Config) -> Result<impl CardLookup, CardLookupError> {
    Scryfall::create(config)
}
