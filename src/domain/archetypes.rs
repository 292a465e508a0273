use crate::domain::utils::{fuzzy, normalise};
use std::collections::BTreeSet;

const STANDARD: &[&str] = &[
    "Azorius Control",
    "Domain Ramp",
    "Esper Midrange",
    "Golgari Midrange",
    "Mono Red Aggro",
    "Orzhov Midrange",
    "Rakdos Midrange",
    "Temur Rhinos",
    "Izzet Phoenix",
];

const MODERN: &[&str] = &[
    "Amulet Titan",
    "Burn",
    "Crashing Footfalls",
    "Death's Shadow",
    "Four-Color Control",
    "Hardened Scales",
    "Hammer Time",
    "Izzet Murktide",
    "Living End",
    "Mono Green Tron",
    "Rakdos Midrange",
    "Rhinos",
    "Scam (Grief)",
    "Temur Rhinos",
    "Yawgmoth",
];

const PIONEER: &[&str] = &[
    "Abzan Greasefang",
    "Azorius Control",
    "Boros Convoke",
    "Izzet Phoenix",
    "Lotus Field Combo",
    "Mono Green Devotion",
    "Rakdos Midrange",
    "Rakdos Sacrifice",
    "Spirits",
    "Temur Rhinos",
    "Waste Not",
];

const LEGACY: &[&str] = &[
    "ANT (Storm)",
    "Death and Taxes",
    "Delver",
    "Elves",
    "Grixis Control",
    "8-Cast",
    "Lands",
    "Moon Stompy",
    "Painter",
    "Reanimator",
    "Sneak and Show",
    "TES (Storm)",
    "Turbo Depths",
];

const VINTAGE: &[&str] = &[
    "Bazaar Hogaak",
    "Breach",
    "Doomsday",
    "Esper Control",
    "Jeskai",
    "Oath",
    "Paradoxical Outcome",
    "Shops",
    "Tinker",
    "White Eldrazi",
];

const COMMANDER: &[&str] = &[
    "Aggro",
    "Aristocrats",
    "Combo",
    "Control",
    "Group Hug",
    "Lands",
    "Midrange",
    "Reanimator",
    "Spellslinger",
    "Stax",
    "Stompy",
    "Tokens",
    "Tribal",
    "Voltron",
];

const PAUPER: &[&str] = &[
    "Affinity",
    "Azorius Familiars",
    "Boros Synthesizer",
    "Burn",
    "Caw-Gate",
    "Dimir Terror",
    "Elves",
    "Faeries",
    "Golgari Gardens",
    "Jeskai Ephemerate",
    "Kuldotha Red",
    "Mono Blue Terror",
    "Walls Combo",
];

pub const GENERIC: &[&str] = &["Aggro", "Control", "Combo", "Midrange", "Ramp", "Tempo"];

pub const FORMATS: &[(&str, &[&str])] = &[
    ("Standard", STANDARD),
    ("Modern", MODERN),
    ("Pioneer", PIONEER),
    ("Legacy", LEGACY),
    ("Vintage", VINTAGE),
    ("Commander", COMMANDER),
    ("Pauper", PAUPER),
];

/// Opponent archetypes offered for a format, or the generic list when the
/// format is unknown.
#[must_use]
pub fn archetypes(format: &str) -> &'static [&'static str] {
    FORMATS
        .iter()
        .find(|(name, _)| *name == format)
        .map_or(GENERIC, |(_, archetypes)| *archetypes)
}

#[must_use]
pub fn all_archetypes() -> Vec<&'static str> {
    FORMATS
        .iter()
        .flat_map(|(_, archetypes)| archetypes.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Best match for free text typed into the opponent field.
#[must_use]
pub fn closest_archetype(format: &str, query: &str) -> Option<&'static str> {
    let query = normalise(query);
    if query.trim().is_empty() {
        return None;
    }

    fuzzy::closest(&query, archetypes(format).iter().copied(), |archetype| {
        normalise(archetype)
    })
}
