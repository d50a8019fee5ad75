//! The closed set of 18 entry categories
//!
//! Every consumer (type fetches, filters, icon URLs, CLI parsing) reads the
//! category list from here, keyed by the API's stable numeric id.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Entry category, discriminant = PokeAPI type id
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum PokemonType {
    Normal = 1,
    Fighting = 2,
    Flying = 3,
    Poison = 4,
    Ground = 5,
    Rock = 6,
    Bug = 7,
    Ghost = 8,
    Steel = 9,
    Fire = 10,
    Water = 11,
    Grass = 12,
    Electric = 13,
    Psychic = 14,
    Ice = 15,
    Dragon = 16,
    Dark = 17,
    Fairy = 18,
}

/// Number of categories in the registry
pub const TYPE_COUNT: usize = 18;

impl PokemonType {
    /// Stable numeric id used by the API and by the type icon sprites
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a category by numeric id
    pub fn from_id(id: u8) -> Option<Self> {
        Self::iter().find(|t| t.id() == id)
    }

    /// Look up a category by its lowercase API name
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// All categories in id order
    pub fn all() -> impl Iterator<Item = PokemonType> {
        Self::iter()
    }
}

/// Icon id for a type name as it appears in payloads (0 when unknown)
pub fn icon_id(type_name: &str) -> u8 {
    PokemonType::from_name(type_name).map(PokemonType::id).unwrap_or(0)
}

/// Parse a user-supplied list like `["fire", "Flying"]` into categories
pub fn parse_types(names: &[String]) -> Result<Vec<PokemonType>> {
    let mut types = Vec::with_capacity(names.len());
    for raw in names {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        match PokemonType::from_name(name) {
            Some(t) => types.push(t),
            None => {
                let known: Vec<String> = PokemonType::all().map(|t| t.to_string()).collect();
                anyhow::bail!(
                    "Unknown type: '{}'\n\nSupported types:\n  {}",
                    name,
                    known.join(", ")
                );
            }
        }
    }
    Ok(types)
}
